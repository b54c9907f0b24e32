//! Logger options carried in request extensions
//!
//! Middleware attaches an [`OptCtx`] to a request; handlers further down
//! build a logger from it with [`new_logger`] or [`LoggerContextExt::logger`].
//! The options live under a private key, so only this module can read them.
//!
//! A fresh logger is built on every call. Handlers that log in a loop should
//! build it once and reuse it.
//!
//! # Example
//!
//! ```
//! use rtlog::prelude::*;
//!
//! let buf = SharedBuffer::new();
//! let mut request = http::Request::new(());
//! request.with_logger_options(OptCtx::new(vec![
//!     LoggerOption::writer(JsonWriter::new(buf.clone())),
//! ]));
//!
//! request.logger().field("path", "/health").info("handled");
//! assert!(buf.contents().contains(r#""path":"/health""#));
//! ```

use crate::core::{Logger, LoggerOption};
use http::{Extensions, Request};

/// Options a request-scoped logger is built from
#[derive(Debug, Clone, Default)]
pub struct OptCtx {
    pub logger_options: Vec<LoggerOption>,
}

impl OptCtx {
    pub fn new(logger_options: Vec<LoggerOption>) -> Self {
        Self { logger_options }
    }

    fn build(&self) -> Logger {
        Logger::with_options(&self.logger_options)
    }
}

#[derive(Clone)]
struct OptCtxKey(OptCtx);

/// Copy of `parent` that also carries `ctx`
pub fn new_context(parent: &Extensions, ctx: OptCtx) -> Extensions {
    let mut derived = parent.clone();
    derived.insert(OptCtxKey(ctx));
    derived
}

/// Logger built from the carried options, or from the environment defaults
/// when `ext` carries none
pub fn new_logger(ext: &Extensions) -> Logger {
    match ext.get::<OptCtxKey>() {
        Some(OptCtxKey(ctx)) => ctx.build(),
        None => Logger::new(),
    }
}

/// Attach and retrieve logger options on request-scoped values
pub trait LoggerContextExt {
    /// Carry `ctx`, replacing any options attached earlier
    fn with_logger_options(&mut self, ctx: OptCtx);

    fn logger_options(&self) -> Option<&OptCtx>;

    fn logger(&self) -> Logger;
}

impl LoggerContextExt for Extensions {
    fn with_logger_options(&mut self, ctx: OptCtx) {
        self.insert(OptCtxKey(ctx));
    }

    fn logger_options(&self) -> Option<&OptCtx> {
        self.get::<OptCtxKey>().map(|key| &key.0)
    }

    fn logger(&self) -> Logger {
        new_logger(self)
    }
}

impl<B> LoggerContextExt for Request<B> {
    fn with_logger_options(&mut self, ctx: OptCtx) {
        self.extensions_mut().with_logger_options(ctx);
    }

    fn logger_options(&self) -> Option<&OptCtx> {
        self.extensions().logger_options()
    }

    fn logger(&self) -> Logger {
        new_logger(self.extensions())
    }
}
