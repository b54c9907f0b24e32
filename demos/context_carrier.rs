//! Request-scoped logger options
//!
//! A middleware-like function attaches logger options to each request;
//! the handler builds its logger from the request.
//!
//! Run with: cargo run --example context_carrier

use http::Request;
use rtlog::prelude::*;

fn with_request_logging<B>(mut request: Request<B>, request_id: &str) -> Request<B> {
    let request_id = request_id.to_string();
    request.with_logger_options(OptCtx::new(vec![
        LoggerOption::level("debug"),
        LoggerOption::console_writer(),
        LoggerOption::timestamp_format(TimestampFormat::Rfc3339),
        LoggerOption::new(move |opt| {
            if request_id.starts_with("trace-") {
                opt.level = LogLevel::Trace;
            }
        }),
    ]));
    request
}

fn handle<B>(request: &Request<B>) {
    let mut logger = request.logger();
    logger.set_permanent("path", request.uri().path());
    logger.set_permanent("method", request.method().as_str());

    logger.trace("only visible for traced requests");
    logger.debug("handler entered");
    logger.field("status", 200).info("request handled");
}

fn main() {
    println!("=== rtlog - Context Carrier Example ===\n");

    for (uri, id) in [("/health", "req-1"), ("/orders/42", "trace-2")] {
        let request = Request::builder()
            .uri(uri)
            .body(())
            .unwrap_or_else(|_| Request::new(()));
        let request = with_request_logging(request, id);
        handle(&request);
    }

    println!("\nRequests without options fall back to LOG_LEVEL / LOG_FORMAT:");
    handle(&Request::new(()));
}
