//! Writer implementations

pub mod buffer;
pub mod console;
pub mod json;

pub use buffer::SharedBuffer;
pub use console::ConsoleWriter;
pub use json::JsonWriter;

pub use crate::core::RecordWriter;
