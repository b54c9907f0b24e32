//! Normalization of error values into the `"error"` field

use super::field::{FieldValue, Fields};

/// Key under which errors are attached to a record.
pub const ERROR_FIELD_KEY: &str = "error";

/// An error that knows its own structured representation.
///
/// Errors implementing this trait are attached as-is through
/// [`Entry::structured_error_field`](crate::Entry::structured_error_field);
/// all other errors are reduced to `{"message": <Display text>}`.
///
/// ```
/// use rtlog::{FieldValue, StructuredError};
///
/// #[derive(Debug, serde::Serialize)]
/// struct QuotaExceeded {
///     limit: u32,
/// }
///
/// impl std::fmt::Display for QuotaExceeded {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "quota of {} exceeded", self.limit)
///     }
/// }
///
/// impl std::error::Error for QuotaExceeded {}
///
/// impl StructuredError for QuotaExceeded {
///     fn to_structured(&self) -> FieldValue {
///         FieldValue::from_serialize(self)
///     }
/// }
/// ```
pub trait StructuredError: std::error::Error {
    fn to_structured(&self) -> FieldValue;
}

/// Normalized form of an error, ready to be stored as a field value.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorValue {
    /// The error's own structured representation
    Structured(FieldValue),
    /// Display text of an error without a structured representation
    Message(String),
}

impl ErrorValue {
    pub fn plain<E: std::error::Error + ?Sized>(err: &E) -> Self {
        ErrorValue::Message(err.to_string())
    }

    pub fn structured<E: StructuredError + ?Sized>(err: &E) -> Self {
        ErrorValue::Structured(err.to_structured())
    }
}

impl From<ErrorValue> for FieldValue {
    fn from(value: ErrorValue) -> Self {
        match value {
            ErrorValue::Structured(v) => v,
            ErrorValue::Message(message) => {
                FieldValue::Object(Fields::new().with_field("message", message))
            }
        }
    }
}
