//! Error types for row conversion.
//!
//! A missing optional value is not an error, and a missing identity field is
//! handled by the identifier fallbacks. What remains here aborts the whole row.

use thiserror::Error;

use crate::model::LiteralError;
use crate::row::Field;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Reasons a row cannot be converted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Anonymisation has no code for this site name.
    #[error("unrecognized site: {0:?}")]
    UnrecognizedSite(String),

    /// A structured value (date, number, flag, feature blob) failed to parse.
    #[error("malformed field `{field}`: {reason}")]
    MalformedField { field: Field, reason: String },
}

impl ConvertError {
    pub fn malformed(field: Field, reason: impl ToString) -> Self {
        ConvertError::MalformedField {
            field,
            reason: reason.to_string(),
        }
    }

    /// The offending column, when there is one.
    pub fn field(&self) -> Option<Field> {
        match self {
            ConvertError::UnrecognizedSite(_) => Some(Field::Site),
            ConvertError::MalformedField { field, .. } => Some(*field),
        }
    }
}

/// Attach the field name to a literal parse failure.
pub(crate) trait FieldContext<T> {
    fn field(self, field: Field) -> Result<T>;
}

impl<T> FieldContext<T> for std::result::Result<T, LiteralError> {
    fn field(self, field: Field) -> Result<T> {
        self.map_err(|e| ConvertError::malformed(field, e))
    }
}

/// A rejected row, identified for the caller's report.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("row (site: {}, listing_id: {}) rejected: {source}", display_opt(.site), display_opt(.listing_id))]
pub struct RowError {
    pub site: Option<String>,
    pub listing_id: Option<String>,
    #[source]
    pub source: ConvertError,
}

fn display_opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("-")
}
