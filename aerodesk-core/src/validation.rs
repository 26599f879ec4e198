//! Validation error types
//!
//! Produced while binding submitted form text to catalog columns, before any
//! storage access happens.

use std::fmt;

/// A problem with one submitted field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Required field is missing or empty
    Missing { field: &'static str },

    /// Text exceeds the column's maximum length
    TooLong { field: &'static str, max: usize },

    /// Text does not parse as the column's type
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Submitted name is not a column of the entity
    UnknownField { field: String },
}

impl FieldError {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. } => *field,
            Self::UnknownField { field } => field.as_str(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{} must be {}", field, reason),
            Self::UnknownField { field } => write!(f, "unknown field '{}'", field),
        }
    }
}

impl std::error::Error for FieldError {}

/// Every field problem found in one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Offending field names, in submission order
    pub fn fields(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.field().to_owned()).collect()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<FieldError> for ValidationError {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Please correct the following: ")?;
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FieldError::TooLong {
            field: "flightnumber",
            max: 20,
        };
        assert_eq!(
            err.to_string(),
            "flightnumber exceeds maximum length of 20 characters"
        );
    }

    #[test]
    fn lists_every_field() {
        let mut err = ValidationError::default();
        err.push(FieldError::Missing { field: "firstname" });
        err.push(FieldError::InvalidFormat {
            field: "dateofbirth",
            reason: "a date (YYYY-MM-DD)",
        });

        assert_eq!(err.fields(), vec!["firstname", "dateofbirth"]);
        assert_eq!(
            err.to_string(),
            "Please correct the following: firstname is required; dateofbirth must be a date (YYYY-MM-DD)"
        );
    }

    #[test]
    fn empty_is_ok() {
        assert!(ValidationError::default().into_result().is_ok());
    }
}
