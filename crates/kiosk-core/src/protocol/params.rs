//! Query parameter values.
//!
//! The device API only understands strings in the query string, but commands
//! are more naturally expressed with integers (volume, brightness) and
//! booleans (boolean settings).  [`ParamValue`] keeps the original type until
//! the moment of serialization, and carries an explicit [`ParamValue::Null`]
//! for optional arguments that were not supplied.

use std::fmt;

/// A single envelope value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Absent optional argument.  Never serialized.
    Null,
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl ParamValue {
    /// `true` when the value must be left out of the query string.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Stringified form used on the wire, or `None` for [`ParamValue::Null`].
    pub fn to_query_value(&self) -> Option<String> {
        if self.is_null() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, i8, i16, i32, i64);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_is_sent_verbatim() {
        let v = ParamValue::from("http://example.com");
        assert_eq!(v.to_query_value().as_deref(), Some("http://example.com"));
    }

    #[test]
    fn test_integer_value_is_decimal() {
        assert_eq!(ParamValue::from(50u8).to_query_value().as_deref(), Some("50"));
        assert_eq!(ParamValue::from(-3i32).to_query_value().as_deref(), Some("-3"));
    }

    #[test]
    fn test_bool_value_is_lowercase() {
        assert_eq!(ParamValue::from(true).to_query_value().as_deref(), Some("true"));
        assert_eq!(ParamValue::from(false).to_query_value().as_deref(), Some("false"));
    }

    #[test]
    fn test_float_value_uses_display() {
        assert_eq!(ParamValue::from(0.5).to_query_value().as_deref(), Some("0.5"));
    }

    #[test]
    fn test_none_option_becomes_null() {
        // Arrange
        let stream: Option<u8> = None;

        // Act
        let v = ParamValue::from(stream);

        // Assert
        assert!(v.is_null());
        assert_eq!(v.to_query_value(), None);
    }

    #[test]
    fn test_some_option_keeps_inner_value() {
        let v = ParamValue::from(Some(3u8));
        assert_eq!(v, ParamValue::Int(3));
    }
}
