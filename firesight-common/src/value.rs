use serde::{Deserialize, Serialize};

/// The result of reading a raw field as a number.
///
/// Fields that are missing, null, blank or not a finite decimal number are
/// `Absent`. Absence is never an error; each consumer decides whether an absent
/// value contributes zero or is excluded from its sample.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CoercedValue {
    Number(f64),
    #[default]
    Absent,
}

impl CoercedValue {
    /// Parses a raw field value. Leading and trailing whitespace is ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Absent;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::Absent,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Number(v) => Some(v),
            Self::Absent => None,
        }
    }

    /// Value used by sums, where an absent field contributes nothing
    pub fn or_zero(self) -> f64 {
        self.value().unwrap_or(0.0)
    }

    pub fn is_absent(self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<Option<f64>> for CoercedValue {
    fn from(value: Option<f64>) -> Self {
        match value {
            Some(v) if v.is_finite() => Self::Number(v),
            _ => Self::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rstest::rstest;

    #[rstest]
    #[case("42", Some(42.0))]
    #[case("  7.5 ", Some(7.5))]
    #[case("-3", Some(-3.0))]
    #[case("1e3", Some(1000.0))]
    #[case("0", Some(0.0))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("n/a", None)]
    #[case("12 acres", None)]
    #[case("NaN", None)]
    #[case("inf", None)]
    fn test_parse(#[case] raw: &str, #[case] expected: Option<f64>) {
        assert_eq!(CoercedValue::parse(Some(raw)).value(), expected);
    }

    #[test]
    fn test_missing_is_absent() {
        let value = CoercedValue::parse(None);
        assert!(value.is_absent());
        assert_approx_eq!(f64, value.or_zero(), 0.0);
    }

    #[test]
    fn test_from_option_rejects_non_finite() {
        assert!(CoercedValue::from(Some(f64::NAN)).is_absent());
        assert_eq!(CoercedValue::from(Some(2.0)), CoercedValue::Number(2.0));
        assert!(CoercedValue::from(None).is_absent());
    }
}
