use chrono::NaiveDate;

/// How a raw query-string value is converted before it is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Decimal,
    /// `YYYY-MM-DD`
    Date,
    /// Only `true` / `false`, case-insensitive.
    Boolean,
    /// Substring match, bound as `%value%`.
    Pattern,
}

/// A parsed filter value, ready to be bound as a positional parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Decimal(f64),
    Date(NaiveDate),
    Boolean(bool),
    Pattern(String),
}

impl FilterValue {
    /// Parse-or-absent conversion shared by every filter endpoint.
    ///
    /// Returns `None` for blank input and for input that does not parse as
    /// `kind`; such values never reach the query.
    pub fn parse(kind: ValueKind, raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match kind {
            ValueKind::Text => Some(Self::Text(raw.to_string())),
            ValueKind::Integer => raw.parse::<i64>().ok().map(Self::Integer),
            ValueKind::Decimal => raw
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .map(Self::Decimal),
            ValueKind::Date => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .map(Self::Date),
            ValueKind::Boolean => parse_bool(raw).map(Self::Boolean),
            ValueKind::Pattern => Some(Self::Pattern(format!("%{raw}%"))),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl From<FilterValue> for sea_orm::Value {
    fn from(value: FilterValue) -> Self {
        match value {
            FilterValue::Text(text) | FilterValue::Pattern(text) => text.into(),
            FilterValue::Integer(number) => number.into(),
            FilterValue::Decimal(number) => number.into(),
            FilterValue::Date(date) => date.into(),
            FilterValue::Boolean(flag) => flag.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_accepts_only_true_and_false() {
        assert_eq!(
            FilterValue::parse(ValueKind::Boolean, "true"),
            Some(FilterValue::Boolean(true))
        );
        assert_eq!(
            FilterValue::parse(ValueKind::Boolean, "FALSE"),
            Some(FilterValue::Boolean(false))
        );
        assert_eq!(FilterValue::parse(ValueKind::Boolean, "yes"), None);
        assert_eq!(FilterValue::parse(ValueKind::Boolean, "1"), None);
    }

    #[test]
    fn test_numbers_reject_garbage() {
        assert_eq!(FilterValue::parse(ValueKind::Integer, "12a"), None);
        assert_eq!(FilterValue::parse(ValueKind::Decimal, "diez"), None);
        assert_eq!(FilterValue::parse(ValueKind::Decimal, "NaN"), None);
        assert_eq!(FilterValue::parse(ValueKind::Decimal, "inf"), None);
        assert_eq!(
            FilterValue::parse(ValueKind::Decimal, "10.5"),
            Some(FilterValue::Decimal(10.5))
        );
        assert_eq!(
            FilterValue::parse(ValueKind::Integer, " 7 "),
            Some(FilterValue::Integer(7))
        );
    }

    #[test]
    fn test_dates_use_iso_format() {
        assert_eq!(
            FilterValue::parse(ValueKind::Date, "2024-01-31"),
            NaiveDate::from_ymd_opt(2024, 1, 31).map(FilterValue::Date)
        );
        assert_eq!(FilterValue::parse(ValueKind::Date, "31/01/2024"), None);
        assert_eq!(FilterValue::parse(ValueKind::Date, "2024-02-30"), None);
    }

    #[test]
    fn test_pattern_is_wrapped_in_wildcards() {
        assert_eq!(
            FilterValue::parse(ValueKind::Pattern, "brake"),
            Some(FilterValue::Pattern("%brake%".to_string()))
        );
    }

    #[test]
    fn test_binds_native_types() {
        assert_eq!(
            sea_orm::Value::from(FilterValue::Boolean(true)),
            sea_orm::Value::Bool(Some(true))
        );
        assert_eq!(
            sea_orm::Value::from(FilterValue::Integer(3)),
            sea_orm::Value::BigInt(Some(3))
        );
        assert_eq!(
            sea_orm::Value::from(FilterValue::Decimal(1.5)),
            sea_orm::Value::Double(Some(1.5))
        );
    }
}
