use std::collections::{BTreeMap, HashMap};

use super::value::{FilterValue, ValueKind};

/// Optional constraints supplied by a caller for one filter endpoint.
///
/// A key whose value is empty or only whitespace is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterRequest {
    values: BTreeMap<String, String>,
}

impl FilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Trimmed value for `key`, `None` when missing or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn parse(&self, key: &str, kind: ValueKind) -> Option<FilterValue> {
        self.get(key).and_then(|raw| FilterValue::parse(kind, raw))
    }

    /// Non-negative integer for `key`, or `default` when absent or unparseable.
    pub fn integer_or(&self, key: &str, default: i64) -> i64 {
        match self.parse(key, ValueKind::Integer) {
            Some(FilterValue::Integer(value)) if value >= 0 => value,
            _ => default,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.values().all(|value| value.trim().is_empty())
    }
}

impl<K, V> FromIterator<(K, V)> for FilterRequest
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = FilterRequest::new();
        for (key, value) in iter {
            request.insert(key, value);
        }
        request
    }
}

impl From<HashMap<String, String>> for FilterRequest {
    fn from(map: HashMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_absent() {
        let request = FilterRequest::new().with("estado", "   ").with("categoria", "");
        assert_eq!(request.get("estado"), None);
        assert_eq!(request.get("categoria"), None);
        assert!(request.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let request = FilterRequest::new().with("estado", " pendiente ");
        assert_eq!(request.get("estado"), Some("pendiente"));
    }

    #[test]
    fn test_integer_or_falls_back_to_default() {
        let request = FilterRequest::new()
            .with("limite", "abc")
            .with("negativo", "-3")
            .with("valido", "25");
        assert_eq!(request.integer_or("limite", 10), 10);
        assert_eq!(request.integer_or("negativo", 10), 10);
        assert_eq!(request.integer_or("valido", 10), 25);
        assert_eq!(request.integer_or("ausente", 60), 60);
    }

    #[test]
    fn test_collect_from_pairs() {
        let request: FilterRequest = vec![("marca", "Toyota"), ("modelo", "Corolla")]
            .into_iter()
            .collect();
        assert_eq!(request.get("marca"), Some("Toyota"));
        assert_eq!(request.get("modelo"), Some("Corolla"));
    }
}
