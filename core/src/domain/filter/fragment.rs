use std::fmt;

use super::value::FilterValue;

/// Positional bind marker rendered as `$n` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Placeholder(usize);

impl Placeholder {
    pub fn ordinal(self) -> usize {
        self.0
    }

    fn next(self) -> Self {
        Placeholder(self.0 + 1)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Predicate clauses plus the values bound to their placeholders.
///
/// Placeholders are handed out from the parameter count at push time, so the
/// Nth placeholder always refers to the Nth parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFragment {
    clauses: Vec<String>,
    params: Vec<FilterValue>,
}

impl QueryFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_placeholder(&self) -> Placeholder {
        Placeholder(self.params.len() + 1)
    }

    /// Appends one clause bound to one value. `render` receives the
    /// placeholder reserved for `value` and may use it more than once.
    pub fn push<F>(&mut self, value: FilterValue, render: F)
    where
        F: FnOnce(Placeholder) -> String,
    {
        let placeholder = self.next_placeholder();
        self.clauses.push(render(placeholder));
        self.params.push(value);
    }

    /// Appends `column BETWEEN $n AND $n+1`.
    pub fn push_between(&mut self, column: &str, low: FilterValue, high: FilterValue) {
        let from = self.next_placeholder();
        let to = from.next();
        self.clauses.push(format!("{column} BETWEEN {from} AND {to}"));
        self.params.push(low);
        self.params.push(high);
    }

    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn params(&self) -> &[FilterValue] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// `WHERE 1=1` followed by every clause joined with `AND`.
    pub fn where_clause(&self) -> String {
        let mut sql = String::from("WHERE 1=1");
        for clause in &self.clauses {
            sql.push_str(" AND ");
            sql.push_str(clause);
        }
        sql
    }

    pub fn values(&self) -> Vec<sea_orm::Value> {
        self.params.iter().cloned().map(sea_orm::Value::from).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use chrono::NaiveDate;

    use super::*;

    /// Ordinals in order of first appearance across all clauses.
    pub(crate) fn placeholder_ordinals(fragment: &QueryFragment) -> Vec<usize> {
        let mut ordinals = Vec::new();
        for clause in fragment.clauses() {
            let mut rest = clause.as_str();
            while let Some(start) = rest.find('$') {
                let digits: String = rest[start + 1..]
                    .chars()
                    .take_while(|c| c.is_ascii_digit())
                    .collect();
                rest = &rest[start + 1 + digits.len()..];
                if let Ok(ordinal) = digits.parse::<usize>()
                    && !ordinals.contains(&ordinal)
                {
                    ordinals.push(ordinal);
                }
            }
        }
        ordinals
    }

    #[test]
    fn test_empty_fragment_is_neutral() {
        let fragment = QueryFragment::new();
        assert!(fragment.is_empty());
        assert_eq!(fragment.where_clause(), "WHERE 1=1");
        assert!(fragment.values().is_empty());
    }

    #[test]
    fn test_push_hands_out_contiguous_placeholders() {
        let mut fragment = QueryFragment::new();
        fragment.push(FilterValue::Text("a".into()), |p| format!("x = {p}"));
        fragment.push(FilterValue::Integer(2), |p| format!("y >= {p}"));
        fragment.push(FilterValue::Pattern("%c%".into()), |p| {
            format!("(n ILIKE {p} OR d ILIKE {p})")
        });

        assert_eq!(
            fragment.where_clause(),
            "WHERE 1=1 AND x = $1 AND y >= $2 AND (n ILIKE $3 OR d ILIKE $3)"
        );
        assert_eq!(placeholder_ordinals(&fragment), vec![1, 2, 3]);
        assert_eq!(fragment.params().len(), 3);
    }

    #[test]
    fn test_between_consumes_two_placeholders() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let mut fragment = QueryFragment::new();
        fragment.push(FilterValue::Text("pendiente".into()), |p| format!("estado = {p}"));
        fragment.push_between("fecha", FilterValue::Date(start), FilterValue::Date(end));

        assert_eq!(
            fragment.clauses(),
            ["estado = $1".to_string(), "fecha BETWEEN $2 AND $3".to_string()]
        );
        assert_eq!(placeholder_ordinals(&fragment), vec![1, 2, 3]);
        assert_eq!(fragment.values().len(), 3);
        assert_eq!(fragment.next_placeholder().ordinal(), 4);
    }
}
