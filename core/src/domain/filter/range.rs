use chrono::NaiveDate;

use super::{
    fragment::QueryFragment,
    request::FilterRequest,
    value::{FilterValue, ValueKind},
};

pub const START_DATE_KEY: &str = "fecha_inicio";
pub const END_DATE_KEY: &str = "fecha_fin";

/// Inclusive date range used by the aggregate endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Both bounds must be present and valid, otherwise there is no range.
    pub fn from_request(request: &FilterRequest) -> Option<Self> {
        let start = request.parse(START_DATE_KEY, ValueKind::Date)?;
        let end = request.parse(END_DATE_KEY, ValueKind::Date)?;
        match (start, end) {
            (FilterValue::Date(start), FilterValue::Date(end)) => Some(Self { start, end }),
            _ => None,
        }
    }

    pub fn fragment(&self, column: &str) -> QueryFragment {
        let mut fragment = QueryFragment::new();
        fragment.push_between(column, FilterValue::Date(self.start), FilterValue::Date(self.end));
        fragment
    }
}

/// `WHERE 1=1 [AND column BETWEEN $1 AND $2]`
pub fn range_fragment(range: Option<DateRange>, column: &str) -> QueryFragment {
    range
        .map(|range| range.fragment(column))
        .unwrap_or_default()
}
