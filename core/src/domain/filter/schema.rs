use super::{
    fragment::{Placeholder, QueryFragment},
    request::FilterRequest,
    value::ValueKind,
};

/// Comparison operator of a single-column predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Lte,
    ILike,
}

impl Comparison {
    pub fn as_sql(self) -> &'static str {
        match self {
            Comparison::Eq => "=",
            Comparison::Gte => ">=",
            Comparison::Lte => "<=",
            Comparison::ILike => "ILIKE",
        }
    }
}

/// Shape of the clause emitted for a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// `column OP $n`
    Compare {
        column: &'static str,
        op: Comparison,
    },
    /// `(column ILIKE $n OR column = 'sentinel')`, the sentinel meaning
    /// "applies to every brand/model".
    Compatible {
        column: &'static str,
        sentinel: &'static str,
    },
    /// `(a ILIKE $n OR b ILIKE $n)`, one bound value shared by every arm.
    Search { columns: &'static [&'static str] },
}

impl Predicate {
    pub fn render(&self, placeholder: Placeholder) -> String {
        match self {
            Predicate::Compare { column, op } => {
                format!("{column} {} {placeholder}", op.as_sql())
            }
            Predicate::Compatible { column, sentinel } => {
                format!("({column} ILIKE {placeholder} OR {column} = '{sentinel}')")
            }
            Predicate::Search { columns } => {
                let arms = columns
                    .iter()
                    .map(|column| format!("{column} ILIKE {placeholder}"))
                    .collect::<Vec<_>>()
                    .join(" OR ");
                format!("({arms})")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub key: &'static str,
    pub kind: ValueKind,
    pub predicate: Predicate,
}

impl FilterField {
    pub const fn compare(
        key: &'static str,
        column: &'static str,
        op: Comparison,
        kind: ValueKind,
    ) -> Self {
        Self {
            key,
            kind,
            predicate: Predicate::Compare { column, op },
        }
    }

    pub const fn compatible(
        key: &'static str,
        column: &'static str,
        sentinel: &'static str,
    ) -> Self {
        Self {
            key,
            kind: ValueKind::Pattern,
            predicate: Predicate::Compatible { column, sentinel },
        }
    }

    pub const fn search(key: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            key,
            kind: ValueKind::Pattern,
            predicate: Predicate::Search { columns },
        }
    }
}

/// Ordered filter keys of one resource. Declaration order is clause order.
#[derive(Debug, Clone, Copy)]
pub struct FilterSchema {
    fields: &'static [FilterField],
}

impl FilterSchema {
    pub const fn new(fields: &'static [FilterField]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FilterField] {
        self.fields
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|field| field.key)
    }

    /// Builds the predicate for `request`. Keys that are missing, blank or
    /// unparseable are skipped; unknown keys are ignored.
    pub fn build(&self, request: &FilterRequest) -> QueryFragment {
        let mut fragment = QueryFragment::new();
        for field in self.fields {
            let Some(value) = request.parse(field.key, field.kind) else {
                continue;
            };
            fragment.push(value, |placeholder| field.predicate.render(placeholder));
        }
        fragment
    }
}
