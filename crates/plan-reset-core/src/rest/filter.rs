//! Horizontal filters in PostgREST query syntax

use std::fmt;

/// Equality predicate on a single column, rendered as `column=eq.value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    column: String,
    value: String,
}

impl Filter {
    /// Select rows whose `column` equals `value`
    pub fn eq(column: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            column: column.into(),
            value: value.to_string(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Query-string pair understood by PostgREST
    pub fn query_pair(&self) -> (&str, String) {
        (&self.column, format!("eq.{}", self.value))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (column, predicate) = self.query_pair();
        write!(f, "{}={}", column, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::PlanStatus;

    #[test]
    fn test_active_status_filter() {
        let filter = Filter::eq("status", PlanStatus::Active);
        assert_eq!(filter.query_pair(), ("status", "eq.active".to_string()));
        assert_eq!(filter.to_string(), "status=eq.active");
    }
}
