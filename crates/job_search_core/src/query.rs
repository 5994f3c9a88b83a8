use crate::FilterState;

/// Canonical catalog query derived from a [`FilterState`].
///
/// Unconstrained filters serialize to the empty string, never to a missing
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    search: String,
    employment_types_csv: String,
    minimum_package: String,
}

impl Query {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn employment_types_csv(&self) -> &str {
        &self.employment_types_csv
    }

    pub fn minimum_package(&self) -> &str {
        &self.minimum_package
    }

    /// Wire parameters in the order the catalog documents them.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("employment_type", self.employment_types_csv.as_str()),
            ("minimum_package", self.minimum_package.as_str()),
            ("search", self.search.as_str()),
        ]
    }
}

/// Builds the query for `filters`. Employment types keep selection order.
pub fn build_query(filters: &FilterState) -> Query {
    Query {
        search: filters.search_text().to_string(),
        employment_types_csv: filters.employment_types().join(","),
        minimum_package: filters.salary_range().unwrap_or_default().to_string(),
    }
}
