/// Whether a filter change should start a new fetch generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDirective {
    None,
    Trigger,
}

/// Result of a filter mutation: the new snapshot and whether a fetch is due.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTransition {
    pub filters: FilterState,
    pub fetch: FetchDirective,
}

impl FilterTransition {
    fn new(filters: FilterState, fetch: FetchDirective) -> Self {
        Self { filters, fetch }
    }

    pub fn triggers_fetch(&self) -> bool {
        self.fetch == FetchDirective::Trigger
    }
}

/// Current search text and filter selections.
///
/// Employment types keep their selection order and never hold duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    search_text: String,
    employment_types: Vec<String>,
    salary_range: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn employment_types(&self) -> &[String] {
        &self.employment_types
    }

    pub fn salary_range(&self) -> Option<&str> {
        self.salary_range.as_deref()
    }

    /// Replaces the search text. The text is only sent on the next fetch.
    pub fn set_search_text(mut self, text: impl Into<String>) -> FilterTransition {
        self.search_text = text.into();
        FilterTransition::new(self, FetchDirective::None)
    }

    pub fn toggle_employment_type(
        mut self,
        token: impl Into<String>,
        included: bool,
    ) -> FilterTransition {
        let token = token.into();
        if included {
            if !self.employment_types.contains(&token) {
                self.employment_types.push(token);
            }
        } else {
            self.employment_types.retain(|existing| *existing != token);
        }
        FilterTransition::new(self, FetchDirective::Trigger)
    }

    /// Overwrites the salary constraint; `None` removes it.
    pub fn set_salary_range(mut self, token: Option<String>) -> FilterTransition {
        self.salary_range = token;
        FilterTransition::new(self, FetchDirective::Trigger)
    }

    pub fn submit_search(self) -> FilterTransition {
        FilterTransition::new(self, FetchDirective::Trigger)
    }
}
