use crate::{Generation, SearchError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The search view was opened; loads the unfiltered catalog.
    Mounted,
    /// User edited the search box. Takes effect on the next submit.
    SearchTextChanged(String),
    /// User pressed the search button.
    SearchSubmitted,
    /// User checked (`included == true`) or unchecked an employment type.
    EmploymentTypeToggled { token: String, included: bool },
    /// User picked a salary range, or cleared it with `None`.
    SalaryRangeSelected(Option<String>),
    /// User clicked Retry on the failure view.
    RetryClicked,
    /// Catalog reply for the fetch started at `generation`.
    ///
    /// `Ok` carries the raw body of a 2xx response.
    CatalogResponded {
        generation: Generation,
        result: Result<Vec<u8>, SearchError>,
    },
}
