use crate::{Generation, Query};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the catalog for `query`; the response must be reported back
    /// tagged with the same `generation`.
    FetchJobs { generation: Generation, query: Query },
}
