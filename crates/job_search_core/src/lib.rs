//! Job search core: pure filter state, query building, response
//! normalization and the request-lifecycle state machine.
mod effect;
mod error;
mod filter;
mod msg;
mod normalize;
mod query;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::SearchError;
pub use filter::{FetchDirective, FilterState, FilterTransition};
pub use msg::Msg;
pub use normalize::normalize_response;
pub use query::{build_query, Query};
pub use record::{Amount, JobList, JobRecord};
pub use state::{Generation, RequestStatus, SearchState};
pub use update::update;
pub use view_model::{FiltersView, JobsView, SearchViewModel};
