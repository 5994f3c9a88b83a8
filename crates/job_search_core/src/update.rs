use crate::{FilterState, FilterTransition, Msg, SearchState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<crate::Effect>) {
    let effects = match msg {
        Msg::Mounted => {
            let filters = state.filters().clone();
            vec![state.begin_fetch(filters)]
        }
        Msg::SearchTextChanged(text) => apply_filter_change(&mut state, |f| f.set_search_text(text)),
        Msg::SearchSubmitted => apply_filter_change(&mut state, FilterState::submit_search),
        Msg::EmploymentTypeToggled { token, included } => {
            apply_filter_change(&mut state, |f| f.toggle_employment_type(token, included))
        }
        Msg::SalaryRangeSelected(token) => {
            apply_filter_change(&mut state, |f| f.set_salary_range(token))
        }
        Msg::RetryClicked => {
            let filters = state.retry_filters();
            vec![state.begin_fetch(filters)]
        }
        Msg::CatalogResponded { generation, result } => {
            state.apply_response(generation, result);
            Vec::new()
        }
    };

    (state, effects)
}

fn apply_filter_change(
    state: &mut SearchState,
    change: impl FnOnce(FilterState) -> FilterTransition,
) -> Vec<crate::Effect> {
    let transition = change(state.filters().clone());
    let fetch_due = transition.triggers_fetch();
    state.set_filters(transition.filters);
    if fetch_due {
        let filters = state.filters().clone();
        vec![state.begin_fetch(filters)]
    } else {
        Vec::new()
    }
}
