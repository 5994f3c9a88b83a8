use job_search_core::{build_query, FilterState};
use pretty_assertions::assert_eq;

#[test]
fn empty_filters_serialize_to_empty_strings() {
    let query = build_query(&FilterState::new());

    assert_eq!(query.employment_types_csv(), "");
    assert_eq!(query.minimum_package(), "");
    assert_eq!(query.search(), "");
    assert_eq!(
        query.pairs(),
        [("employment_type", ""), ("minimum_package", ""), ("search", "")]
    );
}

#[test]
fn employment_types_keep_selection_order() {
    let filters = FilterState::new()
        .toggle_employment_type("PARTTIME", true)
        .filters
        .toggle_employment_type("FULLTIME", true)
        .filters
        .toggle_employment_type("INTERNSHIP", true)
        .filters;

    assert_eq!(
        build_query(&filters).employment_types_csv(),
        "PARTTIME,FULLTIME,INTERNSHIP"
    );
}

#[test]
fn removed_type_drops_out_of_csv() {
    let filters = FilterState::new()
        .toggle_employment_type("PARTTIME", true)
        .filters
        .toggle_employment_type("FULLTIME", true)
        .filters
        .toggle_employment_type("PARTTIME", false)
        .filters;

    assert_eq!(build_query(&filters).employment_types_csv(), "FULLTIME");
}

#[test]
fn salary_and_search_pass_through_unvalidated() {
    let filters = FilterState::new()
        .set_search_text("backend engineer")
        .filters
        .set_salary_range(Some("4000000".to_string()))
        .filters;
    let query = build_query(&filters);

    assert_eq!(query.search(), "backend engineer");
    assert_eq!(query.minimum_package(), "4000000");
}

#[test]
fn building_is_deterministic() {
    let filters = FilterState::new()
        .toggle_employment_type("FREELANCE", true)
        .filters
        .set_salary_range(Some("1000000".to_string()))
        .filters;

    assert_eq!(build_query(&filters), build_query(&filters));
}
