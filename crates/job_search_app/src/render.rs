use job_search_core::{JobRecord, JobsView, RequestStatus, SearchViewModel};
use serde_json::json;

pub fn status_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Idle => "INITIAL",
        RequestStatus::InProgress => "IN_PROGRESS",
        RequestStatus::Success => "SUCCESS",
        RequestStatus::Failure => "FAILURE",
    }
}

pub fn render_text(view: &SearchViewModel) -> String {
    let mut out = String::new();
    out.push_str(&filters_line(view));
    out.push('\n');

    match &view.jobs {
        JobsView::Idle => {}
        JobsView::Loading => out.push_str("Loading...\n"),
        JobsView::NoJobs => {
            out.push_str("No Jobs Found\n");
            out.push_str("We could not find any jobs. Try other filters.\n");
        }
        JobsView::Failure => {
            out.push_str("Oops! Something Went Wrong\n");
            out.push_str("We cannot seem to find the page you are looking for. Try --retries.\n");
        }
        JobsView::Jobs(jobs) => {
            for job in jobs {
                out.push_str(&format_job_row(job));
                out.push('\n');
            }
        }
    }
    out
}

/// Canonical JSON for scripts: status plus the visible jobs.
pub fn render_json(view: &SearchViewModel) -> serde_json::Value {
    let jobs: &[JobRecord] = match &view.jobs {
        JobsView::Jobs(jobs) => jobs,
        _ => &[],
    };
    json!({
        "status": status_label(view.status),
        "jobs": jobs,
    })
}

fn filters_line(view: &SearchViewModel) -> String {
    let filters = &view.filters;
    let types = if filters.employment_types.is_empty() {
        "any".to_string()
    } else {
        filters.employment_types.join(",")
    };
    format!(
        "Search: {:?} | Types: {} | Min package: {} | Status: {}",
        filters.search_text,
        types,
        filters.salary_range.as_deref().unwrap_or("any"),
        status_label(view.status)
    )
}

fn format_job_row(job: &JobRecord) -> String {
    let rating = job
        .rating
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    let package = job
        .package_per_annum
        .as_ref()
        .map_or_else(|| "-".to_string(), ToString::to_string);
    format!(
        "[{id}] {title} | {employment_type} | {location} | package {package} | rating {rating}",
        id = job.id,
        title = job.title,
        employment_type = job.employment_type,
        location = job.location,
    )
}
