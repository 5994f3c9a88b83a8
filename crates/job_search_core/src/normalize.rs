use serde_json::{Map, Value};

use crate::{Amount, JobList, JobRecord, SearchError};

/// Parses a catalog body and maps every job to its canonical form.
///
/// Only the envelope is validated: a body that is not JSON, or whose `jobs`
/// member is missing or not an array, fails the whole batch. Fields missing
/// from an individual job become empty strings or `None`.
pub fn normalize_response(body: &[u8]) -> Result<JobList, SearchError> {
    let envelope: Value = serde_json::from_slice(body)
        .map_err(|err| SearchError::MalformedResponse(format!("invalid json: {err}")))?;

    let jobs = match envelope.get("jobs") {
        Some(Value::Array(jobs)) => jobs,
        Some(other) => {
            return Err(SearchError::MalformedResponse(format!(
                "`jobs` is {}, expected an array",
                kind_name(other)
            )))
        }
        None => {
            return Err(SearchError::MalformedResponse(
                "missing `jobs` collection".into(),
            ))
        }
    };

    Ok(jobs.iter().map(normalize_job).collect())
}

fn normalize_job(raw: &Value) -> JobRecord {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    JobRecord {
        id: text(fields, "id"),
        title: text(fields, "title"),
        company_logo_url: text(fields, "company_logo_url"),
        employment_type: text(fields, "employment_type"),
        location: text(fields, "location"),
        package_per_annum: amount(fields, "package_per_annum"),
        rating: amount(fields, "rating"),
        job_description: text(fields, "job_description"),
    }
}

fn text(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(value)) => value.clone(),
        Some(Value::Number(value)) => value.to_string(),
        _ => String::new(),
    }
}

fn amount(fields: &Map<String, Value>, key: &str) -> Option<Amount> {
    match fields.get(key)? {
        Value::Number(value) => value.as_f64().map(Amount::Number),
        Value::String(value) => Some(Amount::Text(value.clone())),
        _ => None,
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labelled_amounts_are_kept_verbatim() {
        let jobs =
            normalize_response(br#"{"jobs":[{"package_per_annum":"21 LPA","rating":"4.5/5"}]}"#)
                .unwrap();
        assert_eq!(jobs[0].package_per_annum, Some(Amount::Text("21 LPA".into())));
        assert_eq!(jobs[0].rating, Some(Amount::Text("4.5/5".into())));
        assert_eq!(jobs[0].rating.as_ref().and_then(Amount::as_f64), None);
    }

    #[test]
    fn numeric_text_still_reads_as_number() {
        let jobs = normalize_response(br#"{"jobs":[{"rating":" 4 "}]}"#).unwrap();
        assert_eq!(jobs[0].rating.as_ref().and_then(Amount::as_f64), Some(4.0));
    }

    #[test]
    fn wrongly_typed_amounts_become_absent() {
        let jobs = normalize_response(br#"{"jobs":[{"rating":[4],"package_per_annum":null}]}"#)
            .unwrap();
        assert_eq!(jobs[0].rating, None);
        assert_eq!(jobs[0].package_per_annum, None);
    }

    #[test]
    fn envelope_kind_is_reported() {
        let err = normalize_response(br#"{"jobs":{"id":"1"}}"#).unwrap_err();
        assert_eq!(
            err,
            SearchError::MalformedResponse("`jobs` is an object, expected an array".into())
        );
    }
}
