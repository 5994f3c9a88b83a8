use std::fmt;

use serde::Serialize;

/// A numeric catalog field as the server sent it.
///
/// The live catalog mixes plain numbers with labels such as `"21 LPA"`;
/// labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Amount::Number(value) => Some(*value),
            Amount::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(value) => write!(f, "{value}"),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

/// One catalog entry in canonical form.
///
/// Serializes with the canonical camelCase field names.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub location: String,
    pub package_per_annum: Option<Amount>,
    pub rating: Option<Amount>,
    pub job_description: String,
}

/// Jobs in the order the server returned them.
pub type JobList = Vec<JobRecord>;
