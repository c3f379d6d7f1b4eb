//! Wire contract of the order-search REST interface.
//!
//! The server side of this interface is owned by the hosting information
//! system; this module only fixes the URL layout, the query parameters and
//! the paginated response shape the frontend depends on.

pub mod path;

pub use path::get_property;

use crate::orders::Urgency;
use serde::{Deserialize, Serialize};

/// Root of the REST API under the deployment context path.
///
/// `rest_root("/openmrs")` is `"/openmrs/ws/rest/v1"`.
pub fn rest_root(context_path: &str) -> String {
    format!("{context_path}/ws/rest/v1")
}

/// Representation level requested from the server (`v` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    Ref,
    Default,
    Full,
}

/// One page worth of order search parameters.
///
/// Serializes to the exact parameter names the search handler understands:
/// `startIndex`, `limit`, `v`, `patient`, `accessionNumber`, `urgency`,
/// `fromEffectiveStartDate`, `toEffectiveStartDate`, `totalCount`. Optional
/// filters are omitted entirely when unset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderPageRequest {
    #[serde(rename = "startIndex")]
    pub start_index: u32,
    pub limit: u32,
    #[serde(rename = "v")]
    pub representation: Representation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient: Option<String>,
    #[serde(rename = "accessionNumber", skip_serializing_if = "Option::is_none")]
    pub accession_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urgency: Option<Urgency>,
    #[serde(
        rename = "fromEffectiveStartDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub from_effective_start_date: Option<String>,
    #[serde(
        rename = "toEffectiveStartDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub to_effective_start_date: Option<String>,
    #[serde(rename = "totalCount", skip_serializing_if = "is_false")]
    pub total_count: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl OrderPageRequest {
    /// A full-representation page request with the total count included,
    /// which is what the order table always asks for.
    pub fn page(start_index: u32, limit: u32) -> Self {
        Self {
            start_index,
            limit,
            representation: Representation::Full,
            patient: None,
            accession_number: None,
            urgency: None,
            from_effective_start_date: None,
            to_effective_start_date: None,
            total_count: true,
        }
    }

    /// Attach a patient filter; blank input means no filter.
    pub fn with_patient(mut self, patient: &str) -> Self {
        let trimmed = patient.trim();
        self.patient = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }

    pub fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = Some(urgency);
        self
    }

    pub fn query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Paginated order-search response: a `results` array of raw resources plus
/// the total count when the request asked for it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPageResponse {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(rename = "totalCount")]
    pub total_count: Option<u64>,
}
