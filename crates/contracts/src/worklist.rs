//! Query contract of the legacy worklist portlet.
//!
//! The older page variant fetches a server-rendered HTML table fragment from
//! `portlets/orderSearch.portlet`. The fragment either contains the result
//! table or an error region; the server marks the latter with a `crossDate`
//! token in the markup.

use serde::Serialize;

/// Marker the portlet embeds in an error fragment.
pub const ERROR_MARKER: &str = "crossDate";

/// Search parameters of the portlet fragment request.
///
/// All text inputs are forwarded even when blank, matching what the portlet
/// expects; only the sort selection is omitted when the page has none.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorklistQuery {
    #[serde(rename = "patientQuery")]
    pub patient_query: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    #[serde(rename = "selectSortType", skip_serializing_if = "Option::is_none")]
    pub sort_type: Option<String>,
}

impl WorklistQuery {
    pub fn query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

/// Best-effort classification of a portlet response as an error fragment.
///
/// Deliberately the same brittle case-insensitive substring scan the page
/// always used; a fragment legitimately containing the marker text is still
/// classified as an error.
pub fn is_error_fragment(body: &str) -> bool {
    body.to_ascii_lowercase()
        .contains(&ERROR_MARKER.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_portlet_parameter_names() {
        let query = WorklistQuery {
            patient_query: "Doe".into(),
            start_date: "2016-03-01".into(),
            end_date: "2016-03-31".into(),
            sort_type: Some("byDate".into()),
        };
        assert_eq!(
            query.query_string(),
            "patientQuery=Doe&startDate=2016-03-01&endDate=2016-03-31&selectSortType=byDate"
        );
    }

    #[test]
    fn blank_inputs_are_still_forwarded() {
        let query = WorklistQuery::default().query_string();
        assert_eq!(query, "patientQuery=&startDate=&endDate=");
    }

    #[test]
    fn error_fragments_are_detected_case_insensitively() {
        assert!(is_error_fragment(
            "<span id=\"errorSpan\" class=\"crossDate\">dates cross</span>"
        ));
        assert!(is_error_fragment("CROSSDATE"));
        assert!(!is_error_fragment("<table id=\"radiologyOrdersTable\"></table>"));
    }
}
