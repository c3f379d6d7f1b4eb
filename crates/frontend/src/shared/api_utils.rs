//! URL construction for the hosting web application.
//!
//! The frontend is served underneath the host system's deployment context
//! path; everything it requests is addressed relative to that prefix.

use contracts::rest;

/// Deployment context path of the hosting web application, e.g. "/openmrs".
///
/// Derived from the first segment of the current location's pathname; empty
/// string if no window is available (e.g. outside a browser).
pub fn context_path() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let pathname = window.location().pathname().unwrap_or_default();
    context_path_from(&pathname)
}

/// Build a REST URL for a resource, e.g. `rest_url("radiologyorder")`.
pub fn rest_url(resource: &str) -> String {
    format!("{}/{}", rest::rest_root(&context_path()), resource)
}

/// Build a URL for one of this module's server-rendered portlets.
pub fn portlet_url(portlet: &str) -> String {
    format!("{}/module/radiology/portlets/{}", context_path(), portlet)
}

fn context_path_from(pathname: &str) -> String {
    match pathname.split('/').find(|segment| !segment.is_empty()) {
        Some(first) => format!("/{first}"),
        None => String::new(),
    }
}
