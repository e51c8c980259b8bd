//! HTTP clients for the enrollment endpoint
//!
//! Native builds talk to the API through reqwest, browser builds through
//! gloo_net (the fetch API). Both implement [`crate::interface::EnrollApi`].

#[cfg(feature = "no-wasm")]
pub mod request;

#[cfg(feature = "wasm")]
pub mod gloo;

pub(crate) const ENROLL_PATH: &str = "/api/enroll";

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
