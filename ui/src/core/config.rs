//! Build-time configuration.

/// Base URL of the backend REST API. Override at build time with
/// `COLDSTORE_API_BASE`; the default targets a local backend.
pub fn api_base_url() -> &'static str {
    option_env!("COLDSTORE_API_BASE").unwrap_or("http://localhost:5000/api")
}
