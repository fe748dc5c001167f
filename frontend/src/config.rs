//! Application configuration.
//!
//! Centralized configuration for the comment analyzer frontend.
//! Values are compiled in; the analysis endpoint can be overridden at
//! build time with the `ANALYZE_URL` environment variable.

/// Analysis endpoint receiving the multipart upload.
pub const ANALYZE_URL: &str = match option_env!("ANALYZE_URL") {
    Some(url) => url,
    None => "http://localhost:5000/analyze",
};

/// Application name, shown in the page title and header.
pub const APP_NAME: &str = "E-consultation Comment Analyzer";

/// Column identifier sent when the user leaves the field untouched.
pub const DEFAULT_COMMENT_COLUMN: &str = "5";

/// File picker filter. A hint only, never enforced.
pub const ACCEPTED_FILE_TYPES: &str = ".csv";

/// Shown when submit is pressed without a file.
pub const MISSING_FILE_MESSAGE: &str = "Please select a CSV file.";

/// Shown when a failed response carries no usable `error` field.
pub const FALLBACK_ERROR_MESSAGE: &str = "Analysis failed.";
