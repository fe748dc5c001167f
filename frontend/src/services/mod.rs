//! Analysis service communication.
//!
//! # Services
//!
//! - [`analyze`] - Multipart upload to the analysis endpoint and reply handling
//! - [`submission`] - Upload form state and submission lifecycle

pub mod analyze;
pub mod submission;

pub use analyze::*;
pub use submission::*;
