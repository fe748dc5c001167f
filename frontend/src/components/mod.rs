//! UI Components for the comment analyzer.
//!
//! # Layout Components
//! - [`Hero`] - Page title
//!
//! # Feature Components
//! - [`UploadForm`] - CSV file and comment column submission
//! - [`ResultsSection`] - Rendered analysis results
//! - `SentimentChart` - Bar chart of the sentiment distribution

mod hero;
mod upload;
mod results;
mod chart;

pub use hero::*;
pub use upload::*;
pub use results::*;
pub use chart::*;
