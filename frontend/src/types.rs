//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Analysis service response structures
//! - **Error Types** - Frontend error handling

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;

// =============================================================================
// Ordered Map
// =============================================================================

/// JSON object whose entries keep the order they had on the wire.
///
/// Sentiment labels are displayed in the order the analysis service sent
/// them, so the usual hash map is not an option here. A repeated key keeps
/// its first position and takes the last value, like a JavaScript object.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        for (key, value) in iter {
            map.insert(key.into(), value);
        }
        map
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

// =============================================================================
// API Response Types
// =============================================================================

/// One `[keyword, count]` pair from a sentiment bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeywordCount(pub String, pub u64);

impl KeywordCount {
    pub fn keyword(&self) -> &str {
        &self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

/// Row accounting computed by the analysis service.
///
/// The service guarantees `processed_comments_count <= total_comments_read`;
/// the frontend displays the numbers as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataQualityMetrics {
    pub total_comments_read: u64,
    pub null_comments_count: u64,
    pub non_string_comments_count: u64,
    pub processed_comments_count: u64,
}

/// Successful response of `POST /analyze`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Comment count per sentiment label, in display order
    pub sentiment_counts: OrderedMap<u64>,
    /// Narrative summary of all comments
    pub summary: String,
    pub sentiment_mean: f64,
    pub sentiment_median: f64,
    /// Top keywords per sentiment label, pre-sorted by the service
    pub common_keywords_by_sentiment: OrderedMap<Vec<KeywordCount>>,
    pub data_quality_metrics: DataQualityMetrics,
    /// Base64 encoded word cloud image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_cloud_image: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The `Display` output of each variant is the exact text shown in the
/// form's error slot.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Form input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Non-success HTTP status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request could not be built or sent. Holds the bare transport
    /// message, e.g. `Failed to fetch`.
    #[error("{0}")]
    Network(String),

    /// A success response that does not match [`AnalysisResult`].
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Submit pressed while a previous submission is still pending.
    #[error("An analysis is already in progress.")]
    Busy,
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
