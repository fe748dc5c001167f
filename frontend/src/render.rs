//! Projection of an [`AnalysisResult`] into display-ready values.
//!
//! Components never read the result directly: they render a
//! [`ResultsView`], which keeps every formatting rule testable without a
//! browser. Building a view never mutates the result.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::types::AnalysisResult;

/// One bar of the sentiment distribution chart, also used for the list.
#[derive(Clone, Debug, PartialEq)]
pub struct SentimentBar {
    pub label: String,
    pub count: u64,
    /// CSS modifier, the lowercased label
    pub css_class: String,
    /// Bar height relative to the largest count, 0.0..=100.0
    pub percent: f64,
}

/// Keywords of one sentiment bucket.
#[derive(Clone, Debug, PartialEq)]
pub struct KeywordGroup {
    pub sentiment: String,
    /// Lines formatted as `keyword (count)`
    pub lines: Vec<String>,
}

/// Everything the results section displays.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub summary: String,
    pub sentiments: Vec<SentimentBar>,
    pub mean: String,
    pub median: String,
    pub keyword_groups: Vec<KeywordGroup>,
    /// `(label, value)` rows of the data quality card
    pub quality: Vec<(&'static str, u64)>,
    /// `data:` URL of the word cloud, `None` when there is nothing to show
    pub word_cloud: Option<String>,
}

impl ResultsView {
    pub fn new(result: &AnalysisResult) -> Self {
        let max = result
            .sentiment_counts
            .iter()
            .map(|(_, count)| *count)
            .max()
            .unwrap_or(0);

        let sentiments = result
            .sentiment_counts
            .iter()
            .map(|(label, count)| SentimentBar {
                label: label.to_string(),
                count: *count,
                css_class: label.to_lowercase(),
                percent: bar_percent(*count, max),
            })
            .collect();

        let keyword_groups = result
            .common_keywords_by_sentiment
            .iter()
            .map(|(sentiment, keywords)| KeywordGroup {
                sentiment: sentiment.to_string(),
                lines: keywords
                    .iter()
                    .map(|k| format!("{} ({})", k.keyword(), k.count()))
                    .collect(),
            })
            .collect();

        let metrics = &result.data_quality_metrics;
        let quality = vec![
            ("Total Comments Read", metrics.total_comments_read),
            ("Null Comments", metrics.null_comments_count),
            ("Non-String Comments", metrics.non_string_comments_count),
            ("Processed Comments", metrics.processed_comments_count),
        ];

        Self {
            summary: result.summary.clone(),
            sentiments,
            mean: format_stat(result.sentiment_mean),
            median: format_stat(result.sentiment_median),
            keyword_groups,
            quality,
            word_cloud: result.word_cloud_image.as_deref().and_then(image_data_url),
        }
    }
}

/// Project an optional result. Absent input renders nothing.
pub fn project(result: Option<&AnalysisResult>) -> Option<ResultsView> {
    result.map(ResultsView::new)
}

/// Two decimal places, display only.
///
/// Exact halfway values round away from zero (`0.125` gives `"0.13"`);
/// `{:.2}` alone would round them to the even digit.
pub fn format_stat(value: f64) -> String {
    if value == 0.0 {
        return "0.00".to_string();
    }

    // A double lies exactly halfway between two hundredths only when it is
    // an odd number of eighths. Multiplying by 8 is exact.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        let hundredths = (value.abs() * 100.0 + 0.5).floor();
        return format!("{:.2}", value.signum() * hundredths / 100.0);
    }

    format!("{:.2}", value)
}

fn bar_percent(count: u64, max: u64) -> f64 {
    if max == 0 {
        0.0
    } else {
        count as f64 * 100.0 / max as f64
    }
}

/// Build a `data:` URL for a base64 encoded image.
///
/// Returns `None` for empty or undecodable payloads. ASCII whitespace,
/// including line breaks of wrapped base64, is ignored. The MIME type comes
/// from the decoded magic bytes.
pub fn image_data_url(encoded: &str) -> Option<String> {
    let encoded: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if encoded.is_empty() {
        return None;
    }

    let bytes = match STANDARD.decode(&encoded) {
        Ok(bytes) if !bytes.is_empty() => bytes,
        Ok(_) => return None,
        Err(e) => {
            log::warn!("Word cloud image is not valid base64: {}", e);
            return None;
        }
    };

    Some(format!("data:{};base64,{}", sniff_mime(&bytes), encoded))
}

fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(b"\xFF\xD8\xFF") {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "image/png"
    }
}
