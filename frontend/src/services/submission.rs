//! Form state of the upload component.
//!
//! A submission is split in two synchronous steps around the network call:
//! [`SubmissionForm::begin`] validates and hands out a [`Ticket`], and
//! [`SubmissionForm::finish`] resolves that ticket into an
//! [`AnalysisOutcome`]. Only one submission can be in flight at a time.
//! A ticket invalidated by [`SubmissionForm::cancel`] resolves to
//! [`AnalysisOutcome::Cancelled`] and leaves the form untouched.

use crate::config::{DEFAULT_COMMENT_COLUMN, MISSING_FILE_MESSAGE};
use crate::services::analyze::{UploadFile, UploadRequest};
use crate::types::{AnalysisResult, AppError, AppResult};

/// Resolution of one submission.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisOutcome {
    /// The service returned a result.
    Completed(AnalysisResult),
    /// The submission failed; the message is in the error slot.
    Failed(String),
    /// The submission was abandoned before it resolved.
    Cancelled,
}

/// Identifies one accepted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct SubmissionForm<F> {
    file: Option<F>,
    comment_column: String,
    in_flight: bool,
    error: Option<String>,
    generation: u64,
}

impl<F: UploadFile> Default for SubmissionForm<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: UploadFile> SubmissionForm<F> {
    pub fn new() -> Self {
        Self {
            file: None,
            comment_column: DEFAULT_COMMENT_COLUMN.to_string(),
            in_flight: false,
            error: None,
            generation: 0,
        }
    }

    /// Replace the selected file. `None` when the picker was dismissed.
    pub fn select_file(&mut self, file: Option<F>) {
        self.file = file;
    }

    /// Replace the column identifier. The value is never validated.
    pub fn set_column(&mut self, column: impl Into<String>) {
        self.comment_column = column.into();
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn comment_column(&self) -> &str {
        &self.comment_column
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Message of the last failure, cleared when a submission starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the form and start a submission.
    ///
    /// On success the form is in flight and the returned request must be
    /// sent exactly once. A missing file sets the error slot and leaves the
    /// form idle; a pending submission refuses the call without touching
    /// any state.
    pub fn begin(&mut self) -> AppResult<(Ticket, UploadRequest<F>)> {
        if self.in_flight {
            log::warn!("Submission refused: an analysis is already running");
            return Err(AppError::Busy);
        }

        let Some(file) = self.file.clone() else {
            let err = AppError::Validation(MISSING_FILE_MESSAGE.to_string());
            self.error = Some(err.to_string());
            return Err(err);
        };

        self.in_flight = true;
        self.error = None;
        self.generation += 1;

        log::info!(
            "Submitting {} for analysis (comment column {:?})",
            file.file_name(),
            self.comment_column
        );

        let request = UploadRequest {
            file,
            comment_column: self.comment_column.clone(),
        };
        Ok((Ticket(self.generation), request))
    }

    /// Resolve a submission started by [`begin`](Self::begin).
    pub fn finish(&mut self, ticket: Ticket, result: AppResult<AnalysisResult>) -> AnalysisOutcome {
        if !self.in_flight || ticket.0 != self.generation {
            log::info!("Discarding reply of a cancelled submission");
            return AnalysisOutcome::Cancelled;
        }

        self.in_flight = false;
        match result {
            Ok(result) => {
                log::info!(
                    "Analysis complete: {} sentiment labels, {} comments processed",
                    result.sentiment_counts.len(),
                    result.data_quality_metrics.processed_comments_count
                );
                AnalysisOutcome::Completed(result)
            }
            Err(e) => {
                let message = e.to_string();
                log::warn!("Analysis failed: {}", message);
                self.error = Some(message.clone());
                AnalysisOutcome::Failed(message)
            }
        }
    }

    /// Abandon the pending submission, if any.
    ///
    /// The request itself keeps running; its reply is discarded by
    /// [`finish`](Self::finish). Returns whether something was cancelled.
    pub fn cancel(&mut self) -> bool {
        if !self.in_flight {
            return false;
        }
        self.in_flight = false;
        self.generation += 1;
        log::info!("Analysis cancelled");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::analyze::{run_analysis, AnalysisTransport, HttpReply};
    use futures::executor::block_on;
    use std::cell::Cell;

    const SUCCESS_BODY: &str = r#"{"sentiment_counts":{"Positive":3,"Negative":1},"summary":"ok","sentiment_mean":0.42,"sentiment_median":0.5,"common_keywords_by_sentiment":{"Positive":[["good",2]]},"data_quality_metrics":{"total_comments_read":4,"null_comments_count":0,"non_string_comments_count":0,"processed_comments_count":4}}"#;

    #[derive(Clone, Debug, PartialEq)]
    struct NamedFile(&'static str);

    impl UploadFile for NamedFile {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    struct CountingTransport {
        status: u16,
        body: &'static str,
        calls: Cell<usize>,
    }

    impl CountingTransport {
        fn new(status: u16, body: &'static str) -> Self {
            Self { status, body, calls: Cell::new(0) }
        }
    }

    impl AnalysisTransport for CountingTransport {
        type File = NamedFile;

        async fn send(&self, _request: UploadRequest<NamedFile>) -> AppResult<HttpReply> {
            self.calls.set(self.calls.get() + 1);
            Ok(HttpReply { status: self.status, body: self.body.to_string() })
        }
    }

    /// Drive one full submission the way the upload component does.
    fn submit(form: &mut SubmissionForm<NamedFile>, transport: &CountingTransport) -> AnalysisOutcome {
        match form.begin() {
            Ok((ticket, request)) => {
                let result = block_on(run_analysis(transport, request));
                form.finish(ticket, result)
            }
            Err(e) => AnalysisOutcome::Failed(e.to_string()),
        }
    }

    #[test]
    fn test_defaults() {
        let form = SubmissionForm::<NamedFile>::new();
        assert_eq!(form.comment_column(), "5");
        assert!(form.file().is_none());
        assert!(!form.is_in_flight());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_submit_without_file_makes_no_call() {
        let mut form = SubmissionForm::<NamedFile>::new();
        let transport = CountingTransport::new(200, SUCCESS_BODY);

        let outcome = submit(&mut form, &transport);

        assert_eq!(outcome, AnalysisOutcome::Failed("Please select a CSV file.".into()));
        assert_eq!(form.error(), Some("Please select a CSV file."));
        assert_eq!(transport.calls.get(), 0);
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_successful_submission() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));
        let transport = CountingTransport::new(200, SUCCESS_BODY);

        let outcome = submit(&mut form, &transport);

        match outcome {
            AnalysisOutcome::Completed(result) => assert_eq!(result.summary, "ok"),
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(transport.calls.get(), 1);
        assert!(!form.is_in_flight());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_server_error_fills_error_slot() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));

        let outcome = submit(&mut form, &CountingTransport::new(400, r#"{"error":"bad column"}"#));
        assert_eq!(outcome, AnalysisOutcome::Failed("bad column".into()));
        assert_eq!(form.error(), Some("bad column"));

        let outcome = submit(&mut form, &CountingTransport::new(502, ""));
        assert_eq!(outcome, AnalysisOutcome::Failed("Analysis failed.".into()));
        assert_eq!(form.error(), Some("Analysis failed."));
        assert!(!form.is_in_flight());
    }

    #[test]
    fn test_column_sent_verbatim() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));

        let (_, request) = form.begin().unwrap();
        assert_eq!(request.comment_column, "5");
        assert_eq!(request.file, NamedFile("comments.csv"));

        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));
        form.set_column(" Comment Text ");
        let (_, request) = form.begin().unwrap();
        assert_eq!(request.comment_column, " Comment Text ");
    }

    #[test]
    fn test_in_flight_only_between_begin_and_finish() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));
        assert!(!form.is_in_flight());

        let (ticket, _) = form.begin().unwrap();
        assert!(form.is_in_flight());

        form.finish(ticket, Err(AppError::Network("Failed to fetch".into())));
        assert!(!form.is_in_flight());
        assert_eq!(form.error(), Some("Failed to fetch"));
    }

    #[test]
    fn test_new_submission_clears_previous_error() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));
        let (ticket, _) = form.begin().unwrap();
        form.finish(ticket, Err(AppError::Parse("missing field `summary`".into())));
        assert!(form.error().is_some());

        form.begin().unwrap();
        assert!(form.error().is_none());
    }

    #[test]
    fn test_overlapping_submit_is_refused() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));

        let (ticket, _) = form.begin().unwrap();
        assert_eq!(form.begin().unwrap_err(), AppError::Busy);
        assert!(form.is_in_flight());
        assert!(form.error().is_none());

        let result = serde_json::from_str(SUCCESS_BODY).unwrap();
        assert!(matches!(form.finish(ticket, Ok(result)), AnalysisOutcome::Completed(_)));
    }

    #[test]
    fn test_cancelled_reply_is_discarded() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("comments.csv")));

        let (stale, _) = form.begin().unwrap();
        assert!(form.cancel());
        assert!(!form.is_in_flight());
        assert!(!form.cancel());

        let (current, _) = form.begin().unwrap();
        let outcome = form.finish(stale, Err(AppError::Network("late".into())));
        assert_eq!(outcome, AnalysisOutcome::Cancelled);
        assert!(form.is_in_flight());
        assert!(form.error().is_none());

        let result = serde_json::from_str(SUCCESS_BODY).unwrap();
        assert!(matches!(form.finish(current, Ok(result)), AnalysisOutcome::Completed(_)));
    }

    #[test]
    fn test_deselecting_file() {
        let mut form = SubmissionForm::new();
        form.select_file(Some(NamedFile("a.csv")));
        form.select_file(None);
        assert!(form.begin().is_err());
    }
}
