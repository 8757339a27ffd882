use serde::Serialize;
use shared::types::AnalysisReport;

/// Request payload for the analyze endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Lifecycle phase of the submission form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl SubmissionPhase {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Loading => "loading",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed => "failed",
        }
    }
}

/// Observable state of one submission form.
///
/// Owned and mutated exclusively by the submission controller; the
/// presentation layer only ever reads it. `result` and `error_message`
/// are mutually exclusive and both absent outside their terminal phase.
#[derive(Debug, Default)]
pub struct SubmissionState {
    pub phase: SubmissionPhase,
    pub input_text: String,
    pub result: Option<AnalysisReport>,
    pub error_message: Option<String>,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading phase, discarding any previous outcome.
    pub(crate) fn begin_loading(&mut self) {
        self.phase = SubmissionPhase::Loading;
        self.result = None;
        self.error_message = None;
    }

    pub(crate) fn complete(&mut self, report: AnalysisReport) {
        self.phase = SubmissionPhase::Succeeded;
        self.result = Some(report);
        self.error_message = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.phase = SubmissionPhase::Failed;
        self.error_message = Some(message);
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(score: f64) -> AnalysisReport {
        AnalysisReport {
            id: None,
            url: "https://example.com".to_string(),
            normalized_url: None,
            score,
            explanation: None,
            reputation_checks: vec![],
            heuristic_hits: vec![],
        }
    }

    #[test]
    fn test_state_starts_idle_and_empty() {
        let state = SubmissionState::new();
        assert_eq!(state.phase, SubmissionPhase::Idle);
        assert!(state.result.is_none());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_terminal_fields_are_mutually_exclusive() {
        let mut state = SubmissionState::new();

        state.begin_loading();
        assert_eq!(state.phase, SubmissionPhase::Loading);

        state.complete(report(10.0));
        assert_eq!(state.phase, SubmissionPhase::Succeeded);
        assert!(state.result.is_some());
        assert!(state.error_message.is_none());

        state.begin_loading();
        assert!(state.result.is_none());

        state.fail("boom".to_string());
        assert_eq!(state.phase, SubmissionPhase::Failed);
        assert!(state.result.is_none());
        assert_eq!(state.error_message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_analyze_request_serializes_to_expected_body() {
        let body = serde_json::to_value(AnalyzeRequest {
            url: "https://example.com".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"url": "https://example.com"}));
    }
}
