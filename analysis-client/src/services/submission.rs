//! Submission workflow controller
//!
//! Orchestrates one URL submission at a time: normalizes the input,
//! resolves the endpoint for the current deployment context, performs the
//! request, and folds the outcome back into [`SubmissionState`]. At most
//! one request is in flight per controller; a submit while one is pending
//! is rejected.

use crate::models::{SubmissionPhase, SubmissionState};
use crate::services::api_client::AnalyzeApi;
use crate::services::endpoint::EndpointResolver;
use crate::utils::errors::SubmitError;
use crate::utils::validation::normalize;
use tracing::{debug, error, info, warn};

pub struct SubmissionController<A: AnalyzeApi> {
    api: A,
    resolver: EndpointResolver,
    origin: String,
    dev_build: bool,
    state: SubmissionState,
}

impl<A: AnalyzeApi> SubmissionController<A> {
    pub fn new(api: A, resolver: EndpointResolver, origin: &str, dev_build: bool) -> Self {
        Self {
            api,
            resolver,
            origin: origin.to_string(),
            dev_build,
            state: SubmissionState::new(),
        }
    }

    /// Read access for the presentation layer.
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Submit raw user text for analysis.
    ///
    /// Always leaves the state in a terminal phase (`Succeeded` or
    /// `Failed`) unless the call was rejected as re-entrant; the match on
    /// the transport outcome is the unconditional release out of
    /// `Loading`.
    pub async fn submit(&mut self, raw_input: &str) {
        if self.state.phase == SubmissionPhase::Loading {
            warn!(
                phase = self.state.phase.as_str(),
                "submission already in flight, ignoring re-entrant submit"
            );
            return;
        }

        self.state.input_text = raw_input.to_string();

        let canonical = match normalize(raw_input) {
            Ok(url) => url,
            Err(err) => {
                debug!(%err, "input rejected before submission");
                self.state.fail(SubmitError::from(err).user_message());
                return;
            }
        };

        self.state.begin_loading();

        let endpoint = self.resolver.resolve(&self.origin, self.dev_build);
        let request_url = endpoint.request_url(&self.origin);
        info!(url = %canonical, endpoint = %request_url, "submitting URL for analysis");

        match self.api.analyze(&request_url, &canonical).await {
            Ok(report) => {
                info!(score = report.score, "analysis completed");
                self.state.complete(report);
            }
            Err(err) => {
                error!(%err, "analysis request failed");
                self.state.fail(err.user_message());
            }
        }
    }
}
