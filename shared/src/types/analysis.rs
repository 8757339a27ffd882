use serde::{Deserialize, Serialize};

/// Verdict status reported by a single reputation source.
///
/// The wire format uses `POSITIVE` (listed as malicious by the source),
/// `NEGATIVE` (not listed) and `UNKNOWN` (source unavailable or not
/// configured). Deserialization is total: any status string this client
/// does not recognize collapses to `Unknown` rather than failing the
/// whole report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReputationStatus {
    Positive,
    Negative,
    #[serde(other)]
    Unknown,
}

impl ReputationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ReputationStatus::Positive => "POSITIVE",
            ReputationStatus::Negative => "NEGATIVE",
            ReputationStatus::Unknown => "UNKNOWN",
        }
    }

    /// Display label for a reputation status.
    ///
    /// A source flagging the URL (`POSITIVE`) reads as "malicious", a
    /// clean result (`NEGATIVE`) as "safe", and everything else as
    /// "indeterminate".
    pub fn verdict_label(&self) -> &str {
        match self {
            ReputationStatus::Positive => "malicious",
            ReputationStatus::Negative => "safe",
            ReputationStatus::Unknown => "indeterminate",
        }
    }
}

/// One reputation-source result item from the analysis service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReputationCheck {
    pub source: String,
    pub status: ReputationStatus,
    pub reason: Option<String>,
    pub elapsed_ms: Option<u64>,
}

/// Parsed response of a successful URL analysis.
///
/// Immutable once constructed; discarded when a new submission begins.
/// `score` is required — a body without it is a parse failure, never a
/// defaulted zero, since silently understating risk would mislead the
/// user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub id: Option<i64>,
    pub url: String,
    pub normalized_url: Option<String>,
    pub score: f64,
    pub explanation: Option<String>,
    #[serde(default)]
    pub reputation_checks: Vec<ReputationCheck>,
    #[serde(default)]
    pub heuristic_hits: Vec<serde_json::Value>,
}

impl AnalysisReport {
    /// Verdict band for this report's score.
    pub fn verdict(&self) -> VerdictBand {
        VerdictBand::from_score(self.score)
    }
}

/// Discrete risk band derived from the 0-100 score, for display only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VerdictBand {
    Safe,
    Suspicious,
    Malicious,
}

impl VerdictBand {
    /// Map a numeric risk score into its band.
    ///
    /// Boundary values belong to the higher band: exactly 50 is
    /// `Suspicious`, exactly 80 is `Malicious`.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            VerdictBand::Malicious
        } else if score >= 50.0 {
            VerdictBand::Suspicious
        } else {
            VerdictBand::Safe
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerdictBand::Safe => "safe",
            VerdictBand::Suspicious => "suspicious",
            VerdictBand::Malicious => "malicious",
        }
    }
}
