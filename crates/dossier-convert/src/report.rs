use serde::{Deserialize, Serialize};

/// How a single backend attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    /// The engine is not installed on this machine.
    Unavailable,
    /// The engine is present but errored while converting.
    Failed,
}

/// Record of one failed conversion attempt, in the order it was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptReport {
    pub backend: String,
    pub status: AttemptStatus,
    pub reason: String,
}

/// Result of a full pass over the backend list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvertOutcome {
    /// `backend` wrote the artifact; `attempts` are the failures before it.
    Rendered {
        backend: String,
        attempts: Vec<AttemptReport>,
    },
    /// Every backend failed or was unavailable. Not a process failure;
    /// the caller shows remediation instructions instead.
    Exhausted { attempts: Vec<AttemptReport> },
}
