//! Interview Round Model

use serde::{Deserialize, Serialize};

/// Interview round status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

/// Interview round entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRound {
    pub id: Option<String>,
    /// Job reference (String ID)
    pub job: String,
    /// Candidate reference (String ID)
    pub candidate: String,
    /// Interviewer user reference (String ID)
    pub interviewer: String,
    /// 1-based position in the interview pipeline
    pub round_number: i32,
    pub scheduled_at: Option<String>,
    pub status: RoundStatus,
    pub feedback: Option<String>,
}

/// Create interview round payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRoundCreate {
    pub job: String,
    pub candidate: String,
    pub interviewer: String,
    pub round_number: Option<i32>,
    pub scheduled_at: Option<String>,
}

/// Update interview round payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewRoundUpdate {
    pub interviewer: Option<String>,
    pub round_number: Option<i32>,
    pub scheduled_at: Option<String>,
    pub status: Option<RoundStatus>,
    pub feedback: Option<String>,
}
