use chrono::{DateTime, NaiveDate, Utc};

use serde::{Deserialize, Serialize};

use uuid::Uuid;

use crate::domain::{CallDate, EmailAddress, PhoneNumber};

/// Submission as it travels from the form to the server, using the form's camelCase field names.
/// Nothing here has been validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub service: String,
    pub call_date: String,
    pub call_time: String,
    pub message: String,
    pub newsletter: bool,
}

/// Submission that passed server validation and is ready to persist
#[derive(Debug, Clone, PartialEq)]
pub struct NewSubmission {
    pub name: String,
    pub email: EmailAddress,
    pub company: Option<String>,
    pub phone: PhoneNumber,
    pub service: String,
    pub call_date: CallDate,
    pub call_time: String,
    pub message: Option<String>,
    pub newsletter: bool,
}

/// Follow-up state of a stored submission.
/// Always `Pending` on insert; later transitions belong to the back office.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Contacted,
    Completed,
}

/// Stored submission record, as returned by the store after insert
#[derive(Debug, Clone, Deserialize)]
pub struct StoredSubmission {
    /// Assigned by the store
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: String,
    pub service: String,
    pub call_date: NaiveDate,
    pub call_time: String,
    pub message: Option<String>,
    pub newsletter: bool,
    pub status: SubmissionStatus,
    /// Assigned by the store
    pub created_at: DateTime<Utc>,
}
