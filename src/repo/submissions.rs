use std::time::Duration;

use anyhow::Context;

use reqwest::Client;

use secrecy::Secret;

use serde::Serialize;

use url::Url;

use crate::model::{NewSubmission, StoredSubmission, SubmissionStatus};

const SUBMISSIONS_TABLE_PATH: &str = "rest/v1/contact_submissions";
const API_KEY_HEADER: &str = "apikey";

/// Errors raised by the submissions store.
/// The detail is for server logs only and must never reach the caller.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store request failed")]
    Request(#[from] reqwest::Error),
    #[error("Store refused the insert with status {0}")]
    Refused(reqwest::StatusCode),
}

/// Submission repository trait, implemented for each store the service can write to.
/// NOTE: Intended to facilitate easier testing/mocking
#[async_trait::async_trait]
pub trait SubmissionRepo: Send + Sync {
    /// Insert a validated submission as a new `pending` record.
    /// Success depends on the store accepting the insert. The echoed record is returned
    /// when the store sends one back in the expected shape, and is `None` otherwise.
    async fn insert(
        &self,
        new_submission: &NewSubmission,
    ) -> Result<Option<StoredSubmission>, StoreError>;
}

/// Repository backed by the hosted store's REST interface.
/// Authenticates with the service key, so inserts bypass row-level policies.
/// Server-side only.
#[derive(Debug)]
pub struct SupabaseRepo {
    client: Client,

    insert_url: Url,
    anon_key: Secret<String>,
    service_key: Secret<String>,
}

impl SupabaseRepo {
    pub fn new(
        base_url: Url,
        anon_key: Secret<String>,
        service_key: Secret<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build http client")?;

        let insert_url = base_url
            .join(SUBMISSIONS_TABLE_PATH)
            .context("Failed to create submissions endpoint URL")?;

        Ok(Self {
            client,
            insert_url,
            anon_key,
            service_key,
        })
    }
}

#[async_trait::async_trait]
impl SubmissionRepo for SupabaseRepo {
    #[tracing::instrument(name = "Insert contact submission", skip(self, new_submission))]
    async fn insert(
        &self,
        new_submission: &NewSubmission,
    ) -> Result<Option<StoredSubmission>, StoreError> {
        use secrecy::ExposeSecret;

        let body = InsertSubmissionRow::from(new_submission);

        let res = self
            .client
            .post(self.insert_url.clone())
            .header(API_KEY_HEADER, self.anon_key.expose_secret())
            .bearer_auth(self.service_key.expose_secret())
            .header("Prefer", "return=representation")
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(StoreError::Refused(status));
        }

        // The row is persisted at this point, whatever the echoed body looks like
        let bytes = match res.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Failed to read inserted contact submission");
                return Ok(None);
            }
        };
        match serde_json::from_slice::<Vec<StoredSubmission>>(&bytes) {
            Ok(rows) => match rows.into_iter().next() {
                Some(stored) => {
                    tracing::info!(submission.id = %stored.id, "Stored contact submission");
                    Ok(Some(stored))
                }
                None => {
                    tracing::info!("Stored contact submission, store returned no row");
                    Ok(None)
                }
            },
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    "Stored contact submission, returned row has an unexpected shape"
                );
                Ok(None)
            }
        }
    }
}

/// Row shape of the `contact_submissions` table, minus store-assigned columns
#[derive(Debug, Serialize)]
struct InsertSubmissionRow<'a> {
    name: &'a str,
    email: &'a str,
    company: Option<&'a str>,
    phone: &'a str,
    service: &'a str,
    call_date: String,
    call_time: &'a str,
    message: Option<&'a str>,
    newsletter: bool,
    status: SubmissionStatus,
}

impl<'a> From<&'a NewSubmission> for InsertSubmissionRow<'a> {
    fn from(value: &'a NewSubmission) -> Self {
        Self {
            name: &value.name,
            email: value.email.as_ref(),
            company: value.company.as_deref(),
            phone: value.phone.as_ref(),
            service: &value.service,
            call_date: value.call_date.to_string(),
            call_time: &value.call_time,
            message: value.message.as_deref(),
            newsletter: value.newsletter,
            status: SubmissionStatus::Pending,
        }
    }
}
