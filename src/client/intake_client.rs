use anyhow::Context;

use reqwest::Client;

use url::Url;

use crate::model::ContactSubmission;

const CONTACT_ENDPOINT_PATH: &str = "api/contact";

/// Outcome of handing a submission to the intake endpoint.
/// Rejections and network failures are deliberately indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Accepted,
    Failed,
}

/// Anything that can carry a submission to the server
#[async_trait::async_trait]
pub trait IntakeTransport: Send + Sync {
    async fn deliver(&self, submission: &ContactSubmission) -> Delivery;
}

/// HTTP transport posting JSON submissions to the contact endpoint.
/// No timeout is configured; a request resolves whenever the connection does.
#[derive(Debug, Clone)]
pub struct IntakeClient {
    client: Client,
    endpoint: Url,
}

impl IntakeClient {
    pub fn new(base_url: Url) -> anyhow::Result<Self> {
        let endpoint = base_url
            .join(CONTACT_ENDPOINT_PATH)
            .context("Failed to create contact endpoint URL")?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }
}

#[async_trait::async_trait]
impl IntakeTransport for IntakeClient {
    #[tracing::instrument(name = "Deliver contact submission", skip(self, submission))]
    async fn deliver(&self, submission: &ContactSubmission) -> Delivery {
        let res = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await;

        match res {
            Ok(res) if res.status().is_success() => Delivery::Accepted,
            Ok(res) => {
                tracing::warn!(status = %res.status(), "Intake endpoint refused submission");
                Delivery::Failed
            }
            Err(error) => {
                tracing::warn!(error.cause_chain = ?error, "Failed to reach intake endpoint");
                Delivery::Failed
            }
        }
    }
}
