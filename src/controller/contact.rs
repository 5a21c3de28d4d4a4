use actix_web::dev::HttpServiceFactory;
use actix_web::http::header;
use actix_web::{options, post, web, HttpResponse, Responder};

use anyhow::Context;

use chrono::NaiveDate;

use serde::{Deserialize, Serialize};

use crate::domain::{CallDate, EmailAddress, PhoneNumber};
use crate::error::{RejectReason, RestResult};
use crate::model::NewSubmission;
use crate::repo::SubmissionRepo;

const SCHEDULED_MESSAGE: &str = "Call scheduled successfully! We'll be in touch shortly.";

/// JSON deserialization wrapper for incoming submissions.
/// Every field is optional here so that absent fields are reported as missing, not as malformed JSON.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    phone: Option<String>,
    service: Option<String>,
    call_date: Option<String>,
    call_time: Option<String>,
    message: Option<String>,
    newsletter: Option<bool>,
}

impl ContactForm {
    /// Server-side validation, fail-fast in this order:
    /// presence, email shape, phone shape, call date not before `today`.
    /// Optional fields pass through unchecked.
    pub fn validate(self, today: NaiveDate) -> Result<NewSubmission, RejectReason> {
        let (name, email, phone, service, call_date, call_time) = match (
            required(self.name),
            required(self.email),
            required(self.phone),
            required(self.service),
            required(self.call_date),
            required(self.call_time),
        ) {
            (Some(name), Some(email), Some(phone), Some(service), Some(date), Some(time)) => {
                (name, email, phone, service, date, time)
            }
            _ => return Err(RejectReason::MissingFields),
        };

        let email: EmailAddress = email.parse()?;
        let phone: PhoneNumber = phone.parse()?;
        let call_date = CallDate::parse_not_before(&call_date, today)?;

        Ok(NewSubmission {
            name,
            email,
            company: required(self.company),
            phone,
            service,
            call_date,
            call_time,
            message: required(self.message),
            newsletter: self.newsletter.unwrap_or(false),
        })
    }
}

/// Empty strings count as absent
fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[derive(Debug, Serialize)]
struct ScheduledCall {
    success: bool,
    message: &'static str,
}

/// Create endpoint for call-scheduling submissions
#[tracing::instrument(name = "Schedule a call", skip(repo, body))]
#[post("")]
async fn create(repo: web::Data<dyn SubmissionRepo>, body: web::Bytes) -> RestResult<impl Responder> {
    // Malformed bodies are an unexpected failure, not a rejection
    let form: ContactForm =
        serde_json::from_slice(&body).context("Failed to deserialize contact submission")?;

    let new_submission = form.validate(CallDate::today()).map_err(|reason| {
        tracing::info!(%reason, "Rejected contact submission");
        reason
    })?;

    repo.insert(&new_submission).await?;

    Ok(HttpResponse::Ok().json(ScheduledCall {
        success: true,
        message: SCHEDULED_MESSAGE,
    }))
}

/// CORS preflight for the create endpoint
#[tracing::instrument(name = "Contact preflight")]
#[options("")]
async fn preflight() -> impl Responder {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
        .finish()
}

/// Contact API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/api/contact").service(create).service(preflight)
}
