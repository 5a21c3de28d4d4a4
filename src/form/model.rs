use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::client::{Delivery, IntakeTransport};
use crate::domain::{ServiceOffering, CALL_TIME_SLOTS};
use crate::model::ContactSubmission;

use super::validator::{self, ClientValidationError};

/// How long the success message stays up before the dialog closes itself
pub const CLOSE_DELAY: Duration = Duration::from_secs(2);

const SUCCESS_MESSAGE: &str = "Call scheduled successfully! We'll contact you at the specified time.";
const ERROR_MESSAGE: &str = "Failed to schedule call. Please try again or contact us directly.";

/// Text fields of the scheduling form, named as on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    Phone,
    Service,
    CallDate,
    CallTime,
    Message,
}

impl FormField {
    /// Fields the browser refuses to submit empty, in form order
    pub const REQUIRED: [FormField; 6] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::Service,
        Self::CallDate,
        Self::CallTime,
    ];

    pub fn value_in(self, fields: &ContactSubmission) -> &str {
        match self {
            Self::Name => &fields.name,
            Self::Email => &fields.email,
            Self::Company => &fields.company,
            Self::Phone => &fields.phone,
            Self::Service => &fields.service,
            Self::CallDate => &fields.call_date,
            Self::CallTime => &fields.call_time,
            Self::Message => &fields.message,
        }
    }

    fn value_in_mut(self, fields: &mut ContactSubmission) -> &mut String {
        match self {
            Self::Name => &mut fields.name,
            Self::Email => &mut fields.email,
            Self::Company => &mut fields.company,
            Self::Phone => &mut fields.phone,
            Self::Service => &mut fields.service,
            Self::CallDate => &mut fields.call_date,
            Self::CallTime => &mut fields.call_time,
            Self::Message => &mut fields.message,
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "company" => Ok(Self::Company),
            "phone" => Ok(Self::Phone),
            "service" => Ok(Self::Service),
            "callDate" => Ok(Self::CallDate),
            "callTime" => Ok(Self::CallTime),
            "message" => Ok(Self::Message),
            other => Err(format!("{} is not a form field", other)),
        }
    }
}

impl AsRef<str> for FormField {
    fn as_ref(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::Phone => "phone",
            Self::Service => "service",
            Self::CallDate => "callDate",
            Self::CallTime => "callTime",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Submission status shown under the form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    /// Fixed user-facing banner, never the server's own error text
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_MESSAGE),
            Self::Error => Some(ERROR_MESSAGE),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// State behind the call-scheduling dialog: field values, status, and the pending auto-close.
/// Pure state; the only I/O happens inside the transport handed to [`ContactFormModel::submit`].
#[derive(Debug, Default)]
pub struct ContactFormModel {
    fields: ContactSubmission,
    status: FormStatus,
    open: bool,
    close_at: Option<Instant>,
}

impl ContactFormModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog, cancelling any scheduled close
    pub fn close(&mut self) {
        self.open = false;
        self.close_at = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    /// Options for the service picker
    pub fn service_options(&self) -> &'static [ServiceOffering] {
        &ServiceOffering::ALL
    }

    /// Options for the time picker
    pub fn time_slots(&self) -> &'static [&'static str] {
        &CALL_TIME_SLOTS
    }

    /// Replace one field's value. No validation happens here.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *field.value_in_mut(&mut self.fields) = value.into();
    }

    pub fn set_newsletter(&mut self, subscribe: bool) {
        self.fields.newsletter = subscribe;
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        self.status != FormStatus::Submitting
    }

    /// Clear every field and return to `Idle`
    pub fn reset(&mut self) {
        self.fields = ContactSubmission::default();
        self.status = FormStatus::Idle;
        self.close_at = None;
    }

    /// Run the client checks and freeze the fields for sending.
    /// A blocked submission leaves the form untouched.
    pub fn start_submit(&mut self) -> Result<ContactSubmission, ClientValidationError> {
        validator::check(&self.fields, validator::min_call_date())?;

        self.status = FormStatus::Submitting;
        Ok(self.fields.clone())
    }

    /// Apply the transport outcome.
    /// On success the fields are cleared at once and a close is scheduled [`CLOSE_DELAY`] from `now`.
    pub fn finish_submit(&mut self, delivery: Delivery, now: Instant) -> FormStatus {
        match delivery {
            Delivery::Accepted => {
                self.fields = ContactSubmission::default();
                self.status = FormStatus::Success;
                self.close_at = Some(now + CLOSE_DELAY);
            }
            Delivery::Failed => {
                self.status = FormStatus::Error;
            }
        }
        self.status
    }

    /// Validate, send through `transport`, and record the outcome
    pub async fn submit<T>(&mut self, transport: &T) -> Result<FormStatus, ClientValidationError>
    where
        T: IntakeTransport + ?Sized,
    {
        let submission = self.start_submit()?;
        let delivery = transport.deliver(&submission).await;
        Ok(self.finish_submit(delivery, Instant::now()))
    }

    /// When the scheduled close fires, if one is pending
    pub fn close_due_at(&self) -> Option<Instant> {
        self.close_at
    }

    /// Apply the scheduled close-and-reset if it is due at `now`.
    /// Returns whether it fired.
    pub fn poll_close(&mut self, now: Instant) -> bool {
        match self.close_at {
            Some(at) if at <= now => {
                self.close();
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Sleep until the scheduled close, then apply it
    pub async fn wait_for_close(&mut self) {
        if let Some(at) = self.close_at {
            tokio::time::sleep_until(at.into()).await;
            self.poll_close(at);
        }
    }
}
