use std::cell::Cell;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{Level, debug, error, info, instrument};

use api::mail::{MailRoute, SendEmailReq, SendEmailResp, TemplateParams, send_email};

use crate::{
    config::ContactConfig,
    notify::{Notification, Notify},
    timer::Scheduler,
    validate_email,
};

pub const SENT_MESSAGE: &str = "Thank you for reaching out! We'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

// structs and types

// the raw contents of the contact form, as typed
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

// the Display text is exactly what the user is shown
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingField,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

// a contact form submission that passed local validation
//
// only constructed through TryFrom, so holding one means every field is
// trimmed and non-empty and the email has a plausible shape
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl TryFrom<&ContactFields> for ContactSubmission {
    type Error = ContactError;

    fn try_from(fields: &ContactFields) -> Result<Self, Self::Error> {
        let submission = ContactSubmission {
            name: fields.name.trim().to_owned(),
            email: fields.email.trim().to_owned(),
            subject: fields.subject.trim().to_owned(),
            message: fields.message.trim().to_owned(),
        };

        if submission.name.is_empty()
            || submission.email.is_empty()
            || submission.subject.is_empty()
            || submission.message.is_empty()
        {
            return Err(ContactError::MissingField);
        }

        if !validate_email(&submission.email) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(submission)
    }
}

impl ContactSubmission {
    pub fn into_template_params(self, recipient: &str) -> TemplateParams {
        TemplateParams {
            from_name: self.name,
            from_email: self.email,
            subject: self.subject,
            message: self.message,
            to_email: recipient.to_owned(),
        }
    }
}

// the external mail-delivery service
//
// exactly one outcome per call: a receipt (kept for diagnostics) or an error
#[async_trait(?Send)]
pub trait MailDelivery {
    async fn send(&self, route: &MailRoute, params: &TemplateParams)
    -> anyhow::Result<SendEmailResp>;
}

// MailDelivery over the EmailJS rest api
#[derive(Clone, Debug)]
pub struct EmailJs {
    endpoint: String,
}

impl EmailJs {
    pub fn new(config: &ContactConfig) -> Self {
        EmailJs {
            endpoint: config.endpoint.clone(),
        }
    }
}

#[async_trait(?Send)]
impl MailDelivery for EmailJs {
    async fn send(
        &self,
        route: &MailRoute,
        params: &TemplateParams,
    ) -> anyhow::Result<SendEmailResp> {
        send_email(&self.endpoint, &SendEmailReq::new(route, params.clone())).await
    }
}

// the form as the controller sees it
//
// set_pulse toggles the brief scale feedback shown after a successful send
pub trait ContactForm {
    fn values(&self) -> ContactFields;

    fn set_pending(&self, pending: bool);

    fn reset(&self);

    fn set_pulse(&self, active: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Validating,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    // another submission was still in flight; nothing happened
    Busy,
    Rejected(ContactError),
    Delivered,
    Failed,
}

// ContactController
//
// drives one contact form through Idle -> Validating -> Sending ->
// {Succeeded, Failed} -> Idle.  the state is checked before anything else, so
// a second submit while a send is outstanding is refused here regardless of
// whether the button has been disabled yet
pub struct ContactController<M, F, N, T> {
    mailer: M,
    form: F,
    notices: N,
    scheduler: T,
    route: MailRoute,
    recipient: String,
    pulse_ms: u32,
    state: Cell<SubmissionState>,
}

impl<M, F, N, T> ContactController<M, F, N, T>
where
    M: MailDelivery,
    F: ContactForm + Clone + 'static,
    N: Notify,
    T: Scheduler,
{
    pub fn new(mailer: M, form: F, notices: N, scheduler: T, config: &ContactConfig) -> Self {
        ContactController {
            mailer,
            form,
            notices,
            scheduler,
            route: config.route(),
            recipient: config.recipient.clone(),
            pulse_ms: config.pulse_ms,
            state: Cell::new(SubmissionState::Idle),
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state.get()
    }

    #[instrument(level=Level::DEBUG, skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        if self.state.get() != SubmissionState::Idle {
            debug!("submission already in flight");
            return SubmitOutcome::Busy;
        }

        self.state.set(SubmissionState::Validating);

        let submission = match ContactSubmission::try_from(&self.form.values()) {
            Ok(val) => val,
            Err(err) => {
                debug!("contact form rejected: {err}");
                self.notices.notify(Notification::error(err.to_string()));
                self.state.set(SubmissionState::Idle);
                return SubmitOutcome::Rejected(err);
            }
        };

        let in_flight = InFlight::begin(&self.form, &self.state);

        let params = submission.into_template_params(&self.recipient);
        let result = self.mailer.send(&self.route, &params).await;

        in_flight.settle();

        let outcome = match result {
            Ok(receipt) => {
                self.state.set(SubmissionState::Succeeded);
                info!(
                    status = receipt.status,
                    text = %receipt.text,
                    "contact message sent"
                );

                self.form.reset();
                self.notices.notify(Notification::success(SENT_MESSAGE));
                self.pulse();

                SubmitOutcome::Delivered
            }
            Err(err) => {
                self.state.set(SubmissionState::Failed);
                error!("contact message failed: {err:#}");

                self.notices.notify(Notification::error(FAILED_MESSAGE));

                SubmitOutcome::Failed
            }
        };

        self.state.set(SubmissionState::Idle);
        outcome
    }

    fn pulse(&self) {
        self.form.set_pulse(true);

        let form = self.form.clone();
        self.scheduler
            .after(self.pulse_ms, Box::new(move || form.set_pulse(false)));
    }
}

// the Sending window
//
// if the submit future is dropped before the send settles, the guard puts
// the controller back to Idle and clears the pending mark on the form
struct InFlight<'a, F: ContactForm> {
    form: &'a F,
    state: &'a Cell<SubmissionState>,
    settled: bool,
}

impl<'a, F: ContactForm> InFlight<'a, F> {
    fn begin(form: &'a F, state: &'a Cell<SubmissionState>) -> Self {
        state.set(SubmissionState::Sending);
        form.set_pending(true);

        InFlight {
            form,
            state,
            settled: false,
        }
    }

    fn settle(mut self) {
        self.settled = true;
        self.form.set_pending(false);
    }
}

impl<F: ContactForm> Drop for InFlight<'_, F> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("contact submission abandoned while sending");
            self.form.set_pending(false);
            self.state.set(SubmissionState::Idle);
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
