use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use futures::channel::oneshot;

use super::*;
use crate::{
    config::NotifyConfig,
    notify::{NotificationCenter, NotificationKind, NotificationPhase},
    support::{ManualScheduler, RecordingSurface},
};

type Reply = anyhow::Result<SendEmailResp>;

#[derive(Clone, Default)]
struct FakeMailer {
    calls: Rc<RefCell<Vec<(MailRoute, TemplateParams)>>>,
    replies: Rc<RefCell<VecDeque<oneshot::Receiver<Reply>>>>,
}

impl FakeMailer {
    fn reply_with(&self, reply: Reply) {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(reply);
        self.replies.borrow_mut().push_back(rx);
    }

    // the next send stays outstanding until the returned sender is used
    fn gated(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(rx);
        tx
    }

    fn calls(&self) -> Vec<(MailRoute, TemplateParams)> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl MailDelivery for FakeMailer {
    async fn send(&self, route: &MailRoute, params: &TemplateParams) -> Reply {
        self.calls
            .borrow_mut()
            .push((route.clone(), params.clone()));

        let reply = self
            .replies
            .borrow_mut()
            .pop_front()
            .expect("unexpected send");

        reply.await.expect("reply dropped")
    }
}

#[derive(Clone, Default)]
struct FakeForm {
    fields: Rc<RefCell<ContactFields>>,
    pending: Rc<RefCell<Vec<bool>>>,
    pulse: Rc<RefCell<Vec<bool>>>,
}

impl FakeForm {
    fn fill(&self, fields: ContactFields) {
        *self.fields.borrow_mut() = fields;
    }

    fn fields(&self) -> ContactFields {
        self.fields.borrow().clone()
    }

    fn pending_history(&self) -> Vec<bool> {
        self.pending.borrow().clone()
    }

    fn pulse_history(&self) -> Vec<bool> {
        self.pulse.borrow().clone()
    }
}

impl ContactForm for FakeForm {
    fn values(&self) -> ContactFields {
        self.fields()
    }

    fn set_pending(&self, pending: bool) {
        self.pending.borrow_mut().push(pending);
    }

    fn reset(&self) {
        *self.fields.borrow_mut() = ContactFields::default();
    }

    fn set_pulse(&self, active: bool) {
        self.pulse.borrow_mut().push(active);
    }
}

#[derive(Clone, Default)]
struct Notices {
    shown: Rc<RefCell<Vec<Notification>>>,
}

impl Notices {
    fn shown(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }
}

impl Notify for Notices {
    fn notify(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

struct Harness {
    controller: ContactController<FakeMailer, FakeForm, Notices, ManualScheduler>,
    mailer: FakeMailer,
    form: FakeForm,
    notices: Notices,
    scheduler: ManualScheduler,
}

fn config() -> ContactConfig {
    ContactConfig {
        service_id: "service_studio".to_owned(),
        template_id: "template_contact".to_owned(),
        public_key: "pk_123".to_owned(),
        recipient: "hello@studio.test".to_owned(),
        ..ContactConfig::default()
    }
}

fn harness() -> Harness {
    let mailer = FakeMailer::default();
    let form = FakeForm::default();
    let notices = Notices::default();
    let scheduler = ManualScheduler::new();

    let controller = ContactController::new(
        mailer.clone(),
        form.clone(),
        notices.clone(),
        scheduler.clone(),
        &config(),
    );

    Harness {
        controller,
        mailer,
        form,
        notices,
        scheduler,
    }
}

fn ann() -> ContactFields {
    ContactFields {
        name: "Ann".to_owned(),
        email: "ann@x.com".to_owned(),
        subject: "Hi".to_owned(),
        message: "Hello".to_owned(),
    }
}

fn receipt() -> SendEmailResp {
    SendEmailResp {
        status: 200,
        text: "OK".to_owned(),
    }
}

#[test]
fn submission_trims_fields() {
    let fields = ContactFields {
        name: "  Ann ".to_owned(),
        email: "\tann@x.com\n".to_owned(),
        subject: " Hi".to_owned(),
        message: "Hello  ".to_owned(),
    };

    let params = ContactSubmission::try_from(&fields)
        .expect("valid")
        .into_template_params("hello@studio.test");

    assert_eq!(params.from_name, "Ann");
    assert_eq!(params.from_email, "ann@x.com");
    assert_eq!(params.subject, "Hi");
    assert_eq!(params.message, "Hello");
    assert_eq!(params.to_email, "hello@studio.test");
}

#[test]
fn blank_field_is_missing_even_when_email_is_bad() {
    let mut fields = ann();
    fields.email = "nope".to_owned();
    fields.message = "   ".to_owned();

    assert_eq!(
        ContactSubmission::try_from(&fields),
        Err(ContactError::MissingField)
    );
}

#[tokio::test]
async fn each_blank_field_is_rejected_without_sending() {
    let blanks: [fn(&mut ContactFields); 4] = [
        |f| f.name = "  ".to_owned(),
        |f| f.email = String::new(),
        |f| f.subject = "\t".to_owned(),
        |f| f.message = "\n ".to_owned(),
    ];

    for blank in blanks {
        let h = harness();
        let mut fields = ann();
        blank(&mut fields);
        h.form.fill(fields.clone());

        let outcome = h.controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::MissingField));
        assert!(h.mailer.calls().is_empty());
        assert_eq!(
            h.notices.shown(),
            vec![Notification::error("Please fill in all fields")]
        );
        assert_eq!(h.form.fields(), fields);
        assert!(h.form.pending_history().is_empty());
        assert_eq!(h.controller.state(), SubmissionState::Idle);
    }
}

#[tokio::test]
async fn malformed_email_is_rejected_without_sending() {
    let h = harness();
    let mut fields = ann();
    fields.email = "not-an-email".to_owned();
    h.form.fill(fields);

    let outcome = h.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected(ContactError::InvalidEmail));
    assert!(h.mailer.calls().is_empty());

    let shown = h.notices.shown();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].kind, NotificationKind::Error);
    assert!(shown[0].message.contains("valid email address"));
}

#[tokio::test]
async fn delivered_submission_resets_form() {
    let h = harness();
    h.form.fill(ann());
    h.mailer.reply_with(Ok(receipt()));

    let outcome = h.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Delivered);
    assert_eq!(h.form.fields(), ContactFields::default());
    assert_eq!(h.form.pending_history(), vec![true, false]);
    assert_eq!(h.notices.shown(), vec![Notification::success(SENT_MESSAGE)]);
    assert_eq!(h.controller.state(), SubmissionState::Idle);

    let calls = h.mailer.calls();
    assert_eq!(calls.len(), 1);

    let (route, params) = &calls[0];
    assert_eq!(route.service_id, "service_studio");
    assert_eq!(route.template_id, "template_contact");
    assert_eq!(route.public_key, "pk_123");
    assert_eq!(
        params,
        &TemplateParams {
            from_name: "Ann".to_owned(),
            from_email: "ann@x.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
            to_email: "hello@studio.test".to_owned(),
        }
    );
}

#[tokio::test]
async fn delivered_submission_pulses_form_briefly() {
    let h = harness();
    h.form.fill(ann());
    h.mailer.reply_with(Ok(receipt()));

    h.controller.submit().await;
    assert_eq!(h.form.pulse_history(), vec![true]);

    h.scheduler.advance(199);
    assert_eq!(h.form.pulse_history(), vec![true]);

    h.scheduler.advance(1);
    assert_eq!(h.form.pulse_history(), vec![true, false]);
}

#[tokio::test]
async fn failed_submission_keeps_input() {
    let h = harness();
    h.form.fill(ann());
    h.mailer
        .reply_with(Err(anyhow::Error::msg("mail service returned 412: bad key")));

    let outcome = h.controller.submit().await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    assert_eq!(h.form.fields(), ann());
    assert_eq!(h.form.pending_history(), vec![true, false]);
    assert!(h.form.pulse_history().is_empty());

    // the service's detail stays out of the user-facing message
    assert_eq!(h.notices.shown(), vec![Notification::error(FAILED_MESSAGE)]);
    assert_eq!(h.controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn failed_submission_can_be_retried() {
    let h = harness();
    h.form.fill(ann());
    h.mailer.reply_with(Err(anyhow::Error::msg("offline")));
    h.mailer.reply_with(Ok(receipt()));

    assert_eq!(h.controller.submit().await, SubmitOutcome::Failed);
    assert_eq!(h.controller.submit().await, SubmitOutcome::Delivered);

    assert_eq!(h.mailer.calls().len(), 2);
    assert_eq!(h.form.fields(), ContactFields::default());
}

#[tokio::test]
async fn second_submit_while_sending_is_refused() {
    let h = harness();
    h.form.fill(ann());
    let gate = h.mailer.gated();

    let first = h.controller.submit();
    futures::pin_mut!(first);
    assert!(futures::poll!(first.as_mut()).is_pending());
    assert_eq!(h.controller.state(), SubmissionState::Sending);
    assert_eq!(h.form.pending_history(), vec![true]);

    assert_eq!(h.controller.submit().await, SubmitOutcome::Busy);
    assert_eq!(h.mailer.calls().len(), 1);
    assert!(h.notices.shown().is_empty());

    let _ = gate.send(Ok(receipt()));

    assert_eq!(first.await, SubmitOutcome::Delivered);
    assert_eq!(h.mailer.calls().len(), 1);
    assert_eq!(h.controller.state(), SubmissionState::Idle);
}

#[tokio::test]
async fn dropped_submit_releases_the_form() {
    let h = harness();
    h.form.fill(ann());
    let _gate = h.mailer.gated();

    {
        let first = h.controller.submit();
        futures::pin_mut!(first);
        assert!(futures::poll!(first.as_mut()).is_pending());
        assert_eq!(h.controller.state(), SubmissionState::Sending);
    }

    assert_eq!(h.controller.state(), SubmissionState::Idle);
    assert_eq!(h.form.pending_history(), vec![true, false]);
    assert!(h.notices.shown().is_empty());

    h.mailer.reply_with(Ok(receipt()));
    assert_eq!(h.controller.submit().await, SubmitOutcome::Delivered);
    assert_eq!(h.mailer.calls().len(), 2);
}

#[tokio::test]
async fn success_notification_is_dismissed_after_dwell() {
    let surface = RecordingSurface::new();
    let scheduler = ManualScheduler::new();
    let center =
        NotificationCenter::new(surface.clone(), scheduler.clone(), NotifyConfig::default());
    let mailer = FakeMailer::default();
    let form = FakeForm::default();
    let controller =
        ContactController::new(mailer.clone(), form.clone(), center.clone(), scheduler.clone(), &config());

    form.fill(ann());
    mailer.reply_with(Ok(receipt()));

    assert_eq!(controller.submit().await, SubmitOutcome::Delivered);
    assert_eq!(mailer.calls().len(), 1);
    assert_eq!(mailer.calls()[0].1.to_email, "hello@studio.test");
    assert_eq!(form.fields(), ContactFields::default());
    assert_eq!(
        surface.shown(),
        Some((Notification::success(SENT_MESSAGE), NotificationPhase::Entering))
    );

    scheduler.advance(4000);
    assert_eq!(
        surface.shown().map(|(_, phase)| phase),
        Some(NotificationPhase::Leaving)
    );

    scheduler.advance(400);
    assert_eq!(surface.shown(), None);
    assert_eq!(center.current(), None);
}

#[tokio::test]
async fn rapid_rejections_replace_each_other() {
    let surface = RecordingSurface::new();
    let scheduler = ManualScheduler::new();
    let center =
        NotificationCenter::new(surface.clone(), scheduler.clone(), NotifyConfig::default());
    let form = FakeForm::default();
    let controller = ContactController::new(
        FakeMailer::default(),
        form.clone(),
        center.clone(),
        scheduler.clone(),
        &config(),
    );

    controller.submit().await;
    scheduler.advance(50);

    let mut fields = ann();
    fields.email = "ann@x".to_owned();
    form.fill(fields);
    controller.submit().await;

    assert_eq!(surface.element_count(), 1);
    assert_eq!(
        surface.shown().map(|(notification, _)| notification),
        Some(Notification::error("Please enter a valid email address"))
    );
}
