use std::collections::BTreeMap;
use std::future::Future;
use std::rc::Rc;

use futures::future::{select, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

/// Banner shown when a delivery fails. The underlying reason only goes to the log.
pub const GENERIC_FAILURE: &str = "אירעה שגיאה בשליחת הטופס. אנא נסו שנית.";

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9,10}$").expect("phone pattern compiles"));

// ASCII classes spelled out: case-insensitive mode would also fold 'ſ' and 'K' into them.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Message];

    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

/// Validation failures. `Display` is the message rendered under the field.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("שדה זה הוא חובה")]
    Required,
    #[error("שם חייב להכיל לפחות 2 תווים")]
    NameTooShort,
    #[error("אנא הזן מספר טלפון תקין")]
    InvalidPhone,
    #[error("אנא הזן כתובת דוא״ל תקינה")]
    InvalidEmail,
    #[error("אנא הזן לפחות 10 תווים")]
    MessageTooShort,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("delivery rejected: {0}")]
    Rejected(String),
    #[error("delivery did not finish within {0} ms")]
    TimedOut(u32),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// What a real mail/CRM endpoint would receive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

fn check_field(field: Field, value: &str) -> Option<FieldError> {
    if value.trim().is_empty() {
        return Some(FieldError::Required);
    }
    // Counted in chars: names and messages are usually Hebrew.
    let len = value.chars().count();
    match field {
        Field::Name if len < 2 => Some(FieldError::NameTooShort),
        Field::Phone if !PHONE_RE.is_match(value) => Some(FieldError::InvalidPhone),
        Field::Email if !EMAIL_RE.is_match(value) => Some(FieldError::InvalidEmail),
        Field::Message if len < 10 => Some(FieldError::MessageTooShort),
        _ => None,
    }
}

pub fn validate(values: &FormValues) -> Result<ContactRequest, FieldErrors> {
    let errors: FieldErrors = Field::ALL
        .iter()
        .filter_map(|f| check_field(*f, values.get(*f)).map(|e| (*f, e)))
        .collect();

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ContactRequest {
        name: values.name.clone(),
        phone: values.phone.clone(),
        email: values.email.clone(),
        message: values.message.clone(),
    })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl ContactForm {
    pub fn edit(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.remove(&field);
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Request that `submit` would hand out, without touching any state.
    pub fn ready_request(&self) -> Option<ContactRequest> {
        if self.status.is_submitting() {
            return None;
        }
        validate(&self.values).ok()
    }

    /// Validates every field. On success moves to `Submitting` and returns the
    /// request to deliver; on failure records all field errors and leaves the
    /// status alone.
    pub fn submit(&mut self) -> Option<ContactRequest> {
        if self.status.is_submitting() {
            debug!("submit ignored, delivery already in flight");
            return None;
        }
        match validate(&self.values) {
            Ok(request) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                info!("contact form submitting");
                Some(request)
            }
            Err(errors) => {
                debug!("contact form rejected with {} field error(s)", errors.len());
                self.errors = errors;
                None
            }
        }
    }

    pub fn settle(&mut self, result: Result<(), SubmitError>) {
        if !self.status.is_submitting() {
            return;
        }
        match result {
            Ok(()) => {
                info!("contact form delivered");
                self.values = FormValues::default();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(e) => {
                warn!("contact form delivery failed: {}", e);
                self.status = SubmissionStatus::Failed(GENERIC_FAILURE.to_string());
            }
        }
    }

    pub fn revert(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    Settle(Result<(), SubmitError>),
    Revert,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Submit => {
                next.submit();
            }
            FormAction::Settle(result) => next.settle(result),
            FormAction::Revert => next.revert(),
        }
        Rc::new(next)
    }
}

/// Where a validated contact request goes.
pub trait ContactSink {
    fn deliver(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Stand-in for a real endpoint: logs the payload, waits, succeeds.
/// The wait is a timer future by default; any `Fn(u32) -> Future` works.
pub struct SimulatedSink<W = fn(u32) -> TimeoutFuture> {
    delay_ms: u32,
    wait: W,
}

impl SimulatedSink {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            wait: TimeoutFuture::new,
        }
    }
}

impl<W, F> SimulatedSink<W>
where
    W: Fn(u32) -> F,
    F: Future<Output = ()> + 'static,
{
    pub fn with_wait(delay_ms: u32, wait: W) -> Self {
        Self { delay_ms, wait }
    }
}

impl<W, F> ContactSink for SimulatedSink<W>
where
    W: Fn(u32) -> F,
    F: Future<Output = ()> + 'static,
{
    fn deliver(&self, request: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let wait = (self.wait)(self.delay_ms);
        async move {
            let payload =
                serde_json::to_string(&request).map_err(|e| SubmitError::Rejected(e.to_string()))?;
            debug!("simulated delivery of {}", payload);
            wait.await;
            Ok(())
        }
        .boxed_local()
    }
}

/// Runs a delivery against a deadline future; whichever finishes first wins.
pub async fn deliver_within<S, D>(
    sink: &S,
    request: ContactRequest,
    deadline: D,
    deadline_ms: u32,
) -> Result<(), SubmitError>
where
    S: ContactSink + ?Sized,
    D: Future<Output = ()>,
{
    let delivery = sink.deliver(request);
    futures::pin_mut!(deadline);
    match select(delivery, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SubmitError::TimedOut(deadline_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use std::cell::Cell;

    struct InstantSink(Result<(), SubmitError>);

    impl ContactSink for InstantSink {
        fn deliver(&self, _: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            ready(self.0.clone()).boxed_local()
        }
    }

    struct StuckSink;

    impl ContactSink for StuckSink {
        fn deliver(&self, _: ContactRequest) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            pending().boxed_local()
        }
    }

    fn filled(name: &str, phone: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, name.to_string());
        form.edit(Field::Phone, phone.to_string());
        form.edit(Field::Email, email.to_string());
        form.edit(Field::Message, message.to_string());
        form
    }

    fn valid_form() -> ContactForm {
        filled("דן", "0501234567", "d@x.com", "שלום, אני מעוניין בפגישה")
    }

    #[test]
    fn valid_submission_reaches_succeeded_and_clears_fields() {
        let mut form = valid_form();
        let request = form.submit().expect("valid form yields a request");
        assert_eq!(request.phone, "0501234567");
        assert_eq!(form.status, SubmissionStatus::Submitting);

        let result = block_on(deliver_within(&InstantSink(Ok(())), request, pending(), 1_000));
        form.settle(result);

        assert_eq!(form.status, SubmissionStatus::Succeeded);
        assert!(form.values.is_empty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn invalid_submission_reports_every_field_and_stays_idle() {
        let mut form = filled("א", "123", "bad", "short");
        assert!(form.submit().is_none());

        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.errors.len(), 4);
        assert_eq!(form.error(Field::Name), Some(&FieldError::NameTooShort));
        assert_eq!(form.error(Field::Phone), Some(&FieldError::InvalidPhone));
        assert_eq!(form.error(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(form.error(Field::Message), Some(&FieldError::MessageTooShort));
        assert!(form.error(Field::Name).map(|e| !e.to_string().is_empty()).unwrap_or(false));
    }

    #[test]
    fn missing_fields_are_required() {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "   ".to_string());
        assert!(form.submit().is_none());
        assert_eq!(form.status, SubmissionStatus::Idle);
        for field in Field::ALL {
            assert_eq!(form.error(field), Some(&FieldError::Required), "{}", field.id());
        }
    }

    #[test]
    fn phone_pattern_accepts_only_nine_or_ten_digits() {
        for ok in ["050123456", "0501234567"] {
            assert_eq!(check_field(Field::Phone, ok), None, "{ok}");
        }
        for bad in ["05012345", "05012345678", "050-1234567", "+972501234", "05O1234567"] {
            assert_eq!(check_field(Field::Phone, bad), Some(FieldError::InvalidPhone), "{bad}");
        }
    }

    #[test]
    fn email_pattern_is_case_insensitive() {
        assert_eq!(check_field(Field::Email, "Info@Delta-Law.CO.IL"), None);
        assert_eq!(check_field(Field::Email, "first.last+tag@x.io"), None);
        for bad in ["bad", "a@b", "a@b.c", "@x.com", "a b@x.com", "\u{17f}@x.com", "a@x.\u{212a}m"] {
            assert_eq!(check_field(Field::Email, bad), Some(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn simulated_sink_waits_the_configured_delay_then_succeeds() {
        let waited = Rc::new(Cell::new(0));
        let sink = {
            let waited = waited.clone();
            SimulatedSink::with_wait(1_500, move |ms| {
                waited.set(ms);
                ready(())
            })
        };

        let mut form = valid_form();
        let request = form.submit().expect("valid");
        form.settle(block_on(deliver_within(&sink, request, pending(), 15_000)));

        assert_eq!(waited.get(), 1_500);
        assert_eq!(form.status, SubmissionStatus::Succeeded);
        assert!(form.values.is_empty());
    }

    #[test]
    fn slow_simulated_sink_loses_to_the_deadline() {
        let sink = SimulatedSink::with_wait(1_500, |_| pending::<()>());
        let mut form = valid_form();
        let request = form.submit().expect("valid");
        let result = block_on(deliver_within(&sink, request, ready(()), 15_000));
        assert_eq!(result, Err(SubmitError::TimedOut(15_000)));
        form.settle(result);
        assert_eq!(form.status, SubmissionStatus::Failed(GENERIC_FAILURE.to_string()));
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        // Two Hebrew letters are four bytes but only two characters.
        assert_eq!(check_field(Field::Name, "דן"), None);
        assert_eq!(check_field(Field::Name, "ד"), Some(FieldError::NameTooShort));
        assert_eq!(check_field(Field::Message, "אבגדהוזחט"), Some(FieldError::MessageTooShort));
        assert_eq!(check_field(Field::Message, "אבגדהוזחטי"), None);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = filled("א", "123", "bad", "short");
        form.submit();
        form.edit(Field::Phone, "0501234567".to_string());
        assert!(form.error(Field::Phone).is_none());
        assert_eq!(form.errors.len(), 3);
    }

    #[test]
    fn failed_delivery_shows_generic_banner_and_keeps_values() {
        let mut form = valid_form();
        let request = form.submit().expect("valid");
        let sink = InstantSink(Err(SubmitError::Rejected("boom".into())));
        form.settle(block_on(deliver_within(&sink, request, pending(), 1_000)));

        assert_eq!(form.status, SubmissionStatus::Failed(GENERIC_FAILURE.to_string()));
        assert_eq!(form.values.name, "דן");

        // A new attempt clears the banner.
        assert!(form.submit().is_some());
        assert_eq!(form.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn stuck_delivery_times_out() {
        let result = block_on(deliver_within(&StuckSink, valid_form().ready_request().unwrap(), ready(()), 15_000));
        assert_eq!(result, Err(SubmitError::TimedOut(15_000)));

        let mut form = valid_form();
        form.submit();
        form.settle(result);
        assert!(matches!(form.status, SubmissionStatus::Failed(_)));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = valid_form();
        assert!(form.submit().is_some());
        assert!(form.ready_request().is_none());
        assert!(form.submit().is_none());
        assert_eq!(form.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn settle_and_revert_only_apply_in_their_states() {
        let mut form = valid_form();
        form.settle(Ok(()));
        assert_eq!(form.status, SubmissionStatus::Idle);
        assert_eq!(form.values.name, "דן");

        form.submit();
        form.revert();
        assert_eq!(form.status, SubmissionStatus::Submitting);

        form.settle(Ok(()));
        form.revert();
        assert_eq!(form.status, SubmissionStatus::Idle);
    }

    #[test]
    fn reducer_follows_the_same_transitions() {
        let form = Rc::new(valid_form());
        let form = form.reduce(FormAction::Submit);
        assert!(form.status.is_submitting());
        let form = form.reduce(FormAction::Settle(Ok(())));
        assert_eq!(form.status, SubmissionStatus::Succeeded);
        let form = form.reduce(FormAction::Revert);
        assert_eq!(form.status, SubmissionStatus::Idle);
        let form = form.reduce(FormAction::Edit(Field::Name, "רות".into()));
        assert_eq!(form.values.name, "רות");
    }

    #[test]
    fn request_serializes_with_field_names() {
        let request = valid_form().ready_request().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["email"], "d@x.com");
        assert_eq!(json["name"], "דן");
    }
}
