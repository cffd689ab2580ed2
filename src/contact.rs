use std::cell::Cell;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::notification::NotificationKind;

pub const CONTACT_FORM_ID: &str = "contactForm";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const SUBMIT_BUSY_LABEL: &str = "Отправка...";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Сообщение отправлено успешно!";
pub const SIMULATED_SUBMIT_DELAY_MS: u32 = 2_000;

const NAME_MIN_CHARS: usize = 2;
const MESSAGE_MIN_CHARS: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("Имя должно содержать минимум 2 символа")]
    NameTooShort,
    #[error("Введите корректный email адрес")]
    InvalidEmail,
    #[error("Сообщение должно содержать минимум 10 символов")]
    MessageTooShort,
}

/// Every rule the submission broke, in field order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationIssue>);

impl ValidationErrors {
    #[cfg(test)]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "Ошибка валидации: {joined}")
    }
}

impl std::error::Error for ValidationErrors {}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn validate(fields: &ContactFields) -> Result<(), ValidationErrors> {
    let mut issues = Vec::new();

    if fields.name.chars().count() < NAME_MIN_CHARS {
        issues.push(ValidationIssue::NameTooShort);
    }
    if !is_valid_email(&fields.email) {
        issues.push(ValidationIssue::InvalidEmail);
    }
    if fields.message.chars().count() < MESSAGE_MIN_CHARS {
        issues.push(ValidationIssue::MessageTooShort);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(issues))
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Rejected(String),
}

/// Delivers a validated message. The browser build plugs in a timed
/// simulation; a real transport would go here.
pub trait ContactSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

/// The form and its submit button as the flow sees them.
pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn set_disabled(&self, disabled: bool);
    fn reset_form(&self);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(ValidationErrors),
    Sent,
    Failed(SubmitError),
    AlreadySubmitting,
}

impl SubmitOutcome {
    pub fn notification(&self) -> Option<(NotificationKind, String)> {
        match self {
            Self::Invalid(errors) => Some((NotificationKind::Error, errors.to_string())),
            Self::Sent => Some((NotificationKind::Success, SUBMIT_SUCCESS_MESSAGE.to_string())),
            Self::Failed(error) => Some((
                NotificationKind::Error,
                format!("Не удалось отправить сообщение: {error}"),
            )),
            Self::AlreadySubmitting => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ContactFlow {
    in_flight: Cell<bool>,
}

impl ContactFlow {
    #[cfg(test)]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub async fn submit<C, S>(&self, fields: ContactFields, control: &C, submitter: &S) -> SubmitOutcome
    where
        C: SubmitControl,
        S: ContactSubmitter,
    {
        if self.in_flight.get() {
            return SubmitOutcome::AlreadySubmitting;
        }
        if let Err(errors) = validate(&fields) {
            return SubmitOutcome::Invalid(errors);
        }

        self.in_flight.set(true);
        let original_label = control.label();
        control.set_label(SUBMIT_BUSY_LABEL);
        control.set_disabled(true);

        let result = submitter.submit(&fields).await;

        if result.is_ok() {
            control.reset_form();
        }
        control.set_label(&original_label);
        control.set_disabled(false);
        self.in_flight.set(false);

        match result {
            Ok(()) => SubmitOutcome::Sent,
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeForm {
        label: RefCell<String>,
        disabled: Cell<bool>,
        resets: Cell<u32>,
        history: RefCell<Vec<bool>>,
    }

    impl FakeForm {
        fn with_label(label: &str) -> Rc<Self> {
            let form = Self::default();
            *form.label.borrow_mut() = label.to_string();
            Rc::new(form)
        }
    }

    impl SubmitControl for Rc<FakeForm> {
        fn label(&self) -> String {
            self.label.borrow().clone()
        }

        fn set_label(&self, label: &str) {
            *self.label.borrow_mut() = label.to_string();
        }

        fn set_disabled(&self, disabled: bool) {
            self.disabled.set(disabled);
            self.history.borrow_mut().push(disabled);
        }

        fn reset_form(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    struct Succeeds {
        form: Rc<FakeForm>,
        seen_disabled: Cell<bool>,
        seen_label: RefCell<String>,
    }

    impl ContactSubmitter for Succeeds {
        async fn submit(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
            self.seen_disabled.set(self.form.disabled.get());
            *self.seen_label.borrow_mut() = self.form.label();
            tokio::task::yield_now().await;
            Ok(())
        }
    }

    struct Fails;

    impl ContactSubmitter for Fails {
        async fn submit(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected("server unavailable".to_string()))
        }
    }

    fn valid_fields() -> ContactFields {
        ContactFields::new("Ann", "a@b.co", "Hello there friend")
    }

    #[test]
    fn fields_are_trimmed() {
        let fields = ContactFields::new("  Ann ", "\ta@b.co\n", "  hi  ");
        assert_eq!(fields.name, "Ann");
        assert_eq!(fields.email, "a@b.co");
        assert_eq!(fields.message, "hi");
    }

    #[test]
    fn each_rule_reports_its_own_issue() {
        let short_name = ContactFields::new("A", "a@b.co", "Hello there friend");
        assert_eq!(
            validate(&short_name).unwrap_err().issues(),
            [ValidationIssue::NameTooShort]
        );

        let no_dot = ContactFields::new("Ann", "foo@bar", "Hello there friend");
        assert_eq!(
            validate(&no_dot).unwrap_err().issues(),
            [ValidationIssue::InvalidEmail]
        );

        let short_message = ContactFields::new("Ann", "a@b.co", "too short");
        assert_eq!(
            validate(&short_message).unwrap_err().issues(),
            [ValidationIssue::MessageTooShort]
        );
    }

    #[test]
    fn all_violations_are_joined_into_one_message() {
        let fields = ContactFields::new(" ", "nope", "hi");
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.issues().len(), 3);
        assert_eq!(
            errors.to_string(),
            "Ошибка валидации: Имя должно содержать минимум 2 символа, \
             Введите корректный email адрес, \
             Сообщение должно содержать минимум 10 символов"
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let fields = ContactFields::new("Ян", "ян@почта.рф", "Привет, мир");
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn email_pattern_is_deliberately_loose() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(!is_valid_email("foo@bar"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
    }

    #[tokio::test]
    async fn valid_submission_disables_button_only_while_sending() {
        let form = FakeForm::with_label("Отправить");
        let submitter = Succeeds {
            form: form.clone(),
            seen_disabled: Cell::new(false),
            seen_label: RefCell::new(String::new()),
        };
        let flow = ContactFlow::default();

        let outcome = flow.submit(valid_fields(), &form, &submitter).await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert!(submitter.seen_disabled.get());
        assert_eq!(*submitter.seen_label.borrow(), SUBMIT_BUSY_LABEL);
        assert_eq!(*form.history.borrow(), [true, false]);
        assert_eq!(form.label(), "Отправить");
        assert_eq!(form.resets.get(), 1);
        assert!(!flow.is_submitting());
        assert_eq!(
            outcome.notification(),
            Some((NotificationKind::Success, SUBMIT_SUCCESS_MESSAGE.to_string()))
        );
    }

    #[tokio::test]
    async fn invalid_submission_never_touches_the_button() {
        let form = FakeForm::with_label("Отправить");
        let flow = ContactFlow::default();

        let outcome = flow
            .submit(ContactFields::new("A", "foo@bar", "short"), &form, &Fails)
            .await;

        let Some((kind, message)) = outcome.notification() else {
            panic!("invalid submission should notify");
        };
        assert_eq!(kind, NotificationKind::Error);
        assert!(message.starts_with("Ошибка валидации: "));
        assert!(form.history.borrow().is_empty());
        assert_eq!(form.resets.get(), 0);
    }

    #[tokio::test]
    async fn failed_submission_keeps_fields_and_restores_button() {
        let form = FakeForm::with_label("Отправить");
        let flow = ContactFlow::default();

        let outcome = flow.submit(valid_fields(), &form, &Fails).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failed(SubmitError::Rejected("server unavailable".to_string()))
        );
        assert_eq!(form.resets.get(), 0);
        assert_eq!(form.label(), "Отправить");
        assert!(!form.disabled.get());
        let (kind, message) = outcome.notification().expect("failure notifies");
        assert_eq!(kind, NotificationKind::Error);
        assert!(message.ends_with("server unavailable"));
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_ignored() {
        let form = FakeForm::with_label("Отправить");
        let flow = ContactFlow::default();
        flow.in_flight.set(true);

        let outcome = flow.submit(valid_fields(), &form, &Fails).await;

        assert_eq!(outcome, SubmitOutcome::AlreadySubmitting);
        assert_eq!(outcome.notification(), None);
        assert!(form.history.borrow().is_empty());
    }
}
