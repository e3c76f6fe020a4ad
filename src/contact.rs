//! Contact form state and submission.
//!
//! [`ContactController`] owns one form instance: the field values, the
//! submission status and the timer that returns the status to idle. Submission
//! goes through an injected [`Transport`]; the controller never retries.
//!
//! ```text
//! Idle/Success/Error --submit--> Pending --ok--> Success --5s--> Idle
//!                                        \--err-> Error   --5s--> Idle
//! ```

use std::fmt;
use std::future::Future;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use chrono::{DateTime, Local, Locale, TimeZone, Timelike};
use serde::Serialize;
use thiserror::Error;

use crate::config::EmailJsCredentials;
use crate::timer::{replace_timer, Scheduler, TimerHandle};
use crate::transport::Transport;

pub const STATUS_RESET_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Internship,
    Collaboration,
    GeneralQuestion,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Internship,
        Subject::Collaboration,
        Subject::GeneralQuestion,
        Subject::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Internship => "Oferta de prácticas",
            Subject::Collaboration => "Propuesta de colaboración",
            Subject::GeneralQuestion => "Pregunta general",
            Subject::Other => "Otro",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

impl FromStr for Field {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => self.subject.map(|s| s.label()).unwrap_or(""),
            Field::Message => &self.message,
        }
    }

    /// Subject values outside the fixed set clear the selection.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = Subject::from_label(&value),
            Field::Message => self.message = value,
        }
    }

    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
    }

    fn to_params(&self, time: String) -> TemplateParams {
        TemplateParams {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.get(Field::Subject).to_string(),
            message: self.message.clone(),
            time,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionStatus::Pending)
    }

    /// Success or error; these revert to idle on their own.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

/// Template variables sent to the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub time: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("A submission is already in flight")]
    InFlight,
    #[error("The {} field is empty", .0.as_str())]
    Incomplete(Field),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSnapshot {
    pub form: FormData,
    pub status: SubmissionStatus,
}

/// Long-form Colombian Spanish date, e.g. `viernes, 16 de octubre de 2026, 02:30 p. m.`
pub fn submission_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    // es_CO carries no AM/PM strings, so `%p` would render the English ones
    let (pm, _) = at.hour12();
    let meridiem = if pm { "p. m." } else { "a. m." };
    let date = at.format_localized("%A, %-d de %B de %Y, %I:%M", Locale::es_CO);
    format!("{date} {meridiem}")
}

type Listener = Arc<dyn Fn(&ContactSnapshot) + Send + Sync>;
type Clock = Arc<dyn Fn() -> String + Send + Sync>;

#[derive(Default)]
struct ContactState {
    form: FormData,
    status: SubmissionStatus,
    revert: Option<TimerHandle>,
}

impl ContactState {
    fn snapshot(&self) -> ContactSnapshot {
        ContactSnapshot {
            form: self.form.clone(),
            status: self.status,
        }
    }
}

pub struct ContactController<T, S> {
    state: Arc<Mutex<ContactState>>,
    transport: Arc<T>,
    scheduler: Arc<S>,
    credentials: Arc<EmailJsCredentials>,
    listener: Listener,
    clock: Clock,
}

impl<T, S> Clone for ContactController<T, S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            transport: self.transport.clone(),
            scheduler: self.scheduler.clone(),
            credentials: self.credentials.clone(),
            listener: self.listener.clone(),
            clock: self.clock.clone(),
        }
    }
}

fn lock_state(state: &Mutex<ContactState>) -> MutexGuard<'_, ContactState> {
    state.lock().expect("should be able to lock contact state")
}

impl<T: Transport, S: Scheduler> ContactController<T, S> {
    pub fn new(credentials: EmailJsCredentials, transport: T, scheduler: S) -> Self {
        Self {
            state: Arc::default(),
            transport: Arc::new(transport),
            scheduler: Arc::new(scheduler),
            credentials: Arc::new(credentials),
            listener: Arc::new(|_| {}),
            clock: Arc::new(|| submission_timestamp(&Local::now())),
        }
    }

    /// Called after every state change, with no lock held.
    pub fn on_change(mut self, listener: impl Fn(&ContactSnapshot) + Send + Sync + 'static) -> Self {
        self.listener = Arc::new(listener);
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn snapshot(&self) -> ContactSnapshot {
        lock_state(&self.state).snapshot()
    }

    pub fn status(&self) -> SubmissionStatus {
        lock_state(&self.state).status
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        let snapshot = {
            let mut state = lock_state(&self.state);
            state.form.set(field, value.into());
            state.snapshot()
        };
        (self.listener)(&snapshot);
    }

    /// Starts a submission. The state is `Pending` when this returns `Ok`; the
    /// returned future performs the send and settles the status.
    pub fn submit(
        &self,
    ) -> Result<impl Future<Output = SubmissionStatus> + 'static, SubmitBlocked> {
        let (params, snapshot) = {
            let mut state = lock_state(&self.state);
            if state.status.is_pending() {
                log::debug!("contact submit ignored: already pending");
                return Err(SubmitBlocked::InFlight);
            }
            if let Some(field) = state.form.first_missing() {
                return Err(SubmitBlocked::Incomplete(field));
            }
            if let Some(revert) = state.revert.take() {
                revert.cancel();
            }
            state.status = SubmissionStatus::Pending;
            (state.form.to_params((self.clock)()), state.snapshot())
        };
        (self.listener)(&snapshot);

        let this = self.clone();
        Ok(async move {
            let result = this.transport.send(&this.credentials, &params).await;
            this.settle(result)
        })
    }

    /// Cancels the pending status reset. Call when the form goes away.
    pub fn dispose(&self) {
        if let Some(revert) = lock_state(&self.state).revert.take() {
            revert.cancel();
        }
    }

    fn settle<E: fmt::Display>(&self, result: Result<(), E>) -> SubmissionStatus {
        let snapshot = {
            let mut state = lock_state(&self.state);
            match result {
                Ok(()) => {
                    state.form = FormData::default();
                    state.status = SubmissionStatus::Success;
                }
                Err(e) => {
                    log::error!("contact submission failed: {e}");
                    state.status = SubmissionStatus::Error;
                }
            }
            let scheduled = self
                .scheduler
                .schedule(STATUS_RESET_DELAY, self.status_reset_task());
            replace_timer(&mut state.revert, scheduled);
            state.snapshot()
        };
        (self.listener)(&snapshot);
        snapshot.status
    }

    fn status_reset_task(&self) -> Box<dyn FnOnce() + Send> {
        let state = self.state.clone();
        let listener = self.listener.clone();
        Box::new(move || {
            let snapshot = {
                let mut state = lock_state(&state);
                state.revert = None;
                if !state.status.is_settled() {
                    return;
                }
                state.status = SubmissionStatus::Idle;
                state.snapshot()
            };
            listener(&snapshot);
        })
    }
}
