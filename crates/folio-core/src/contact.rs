//! Contact form state machine.

use serde::Serialize;

/// Input fields of the contact form, in focus order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    #[default]
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Message => "Your message...",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// Why a submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("a message is already being sent")]
    InFlight,
}

/// Why a message could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeliveryError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("delivery rejected with status {status}")]
    Rejected { status: u16 },
    #[error("delivery worker stopped before reporting")]
    Interrupted,
}

/// A message ready to hand to a [`Delivery`] service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Sends contact messages somewhere. Implementations may block; callers
/// run them off the UI thread.
pub trait Delivery: Send + Sync {
    fn deliver(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

/// The contact form's fields, focus and submit state.
#[derive(Debug, Default, Clone)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Field,
    state: FormState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FormState::Submitting
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    /// Replace a field's contents. Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if !self.is_submitting() {
            *self.field_mut(field) = value.into();
        }
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, ch: char) {
        if self.is_submitting() {
            return;
        }
        let focus = self.focus;
        self.field_mut(focus).push(ch);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    /// First required field that is empty, if any.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.missing_field().is_none()
    }

    /// Move to [`FormState::Submitting`] and hand back the message to send.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, FormError> {
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }
        if let Some(field) = self.missing_field() {
            return Err(FormError::Missing(field));
        }
        self.state = FormState::Submitting;
        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Settle an in-flight submission. A delivered message clears the form;
    /// a failed one keeps the fields so the visitor can retry. Returns `None`
    /// when nothing was in flight.
    pub fn finish(&mut self, result: Result<(), DeliveryError>) -> Option<Result<(), DeliveryError>> {
        if !self.is_submitting() {
            return None;
        }
        self.state = FormState::Idle;
        if result.is_ok() {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            self.focus = Field::Name;
        }
        Some(result)
    }
}
