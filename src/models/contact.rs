//! Contact form state and notices.

use serde::Serialize;

/// Form fields addressable by input id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    /// DOM id of the input element (also the `for` of its label).
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Snapshot of the fields handed to the delivery collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contact form state.
///
/// `submitting` is the single-flight guard: while it is set,
/// [`begin_submit`](Self::begin_submit) refuses to start another delivery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    submitting: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Set a field verbatim.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Message => self.message = value,
        }
    }

    /// Enter the submitting state and snapshot the fields.
    ///
    /// Returns `None` if a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Leave the submitting state. Fields are cleared only on success.
    pub fn finish_submit(&mut self, delivered: bool) -> NoticeKind {
        self.submitting = false;
        if delivered {
            self.name.clear();
            self.email.clear();
            self.message.clear();
            NoticeKind::Success
        } else {
            NoticeKind::Failure
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

impl NoticeKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "Message sent successfully! We will get back to you soon.",
            Self::Failure => "Failed to send message. Please try again.",
        }
    }
}

/// User-visible notice raised when a submission completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Monotonic sequence number, so a dismissal timer only clears its own notice.
    pub seq: u64,
    pub kind: NoticeKind,
}
