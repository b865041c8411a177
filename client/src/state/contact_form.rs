//! Contact form fields and submission status.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::net::contact::ContactSubmission;

/// How long a result banner stays up.
pub const BANNER_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactSubmission,
    pub status: SubmitStatus,
    /// Bumped on every result so a stale dismiss timer can tell it lost.
    pub result_seq: u64,
}

impl ContactFormState {
    pub fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.fields.name = value,
            Field::Email => self.fields.email = value,
            Field::Subject => self.fields.subject = value,
            Field::Message => self.fields.message = value,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Enter the sending state and return the fields as typed.
    ///
    /// `None` only while a request is already in flight; the inputs'
    /// `required` attribute is the sole field check.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_sending() {
            return None;
        }
        self.status = SubmitStatus::Sending;
        Some(self.fields.clone())
    }

    /// Show the success banner and clear every field.
    pub fn on_success(&mut self) -> u64 {
        self.fields = ContactSubmission::default();
        self.finish(SubmitStatus::Succeeded)
    }

    /// Show the error banner; fields stay as typed.
    pub fn on_failure(&mut self) -> u64 {
        self.finish(SubmitStatus::Failed)
    }

    /// Hide the banner if `seq` is still the latest result.
    pub fn dismiss(&mut self, seq: u64) {
        if seq == self.result_seq && !self.is_sending() {
            self.status = SubmitStatus::Idle;
        }
    }

    fn finish(&mut self, status: SubmitStatus) -> u64 {
        self.status = status;
        self.result_seq += 1;
        self.result_seq
    }
}
