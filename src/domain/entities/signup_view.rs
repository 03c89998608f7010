use std::time::Duration;

use serde::Serialize;

use crate::application::use_cases::waitlist::SubmissionOutcome;

/// How long a terminal display stays up before the dialog closes itself.
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_millis(3000);

/// View state of one signup dialog.
///
/// `Form -> Submitting -> {SuccessDisplay | AlreadyExistsDisplay | Form+error}`.
/// The two displays close on their own after [`AUTO_CLOSE_DELAY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum SignupView {
    Form { error: Option<String> },
    Submitting,
    SuccessDisplay,
    AlreadyExistsDisplay,
    Closed,
}

impl Default for SignupView {
    fn default() -> Self {
        SignupView::Form { error: None }
    }
}

impl SignupView {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupView::Form { .. } => "form",
            SignupView::Submitting => "submitting",
            SignupView::SuccessDisplay => "success_display",
            SignupView::AlreadyExistsDisplay => "already_exists_display",
            SignupView::Closed => "closed",
        }
    }

    /// Start a submission. Refused unless the form is showing, which is what
    /// keeps a second click from firing while one is in flight.
    pub fn submit(&mut self) -> bool {
        match self {
            SignupView::Form { .. } => {
                *self = SignupView::Submitting;
                true
            }
            _ => false,
        }
    }

    /// Apply the result of the in-flight submission.
    pub fn resolve(&mut self, outcome: &SubmissionOutcome) -> bool {
        if *self != SignupView::Submitting {
            return false;
        }
        *self = match outcome {
            SubmissionOutcome::Accepted { .. } => SignupView::SuccessDisplay,
            SubmissionOutcome::AlreadyExists => SignupView::AlreadyExistsDisplay,
        };
        true
    }

    /// Return to the form with an inline error after a rejected submission.
    pub fn reject(&mut self, error: impl Into<String>) -> bool {
        if *self != SignupView::Submitting {
            return false;
        }
        *self = SignupView::Form {
            error: Some(error.into()),
        };
        true
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SignupView::SuccessDisplay | SignupView::AlreadyExistsDisplay
        )
    }

    pub fn auto_close_delay(&self) -> Option<Duration> {
        self.is_terminal().then_some(AUTO_CLOSE_DELAY)
    }

    /// Fired by the auto-close timer.
    pub fn close(&mut self) -> bool {
        if !self.is_terminal() {
            return false;
        }
        *self = SignupView::Closed;
        true
    }

    pub fn reopen(&mut self) -> bool {
        if *self != SignupView::Closed {
            return false;
        }
        *self = SignupView::default();
        true
    }
}
