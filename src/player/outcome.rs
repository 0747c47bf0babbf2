use std::{borrow::Cow, fmt};

/// Message class of an operation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Success,
    Warning,
}

/// Result of a player operation.
///
/// Operations never fail: a disallowed transition produces a warning and
/// leaves the state as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    kind: OutcomeKind,
    message: Cow<'static, str>,
}

impl Outcome {
    pub fn success(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind: OutcomeKind::Warning,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> OutcomeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_warning(&self) -> bool {
        self.kind == OutcomeKind::Warning
    }

    pub fn into_message(self) -> String {
        self.message.into_owned()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        outcome.into_message()
    }
}
