/// Outcome of a submit attempt, as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Submitted { response: serde_json::Value },
    Failed { reason: String },
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::Submitted { .. } => "Your pitch request was submitted successfully",
            Notification::Failed { .. } => "Submission failed, please try again",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Submitted { .. })
    }
}

pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in the order they were raised.
#[derive(Debug, Default)]
pub struct Notifications(Vec<Notification>);

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Notifier for Notifications {
    fn notify(&mut self, notification: Notification) {
        self.0.push(notification);
    }
}
