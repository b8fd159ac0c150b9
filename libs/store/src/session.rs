//! Insert-time session context.

use chrono::{DateTime, Utc};

/// Opaque context handed to identifier sources at insert time.
///
/// Identifier generation never inspects the session; it exists so the
/// extension point carries the same shape as the persistence layer's other
/// hooks and can grow fields without breaking implementors.
#[derive(Debug, Clone)]
pub struct Session {
    opened_at: DateTime<Utc>,
    label: Option<String>,
}

impl Session {
    /// Opens a new session.
    pub fn new() -> Self {
        Self {
            opened_at: Utc::now(),
            label: None,
        }
    }

    /// Attaches a diagnostic label, e.g. a request id.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// When the session was opened.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// The diagnostic label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_optional() {
        let session = Session::new();
        assert_eq!(session.label(), None);

        let labeled = Session::new().with_label("req-42");
        assert_eq!(labeled.label(), Some("req-42"));
    }
}
