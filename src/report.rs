//! Annotations produced for a review and the report collecting them

use serde::{Deserialize, Serialize};

/// A single rendered annotation handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Annotation {
    /// Informational message, e.g. the issue link
    Message(String),
    /// Warning shown to the PR author
    Warning(String),
}

/// Everything posted during one review pass
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub messages: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::Message(text) => self.messages.push(text),
            Annotation::Warning(text) => self.warnings.push(text),
        }
    }

    /// Total number of annotations
    pub fn len(&self) -> usize {
        self.messages.len() + self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
