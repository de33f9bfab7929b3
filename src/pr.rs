use serde::{Deserialize, Serialize};

/// Snapshot of the pull request under review
///
/// Deserializes from `gh pr view --json number,title,url`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// The PR number, unknown when the title was given directly
    #[serde(default)]
    pub number: Option<u32>,
    /// The title of the PR (e.g., "ABC-123: Add new feature")
    pub title: String,
    /// Link to the PR on GitHub
    #[serde(default)]
    pub url: Option<String>,
}

impl PullRequest {
    /// Creates a new PullRequest with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title and returns self for chaining
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_gh_output() {
        let json = r#"{"number":42,"title":"ABC-7: Fix parser","url":"https://github.com/o/r/pull/42"}"#;

        let pr: PullRequest = serde_json::from_str(json).unwrap();

        assert_eq!(pr.number, Some(42));
        assert_eq!(pr.title, "ABC-7: Fix parser");
        assert_eq!(pr.url.as_deref(), Some("https://github.com/o/r/pull/42"));
    }

    #[test]
    fn test_builder() {
        let pr = PullRequest::new().with_title("Refactor");
        assert_eq!(pr.title, "Refactor");
        assert_eq!(pr.number, None);
        assert_eq!(pr.url, None);
    }
}
