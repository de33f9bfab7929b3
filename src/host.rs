//! The review tool the check runs inside
//!
//! A host supplies the pull request being reviewed and renders whatever the
//! check posts. [`Review`] is the in-process host used by the binary: it
//! records annotations into a [`Report`] that is printed or posted afterwards.

use crate::pr::PullRequest;
use crate::report::{Annotation, Report};

/// Pull request data and reporting primitives provided by the host.
pub trait Host {
    /// Title of the pull request under review.
    fn pr_title(&self) -> &str;

    /// Render an informational annotation on the review.
    fn message(&mut self, text: &str);

    /// Render a warning annotation on the review.
    fn warn(&mut self, text: &str);
}

/// A review pass over one pull request, collecting annotations.
#[derive(Debug, Clone, Default)]
pub struct Review {
    pr: PullRequest,
    report: Report,
}

impl Review {
    pub fn new(pr: PullRequest) -> Self {
        Self {
            pr,
            report: Report::new(),
        }
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    pub fn into_report(self) -> Report {
        self.report
    }
}

impl Host for Review {
    fn pr_title(&self) -> &str {
        &self.pr.title
    }

    fn message(&mut self, text: &str) {
        self.report.push(Annotation::Message(text.to_string()));
    }

    fn warn(&mut self, text: &str) {
        self.report.push(Annotation::Warning(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_records_annotations() {
        let mut review = Review::new(PullRequest::new().with_title("ABC-1 thing"));

        assert_eq!(review.pr_title(), "ABC-1 thing");

        review.message("info");
        review.warn("warning");

        let report = review.into_report();
        assert_eq!(report.messages, vec!["info"]);
        assert_eq!(report.warnings, vec!["warning"]);
    }
}
