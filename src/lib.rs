//! # jira-issue-link
//!
//! Checks a pull request title for a JIRA issue key (e.g. `ABC-123`). A
//! matching title gets an informational link to the issue, anything else a
//! warning asking the author to add the key.
//!
//! ```
//! use jira_issue_link::{annotate, Options, PullRequest, Review};
//!
//! let options = Options::new("ABC", "https://jira.example.com/browse");
//! let mut review = Review::new(PullRequest::new().with_title("Fix bug ABC-42 in parser"));
//!
//! annotate(&options, &mut review).unwrap();
//!
//! assert_eq!(
//!     review.report().messages,
//!     vec![r#":link: <a href="https://jira.example.com/browse/ABC-42">ABC-42</a>"#]
//! );
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod host;
pub mod jira;
pub mod pr;
pub mod report;
pub mod template;
pub mod ui;

// Re-export commonly used types
pub use config::Options;
pub use error::{ConfigError, Error, Result};
pub use host::{Host, Review};
pub use jira::annotate;
pub use pr::PullRequest;
pub use report::{Annotation, Report};
