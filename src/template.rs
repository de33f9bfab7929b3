//! Text rendered onto the review
//!
//! Messages are HTML-flavoured markdown as understood by GitHub comments,
//! with emoji given as `:name:` tokens.

use crate::report::Report;

/// Hidden marker opening every comment this tool posts
pub const COMMENT_MARKER: &str = "<!-- jira-issue-link -->";

/// Render an anchor tag pointing at `href`
pub fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href, text)
}

/// Informational message carrying the issue link
///
/// # Arguments
/// * `emoji` - Emoji token shown in front of the link (e.g., ":link:")
/// * `href` - Resolved issue URL
/// * `issue` - The issue key used as link text (e.g., "ABC-123")
pub fn issue_message(emoji: &str, href: &str, issue: &str) -> String {
    format!("{} {}", emoji, link(href, issue))
}

/// Warning asking the author to put an issue key in the title
pub fn missing_key_warning(key: &str) -> String {
    format!(
        "Please add the JIRA issue key to the PR title (e.g. {}-123)",
        key
    )
}

/// Build the PR comment body for a report
///
/// Warnings come first, each prefixed with `:warning:`, followed by the
/// informational messages.
pub fn comment_body(report: &Report) -> String {
    let mut lines: Vec<String> = vec![COMMENT_MARKER.to_string()];

    for warning in &report.warnings {
        lines.push(format!(":warning: {}", warning));
    }
    lines.extend(report.messages.iter().cloned());

    lines.join("\n")
}
