//! JIRA issue key check for pull request titles
//!
//! Looks for `<KEY>-<number>` in the PR title. When found, an informational
//! message linking the issue is posted; otherwise the author gets a warning
//! asking for the key.
//!
//! When a title names several issues, the last one wins: the pattern is
//! `^.*(KEY-[0-9]+).*$` and the leading `.*` is greedy. `.` here excludes
//! every line terminator (`\n`, `\r`, U+2028, U+2029), so a title spanning
//! lines never matches.

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::config::Options;
use crate::error::Result;
use crate::host::Host;
use crate::template;

/// Any character except a line terminator
const TITLE_CHAR: &str = r"[^\n\r\x{2028}\x{2029}]";

/// Build the pattern matching an issue key for the given project key
fn key_pattern(key: &str) -> Result<Regex> {
    let pattern = format!(
        "^{0}*({1}-[0-9]+){0}*$",
        TITLE_CHAR,
        regex::escape(key)
    );
    Ok(Regex::new(&pattern)?)
}

/// Find the issue key for project `key` in `title`
///
/// Returns the last occurrence when there are several (e.g., "ABC-1 then ABC-2" -> "ABC-2").
pub fn find_issue(key: &str, title: &str) -> Result<Option<String>> {
    let re = key_pattern(key)?;
    Ok(re
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}

/// Append a trailing slash unless one is already there
pub fn ensure_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{}/", url)
    }
}

/// Resolve the browse URL of `issue` under the base URL
pub fn issue_url(base: &str, issue: &str) -> Result<Url> {
    let base = Url::parse(&ensure_trailing_slash(base))?;
    Ok(base.join(issue)?)
}

/// Check the PR title and post either the issue link or a warning
///
/// Exactly one of [`Host::message`] or [`Host::warn`] is called. Invalid
/// options fail before the host is touched.
pub fn annotate<H: Host + ?Sized>(options: &Options, host: &mut H) -> Result<()> {
    options.validate()?;

    let title = host.pr_title().to_string();
    match find_issue(&options.key, &title)? {
        Some(issue) => {
            let url = issue_url(&options.url, &issue)?;
            debug!(%title, %issue, %url, "issue key found in PR title");
            host.message(&template::issue_message(&options.emoji, url.as_str(), &issue));
        }
        None => {
            debug!(%title, key = %options.key, "no issue key in PR title");
            host.warn(&template::missing_key_warning(&options.key));
        }
    }

    Ok(())
}
