use std::process::Command;

use crate::pr::PullRequest;

/// Fields requested from `gh pr view`
const PR_FIELDS: &str = "number,title,url";

/// Fetch the pull request to review
///
/// # Arguments
/// * `selector` - PR number, URL or branch. Uses the PR of the current branch if None.
pub fn get_pr(selector: Option<&str>) -> Result<PullRequest, String> {
    let mut args = vec!["pr", "view"];
    if let Some(selector) = selector {
        args.push(selector);
    }
    args.extend(["--json", PR_FIELDS]);

    let output = Command::new("gh")
        .args(&args)
        .output()
        .map_err(|e| format!("Failed to execute gh command: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("GitHub CLI error: {}", stderr.trim()));
    }

    serde_json::from_slice(&output.stdout).map_err(|e| format!("Failed to parse response: {}", e))
}

/// Post a comment on a pull request
///
/// # Arguments
/// * `pr_number` - The PR number to comment on
/// * `body` - The comment body
/// * `dry_run` - If true, return the command instead of executing it
pub fn comment_pr(pr_number: u32, body: &str, dry_run: bool) -> Result<String, String> {
    let number = pr_number.to_string();

    if dry_run {
        return Ok(format!(
            "Dry run - no comment posted: gh pr comment {} -b {:?}",
            number, body
        ));
    }

    let output = Command::new("gh")
        .args(["pr", "comment", &number, "-b", body])
        .output()
        .map_err(|e| format!("Failed to execute gh command: {}", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("Failed to comment on PR: {}", stderr.trim()));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}
