use std::io::{self, Write};

use colored::Colorize;
use tracing::info;

use crate::cli::Args;
use crate::config::Options;
use crate::error::{Error, Result};
use crate::github;
use crate::host::Review;
use crate::jira;
use crate::pr::PullRequest;
use crate::report::Report;
use crate::template;
use crate::ui;

/// Main application entry point
pub fn run(args: Args) -> Result<()> {
    let options = resolve_options(&args)?;
    options.validate()?;

    if args.comment && args.title.is_some() {
        return Err(Error::InvalidInput(
            "--comment needs a PR from GitHub, not --title".into(),
        ));
    }

    let pr = load_pr(&args)?;
    if !args.json {
        ui::print_pr(&pr);
    }

    let report = check(&options, pr.clone())?;

    // Status lines go to stderr so JSON output stays parseable
    let mut stdout = io::stdout();
    if args.json {
        finish(&args, &pr, &report, &mut stdout, &mut io::stderr())
    } else {
        finish(&args, &pr, &report, &mut stdout, &mut io::stdout())
    }
}

/// Print the report to `out`, then post the comment if requested,
/// writing its status line to `status`
fn finish(
    args: &Args,
    pr: &PullRequest,
    report: &Report,
    out: &mut impl Write,
    status: &mut impl Write,
) -> Result<()> {
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
    } else {
        ui::print_report(report);
    }

    if args.comment {
        let (number, msg) = post_comment(pr, report, args.dry_run)?;
        writeln!(
            status,
            "{} Commented on #{}: {}",
            "+".bright_green(),
            number,
            msg
        )?;
    }

    Ok(())
}

/// Run the issue key check against a pull request and collect the result
pub fn check(options: &Options, pr: PullRequest) -> Result<Report> {
    let mut review = Review::new(pr);
    jira::annotate(options, &mut review)?;
    Ok(review.into_report())
}

/// Load options from the config file and apply command-line overrides
fn resolve_options(args: &Args) -> Result<Options> {
    let options = match &args.config {
        Some(path) => Options::load(path)?,
        None => Options::load_default()?,
    };
    Ok(apply_overrides(options, args))
}

fn apply_overrides(mut options: Options, args: &Args) -> Options {
    if let Some(key) = &args.key {
        options.key = key.clone();
    }
    if let Some(url) = &args.url {
        options.url = url.clone();
    }
    if let Some(emoji) = &args.emoji {
        options.emoji = emoji.clone();
    }
    options
}

/// Use the title from the command line, or ask GitHub for the PR
fn load_pr(args: &Args) -> Result<PullRequest> {
    if let Some(title) = &args.title {
        return Ok(PullRequest::new().with_title(title.clone()));
    }

    let pr = github::get_pr(args.pr.as_deref()).map_err(Error::GitHubCli)?;
    info!(number = ?pr.number, title = %pr.title, "fetched pull request");
    Ok(pr)
}

fn post_comment(pr: &PullRequest, report: &Report, dry_run: bool) -> Result<(u32, String)> {
    let number = pr
        .number
        .ok_or_else(|| Error::InvalidInput("pull request has no number".into()))?;

    let body = template::comment_body(report);
    let msg = github::comment_pr(number, &body, dry_run).map_err(Error::GitHubCli)?;
    info!(number, dry_run, "posted review comment");
    Ok((number, msg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_check_collects_single_message() {
        let options = Options::new("ABC", "https://jira.example.com/browse");
        let pr = PullRequest::new().with_title("ABC-42: Fix parser");

        let report = check(&options, pr).unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(
            report.messages[0],
            r#":link: <a href="https://jira.example.com/browse/ABC-42">ABC-42</a>"#
        );
    }

    #[test]
    fn test_check_collects_single_warning() {
        let options = Options::new("ABC", "https://jira.example.com/browse/");
        let pr = PullRequest::new().with_title("Refactor module");

        let report = check(&options, pr).unwrap();

        assert_eq!(report.len(), 1);
        assert!(report.has_warnings());
    }

    #[test]
    fn test_apply_overrides_replaces_only_given_fields() {
        let options = Options::new("ABC", "https://file.example.com/browse/");
        let args = Args {
            url: Some("https://cli.example.com/browse/".into()),
            ..Args::default()
        };

        let options = apply_overrides(options, &args);

        assert_eq!(options.key, "ABC");
        assert_eq!(options.url, "https://cli.example.com/browse/");
        assert_eq!(options.emoji, ":link:");
    }

    #[test]
    fn test_resolve_options_from_file_and_args() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"key: ABC\nurl: https://jira.example.com/browse/\n")
            .unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            emoji: Some(":ticket:".into()),
            ..Args::default()
        };

        let options = resolve_options(&args).unwrap();

        assert_eq!(options.key, "ABC");
        assert_eq!(options.emoji, ":ticket:");
    }

    #[test]
    fn test_run_fails_on_missing_url() {
        let file = NamedTempFile::new().unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            key: Some("ABC".into()),
            title: Some("ABC-1".into()),
            ..Args::default()
        };

        let result = run(args);

        assert!(matches!(result, Err(Error::Config(ConfigError::MissingUrl))));
    }

    #[test]
    fn test_run_rejects_comment_with_title() {
        let file = NamedTempFile::new().unwrap();
        let args = Args {
            config: Some(file.path().to_path_buf()),
            key: Some("ABC".into()),
            url: Some("https://jira.example.com/browse/".into()),
            title: Some("ABC-1".into()),
            comment: true,
            ..Args::default()
        };

        assert!(matches!(run(args), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_json_comment_dry_run_keeps_stdout_json() {
        let args = Args {
            json: true,
            comment: true,
            dry_run: true,
            ..Args::default()
        };
        let pr = PullRequest {
            number: Some(7),
            title: "ABC-42: Fix parser".into(),
            url: None,
        };
        let options = Options::new("ABC", "https://jira.example.com/browse/");
        let report = check(&options, pr.clone()).unwrap();
        let mut out = Vec::new();
        let mut status = Vec::new();

        finish(&args, &pr, &report, &mut out, &mut status).unwrap();

        let parsed: Report = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, report);
        let status = String::from_utf8(status).unwrap();
        assert!(status.contains("Commented on #7"));
        assert!(status.contains("gh pr comment 7"));
    }

    #[test]
    fn test_post_comment_needs_number() {
        let pr = PullRequest::new().with_title("ABC-1");
        let result = post_comment(&pr, &Report::new(), true);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_load_pr_from_title() {
        let args = Args {
            title: Some("ABC-3 thing".into()),
            ..Args::default()
        };

        let pr = load_pr(&args).unwrap();

        assert_eq!(pr.title, "ABC-3 thing");
        assert_eq!(pr.number, None);
    }
}
