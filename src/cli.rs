use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// JIRA project key (e.g. the ABC in ABC-123)
    #[clap(short, long, env = "JIRA_KEY")]
    pub key: Option<String>,

    /// JIRA issue base URL (e.g. https://jira.atlassian.com/browse/)
    #[clap(short, long, env = "JIRA_URL")]
    pub url: Option<String>,

    /// Emoji shown with the issue link [default: :link:]
    #[clap(short, long, env = "JIRA_EMOJI")]
    pub emoji: Option<String>,

    /// Config file, defaults to ~/.config/jira-issue-link/config.yml
    #[clap(short, long, value_parser)]
    pub config: Option<PathBuf>,

    /// Check this title instead of fetching the PR from GitHub
    #[clap(short, long, conflicts_with = "pr")]
    pub title: Option<String>,

    /// PR number, URL or branch to check (default: PR of the current branch)
    #[clap(short, long)]
    pub pr: Option<String>,

    /// Print the report as JSON
    #[clap(long, value_parser, default_value_t = false)]
    pub json: bool,

    /// Post the report as a comment on the PR
    #[clap(long, value_parser, default_value_t = false)]
    pub comment: bool,

    /// Print the gh command instead of posting the comment
    #[clap(short, long, value_parser, default_value_t = false)]
    pub dry_run: bool,

    /// Enable debug logging
    #[clap(short, long, value_parser, default_value_t = false)]
    pub verbose: bool,
}
