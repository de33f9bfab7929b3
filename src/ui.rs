//! Terminal output

use colored::Colorize;

use crate::pr::PullRequest;
use crate::report::Report;

/// Print the pull request being checked
pub fn print_pr(pr: &PullRequest) {
    println!("{}", format_pr(pr));
}

fn format_pr(pr: &PullRequest) -> String {
    let mut lines = vec![match pr.number {
        Some(number) => format!(
            "{} PR #{}: {}",
            ">".bright_green(),
            number,
            pr.title.bright_cyan()
        ),
        None => format!("{} PR title: {}", ">".bright_green(), pr.title.bright_cyan()),
    }];
    if let Some(url) = &pr.url {
        lines.push(format!("{} PR link: {}", ">".bright_green(), url.bright_cyan()));
    }
    lines.join("\n")
}

/// Print every annotation of the report, warnings first
pub fn print_report(report: &Report) {
    for warning in &report.warnings {
        println!("{} {}", "!".bright_yellow(), warning.yellow());
    }
    for message in &report.messages {
        println!("{} {}", "+".bright_green(), message);
    }
}

/// Print a fatal error
pub fn print_error(err: &crate::Error) {
    eprintln!("{} {}", "x".red(), err.to_string().bright_red());
}
