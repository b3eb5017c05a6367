use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use config::Config;
use git::status::Status;

pub mod cmd;
pub mod config;
pub mod git;
pub mod prompt;

#[derive(Parser)]
#[command(
    name = "shipit",
    version,
    about = "Stage, commit, and push the current branch in one command"
)]
struct Cli {
    /// Commit message; falls back to the configured default
    message: Option<String>,

    /// Remote to push to
    #[arg(short, long)]
    remote: Option<String>,

    /// Ask before pushing
    #[arg(short, long)]
    confirm: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load();

    let status: Status = git::status::status()?;

    if status.is_clean() {
        println!("{}", "Working tree clean. Nothing to commit.".yellow());
        if status.commits_ahead > 0 {
            println!(
                "{}",
                format!(
                    "Branch is ahead by {} {}; push them with git push.",
                    status.commits_ahead,
                    plural(status.commits_ahead, "commit")
                )
                .yellow()
            );
        }
        return Ok(());
    }

    println!("Running: {}", "git add -A".bold());
    git::add::add_all()?;

    let message = cli.message.unwrap_or(config.default_message);
    println!("Running: {}", format!("git commit -m \"{}\"", message).bold());
    git::commit::commit(&message).context("commit failed")?;

    let branch = git::branch::current()?;
    let remote = cli.remote.unwrap_or(config.remote);

    if cli.confirm || config.confirm_push {
        if !prompt::push::prompt(&remote, &branch)? {
            println!("{}", "Push skipped.".yellow());
            return Ok(());
        }
    }

    if status.commits_behind > 0 {
        println!(
            "{}",
            format!(
                "Branch is behind by {} {}; the push may be rejected.",
                status.commits_behind,
                plural(status.commits_behind, "commit")
            )
            .yellow()
        );
    }

    println!("Running: {}", format!("git push {} {}", remote, branch).bold());
    git::push::push(&remote, &branch).context("push failed")?;

    println!("{}", format!("Pushed {} to {}.", branch, remote).green());

    Ok(())
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
