use crate::cmd::git;
use anyhow::{anyhow, Result};

pub struct Status {
    pub branch: String,
    pub commits_ahead: u32,
    pub commits_behind: u32,
    pub changes: Vec<String>,
}

impl Status {
    pub fn is_clean(&self) -> bool {
        self.changes.is_empty()
    }
}

pub fn status() -> Result<Status> {
    let output = git(&["--no-pager", "status", "-s", "-b", "--porcelain"])?;
    parse(&output)
}

fn parse(output: &str) -> Result<Status> {
    let mut lines = output.lines();
    let header = lines
        .next()
        .ok_or_else(|| anyhow!("git status produced no output"))?;

    // e.g. "## main...origin/main [ahead 2, behind 1]"
    let regex = regex::Regex::new(
        r"^## (.+?)(?:\.{3}\S+)?(?: \[(?:ahead (\d+))?(?:, )?(?:behind (\d+))?\])?$",
    )?;

    let captures = regex
        .captures(header)
        .ok_or_else(|| anyhow!("unexpected status header: {header}"))?;

    let branch = captures
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let commits_ahead = captures
        .get(2)
        .map_or(Ok(0), |m| m.as_str().parse())?;
    let commits_behind = captures
        .get(3)
        .map_or(Ok(0), |m| m.as_str().parse())?;

    let changes = lines
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();

    Ok(Status {
        branch,
        commits_ahead,
        commits_behind,
        changes,
    })
}
