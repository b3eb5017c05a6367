use crate::cmd::git;
use anyhow::Result;

pub fn push(remote: &str, branch: &str) -> Result<String> {
    git(&["push", remote, branch])
}
