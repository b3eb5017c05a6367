use crate::cmd::git;
use anyhow::Result;

pub fn commit(message: &str) -> Result<String> {
    git(&["commit", "-m", message])
}
