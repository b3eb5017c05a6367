use crate::cmd::git;
use anyhow::Result;

/// Stages every working-tree change, untracked files included.
pub fn add_all() -> Result<String> {
    git(&["add", "-A"])
}
