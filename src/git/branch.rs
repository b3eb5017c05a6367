use crate::cmd::git;
use anyhow::Result;

/// Name of the branch HEAD points at, or "HEAD" when detached.
pub fn current() -> Result<String> {
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
    Ok(branch.trim().to_string())
}
