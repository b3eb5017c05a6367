use anyhow::anyhow;
use anyhow::Result;

pub fn prompt(remote: &str, branch: &str) -> Result<bool> {
    inquire::Confirm::new(format!("Push to {}/{}?", remote, branch).as_str())
        .with_default(true)
        .prompt()
        .map_err(|e| anyhow!(e))
}
