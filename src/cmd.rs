use anyhow::anyhow;
use anyhow::Result;
use log::debug;

pub fn git(args: &[&str]) -> Result<String> {
    debug!("running git {}", args.join(" "));

    let output = std::process::Command::new("git").args(args).output()?;

    if output.status.success() {
        let stdout = std::str::from_utf8(&output.stdout)?;
        debug!("captured {} bytes of output", stdout.len());
        Ok(stdout.into())
    } else {
        let stderr = std::str::from_utf8(&output.stderr)?.trim().to_string();
        Err(anyhow!(stderr))
    }
}
