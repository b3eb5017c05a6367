use serde::Deserialize;
use std::fs;

const CONFIG_FILE: &str = ".shipit.toml";

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_message")]
    pub default_message: String,
    #[serde(default = "default_remote")]
    pub remote: String,
    #[serde(default)]
    pub confirm_push: bool,
}

fn default_message() -> String {
    String::from("Quick update")
}

fn default_remote() -> String {
    String::from("origin")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_message: default_message(),
            remote: default_remote(),
            confirm_push: false,
        }
    }
}

impl Config {
    /// Reads `./.shipit.toml` if present; falls back to the defaults
    /// when the file is missing or does not parse.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: could not parse {}: {}", CONFIG_FILE, e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.default_message, "Quick update");
        assert_eq!(config.remote, "origin");
        assert!(!config.confirm_push);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let config: Config = toml::from_str("remote = \"upstream\"").unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.default_message, "Quick update");
        assert!(!config.confirm_push);
    }

    #[test]
    fn full_file() {
        let config: Config = toml::from_str(
            "default_message = \"wip\"\nremote = \"backup\"\nconfirm_push = true\n",
        )
        .unwrap();
        assert_eq!(config.default_message, "wip");
        assert_eq!(config.remote, "backup");
        assert!(config.confirm_push);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.default_message, "Quick update");
    }
}
