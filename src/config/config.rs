use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_PROJECT, DEFAULT_WRAP_WIDTH, GITHUB_API_URL, INTERACTIVE_WRAP_WIDTH, TOKEN_ENV, TOKEN_FILE};
use crate::error::{ErrorContext, IssueError, IssueResult};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub api_root: Option<String>,
    #[serde(default)]
    pub token_file: Option<PathBuf>,
    #[serde(default)]
    pub wrap_width: Option<usize>,
    #[serde(default)]
    pub interactive_wrap_width: Option<usize>,
}

impl Config {
    pub fn project(&self) -> &str {
        self.project.as_deref().unwrap_or(DEFAULT_PROJECT)
    }

    pub fn api_root(&self) -> &str {
        self.api_root.as_deref().unwrap_or(GITHUB_API_URL)
    }

    /// Wrap width for rendered bodies; interactive sessions get wider text.
    pub fn wrap_width(&self, interactive: bool) -> usize {
        if interactive {
            self.interactive_wrap_width.unwrap_or(INTERACTIVE_WRAP_WIDTH)
        } else {
            self.wrap_width.unwrap_or(DEFAULT_WRAP_WIDTH)
        }
    }
}

pub fn config_path() -> IssueResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| IssueError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

/// Loads the config at `path`; a missing file yields the defaults.
pub fn load_config_from(path: &Path) -> IssueResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&config_str)
        .map_err(|e| IssueError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn load_config() -> IssueResult<Config> {
    load_config_from(&config_path()?)
}

/// Default token location, `$HOME/.github-issue-token`.
pub fn default_token_file() -> IssueResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| IssueError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(TOKEN_FILE))
}

/// Reads a personal access token from `path`.
///
/// On Unix the file must not be readable or writable by group or others.
pub fn read_token_file(path: &Path) -> IssueResult<String> {
    let data = fs::read_to_string(path)
        .map_err(|_| IssueError::TokenNotFound(path.display().to_string()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(path)?.permissions().mode();
        if mode & 0o077 != 0 {
            return Err(IssueError::TokenError(format!(
                "{} mode is {:#o}, want {:#o}",
                path.display(),
                mode & 0o777,
                mode & 0o700
            )));
        }
    }

    let token = data.trim().to_string();
    if token.is_empty() {
        return Err(IssueError::TokenError(format!("{} is empty", path.display())));
    }
    Ok(token)
}

/// Finds the token: `GITHUB_TOKEN` first, then `token_file` or the default file.
pub fn get_token(token_file: Option<&Path>) -> IssueResult<String> {
    if let Ok(token) = env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            return Ok(token.trim().to_string());
        }
    }

    match token_file {
        Some(path) => read_token_file(path),
        None => read_token_file(&default_token_file()?),
    }
}
