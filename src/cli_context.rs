use std::path::PathBuf;
use std::sync::Arc;

use crate::cache::IssueCache;
use crate::client::GitHubClient;
use crate::config::{get_token, load_config, Config};
use crate::error::{IssueError, IssueResult};
use crate::models::Project;
use crate::timeline::RenderOptions;

/// Central context for CLI operations: settings resolved from the config
/// file and flags, the shared issue cache, and a lazily created client.
pub struct CliContext {
    project: Project,
    api_root: String,
    token: Option<String>,
    token_file: Option<PathBuf>,
    render: RenderOptions,
    json: bool,
    cache: Arc<IssueCache>,
    client: Option<Arc<GitHubClient>>,
}

impl CliContext {
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    pub fn render_options(&self) -> &RenderOptions {
        &self.render
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn cache(&self) -> Arc<IssueCache> {
        Arc::clone(&self.cache)
    }

    /// Get the token, loading it from the environment or token file if necessary
    pub fn token(&mut self) -> IssueResult<&String> {
        if self.token.is_none() {
            self.token = Some(get_token(self.token_file.as_deref())?);
        }

        self.token
            .as_ref()
            .ok_or_else(|| IssueError::TokenNotFound("token file".to_string()))
    }

    /// Get or create the client (requires a token)
    pub fn client(&mut self) -> IssueResult<Arc<GitHubClient>> {
        if let Some(client) = &self.client {
            return Ok(Arc::clone(client));
        }

        let token = self.token()?.clone();
        let client = Arc::new(GitHubClient::with_api_root(
            &token,
            self.project.clone(),
            &self.api_root,
        )?);
        self.client = Some(Arc::clone(&client));
        Ok(client)
    }
}

/// Builder pattern for creating CLI contexts from command-line overrides
#[derive(Default)]
pub struct CliContextBuilder {
    config: Option<Config>,
    project: Option<String>,
    api_root: Option<String>,
    token: Option<String>,
    token_file: Option<PathBuf>,
    wrap_width: Option<usize>,
    interactive: bool,
    raw: bool,
    json: bool,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `config` instead of reading the config file.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = Some(api_root.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn build(self) -> IssueResult<CliContext> {
        let config = match self.config {
            Some(config) => config,
            None => load_config()?,
        };

        let project: Project = self
            .project
            .as_deref()
            .unwrap_or_else(|| config.project())
            .parse()?;
        let api_root = self
            .api_root
            .unwrap_or_else(|| config.api_root().to_string())
            .trim_end_matches('/')
            .to_string();
        let wrap_width = self
            .wrap_width
            .unwrap_or_else(|| config.wrap_width(self.interactive));
        if wrap_width == 0 {
            return Err(IssueError::InvalidInput("wrap width must be positive".to_string()));
        }
        let token_file = self.token_file.or_else(|| config.token_file.clone());

        Ok(CliContext {
            project,
            api_root,
            token: self.token,
            token_file,
            render: RenderOptions { raw: self.raw, wrap_width },
            json: self.json,
            cache: Arc::new(IssueCache::new()),
            client: None,
        })
    }
}
