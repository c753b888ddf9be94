// Module declarations
pub mod cache;
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod filtering;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod timeline;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cache::IssueCache;
pub use client::{GitHubClient, IssueTracker};
pub use config::{get_token, load_config, Config};
pub use error::{IssueError, IssueResult};
pub use fetch::{fetch_all, Partial};
pub use filtering::{compile_query, plan_query, IssueQuery, StructuredFilter};
pub use models::*;
pub use timeline::{render_timeline, RenderOptions};
