pub mod github_client;
pub mod tracker;

pub use github_client::GitHubClient;
pub use tracker::IssueTracker;
