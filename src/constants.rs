pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const CONFIG_FILE: &str = ".issue-cli-config.json";
pub const TOKEN_FILE: &str = ".github-issue-token";
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const USER_AGENT: &str = concat!("issue-cli/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_PROJECT: &str = "golang/go";

// GitHub caps per_page at 100.
pub const PER_PAGE: u32 = 100;
pub const FIRST_PAGE: u32 = 1;

pub const DEFAULT_WRAP_WIDTH: usize = 70;
pub const INTERACTIVE_WRAP_WIDTH: usize = 120;

/// Display format for timestamps in rendered issues.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sortable key format for timeline entries.
pub const SORT_KEY_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

pub const SHORT_SHA_LEN: usize = 7;
pub const BODY_INDENT: &str = "\t";
