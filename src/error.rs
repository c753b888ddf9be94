use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssueError {
    #[error("GitHub token not found. Set GITHUB_TOKEN or write a token to {0}")]
    TokenNotFound(String),

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("fetching page {page}: {source}")]
    PageFetch {
        page: u32,
        #[source]
        source: Box<IssueError>,
    },

    #[error("{}", .0.join("\n"))]
    Batch(Vec<String>),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type IssueResult<T> = Result<T, IssueError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> IssueResult<T>;
    fn with_context<F>(self, f: F) -> IssueResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> IssueResult<T> {
        self.map_err(|e| IssueError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> IssueResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| IssueError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> IssueResult<T> {
        self.ok_or_else(|| IssueError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> IssueResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| IssueError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! issue_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::IssueError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::IssueError::$error_type(format!($fmt, $($arg)*))
    };
}
