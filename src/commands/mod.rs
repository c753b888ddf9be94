pub mod bulk;
pub mod milestones;
pub mod search;
pub mod show;

pub use bulk::handle_bulk;
pub use milestones::handle_milestones;
pub use search::handle_search;
pub use show::handle_show;

use colored::*;

use crate::error::IssueError;
use crate::logging::log_error;

/// Reports an error that cut a listing short; the items already shown stand.
pub(crate) fn warn_partial(what: &str, error: &IssueError) {
    log_error(&format!("{}: {}", what, error));
    eprintln!("{} {}:", "Warning:".yellow().bold(), what);
    for line in error.to_string().lines() {
        eprintln!("  {}", line);
    }
}
