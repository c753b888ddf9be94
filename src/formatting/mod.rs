pub mod bulk;
pub mod issues;
pub mod utils;
pub mod wrap;

pub use bulk::{format_bulk, format_bulk_header};
pub use issues::{
    format_issue_header, format_issue_lines, format_milestones, issue_to_json, issues_to_json,
    print_issues, sort_issues, IssueOrder,
};
pub use utils::{format_time, short_sha, sort_key};
pub use wrap::{wrap, wrap_indented};
