pub mod compiler;
pub mod filter;

pub use compiler::{compile_query, parse_query, plan_query, search_text, IssueQuery, MilestoneSpec, ParsedQuery};
pub use filter::{MilestoneFilter, StructuredFilter};
