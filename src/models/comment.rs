use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::user::{login_of, User};

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(from = "CommentRecord")]
pub struct Comment {
    pub author: String,
    pub created_at: Option<DateTime<Utc>>,
    pub body: String,
}

#[derive(Debug, Deserialize)]
pub struct CommentRecord {
    user: Option<User>,
    created_at: Option<DateTime<Utc>>,
    body: Option<String>,
}

impl From<CommentRecord> for Comment {
    fn from(record: CommentRecord) -> Self {
        Comment {
            author: login_of(record.user),
            created_at: record.created_at,
            body: record.body.unwrap_or_default(),
        }
    }
}
