use crate::error::{IssueError, IssueResult};

/// Items gathered by a batch operation, with the error that cut it short.
///
/// Listing and bulk operations keep whatever they collected before a
/// failure; callers decide whether partial data is usable.
#[derive(Debug)]
pub struct Partial<T> {
    pub items: T,
    pub error: Option<IssueError>,
}

impl<T> Partial<T> {
    pub fn complete(items: T) -> Self {
        Self { items, error: None }
    }

    pub fn failed(items: T, error: IssueError) -> Self {
        Self { items, error: Some(error) }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    pub fn map<U, F>(self, f: F) -> Partial<U>
    where
        F: FnOnce(T) -> U,
    {
        Partial {
            items: f(self.items),
            error: self.error,
        }
    }

    pub fn into_parts(self) -> (T, Option<IssueError>) {
        (self.items, self.error)
    }

    /// Treats any error as fatal, discarding the partial items.
    pub fn into_result(self) -> IssueResult<T> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.items),
        }
    }
}
