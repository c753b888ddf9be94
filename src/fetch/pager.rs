use std::future::Future;

use crate::error::{IssueError, IssueResult};
use crate::logging::log_debug;
use crate::models::Page;

use super::partial::Partial;

/// Walks a paged endpoint from `start_page` until it reports no further page.
///
/// Pages are requested strictly one after another. The walk stops when the
/// returned next page is not greater than the page just requested. If a
/// request fails, the items of the earlier pages are returned together with
/// the error.
pub async fn paginate<T, F, Fut>(start_page: u32, mut fetch_page: F) -> Partial<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = IssueResult<Page<T>>>,
{
    let mut all = Vec::new();
    let mut page = start_page;

    loop {
        match fetch_page(page).await {
            Ok(Page { items, next_page }) => {
                log_debug(&format!("page {}: {} items, next {}", page, items.len(), next_page));
                all.extend(items);
                if next_page <= page {
                    break;
                }
                page = next_page;
            }
            Err(e) => {
                return Partial::failed(all, IssueError::PageFetch {
                    page,
                    source: Box::new(e),
                });
            }
        }
    }

    Partial::complete(all)
}
