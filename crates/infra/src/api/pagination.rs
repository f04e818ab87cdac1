//! Cursor-following record streams

use std::collections::HashSet;
use std::future::Future;

use futures::stream::{self, Stream, TryStreamExt};
use squarely_domain::Page;

use super::errors::ApiError;

enum Position {
    Start(Option<String>),
    Next(String),
    Done,
}

/// Stream every record across pages, starting at `first_cursor`.
///
/// `fetch` is called with the cursor for each page. The stream ends after the
/// first page without a cursor, or after the first error. A cursor the server
/// already handed out (or `first_cursor` itself) is `ApiError::InvalidResponse`.
pub fn paginate<T, F, Fut>(
    first_cursor: Option<String>,
    fetch: F,
) -> impl Stream<Item = Result<T, ApiError>> + Send + 'static
where
    T: Send + 'static,
    F: FnMut(Option<String>) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Page<T>, ApiError>> + Send + 'static,
{
    let seen: HashSet<String> = first_cursor.iter().cloned().collect();

    stream::try_unfold(
        (Position::Start(first_cursor), seen, fetch),
        |(position, mut seen, mut fetch)| async move {
            let cursor = match position {
                Position::Start(cursor) => cursor,
                Position::Next(cursor) => Some(cursor),
                Position::Done => return Ok(None),
            };

            let page = fetch(cursor).await?;
            let next = match page.cursor {
                Some(next) if !seen.insert(next.clone()) => {
                    return Err(ApiError::InvalidResponse(format!(
                        "server returned cursor '{next}' more than once"
                    )));
                }
                Some(next) => Position::Next(next),
                None => Position::Done,
            };

            let items = stream::iter(page.items.into_iter().map(Ok::<T, ApiError>));
            Ok(Some((items, (next, seen, fetch))))
        },
    )
    .try_flatten()
}
