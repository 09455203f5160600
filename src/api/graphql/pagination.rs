use crate::data::repos::traits::repository::Window;
use async_graphql::OutputType;
use async_graphql::connection::{Connection, Edge, query};
use std::future::Future;

/// The `[start, end)` slice of a result set selected by relay arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceBounds {
    pub start: usize,
    pub end: usize,
}

impl SliceBounds {
    /// Cursors are zero-based positions in the full result set. `after` and
    /// `before` narrow the range first, then `first` keeps its head and
    /// `last` its tail.
    pub fn new(
        total: usize,
        after: Option<usize>,
        before: Option<usize>,
        first: Option<usize>,
        last: Option<usize>,
    ) -> Self {
        let start = after.map(|a| a.saturating_add(1)).unwrap_or(0).min(total);
        let mut end = before.unwrap_or(total).min(total).max(start);

        if let Some(first) = first {
            end = end.min(start.saturating_add(first));
        }
        let start = match last {
            Some(last) => start.max(end.saturating_sub(last)),
            None => start,
        };

        SliceBounds { start, end }
    }

    pub fn window(&self) -> Window {
        Window {
            offset: self.start as i64,
            limit: Some((self.end - self.start) as i64),
        }
    }
}

/// Builds a relay connection over a result set of `total` rows, loading only
/// the selected slice through `fetch`.
pub async fn paginate<N, F, Fut>(
    after: Option<String>,
    before: Option<String>,
    first: Option<i32>,
    last: Option<i32>,
    total: i64,
    fetch: F,
) -> async_graphql::Result<Connection<usize, N>>
where
    N: OutputType,
    F: FnOnce(Window) -> Fut,
    Fut: Future<Output = async_graphql::Result<Vec<N>>>,
{
    query(
        after,
        before,
        first,
        last,
        |after: Option<usize>,
         before: Option<usize>,
         first: Option<usize>,
         last: Option<usize>| async move {
            let total = usize::try_from(total).unwrap_or(0);
            let bounds = SliceBounds::new(total, after, before, first, last);
            let nodes = fetch(bounds.window()).await?;

            let mut connection = Connection::new(bounds.start > 0, bounds.end < total);
            connection.edges.extend(
                nodes
                    .into_iter()
                    .enumerate()
                    .map(|(offset, node)| Edge::new(bounds.start + offset, node)),
            );

            Ok::<_, async_graphql::Error>(connection)
        },
    )
    .await
}
