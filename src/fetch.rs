//! Paged item fetching.
//!
//! Drives cursor pagination against an [`ItemPageSource`] and collects every
//! page into one ordered item list. Pages are requested strictly one after
//! another, since each cursor comes from the previous response.

use std::future::Future;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::model::ProjectItem;

/// Parameters of the project item query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemQuery {
    /// Organization login that owns the project
    pub login: String,

    pub project_number: u32,

    pub point_field_name: String,
    pub iteration_field_name: String,
    pub status_field_name: String,

    /// `None` when no grouping dimension is configured
    pub grouping_field_name: Option<String>,
}

/// One page of items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPage {
    pub items: Vec<ProjectItem>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl ItemPage {
    /// A final page with no items.
    ///
    /// Used when the organization, project or item list resolves to null.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Something that can retrieve one page of project items.
///
/// Implemented by the GitHub GraphQL client; tests use scripted sources.
pub trait ItemPageSource: Send + Sync {
    /// Fetch the page following `cursor`, or the first page when `None`.
    fn fetch_page(
        &self,
        query: &ItemQuery,
        cursor: Option<&str>,
    ) -> impl Future<Output = Result<ItemPage>> + Send;
}

/// Fetch every page of items, in the order the source returns them.
///
/// There is no cap on the page count: the source is trusted to report
/// `has_next_page = false` eventually.
///
/// # Errors
///
/// Propagates the first source error. Fails with [`Error::Pagination`] if a
/// page claims a successor but carries no cursor to reach it.
pub async fn fetch_all_items<S: ItemPageSource>(
    source: &S,
    query: &ItemQuery,
) -> Result<Vec<ProjectItem>> {
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        info!(
            login = %query.login,
            number = query.project_number,
            cursor = cursor.as_deref().unwrap_or(""),
            "Fetching project items"
        );
        let page = source.fetch_page(query, cursor.as_deref()).await?;
        pages += 1;
        info!(count = page.items.len(), page = pages, "Fetched items");

        items.extend(page.items);

        if !page.has_next_page {
            break;
        }
        cursor = Some(page.end_cursor.ok_or_else(|| {
            Error::Pagination(format!("page {pages} reports a next page but no end cursor"))
        })?);
    }

    debug!(total = items.len(), pages, "Finished fetching project items");
    Ok(items)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Source that replays scripted responses and records requested cursors.
    pub struct ScriptedSource {
        responses: Mutex<VecDeque<Result<ItemPage>>>,
        cursors: Mutex<Vec<Option<String>>>,
    }

    impl ScriptedSource {
        pub fn new(responses: Vec<Result<ItemPage>>) -> Self {
            Self {
                responses: Mutex::new(responses.into()),
                cursors: Mutex::new(Vec::new()),
            }
        }

        pub fn requested_cursors(&self) -> Vec<Option<String>> {
            self.cursors.lock().unwrap().clone()
        }
    }

    impl ItemPageSource for ScriptedSource {
        async fn fetch_page(&self, _query: &ItemQuery, cursor: Option<&str>) -> Result<ItemPage> {
            self.cursors.lock().unwrap().push(cursor.map(str::to_string));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("source asked for more pages than scripted")
        }
    }

    pub fn page(items: Vec<ProjectItem>, next: Option<&str>) -> ItemPage {
        ItemPage {
            items,
            has_next_page: next.is_some(),
            end_cursor: Some(next.unwrap_or("Mw").to_string()),
        }
    }

    pub fn query() -> ItemQuery {
        ItemQuery {
            login: "octocat".to_string(),
            project_number: 123,
            point_field_name: "points".to_string(),
            iteration_field_name: "Sprint".to_string(),
            status_field_name: "Status".to_string(),
            grouping_field_name: None,
        }
    }
}
