//! GraphQL response types.
//!
//! The response is nullable at every level. Null organization, project,
//! item connection or node list all mean "no items", never an error.
//! Field values that do not have the expected shape (a text field named as
//! the points field, an iteration with an unparsable date) are treated as
//! unset on that item.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::fetch::ItemPage;
use crate::model::{ItemKind, Iteration, Points, ProjectItem, TrackedItem};

/// Top-level GraphQL envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` of the `GetProjectItems` query.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectItemsData {
    pub organization: Option<OrganizationNode>,
}

#[derive(Debug, Deserialize)]
pub struct OrganizationNode {
    #[serde(rename = "projectV2")]
    pub project_v2: Option<ProjectNode>,
}

#[derive(Debug, Deserialize)]
pub struct ProjectNode {
    pub items: Option<ItemConnection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConnection {
    pub page_info: PageInfo,
    pub nodes: Option<Vec<Option<ItemNode>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// `ProjectV2ItemType`, with room for types added after this was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WireItemType {
    DraftIssue,
    Issue,
    PullRequest,
    Redacted,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemNode {
    #[serde(rename = "type")]
    pub item_type: WireItemType,
    #[serde(default)]
    pub point_field: Option<NumberValue>,
    #[serde(default)]
    pub iteration_field: Option<IterationValue>,
    #[serde(default)]
    pub status_field: Option<SingleSelectValue>,
    #[serde(default)]
    pub grouping_field: Option<SingleSelectValue>,
}

#[derive(Debug, Deserialize)]
pub struct NumberValue {
    #[serde(default)]
    pub number: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationValue {
    #[serde(default)]
    pub iteration_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub duration: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SingleSelectValue {
    #[serde(default)]
    pub name: Option<String>,
}

impl IterationValue {
    fn into_iteration(self) -> Option<Iteration> {
        let start_date = self.start_date?;
        let Ok(start) = NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") else {
            warn!(start_date = %start_date, "Ignoring iteration with unparsable start date");
            return None;
        };
        let Ok(duration) = u32::try_from(self.duration?) else {
            warn!(start_date = %start_date, "Ignoring iteration with negative duration");
            return None;
        };
        Some(Iteration::new(
            self.iteration_id.unwrap_or_default(),
            start,
            duration,
        ))
    }
}

impl ItemNode {
    /// Convert to the domain model. `None` for item types this client does
    /// not know.
    #[must_use]
    pub fn into_item(self) -> Option<ProjectItem> {
        let kind = match self.item_type {
            WireItemType::DraftIssue => ItemKind::DraftIssue,
            WireItemType::Issue => ItemKind::Issue,
            WireItemType::PullRequest => ItemKind::PullRequest,
            WireItemType::Redacted => return Some(ProjectItem::Redacted),
            WireItemType::Unknown => {
                debug!("Skipping item of unknown type");
                return None;
            }
        };

        Some(ProjectItem::Tracked(TrackedItem {
            kind,
            points: self.point_field.and_then(|v| v.number).map(Points),
            iteration: self
                .iteration_field
                .and_then(IterationValue::into_iteration),
            status: self.status_field.and_then(|v| v.name),
            group: self.grouping_field.and_then(|v| v.name),
        }))
    }
}

impl ProjectItemsData {
    /// Convert to an [`ItemPage`].
    ///
    /// Any null along `organization.projectV2.items.nodes` yields an empty
    /// final page.
    #[must_use]
    pub fn into_page(self) -> ItemPage {
        let Some(connection) = self
            .organization
            .and_then(|org| org.project_v2)
            .and_then(|project| project.items)
        else {
            return ItemPage::empty();
        };
        let Some(nodes) = connection.nodes else {
            return ItemPage::empty();
        };

        ItemPage {
            items: nodes
                .into_iter()
                .flatten()
                .filter_map(ItemNode::into_item)
                .collect(),
            has_next_page: connection.page_info.has_next_page,
            end_cursor: connection.page_info.end_cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ItemPage {
        let response: GraphQlResponse<ProjectItemsData> = serde_json::from_str(json).unwrap();
        assert!(response.errors.is_empty());
        response.data.unwrap_or_default().into_page()
    }

    #[test]
    fn test_full_page() {
        let page = parse(
            r#"{"data":{"organization":{"projectV2":{"items":{
                "pageInfo":{"hasNextPage":true,"endCursor":"Mw"},
                "nodes":[
                  {"type":"ISSUE",
                   "pointField":{"number":2},
                   "iterationField":{"iterationId":"1234abcd","startDate":"2024-12-06","duration":14},
                   "statusField":{"name":"Done"},
                   "groupingField":{"name":"Epic1"}},
                  {"type":"REDACTED"}
                ]}}}}}"#,
        );

        assert!(page.has_next_page);
        assert_eq!(page.end_cursor.as_deref(), Some("Mw"));
        assert_eq!(page.items.len(), 2);

        let item = page.items[0].tracked().unwrap();
        assert_eq!(item.kind, ItemKind::Issue);
        assert_eq!(item.points, Some(Points(2.0)));
        let iteration = item.iteration.as_ref().unwrap();
        assert_eq!(iteration.iteration_id, "1234abcd");
        assert_eq!(iteration.start_date, NaiveDate::from_ymd_opt(2024, 12, 6).unwrap());
        assert_eq!(iteration.duration, 14);
        assert_eq!(item.status.as_deref(), Some("Done"));
        assert_eq!(item.group.as_deref(), Some("Epic1"));

        assert_eq!(page.items[1], ProjectItem::Redacted);
    }

    #[test]
    fn test_null_fields_and_omitted_grouping() {
        let page = parse(
            r#"{"data":{"organization":{"projectV2":{"items":{
                "pageInfo":{"hasNextPage":false,"endCursor":"Mw"},
                "nodes":[{"type":"DRAFT_ISSUE","pointField":null,"iterationField":null,"statusField":null}]
                }}}}}"#,
        );
        let item = page.items[0].tracked().unwrap();
        assert_eq!(item.kind, ItemKind::DraftIssue);
        assert!(item.points.is_none());
        assert!(item.iteration.is_none());
        assert!(item.status.is_none());
        assert!(item.group.is_none());
    }

    #[test]
    fn test_mismatched_field_types_resolve_to_empty_objects() {
        let page = parse(
            r#"{"data":{"organization":{"projectV2":{"items":{
                "pageInfo":{"hasNextPage":false,"endCursor":null},
                "nodes":[{"type":"PULL_REQUEST","pointField":{},"iterationField":{},"statusField":{}}]
                }}}}}"#,
        );
        let item = page.items[0].tracked().unwrap();
        assert!(item.points.is_none());
        assert!(item.iteration.is_none());
        assert!(item.status.is_none());
    }

    #[test]
    fn test_unparsable_iteration_is_unset() {
        let page = parse(
            r#"{"data":{"organization":{"projectV2":{"items":{
                "pageInfo":{"hasNextPage":false,"endCursor":"Mw"},
                "nodes":[{"type":"ISSUE","pointField":{"number":1},
                          "iterationField":{"iterationId":"x","startDate":"12/06/2024","duration":14}}]
                }}}}}"#,
        );
        assert!(page.items[0].tracked().unwrap().iteration.is_none());
    }

    #[test]
    fn test_null_levels_yield_empty_page() {
        for json in [
            r#"{"data":null}"#,
            r#"{"data":{"organization":null}}"#,
            r#"{"data":{"organization":{"projectV2":null}}}"#,
            r#"{"data":{"organization":{"projectV2":{"items":null}}}}"#,
            r#"{"data":{"organization":{"projectV2":{"items":{
                "pageInfo":{"hasNextPage":true,"endCursor":"Mw"},"nodes":null}}}}}"#,
        ] {
            let page = parse(json);
            assert!(page.items.is_empty(), "{json}");
            assert!(!page.has_next_page, "{json}");
        }
    }

    #[test]
    fn test_null_nodes_and_unknown_types_are_skipped() {
        let page = parse(
            r#"{"data":{"organization":{"projectV2":{"items":{
                "pageInfo":{"hasNextPage":false,"endCursor":"Mw"},
                "nodes":[null,{"type":"SOMETHING_NEW"},{"type":"ISSUE"}]
                }}}}}"#,
        );
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_errors_are_collected() {
        let response: GraphQlResponse<ProjectItemsData> = serde_json::from_str(
            r#"{"data":{"organization":null},
                "errors":[{"type":"NOT_FOUND","message":"Could not resolve to an Organization with the login of 'x'."}]}"#,
        )
        .unwrap();
        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.starts_with("Could not resolve"));
    }
}
