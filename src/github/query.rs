//! GraphQL document for listing project items.

use serde::Serialize;

use crate::fetch::ItemQuery;

/// Items requested per page; the API maximum.
pub const PAGE_SIZE: u32 = 100;

/// Lists project items with the four custom fields resolved by name.
///
/// Each field is fetched with `fieldValueByName`; a value of the wrong field
/// type resolves to an empty object, an unset value to null. The grouping
/// field is only requested when `withGrouping` is true.
pub const GET_PROJECT_ITEMS_QUERY: &str = r"
query GetProjectItems(
  $login: String!,
  $number: Int!,
  $first: Int!,
  $pointFieldName: String!,
  $iterationFieldName: String!,
  $statusFieldName: String!,
  $groupingFieldName: String!,
  $withGrouping: Boolean!,
  $cursor: String
) {
  organization(login: $login) {
    projectV2(number: $number) {
      items(first: $first, after: $cursor) {
        pageInfo {
          hasNextPage
          endCursor
        }
        nodes {
          type
          pointField: fieldValueByName(name: $pointFieldName) {
            ... on ProjectV2ItemFieldNumberValue {
              number
            }
          }
          iterationField: fieldValueByName(name: $iterationFieldName) {
            ... on ProjectV2ItemFieldIterationValue {
              iterationId
              startDate
              duration
            }
          }
          statusField: fieldValueByName(name: $statusFieldName) {
            ... on ProjectV2ItemFieldSingleSelectValue {
              name
            }
          }
          groupingField: fieldValueByName(name: $groupingFieldName) @include(if: $withGrouping) {
            ... on ProjectV2ItemFieldSingleSelectValue {
              name
            }
          }
        }
      }
    }
  }
}
";

/// Variables for [`GET_PROJECT_ITEMS_QUERY`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariables<'a> {
    pub login: &'a str,
    pub number: u32,
    pub first: u32,
    pub point_field_name: &'a str,
    pub iteration_field_name: &'a str,
    pub status_field_name: &'a str,
    pub grouping_field_name: &'a str,
    pub with_grouping: bool,
    pub cursor: Option<&'a str>,
}

impl<'a> QueryVariables<'a> {
    /// Variables for the page after `cursor`.
    #[must_use]
    pub fn new(query: &'a ItemQuery, cursor: Option<&'a str>) -> Self {
        Self {
            login: &query.login,
            number: query.project_number,
            first: PAGE_SIZE,
            point_field_name: &query.point_field_name,
            iteration_field_name: &query.iteration_field_name,
            status_field_name: &query.status_field_name,
            grouping_field_name: query.grouping_field_name.as_deref().unwrap_or_default(),
            with_grouping: query.grouping_field_name.is_some(),
            cursor,
        }
    }
}

/// Request body of a GraphQL POST.
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: QueryVariables<'a>,
}
