//! Core value objects for query building
//!
//! These are immutable per-request descriptors: a UI layer (grid filtering
//! row, column header, virtual scroll state) produces them, one
//! [`QuerySpec`] is built per request, and nothing persists across build
//! calls. Serde names follow the camelCase shape the UI sends
//! (`fieldName`, `searchVal`, `startIndex`).

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logic operator joining filter operands within a group, or groups with
/// each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterLogic {
    And,
    Or,
}

impl fmt::Display for FilterLogic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterLogic::And => write!(f, "and"),
            FilterLogic::Or => write!(f, "or"),
        }
    }
}

/// One field/condition/value comparison inside a filter group
///
/// `condition` names an entry in the condition catalog; compilation fails
/// with [`crate::QueryError::UnknownCondition`] if it does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOperand {
    pub field_name: String,
    pub condition: String,
    #[serde(default)]
    pub search_val: Value,
}

impl FilterOperand {
    pub fn new<T: Into<Value>>(field_name: &str, condition: &str, search_val: T) -> Self {
        Self {
            field_name: field_name.to_string(),
            condition: condition.to_string(),
            search_val: search_val.into(),
        }
    }
}

/// Ordered set of operands joined by one logic operator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterGroup {
    pub operator: FilterLogic,
    #[serde(rename = "filteringOperands")]
    pub operands: Vec<FilterOperand>,
}

/// Sort order for the `$orderby` fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Lower-cased protocol token, or `None` when no direction should be
    /// rendered at all
    pub fn token(&self) -> Option<&'static str> {
        match self {
            SortDirection::None => None,
            SortDirection::Ascending => Some("ascending"),
            SortDirection::Descending => Some("descending"),
        }
    }
}

/// Field and direction for the `$orderby` fragment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortDescriptor {
    pub field_name: String,
    #[serde(rename = "dir")]
    pub direction: SortDirection,
}

impl SortDescriptor {
    pub fn new(field_name: &str, direction: SortDirection) -> Self {
        Self {
            field_name: field_name.to_string(),
            direction,
        }
    }
}

/// Pagination window: zero-based start offset plus item count
///
/// A `chunk_size` of exactly zero means the caller left the window size
/// unspecified and the default applies; negative values in either field
/// are rejected at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub start_index: i64,
    pub chunk_size: i64,
}

impl PageWindow {
    pub fn new(start_index: i64, chunk_size: i64) -> Self {
        Self {
            start_index,
            chunk_size,
        }
    }
}

/// Field projection for the `$select` fragment, with an optional relation
/// to `$expand` alongside it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub expand: Option<String>,
}

/// Everything a single query needs: resource name plus the optional
/// fragment descriptors. Absent fields omit their fragment entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    pub table: String,
    #[serde(default)]
    pub projection: Option<Projection>,
    #[serde(default)]
    pub filter_groups: Vec<FilterGroup>,
    #[serde(default)]
    pub sort: Option<SortDescriptor>,
    #[serde(default)]
    pub page: Option<PageWindow>,
}

impl QuerySpec {
    /// Start a query against one resource; fragments attach through the
    /// fluent methods on each concern module
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            projection: None,
            filter_groups: Vec::new(),
            sort: None,
            page: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_logic_renders_lowercase() {
        assert_eq!(FilterLogic::And.to_string(), "and");
        assert_eq!(FilterLogic::Or.to_string(), "or");
    }

    #[test]
    fn test_sort_direction_tokens() {
        assert_eq!(SortDirection::Ascending.token(), Some("ascending"));
        assert_eq!(SortDirection::Descending.token(), Some("descending"));
        assert_eq!(SortDirection::None.token(), None);
    }

    #[test]
    fn test_operand_deserializes_from_ui_shape() {
        let operand: FilterOperand = serde_json::from_value(json!({
            "fieldName": "ShipCountry",
            "condition": "contains",
            "searchVal": "Germany"
        }))
        .unwrap();
        assert_eq!(operand.field_name, "ShipCountry");
        assert_eq!(operand.search_val, json!("Germany"));
    }

    #[test]
    fn test_group_deserializes_filtering_operands_key() {
        let group: FilterGroup = serde_json::from_value(json!({
            "operator": "or",
            "filteringOperands": [
                { "fieldName": "Freight", "condition": "greaterThan", "searchVal": 10 }
            ]
        }))
        .unwrap();
        assert_eq!(group.operator, FilterLogic::Or);
        assert_eq!(group.operands.len(), 1);
    }

    #[test]
    fn test_query_spec_defaults_from_table_only_json() {
        let spec: QuerySpec = serde_json::from_value(json!({ "table": "Orders" })).unwrap();
        assert!(spec.projection.is_none());
        assert!(spec.filter_groups.is_empty());
        assert!(spec.sort.is_none());
        assert!(spec.page.is_none());
    }
}
