//! End-to-end query assembly scenarios
//!
//! Covers the full descriptor-to-string pipeline, including ingestion of
//! the camelCase JSON shape a UI grid posts.

use odata_query::{
    FilterGroup, FilterLogic, PageWindow, QueryError, QuerySpec, SortDescriptor, SortDirection,
};
use serde_json::json;

#[test]
fn test_table_only_spec_assembles_count_request() {
    let query = QuerySpec::new("Orders").to_query_string().unwrap();
    assert_eq!(query, "Orders?$count=true");
}

#[test]
fn test_single_contains_filter() {
    let query = QuerySpec::new("Orders")
        .filter_group(FilterGroup::all().contains("ShipCountry", "Germany"))
        .to_query_string()
        .unwrap();
    assert_eq!(
        query,
        "Orders?$count=true&$filter=contains(ShipCountry, 'Germany')"
    );
}

#[test]
fn test_sort_and_pagination_assemble_in_order() {
    let query = QuerySpec::new("Orders")
        .order_by_desc("Freight")
        .page(0, 20)
        .to_query_string()
        .unwrap();
    assert_eq!(
        query,
        "Orders?$count=true&$orderby=Freight descending&$skip=0&$top=20"
    );
}

#[test]
fn test_fragment_order_is_canonical_regardless_of_construction_order() {
    // Populate in reverse of the canonical orderby/filter/pagination/
    // select/expand order; the assembled string must not care.
    let query = QuerySpec::new("Orders")
        .expand("Shipper")
        .select("OrderID, ShipCountry")
        .page(10, 20)
        .filter_group(FilterGroup::all().gt("Freight", 30))
        .order_by("OrderDate")
        .to_query_string()
        .unwrap();
    assert_eq!(
        query,
        "Orders?$count=true\
         &$orderby=OrderDate ascending\
         &$filter=Freight gt 30\
         &$skip=10&$top=20\
         &$select=OrderID, ShipCountry, Shipper\
         &$expand=Shipper"
    );
}

#[test]
fn test_or_groups_combine_with_fixed_and() {
    let query = QuerySpec::new("Orders")
        .filter_group(
            FilterGroup::any()
                .eq("ShipCountry", "Germany")
                .eq("ShipCountry", "France"),
        )
        .filter_group(FilterGroup::any().gt("Freight", 10).lt("Freight", 100))
        .to_query_string()
        .unwrap();
    assert_eq!(
        query,
        "Orders?$count=true&$filter=\
         ShipCountry eq 'Germany' or ShipCountry eq 'France' \
         and Freight gt 10 or Freight lt 100"
    );
}

#[test]
fn test_unknown_condition_produces_no_query() {
    let result = QuerySpec::new("Orders")
        .filter_group(FilterGroup::all().condition("Name", "fuzzyMatch", "abc"))
        .to_query_string();
    assert_eq!(
        result,
        Err(QueryError::UnknownCondition("fuzzyMatch".to_string()))
    );
}

#[test]
fn test_invalid_page_window_produces_no_query() {
    let result = QuerySpec::new("Orders")
        .window(PageWindow::new(-3, 20))
        .to_query_string();
    assert!(matches!(result, Err(QueryError::InvalidPageWindow(_))));
}

#[test]
fn test_default_chunk_size_applies_in_assembled_query() {
    let query = QuerySpec::new("Orders")
        .page(0, 0)
        .to_query_string()
        .unwrap();
    assert_eq!(query, "Orders?$count=true&$skip=0&$top=11");
}

#[test]
fn test_none_direction_descriptor_assembles_without_direction_token() {
    let query = QuerySpec::new("Orders")
        .sort_by(SortDescriptor::new("Freight", SortDirection::None))
        .to_query_string()
        .unwrap();
    assert_eq!(query, "Orders?$count=true&$orderby=Freight");
}

#[test]
fn test_spec_deserialized_from_ui_json_assembles() {
    let spec: QuerySpec = serde_json::from_value(json!({
        "table": "Orders",
        "filterGroups": [
            {
                "operator": "or",
                "filteringOperands": [
                    { "fieldName": "ShipCountry", "condition": "contains", "searchVal": "Germany" },
                    { "fieldName": "Freight", "condition": "greaterThan", "searchVal": 30 }
                ]
            }
        ],
        "sort": { "fieldName": "OrderDate", "dir": "descending" },
        "page": { "startIndex": 0, "chunkSize": 0 }
    }))
    .unwrap();

    assert_eq!(spec.filter_groups[0].operator, FilterLogic::Or);
    assert_eq!(
        spec.to_query_string().unwrap(),
        "Orders?$count=true\
         &$orderby=OrderDate descending\
         &$filter=contains(ShipCountry, 'Germany') or Freight gt 30\
         &$skip=0&$top=11"
    );
}

#[test]
fn test_fluent_helpers_match_hand_built_operands() {
    let fluent = QuerySpec::new("Orders")
        .filter_group(FilterGroup::all().null("ShippedDate"))
        .to_query_string()
        .unwrap();
    let hand_built = QuerySpec::new("Orders")
        .filter_group(FilterGroup::new(FilterLogic::And).condition(
            "ShippedDate",
            "null",
            serde_json::Value::Null,
        ))
        .to_query_string()
        .unwrap();
    assert_eq!(fluent, hand_built);
    assert_eq!(fluent, "Orders?$count=true&$filter=ShippedDate eq null");
}
