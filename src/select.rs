//! `$select` and `$expand` fragment compilation
//!
//! An expanded relation is appended to the select list so the backend
//! returns it alongside the projected fields; the expand fragment itself
//! renders independently.

use crate::types::{Projection, QuerySpec};

/// Compile the select fragment
///
/// Empty field names are skipped; the list never ends with a separator.
/// Nothing renders unless at least one field or an expand relation is
/// present.
pub(crate) fn compile_select(projection: Option<&Projection>) -> String {
    let Some(projection) = projection else {
        return String::new();
    };

    let mut fields: Vec<&str> = projection
        .fields
        .iter()
        .map(String::as_str)
        .filter(|field| !field.is_empty())
        .collect();

    if let Some(expand) = projection.expand.as_deref() {
        fields.push(expand);
    }

    if fields.is_empty() {
        return String::new();
    }

    format!("$select={}", fields.join(", "))
}

/// Compile the expand fragment
pub(crate) fn compile_expand(projection: Option<&Projection>) -> String {
    match projection.and_then(|p| p.expand.as_deref()) {
        Some(expand) => format!("$expand={}", expand),
        None => String::new(),
    }
}

impl QuerySpec {
    /// Add select fields from a comma-separated list
    pub fn select(mut self, fields: &str) -> Self {
        let projection = self.projection.get_or_insert_with(Projection::default);
        projection.fields.extend(
            fields
                .split(',')
                .map(|field| field.trim().to_string())
                .filter(|field| !field.is_empty()),
        );
        self
    }

    /// Add select fields from a slice
    pub fn select_fields(mut self, fields: &[&str]) -> Self {
        let projection = self.projection.get_or_insert_with(Projection::default);
        projection
            .fields
            .extend(fields.iter().map(|field| field.to_string()));
        self
    }

    /// Expand one related collection alongside the selected fields
    pub fn expand(mut self, relation: &str) -> Self {
        let projection = self.projection.get_or_insert_with(Projection::default);
        projection.expand = Some(relation.to_string());
        self
    }
}
