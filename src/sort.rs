//! `$orderby` fragment compilation

use crate::types::{QuerySpec, SortDescriptor, SortDirection};

/// Compile a sort descriptor into the order-by fragment
///
/// A `None` direction renders the field with no direction token and no
/// trailing whitespace; an absent descriptor compiles to the empty string.
pub(crate) fn compile(sort: Option<&SortDescriptor>) -> String {
    match sort {
        Some(sort) => match sort.direction.token() {
            Some(token) => format!("$orderby={} {}", sort.field_name, token),
            None => format!("$orderby={}", sort.field_name),
        },
        None => String::new(),
    }
}

impl QuerySpec {
    /// Sort ascending on a field
    pub fn order_by(mut self, field: &str) -> Self {
        self.sort = Some(SortDescriptor::new(field, SortDirection::Ascending));
        self
    }

    /// Sort descending on a field
    pub fn order_by_desc(mut self, field: &str) -> Self {
        self.sort = Some(SortDescriptor::new(field, SortDirection::Descending));
        self
    }

    /// Attach a prebuilt sort descriptor
    pub fn sort_by(mut self, sort: SortDescriptor) -> Self {
        self.sort = Some(sort);
        self
    }
}
