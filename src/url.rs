//! Query-string assembly
//!
//! The assembler validates nothing itself: each sub-builder reports its own
//! contract violations, and any error here aborts before a request could be
//! issued. Its only job is ordering and omission.

use tracing::debug;

use crate::error::QueryResult;
use crate::types::QuerySpec;
use crate::{filter, pagination, select, sort};

impl QuerySpec {
    /// Assemble the full query string
    ///
    /// Always starts with `<table>?$count=true`, then appends each
    /// non-empty fragment prefixed by `&` in canonical order: orderby,
    /// filter, pagination, select, expand. The order is fixed regardless
    /// of how the descriptor was populated, so assembled strings are
    /// deterministic and comparable in tests.
    pub fn to_query_string(&self) -> QueryResult<String> {
        let mut query = format!("{}?$count=true", self.table);

        let order_query = sort::compile(self.sort.as_ref());

        let filter_expr = filter::compile(&self.filter_groups)?;
        let filter_query = if filter_expr.is_empty() {
            String::new()
        } else {
            format!("$filter={}", filter_expr)
        };

        let scrolling_query = pagination::compile(self.page.as_ref())?;
        let select_query = select::compile_select(self.projection.as_ref());
        let expand_query = select::compile_expand(self.projection.as_ref());

        for fragment in [
            order_query,
            filter_query,
            scrolling_query,
            select_query,
            expand_query,
        ] {
            if !fragment.is_empty() {
                query.push('&');
                query.push_str(&fragment);
            }
        }

        debug!("assembled query string: {}", query);
        Ok(query)
    }
}
