//! `$skip`/`$top` fragment compilation

use crate::error::{QueryError, QueryResult};
use crate::types::{PageWindow, QuerySpec};

/// Window size substituted when the caller supplies a chunk size of zero.
///
/// Inherited from the virtual-scrolling consumer this protocol was built
/// for; confirm against the actual paging consumer before relying on the
/// value being meaningful rather than a placeholder.
pub const DEFAULT_CHUNK_SIZE: i64 = 11;

/// Compile a page window into the skip/top fragment
///
/// Negative start index or chunk size is a contract violation, never
/// silently clamped. An absent window compiles to the empty string.
pub(crate) fn compile(page: Option<&PageWindow>) -> QueryResult<String> {
    let Some(page) = page else {
        return Ok(String::new());
    };

    if page.start_index < 0 || page.chunk_size < 0 {
        return Err(QueryError::InvalidPageWindow(format!(
            "start index {} and chunk size {} must be non-negative",
            page.start_index, page.chunk_size
        )));
    }

    let top = if page.chunk_size == 0 {
        DEFAULT_CHUNK_SIZE
    } else {
        page.chunk_size
    };

    Ok(format!("$skip={}&$top={}", page.start_index, top))
}

impl QuerySpec {
    /// Request one window of rows: zero-based start offset plus item count
    pub fn page(mut self, start_index: i64, chunk_size: i64) -> Self {
        self.page = Some(PageWindow::new(start_index, chunk_size));
        self
    }

    /// Attach a prebuilt page window
    pub fn window(mut self, window: PageWindow) -> Self {
        self.page = Some(window);
        self
    }
}
