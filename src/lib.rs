//! # odata-query: client-side query-expression builder
//!
//! Compiles structured, UI-originated query descriptors — filter groups,
//! sort order, pagination windows, field projections — into the textual
//! query-string protocol understood by OData-style REST backends.
//!
//! All builders are pure, synchronous, stateless transformations: the same
//! [`QuerySpec`] always assembles to the same string, no I/O happens here,
//! and concurrent use needs no coordination. Issuing the request, auth
//! headers and response parsing belong to whatever transport consumes the
//! assembled string.
//!
//! ```
//! use odata_query::{FilterGroup, QuerySpec};
//!
//! let query = QuerySpec::new("Orders")
//!     .filter_group(FilterGroup::any().contains("ShipCountry", "Germany"))
//!     .order_by_desc("Freight")
//!     .page(0, 20)
//!     .to_query_string()
//!     .unwrap();
//!
//! assert_eq!(
//!     query,
//!     "Orders?$count=true&$orderby=Freight descending\
//!      &$filter=contains(ShipCountry, 'Germany')&$skip=0&$top=20"
//! );
//! ```

pub mod condition;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod select;
pub mod sort;
pub mod types;
pub mod url;

// Re-export the public surface
pub use condition::{operator_token, Rendering};
pub use error::{QueryError, QueryResult};
pub use pagination::DEFAULT_CHUNK_SIZE;
pub use types::{
    FilterGroup, FilterLogic, FilterOperand, PageWindow, Projection, QuerySpec, SortDescriptor,
    SortDirection,
};
