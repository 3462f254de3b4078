//! Search over the staff roster
//!
//! - [`Query`]: classification of raw search text (empty, id prefix, name)
//! - [`Filter`]: selects matching records in store order
//! - [`SearchView`]: last displayed results, kept when a refresh fails
//!
//! An empty query selects nothing: the browse screen stays blank until the
//! user types something.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod filter;
pub mod query;
pub mod view;

pub use filter::{matching, Filter};
pub use query::Query;
pub use view::SearchView;
