//! Lazy views over other iterables.
//!
//! A view stores only its upstream source(s) and a function. Nothing is
//! computed when a view is created; each cursor recomputes elements from
//! upstream as it is pulled, so a view always reflects the current contents of
//! the lists underneath it.

mod builder;
mod concat;
mod filter;
pub(crate) mod state;
mod transform;

pub use builder::{ConcatBuilder, ViewBuilder};
pub use concat::{Concat, ConcatCursor};
pub use filter::{Where, WhereCursor};
pub use transform::{Map, Select, TransformCursor};
