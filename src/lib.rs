//! Lazy, composable queries over growable lists.
//!
//! A [`List`] owns its elements. Everything else is a view: [`Query::filter`],
//! [`Query::map`], [`Query::select`] and [`Query::concat`] wrap a source
//! without touching it, and elements are only computed when a terminal
//! operation such as [`Query::count`] or [`Query::to_array`] pulls them
//! through a [`Cursor`].

pub mod error;
mod iterable;
mod list;
mod query;
pub mod view;

pub use error::{Error, Result};
pub use iterable::{Cursor, CursorIter, Iterable};
pub use list::{List, ListCursor};
pub use query::Query;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_from_root_list() {
        test_utils::init_test_logging();
        let list = List::from_iter(["Fight Club", "Filth", "Revolver"]);
        let shouted = (&list)
            .filter(|s| s.starts_with('F'))
            .select(|s| s.to_uppercase());
        assert_eq!(&*shouted.to_array(), &["FIGHT CLUB", "FILTH"]);
    }
}
