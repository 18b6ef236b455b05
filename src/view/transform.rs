use std::fmt;

use crate::iterable::{Cursor, Iterable};

use super::state::PullMachine;

/// A lazy view applying a type-preserving function to every element.
pub struct Map<S, F> {
    source: S,
    function: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, function: F) -> Self {
        tracing::trace!("creating map view");
        Map { source, function }
    }
}

impl<S, F> Iterable for Map<S, F>
where
    S: Iterable,
    F: Fn(&S::Item) -> S::Item,
{
    type Item = S::Item;

    type Cursor<'a> = TransformCursor<'a, S::Cursor<'a>, F, S::Item>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TransformCursor::new(self.source.cursor(), &self.function)
    }
}

/// A lazy view projecting every element through `selector`, possibly into a
/// different type.
pub struct Select<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Select<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        tracing::trace!("creating select view");
        Select { source, selector }
    }
}

impl<S, F, R> Iterable for Select<S, F>
where
    S: Iterable,
    F: Fn(&S::Item) -> R,
{
    type Item = R;

    type Cursor<'a> = TransformCursor<'a, S::Cursor<'a>, F, R>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        TransformCursor::new(self.source.cursor(), &self.selector)
    }
}

impl<S, F> fmt::Debug for Map<S, F>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, F> fmt::Debug for Select<S, F>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Cursor for both [`Map`] and [`Select`].
///
/// The projected value is recomputed on every pull and held only until the
/// next one.
pub struct TransformCursor<'a, C, F, R> {
    upstream: C,
    function: &'a F,
    current: Option<R>,
    machine: PullMachine,
}

impl<'a, C, F, R> TransformCursor<'a, C, F, R> {
    fn new(upstream: C, function: &'a F) -> Self {
        TransformCursor {
            upstream,
            function,
            current: None,
            machine: PullMachine::new(),
        }
    }
}

impl<C, F, R> Cursor for TransformCursor<'_, C, F, R>
where
    C: Cursor,
    F: Fn(&C::Item) -> R,
{
    type Item = R;

    fn move_next(&mut self) -> bool {
        let Self {
            upstream,
            function,
            current,
            machine,
        } = self;
        let function = *function;
        let found = machine.pull(upstream, |item| {
            *current = Some(function(item));
            true
        });
        if !found {
            *current = None;
        }
        found
    }

    fn current(&self) -> Option<&R> {
        self.current.as_ref()
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.upstream.reset();
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::List;

    #[test]
    fn map_applies_function() {
        let list = List::from_iter(["fight club".to_string(), "filth".to_string()]);
        let view = Map::new(&list, |s: &String| s.to_uppercase());
        let items: Vec<_> = view.cursor().into_items().collect();
        assert_eq!(items, vec!["FIGHT CLUB", "FILTH"]);
    }

    #[test]
    fn select_changes_item_type() {
        let list = List::from_iter(["a", "bb", "ccc", "dddd", "eeeee", "ffffff"]);
        let view = Select::new(&list, |s: &&str| s.len());
        let mut cursor = view.cursor();
        let mut sum = 0;
        while cursor.move_next() {
            sum += cursor.current().copied().unwrap_or_default();
        }
        assert_eq!(sum, 21);
    }

    #[test]
    fn function_runs_once_per_pull() {
        let calls = Cell::new(0);
        let list = List::from_iter([1, 2, 3]);
        let view = Select::new(&list, |x: &i32| {
            calls.set(calls.get() + 1);
            x * 10
        });
        assert_eq!(calls.get(), 0);

        let mut cursor = view.cursor();
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&10));
        assert_eq!(calls.get(), 1);

        while cursor.move_next() {}
        assert_eq!(calls.get(), 3);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn restarts_after_exhaustion() {
        let list = List::from_iter([1, 2]);
        let view = Map::new(&list, |x: &i32| x + 1);
        let mut cursor = view.cursor();
        let first: Vec<_> = (&mut cursor).into_items().collect();
        let second: Vec<_> = (&mut cursor).into_items().collect();
        assert_eq!(first, vec![2, 3]);
        assert_eq!(second, vec![2, 3]);
    }
}
