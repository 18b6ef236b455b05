use std::fmt;

use crate::iterable::{Cursor, Iterable};

use super::state::State;

/// A lazy view yielding all of `first` and then all of `second`.
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub fn new(first: A, second: B) -> Self {
        tracing::trace!("creating concatenated view");
        Concat { first, second }
    }
}

impl<A, B> fmt::Debug for Concat<A, B>
where
    A: fmt::Debug,
    B: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<A, B> Iterable for Concat<A, B>
where
    A: Iterable,
    B: Iterable<Item = A::Item>,
{
    type Item = A::Item;

    type Cursor<'a> = ConcatCursor<A::Cursor<'a>, B::Cursor<'a>>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ConcatCursor {
            first: self.first.cursor(),
            second: self.second.cursor(),
            active: Side::First,
            state: State::Start,
            active_has_item: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

pub struct ConcatCursor<CA, CB> {
    first: CA,
    second: CB,
    active: Side,
    state: State,
    active_has_item: bool,
}

impl<CA, CB> ConcatCursor<CA, CB>
where
    CA: Cursor,
    CB: Cursor<Item = CA::Item>,
{
    fn pull_active(&mut self) -> bool {
        match self.active {
            Side::First => self.first.move_next(),
            Side::Second => self.second.move_next(),
        }
    }
}

impl<CA, CB> Cursor for ConcatCursor<CA, CB>
where
    CA: Cursor,
    CB: Cursor<Item = CA::Item>,
{
    type Item = CA::Item;

    fn move_next(&mut self) -> bool {
        loop {
            match self.state {
                State::Start => {
                    self.reset();
                    self.active_has_item = self.pull_active();
                    self.state = State::HaveCurrent;
                }
                State::HaveCurrent => {
                    if self.active_has_item {
                        self.state = State::Advancing;
                        return true;
                    }
                    match self.active {
                        Side::First => {
                            self.active = Side::Second;
                            self.active_has_item = self.pull_active();
                        }
                        Side::Second => {
                            tracing::trace!("both sides exhausted, view restarts on next pull");
                            self.reset();
                            return false;
                        }
                    }
                }
                State::Advancing => {
                    self.active_has_item = self.pull_active();
                    self.state = State::HaveCurrent;
                }
            }
        }
    }

    fn current(&self) -> Option<&CA::Item> {
        if self.state != State::Advancing {
            return None;
        }
        match self.active {
            Side::First => self.first.current(),
            Side::Second => self.second.current(),
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.active = Side::First;
        self.state = State::Start;
        self.active_has_item = false;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::List;

    #[test]
    fn drains_first_then_second() {
        let a = List::from_iter([1, 2]);
        let b = List::from_iter([3, 4, 5]);
        let view = Concat::new(&a, &b);
        let items: Vec<_> = view.cursor().into_items().collect();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_sides() {
        let empty: List<i32> = List::new();
        let b = List::from_iter([7]);

        let items: Vec<_> = Concat::new(&empty, &b).cursor().into_items().collect();
        assert_eq!(items, vec![7]);

        let items: Vec<_> = Concat::new(&b, &empty).cursor().into_items().collect();
        assert_eq!(items, vec![7]);

        assert!(!Concat::new(&empty, &empty).cursor().move_next());
    }

    #[test]
    fn sees_second_side_mutation_before_traversal() {
        let a = Rc::new(List::from_iter(["Inception"]));
        let b = Rc::new(List::from_iter(["Snatch."]));
        let view = Concat::new(a.clone(), b.clone());
        b.append("Fargo");
        let items: Vec<_> = view.cursor().into_items().collect();
        assert_eq!(items, vec!["Inception", "Snatch.", "Fargo"]);
    }

    #[test]
    fn restart_resumes_from_first() {
        let a = List::from_iter(['a']);
        let b = List::from_iter(['b']);
        let view = Concat::new(&a, &b);
        let mut cursor = view.cursor();
        assert!(cursor.move_next());
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&'b'));
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&'a'));
    }
}
