use std::fmt;

use crate::iterable::{Cursor, Iterable};

use super::state::PullMachine;

/// A lazy view over the elements of `source` that satisfy `predicate`.
pub struct Where<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Where<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        tracing::trace!("creating filtered view");
        Where { source, predicate }
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S, P> fmt::Debug for Where<S, P>
where
    S: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Where")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl<S, P> Iterable for Where<S, P>
where
    S: Iterable,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    type Cursor<'a> = WhereCursor<'a, S::Cursor<'a>, P>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        WhereCursor {
            upstream: self.source.cursor(),
            predicate: &self.predicate,
            machine: PullMachine::new(),
        }
    }
}

pub struct WhereCursor<'a, C, P> {
    upstream: C,
    predicate: &'a P,
    machine: PullMachine,
}

impl<C, P> Cursor for WhereCursor<'_, C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn move_next(&mut self) -> bool {
        let predicate = self.predicate;
        self.machine.pull(&mut self.upstream, |item| predicate(item))
    }

    fn current(&self) -> Option<&C::Item> {
        if self.machine.has_current() {
            self.upstream.current()
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.machine.reset();
        self.upstream.reset();
    }
}
