use std::rc::Rc;

/// Something that can hand out cursors over its elements.
///
/// Every call to [`Iterable::cursor`] produces an independent cursor, so two
/// traversals of the same value never disturb each other. Cursors borrow the
/// value they came from and read it lazily: nothing is computed until the
/// cursor is pulled.
pub trait Iterable {
    type Item;

    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_>;
}

/// A pull-based position over a sequence.
///
/// A cursor starts before the first element. `move_next` advances and reports
/// whether an element is available, after which `current` returns it. Once
/// `move_next` reports exhaustion the cursor is back at its start, so pulling
/// again begins a fresh pass over the sequence.
pub trait Cursor {
    type Item;

    fn move_next(&mut self) -> bool;

    /// The element produced by the last successful `move_next`, if any.
    fn current(&self) -> Option<&Self::Item>;

    /// Rewinds to the start, including any upstream cursors.
    fn reset(&mut self);

    fn into_items(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

impl<C> Cursor for &mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn move_next(&mut self) -> bool {
        (**self).move_next()
    }

    fn current(&self) -> Option<&Self::Item> {
        (**self).current()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

/// Adapts a [`Cursor`] to [`Iterator`], cloning each element out.
///
/// The iterator stops at the first exhaustion; the wrapped cursor is left at
/// its start.
pub struct CursorIter<C> {
    cursor: C,
}

impl<C> CursorIter<C> {
    pub fn into_inner(self) -> C {
        self.cursor
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
    C::Item: Clone,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.move_next() {
            self.cursor.current().cloned()
        } else {
            None
        }
    }
}

impl<L> Iterable for &L
where
    L: Iterable + ?Sized,
{
    type Item = L::Item;

    type Cursor<'a> = L::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<L> Iterable for Rc<L>
where
    L: Iterable + ?Sized,
{
    type Item = L::Item;

    type Cursor<'a> = L::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}

impl<L> Iterable for Box<L>
where
    L: Iterable + ?Sized,
{
    type Item = L::Item;

    type Cursor<'a> = L::Cursor<'a>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        (**self).cursor()
    }
}
