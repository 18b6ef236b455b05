use std::cell::RefCell;

use crate::{
    error::{Error, Result},
    iterable::{Cursor, Iterable},
};

/// A growable, insertion-ordered list.
///
/// Mutation goes through `&self`, so a list can be shared (usually behind an
/// `Rc`) between the code that fills it and the views that read it. Cursors
/// read the storage by index on every pull, so elements appended mid-traversal
/// are seen by a cursor that has not yet reached the end.
#[derive(Clone, Debug)]
pub struct List<T> {
    items: RefCell<Vec<T>>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        List {
            items: RefCell::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn append(&self, item: T) {
        self.items.borrow_mut().push(item);
    }

    pub fn extend_from<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        // Collected first so the iterator may itself read this list.
        let items: Vec<T> = items.into_iter().collect();
        self.items.borrow_mut().extend(items);
    }

    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    pub fn set(&self, index: usize, value: T) -> Result<()> {
        let mut items = self.items.borrow_mut();
        let len = items.len();
        *items
            .get_mut(index)
            .ok_or_else(|| Error::new_out_of_range(index, len))? = value;
        Ok(())
    }

    /// Runs `f` on the element at `index` without cloning it.
    pub fn with<F, R>(&self, index: usize, f: F) -> Result<R>
    where
        F: FnOnce(&T) -> R,
    {
        let items = self.items.borrow();
        items
            .get(index)
            .map(f)
            .ok_or_else(|| Error::new_out_of_range(index, items.len()))
    }
}

impl<T> List<T>
where
    T: Clone,
{
    pub fn get(&self, index: usize) -> Result<T> {
        self.with(index, T::clone)
    }

    /// A snapshot of the current contents.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.borrow().clone()
    }

    fn read(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        List {
            items: RefCell::new(iter.into_iter().collect()),
        }
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.get_mut().extend(iter);
    }
}

impl<T> Iterable for List<T>
where
    T: Clone,
{
    type Item = T;

    type Cursor<'a> = ListCursor<'a, T>
    where
        Self: 'a;

    fn cursor(&self) -> Self::Cursor<'_> {
        ListCursor {
            list: self,
            next_index: 0,
            current: None,
        }
    }
}

pub struct ListCursor<'a, T> {
    list: &'a List<T>,
    next_index: usize,
    current: Option<T>,
}

impl<T> Cursor for ListCursor<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn move_next(&mut self) -> bool {
        match self.list.read(self.next_index) {
            Some(item) => {
                self.next_index += 1;
                self.current = Some(item);
                true
            }
            None => {
                self.reset();
                false
            }
        }
    }

    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    fn reset(&mut self) {
        self.next_index = 0;
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_tracks_appends_and_clear() {
        let list = List::new();
        list.extend_from([1, 2, 3]);
        assert_eq!(list.len(), 3);

        list.append(133);
        assert_eq!(list.len(), 4);

        list.clear();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn empty_list_rejects_every_index() {
        let list: List<i32> = List::new();
        for index in [usize::MAX, 0, 100] {
            assert_eq!(list.get(index), Err(Error::new_out_of_range(index, 0)));
        }
    }

    #[test]
    fn index_reads_appended_element() {
        let list = List::new();
        list.clear();
        list.extend_from([1, 5, 8, 2, 6, 9, 3, 7, 0]);
        assert_eq!(list.get(5), Ok(9));
    }

    #[test]
    fn set_replaces_in_place() {
        let list = List::from_iter(["a", "b", "c"]);
        list.set(1, "z").unwrap();
        assert_eq!(list.to_vec(), vec!["a", "z", "c"]);
        assert_eq!(list.set(3, "d"), Err(Error::new_out_of_range(3, 3)));
    }

    #[test]
    fn extend_from_own_snapshot() {
        let list = List::from_iter([1, 2]);
        list.extend_from(list.to_vec());
        assert_eq!(list.to_vec(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn cursor_sees_appends_during_traversal() {
        let list = List::from_iter([1, 2]);
        let mut cursor = list.cursor();
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&1));
        list.append(3);
        let rest: Vec<_> = (&mut cursor).into_items().collect();
        assert_eq!(rest, vec![2, 3]);
    }

    #[test]
    fn cursor_restarts_after_exhaustion() {
        let list = List::from_iter(['x']);
        let mut cursor = list.cursor();
        assert!(cursor.move_next());
        assert!(!cursor.move_next());
        assert_eq!(cursor.current(), None);
        assert!(cursor.move_next());
        assert_eq!(cursor.current(), Some(&'x'));
    }
}
