use crate::{
    iterable::{Cursor, CursorIter, Iterable},
    list::List,
    view::{Concat, Map, Select, Where},
};

/// Query operators available on every [`Iterable`].
///
/// `filter`, `map`, `select` and `concat` wrap `self` in a lazy view and do no
/// work. The remaining operators are terminal: they pull from a fresh cursor,
/// so every call observes the current upstream contents and re-runs any
/// predicates or selectors along the way.
pub trait Query: Iterable + Sized {
    fn filter<P>(self, predicate: P) -> Where<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Where::new(self, predicate)
    }

    fn map<F>(self, function: F) -> Map<Self, F>
    where
        F: Fn(&Self::Item) -> Self::Item,
    {
        Map::new(self, function)
    }

    fn select<F, R>(self, selector: F) -> Select<Self, F>
    where
        F: Fn(&Self::Item) -> R,
    {
        Select::new(self, selector)
    }

    fn concat<B>(self, second: B) -> Concat<Self, B>
    where
        B: Iterable<Item = Self::Item>,
    {
        Concat::new(self, second)
    }

    fn items(&self) -> CursorIter<Self::Cursor<'_>> {
        self.cursor().into_items()
    }

    fn count(&self) -> usize {
        let mut cursor = self.cursor();
        let mut count = 0;
        while cursor.move_next() {
            count += 1;
        }
        tracing::debug!(count, "counted sequence");
        count
    }

    /// Stops at the first element failing `predicate`.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor();
        while cursor.move_next() {
            if let Some(item) = cursor.current() {
                if !predicate(item) {
                    return false;
                }
            }
        }
        true
    }

    /// Stops at the first element satisfying `predicate`.
    fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut cursor = self.cursor();
        while cursor.move_next() {
            if let Some(item) = cursor.current() {
                if predicate(item) {
                    return true;
                }
            }
        }
        false
    }

    fn first<P>(&self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone,
    {
        let mut cursor = self.cursor();
        while cursor.move_next() {
            if let Some(item) = cursor.current() {
                if predicate(item) {
                    return Some(item.clone());
                }
            }
        }
        None
    }

    /// Like [`Query::first`], falling back to `Default::default()`.
    fn first_or_default<P>(&self, predicate: P) -> Self::Item
    where
        P: FnMut(&Self::Item) -> bool,
        Self::Item: Clone + Default,
    {
        self.first(predicate).unwrap_or_default()
    }

    /// Materializes the sequence.
    ///
    /// Sizes the array with a counting pass and fills it with a second,
    /// independent pass. Side effects in upstream functions therefore run
    /// twice. If the second pass yields more elements than the first, the
    /// extras are not pulled; if it yields fewer, the array is shorter.
    fn to_array(&self) -> Box<[Self::Item]>
    where
        Self::Item: Clone,
    {
        let len = self.count();
        let mut array = Vec::with_capacity(len);
        array.extend(self.items().take(len));
        if array.len() < len {
            tracing::warn!(
                expected = len,
                actual = array.len(),
                "sequence shrank between counting and filling"
            );
        }
        array.into_boxed_slice()
    }

    /// Returns a new list sorted by `key_selector`. Equal keys keep their
    /// original relative order.
    fn order_by<K, F>(&self, mut key_selector: F) -> List<Self::Item>
    where
        F: FnMut(&Self::Item) -> K,
        K: Ord,
        Self::Item: Clone,
    {
        let items: Vec<Self::Item> = self.items().collect();
        let keys: Vec<K> = items.iter().map(&mut key_selector).collect();
        let mut keyed: Vec<(K, Self::Item)> = keys.into_iter().zip(items).collect();
        keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
        tracing::debug!(len = keyed.len(), "ordered sequence");
        keyed.into_iter().map(|(_, item)| item).collect()
    }
}

impl<I> Query for I where I: Iterable {}
