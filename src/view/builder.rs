//! Assembly of views from parts that may be missing.
//!
//! The typed constructors cannot be called without a source and a function.
//! These builders are for code that gathers the parts separately (for example
//! from optional configuration) and wants a missing part reported as an error
//! up front, before anything is pulled.

use crate::{
    error::{Error, Result},
    iterable::Iterable,
};

use super::{Concat, Map, Select, Where};

pub struct ViewBuilder<S, F> {
    source: Option<S>,
    function: Option<F>,
}

impl<S, F> ViewBuilder<S, F> {
    pub fn new() -> Self {
        ViewBuilder {
            source: None,
            function: None,
        }
    }

    pub fn source(mut self, source: S) -> Self {
        self.source = Some(source);
        self
    }

    pub fn function(mut self, function: F) -> Self {
        self.function = Some(function);
        self
    }

    pub fn maybe_source(mut self, source: Option<S>) -> Self {
        self.source = source;
        self
    }

    pub fn maybe_function(mut self, function: Option<F>) -> Self {
        self.function = function;
        self
    }

    fn into_parts(self, function_name: &'static str) -> Result<(S, F)> {
        let source = self
            .source
            .ok_or_else(|| Error::new_invalid_argument("source"))?;
        let function = self
            .function
            .ok_or_else(|| Error::new_invalid_argument(function_name))?;
        Ok((source, function))
    }

    pub fn build_where(self) -> Result<Where<S, F>>
    where
        S: Iterable,
        F: Fn(&S::Item) -> bool,
    {
        let (source, predicate) = self.into_parts("predicate")?;
        Ok(Where::new(source, predicate))
    }

    pub fn build_map(self) -> Result<Map<S, F>>
    where
        S: Iterable,
        F: Fn(&S::Item) -> S::Item,
    {
        let (source, function) = self.into_parts("function")?;
        Ok(Map::new(source, function))
    }

    pub fn build_select<R>(self) -> Result<Select<S, F>>
    where
        S: Iterable,
        F: Fn(&S::Item) -> R,
    {
        let (source, selector) = self.into_parts("selector")?;
        Ok(Select::new(source, selector))
    }
}

impl<S, F> Default for ViewBuilder<S, F> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ConcatBuilder<A, B> {
    first: Option<A>,
    second: Option<B>,
}

impl<A, B> ConcatBuilder<A, B> {
    pub fn new() -> Self {
        ConcatBuilder {
            first: None,
            second: None,
        }
    }

    pub fn first(mut self, first: A) -> Self {
        self.first = Some(first);
        self
    }

    pub fn second(mut self, second: B) -> Self {
        self.second = Some(second);
        self
    }

    pub fn maybe_first(mut self, first: Option<A>) -> Self {
        self.first = first;
        self
    }

    pub fn maybe_second(mut self, second: Option<B>) -> Self {
        self.second = second;
        self
    }

    pub fn build(self) -> Result<Concat<A, B>>
    where
        A: Iterable,
        B: Iterable<Item = A::Item>,
    {
        let first = self
            .first
            .ok_or_else(|| Error::new_invalid_argument("first"))?;
        let second = self
            .second
            .ok_or_else(|| Error::new_invalid_argument("second"))?;
        Ok(Concat::new(first, second))
    }
}

impl<A, B> Default for ConcatBuilder<A, B> {
    fn default() -> Self {
        Self::new()
    }
}
