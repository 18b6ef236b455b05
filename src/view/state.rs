use crate::iterable::Cursor;

/// Position of a view cursor within one traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum State {
    /// Nothing pulled yet; the next pull rewinds upstream and starts over.
    #[default]
    Start,
    /// Upstream has just been pulled and its element needs to be examined.
    HaveCurrent,
    /// An element was reported; the next pull advances upstream first.
    Advancing,
}

/// The pull protocol shared by the single-upstream views.
///
/// Each pull walks `Start -> HaveCurrent` (or `Advancing -> HaveCurrent`) and
/// hands the upstream element to a callback that decides whether the view
/// reports it. On upstream exhaustion the machine returns to `Start`, which is
/// what makes a view cursor restartable.
#[derive(Debug, Default)]
pub(crate) struct PullMachine {
    state: State,
    upstream_has_item: bool,
}

impl PullMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn state(&self) -> State {
        self.state
    }

    /// True between a successful pull and the next one.
    pub fn has_current(&self) -> bool {
        self.state == State::Advancing
    }

    pub fn reset(&mut self) {
        self.state = State::Start;
        self.upstream_has_item = false;
    }

    /// Runs one pull against `upstream`.
    ///
    /// `accept` sees upstream elements one at a time until it returns `true`
    /// (the view has an element) or upstream runs dry (the view is exhausted
    /// and back at `Start`).
    pub fn pull<C, F>(&mut self, upstream: &mut C, mut accept: F) -> bool
    where
        C: Cursor,
        F: FnMut(&C::Item) -> bool,
    {
        loop {
            match self.state {
                State::Start => {
                    upstream.reset();
                    self.upstream_has_item = upstream.move_next();
                    self.state = State::HaveCurrent;
                }
                State::HaveCurrent => {
                    let item = match upstream.current() {
                        Some(item) if self.upstream_has_item => item,
                        _ => {
                            tracing::trace!("upstream exhausted, view restarts on next pull");
                            self.reset();
                            return false;
                        }
                    };
                    // A rejected element moves straight on to the next one.
                    self.state = State::Advancing;
                    if accept(item) {
                        return true;
                    }
                }
                State::Advancing => {
                    self.upstream_has_item = upstream.move_next();
                    self.state = State::HaveCurrent;
                }
            }
        }
    }
}
