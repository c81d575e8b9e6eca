//! State stack with deferred transitions.
//!
//! States request transitions (add-replace, add-push, remove) from inside
//! their own callbacks. Requests are buffered and only applied at a
//! quiescent point by [`StateStack::apply_pending`], so the stack never
//! reshapes while one of its entries is executing.

use crate::state::State;
use ember_core::{EmberError, Result};

struct PendingAdd<C> {
    state: Box<dyn State<C>>,
    replace: bool,
}

/// Buffered transition requests for a [`StateStack`].
///
/// Holds at most one outstanding add request (a second request before the
/// first is applied overwrites it — last writer wins) and a remove flag.
/// Passed `&mut` into state callbacks so the active state can request its
/// own transitions without aliasing the stack storage.
pub struct StackRequests<C> {
    pending_add: Option<PendingAdd<C>>,
    pending_remove: bool,
}

impl<C> Default for StackRequests<C> {
    fn default() -> Self {
        Self {
            pending_add: None,
            pending_remove: false,
        }
    }
}

impl<C> StackRequests<C> {
    /// Buffer a state to be added at the next `apply_pending`.
    ///
    /// With `replace = true` the current top is popped before the push;
    /// with `replace = false` the current top is paused and kept below.
    /// An unapplied earlier request is discarded without being initialized.
    pub fn request_add(&mut self, state: Box<dyn State<C>>, replace: bool) {
        if let Some(prev) = &self.pending_add {
            log::debug!(
                "pending add overwritten: {} discarded for {}",
                prev.state.name(),
                state.name()
            );
        }
        log::debug!("add requested ({}) (replace: {})", state.name(), replace);
        self.pending_add = Some(PendingAdd { state, replace });
    }

    /// Flag the current top for removal at the next `apply_pending`.
    pub fn request_remove(&mut self) {
        log::debug!("remove requested");
        self.pending_remove = true;
    }

    /// Whether any transition is buffered.
    pub fn has_pending(&self) -> bool {
        self.pending_add.is_some() || self.pending_remove
    }
}

/// Ordered stack of states; the top entry is the active one.
///
/// All mutation flows through [`apply_pending`](Self::apply_pending), which
/// the loop driver calls once per frame between the previous render and the
/// next batch of simulation ticks.
pub struct StateStack<C> {
    states: Vec<Box<dyn State<C>>>,
    requests: StackRequests<C>,
}

impl<C> Default for StateStack<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Drop for StateStack<C> {
    fn drop(&mut self) {
        // Destroy top-down; a plain Vec drop would destroy bottom-up.
        while self.states.pop().is_some() {}
    }
}

impl<C> StateStack<C> {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            requests: StackRequests::default(),
        }
    }

    /// Buffer an add transition. See [`StackRequests::request_add`].
    pub fn request_add(&mut self, state: Box<dyn State<C>>, replace: bool) {
        self.requests.request_add(state, replace);
    }

    /// Buffer a remove transition. See [`StackRequests::request_remove`].
    pub fn request_remove(&mut self) {
        self.requests.request_remove();
    }

    /// Apply buffered transitions. The only operation that mutates the stack.
    ///
    /// Runs the remove phase first, then the add phase:
    /// 1. if removal is flagged and the stack is non-empty, pop the top and
    ///    resume the state underneath (if any);
    /// 2. if an add is buffered, pop (replace) or pause (push) the current
    ///    top, then push the new state and call its `init`.
    pub fn apply_pending(&mut self, ctx: &mut C) -> Result<()> {
        if self.requests.pending_remove {
            if let Some(old) = self.states.pop() {
                log::info!("state removed ({}), depth {}", old.name(), self.states.len());
                // The popped state is destroyed before the one below resumes.
                drop(old);
                if let Some(top) = self.states.last_mut() {
                    top.resume(ctx);
                    log::info!("state resumed ({})", top.name());
                }
            }
            self.requests.pending_remove = false;
        }

        if let Some(PendingAdd { state, replace }) = self.requests.pending_add.take() {
            if replace {
                if let Some(old) = self.states.pop() {
                    log::info!("state replaced ({} -> {})", old.name(), state.name());
                }
            } else if let Some(top) = self.states.last_mut() {
                top.pause(ctx);
                log::info!("state paused ({})", top.name());
            }

            self.states.push(state);
            let depth = self.states.len();
            if let Some(top) = self.states.last_mut() {
                top.init(ctx)?;
                log::info!("state initialized ({}), depth {}", top.name(), depth);
            }
        }

        Ok(())
    }

    /// The currently active state (top of the stack).
    pub fn active(&mut self) -> Result<&mut (dyn State<C> + '_)> {
        match self.states.last_mut() {
            Some(s) => Ok(s.as_mut()),
            None => Err(EmberError::EmptyStateStack),
        }
    }

    /// Deliver one `handle_input` call to the active state.
    pub fn handle_input(&mut self, ctx: &mut C) -> Result<()> {
        let top = self.states.last_mut().ok_or(EmberError::EmptyStateStack)?;
        top.handle_input(ctx, &mut self.requests)
    }

    /// Deliver one `update` call to the active state.
    pub fn update(&mut self, ctx: &mut C, dt: f64) -> Result<()> {
        let top = self.states.last_mut().ok_or(EmberError::EmptyStateStack)?;
        top.update(ctx, dt, &mut self.requests)
    }

    /// Deliver one `render` call to the active state.
    pub fn render(&mut self, ctx: &mut C) -> Result<()> {
        let top = self.states.last_mut().ok_or(EmberError::EmptyStateStack)?;
        top.render(ctx)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Number of states on the stack.
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    /// Whether a transition is buffered and not yet applied.
    pub fn has_pending(&self) -> bool {
        self.requests.has_pending()
    }

    /// Names of all states on the stack (bottom to top).
    pub fn stack_names(&self) -> Vec<&str> {
        self.states.iter().map(|s| s.name()).collect()
    }
}
