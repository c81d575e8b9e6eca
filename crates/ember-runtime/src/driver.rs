//! Loop driver — fixed-timestep scheduling of the state stack

use crate::clock::GameClock;
use crate::stack::StateStack;
use crate::target::RenderTarget;
use ember_core::{EmberError, Result};

/// Drives the state stack with a fixed-timestep loop.
///
/// Each frame, in order:
/// 1. sample the wall clock and accumulate the (clamped) frame time;
/// 2. apply pending stack transitions — once per frame, at the quiescent
///    point between the previous render and the next batch of ticks;
/// 3. drain the accumulator: one `handle_input` plus one `update` per fixed
///    step delivered to the active state;
/// 4. clear the target, render the active state, present.
///
/// An empty stack after step 2 is terminal and surfaces as
/// [`EmberError::EmptyStateStack`]; the host must seed at least one state
/// (a buffered add is enough) before the first frame.
pub struct LoopDriver {
    clock: GameClock,
}

impl Default for LoopDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopDriver {
    /// Create a driver with the default 60Hz fixed timestep
    pub fn new() -> Self {
        Self {
            clock: GameClock::new(),
        }
    }

    /// Create a driver with a custom fixed timestep
    pub fn with_fixed_timestep(hz: f64) -> Self {
        Self {
            clock: GameClock::with_fixed_timestep(hz),
        }
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Execute one frame, sampling the wall clock.
    ///
    /// Callback-driven hosts (winit redraw events) call this once per
    /// redraw; blocking hosts use [`run`](Self::run).
    pub fn frame<C: RenderTarget>(&mut self, ctx: &mut C, stack: &mut StateStack<C>) -> Result<()> {
        self.clock.tick();
        self.step(ctx, stack)
    }

    /// Execute one frame from an explicit elapsed time instead of the wall
    /// clock. Deterministic variant of [`frame`](Self::frame).
    pub fn frame_with<C: RenderTarget>(
        &mut self,
        elapsed: f64,
        ctx: &mut C,
        stack: &mut StateStack<C>,
    ) -> Result<()> {
        self.clock.advance(elapsed);
        self.step(ctx, stack)
    }

    /// Run frames until the target reports closed.
    pub fn run<C: RenderTarget>(&mut self, ctx: &mut C, stack: &mut StateStack<C>) -> Result<()> {
        while ctx.is_open() {
            self.frame(ctx, stack)?;
        }
        Ok(())
    }

    fn step<C: RenderTarget>(&mut self, ctx: &mut C, stack: &mut StateStack<C>) -> Result<()> {
        stack.apply_pending(ctx)?;
        if stack.is_empty() {
            return Err(EmberError::EmptyStateStack);
        }

        while self.clock.should_step() {
            stack.handle_input(ctx)?;
            stack.update(ctx, self.clock.fixed_timestep)?;
            self.clock.consume_step();
        }

        ctx.clear()?;
        stack.render(ctx)?;
        ctx.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::StackRequests;
    use crate::state::State;
    use std::cell::RefCell;
    use std::rc::Rc;

    type EventLog = Rc<RefCell<Vec<String>>>;

    /// Render target that records clear/present calls and closes itself
    /// after a fixed number of presented frames.
    struct TestTarget {
        log: EventLog,
        frames_left: u32,
    }

    impl TestTarget {
        fn new(log: &EventLog, frames: u32) -> Self {
            Self {
                log: log.clone(),
                frames_left: frames,
            }
        }
    }

    impl RenderTarget for TestTarget {
        fn clear(&mut self) -> ember_core::Result<()> {
            self.log.borrow_mut().push("clear".into());
            Ok(())
        }

        fn present(&mut self) -> ember_core::Result<()> {
            self.log.borrow_mut().push("present".into());
            self.frames_left = self.frames_left.saturating_sub(1);
            Ok(())
        }

        fn is_open(&self) -> bool {
            self.frames_left > 0
        }
    }

    struct Probe {
        name: &'static str,
        log: EventLog,
        updates_seen: u32,
        /// Request a removal after this many updates, if set.
        remove_after: Option<u32>,
    }

    impl Probe {
        fn new(name: &'static str, log: &EventLog) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                updates_seen: 0,
                remove_after: None,
            })
        }

        fn removing_after(name: &'static str, log: &EventLog, updates: u32) -> Box<Self> {
            Box::new(Self {
                name,
                log: log.clone(),
                updates_seen: 0,
                remove_after: Some(updates),
            })
        }

        fn record(&self, event: &str) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, event));
        }
    }

    impl State<TestTarget> for Probe {
        fn name(&self) -> &str {
            self.name
        }

        fn init(&mut self, _ctx: &mut TestTarget) -> ember_core::Result<()> {
            self.record("init");
            Ok(())
        }

        fn handle_input(
            &mut self,
            _ctx: &mut TestTarget,
            _requests: &mut StackRequests<TestTarget>,
        ) -> ember_core::Result<()> {
            self.record("input");
            Ok(())
        }

        fn update(
            &mut self,
            _ctx: &mut TestTarget,
            _dt: f64,
            requests: &mut StackRequests<TestTarget>,
        ) -> ember_core::Result<()> {
            self.record("update");
            self.updates_seen += 1;
            if self.remove_after == Some(self.updates_seen) {
                requests.request_remove();
            }
            Ok(())
        }

        fn render(&mut self, _ctx: &mut TestTarget) -> ember_core::Result<()> {
            self.record("render");
            Ok(())
        }
    }

    fn events(log: &EventLog) -> Vec<String> {
        log.borrow().clone()
    }

    #[test]
    fn frame_orders_ticks_before_render() {
        let log = EventLog::default();
        let mut target = TestTarget::new(&log, 10);
        let mut stack = StateStack::new();
        stack.request_add(Probe::new("game", &log), true);

        let mut driver = LoopDriver::new();
        // Exactly two steps of accumulated time.
        driver.frame_with(2.0 / 60.0, &mut target, &mut stack).unwrap();

        assert_eq!(
            events(&log),
            vec![
                "game:init",
                "game:input",
                "game:update",
                "game:input",
                "game:update",
                "clear",
                "game:render",
                "present",
            ]
        );
    }

    #[test]
    fn frame_with_no_accumulated_time_still_renders() {
        let log = EventLog::default();
        let mut target = TestTarget::new(&log, 10);
        let mut stack = StateStack::new();
        stack.request_add(Probe::new("menu", &log), true);

        let mut driver = LoopDriver::new();
        driver.frame_with(0.0, &mut target, &mut stack).unwrap();

        assert_eq!(
            events(&log),
            vec!["menu:init", "clear", "menu:render", "present"]
        );
    }

    #[test]
    fn empty_stack_is_terminal() {
        let log = EventLog::default();
        let mut target = TestTarget::new(&log, 10);
        let mut stack: StateStack<TestTarget> = StateStack::new();

        let mut driver = LoopDriver::new();
        let result = driver.frame_with(0.0, &mut target, &mut stack);
        assert!(matches!(result, Err(EmberError::EmptyStateStack)));
        // No render activity on a dead frame.
        assert!(events(&log).is_empty());
    }

    #[test]
    fn removal_requested_mid_update_takes_effect_next_frame() {
        let log = EventLog::default();
        let mut target = TestTarget::new(&log, 10);
        let mut stack = StateStack::new();
        stack.request_add(Probe::removing_after("game", &log, 1), true);

        let mut driver = LoopDriver::new();
        // The removal is requested during this frame's update but the frame
        // still renders the same state.
        driver.frame_with(1.0 / 60.0, &mut target, &mut stack).unwrap();
        assert_eq!(stack.stack_names(), vec!["game"]);
        assert!(events(&log).contains(&"game:render".to_string()));

        // Next frame applies the removal, leaving the stack empty.
        let result = driver.frame_with(1.0 / 60.0, &mut target, &mut stack);
        assert!(matches!(result, Err(EmberError::EmptyStateStack)));
        assert!(stack.is_empty());
    }

    #[test]
    fn run_terminates_when_target_closes() {
        let log = EventLog::default();
        let mut target = TestTarget::new(&log, 3);
        let mut stack = StateStack::new();
        stack.request_add(Probe::new("game", &log), true);

        let mut driver = LoopDriver::new();
        driver.run(&mut target, &mut stack).unwrap();

        let presents = events(&log).iter().filter(|e| *e == "present").count();
        assert_eq!(presents, 3);
    }

    #[test]
    fn stalled_frame_produces_bounded_ticks() {
        let log = EventLog::default();
        let mut target = TestTarget::new(&log, 10);
        let mut stack = StateStack::new();
        stack.request_add(Probe::new("game", &log), true);

        let mut driver = LoopDriver::new();
        driver.frame_with(5.0, &mut target, &mut stack).unwrap();

        let updates = events(&log).iter().filter(|e| *e == "game:update").count();
        assert_eq!(updates, 15); // 0.25s clamp / (1/60)
    }
}
