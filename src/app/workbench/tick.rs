use super::Workbench;
use crate::kernel::Action as KernelAction;
use std::time::Instant;

impl Workbench {
    /// Advances running effects to `now`; returns whether a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let state = self.store.state();
        if state.rain.is_none() && state.snake.is_none() {
            return false;
        }
        self.dispatch_kernel(KernelAction::Tick { now })
    }
}
