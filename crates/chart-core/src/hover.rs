// File: crates/chart-core/src/hover.rs
// Summary: Hover state machine driven by pointer events over per-point hit regions.

use crate::types::Point;

/// Pointer event in chart-local coordinates, tagged with the hit region it concerns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Enter { index: usize, at: Point },
    Move { index: usize, at: Point },
    Leave { index: usize },
}

/// Which point is under the pointer, and where the pointer is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering { index: usize, pointer: Point },
}

impl HoverState {
    /// Pure transition: `state + event -> state`.
    pub fn apply(self, event: PointerEvent) -> HoverState {
        match event {
            PointerEvent::Enter { index, at } | PointerEvent::Move { index, at } => {
                HoverState::Hovering { index, pointer: at }
            }
            PointerEvent::Leave { .. } => HoverState::Idle,
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        match *self {
            HoverState::Idle => None,
            HoverState::Hovering { index, .. } => Some(index),
        }
    }

    pub fn pointer(&self) -> Option<Point> {
        match *self {
            HoverState::Idle => None,
            HoverState::Hovering { pointer, .. } => Some(pointer),
        }
    }

    pub fn is_hovering(&self, index: usize) -> bool {
        self.active_index() == Some(index)
    }
}

/// Exclusively owned hover state for one chart instance. Knows nothing about
/// datasets: hosts call [`HoverController::reset`] when they swap data.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverController {
    state: HoverState,
}

impl HoverController {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> HoverState { self.state }

    /// Apply an event; returns true when dependent visuals need a re-render.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        let next = self.state.apply(event);
        let changed = next != self.state;
        self.state = next;
        changed
    }

    pub fn reset(&mut self) {
        self.state = HoverState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_move_leave() {
        let mut c = HoverController::new();
        assert!(c.handle(PointerEvent::Enter { index: 2, at: Point::new(10.0, 20.0) }));
        assert_eq!(c.state().active_index(), Some(2));
        assert!(c.handle(PointerEvent::Move { index: 2, at: Point::new(11.0, 20.0) }));
        assert_eq!(c.state().pointer(), Some(Point::new(11.0, 20.0)));
        assert!(c.handle(PointerEvent::Leave { index: 2 }));
        assert_eq!(c.state(), HoverState::Idle);
        assert!(!c.handle(PointerEvent::Leave { index: 2 }));
    }

    #[test]
    fn move_into_other_region_switches_index() {
        let s = HoverState::Hovering { index: 0, pointer: Point::default() }
            .apply(PointerEvent::Move { index: 3, at: Point::new(1.0, 1.0) });
        assert_eq!(s.active_index(), Some(3));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut c = HoverController::new();
        c.handle(PointerEvent::Enter { index: 1, at: Point::default() });
        c.reset();
        assert_eq!(c.state(), HoverState::Idle);
    }
}
