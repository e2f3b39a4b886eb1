//! Title Bar Drag Controller
//!
//! Lets the user move an undecorated window by dragging its title bar.
//!
//! A session starts on a primary-button press and ends on release. While
//! it is active every pointer motion moves the window to
//! `origin + (pointer - anchor)`, where `origin` is the window position
//! captured at press time. The anchor is never updated, so the target is
//! always recomputed from the press and the window cannot drift.

use crate::geometry::Point;
use tracing::debug;

/// Mouse button that produced a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    Other(u32),
}

impl PointerButton {
    /// Map a toolkit button number (1 = primary, 2 = middle, 3 = secondary)
    pub fn from_number(button: u32) -> Self {
        match button {
            1 => PointerButton::Primary,
            2 => PointerButton::Middle,
            3 => PointerButton::Secondary,
            other => PointerButton::Other(other),
        }
    }
}

/// Read and move the position of a top-level window
pub trait WindowPosition {
    /// Current top-left position of the window
    fn position(&self) -> Point;

    /// Move the window's top-left corner to `target`
    fn move_to(&self, target: Point);
}

/// State recorded between a press and its release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Pointer position at press time
    pub anchor: Point,
    /// Window position at press time
    pub origin: Point,
}

#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a button press. Only the primary button opens a session.
    pub fn press(&mut self, button: PointerButton, pointer: Point, window: &impl WindowPosition) {
        if button != PointerButton::Primary {
            return;
        }

        let session = DragSession {
            anchor: pointer,
            origin: window.position(),
        };
        debug!("Drag session started at {:?}", session.anchor);
        self.session = Some(session);
    }

    /// Handle pointer motion, moving the window if a session is active.
    ///
    /// Returns the position the window was moved to, or `None` when no
    /// session is active.
    pub fn motion(&mut self, pointer: Point, window: &impl WindowPosition) -> Option<Point> {
        let session = self.session?;
        let target = session.origin + (pointer - session.anchor);
        window.move_to(target);
        Some(target)
    }

    /// Handle a button release (or a cancelled gesture)
    pub fn release(&mut self) {
        if self.session.take().is_some() {
            debug!("Drag session ended");
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.session.map(|s| s.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeWindow {
        pos: Cell<Point>,
        moves: Cell<usize>,
    }

    impl FakeWindow {
        fn at(x: i32, y: i32) -> Self {
            Self {
                pos: Cell::new(Point::new(x, y)),
                moves: Cell::new(0),
            }
        }
    }

    impl WindowPosition for FakeWindow {
        fn position(&self) -> Point {
            self.pos.get()
        }

        fn move_to(&self, target: Point) {
            self.pos.set(target);
            self.moves.set(self.moves.get() + 1);
        }
    }

    #[test]
    fn test_move_by_exact_delta() {
        let window = FakeWindow::at(500, 300);
        let mut drag = DragController::new();

        drag.press(PointerButton::Primary, Point::new(100, 100), &window);
        let target = drag.motion(Point::new(130, 115), &window);

        assert_eq!(target, Some(Point::new(530, 315)));
        assert_eq!(window.position(), Point::new(530, 315));
    }

    #[test]
    fn test_motion_without_press_is_ignored() {
        let window = FakeWindow::at(10, 20);
        let mut drag = DragController::new();

        assert_eq!(drag.motion(Point::new(50, 50), &window), None);
        assert_eq!(window.position(), Point::new(10, 20));
        assert_eq!(window.moves.get(), 0);
    }

    #[test]
    fn test_motion_after_release_is_ignored() {
        let window = FakeWindow::at(0, 0);
        let mut drag = DragController::new();

        drag.press(PointerButton::Primary, Point::new(5, 5), &window);
        drag.motion(Point::new(15, 5), &window);
        drag.release();
        assert!(!drag.is_dragging());

        assert_eq!(drag.motion(Point::new(100, 100), &window), None);
        assert_eq!(window.position(), Point::new(10, 0));
        assert_eq!(window.moves.get(), 1);
    }

    #[test]
    fn test_session_active_only_between_press_and_release() {
        let window = FakeWindow::at(0, 0);
        let mut drag = DragController::new();
        assert!(!drag.is_dragging());

        drag.press(PointerButton::Primary, Point::new(1, 2), &window);
        assert!(drag.is_dragging());
        assert_eq!(drag.anchor(), Some(Point::new(1, 2)));

        drag.release();
        assert!(!drag.is_dragging());
        assert_eq!(drag.anchor(), None);
    }

    #[test]
    fn test_non_primary_press_does_not_start_session() {
        let window = FakeWindow::at(0, 0);
        let mut drag = DragController::new();

        drag.press(PointerButton::Secondary, Point::new(1, 1), &window);
        drag.press(PointerButton::Other(8), Point::new(1, 1), &window);
        assert!(!drag.is_dragging());
        assert_eq!(drag.motion(Point::new(40, 40), &window), None);
    }

    #[test]
    fn test_anchor_is_fixed_across_moves() {
        let window = FakeWindow::at(200, 200);
        let mut drag = DragController::new();

        drag.press(PointerButton::Primary, Point::new(100, 100), &window);
        drag.motion(Point::new(110, 100), &window);
        drag.motion(Point::new(120, 105), &window);
        drag.motion(Point::new(90, 95), &window);

        // Each target is relative to the press, not to the previous move
        assert_eq!(window.position(), Point::new(190, 195));
        assert_eq!(drag.anchor(), Some(Point::new(100, 100)));
    }

    #[test]
    fn test_new_press_rebases_on_current_position() {
        let window = FakeWindow::at(0, 0);
        let mut drag = DragController::new();

        drag.press(PointerButton::Primary, Point::new(10, 10), &window);
        drag.motion(Point::new(30, 10), &window);
        drag.release();

        drag.press(PointerButton::Primary, Point::new(10, 10), &window);
        drag.motion(Point::new(10, 40), &window);

        assert_eq!(window.position(), Point::new(20, 30));
    }

    #[test]
    fn test_release_without_session_is_noop() {
        let mut drag = DragController::new();
        drag.release();
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_button_numbers() {
        assert_eq!(PointerButton::from_number(1), PointerButton::Primary);
        assert_eq!(PointerButton::from_number(2), PointerButton::Middle);
        assert_eq!(PointerButton::from_number(3), PointerButton::Secondary);
        assert_eq!(PointerButton::from_number(9), PointerButton::Other(9));
    }
}
