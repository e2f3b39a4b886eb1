//! Window State Mirror
//!
//! Mirrors the compositor-owned display state of the main window into the
//! visibility of the title bar's restore and maximize buttons, and defines
//! the commands the title bar buttons issue.

/// Display state of a top-level window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowDisplayState {
    #[default]
    Normal,
    Minimized,
    Maximized,
    Fullscreen,
}

impl WindowDisplayState {
    /// Collapse compositor state flags into a single display state.
    ///
    /// Minimized wins over fullscreen, which wins over maximized.
    pub fn from_flags(minimized: bool, maximized: bool, fullscreen: bool) -> Self {
        if minimized {
            WindowDisplayState::Minimized
        } else if fullscreen {
            WindowDisplayState::Fullscreen
        } else if maximized {
            WindowDisplayState::Maximized
        } else {
            WindowDisplayState::Normal
        }
    }
}

/// Which of the two mutually exclusive buttons is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonVisibility {
    pub restore: bool,
    pub maximize: bool,
}

impl ButtonVisibility {
    pub fn for_state(state: WindowDisplayState) -> Self {
        let maximized = state == WindowDisplayState::Maximized;
        Self {
            restore: maximized,
            maximize: !maximized,
        }
    }
}

impl Default for ButtonVisibility {
    fn default() -> Self {
        Self::for_state(WindowDisplayState::Normal)
    }
}

#[derive(Debug, Default)]
pub struct WindowStateMirror {
    state: WindowDisplayState,
    visibility: ButtonVisibility,
}

impl WindowStateMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new window state and return the resulting button visibility
    pub fn on_window_state_changed(&mut self, new_state: WindowDisplayState) -> ButtonVisibility {
        self.state = new_state;
        self.visibility = ButtonVisibility::for_state(new_state);
        self.visibility
    }

    pub fn visibility(&self) -> ButtonVisibility {
        self.visibility
    }

    /// Command a title bar double-click should issue
    pub fn toggle_command(&self) -> TitleBarCommand {
        if self.state == WindowDisplayState::Maximized {
            TitleBarCommand::Restore
        } else {
            TitleBarCommand::Maximize
        }
    }
}

/// Window-manager requests a title bar can make
pub trait WindowControls {
    fn minimize(&self);
    fn maximize(&self);
    fn restore(&self);
    fn close(&self);
}

/// The four title bar buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBarCommand {
    Minimize,
    Restore,
    Maximize,
    Close,
}

impl TitleBarCommand {
    pub const ALL: [TitleBarCommand; 4] = [
        TitleBarCommand::Minimize,
        TitleBarCommand::Restore,
        TitleBarCommand::Maximize,
        TitleBarCommand::Close,
    ];

    pub fn apply(self, window: &impl WindowControls) {
        match self {
            TitleBarCommand::Minimize => window.minimize(),
            TitleBarCommand::Restore => window.restore(),
            TitleBarCommand::Maximize => window.maximize(),
            TitleBarCommand::Close => window.close(),
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            TitleBarCommand::Minimize => "Minimize",
            TitleBarCommand::Restore => "Restore",
            TitleBarCommand::Maximize => "Maximize",
            TitleBarCommand::Close => "Close",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingWindow {
        calls: RefCell<Vec<&'static str>>,
    }

    impl WindowControls for RecordingWindow {
        fn minimize(&self) {
            self.calls.borrow_mut().push("minimize");
        }
        fn maximize(&self) {
            self.calls.borrow_mut().push("maximize");
        }
        fn restore(&self) {
            self.calls.borrow_mut().push("restore");
        }
        fn close(&self) {
            self.calls.borrow_mut().push("close");
        }
    }

    fn exactly_one_visible(v: ButtonVisibility) -> bool {
        v.restore != v.maximize
    }

    #[test]
    fn test_initial_visibility_shows_maximize() {
        let mirror = WindowStateMirror::new();
        assert_eq!(
            mirror.visibility(),
            ButtonVisibility { restore: false, maximize: true }
        );
    }

    #[test]
    fn test_maximized_then_normal() {
        let mut mirror = WindowStateMirror::new();

        let v = mirror.on_window_state_changed(WindowDisplayState::Maximized);
        assert!(v.restore);
        assert!(!v.maximize);

        let v = mirror.on_window_state_changed(WindowDisplayState::Normal);
        assert!(!v.restore);
        assert!(v.maximize);
    }

    #[test]
    fn test_non_maximized_states_show_maximize() {
        let mut mirror = WindowStateMirror::new();
        for state in [
            WindowDisplayState::Normal,
            WindowDisplayState::Minimized,
            WindowDisplayState::Fullscreen,
        ] {
            let v = mirror.on_window_state_changed(state);
            assert!(v.maximize, "{:?} should show maximize", state);
            assert!(!v.restore);
        }
    }

    #[test]
    fn test_idempotent() {
        let mut mirror = WindowStateMirror::new();
        let once = mirror.on_window_state_changed(WindowDisplayState::Maximized);
        let twice = mirror.on_window_state_changed(WindowDisplayState::Maximized);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_exactly_one_visible_for_every_sequence() {
        let states = [
            WindowDisplayState::Normal,
            WindowDisplayState::Minimized,
            WindowDisplayState::Maximized,
            WindowDisplayState::Fullscreen,
        ];
        let mut mirror = WindowStateMirror::new();
        for a in states {
            for b in states {
                assert!(exactly_one_visible(mirror.on_window_state_changed(a)));
                assert!(exactly_one_visible(mirror.on_window_state_changed(b)));
            }
        }
    }

    #[test]
    fn test_from_flags_priority() {
        use WindowDisplayState::*;
        assert_eq!(WindowDisplayState::from_flags(false, false, false), Normal);
        assert_eq!(WindowDisplayState::from_flags(false, true, false), Maximized);
        assert_eq!(WindowDisplayState::from_flags(false, true, true), Fullscreen);
        assert_eq!(WindowDisplayState::from_flags(true, true, false), Minimized);
    }

    #[test]
    fn test_toggle_command() {
        let mut mirror = WindowStateMirror::new();
        assert_eq!(mirror.toggle_command(), TitleBarCommand::Maximize);
        mirror.on_window_state_changed(WindowDisplayState::Maximized);
        assert_eq!(mirror.toggle_command(), TitleBarCommand::Restore);
    }

    #[test]
    fn test_commands_dispatch_to_window() {
        let window = RecordingWindow::default();
        for command in TitleBarCommand::ALL {
            command.apply(&window);
        }
        assert_eq!(
            *window.calls.borrow(),
            vec!["minimize", "restore", "maximize", "close"]
        );
    }
}
