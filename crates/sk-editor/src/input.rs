//! Mouse and modifier state for camera orbiting

use bitflags::bitflags;
use glam::Vec2;

bitflags! {
    /// Keyboard modifiers held during an input event
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
        /// Command on macOS
        const SUPER = 1 << 3;
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Tracks which buttons and modifiers gate camera orbiting
///
/// Orbiting is active while Ctrl/Super or the middle button is held. The
/// first move after orbiting starts only records the cursor so the camera
/// does not jump.
#[derive(Debug, Clone)]
pub struct InputCoordinator {
    modifiers: Modifiers,
    middle_down: bool,
    left_down: bool,
    first_orbit_move: bool,
    last_mouse: Vec2,
}

impl Default for InputCoordinator {
    fn default() -> Self {
        Self {
            modifiers: Modifiers::empty(),
            middle_down: false,
            left_down: false,
            first_orbit_move: true,
            last_mouse: Vec2::ZERO,
        }
    }
}

impl InputCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Whether mouse motion should orbit the camera
    pub fn is_orbiting(&self) -> bool {
        self.middle_down || self.modifiers.intersects(Modifiers::CTRL | Modifiers::SUPER)
    }

    pub fn is_left_down(&self) -> bool {
        self.left_down
    }

    /// Last cursor position seen
    pub fn last_mouse(&self) -> Vec2 {
        self.last_mouse
    }

    /// Record a button transition along with the modifiers held
    pub fn on_mouse_button(&mut self, button: MouseButton, down: bool, modifiers: Modifiers) {
        self.modifiers = modifiers;
        match button {
            MouseButton::Middle => {
                self.middle_down = down;
                if down {
                    self.first_orbit_move = true;
                }
            }
            MouseButton::Left => self.left_down = down,
            MouseButton::Right => {}
        }
    }

    /// Cursor motion since the previous orbit move, or `None` when not
    /// orbiting or when this is the first move of an orbit
    pub fn orbit_delta(&mut self, mouse: Vec2) -> Option<Vec2> {
        let previous = std::mem::replace(&mut self.last_mouse, mouse);
        if !self.is_orbiting() {
            self.first_orbit_move = true;
            return None;
        }
        if self.first_orbit_move {
            self.first_orbit_move = false;
            return None;
        }
        Some(mouse - previous)
    }

    /// Record the cursor without orbiting
    pub fn track(&mut self, mouse: Vec2) {
        self.last_mouse = mouse;
    }

    /// Forget held buttons and modifiers
    pub fn reset(&mut self) {
        *self = Self {
            last_mouse: self.last_mouse,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_bits() {
        assert_eq!(Modifiers::CTRL.bits(), 2);
        assert_eq!(Modifiers::SUPER.bits(), 8);
        assert_eq!(Modifiers::from_bits_truncate(0b1111_0010), Modifiers::CTRL);
    }

    #[test]
    fn test_ctrl_gates_orbit() {
        let mut input = InputCoordinator::new();
        assert_eq!(input.orbit_delta(Vec2::new(10.0, 10.0)), None);

        input.set_modifiers(Modifiers::CTRL);
        // First move only latches the cursor
        assert_eq!(input.orbit_delta(Vec2::new(100.0, 100.0)), None);
        assert_eq!(input.orbit_delta(Vec2::new(105.0, 98.0)), Some(Vec2::new(5.0, -2.0)));

        input.set_modifiers(Modifiers::empty());
        assert_eq!(input.orbit_delta(Vec2::new(200.0, 200.0)), None);

        input.set_modifiers(Modifiers::SUPER);
        assert_eq!(input.orbit_delta(Vec2::new(300.0, 300.0)), None);
        assert!(input.orbit_delta(Vec2::new(301.0, 300.0)).is_some());
    }

    #[test]
    fn test_middle_button_orbits() {
        let mut input = InputCoordinator::new();
        input.on_mouse_button(MouseButton::Middle, true, Modifiers::empty());
        assert!(input.is_orbiting());
        assert_eq!(input.orbit_delta(Vec2::new(50.0, 50.0)), None);
        assert_eq!(input.orbit_delta(Vec2::new(60.0, 50.0)), Some(Vec2::new(10.0, 0.0)));

        input.on_mouse_button(MouseButton::Middle, false, Modifiers::empty());
        assert!(!input.is_orbiting());
    }

    #[test]
    fn test_shift_alone_does_not_orbit() {
        let mut input = InputCoordinator::new();
        input.set_modifiers(Modifiers::SHIFT | Modifiers::ALT);
        assert!(!input.is_orbiting());
    }

    #[test]
    fn test_reset_clears_state() {
        let mut input = InputCoordinator::new();
        input.on_mouse_button(MouseButton::Middle, true, Modifiers::CTRL);
        input.on_mouse_button(MouseButton::Left, true, Modifiers::CTRL);
        input.track(Vec2::new(7.0, 8.0));
        input.reset();
        assert!(!input.is_orbiting());
        assert!(!input.is_left_down());
        assert_eq!(input.last_mouse(), Vec2::new(7.0, 8.0));
    }
}
