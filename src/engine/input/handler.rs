use std::collections::HashSet;
use winit::keyboard::KeyCode;
use winit::window::{CursorGrabMode, Fullscreen, Window};
use log::debug;

/// Four-way directional state for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl DirectionalInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// Keys bound to each direction. Any bound key being held activates the direction.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub up: Vec<KeyCode>,
    pub down: Vec<KeyCode>,
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use KeyCode::*;
        Self {
            up: vec![KeyW, ArrowUp],
            down: vec![KeyS, ArrowDown],
            left: vec![KeyA, ArrowLeft],
            right: vec![KeyD, ArrowRight],
        }
    }
}

pub struct InputHandler {
    bindings: KeyBindings,
    pressed_keys: HashSet<KeyCode>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_bindings(KeyBindings::default())
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pressed_keys: HashSet::new(),
        }
    }

    pub fn handle_keyboard_input_event(&mut self, keycode: KeyCode, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(keycode);
        } else {
            self.pressed_keys.remove(&keycode);
        }
    }

    pub fn is_pressed(&self, keycode: KeyCode) -> bool {
        self.pressed_keys.contains(&keycode)
    }

    /// Drops every held key, e.g. when the window loses focus and release events stop arriving.
    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    pub fn directional(&self) -> DirectionalInput {
        let any = |keys: &[KeyCode]| keys.iter().any(|k| self.pressed_keys.contains(k));
        DirectionalInput {
            up: any(&self.bindings.up),
            down: any(&self.bindings.down),
            left: any(&self.bindings.left),
            right: any(&self.bindings.right),
        }
    }

    pub fn handle_window_focus(&mut self, focused: bool, window: Option<&Window>, grab_cursor: bool) {
        if !focused {
            self.release_all();
        }
        if !grab_cursor {
            return;
        }
        if let Some(window) = window {
            if focused {
                let grabbed = window
                    .set_cursor_grab(CursorGrabMode::Locked)
                    .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
                if let Err(e) = grabbed {
                    debug!("Cursor grab unavailable: {:?}", e);
                }
                window.set_cursor_visible(false);
                debug!("Window focused, cursor grabbed and hidden");
            } else {
                if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
                    debug!("Cursor release failed: {:?}", e);
                }
                window.set_cursor_visible(true);
                debug!("Window unfocused, cursor released and visible");
            }
        }
    }

    pub fn handle_fullscreen_toggle(&self, fullscreen: &mut bool, window: Option<&Window>) {
        if let Some(window) = window {
            if *fullscreen {
                window.set_fullscreen(None);
                debug!("Exited fullscreen mode");
            } else {
                window.set_fullscreen(Some(Fullscreen::Borderless(None)));
                debug!("Entered fullscreen mode");
            }
            *fullscreen = !*fullscreen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_is_idle() {
        let input = InputHandler::new();
        assert!(input.directional().is_idle());
        assert_eq!(input.directional(), DirectionalInput::none());
    }

    #[test]
    fn alternate_bindings_are_merged() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::KeyW, true);
        input.handle_keyboard_input_event(KeyCode::ArrowUp, true);
        assert!(input.directional().up);

        input.handle_keyboard_input_event(KeyCode::KeyW, false);
        assert!(input.directional().up, "arrow key alone still holds up");

        input.handle_keyboard_input_event(KeyCode::ArrowUp, false);
        assert!(!input.directional().up);
    }

    #[test]
    fn each_direction_maps_to_its_keys() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::ArrowLeft, true);
        input.handle_keyboard_input_event(KeyCode::KeyD, true);
        let dir = input.directional();
        assert!(dir.left && dir.right);
        assert!(!dir.up && !dir.down);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::KeyQ, true);
        assert!(input.is_pressed(KeyCode::KeyQ));
        assert!(input.directional().is_idle());
    }

    #[test]
    fn release_all_clears_held_keys() {
        let mut input = InputHandler::new();
        input.handle_keyboard_input_event(KeyCode::KeyS, true);
        input.release_all();
        assert!(input.directional().is_idle());
    }

    #[test]
    fn custom_bindings() {
        let bindings = KeyBindings {
            up: vec![KeyCode::KeyI],
            down: vec![KeyCode::KeyK],
            left: vec![KeyCode::KeyJ],
            right: vec![KeyCode::KeyL],
        };
        let mut input = InputHandler::with_bindings(bindings);
        input.handle_keyboard_input_event(KeyCode::KeyW, true);
        input.handle_keyboard_input_event(KeyCode::KeyK, true);
        let dir = input.directional();
        assert!(!dir.up);
        assert!(dir.down);
    }
}
