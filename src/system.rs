// Platform facade wiring winit events into the map and history tracker

use crate::history::InputHistoryTracker;
use crate::map::InputMap;
use log::debug;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Which input events should have their platform default suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreventDefault {
    /// Suppress every key/button event.
    All,
    /// Suppress only events whose raw input is bound to an action.
    #[default]
    Action,
    /// Never suppress.
    None,
}

/// Owns one `InputMap` and one `InputHistoryTracker` and feeds platform
/// events through them: raw event -> mapping lookup -> history updates.
///
/// Control flow is one-directional and synchronous; the facade is the
/// sole owner and mutator of both components.
#[derive(Debug, Default)]
pub struct InputSystem {
    map: InputMap,
    tracker: InputHistoryTracker,
    prevent_default: PreventDefault,
}

impl InputSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(prevent_default: PreventDefault) -> Self {
        Self {
            prevent_default,
            ..Self::default()
        }
    }

    pub fn map(&self) -> &InputMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut InputMap {
        &mut self.map
    }

    pub fn tracker(&self) -> &InputHistoryTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut InputHistoryTracker {
        &mut self.tracker
    }

    pub fn prevent_default(&self) -> PreventDefault {
        self.prevent_default
    }

    pub fn set_prevent_default(&mut self, policy: PreventDefault) {
        self.prevent_default = policy;
    }

    /// Processes a winit keyboard event. Returns true if the platform
    /// default for this event should be suppressed.
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) -> bool {
        let PhysicalKey::Code(code) = event.physical_key else {
            return false;
        };
        self.process_key(code, event.state, event.repeat)
    }

    /// Processes a single key transition. OS key repeats change no state.
    pub fn process_key(&mut self, code: KeyCode, state: ElementState, repeat: bool) -> bool {
        let code = key_code_name(code);
        let suppress = match self.prevent_default {
            PreventDefault::All => true,
            PreventDefault::None => false,
            PreventDefault::Action => self.map.key_has_action(&code),
        };
        if repeat {
            return suppress;
        }

        let pressed = state == ElementState::Pressed;
        debug!("key {code} {}", if pressed { "pressed" } else { "released" });
        self.tracker.history_for_key(&code).update(pressed);
        for action in self.map.actions_for_codes(std::slice::from_ref(&code), &[]) {
            self.tracker
                .history_for_action(&action)
                .update(&code, pressed);
        }
        suppress
    }

    /// Processes a mouse button transition. Buttons outside the tracked
    /// range (codes 0-14) are ignored.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) -> bool {
        let Some(code) = button_code(button) else {
            return false;
        };
        let suppress = match self.prevent_default {
            PreventDefault::All => true,
            PreventDefault::None => false,
            PreventDefault::Action => self.map.button_has_action(code),
        };

        let pressed = state == ElementState::Pressed;
        debug!(
            "mouse button {code} {}",
            if pressed { "pressed" } else { "released" }
        );
        self.tracker.history_for_button(code).update(pressed);
        // Contributing-input identifier for the action aggregate; key codes
        // never collide with the buttonN scheme.
        let input_id = format!("button{}", code + 1);
        for action in self.map.actions_for_codes(&[], &[code]) {
            self.tracker
                .history_for_action(&action)
                .update(&input_id, pressed);
        }
        suppress
    }
}

/// winit names its `KeyCode` variants after the W3C UI Events code values,
/// which is exactly the identifier scheme the key table uses.
fn key_code_name(code: KeyCode) -> String {
    format!("{code:?}")
}

/// DOM button code for a winit mouse button.
fn button_code(button: MouseButton) -> Option<u8> {
    match button {
        MouseButton::Left => Some(0),
        MouseButton::Middle => Some(1),
        MouseButton::Right => Some(2),
        MouseButton::Back => Some(3),
        MouseButton::Forward => Some(4),
        MouseButton::Other(n) => u8::try_from(n).ok().filter(|n| *n <= 14),
    }
}
