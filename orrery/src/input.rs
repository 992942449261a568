//! Keyboard bindings
//!
//! Toggles, rate changes and reference switching fire once per key press.
//! Zoom and quit act every frame for as long as their key is held.

use winit::keyboard::KeyCode;

use crate::controls::Command;

/// Command bound to a single press of `key`
pub fn command_for_press(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::KeyT => Some(Command::ToggleLabels),
        KeyCode::KeyL => Some(Command::ToggleTrails),
        KeyCode::ArrowLeft => Some(Command::SlowDown),
        KeyCode::ArrowRight => Some(Command::SpeedUp),
        KeyCode::KeyA => Some(Command::PreviousReference),
        KeyCode::KeyD => Some(Command::NextReference),
        _ => None,
    }
}

/// Keys whose effect repeats every frame while held
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeldKeys {
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub quit: bool,
}

impl HeldKeys {
    /// Track a key transition; returns whether the key is a held binding
    pub fn set(&mut self, key: KeyCode, pressed: bool) -> bool {
        match key {
            KeyCode::ArrowUp => self.zoom_in = pressed,
            KeyCode::ArrowDown => self.zoom_out = pressed,
            KeyCode::Escape => self.quit = pressed,
            _ => return false,
        }
        true
    }

    /// Commands to apply this frame, quit first
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();
        if self.quit {
            commands.push(Command::Quit);
        }
        if self.zoom_in {
            commands.push(Command::ZoomIn);
        }
        if self.zoom_out {
            commands.push(Command::ZoomOut);
        }
        commands
    }
}
