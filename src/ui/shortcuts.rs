//! Global keyboard shortcuts.
//! `COMMAND` is ⌘ on macOS and Ctrl elsewhere.

use egui::{Event, InputState, Key, KeyboardShortcut, ModifierNames, Modifiers};

const COMMAND_SHIFT: Modifiers = Modifiers {
    shift: true,
    ..Modifiers::COMMAND
};

pub const COMMAND_PALETTE: KeyboardShortcut = KeyboardShortcut::new(COMMAND_SHIFT, Key::P);
pub const QUIT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Q);
pub const NEW: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::N);
pub const OPEN: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::O);
pub const SAVE: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::S);

/// Human readable shortcut for menus and the command palette, e.g. "Ctrl+Shift+P"
pub fn label(shortcut: &KeyboardShortcut) -> String {
    shortcut.format(&ModifierNames::NAMES, cfg!(target_os = "macos"))
}

/// Consume `shortcut` and report whether it was freshly pressed this frame.
///
/// Key-repeat events are swallowed without counting, so holding the keys down
/// triggers once.
pub fn consume_press(input: &mut InputState, shortcut: &KeyboardShortcut) -> bool {
    let pressed = input.events.iter().any(|event| {
        matches!(
            event,
            Event::Key { key, pressed: true, repeat: false, modifiers, .. }
                if *key == shortcut.logical_key && modifiers.matches_logically(shortcut.modifiers)
        )
    });
    input.consume_shortcut(shortcut);
    pressed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(shortcut: &KeyboardShortcut, repeat: bool) -> Event {
        Event::Key {
            key: shortcut.logical_key,
            physical_key: None,
            pressed: true,
            repeat,
            modifiers: shortcut.modifiers,
        }
    }

    fn press_in_frame(events: Vec<Event>) -> (bool, bool) {
        let ctx = egui::Context::default();
        let mut result = (false, false);
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            result = ctx.input_mut(|i| {
                let pressed = consume_press(i, &COMMAND_PALETTE);
                let left_over = i.events.iter().any(|e| matches!(e, Event::Key { .. }));
                (pressed, left_over)
            });
        });
        result
    }

    #[test]
    fn test_consume_press_ignores_repeats() {
        assert_eq!(press_in_frame(vec![key_event(&COMMAND_PALETTE, false)]), (true, false));
        assert_eq!(press_in_frame(vec![key_event(&COMMAND_PALETTE, true)]), (false, false));
        assert_eq!(press_in_frame(vec![key_event(&QUIT, false)]), (false, true));
    }

    #[test]
    fn test_labels_name_the_key() {
        assert!(label(&QUIT).ends_with('Q'));
        let palette = label(&COMMAND_PALETTE);
        assert!(palette.contains("Shift"));
        assert!(palette.ends_with('P'));
    }
}
