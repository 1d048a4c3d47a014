/// Keyboard shortcuts for the toolbar commands

use crate::tab_strip::Command;

/// Modifier state of a key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Map a key press anywhere in the page to a command.
///
/// `key` is the DOM `KeyboardEvent.key` value. Enter is not handled here
/// because it only means "go" inside the URL field; see `url_field_command`.
pub fn command_for(key: &str, modifiers: Modifiers) -> Option<Command> {
    let command_key = modifiers.ctrl || modifiers.meta;

    match key {
        "ArrowLeft" if modifiers.alt => Some(Command::Back),
        "ArrowRight" if modifiers.alt => Some(Command::Forward),
        "F5" => Some(Command::Reload),
        "t" | "T" if command_key && !modifiers.alt => Some(Command::NewTab),
        _ => None,
    }
}

/// Map a key press inside the URL field to a command
pub fn url_field_command(key: &str) -> Option<Command> {
    match key {
        "Enter" => Some(Command::Go),
        _ => None,
    }
}
