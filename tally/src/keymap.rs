//! Keyboard bindings
//!
//! Keys are named the way the shell reports them: the typed character for
//! printable keys, the key name (`Enter`, `Backspace`, ...) otherwise.

use crate::action::{Action, Operation};

pub const KEYBOARD_MAPPINGS: &[(&str, Action)] = &[
    ("0", Action::Digit('0')),
    ("1", Action::Digit('1')),
    ("2", Action::Digit('2')),
    ("3", Action::Digit('3')),
    ("4", Action::Digit('4')),
    ("5", Action::Digit('5')),
    ("6", Action::Digit('6')),
    ("7", Action::Digit('7')),
    ("8", Action::Digit('8')),
    ("9", Action::Digit('9')),
    (".", Action::Digit('.')),
    ("+", Action::Operator(Operation::Add)),
    ("-", Action::Operator(Operation::Subtract)),
    ("*", Action::Operator(Operation::Multiply)),
    ("/", Action::Operator(Operation::Divide)),
    ("%", Action::Percent),
    ("Enter", Action::Calculate),
    ("=", Action::Calculate),
    ("Backspace", Action::Delete),
    ("Delete", Action::Clear),
    ("Escape", Action::Clear),
];

pub fn action_for_key(key: &str) -> Option<Action> {
    KEYBOARD_MAPPINGS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, action)| *action)
}
