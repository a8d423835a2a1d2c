//! Button grid
//!
//! Four columns. The zero key spans two.

use crate::action::{Action, Operation};

pub const COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub action: Action,
    /// Number of grid columns the button covers.
    pub span: usize,
}

const fn button(label: &'static str, action: Action) -> ButtonSpec {
    ButtonSpec {
        label,
        action,
        span: 1,
    }
}

const fn digit(label: &'static str, token: char) -> ButtonSpec {
    button(label, Action::Digit(token))
}

pub const BUTTON_LAYOUT: &[&[ButtonSpec]] = &[
    &[
        button("AC", Action::Clear),
        button("DEL", Action::Delete),
        button("%", Action::Percent),
        button("÷", Action::Operator(Operation::Divide)),
    ],
    &[
        digit("7", '7'),
        digit("8", '8'),
        digit("9", '9'),
        button("×", Action::Operator(Operation::Multiply)),
    ],
    &[
        digit("4", '4'),
        digit("5", '5'),
        digit("6", '6'),
        button("−", Action::Operator(Operation::Subtract)),
    ],
    &[
        digit("1", '1'),
        digit("2", '2'),
        digit("3", '3'),
        button("+", Action::Operator(Operation::Add)),
    ],
    &[
        ButtonSpec {
            label: "0",
            action: Action::Digit('0'),
            span: 2,
        },
        digit(".", '.'),
        button("=", Action::Calculate),
    ],
];

/// Grid cell `(row, column index within the row)` of the button for `action`.
pub fn position_of(action: Action) -> Option<(usize, usize)> {
    BUTTON_LAYOUT.iter().enumerate().find_map(|(row, buttons)| {
        buttons
            .iter()
            .position(|b| b.action == action)
            .map(|col| (row, col))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_fill_grid() {
        for row in BUTTON_LAYOUT {
            let width: usize = row.iter().map(|b| b.span).sum();
            assert_eq!(width, COLUMNS);
        }
    }

    #[test]
    fn test_every_digit_present() {
        for token in "0123456789.".chars() {
            assert!(position_of(Action::Digit(token)).is_some(), "missing {}", token);
        }
    }

    #[test]
    fn test_positions() {
        assert_eq!(position_of(Action::Clear), Some((0, 0)));
        assert_eq!(position_of(Action::Operator(Operation::Divide)), Some((0, 3)));
        assert_eq!(position_of(Action::Digit('0')), Some((4, 0)));
        assert_eq!(position_of(Action::Calculate), Some((4, 2)));
    }
}
