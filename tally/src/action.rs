//! Structured calculator actions
//!
//! Buttons and keys are translated into an [`Action`] before they reach the
//! engine, so the engine never sees free-form strings.

/// Binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Symbol shown next to the pending left operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "−",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// `lhs op rhs`; `None` on division by zero.
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operation::Add => Some(lhs + rhs),
            Operation::Subtract => Some(lhs - rhs),
            Operation::Multiply => Some(lhs * rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    None
                } else {
                    Some(lhs / rhs)
                }
            }
        }
    }
}

/// Button family, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Number,
    Operator,
    Special,
    Equals,
}

/// Everything a click or key press can ask the calculator to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operation),
    Calculate,
    Clear,
    Delete,
    Percent,
}

impl Action {
    pub fn kind(self) -> ButtonKind {
        match self {
            Action::Digit(_) => ButtonKind::Number,
            Action::Operator(_) => ButtonKind::Operator,
            Action::Calculate => ButtonKind::Equals,
            Action::Clear | Action::Delete | Action::Percent => ButtonKind::Special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Some(5.0));
        assert_eq!(Operation::Subtract.apply(2.0, 3.0), Some(-1.0));
        assert_eq!(Operation::Multiply.apply(2.0, 3.0), Some(6.0));
        assert_eq!(Operation::Divide.apply(3.0, 2.0), Some(1.5));
        assert_eq!(Operation::Divide.apply(3.0, 0.0), None);
        assert_eq!(Operation::Divide.apply(3.0, -0.0), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "\u{2212}");
        assert_eq!(Operation::Multiply.symbol(), "\u{d7}");
        assert_eq!(Operation::Divide.symbol(), "\u{f7}");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Action::Digit('.').kind(), ButtonKind::Number);
        assert_eq!(Action::Operator(Operation::Divide).kind(), ButtonKind::Operator);
        assert_eq!(Action::Calculate.kind(), ButtonKind::Equals);
        assert_eq!(Action::Percent.kind(), ButtonKind::Special);
    }
}
