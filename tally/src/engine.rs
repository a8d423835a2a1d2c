//! Calculator engine
//!
//! Owns the operands as display text and applies one action at a time.
//! Operations chain left to right with no precedence: `2 + 3 × 4 =` is 20.
//! Nothing here returns an error; failures either leave the state alone or
//! put the [`ERROR`] sentinel on the display.

use crate::action::{Action, Operation};
use crate::format::{format_number, DisplaySettings, ERROR};

/// Read-only projection of the engine state for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub current: String,
    /// Pending left operand and operator symbol, e.g. `"12 ×"`.
    pub previous: String,
    pub has_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CalculatorState {
    current_operand: String,
    /// Empty when no left operand is pending.
    previous_operand: String,
    pending_operation: Option<Operation>,
    /// The next digit replaces `current_operand` instead of appending.
    reset_on_next_digit: bool,
    /// An operator was chosen and the right operand has not been touched yet.
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_operand: "0".to_string(),
            previous_operand: String::new(),
            pending_operation: None,
            reset_on_next_digit: false,
            awaiting_operand: false,
        }
    }
}

pub struct Calculator {
    state: CalculatorState,
    settings: DisplaySettings,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

impl Calculator {
    pub fn new(settings: DisplaySettings) -> Self {
        tracing::info!(
            max_digits = settings.max_digits,
            decimal_places = settings.decimal_places,
            "calculator engine initialized"
        );
        Self {
            state: CalculatorState::default(),
            settings,
        }
    }

    /// Route a structured action to the matching operation.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Digit(token) => self.input_digit(token),
            Action::Operator(op) => self.choose_operation(op),
            Action::Calculate => self.calculate(),
            Action::Clear => self.reset(),
            Action::Delete => self.delete_last_digit(),
            Action::Percent => self.percentage(),
        }
    }

    pub fn reset(&mut self) {
        self.state = CalculatorState::default();
        tracing::debug!("calculator reset");
    }

    /// Enter `0`-`9` or `.`. Other characters are ignored.
    pub fn input_digit(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            tracing::warn!(?token, "ignoring non-digit input");
            return;
        }

        let state = &mut self.state;
        // Exponential text is a result, never something to type into.
        let fresh = state.current_operand == "0"
            || state.current_operand == ERROR
            || state.current_operand.contains('e');
        if fresh || state.reset_on_next_digit {
            state.current_operand = if token == '.' {
                "0.".to_string()
            } else {
                token.to_string()
            };
            state.reset_on_next_digit = false;
        } else if token == '.' && state.current_operand.contains('.') {
            tracing::debug!("decimal point already present, ignoring input");
            return;
        } else {
            let digits = state
                .current_operand
                .chars()
                .filter(char::is_ascii_digit)
                .count();
            if digits >= self.settings.max_digits {
                tracing::warn!(max_digits = self.settings.max_digits, "maximum digits reached");
                return;
            }
            state.current_operand.push(token);
        }
        state.awaiting_operand = false;

        tracing::debug!(%token, current = %state.current_operand, "digit input");
    }

    /// Select the operator for the next calculation.
    ///
    /// A pending calculation is collapsed first so chains evaluate left to
    /// right. Pressing another operator before typing an operand only swaps
    /// the pending operator.
    pub fn choose_operation(&mut self, op: Operation) {
        if self.state.current_operand.is_empty() || self.state.current_operand == ERROR {
            return;
        }

        if !self.state.previous_operand.is_empty() {
            if self.state.awaiting_operand {
                self.state.pending_operation = Some(op);
                tracing::debug!(?op, "operation replaced");
                return;
            }
            self.calculate();
            if self.state.current_operand == ERROR {
                return;
            }
        }

        let state = &mut self.state;
        state.pending_operation = Some(op);
        state.previous_operand = state.current_operand.clone();
        state.reset_on_next_digit = true;
        state.awaiting_operand = true;

        tracing::debug!(?op, "operation chosen");
    }

    /// Apply the pending operation to `previous op current`.
    pub fn calculate(&mut self) {
        let (prev, current) = match (
            parse_operand(&self.state.previous_operand),
            parse_operand(&self.state.current_operand),
        ) {
            (Some(prev), Some(current)) => (prev, current),
            _ => {
                tracing::debug!("nothing to calculate");
                return;
            }
        };

        let Some(op) = self.state.pending_operation else {
            tracing::warn!("calculate called without a pending operation");
            return;
        };

        let Some(result) = op.apply(prev, current) else {
            self.handle_error("division by zero");
            return;
        };

        let state = &mut self.state;
        state.current_operand = format_number(result, &self.settings);
        state.pending_operation = None;
        state.previous_operand.clear();
        state.reset_on_next_digit = true;

        tracing::info!(
            "calculation: {} {} {} = {}",
            prev,
            op.symbol(),
            current,
            state.current_operand
        );
    }

    pub fn delete_last_digit(&mut self) {
        self.state.awaiting_operand = false;
        let current = &mut self.state.current_operand;
        if *current == ERROR || current.chars().count() <= 1 {
            *current = "0".to_string();
        } else {
            current.pop();
            // A sign or exponent fragment is not a number on its own.
            if current.parse::<f64>().is_err() {
                *current = "0".to_string();
            }
        }
        tracing::debug!(current = %current, "delete");
    }

    /// Divide the current operand by 100.
    pub fn percentage(&mut self) {
        let Some(value) = parse_operand(&self.state.current_operand) else {
            return;
        };
        let result = value / 100.0;
        self.state.current_operand = format_number(result, &self.settings);
        self.state.awaiting_operand = false;
        tracing::debug!("percentage: {}% = {}", value, result);
    }

    pub fn display_state(&self) -> DisplayState {
        let state = &self.state;
        let previous = match state.pending_operation {
            Some(op) if !state.previous_operand.is_empty() => {
                format!("{} {}", state.previous_operand, op.symbol())
            }
            _ => String::new(),
        };
        DisplayState {
            current: state.current_operand.clone(),
            previous,
            has_error: state.current_operand == ERROR,
        }
    }

    fn handle_error(&mut self, message: &str) {
        let state = &mut self.state;
        state.current_operand = ERROR.to_string();
        state.previous_operand.clear();
        state.pending_operation = None;
        tracing::error!("calculator error: {}", message);
    }
}

fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}
