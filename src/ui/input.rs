use crate::counter::{CounterError, CounterHandlers};
use crate::error::StoreError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Key is not bound.
    None,
    Increment,
    Decrement,
    Reset,
    /// The "Hello World" button.
    Press,
    Quit,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => InputAction::Quit,
            _ => InputAction::None,
        };
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => InputAction::Increment,
        KeyCode::Char('-') | KeyCode::Down => InputAction::Decrement,
        KeyCode::Char('r') | KeyCode::Char('R') => InputAction::Reset,
        KeyCode::Enter | KeyCode::Char(' ') => InputAction::Press,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::None,
    }
}

/// Call the handler bound to `action`.
///
/// `Quit` and `None` dispatch nothing.
pub fn apply(
    action: InputAction,
    handlers: &CounterHandlers,
) -> Result<(), StoreError<CounterError>> {
    match action {
        InputAction::Increment => handlers.increment(),
        InputAction::Decrement => handlers.decrement(),
        InputAction::Reset => handlers.reset(),
        InputAction::Press => handlers.simple_action(),
        InputAction::Quit | InputAction::None => Ok(()),
    }
}
