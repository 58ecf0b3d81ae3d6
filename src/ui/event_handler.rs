use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events that can occur in the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Move table selection down
    SelectNext,
    /// Move table selection up
    SelectPrev,
    /// Open the filter prompt
    StartFilter,
    /// Append a character to the filter
    FilterInput(char),
    /// Remove the last filter character
    FilterBackspace,
    /// Close the prompt, keeping the query
    ConfirmFilter,
    /// Close the prompt and drop the query
    ClearFilter,
    /// No action
    None,
}

/// Translate a key press. While the filter prompt is open, printable keys
/// go to the query instead of being treated as shortcuts.
pub fn map_key(key: KeyEvent, filtering: bool) -> DashboardEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return DashboardEvent::Quit;
    }

    if filtering {
        return match key.code {
            KeyCode::Esc => DashboardEvent::ClearFilter,
            KeyCode::Enter => DashboardEvent::ConfirmFilter,
            KeyCode::Backspace => DashboardEvent::FilterBackspace,
            KeyCode::Up => DashboardEvent::SelectPrev,
            KeyCode::Down => DashboardEvent::SelectNext,
            KeyCode::Char(c) => DashboardEvent::FilterInput(c),
            _ => DashboardEvent::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => DashboardEvent::Quit,
        KeyCode::Char('?') | KeyCode::Char('h') => DashboardEvent::ToggleHelp,
        KeyCode::Up | KeyCode::Char('k') => DashboardEvent::SelectPrev,
        KeyCode::Down | KeyCode::Char('j') => DashboardEvent::SelectNext,
        KeyCode::Char('/') => DashboardEvent::StartFilter,
        _ => DashboardEvent::None,
    }
}
