//! Input handling for the shell
//!
//! Maps raw crossterm events to [`ShellAction`]s. Every tool shares one
//! key map; what an action means is up to the active tool.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{ShellAction, TextEdit, ToolId};

/// Translate a terminal event into a shell action
pub fn handle_event(event: &Event) -> ShellAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key),
        _ => ShellAction::None,
    }
}

fn handle_key(key: &KeyEvent) -> ShellAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => ShellAction::Quit,
        KeyCode::Char('c') if ctrl => ShellAction::Quit,

        // Tool switching
        KeyCode::Tab => ShellAction::NextTool,
        KeyCode::BackTab => ShellAction::PrevTool,
        KeyCode::F(n @ 1..=3) => ShellAction::SelectTool(ToolId::ALL[usize::from(n) - 1]),

        // Tool commands
        KeyCode::Char('n') if ctrl => ShellAction::AddRow,
        KeyCode::Char('d') if ctrl => ShellAction::RemoveRow,
        KeyCode::Char('y') if ctrl => ShellAction::Copy,
        KeyCode::Char('u') if ctrl => ShellAction::Edit(TextEdit::Clear),

        KeyCode::Up => ShellAction::Up,
        KeyCode::Down => ShellAction::Down,
        KeyCode::Left => ShellAction::Left,
        KeyCode::Right => ShellAction::Right,

        // Text entry
        KeyCode::Backspace => ShellAction::Edit(TextEdit::Backspace),
        KeyCode::Char(c) if !ctrl => ShellAction::Edit(TextEdit::Insert(c)),

        _ => ShellAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_event(&press(KeyCode::Esc)), ShellAction::Quit);
        assert_eq!(handle_event(&ctrl('c')), ShellAction::Quit);
        // a plain 'q' is text, not a quit
        assert_eq!(
            handle_event(&press(KeyCode::Char('q'))),
            ShellAction::Edit(TextEdit::Insert('q'))
        );
    }

    #[test]
    fn test_tool_switching() {
        assert_eq!(handle_event(&press(KeyCode::Tab)), ShellAction::NextTool);
        assert_eq!(handle_event(&press(KeyCode::BackTab)), ShellAction::PrevTool);
        assert_eq!(handle_event(&press(KeyCode::F(2))), ShellAction::SelectTool(ToolId::Contrast));
        assert_eq!(handle_event(&press(KeyCode::F(3))), ShellAction::SelectTool(ToolId::Typography));
        assert_eq!(handle_event(&press(KeyCode::F(4))), ShellAction::None);
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(handle_event(&ctrl('n')), ShellAction::AddRow);
        assert_eq!(handle_event(&ctrl('d')), ShellAction::RemoveRow);
        assert_eq!(handle_event(&ctrl('y')), ShellAction::Copy);
        assert_eq!(handle_event(&ctrl('u')), ShellAction::Edit(TextEdit::Clear));
        assert_eq!(handle_event(&ctrl('x')), ShellAction::None);
    }

    #[test]
    fn test_editing_keys() {
        assert_eq!(handle_event(&press(KeyCode::Backspace)), ShellAction::Edit(TextEdit::Backspace));
        assert_eq!(handle_event(&press(KeyCode::Char('#'))), ShellAction::Edit(TextEdit::Insert('#')));
        assert_eq!(handle_event(&press(KeyCode::Left)), ShellAction::Left);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&Event::Key(key)), ShellAction::None);
    }

    #[test]
    fn test_resize_is_ignored() {
        assert_eq!(handle_event(&Event::Resize(80, 24)), ShellAction::None);
    }
}
