use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A user action, decoded from a key press
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Leave the program regardless of what's on screen
    Quit,
    Up,
    Down,
    Left,
    Right,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Command::Up))]
    #[case(KeyCode::Char('w'), Some(Command::Up))]
    #[case(KeyCode::Char('k'), Some(Command::Up))]
    #[case(KeyCode::Down, Some(Command::Down))]
    #[case(KeyCode::Char('s'), Some(Command::Down))]
    #[case(KeyCode::Char('j'), Some(Command::Down))]
    #[case(KeyCode::Left, Some(Command::Left))]
    #[case(KeyCode::Char('a'), Some(Command::Left))]
    #[case(KeyCode::Char('h'), Some(Command::Left))]
    #[case(KeyCode::Right, Some(Command::Right))]
    #[case(KeyCode::Char('d'), Some(Command::Right))]
    #[case(KeyCode::Char('l'), Some(Command::Right))]
    #[case(KeyCode::Char('r'), Some(Command::R))]
    #[case(KeyCode::Char('q'), Some(Command::Q))]
    #[case(KeyCode::Char('c'), None)]
    #[case(KeyCode::Char('W'), None)]
    #[case(KeyCode::Enter, None)]
    #[case(KeyCode::Esc, None)]
    fn plain_keys(#[case] code: KeyCode, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), cmd);
    }

    #[rstest]
    #[case(KeyModifiers::CONTROL, KeyCode::Char('c'), Some(Command::Quit))]
    #[case(KeyModifiers::CONTROL, KeyCode::Char('q'), None)]
    #[case(KeyModifiers::ALT, KeyCode::Up, None)]
    #[case(KeyModifiers::SHIFT, KeyCode::Char('r'), None)]
    fn modified_keys(
        #[case] modifiers: KeyModifiers,
        #[case] code: KeyCode,
        #[case] cmd: Option<Command>,
    ) {
        assert_eq!(Command::from_key_event(KeyEvent::new(code, modifiers)), cmd);
    }
}
