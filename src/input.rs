use crossterm::event::KeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCommand {
    SelectTimeframe(usize),
    ScrollLeft,
    ScrollRight,
    PageBack,
    PageForward,
    JumpToStart,
    JumpToEnd,
    Quit,
}

pub fn parse_key(key_code: &KeyCode) -> Option<ChartCommand> {
    match key_code {
        KeyCode::Left => Some(ChartCommand::ScrollLeft),
        KeyCode::Right => Some(ChartCommand::ScrollRight),
        KeyCode::PageUp => Some(ChartCommand::PageBack),
        KeyCode::PageDown => Some(ChartCommand::PageForward),
        KeyCode::Home => Some(ChartCommand::JumpToStart),
        KeyCode::End => Some(ChartCommand::JumpToEnd),
        KeyCode::Esc => Some(ChartCommand::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(ChartCommand::Quit),
            'h' => Some(ChartCommand::ScrollLeft),
            'l' => Some(ChartCommand::ScrollRight),
            digit @ '1'..='8' => {
                Some(ChartCommand::SelectTimeframe(digit as usize - '1' as usize))
            }
            _ => None,
        },
        _ => None,
    }
}
