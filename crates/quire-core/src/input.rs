//! Input commands understood by the navigator

/// A navigation request decoded from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl Command {
    /// Vim-style letter keys
    pub fn from_key_char(c: char) -> Option<Self> {
        match c {
            'h' => Some(Command::Left),
            'l' => Some(Command::Right),
            'k' => Some(Command::Up),
            'j' => Some(Command::Down),
            _ => None,
        }
    }
}

/// The four on-screen directional affordances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
}

impl Control {
    pub const ALL: [Control; 4] = [Control::Left, Control::Up, Control::Down, Control::Right];

    pub fn command(self) -> Command {
        match self {
            Control::Left => Command::Left,
            Control::Right => Command::Right,
            Control::Up => Command::Up,
            Control::Down => Command::Down,
        }
    }

    /// Whether the route this control points at is open
    pub fn enabled(self, routes: &crate::routes::Routes) -> bool {
        match self {
            Control::Left => routes.left,
            Control::Right => routes.right,
            Control::Up => routes.up,
            Control::Down => routes.down,
        }
    }
}
