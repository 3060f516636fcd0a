use std::fmt;
use std::str::FromStr;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Insert,
    AdvanceStatus,
    Pop,
    DisplayOne,
    DisplayAll,
    Clear,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::Insert,
        MenuAction::AdvanceStatus,
        MenuAction::Pop,
        MenuAction::DisplayOne,
        MenuAction::DisplayAll,
        MenuAction::Clear,
        MenuAction::Exit,
    ];

    /// The number the user types to pick this entry.
    pub fn key(self) -> u8 {
        match self {
            MenuAction::Insert => 1,
            MenuAction::AdvanceStatus => 2,
            MenuAction::Pop => 3,
            MenuAction::DisplayOne => 4,
            MenuAction::DisplayAll => 5,
            MenuAction::Clear => 6,
            MenuAction::Exit => 7,
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Insert => write!(f, "Insert Order"),
            MenuAction::AdvanceStatus => write!(f, "Advance Order Status"),
            MenuAction::Pop => write!(f, "Remove Order (Pop)"),
            MenuAction::DisplayOne => write!(f, "Display Order"),
            MenuAction::DisplayAll => write!(f, "Display All Orders"),
            MenuAction::Clear => write!(f, "Clear Stack"),
            MenuAction::Exit => write!(f, "Exit"),
        }
    }
}

/// The input did not name a menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction;

impl FromStr for MenuAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: u8 = s.trim().parse().map_err(|_| UnknownAction)?;
        MenuAction::ALL
            .into_iter()
            .find(|action| action.key() == key)
            .ok_or(UnknownAction)
    }
}
