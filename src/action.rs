//! The commands accepted at the session prompt.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 9] = [
        Action::Add,
        Action::Remove,
        Action::Import,
        Action::Export,
        Action::Ask,
        Action::Exit,
        Action::Log,
        Action::HardestCard,
        Action::ResetStats,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Import => "import",
            Action::Export => "export",
            Action::Ask => "ask",
            Action::Exit => "exit",
            Action::Log => "log",
            Action::HardestCard => "hardest card",
            Action::ResetStats => "reset stats",
        }
    }

    /// Exact, case-sensitive match against the command names.
    pub fn parse(input: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|action| action.name() == input)
    }

    pub fn menu_prompt() -> String {
        let names: Vec<_> = Self::ALL.iter().map(|action| action.name()).collect();
        format!("Input the action ({}):", names.join(", "))
    }
}
