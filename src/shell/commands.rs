//! Shell command names.

use std::fmt;

/// A command the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Find,
    Delete,
    AddBirthday,
    EditPhone,
    RemovePhone,
    All,
    Birthdays,
    Quit,
}

impl Command {
    /// Every command, in the order they are listed in the prompt.
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Find,
        Command::Delete,
        Command::AddBirthday,
        Command::EditPhone,
        Command::RemovePhone,
        Command::All,
        Command::Birthdays,
        Command::Quit,
    ];

    /// The keyword typed to invoke this command.
    pub fn keyword(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Find => "find",
            Command::Delete => "delete",
            Command::AddBirthday => "add-birthday",
            Command::EditPhone => "edit-phone",
            Command::RemovePhone => "remove-phone",
            Command::All => "all",
            Command::Birthdays => "birthdays",
            Command::Quit => "quit",
        }
    }

    /// Parse a command line, ignoring surrounding whitespace and case.
    pub fn parse(input: &str) -> Option<Command> {
        let input = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.keyword() == input)
    }

    /// The prompt listing every command.
    pub fn prompt() -> String {
        let keywords: Vec<&str> = Self::ALL.iter().map(|c| c.keyword()).collect();
        format!("Enter a command ({}): ", keywords.join(", "))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
