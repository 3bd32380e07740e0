use crate::prelude::AppError;
use crate::store::DEFAULT_STORAGE_PATH;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rusty-contacts", version, about = "Simple Contact Book")]
pub struct Cli {
    /// File the contacts are loaded from and saved to
    #[arg(long, default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,

    /// Print diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddContact,
    SearchContact,
    ListContacts,
    SaveAndExit,
}

impl Command {
    pub const MENU: [(&'static str, Command); 4] = [
        ("1", Command::AddContact),
        ("2", Command::SearchContact),
        ("3", Command::ListContacts),
        ("4", Command::SaveAndExit),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::AddContact => "Add Contact",
            Command::SearchContact => "Search Contact",
            Command::ListContacts => "List Contacts",
            Command::SaveAndExit => "Save and Exit",
        }
    }
}

pub fn parse_command(input: &str) -> Result<Command, AppError> {
    let input = input.trim();

    Command::MENU
        .iter()
        .find(|(key, _)| *key == input)
        .map(|(_, command)| *command)
        .ok_or_else(|| AppError::ParseCommand(input.to_string()))
}
