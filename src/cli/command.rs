use std::path::PathBuf;

use clap::Parser;

use crate::errors::AppError;
use crate::storage::stores::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Simple Contact Book")]
pub struct Cli {
    /// JSON file the contacts are kept in
    #[arg(long, env = "CONTACTS_FILE", default_value = DEFAULT_STORAGE_PATH)]
    pub file: PathBuf,
}

/// Entries of the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddContact,
    ViewContacts,
    ModifyContact,
    DeleteContact,
    SearchContact,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddContact,
        MenuChoice::ViewContacts,
        MenuChoice::ModifyContact,
        MenuChoice::DeleteContact,
        MenuChoice::SearchContact,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddContact => "Add Contact",
            MenuChoice::ViewContacts => "View Contacts",
            MenuChoice::ModifyContact => "Modify Contact",
            MenuChoice::DeleteContact => "Delete Contact",
            MenuChoice::SearchContact => "Search Contact",
            MenuChoice::Exit => "Exit",
        }
    }
}

pub fn parse_menu_choice(action: &str) -> Result<MenuChoice, AppError> {
    match action.trim() {
        "1" => Ok(MenuChoice::AddContact),
        "2" => Ok(MenuChoice::ViewContacts),
        "3" => Ok(MenuChoice::ModifyContact),
        "4" => Ok(MenuChoice::DeleteContact),
        "5" => Ok(MenuChoice::SearchContact),
        "6" => Ok(MenuChoice::Exit),
        other => Err(AppError::ParseCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn menu_numbers_map_to_choices() -> Result<(), AppError> {
        assert_eq!(parse_menu_choice("1")?, MenuChoice::AddContact);
        assert_eq!(parse_menu_choice(" 5 ")?, MenuChoice::SearchContact);
        assert_eq!(parse_menu_choice("6")?, MenuChoice::Exit);
        Ok(())
    }

    #[test]
    fn unknown_choice_is_reported() {
        let err = parse_menu_choice("7").unwrap_err();

        assert_eq!(err.to_string(), "Unrecognized command: '7'");
    }

    #[test]
    fn file_defaults_to_contacts_json() {
        let cmd = Cli::command();
        let file = cmd
            .get_arguments()
            .find(|arg| arg.get_id().as_str() == "file")
            .expect("file argument");

        let defaults: Vec<&str> = file
            .get_default_values()
            .iter()
            .filter_map(|value| value.to_str())
            .collect();
        assert_eq!(defaults, vec!["contacts.json"]);
        assert_eq!(file.get_env(), Some(std::ffi::OsStr::new("CONTACTS_FILE")));
    }

    #[test]
    fn file_flag_overrides_default() {
        let cli = Cli::parse_from(["contact-book", "--file", "/tmp/book.json"]);

        assert_eq!(cli.file, PathBuf::from("/tmp/book.json"));
    }
}
