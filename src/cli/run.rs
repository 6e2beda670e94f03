use crate::{
    cli::{
        Console,
        command::{Cli, MenuChoice, parse_menu_choice},
    },
    domain::{
        contact::{Contact, FieldUpdates},
        manager::{ContactManager, Outcome},
    },
    errors::AppError,
    storage::JsonStorage,
    validation::Field,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let mut manager = ContactManager::new(Box::new(JsonStorage::new(cli.file)));

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    if let Err(e) = manager.load() {
        console.say(&e.to_string())?;
    }

    run_menu(&mut manager, &mut console)
}

/// Drive the menu until the user exits or the input closes.
pub fn run_menu<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    loop {
        console.show_menu()?;

        let Some(action) = console.prompt("Enter your choice (1-6): ")? else {
            console.say("\nExiting the program. Goodbye!")?;
            return Ok(());
        };

        let choice = match parse_menu_choice(&action) {
            Ok(choice) => choice,
            Err(e) => {
                debug!(error = %e, "bad menu choice");
                console.say("Invalid choice. Please enter a number from 1 to 6.")?;
                continue;
            }
        };

        let result = match choice {
            MenuChoice::AddContact => add_contact(manager, console),
            MenuChoice::ViewContacts => view_contacts(manager, console),
            MenuChoice::ModifyContact => modify_contact(manager, console),
            MenuChoice::DeleteContact => delete_contact(manager, console),
            MenuChoice::SearchContact => search_contact(manager, console),
            MenuChoice::Exit => {
                console.say("\nExiting the program. Goodbye!")?;
                info!("exit requested");
                return Ok(());
            }
        };

        // Nothing is fatal: report and go back to the menu.
        if let Err(e) = result {
            error!(error = %e, "operation failed");
            console.say(&e.to_string())?;
        }
    }
}

fn add_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    console.say("\nEnter new contact details:")?;

    let mut values = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        match console.retry(&format!("{}: ", field.label()), field, false)? {
            Some(value) => values.push(value),
            None => return Ok(()),
        }
    }

    let new_contact = Contact::new(&values[0], &values[1], &values[2], &values[3]);

    let outcome = manager.add_contact(new_contact, |_| {
        console.decide("This contact already exists. Do you want to add it anyway?")
    })?;

    match outcome {
        Outcome::Committed => console.say("Contact added successfully."),
        Outcome::Declined => console.say("Contact not added."),
    }
}

fn view_contacts<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    if manager.is_empty() {
        return console.say("No contacts available. Please, enter one.");
    }

    console.say("\nDisplaying all contacts:")?;
    console.display_contacts(&manager.sorted())
}

fn search_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Some(query) = ask_query(manager, console, "search")? else {
        return Ok(());
    };

    let results = manager.search(&query);
    if results.is_empty() {
        return console.say("No contacts found.");
    }
    console.display_contacts(&results)
}

fn modify_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Some(position) = pick_contact(manager, console, "modify")? else {
        return Ok(());
    };

    console.say(&format!(
        "\nSelected contact to modify:\n{}",
        manager.get(position)?
    ))?;
    if !console.confirm_action("Are you sure you want to modify this contact?")? {
        return console.say("Modification cancelled.");
    }

    let mut updates = FieldUpdates::default();
    for field in Field::ALL {
        let prompt = format!(
            "Enter new {} (leave blank to keep current): ",
            field.label().to_lowercase()
        );
        match console.retry(&prompt, field, true)? {
            Some(value) => updates.set(field, value),
            None => return Ok(()),
        }
    }

    let outcome = manager.modify_contact(position, &updates, |_| {
        console.decide("This contact already exists. Do you want to update it anyway?")
    })?;

    match outcome {
        Outcome::Committed => console.say("Contact modified successfully."),
        Outcome::Declined => console.say("Modification cancelled due to duplicate contact."),
    }
}

fn delete_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    console: &mut Console<R, W>,
) -> Result<(), AppError> {
    let Some(position) = pick_contact(manager, console, "delete")? else {
        return Ok(());
    };

    let outcome = manager.delete_contact(position, |contact| {
        match console.say(&format!("\nSelected contact to delete:\n{}", contact)) {
            Ok(()) => console.decide("Are you sure you want to delete this contact?"),
            Err(e) => {
                warn!(error = %e, "could not show contact to delete");
                false
            }
        }
    })?;

    match outcome {
        Outcome::Committed => console.say("Contact deleted successfully."),
        Outcome::Declined => console.say("Contact deletion cancelled."),
    }
}

fn ask_query<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
    action: &str,
) -> Result<Option<String>, AppError> {
    if manager.is_empty() {
        console.say("No contacts found. Please add a contact first.")?;
        return Ok(None);
    }

    console.prompt(&format!(
        "Enter the name, phone number, or email of the contact to {}: ",
        action
    ))
}

/// Search for the contact to act on and narrow it down to one position.
fn pick_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    console: &mut Console<R, W>,
    action: &str,
) -> Result<Option<usize>, AppError> {
    let Some(query) = ask_query(manager, console, action)? else {
        return Ok(None);
    };

    match manager.locate(&query, console) {
        Ok(position) => Ok(position),
        Err(AppError::NotFound(_)) => {
            console.say("No contacts found.")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
