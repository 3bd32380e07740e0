use crate::{
    cli::{ask, get_input, show_menu},
    logging::{Verbosity, init_logging},
    prelude::{
        AppError, ContactManager,
        command::{Cli, Command, parse_command},
        store::TxtStore,
    },
};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tracing::debug;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    init_logging(Verbosity::from_occurrences(cli.verbose));
    debug!(file = %cli.file.display(), "starting contact book");

    let mut manager = ContactManager::new(Box::new(TxtStore::new(cli.file)));

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut manager, &mut stdin.lock(), &mut stdout.lock())
}

/// Loads the book, serves the menu until the user saves and exits (or the
/// input runs out), then writes the book back.
pub fn run_session<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    if let Err(e) = manager.load() {
        debug!(error = ?e, "loading contacts failed");
        writeln!(out, "Error loading contacts: {}", e)?;
    }

    loop {
        show_menu(out)?;

        let Some(action) = get_input(input)? else {
            // Input closed; keep what was entered
            writeln!(out)?;
            return save_and_exit(manager, out);
        };

        match parse_command(&action) {
            Ok(Command::AddContact) => add_contact(manager, input, out)?,
            Ok(Command::SearchContact) => search_contact(manager, input, out)?,
            Ok(Command::ListContacts) => list_contacts(manager, out)?,
            Ok(Command::SaveAndExit) => return save_and_exit(manager, out),
            Err(e) => {
                debug!(error = %e, "invalid menu choice");
                writeln!(out, "Invalid option, try again.")?;
            }
        }
    }
}

fn add_contact<R: BufRead, W: Write>(
    manager: &mut ContactManager,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let Some(name) = ask(input, out, "Enter name: ")? else {
        return Ok(());
    };
    let Some(phone) = ask(input, out, "Enter phone: ")? else {
        return Ok(());
    };
    let Some(email) = ask(input, out, "Enter email: ")? else {
        return Ok(());
    };

    match manager.add_contact(&name, &phone, &email) {
        Ok(_) => writeln!(out, "Contact added.")?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn search_contact<R: BufRead, W: Write>(
    manager: &ContactManager,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let Some(name) = ask(input, out, "Enter name to search: ")? else {
        return Ok(());
    };

    match manager.search(&name) {
        Some(contact) => writeln!(out, "{}", contact)?,
        None => writeln!(out, "{}", AppError::NotFound("Contact".to_string()))?,
    }
    Ok(())
}

fn list_contacts<W: Write>(manager: &ContactManager, out: &mut W) -> Result<(), AppError> {
    if manager.is_empty() {
        writeln!(out, "No contacts.")?;
        return Ok(());
    }

    writeln!(out, "Contacts:")?;
    for contact in manager.contact_list() {
        writeln!(out, "{}", contact)?;
    }
    Ok(())
}

fn save_and_exit<W: Write>(manager: &ContactManager, out: &mut W) -> Result<(), AppError> {
    match manager.save() {
        Ok(()) => writeln!(out, "Contacts saved. Goodbye!")?,
        Err(e) => {
            debug!(medium = manager.get_medium(), error = ?e, "saving contacts failed");
            writeln!(out, "Error saving contacts: {}", e)?;
            writeln!(out, "Goodbye!")?;
        }
    }
    out.flush()?;
    Ok(())
}
