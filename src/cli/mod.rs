pub mod context;
pub mod contact_commands;
pub mod packing_commands;

use std::fs;

use rusqlite::Connection;

use crate::config::Config;
use crate::error::TravelResult;
use crate::ops::{ContactSession, PackingSession};
use context::CLIContext;

/// Open both sessions described by `config`.
pub fn open(config: &Config) -> TravelResult<CLIContext> {
    let contacts = ContactSession::open(&config.contacts_path)?;

    if let Some(dir) = config.packing_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(&config.packing_path)?;
    let packing = PackingSession::open(conn, config.auto_save)?;

    Ok(CLIContext::new(contacts, packing))
}

/// Run the interactive REPL.
pub fn run(config: &Config) {
    println!("Travelkit - emergency contacts and packing lists");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let mut ctx = match open(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error opening data: {}", e);
            return;
        }
    };

    println!(
        "Loaded {} contacts and {} packing items.",
        ctx.contacts.contacts().len(),
        ctx.packing.items().len()
    );
    if !ctx.packing.auto_save_enabled() {
        println!("Auto-save is off; use 'save-items' to keep packing changes.");
    }

    repl_loop(&mut ctx);

    if ctx.packing.has_unsaved_changes() && ctx.term.confirm("Save packing list before quitting?") {
        if let Err(e) = ctx.packing.save() {
            ctx.print_error(&e);
        }
    }
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let input = match ctx.term.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            // Contact commands
            "contacts" | "ls" => contact_commands::list(ctx),
            "show-contact" | "show" => contact_commands::show(ctx, args),
            "find-contact" | "find" => contact_commands::find(ctx, args),
            "add-contact" => contact_commands::add(ctx),
            "edit-contact" | "edit" => contact_commands::edit(ctx, args),
            "delete-contact" => contact_commands::delete(ctx, args),
            "save-contacts" => contact_commands::save(ctx),
            "reload-contacts" => contact_commands::reload(ctx),

            // Packing commands
            "items" | "packing" => packing_commands::list(ctx, args),
            "trips" => packing_commands::trips(ctx),
            "add-item" => packing_commands::add(ctx, args),
            "toggle" => packing_commands::toggle(ctx, args),
            "delete-item" => packing_commands::delete(ctx, args),
            "progress" => packing_commands::progress(ctx, args),
            "save-items" => packing_commands::save(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Split input into command and the rest of the line.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find([' ', '\t']) {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Emergency contacts:
    contacts                List contacts grouped by category
    show-contact <id>       Show contact details
    find-contact <query>    Search by name, phone or email
    add-contact             Add a contact (interactive form)
    edit-contact <id>       Edit a contact
    delete-contact <id>     Delete a contact
    save-contacts           Write contacts to disk
    reload-contacts         Discard changes and reload from disk

  Packing list:
    items [trip]            List items, optionally for one trip
    trips                   List trips with their progress
    add-item [trip]         Add an item (interactive)
    toggle <n>              Toggle packed for item number n
    delete-item <n>         Delete item number n
    progress [trip]         Show packing progress
    save-items              Save the packing list

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - Each category holds at most 2 primary contacts
  - A contact whose name, phone or email matches another is a duplicate"#);
}
