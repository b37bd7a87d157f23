use crate::cli::context::{CLIContext, Terminal};
use crate::error::{TravelError, TravelResult};
use crate::model::*;
use crate::queries::contact_queries;
use crate::store::{PrimaryChoice, PrimaryConflict, PRIMARY_SLOTS};

pub fn list(ctx: &CLIContext) {
    let contacts = ctx.contacts.contacts();
    if contacts.is_empty() {
        println!("No emergency contacts yet. Use 'add-contact' to add one.");
    }
    for group in contact_queries::categorized(contacts) {
        println!("{} ({})", group.category, group.contacts.len());
        for c in &group.contacts {
            print_row(c);
        }
    }
}

pub fn show(ctx: &CLIContext, args: &str) {
    let result = parse_id(args).and_then(|id| ctx.contacts.find(id));
    match result {
        Ok(c) => print_details(c),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn find(ctx: &CLIContext, args: &str) {
    if args.is_empty() {
        println!("Usage: find-contact <query>");
        return;
    }
    let matches = contact_queries::search(ctx.contacts.contacts(), args);
    if matches.is_empty() {
        println!("No contact found matching '{}'", args);
        return;
    }
    for c in matches {
        print_row(c);
    }
}

pub fn add(ctx: &mut CLIContext) {
    ctx.contacts.cancel_edit();
    println!("Adding a new emergency contact");
    let form = match fill_form(&ctx.term, &ContactForm::default()) {
        Some(f) => f,
        None => return,
    };
    submit(ctx, &form);
}

pub fn edit(ctx: &mut CLIContext, args: &str) {
    let id = match parse_id(args) {
        Ok(id) => id,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };
    let initial = match ctx.contacts.begin_edit(id) {
        Ok(c) => ContactForm::from_contact(c),
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    println!("Editing contact #{} (press Enter to keep a value)", id);
    match fill_form(&ctx.term, &initial) {
        Some(form) => submit(ctx, &form),
        None => ctx.contacts.cancel_edit(),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    let id = match parse_id(args).and_then(|id| ctx.contacts.find(id).map(|c| (id, c.name.clone()))) {
        Ok((id, name)) => {
            if !ctx.term.confirm(&format!("Delete {}?", name)) {
                return;
            }
            id
        }
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };
    match ctx.contacts.delete(id) {
        Ok(_) => println!("Contact deleted."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn save(ctx: &CLIContext) {
    match ctx.contacts.save() {
        Ok(()) => println!("Saved {} contacts to {}", ctx.contacts.contacts().len(), ctx.contacts.path().display()),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn reload(ctx: &mut CLIContext) {
    match ctx.contacts.reload() {
        Ok(()) => println!("Loaded {} contacts.", ctx.contacts.contacts().len()),
        Err(e) => ctx.print_error(&e),
    }
}

fn submit(ctx: &mut CLIContext, form: &ContactForm) {
    let term = ctx.term;
    let result = ctx
        .contacts
        .submit(form, |conflict| ask_replace(&term, conflict));
    match result {
        Ok(outcome) => {
            println!("Emergency contact {} successfully!", outcome.action.as_str());
            if let Ok(c) = ctx.contacts.find(outcome.id) {
                print_details(c);
            }
        }
        Err(e) => ctx.print_error(&e),
    }
}

fn ask_replace(term: &Terminal, conflict: &PrimaryConflict) -> PrimaryChoice {
    println!(
        "There are already {} primary contacts in '{}':",
        PRIMARY_SLOTS, conflict.category
    );
    for c in &conflict.current {
        println!("  #{} {}", c.id, c.name);
    }
    if term.confirm(&format!(
        "Replace {} as primary with this contact?",
        conflict.oldest().name
    )) {
        PrimaryChoice::ReplaceOldest
    } else {
        println!("Contact will be saved without the primary flag.");
        PrimaryChoice::KeepExisting
    }
}

fn fill_form(term: &Terminal, initial: &ContactForm) -> Option<ContactForm> {
    let name = term.prompt_default("Name", &initial.name)?;
    let phone = term.prompt_default("Phone number", &initial.phone)?;
    let email = term.prompt_default("Email", &initial.email)?;
    let address = term.prompt_default("Address", &initial.address)?;
    let relationship = term.pick_category(initial.relationship)?;
    let current = if initial.primary { "y" } else { "n" };
    let primary = term
        .prompt_default("Primary contact? (y/n)", current)?
        .eq_ignore_ascii_case("y");
    Some(ContactForm {
        name,
        phone,
        email,
        address,
        relationship,
        primary,
    })
}

fn parse_id(args: &str) -> TravelResult<ContactId> {
    let trimmed = args.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        return Err(TravelError::InvalidSelection);
    }
    trimmed
        .parse::<u32>()
        .map(ContactId)
        .map_err(|_| TravelError::InvalidArgument(format!("'{}' is not a contact id", trimmed)))
}

fn print_row(c: &EmergencyContact) {
    println!(
        "  #{:<4} {:<20} {:<14} {:<28} {}{}",
        c.id,
        c.name,
        c.phone,
        c.email,
        c.address.replace('\n', ", "),
        if c.primary { "  [primary]" } else { "" }
    );
}

fn print_details(c: &EmergencyContact) {
    println!();
    println!("Contact #{}", c.id);
    println!("  Name:         {}", c.name);
    println!("  Phone Number: {}", c.phone);
    println!("  Relationship: {}", c.relationship);
    println!("  Email:        {}", c.email);
    println!("  Address:      {}", c.address);
    println!("  Primary:      {}", if c.primary { "Yes" } else { "No" });
    println!();
}
