use crate::cli::context::CLIContext;
use crate::model::PackingItem;
use crate::queries::packing_queries;
use crate::validation;

pub fn list(ctx: &CLIContext, args: &str) {
    let items = ctx.packing.items();
    if items.is_empty() {
        println!("Packing list is empty. Use 'add-item' to add something.");
        return;
    }
    let trip = args.trim();
    for (i, item) in items.iter().enumerate() {
        if trip.is_empty() || item.trip == trip {
            print_item(i, item);
        }
    }
    let left = packing_queries::unpacked(items)
        .into_iter()
        .filter(|i| trip.is_empty() || i.trip == trip)
        .count();
    println!("{} item(s) left to pack.", left);
    print_progress(ctx, trip);
}

pub fn trips(ctx: &CLIContext) {
    let names = ctx.packing.trip_names();
    if names.is_empty() {
        println!("No trips yet.");
        return;
    }
    for name in names {
        println!("  {} ({}% packed)", name, ctx.packing.trip_progress(&name));
    }
}

pub fn progress(ctx: &CLIContext, args: &str) {
    print_progress(ctx, args.trim());
}

pub fn add(ctx: &mut CLIContext, args: &str) {
    let trips = ctx.packing.trip_names();
    let default_trip = if args.trim().is_empty() {
        trips.last().cloned().unwrap_or_default()
    } else {
        args.trim().to_string()
    };
    if !trips.is_empty() {
        println!("Known trips: {}", trips.join(", "));
    }
    let trip = match ctx.term.prompt_default("Trip", &default_trip) {
        Some(t) => t,
        None => return,
    };
    let category = match ctx.term.pick_category(Default::default()) {
        Some(c) => c,
        None => return,
    };
    let name = match ctx.term.prompt("Item name: ") {
        Some(n) => n,
        None => return,
    };

    match ctx.packing.add_item(&trip, category, &name) {
        Ok(item) => println!("Added {} to {}", item.name, item.trip),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn toggle(ctx: &mut CLIContext, args: &str) {
    let result = validation::display_position(args).and_then(|pos| ctx.packing.toggle(pos));
    match result {
        Ok(packed) => {
            println!("{}", if packed { "Marked packed." } else { "Marked not packed." });
            print_progress(ctx, "");
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn delete(ctx: &mut CLIContext, args: &str) {
    let result = validation::display_position(args).and_then(|pos| ctx.packing.delete_item(pos));
    match result {
        Ok(item) => println!("Deleted {}", item.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn save(ctx: &mut CLIContext) {
    if !ctx.term.confirm("Are you sure you want to save your data?") {
        return;
    }
    match ctx.packing.save() {
        Ok(()) => println!("Your data has been saved!"),
        Err(e) => ctx.print_error(&e),
    }
}

fn print_item(index: usize, item: &PackingItem) {
    println!(
        "  {:>3}. {} | {} | {} -> {}",
        index + 1,
        item.trip,
        item.category,
        item.name,
        item.status_label()
    );
}

fn print_progress(ctx: &CLIContext, trip: &str) {
    let pct = if trip.is_empty() {
        ctx.packing.progress()
    } else {
        ctx.packing.trip_progress(trip)
    };
    let filled = usize::from(pct) / 5;
    println!(
        "Packing Progress: [{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(20 - filled),
        pct
    );
}
