pub mod context;
pub mod member_commands;
pub mod availability_commands;
pub mod meeting_commands;

use std::path::Path;

use rusqlite::Connection;

use crate::db::{group_repo, schema};
use crate::model::Group;
use crate::validation;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(db_path: &Path) {
    println!("Huddle - Group Meeting Scheduler");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match Connection::open(db_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error initializing database: {}", e);
        return;
    }

    let ctx = match load_or_init(conn) {
        Some(ctx) => ctx,
        None => return,
    };

    repl_loop(&ctx);
}

fn load_or_init(conn: Connection) -> Option<CLIContext> {
    match group_repo::find_first(&conn) {
        Ok(Some(group)) => {
            println!("Loaded group '{}'", group.name);
            Some(CLIContext::new(conn, group))
        }
        Ok(None) => {
            println!("No group found.");
            init_new_group(conn)
        }
        Err(e) => {
            println!("Error loading data: {}", e);
            println!("Starting fresh...");
            init_new_group(conn)
        }
    }
}

fn init_new_group(conn: Connection) -> Option<CLIContext> {
    println!();
    print!("Group name: ");
    use std::io::Write;
    std::io::stdout().flush().ok();

    let mut name = String::new();
    std::io::stdin().read_line(&mut name).ok()?;
    let name = name.trim().to_string();

    let name_lower = name.to_lowercase();
    if name_lower == "exit" || name_lower == "quit" || name_lower == "q" {
        return None;
    }

    let name = match validation::non_blank(&name, "group name") {
        Ok(n) => n,
        Err(e) => {
            println!("{}. Please restart and try again.", e);
            return None;
        }
    };

    let group = Group::create(name);
    if let Err(e) = group_repo::insert(&conn, &group) {
        println!("Error creating group: {}", e);
        return None;
    }

    println!("Group '{}' created. Add members with 'add <name>'.", group.name);
    println!();

    Some(CLIContext::new(conn, group))
}

fn repl_loop(ctx: &CLIContext) {
    loop {
        let input = match ctx.read_line("> ") {
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

            // Member commands
            "members" | "list" | "ls" => member_commands::list(ctx),
            "add" => member_commands::add(ctx, args),
            "rename" => member_commands::rename(ctx, args),
            "remove" => member_commands::remove(ctx, args),
            "avatar" => member_commands::avatar(ctx, args),
            "share" => member_commands::share(ctx, args),
            "unshare" => member_commands::unshare(ctx, args),

            // Availability commands
            "mark" => availability_commands::mark(ctx, args),
            "grid" => availability_commands::grid(ctx, args),
            "clear" => availability_commands::clear(ctx, args),

            // Scheduling commands
            "duration" => meeting_commands::duration(ctx, args),
            "suggest" | "find-times" => meeting_commands::suggest(ctx),
            "confirm" => meeting_commands::confirm(ctx, args),
            "meeting" => meeting_commands::show_current(ctx),
            "meetings" | "history" => meeting_commands::history(ctx),
            "late" => meeting_commands::late(ctx, args),

            // Other
            "stats" => meeting_commands::stats(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

/// Parse input into command and args.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(
        r#"
COMMANDS:

  Members:
    members                 List all members
    add [name]              Add a member
    rename <member>         Rename a member
    remove <member>         Remove a member and their availability
    avatar <member> <url>   Set a member's avatar
    share <member> <loc>    Store a live-location reference
    unshare <member>        Clear the live-location reference

  Availability:
    mark <member> <day> <HH:MM>   Toggle a half-hour slot (e.g. mark alice Mon 09:30)
    grid [member]                 Show the week grid (group heat map without a member)
    clear <member>                Clear a member's availability

  Scheduling:
    duration [slots]        Show or set the meeting length (30-minute slots)
    suggest                 Rank the best common windows
    confirm <n>             Confirm suggestion #n from the last 'suggest'
    meeting                 Show the current confirmed meeting
    history                 List past confirmations
    late <member> <eta>     Mark a member running late on the current meeting

  Other:
    stats                   Show group statistics
    help                    Show this help
    exit / quit / q         Exit
"#
    );
}
