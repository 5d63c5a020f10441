use crate::cli::context::CLIContext;
use crate::ops::member_ops;

pub fn list(ctx: &CLIContext) {
    let members = ctx.roster();
    if members.is_empty() {
        println!("No members yet. Use 'add <name>' to add someone.");
        return;
    }

    println!("Members of {} ({}):", ctx.group.name, members.len());
    println!();
    for member in &members {
        let marked = member.availability.len();
        let avail_str = if marked == 0 {
            " - no availability marked".to_string()
        } else {
            format!(" - {} slot(s) marked", marked)
        };
        let sharing = if member.location.is_some() {
            " [sharing location]"
        } else {
            ""
        };
        println!("  {}{}{}", member.name, avail_str, sharing);
    }
}

pub fn add(ctx: &CLIContext, args: &str) {
    let name = if !args.is_empty() {
        args.to_string()
    } else {
        match ctx.prompt("Member name: ") {
            Some(s) if !s.is_empty() => s,
            _ => {
                println!("Name cannot be empty.");
                return;
            }
        }
    };

    match member_ops::add_member(&ctx.conn, ctx.group.id, &name, None) {
        Ok(member) => println!("Added {}", member.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn rename(ctx: &CLIContext, args: &str) {
    let member = match ctx.find_member(args) {
        Some(m) => m,
        None => {
            if args.trim().is_empty() {
                println!("Usage: rename <member>");
            }
            return;
        }
    };

    let new_name = match ctx.prompt("New name: ") {
        Some(s) if !s.is_empty() => s,
        _ => {
            println!("Name cannot be empty.");
            return;
        }
    };

    match member_ops::rename_member(&ctx.conn, ctx.group.id, member.id, &new_name) {
        Ok(updated) => println!("Renamed {} to {}", member.name, updated.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn remove(ctx: &CLIContext, args: &str) {
    let member = match ctx.find_member(args) {
        Some(m) => m,
        None => {
            if args.trim().is_empty() {
                println!("Usage: remove <member>");
            }
            return;
        }
    };

    let sure = ctx
        .prompt(&format!("Remove {} and their availability? (y/n): ", member.name))
        .unwrap_or_default();
    if !sure.eq_ignore_ascii_case("y") {
        println!("Cancelled.");
        return;
    }

    match member_ops::remove_member(&ctx.conn, member.id) {
        Ok(()) => println!("Removed {}", member.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn avatar(ctx: &CLIContext, args: &str) {
    let (member_query, url) = match args.split_once(' ') {
        Some((m, u)) => (m, u.trim()),
        None => {
            println!("Usage: avatar <member> <url>");
            return;
        }
    };

    let member = match ctx.find_member(member_query) {
        Some(m) => m,
        None => return,
    };

    match member_ops::set_avatar(&ctx.conn, member.id, Some(url)) {
        Ok(_) => println!("Updated avatar for {}", member.name),
        Err(e) => ctx.print_error(&e),
    }
}

/// Stores an opaque location reference on a member (the app's equivalent of
/// the old live-location toggle; the scheduler never interprets it).
pub fn share(ctx: &CLIContext, args: &str) {
    let (member_query, location) = match args.split_once(' ') {
        Some((m, l)) => (m, l.trim()),
        None => {
            println!("Usage: share <member> <location>");
            return;
        }
    };

    let member = match ctx.find_member(member_query) {
        Some(m) => m,
        None => return,
    };

    match member_ops::set_location(&ctx.conn, member.id, location) {
        Ok(_) => println!("{} is now sharing a location", member.name),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn unshare(ctx: &CLIContext, args: &str) {
    let member = match ctx.find_member(args) {
        Some(m) => m,
        None => {
            if args.trim().is_empty() {
                println!("Usage: unshare <member>");
            }
            return;
        }
    };

    match member_ops::clear_location(&ctx.conn, member.id) {
        Ok(_) => println!("{} stopped sharing a location", member.name),
        Err(e) => ctx.print_error(&e),
    }
}
