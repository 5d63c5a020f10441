use crate::cli::context::CLIContext;
use crate::model::slot::{
    clock_to_slot, parse_day, slot_to_clock, DAY_NAMES, SLOTS_PER_DAY,
};
use crate::model::SlotId;
use crate::ops::availability_ops;

/// `mark <member> <day> <HH:MM>` — toggles one half-hour cell.
pub fn mark(ctx: &CLIContext, args: &str) {
    let parts: Vec<&str> = args.split_whitespace().collect();
    let &[member_query, day_str, time_str] = parts.as_slice() else {
        println!("Usage: mark <member> <day> <HH:MM>   e.g. mark alice Mon 09:30");
        return;
    };

    let member = match ctx.find_member(member_query) {
        Some(m) => m,
        None => return,
    };

    let Some(day) = parse_day(day_str) else {
        println!("Unknown day '{}'. Use {}.", day_str, DAY_NAMES.join("/"));
        return;
    };

    let slot = match clock_to_slot(time_str) {
        Ok(s) => s,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    match availability_ops::toggle_slot(&ctx.conn, member.id, day, slot) {
        Ok((slot_id, now_free)) => {
            let state = if now_free { "free" } else { "busy" };
            println!(
                "{} is now {} on {} at {}",
                member.name,
                state,
                slot_id.day_name(),
                slot_to_clock(slot_id.slot)
            );
        }
        Err(e) => ctx.print_error(&e),
    }
}

/// `grid [member]` — one member's week, or the whole group as a heat map.
pub fn grid(ctx: &CLIContext, args: &str) {
    if args.trim().is_empty() {
        group_grid(ctx);
        return;
    }

    let member = match ctx.find_member(args) {
        Some(m) => m,
        None => return,
    };

    println!();
    println!("{}'s availability:", member.name);
    println!("{}", hour_header());
    for day in 0..DAY_NAMES.len() as u8 {
        let mut row = String::new();
        for slot in 0..SLOTS_PER_DAY {
            let free = member.availability.contains(&SlotId { day, slot });
            row.push(if free { '#' } else { '.' });
        }
        println!("{:<5}{}", DAY_NAMES[day as usize], row);
    }
    println!();
}

fn group_grid(ctx: &CLIContext) {
    let members = ctx.roster();
    if members.is_empty() {
        println!("No members yet.");
        return;
    }

    println!();
    println!("Members free per slot (0-9, '.' = nobody):");
    println!("{}", hour_header());
    for day in 0..DAY_NAMES.len() as u8 {
        let mut row = String::new();
        for slot in 0..SLOTS_PER_DAY {
            let slot_id = SlotId { day, slot };
            let count = members.iter().filter(|m| m.is_free(slot_id)).count();
            row.push(match count {
                0 => '.',
                n if n < 10 => char::from_digit(n as u32, 10).unwrap_or('9'),
                _ => '9',
            });
        }
        println!("{:<5}{}", DAY_NAMES[day as usize], row);
    }
    println!();
}

/// Hour marks every two hours, aligned with the 32-column rows.
fn hour_header() -> String {
    let mut header = String::from("     ");
    let mut hour = 8;
    while hour < 24 {
        header.push_str(&format!("{:<4}", hour));
        hour += 2;
    }
    header
}

pub fn clear(ctx: &CLIContext, args: &str) {
    let member = match ctx.find_member(args) {
        Some(m) => m,
        None => {
            if args.trim().is_empty() {
                println!("Usage: clear <member>");
            }
            return;
        }
    };

    match availability_ops::clear_availability(&ctx.conn, member.id) {
        Ok(()) => println!("Cleared all availability for {}", member.name),
        Err(e) => ctx.print_error(&e),
    }
}
