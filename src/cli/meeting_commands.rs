use crate::cli::context::CLIContext;
use crate::model::slot::SLOTS_PER_DAY;
use crate::model::{AttendeeStatus, ConfirmedMeeting};
use crate::ops::meeting_ops;
use crate::queries::{schedule_queries, stats_queries};
use crate::schedule::{StatusOverrides, DEFAULT_SUGGESTION_LIMIT};

pub fn duration(ctx: &CLIContext, args: &str) {
    let arg = args.trim();
    if arg.is_empty() {
        let slots = ctx.duration_slots.get();
        println!(
            "Meeting duration: {} slot(s) = {} minutes. Use 'duration <slots>' to change.",
            slots,
            slots * 30
        );
        return;
    }

    match arg.parse::<u32>() {
        Ok(slots) if slots >= 1 && slots <= u32::from(SLOTS_PER_DAY) => {
            ctx.duration_slots.set(slots);
            println!("Meeting duration set to {} slot(s) = {} minutes.", slots, slots * 30);
        }
        _ => println!("Duration must be between 1 and {} slots.", SLOTS_PER_DAY),
    }
}

pub fn suggest(ctx: &CLIContext) {
    let duration = ctx.duration_slots.get();
    let result = schedule_queries::meeting_suggestions(
        &ctx.conn,
        ctx.group.id,
        duration,
        DEFAULT_SUGGESTION_LIMIT,
    );

    let suggestions = match result {
        Ok(s) => s,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    if suggestions.is_empty() {
        println!("No window works for anyone yet. Mark more availability and try again.");
        ctx.last_suggestions.borrow_mut().clear();
        return;
    }

    println!();
    println!("Top suggestions ({} slot(s) each):", duration);
    for (i, s) in suggestions.iter().enumerate() {
        println!(
            "  {}. {} {}  {}/{} available: {}",
            i + 1,
            s.day_label(),
            s.time_range(),
            s.available_count,
            s.total_count,
            s.available_members.join(", ")
        );
    }
    println!();
    println!("Use 'confirm <n>' to confirm one.");

    *ctx.last_suggestions.borrow_mut() = suggestions;
}

pub fn confirm(ctx: &CLIContext, args: &str) {
    let suggestions = ctx.last_suggestions.borrow().clone();
    if suggestions.is_empty() {
        println!("Run 'suggest' first, then confirm one by number.");
        return;
    }

    let pick: usize = match args.trim().parse() {
        Ok(n) => n,
        Err(_) => {
            println!("Usage: confirm <n>   (1-{})", suggestions.len());
            return;
        }
    };

    let Some(suggestion) = pick.checked_sub(1).and_then(|i| suggestions.get(i)) else {
        println!("No suggestion #{}. Pick 1-{}.", pick, suggestions.len());
        return;
    };

    match meeting_ops::confirm_suggestion(
        &ctx.conn,
        ctx.group.id,
        suggestion,
        &StatusOverrides::none(),
    ) {
        Ok(meeting) => {
            println!("Meeting confirmed!");
            print_meeting(&meeting);
        }
        Err(e) => ctx.print_error(&e),
    }
}

pub fn show_current(ctx: &CLIContext) {
    match schedule_queries::current_meeting(&ctx.conn, ctx.group.id) {
        Ok(Some(meeting)) => print_meeting(&meeting),
        Ok(None) => println!("No meeting confirmed yet. Use 'suggest' then 'confirm <n>'."),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn history(ctx: &CLIContext) {
    let meetings = match schedule_queries::meeting_history(&ctx.conn, ctx.group.id) {
        Ok(m) => m,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    if meetings.is_empty() {
        println!("No meetings confirmed yet.");
        return;
    }

    println!("Confirmed meetings, newest first ({}):", meetings.len());
    for meeting in &meetings {
        let confirmed = meeting
            .attendees
            .iter()
            .filter(|a| a.status == AttendeeStatus::Confirmed)
            .count();
        let when = meeting
            .confirmed_at
            .map(|t| format!("  (confirmed {})", t.format("%Y-%m-%d %H:%M")))
            .unwrap_or_default();
        println!(
            "  {} {}  {}/{} confirmed{}",
            meeting.day,
            meeting.time_range,
            confirmed,
            meeting.attendees.len(),
            when
        );
    }
}

/// `late <member> <eta>` — marks a member running late on the current meeting.
pub fn late(ctx: &CLIContext, args: &str) {
    let (member_query, eta) = match args.split_once(' ') {
        Some((m, e)) => (m, e.trim()),
        None => {
            println!("Usage: late <member> <eta>   e.g. late alice 14:08");
            return;
        }
    };

    let member = match ctx.find_member(member_query) {
        Some(m) => m,
        None => return,
    };

    let meeting = match schedule_queries::current_meeting(&ctx.conn, ctx.group.id) {
        Ok(Some(m)) => m,
        Ok(None) => {
            println!("No meeting confirmed yet.");
            return;
        }
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    let eta_text = format!("ETA: {}", eta);
    match meeting_ops::set_attendee_status(
        &ctx.conn,
        meeting.id,
        &member.name,
        AttendeeStatus::RunningLate,
        Some(&eta_text),
    ) {
        Ok(()) => println!("{} marked as running late ({})", member.name, eta_text),
        Err(e) => ctx.print_error(&e),
    }
}

pub fn stats(ctx: &CLIContext) {
    let stats = match stats_queries::group_stats(&ctx.conn, ctx.group.id) {
        Ok(s) => s,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    println!();
    println!("Group: {}", ctx.group.name);
    println!("  Members: {}", stats.member_count);
    println!("  Slots marked free: {}", stats.marked_slots);
    if stats.members_without_availability > 0 {
        println!(
            "  Members with nothing marked: {}",
            stats.members_without_availability
        );
    }
    match stats.busiest_slot {
        Some((slot, count)) => println!(
            "  Busiest slot: {} {} ({} free)",
            slot.day_name(),
            crate::model::slot::slot_to_clock(slot.slot),
            count
        ),
        None => println!("  Busiest slot: (no availability marked)"),
    }
    println!();
}

fn print_meeting(meeting: &ConfirmedMeeting) {
    println!();
    println!("Meeting: {} {}", meeting.day, meeting.time_range);
    for attendee in &meeting.attendees {
        let eta = attendee
            .eta
            .as_deref()
            .map(|e| format!(" ({})", e))
            .unwrap_or_default();
        println!("  {:<20} {}{}", attendee.name, attendee.status.label(), eta);
    }
    println!();
}
