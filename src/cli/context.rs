use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use rusqlite::Connection;

use crate::model::{Group, MeetingSuggestion, Member};
use crate::queries::schedule_queries;

/// Default meeting length: 2 slots = 1 hour.
pub const DEFAULT_DURATION_SLOTS: u32 = 2;

pub struct CLIContext {
    pub conn: Connection,
    pub group: Group,
    /// Selected meeting length in slots, changed with the `duration` command.
    pub duration_slots: Cell<u32>,
    /// The last `suggest` output, so `confirm <n>` can refer to it by number.
    pub last_suggestions: RefCell<Vec<MeetingSuggestion>>,
}

impl CLIContext {
    pub fn new(conn: Connection, group: Group) -> Self {
        Self {
            conn,
            group,
            duration_slots: Cell::new(DEFAULT_DURATION_SLOTS),
            last_suggestions: RefCell::new(Vec::new()),
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
            Err(_) => None,
        }
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Find a member by name query. Prints an error if not found or ambiguous.
    pub fn find_member(&self, args: &str) -> Option<Member> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let members =
            schedule_queries::availability_snapshot(&self.conn, self.group.id).unwrap_or_default();
        let lower = query.to_lowercase();
        let matches: Vec<&Member> = members
            .iter()
            .filter(|m| m.name.to_lowercase().contains(&lower))
            .collect();

        match matches.len() {
            0 => {
                println!("No member found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                // Check for exact match
                if let Some(exact) = matches.iter().find(|m| m.name.eq_ignore_ascii_case(query)) {
                    return Some((*exact).clone());
                }
                println!("Multiple matches found:");
                for m in &matches {
                    println!("  {}", m.name);
                }
                println!("Please be more specific.");
                None
            }
        }
    }

    pub fn roster(&self) -> Vec<Member> {
        schedule_queries::availability_snapshot(&self.conn, self.group.id).unwrap_or_default()
    }

    /// Print an error.
    pub fn print_error(&self, e: &crate::error::HuddleError) {
        println!("Error: {}", e);
    }
}
