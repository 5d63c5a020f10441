use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut import_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--import" => {
                import_path = args.next().map(PathBuf::from);
                if import_path.is_none() {
                    eprintln!("Error: --import requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Huddle - Group Meeting Scheduler");
                println!();
                println!("Usage: huddle [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>      Database file path (default: .data/huddle.db)");
                println!("  --import <JSON_PATH>   Import a group export JSON file");
                println!("  -h, --help             Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let db_path = db_path.unwrap_or_else(|| {
        let dir = PathBuf::from(".data");
        if !dir.exists() {
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("Error creating .data directory: {}", e);
                std::process::exit(1);
            }
        }
        dir.join("huddle.db")
    });

    if let Some(json_path) = import_path {
        println!("Importing from {}...", json_path.display());
        if db_path.exists() {
            eprintln!("Error: Database file {} already exists.", db_path.display());
            eprintln!("Remove it first or use --file to specify a different path.");
            std::process::exit(1);
        }
        match huddle::migrate::import_json(&json_path, &db_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Members: {}", stats.members);
                println!("  Availability slots: {}", stats.slots);
                println!("  Meetings: {}", stats.meetings);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    huddle::cli::run(&db_path);
}
