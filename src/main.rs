//! `tickets_rust` (tk) - Personal ticket/bookmark tracker
//!
//! Tickets are stored as JSON under `~/.gotickets/`, with a timestamped
//! backup taken before every change.

use tickets_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
