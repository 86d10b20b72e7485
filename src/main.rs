//! shiftplan main entrypoint.

use shiftplan::run;
use shiftplan::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
