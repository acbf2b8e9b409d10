//! gapcheck main entrypoint.

use gapcheck::run;
use gapcheck::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
