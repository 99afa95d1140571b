use std::process::exit;

use contact_book::cli::run_app;

fn main() {
    env_logger::init();

    if let Err(e) = run_app() {
        eprintln!("{}", e);
        exit(1);
    }
}
