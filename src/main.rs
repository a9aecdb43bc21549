use std::process;

fn main() {
    if let Err(e) = snipdeck_cli::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
