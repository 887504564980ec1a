fn main() {
    if let Err(e) = benchtimer_cli::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
