fn main() {
    if let Err(err) = application_tracker::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
