fn main() {
    if let Err(e) = app_lib::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
