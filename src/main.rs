fn main() {
    if let Err(e) = automedicare_lib::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
