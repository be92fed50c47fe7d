fn main() {
    if let Err(err) = fldprep::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
