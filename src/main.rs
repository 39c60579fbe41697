fn main() {
    if let Err(err) = pedometer_lib::run() {
        eprintln!("pedometer: {err:#}");
        std::process::exit(1);
    }
}
