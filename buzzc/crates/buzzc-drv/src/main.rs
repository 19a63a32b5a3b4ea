fn main() {
    if let Err(e) = buzzc_drv::run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
