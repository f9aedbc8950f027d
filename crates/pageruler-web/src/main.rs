//! Native measuring command.
//!
//! Reads a measuring request from the file named on the command line, or from
//! stdin, and prints the distance annotation as JSON.

#[cfg(feature = "native")]
fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("pageruler: {}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run() -> pageruler_core::RulerResult<()> {
    use std::io::Read;

    let input = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Reading request from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    println!("{}", pageruler_web::measure::measure_to_json(&input)?);
    Ok(())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
