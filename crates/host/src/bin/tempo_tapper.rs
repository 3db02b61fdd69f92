//! Terminal tap tempo.
//!
//! Press Enter on every beat; the running tempo is printed after each tap.
//! `r` + Enter resets, `q` + Enter quits.
//!
//! Usage: cargo run -p tempo_tapper_host --bin tempo_tapper -- --precision 2

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tempo_tapper_host::logging::init_logger;
use tempo_tapper_host::{Args, SystemClock, TerminalSession};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logger(&args.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let mut session = TerminalSession::new(SystemClock::new(), args.precision as usize);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    match session.run(stdin, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session failed: {e}");
            ExitCode::FAILURE
        }
    }
}
