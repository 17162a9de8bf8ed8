extern crate balanced_collections;
#[macro_use]
extern crate log;
extern crate simplelog;

use balanced_collections::error::Result;
use balanced_collections::harness::{self, Session};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::env;
use std::io::{self, Write};

fn init_logging() -> Result<()> {
    let value = env::var(harness::LOG_LEVEL_VAR).ok();
    let level = harness::log_level(value.as_ref().map(String::as_str));
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness::run_demo(&mut out, &harness::DEMO_KEYS)?;
    writeln!(out, "Please pass int as an input to add:")?;

    let stdin = io::stdin();
    let mut session = Session::new(out);
    session.run(stdin.lock())?;
    info!("input closed after {} rejected lines", session.rejected());
    Ok(())
}
