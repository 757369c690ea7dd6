#![deny(warnings)]

use std::{
    error::Error,
    io::{self, Write},
};

use tracing::Level;

mod app;
pub(crate) use app::App;

mod cmds;
mod find_repo;

#[cfg(test)]
mod cwd_guard;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[allow(unused_must_use)]
#[cfg(not(tarpaulin_include))]
fn main() {
    // Kept minimal: everything past argument parsing lives in `App`.
    let arg_matches = app::clap_app().get_matches();
    init_logging(arg_matches.is_present("verbose"));

    let stdin = io::stdin();
    let mut stdin = stdin.lock();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut app = App {
        arg_matches,
        stdin: &mut stdin,
        stdout: &mut stdout,
    };

    let r = app.run();

    app.flush();

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}

// Log events go to stderr so they never mix with command output.
#[cfg(not(tarpaulin_include))]
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
