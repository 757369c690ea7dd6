use clap::ArgMatches;

use crate::{App, Result};

mod cat_file;
mod hash_object;
mod init;

pub(crate) fn add_subcommands<'a, 'b>(app: clap::App<'a, 'b>) -> clap::App<'a, 'b> {
    app.subcommand(cat_file::subcommand())
        .subcommand(hash_object::subcommand())
        .subcommand(init::subcommand())
}

pub(crate) fn dispatch(app: &mut App, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        ("cat-file", Some(m)) => cat_file::run(app, m),
        ("hash-object", Some(m)) => hash_object::run(app, m),
        ("init", Some(m)) => init::run(app, m),
        // clap exits with usage before we get here when no subcommand is given.
        (name, _) => Err(format!("unknown command `{}`", name).into()),
    }
}
