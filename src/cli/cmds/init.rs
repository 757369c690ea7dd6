use std::{io::Write, path::Path};

use crate::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use gitobj::repo::on_disk::OnDisk;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty git repository")
        .arg(
            Arg::with_name("directory")
                .required(true)
                .help("The directory to create"),
        )
}

pub(crate) fn run(app: &mut App, init_matches: &ArgMatches) -> Result<()> {
    let dir = init_matches.value_of("directory").unwrap();
    // unwrap: clap has already rejected a missing directory.

    let path = Path::new(dir);
    OnDisk::init(path)?;

    writeln!(
        app,
        "Initialized empty Git repository in {}",
        path.display()
    )?;

    Ok(())
}
