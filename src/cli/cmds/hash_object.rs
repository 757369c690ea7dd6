use std::{
    fs,
    io::Write,
};

use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, Error, ErrorKind, SubCommand};
use gitobj::object::{Kind, Object};

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("hash-object")
        .about("Compute object ID and optionally creates a blob from a file")
        .arg(
            Arg::with_name("t")
                .short("t")
                .value_name("type")
                .help("Specify the type (default 'blob')"),
        )
        .arg(
            Arg::with_name("w")
                .short("w")
                .help("Actually write the object into the object database"),
        )
        .arg(
            Arg::with_name("stdin")
                .long("stdin")
                .help("Read the object from standard input instead of from a file"),
        )
        .arg(Arg::with_name("file"))
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let object = object_from_args(app, args)?;

    let id = if args.is_present("w") {
        let mut repo = find_repo::from_current_dir()?;
        repo.put_loose_object(&object)?
    } else {
        object.id()
    };

    writeln!(app, "{}", id)?;

    Ok(())
}

fn object_from_args(app: &mut App, args: &ArgMatches) -> Result<Object> {
    // Any type tag is accepted as long as it can be framed.
    let kind = Kind::from(args.value_of("t").unwrap_or("blob"));
    let content = content_from_args(app, args)?;
    Ok(Object::new(kind, content)?)
}

fn content_from_args(app: &mut App, args: &ArgMatches) -> Result<Vec<u8>> {
    let stdin = args.is_present("stdin");

    match (stdin, args.value_of("file")) {
        (false, Some(file)) => Ok(fs::read(file)?),
        (true, None) => {
            let mut content = Vec::new();
            app.stdin.read_to_end(&mut content)?;
            Ok(content)
        }
        _ => Err(Box::new(Error {
            message: "content source must be either --stdin or a file path".to_string(),
            kind: ErrorKind::MissingRequiredArgument,
            info: None,
        })),
    }
}
