use std::io::Write;

use crate::{find_repo, App, Result};

use clap::{Arg, ArgMatches, Error, ErrorKind, SubCommand};
use gitobj::object::Kind;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("cat-file")
        .about("Provide content or type and size information for repository objects")
        .arg(
            Arg::with_name("t")
                .short("t")
                .conflicts_with_all(&["s", "p"])
                .help("Show the object type"),
        )
        .arg(
            Arg::with_name("s")
                .short("s")
                .conflicts_with("p")
                .help("Show the object size"),
        )
        .arg(
            Arg::with_name("p")
                .short("p")
                .help("Print the object content"),
        )
        .arg(
            Arg::with_name("args")
                .required(true)
                .multiple(true)
                .min_values(1)
                .max_values(2)
                .help("The expected type (default 'blob') and the name of the object to show"),
        )
}

enum Mode<'a> {
    Type,
    Size,
    Pretty,
    Expect(&'a str),
}

pub(crate) fn run(app: &mut App, args: &ArgMatches) -> Result<()> {
    let values: Vec<&str> = args
        .values_of("args")
        .map(|v| v.collect())
        .unwrap_or_default();

    let flag = if args.is_present("t") {
        Some(Mode::Type)
    } else if args.is_present("s") {
        Some(Mode::Size)
    } else if args.is_present("p") {
        Some(Mode::Pretty)
    } else {
        None
    };

    let (mode, name) = match (flag, values.as_slice()) {
        (Some(mode), [name]) => (mode, *name),
        (None, [name]) => (Mode::Expect("blob"), *name),
        (None, [kind, name]) => (Mode::Expect(*kind), *name),
        _ => {
            return Err(Box::new(Error {
                message: "-t, -s, and -p take exactly one object name".to_string(),
                kind: ErrorKind::WrongNumberOfValues,
                info: None,
            }))
        }
    };

    let repo = find_repo::from_current_dir()?;
    let object = repo.get_loose_object_by_hex(name)?;

    match mode {
        Mode::Type => writeln!(app, "{}", object.kind())?,
        Mode::Size => writeln!(app, "{}", object.len())?,
        Mode::Pretty => app.write_all(object.content())?,
        Mode::Expect(kind) => {
            if *object.kind() != Kind::from(kind) {
                let msg = format!("object {} is a {}, not a {}", name, object.kind(), kind);
                return Err(msg.into());
            }
            app.write_all(object.content())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use gitobj::object::{Kind, Object};
    use gitobj::repo::{on_disk::OnDisk, Repo};
    use serial_test::serial;
    use tempfile::TempDir;

    use crate::{cwd_guard::CwdGuard, App};

    const TEST_TEXT: &[u8; 15] = b"This is a test\n";
    const TEST_ID: &str = "0527e6bd2d76b45e2933183f1b506c7ac49f5872";

    fn repo_with_test_blob() -> TempDir {
        let temp = tempfile::tempdir().unwrap();
        let mut repo = OnDisk::init(temp.path()).unwrap();

        let o = Object::new(Kind::Blob, TEST_TEXT.to_vec()).unwrap();
        repo.put_object(&o).unwrap();

        temp
    }

    fn run_in<I, T>(dir: &std::path::Path, args: I) -> crate::Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let _cwd = CwdGuard::enter(dir);
        App::run_with_args(args)
    }

    #[test]
    #[serial]
    fn prints_content_with_default_type() {
        let temp = repo_with_test_blob();
        let stdout = run_in(temp.path(), vec!["cat-file", TEST_ID]).unwrap();
        assert_eq!(stdout, TEST_TEXT);
    }

    #[test]
    #[serial]
    fn prints_content_with_explicit_type() {
        let temp = repo_with_test_blob();
        let stdout = run_in(temp.path(), vec!["cat-file", "blob", TEST_ID]).unwrap();
        assert_eq!(stdout, TEST_TEXT);
    }

    #[test]
    #[serial]
    fn works_from_subdirectory() {
        let temp = repo_with_test_blob();
        let sub = temp.path().join("deeply/nested");
        fs::create_dir_all(&sub).unwrap();

        let stdout = run_in(&sub, vec!["cat-file", "-p", TEST_ID]).unwrap();
        assert_eq!(stdout, TEST_TEXT);
    }

    #[test]
    #[serial]
    fn shows_type_and_size() {
        let temp = repo_with_test_blob();

        let stdout = run_in(temp.path(), vec!["cat-file", "-t", TEST_ID]).unwrap();
        assert_eq!(stdout, b"blob\n");

        let stdout = run_in(temp.path(), vec!["cat-file", "-s", TEST_ID]).unwrap();
        assert_eq!(stdout, b"15\n");
    }

    #[test]
    #[serial]
    fn error_wrong_type() {
        let temp = repo_with_test_blob();
        let err = run_in(temp.path(), vec!["cat-file", "tree", TEST_ID]).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("object {} is a blob, not a tree", TEST_ID)
        );
    }

    #[test]
    #[serial]
    fn error_not_found() {
        let temp = repo_with_test_blob();
        let err = run_in(
            temp.path(),
            vec!["cat-file", "-p", "d670460b4b4aece5915caf5c68d12f560a9fe3e4"],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "object d670460b4b4aece5915caf5c68d12f560a9fe3e4 not found"
        );
    }

    #[test]
    #[serial]
    fn error_bad_object_name() {
        let temp = repo_with_test_blob();
        let err = run_in(temp.path(), vec!["cat-file", "-p", "0527"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid object ID `0527`: value is less than 40 digits long"
        );
    }

    #[test]
    fn error_flag_with_type() {
        let err = App::run_with_args(vec!["cat-file", "-t", "blob", TEST_ID]).unwrap_err();
        assert!(err
            .to_string()
            .contains("-t, -s, and -p take exactly one object name"));
    }

    #[test]
    fn error_conflicting_flags() {
        assert!(App::run_with_args(vec!["cat-file", "-t", "-s", TEST_ID]).is_err());
    }
}
