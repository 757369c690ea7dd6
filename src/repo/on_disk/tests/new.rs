use std::fs;

use super::super::*;

fn temp_repo() -> (tempfile::TempDir, OnDisk) {
    let temp = tempfile::tempdir().unwrap();
    let r = OnDisk::init(temp.path()).unwrap();
    (temp, r)
}

#[test]
fn happy_path() {
    let (temp, _) = temp_repo();
    let work_dir = temp.path();
    let git_dir = work_dir.join(".git");

    let r = OnDisk::new(&work_dir).unwrap();
    assert_eq!(r.work_dir(), work_dir);
    assert_eq!(r.git_dir(), git_dir.as_path());
    assert_eq!(r.objects_dir(), git_dir.join("objects"));
    assert_eq!(r.config().repository_format_version().unwrap(), 0);
}

#[test]
fn accepts_command_line_git_config() {
    let (temp, _) = temp_repo();
    let config_txt = "[core]\n\trepositoryformatversion = 0\n\tfilemode = true\n\tbare = false\n\tlogallrefupdates = true\n";
    fs::write(temp.path().join(".git/config"), config_txt).unwrap();

    let r = OnDisk::new(temp.path()).unwrap();
    assert_eq!(r.config().get("core", "filemode"), Some("true"));
}

#[test]
fn accepts_comments_and_mixed_case() {
    let (temp, _) = temp_repo();
    let config_txt = "; written by hand\n[Core] # main section\n\tRepositoryFormatVersion = 0 ; the only supported version\n";
    fs::write(temp.path().join(".git/config"), config_txt).unwrap();

    let r = OnDisk::new(temp.path()).unwrap();
    assert_eq!(r.config().repository_format_version().unwrap(), 0);
}

#[test]
fn error_no_work_dir() {
    let temp = tempfile::tempdir().unwrap();
    let work_dir = temp.path().join("bogus");
    let err = OnDisk::new(&work_dir).unwrap_err();
    if let Error::NotARepository(path) = err {
        assert_eq!(path, work_dir);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_no_git_dir() {
    let tempdir = tempfile::tempdir().unwrap();
    let work_dir = tempdir.path();
    let err = OnDisk::new(&work_dir).unwrap_err();
    if let Error::NotARepository(_) = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_git_dir_is_a_file() {
    let tempdir = tempfile::tempdir().unwrap();
    let work_dir = tempdir.path();
    fs::write(work_dir.join(".git"), "gitdir: ../elsewhere\n").unwrap();

    let err = OnDisk::new(&work_dir).unwrap_err();
    if let Error::NotARepository(_) = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_config_missing() {
    let (temp, _) = temp_repo();
    let config_path = temp.path().join(".git/config");
    fs::remove_file(&config_path).unwrap();

    let err = OnDisk::new(temp.path()).unwrap_err();
    if let Error::ConfigMissingOrMalformed { path, .. } = err {
        assert_eq!(path, config_path);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_config_is_a_directory() {
    let (temp, _) = temp_repo();
    let config_path = temp.path().join(".git/config");
    fs::remove_file(&config_path).unwrap();
    fs::create_dir(&config_path).unwrap();

    let err = OnDisk::new(temp.path()).unwrap_err();
    if let Error::ConfigMissingOrMalformed { .. } = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_config_malformed() {
    let (temp, _) = temp_repo();
    fs::write(temp.path().join(".git/config"), "[core\n").unwrap();

    let err = OnDisk::new(temp.path()).unwrap_err();
    if let Error::ConfigMissingOrMalformed { reason, .. } = err {
        assert!(reason.starts_with("syntax error"), "reason: {}", reason);
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_config_without_version() {
    let (temp, _) = temp_repo();
    fs::write(temp.path().join(".git/config"), "[core]\n\tbare = false\n").unwrap();

    let err = OnDisk::new(temp.path()).unwrap_err();
    if let Error::ConfigMissingOrMalformed { reason, .. } = err {
        assert_eq!(reason, "missing required key `core.repositoryformatversion`");
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_version_not_an_integer() {
    let (temp, _) = temp_repo();
    fs::write(
        temp.path().join(".git/config"),
        "[core]\n\trepositoryformatversion = one\n",
    )
    .unwrap();

    let err = OnDisk::new(temp.path()).unwrap_err();
    if let Error::ConfigMissingOrMalformed { .. } = err {
        // expected
    } else {
        panic!("wrong error: {:?}", err);
    }
}

#[test]
fn error_unsupported_version() {
    let (temp, _) = temp_repo();
    fs::write(
        temp.path().join(".git/config"),
        "[core]\n\trepositoryformatversion = 1\n",
    )
    .unwrap();

    let err = OnDisk::new(temp.path()).unwrap_err();
    if let Error::UnsupportedVersion { version, .. } = err {
        assert_eq!(version, 1);
    } else {
        panic!("wrong error: {:?}", err);
    }
}
