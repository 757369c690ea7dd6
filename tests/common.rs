use std::path::Path;

use assert_cmd::Command;

// Build a command that runs the gitobj binary in the given directory.
pub fn gitobj(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gitobj").unwrap();
    cmd.current_dir(dir);
    cmd
}

// Run `gitobj init` on the given path and panic if it fails.
#[allow(dead_code)]
pub fn init_empty_repo(path: &Path) {
    gitobj(path)
        .args(&["init", path.to_str().unwrap()])
        .assert()
        .success();
}

// Store `content` as a blob via `gitobj hash-object -w --stdin`
// and return the printed object ID.
#[allow(dead_code)]
pub fn write_blob(dir: &Path, content: &[u8]) -> String {
    let output = gitobj(dir)
        .args(&["hash-object", "-w", "--stdin"])
        .write_stdin(content)
        .output()
        .unwrap();

    assert!(output.status.success());

    let mut id = String::from_utf8(output.stdout).unwrap();
    assert_eq!(id.pop(), Some('\n'));
    id
}
