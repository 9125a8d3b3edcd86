use assert_cmd::Command;
use std::path::Path;

pub fn jielewe_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jielewe").unwrap();
    cmd.env_remove("JIELEWE_ROOT");
    cmd.env_remove("HF_TOKEN");
    cmd.env_remove("HUGGINGFACE_TOKEN");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Initialize an offline journal at `path`
pub fn init_keyword_journal(path: &Path) {
    jielewe_cmd()
        .arg("init")
        .arg(path)
        .arg("--backend")
        .arg("keyword")
        .assert()
        .success();
}
