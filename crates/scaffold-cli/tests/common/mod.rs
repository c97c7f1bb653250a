//! Shared fixtures for the binary tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use tempfile::TempDir;

pub const TEMPLATE_GO_MOD: &str =
    "module example.com/project-go/apps/desktop\n\ngo 1.25\n\nrequire example.com/project-go/libs/shared v0.0.0\n";

/// A Go workspace with the desktop template and a shared library.
pub fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let files = [
        ("go.work", "go 1.25\n\nuse (\n\t./apps/desktop\n\t./libs/shared\n)\n"),
        ("apps/desktop/go.mod", TEMPLATE_GO_MOD),
        (
            "apps/desktop/main.go",
            "package main\n\nimport \"example.com/project-go/libs/shared\"\n\nconst title = \"Project Go\"\n",
        ),
        (
            "apps/desktop/wails.json",
            r#"{"name":"project-go","outputfilename":"project-go","info":{"productName":"Project Go"}}"#,
        ),
        ("apps/desktop/frontend/package.json", r#"{"name":"project-go-frontend"}"#),
        ("apps/desktop/frontend/index.html", "<title>Project Go</title>\n"),
        ("apps/desktop/frontend/src/main.js", "// project-go\n"),
        ("apps/desktop/frontend/node_modules/vite/index.js", "x"),
        ("apps/desktop/build/bin/desktop", "x"),
        ("libs/shared/go.mod", "module example.com/project-go/libs/shared\n\ngo 1.25\n"),
    ];
    for (relative, content) in files {
        write(dir.path(), relative, content);
    }
    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// The binary, isolated from the caller's config, logging and colour
/// settings.
pub fn scaffold(cwd: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("scaffold");
    cmd.current_dir(cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".no-config"))
        .env("HOME", cwd.join(".no-home"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("SCAFFOLD__REGISTRAR__PROGRAM")
        .env_remove("SCAFFOLD__REGISTRAR__ARGS");
    cmd
}
