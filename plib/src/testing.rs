//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

pub struct TestPlan {
    pub cmd: String,
    pub args: Vec<String>,
    pub stdin_data: String,
    pub expected_out: String,
    pub expected_err: String,
    pub expected_exit_code: i32,
}

/// Location of a workspace binary built for the current profile.
///
/// Integration tests run from the member crate's directory, one level
/// below the workspace root.
pub fn bin_path(cmd: &str) -> PathBuf {
    let relpath = if cfg!(debug_assertions) {
        format!("target/debug/{}", cmd)
    } else {
        format!("target/release/{}", cmd)
    };

    std::env::current_dir()
        .unwrap()
        .parent()
        .unwrap()
        .join(relpath)
}

/// Run `cmd` with `args`, feeding it `stdin_data`.  The child starts in
/// `work_dir` when given, otherwise in the test's own directory.
pub fn run_test_base_in_dir(
    cmd: &str,
    args: &[String],
    stdin_data: &[u8],
    work_dir: Option<&Path>,
) -> Output {
    let mut command = Command::new(bin_path(cmd));
    command
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    if let Some(dir) = work_dir {
        command.current_dir(dir);
    }

    let mut child = command
        .spawn()
        .unwrap_or_else(|_| panic!("failed to spawn command {cmd}"));

    if let Some(mut stdin) = child.stdin.take() {
        // the child may exit before reading everything
        if let Err(e) = stdin.write_all(stdin_data) {
            eprintln!("Error writing to stdin: {}", e);
        }
        drop(stdin);
    }

    child.wait_with_output().expect("failed to wait for child")
}

pub fn run_test_base(cmd: &str, args: &[String], stdin_data: &[u8]) -> Output {
    run_test_base_in_dir(cmd, args, stdin_data, None)
}

fn check_output(plan: &TestPlan, output: &Output) {
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, plan.expected_out);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, plan.expected_err);

    assert_eq!(output.status.code(), Some(plan.expected_exit_code));
    if plan.expected_exit_code == 0 {
        assert!(output.status.success());
    }
}

pub fn run_test(plan: TestPlan) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    check_output(&plan, &output);
}

/// Like `run_test`, with the command started in `work_dir`.
pub fn run_test_in_dir(plan: TestPlan, work_dir: &Path) {
    let output = run_test_base_in_dir(
        &plan.cmd,
        &plan.args,
        plan.stdin_data.as_bytes(),
        Some(work_dir),
    );
    check_output(&plan, &output);
}

/// Run `plan` and hand the raw output to `checker` instead of comparing
/// it against the plan's expectations.  Used for output that varies
/// between runs, such as timestamps.
pub fn run_test_with_checker<F: FnMut(&TestPlan, &Output)>(plan: TestPlan, mut checker: F) {
    let output = run_test_base(&plan.cmd, &plan.args, plan.stdin_data.as_bytes());
    checker(&plan, &output);
}
