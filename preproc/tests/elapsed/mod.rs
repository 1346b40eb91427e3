//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_base, TestPlan};

fn elapsed_test(seconds: &str, expected_output: &str) {
    run_test(TestPlan {
        cmd: String::from("elapsed"),
        args: vec![String::from(seconds)],
        stdin_data: String::new(),
        expected_out: String::from(expected_output),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn elapsed_no_sleep() {
    elapsed_test("0", "Difference is 0.00 second(s).\n");
}

#[test]
fn elapsed_one_second() {
    elapsed_test("1", "Difference is 1.00 second(s).\n");
}

#[test]
fn elapsed_rejects_negative() {
    let output = run_test_base("elapsed", &[String::from("-1")], b"");
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn elapsed_help_describes_seconds() {
    let output = run_test_base("elapsed", &[String::from("--help")], b"");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Number of one-second sleeps"));
}
