//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test_with_checker, TestPlan};
use std::process::Output;

fn macros_plan(args: &[&str]) -> TestPlan {
    TestPlan {
        cmd: String::from("macros"),
        args: args.iter().map(|s| String::from(*s)).collect(),
        stdin_data: String::new(),
        expected_out: String::new(),
        expected_err: String::new(),
        expected_exit_code: 0,
    }
}

fn check_standard_macros(lines: &[&str]) {
    assert_eq!(lines.len(), 4);

    assert!(lines[0].starts_with("Current File: "));
    assert!(lines[0].ends_with("macros.rs"));

    // "Mmm dd yyyy", day padded with a space
    let date = lines[1].strip_prefix("Current Date: ").unwrap();
    assert_eq!(date.len(), 11);

    let time = lines[2].strip_prefix("Current Time: ").unwrap();
    let fields: Vec<&str> = time.split(':').collect();
    assert_eq!(fields.len(), 3);
    assert!(fields.iter().all(|f| f.len() == 2 && f.parse::<u32>().is_ok()));

    let line = lines[3].strip_prefix("Line Number : ").unwrap();
    assert!(line.parse::<u32>().unwrap() > 0);
}

fn check_success(output: &Output) -> String {
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn macros_default() {
    run_test_with_checker(macros_plan(&[]), |_, output| {
        let stdout = check_success(output);
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(
            &lines[..8],
            &["xample", "11", "90", "37", "Example", "Macro! ", "Macro! ", "Macro! "]
        );
        check_standard_macros(&lines[8..]);
    });
}

#[test]
fn macros_unhygienic() {
    run_test_with_checker(macros_plan(&["--unhygienic"]), |_, output| {
        let stdout = check_success(output);
        let lines: Vec<&str> = stdout.lines().collect();

        assert_eq!(&lines[..4], &["xample", "11", "90", "9 * 7 + 3 = 66"]);
        assert_eq!(lines[4], "37");
        check_standard_macros(&lines[9..]);
    });
}
