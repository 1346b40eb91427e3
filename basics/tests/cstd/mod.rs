//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, TestPlan};

const LIMITS: &str = "Largest int: 2147483647\n\
                      Binary.....: 0111_1111_1111_1111_1111_1111_1111_1111\n";

fn cstd_test(args: &[&str], expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("cstd"),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(expected_output),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn cstd_limits() {
    cstd_test(&[], LIMITS);
}

#[test]
fn cstd_phases() {
    let expected = format!(
        "Phases of compilation:\n\
         1. Pre-processing (filename.i): removes comments, expands macros and included files, \
         resolves conditional compilation\n\
         2. Compilation (filename.s): produces assembly level instructions\n\
         3. Assembly (filename.o): produces machine level instructions\n\
         4. Linking (executable): resolves references and adds the needed code\n\
         {}",
        LIMITS
    );
    cstd_test(&["--phases"], &expected);
}
