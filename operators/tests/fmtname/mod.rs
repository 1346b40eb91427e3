//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, TestPlan};

fn fmtname_test(args: &[&str], expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("fmtname"),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(expected_output),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn fmtname_default() {
    fmtname_test(&[], "Sobrenome, Nome Prefixo Nome_do_meio Sufixo\n");
}

#[test]
fn fmtname_two_words() {
    fmtname_test(&["Alan Turing"], "Turing, Alan\n");
}

#[test]
fn fmtname_single_word() {
    fmtname_test(&["Euclid"], "Euclid\n");
}
