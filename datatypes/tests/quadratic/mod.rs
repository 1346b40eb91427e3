//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, TestPlan};

fn quadratic_test(args: &[&str], expected_out: &str, expected_err: &str, expected_exit_code: i32) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("quadratic"),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(expected_out),
        expected_err: String::from(expected_err),
        expected_exit_code,
    });
}

#[test]
fn quadratic_defaults() {
    quadratic_test(&[], "2.000316 & 1.999684\n", "", 0);
}

#[test]
fn quadratic_real_roots() {
    quadratic_test(&["1", "-3", "2"], "2.000000 & 1.000000\n", "", 0);
    quadratic_test(&["2", "0", "-8"], "2.000000 & -2.000000\n", "", 0);
}

#[test]
fn quadratic_double_root() {
    quadratic_test(&["1", "-4", "4"], "2.000000 & 2.000000\n", "", 0);
}

#[test]
fn quadratic_complex_roots() {
    quadratic_test(
        &["1", "2", "5"],
        "-1.000000+2.000000i & -1.000000-2.000000i\n",
        "",
        0,
    );
}

#[test]
fn quadratic_linear() {
    quadratic_test(&["0", "2", "-4"], "2.000000\n", "", 0);
}

#[test]
fn quadratic_degenerate() {
    quadratic_test(
        &["0", "0", "1"],
        "",
        "quadratic: a and b are both zero, there is nothing to solve\n",
        1,
    );
}

#[test]
fn quadratic_not_finite() {
    quadratic_test(
        &["inf", "1", "1"],
        "",
        "quadratic: coefficients must be finite numbers\n",
        1,
    );
}

#[test]
fn quadratic_overflow() {
    quadratic_test(
        &["1", "1e200", "1"],
        "",
        "quadratic: coefficients too large, the roots overflow\n",
        1,
    );
    quadratic_test(
        &["1e200", "1e200", "1e200"],
        "",
        "quadratic: coefficients too large, the roots overflow\n",
        1,
    );
}
