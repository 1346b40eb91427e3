//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use plib::testing::{run_test, run_test_with_checker, TestPlan};

fn sizes_trailer() -> String {
    format!(
        "Size of Struct student: 12\nSize of Struct pointer: {}\n",
        std::mem::size_of::<usize>()
    )
}

fn student_test(args: &[&str], expected_output: &str) {
    let str_args: Vec<String> = args.iter().map(|s| String::from(*s)).collect();

    run_test(TestPlan {
        cmd: String::from("student"),
        args: str_args,
        stdin_data: String::new(),
        expected_out: String::from(expected_output),
        expected_err: String::new(),
        expected_exit_code: 0,
    });
}

#[test]
fn student_defaults() {
    let expected = format!(
        "Student_id...........: 523\n\
         Stud_Name............: Sanjayulsha\n\
         Name_Length..........: 11\n\
         Allocated_Struct_size: 23\n\
         \n\
         Student_id...........: 535\n\
         Stud_Name............: Cherry\n\
         Name_Length..........: 6\n\
         Allocated_Struct_size: 18\n\
         \n\
         {}",
        sizes_trailer()
    );
    student_test(&[], &expected);
}

#[test]
fn student_custom_record() {
    let expected = format!(
        "Student_id...........: 7\n\
         Stud_Name............: Ada Lovelace\n\
         Name_Length..........: 12\n\
         Allocated_Struct_size: 24\n\
         \n\
         {}",
        sizes_trailer()
    );
    student_test(&["7=Ada Lovelace"], &expected);
}

#[test]
fn student_malformed_record() {
    run_test_with_checker(
        TestPlan {
            cmd: String::from("student"),
            args: vec![String::from("Cherry")],
            stdin_data: String::new(),
            expected_out: String::new(),
            expected_err: String::new(),
            expected_exit_code: 2,
        },
        |plan, output| {
            assert!(output.stdout.is_empty());
            assert_eq!(output.status.code(), Some(plan.expected_exit_code));

            let stderr = String::from_utf8_lossy(&output.stderr);
            assert!(stderr.contains("expected ID=NAME"));
        },
    );
}
