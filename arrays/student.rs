//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fmt;
use std::mem;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// student - variable-length student records
#[derive(Parser)]
#[command(version, about = gettext("student - variable-length student records"))]
struct Args {
    #[arg(
        value_parser = parse_record,
        default_values_t = [
            String::from("523=Sanjayulsha"),
            String::from("535=Cherry"),
        ],
        help = gettext("Records to build, as ID=NAME")
    )]
    records: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
enum StudentError {
    #[error("name of {0} bytes does not fit in a student record")]
    NameTooLong(usize),
}

/// Fixed part of a student record.  The name follows it.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StudentHeader {
    stud_id: i32,
    name_len: i32,
    struct_size: i32,
}

const HEADER_SIZE: usize = mem::size_of::<StudentHeader>();

/// A student record whose name storage is sized to the name itself.
///
/// The name is its own exact-size allocation next to the header, not a
/// tail in the same block.  `struct_size` is therefore computed: the size
/// a single header-plus-name block would need, not the size of any one
/// allocation this value holds.
#[derive(Debug)]
struct Student {
    header: StudentHeader,
    stud_name: Box<str>,
}

/// Size in bytes of a record holding a name of `name_len` bytes.
fn struct_size_for(name_len: usize) -> Result<i32, StudentError> {
    HEADER_SIZE
        .checked_add(name_len)
        .and_then(|size| i32::try_from(size).ok())
        .ok_or(StudentError::NameTooLong(name_len))
}

impl Student {
    fn new(stud_id: i32, name: &str) -> Result<Student, StudentError> {
        let struct_size = struct_size_for(name.len())?;

        let name_len =
            i32::try_from(name.len()).map_err(|_| StudentError::NameTooLong(name.len()))?;

        Ok(Student {
            header: StudentHeader {
                stud_id,
                name_len,
                struct_size,
            },
            stud_name: Box::from(name),
        })
    }

    fn id(&self) -> i32 {
        self.header.stud_id
    }

    fn name(&self) -> &str {
        &self.stud_name
    }

    fn name_len(&self) -> i32 {
        self.header.name_len
    }

    fn struct_size(&self) -> i32 {
        self.header.struct_size
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student_id...........: {}", self.id())?;
        writeln!(f, "Stud_Name............: {}", self.name())?;
        writeln!(f, "Name_Length..........: {}", self.name_len())?;
        writeln!(f, "Allocated_Struct_size: {}", self.struct_size())?;
        writeln!(f)
    }
}

/// Validate an ID=NAME operand.
fn parse_record(s: &str) -> Result<String, String> {
    split_record(s).map(|_| s.to_string())
}

fn split_record(s: &str) -> Result<(i32, &str), String> {
    let (id, name) = s
        .split_once('=')
        .ok_or_else(|| format!("{}: {}", gettext("expected ID=NAME"), s))?;

    let id = id
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("{}: {}", id, e))?;

    Ok((id, name))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    let mut students = Vec::with_capacity(args.records.len());
    for record in &args.records {
        let (id, name) = split_record(record)?;

        match Student::new(id, name) {
            Ok(student) => {
                log::debug!("allocated {:?}", student.header);
                students.push(student);
            }
            Err(e) => {
                eprintln!("{}: {}", id, e);
                std::process::exit(1);
            }
        }
    }

    for student in &students {
        print!("{}", student);
    }

    println!("{} {}", gettext("Size of Struct student:"), HEADER_SIZE);
    println!(
        "{} {}",
        gettext("Size of Struct pointer:"),
        mem::size_of::<&Student>()
    );

    Ok(())
}
