//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// cstd - the largest int, and the phases of compilation
#[derive(Parser)]
#[command(version, about = gettext("cstd - the largest int, and the phases of compilation"))]
struct Args {
    #[arg(short, long, help = gettext("List the phases of compilation"))]
    phases: bool,
}

struct Phase {
    name: &'static str,
    output: &'static str,
    description: &'static str,
}

const PHASES: [Phase; 4] = [
    Phase {
        name: "Pre-processing",
        output: "filename.i",
        description: "removes comments, expands macros and included files, \
                      resolves conditional compilation",
    },
    Phase {
        name: "Compilation",
        output: "filename.s",
        description: "produces assembly level instructions",
    },
    Phase {
        name: "Assembly",
        output: "filename.o",
        description: "produces machine level instructions",
    },
    Phase {
        name: "Linking",
        output: "executable",
        description: "resolves references and adds the needed code",
    },
];

/// Binary digits of `value`, most significant first, in groups of four
/// separated by '_'.
fn grouped_binary(value: u32) -> String {
    let digits = format!("{:032b}", value);

    digits
        .as_bytes()
        .chunks(4)
        .map(|nibble| std::str::from_utf8(nibble).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("_")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    if args.phases {
        println!("{}", gettext("Phases of compilation:"));
        for (i, phase) in PHASES.iter().enumerate() {
            println!(
                "{}. {} ({}): {}",
                i + 1,
                gettext(phase.name),
                phase.output,
                gettext(phase.description)
            );
        }
    }

    let max_integer = i32::MAX;
    println!("{} {}", gettext("Largest int:"), max_integer);
    println!("{} {}", gettext("Binary.....:"), grouped_binary(max_integer as u32));

    Ok(())
}
