//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use chrono::Local;
use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// macros - what macro expansion does with its arguments
#[derive(Parser)]
#[command(version, about = gettext("macros - what macro expansion does with its arguments"))]
struct Args {
    #[arg(
        short,
        long,
        help = gettext("Also show multiplication over unparenthesised tokens")
    )]
    unhygienic: bool,
}

/// One step forward: the next integer, or the string without its first
/// character (a char pointer after `++`).
trait Step {
    fn step(self) -> Self;
}

impl Step for i32 {
    fn step(self) -> Self {
        self + 1
    }
}

impl Step for &str {
    fn step(self) -> Self {
        let mut chars = self.chars();
        chars.next();
        chars.as_str()
    }
}

/// Pre-increment: the argument must be a place, and the new value is
/// the result.  Works on any type implementing `Step`.
macro_rules! increment {
    ($x:ident) => {{
        $x = Step::step($x);
        $x
    }};
}

/// Each argument is parsed as a whole expression before substitution,
/// so `multiply!(9, 7 + 3)` is 9 * (7 + 3).
macro_rules! multiply {
    ($a:expr, $b:expr) => {
        $a * $b
    };
}

/// Loose tokens are re-parsed after substitution, as in a C macro
/// without parentheses: `multiply_tokens!(9, 7 + 3)` is 9 * 7 + 3.
macro_rules! multiply_tokens {
    ($a:tt, $($b:tt)+) => {
        $a * $($b)+
    };
}

/// No token pasting in macro_rules; literals can still be joined.
macro_rules! merge {
    ($a:literal, $b:literal) => {
        concat!($a, $b)
    };
}

macro_rules! to_str {
    ($($s:tt)*) => {
        stringify!($($s)*)
    };
}

/// A loop spanning several statements.
macro_rules! print_while {
    ($i:ident, $limit:expr) => {
        while {
            let old = $i;
            $i += 1;
            old < $limit
        } {
            print!("Macro! ");
            println!();
        }
    };
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    let mut pointer = "Example";
    let mut x: i32 = 10;

    println!("{}", increment!(pointer));
    println!("{}", increment!(x));

    println!("{}", multiply!(9, 7 + 3));
    if args.unhygienic {
        println!(
            "{} = {}",
            stringify!(9 * 7 + 3),
            multiply_tokens!(9, 7 + 3)
        );
    }

    println!("{}", merge!(3, 7));

    println!("{}", to_str!(Example));

    let mut a = 0;
    print_while!(a, 3);
    log::debug!("a after loop: {}", a);

    let now = Local::now();
    println!("{} {}", gettext("Current File:"), file!());
    println!("{} {}", gettext("Current Date:"), now.format("%b %e %Y"));
    println!("{} {}", gettext("Current Time:"), now.format("%H:%M:%S"));
    println!("{} {}", gettext("Line Number :"), line!());

    Ok(())
}
