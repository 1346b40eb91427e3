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

/// parity - tell whether a number is even, then count up to a limit
#[derive(Parser)]
#[command(
    version,
    allow_negative_numbers = true,
    about = gettext("parity - tell whether a number is even, then count up to a limit")
)]
struct Args {
    #[arg(
        short,
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..),
        help = gettext("Last number to print")
    )]
    limit: u32,

    #[arg(default_value_t = 26, help = gettext("Number to check"))]
    number: i64,
}

fn even_or_odd(num: i64) -> String {
    if num % 2 == 0 {
        format!("{} {}", num, gettext("is even."))
    } else {
        format!("{} {}", num, gettext("is odd."))
    }
}

/// "1, 2, ..., limit"
fn number_list(limit: u32) -> String {
    (1..=limit)
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();
    log::debug!("number={} limit={}", args.number, args.limit);

    println!("{}", even_or_odd(args.number));
    println!("{}", number_list(args.limit));

    Ok(())
}
