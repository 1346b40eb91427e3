//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// oddfind - find the value that occurs an odd number of times
#[derive(Parser)]
#[command(
    version,
    allow_negative_numbers = true,
    about = gettext("oddfind - find the value that occurs an odd number of times")
)]
struct Args {
    #[arg(
        short,
        long,
        help = gettext("Verify that exactly one value occurs an odd number of times")
    )]
    check: bool,

    #[arg(
        default_values_t = [12, 12, 14, 90, 14, 14, 14],
        help = gettext("Values to search")
    )]
    values: Vec<i32>,
}

/// XOR of every value.  Pairs cancel out, so when exactly one value
/// occurs an odd number of times, that value is what remains.
fn find_odd(values: &[i32]) -> i32 {
    values.iter().fold(0, |res, v| res ^ v)
}

/// Values occurring an odd number of times, in ascending order.
fn odd_occurrences(values: &[i32]) -> Vec<i32> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(*v).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, n)| n % 2 == 1)
        .map(|(v, _)| v)
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    if args.check {
        let odd = odd_occurrences(&args.values);
        log::debug!("odd occurrences: {:?}", odd);

        if odd.len() != 1 {
            let listed: Vec<String> = odd.iter().map(|v| v.to_string()).collect();
            eprintln!(
                "oddfind: {} ({})",
                gettext("expected exactly one value occurring an odd number of times"),
                listed.join(", ")
            );
            std::process::exit(1);
        }
    }

    println!(
        "{} {}",
        gettext("The odd occurring element is"),
        find_odd(&args.values)
    );

    Ok(())
}
