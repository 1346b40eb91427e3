//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{thread, time};

use chrono::Local;
use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// elapsed - measure the wall-clock time of a sleep loop
#[derive(Parser)]
#[command(version, about = gettext("elapsed - measure the wall-clock time of a sleep loop"))]
struct Args {
    #[arg(
        default_value_t = 6,
        value_parser = clap::value_parser!(u64).range(0..=3600),
        help = gettext("Number of one-second sleeps")
    )]
    seconds: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    let start = Local::now();
    for sec in 1..=args.seconds {
        thread::sleep(time::Duration::from_secs(1));
        log::trace!("slept {}s", sec);
    }
    let end = Local::now();

    let difference = end.signed_duration_since(start);
    log::debug!("measured {:?}", difference);

    // whole seconds, as time(2) reports
    println!(
        "{} {:.2} {}",
        gettext("Difference is"),
        difference.num_seconds() as f64,
        gettext("second(s).")
    );

    Ok(())
}
