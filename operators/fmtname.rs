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

/// fmtname - write a full name as "Surname, Given names"
#[derive(Parser)]
#[command(
    version,
    about = gettext("fmtname - write a full name as \"Surname, Given names\"")
)]
struct Args {
    #[arg(
        default_value = "Nome Prefixo Nome_do_meio Sufixo Sobrenome",
        help = gettext("Full name, words separated by spaces")
    )]
    name: String,
}

/// Move the last space-separated word to the front, followed by a comma.
fn format_name(name: &str) -> String {
    let name = name.trim();

    match name.rsplit_once(' ') {
        Some((rest, surname)) => format!("{}, {}", surname, rest.trim_end()),
        None => name.to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    log::debug!("formatting {:?}", args.name);
    println!("{}", format_name(&args.name));

    Ok(())
}
