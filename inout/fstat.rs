//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::{
    io::{self, Read, Write},
    ops::AddAssign,
    path::{Path, PathBuf},
};

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::io::{input_file, read_token};
use plib::{BUFSZ, PROJECT_NAME};

/// fstat - count the characters, words and lines of a text file
#[derive(Parser)]
#[command(
    version,
    about = gettext("fstat - count the characters, words and lines of a text file")
)]
struct Args {
    #[arg(
        short = 'L',
        long,
        help = gettext("Count one word per separator byte instead of per run of non-separators")
    )]
    legacy: bool,

    #[arg(help = gettext("Files to read; when omitted, a path is read from standard input"))]
    files: Vec<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum CountError {
    #[error("{}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CountInfo {
    chars: usize,
    words: usize,
    lines: usize,
}

impl AddAssign for CountInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.chars += rhs.chars;
        self.words += rhs.words;
        self.lines += rhs.lines;
    }
}

/// word separators: space, tab, newline, NUL
const fn create_table() -> [bool; 256] {
    let mut table = [false; 256];
    table[0] = true;
    table[b'\t' as usize] = true;
    table[b'\n' as usize] = true;
    table[b' ' as usize] = true;
    table
}

const SEPARATOR_TABLE: [bool; 256] = create_table();

/// Counter state for one input.  The separator flag carries across
/// buffer boundaries so a word split between two reads is counted once.
struct Counter {
    count: CountInfo,
    legacy: bool,
    was_sep: bool,
}

impl Counter {
    fn new(legacy: bool) -> Self {
        Counter {
            count: CountInfo::default(),
            legacy,
            was_sep: true,
        }
    }

    fn update(&mut self, buf: &[u8]) {
        self.count.chars += buf.len();

        for &ch in buf {
            let is_sep = SEPARATOR_TABLE[ch as usize];

            self.count.lines += (ch == b'\n' || ch == 0) as usize;

            if self.legacy {
                self.count.words += is_sep as usize;
            } else {
                self.count.words += (!is_sep && self.was_sep) as usize;
            }

            self.was_sep = is_sep;
        }
    }

    fn finish(self) -> CountInfo {
        self.count
    }
}

fn count_file(pathname: &Path, legacy: bool) -> Result<CountInfo, CountError> {
    let mut file = input_file(pathname).map_err(|source| CountError::Open {
        path: pathname.to_path_buf(),
        source,
    })?;

    log::debug!("counting {}", pathname.display());

    let mut counter = Counter::new(legacy);
    let mut buffer = [0; BUFSZ];

    loop {
        let n_read = file.read(&mut buffer[..]).map_err(|source| CountError::Read {
            path: pathname.to_path_buf(),
            source,
        })?;
        if n_read == 0 {
            break;
        }

        counter.update(&buffer[..n_read]);
    }

    let count = counter.finish();
    log::debug!("{}: {:?}", pathname.display(), count);

    Ok(count)
}

fn print_counts(heading: &str, count: &CountInfo) {
    println!("{}", heading);
    println!("{} {}", gettext("Characters:"), count.chars);
    println!("{} {}", gettext("Words.....:"), count.words);
    println!("{} {}", gettext("Lines.....:"), count.lines);
}

/// Ask for a path on stdout and read it from stdin.
fn prompt_path() -> io::Result<PathBuf> {
    print!("{}", gettext("Enter text file path: "));
    io::stdout().flush()?;

    let token = read_token(&mut io::stdin().lock())?;
    Ok(PathBuf::from(token))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let mut args = Args::parse();

    if args.files.is_empty() {
        args.files.push(prompt_path()?);
    }

    let multi_file = args.files.len() > 1;
    let mut totals = CountInfo::default();

    for filename in &args.files {
        let count = match count_file(filename, args.legacy) {
            Ok(count) => count,
            Err(e @ CountError::Open { .. }) => {
                log::debug!("{}", e);
                println!();
                println!("{}", gettext("Unable to open file."));
                println!(
                    "{}",
                    gettext("Please check if file exists and you have read privilege.")
                );
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        };

        if multi_file {
            println!("{}:", filename.display());
        }
        print_counts(&gettext("Informations..."), &count);

        totals += count;
    }

    if multi_file {
        print_counts(&gettext("Totals..."), &totals);
    }

    Ok(())
}
