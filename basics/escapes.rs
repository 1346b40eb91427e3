//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::io::{self, Write};
use std::iter::Peekable;
use std::str::Chars;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// escapes - list C escape sequences, or translate them
#[derive(Parser)]
#[command(version, about = gettext("escapes - list C escape sequences, or translate them"))]
struct Args {
    #[arg(short = 'n', help = gettext("Do not output the trailing newline"))]
    no_newline: bool,

    #[arg(help = gettext("Strings whose escape sequences are translated"))]
    strings: Vec<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum EscapeError {
    #[error("unknown escape sequence: \\{0}")]
    Unknown(char),

    #[error("\\x used with no following hex digits")]
    MissingHexDigits,

    #[error("escape sequence out of range: \\{0}")]
    OutOfRange(String),

    #[error("trailing backslash")]
    TrailingBackslash,
}

struct Escape {
    seq: &'static str,
    name: &'static str,
    byte: Option<u8>,
}

const ESCAPES: [Escape; 14] = [
    Escape {
        seq: "\\a",
        name: "alarm (beep)",
        byte: Some(0x07),
    },
    Escape {
        seq: "\\b",
        name: "backspace",
        byte: Some(0x08),
    },
    Escape {
        seq: "\\f",
        name: "form feed",
        byte: Some(0x0c),
    },
    Escape {
        seq: "\\n",
        name: "new line",
        byte: Some(b'\n'),
    },
    Escape {
        seq: "\\r",
        name: "carriage return",
        byte: Some(b'\r'),
    },
    Escape {
        seq: "\\t",
        name: "horizontal tab",
        byte: Some(b'\t'),
    },
    Escape {
        seq: "\\v",
        name: "vertical tab",
        byte: Some(0x0b),
    },
    Escape {
        seq: "\\\\",
        name: "backslash",
        byte: Some(b'\\'),
    },
    Escape {
        seq: "\\'",
        name: "single quote",
        byte: Some(b'\''),
    },
    Escape {
        seq: "\\\"",
        name: "double quote",
        byte: Some(b'"'),
    },
    Escape {
        seq: "\\?",
        name: "question mark",
        byte: Some(b'?'),
    },
    Escape {
        seq: "\\ooo",
        name: "octal number",
        byte: None,
    },
    Escape {
        seq: "\\xhh",
        name: "hexadecimal number",
        byte: None,
    },
    Escape {
        seq: "\\0",
        name: "null",
        byte: Some(0),
    },
];

fn simple_escape(ch: char) -> Option<u8> {
    let byte = match ch {
        'a' => 0x07,
        'b' => 0x08,
        'f' => 0x0c,
        'n' => b'\n',
        'r' => b'\r',
        't' => b'\t',
        'v' => 0x0b,
        '\\' => b'\\',
        '\'' => b'\'',
        '"' => b'"',
        '?' => b'?',
        _ => return None,
    };
    Some(byte)
}

/// Consume digits in `radix` (at most `max_digits`) and return the
/// digits seen along with their value.
fn take_digits(chars: &mut Peekable<Chars>, radix: u32, max_digits: usize) -> (String, u32) {
    let mut digits = String::new();
    let mut value: u32 = 0;

    while digits.len() < max_digits {
        let Some(digit) = chars.peek().and_then(|ch| ch.to_digit(radix)) else {
            break;
        };
        digits.push(chars.next().unwrap_or_default());
        value = value.saturating_mul(radix).saturating_add(digit);
    }

    (digits, value)
}

/// Translate the C escape sequences in `s` into the bytes they denote.
fn translate(s: &str) -> Result<Vec<u8>, EscapeError> {
    let mut output = Vec::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    let mut utf8 = [0; 4];

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
            continue;
        }

        let Some(&next) = chars.peek() else {
            return Err(EscapeError::TrailingBackslash);
        };

        if let Some(byte) = simple_escape(next) {
            chars.next();
            output.push(byte);
        } else if next.is_digit(8) {
            let (digits, value) = take_digits(&mut chars, 8, 3);
            let byte = u8::try_from(value).map_err(|_| EscapeError::OutOfRange(digits))?;
            output.push(byte);
        } else if next == 'x' {
            chars.next();
            let (digits, value) = take_digits(&mut chars, 16, usize::MAX);
            if digits.is_empty() {
                return Err(EscapeError::MissingHexDigits);
            }
            let byte = u8::try_from(value)
                .map_err(|_| EscapeError::OutOfRange(format!("x{}", digits)))?;
            output.push(byte);
        } else {
            return Err(EscapeError::Unknown(next));
        }
    }

    Ok(output)
}

fn print_table() {
    for escape in &ESCAPES {
        let value = match escape.byte {
            Some(byte) => format!("0x{:02x}", byte),
            None => String::from("-"),
        };
        println!("{:<6}{:<20}{}", escape.seq, gettext(escape.name), value);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    if args.strings.is_empty() {
        print_table();
        return Ok(());
    }

    let mut output = Vec::new();
    for (i, s) in args.strings.iter().enumerate() {
        if i > 0 {
            output.push(b' ');
        }

        match translate(s) {
            Ok(bytes) => output.extend(bytes),
            Err(e) => {
                eprintln!("escapes: {}", e);
                std::process::exit(1);
            }
        }
    }
    if !args.no_newline {
        output.push(b'\n');
    }

    log::debug!("translated {} bytes", output.len());
    io::stdout().write_all(&output)?;

    Ok(())
}
