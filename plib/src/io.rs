//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead};
use std::os::unix::ffi::OsStringExt;
use std::path::Path;

/// Open `pathname` for reading.  No name is special: "-" is a file
/// called "-", and an empty path fails to open.
pub fn input_file(pathname: &Path) -> io::Result<fs::File> {
    fs::File::open(pathname)
}

/// Read the first whitespace-delimited token from `reader`, the way
/// `scanf("%s")` does.  The bytes are kept as they are, so the token
/// may name a file that is not valid UTF-8.  Empty at end of input.
pub fn read_token<R: BufRead>(reader: &mut R) -> io::Result<OsString> {
    let mut token = Vec::new();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &ch in buf {
            used += 1;
            if ch.is_ascii_whitespace() {
                if !token.is_empty() {
                    done = true;
                    break;
                }
            } else {
                token.push(ch);
            }
        }
        reader.consume(used);

        if done {
            break;
        }
    }

    Ok(OsString::from_vec(token))
}
