//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::sync::atomic::{AtomicI32, Ordering};

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// storage - lifetime and linkage of globals, statics and constants
#[derive(Parser)]
#[command(
    version,
    about = gettext("storage - lifetime and linkage of globals, statics and constants")
)]
struct Args {}

// Globals live for the whole program and are visible to every function
// in the module.  Mutation goes through atomics.
static X: AtomicI32 = AtomicI32::new(9);

// No implicit zero-initialization; the default is spelled out.
static Z: AtomicI32 = AtomicI32::new(0);

const A: i32 = 37;

fn func() -> i32 {
    Z.load(Ordering::Relaxed)
}

/// Increment and return a counter that keeps its value between calls.
fn next_y() -> i32 {
    static Y: AtomicI32 = AtomicI32::new(5);
    Y.fetch_add(1, Ordering::Relaxed) + 1
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    Args::parse();

    println!("X: {}", X.load(Ordering::Relaxed));
    X.store(2, Ordering::Relaxed);
    println!("X: {}", X.load(Ordering::Relaxed));

    Z.store(5, Ordering::Relaxed);

    println!("Z: {}", func());
    println!("Z: {}", Z.load(Ordering::Relaxed));
    println!("a: {}", A);

    // while (x-- > 0): compare the old value, then decrement
    while X.fetch_sub(1, Ordering::Relaxed) > 0 {
        println!("{} {}", gettext("The value of y is"), next_y());
    }

    log::debug!("x ends at {}", X.load(Ordering::Relaxed));

    Ok(())
}
