//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

use std::fmt;

use clap::Parser;
use gettextrs::{bind_textdomain_codeset, gettext, setlocale, textdomain, LocaleCategory};
use plib::PROJECT_NAME;

/// quadratic - solve a*x^2 + b*x + c = 0
#[derive(Parser)]
#[command(
    version,
    allow_negative_numbers = true,
    about = gettext("quadratic - solve a*x^2 + b*x + c = 0")
)]
struct Args {
    #[arg(default_value_t = 1.0, help = gettext("Coefficient of x^2"))]
    a: f64,

    #[arg(default_value_t = -4.0, help = gettext("Coefficient of x"))]
    b: f64,

    #[arg(default_value_t = 3.9999999, help = gettext("Constant term"))]
    c: f64,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum SolveError {
    #[error("coefficients must be finite numbers")]
    NotFinite,

    #[error("a and b are both zero, there is nothing to solve")]
    Degenerate,

    #[error("coefficients too large, the roots overflow")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Roots {
    /// Two real roots, equal when the discriminant is zero.
    Real(f64, f64),
    /// The conjugate pair re ± im·i, with im > 0.
    Complex { re: f64, im: f64 },
    /// a is zero: b*x + c = 0.
    Linear(f64),
}

impl fmt::Display for Roots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Roots::Real(r1, r2) => write!(f, "{:.6} & {:.6}", r1, r2),
            Roots::Complex { re, im } => {
                write!(f, "{:.6}+{:.6}i & {:.6}-{:.6}i", re, im, re, im)
            }
            Roots::Linear(r) => write!(f, "{:.6}", r),
        }
    }
}

impl Roots {
    fn is_finite(&self) -> bool {
        match *self {
            Roots::Real(r1, r2) => r1.is_finite() && r2.is_finite(),
            Roots::Complex { re, im } => re.is_finite() && im.is_finite(),
            Roots::Linear(r) => r.is_finite(),
        }
    }
}

fn solve(a: f64, b: f64, c: f64) -> Result<Roots, SolveError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(SolveError::NotFinite);
    }

    let roots = if a == 0.0 {
        if b == 0.0 {
            return Err(SolveError::Degenerate);
        }
        Roots::Linear(-c / b)
    } else {
        let d = b * b - 4.0 * a * c;
        log::debug!("discriminant of ({}, {}, {}) is {}", a, b, c, d);

        if !d.is_finite() {
            return Err(SolveError::Overflow);
        }

        if d < 0.0 {
            let re = -b / (2.0 * a);
            let im = ((-d).sqrt() / (2.0 * a)).abs();
            Roots::Complex { re, im }
        } else {
            let sd = d.sqrt();
            let r1 = (-b + sd) / (2.0 * a);
            let r2 = (-b - sd) / (2.0 * a);
            Roots::Real(r1, r2)
        }
    };

    // a tiny leading coefficient can still push a root past f64::MAX
    if !roots.is_finite() {
        return Err(SolveError::Overflow);
    }

    Ok(roots)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    setlocale(LocaleCategory::LcAll, "");
    textdomain(PROJECT_NAME)?;
    bind_textdomain_codeset(PROJECT_NAME, "UTF-8")?;

    let args = Args::parse();

    match solve(args.a, args.b, args.c) {
        Ok(roots) => println!("{}", roots),
        Err(e) => {
            eprintln!("quadratic: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
