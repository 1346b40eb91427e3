//
// Copyright (c) 2024 cstudy-rs contributors
//
// This file is part of the cstudy-rs project covered under
// the MIT License.  For the full license text, please see the LICENSE
// file in the root directory of this project.
// SPDX-License-Identifier: MIT
//

pub mod io;
pub mod testing;

pub const PROJECT_NAME: &str = "cstudy-rs";

pub const BUFSZ: usize = 8 * 1024;

pub use testing::*;
