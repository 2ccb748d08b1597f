// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Numeric literal text as produced by the scanner.

use std::num::ParseIntError;

/// The scanner consumes digits, `.` and `-` greedily without checking
/// where they appear, so e.g. `1.2.3-4` is one `Float` literal and
/// `4-2` one `Int` literal. Only the integer conversion catches
/// malformed text; floats are never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

impl NumberKind {
    pub fn classify(s: &str) -> NumberKind {
        if s.contains('.') {
            NumberKind::Float
        } else {
            NumberKind::Int
        }
    }
}

pub fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Base-10, must fit into an `i64`.
pub fn parse_int(s: &str) -> Result<i64, ParseIntError> {
    s.parse::<i64>()
}
