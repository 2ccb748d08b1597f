// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Entry points for callers that have one unit of input (typically
//! one line) and want back at most one node.

use crate::buffered_chars::buffered_chars;
use crate::node::Node;
use crate::parse::{Parser, ParseErrorWithPos};
use crate::settings::{Settings, DEFAULT_SETTINGS};
use std::io::{Read, Write};

/// Parse the first form in `fh`; anything after it is ignored.
/// `Ok(None)` for empty input (or input starting with `)`).
pub fn read_one(
    fh: impl Read,
    settings: &Settings,
) -> Result<Option<Node>, ParseErrorWithPos>
{
    let mut p = Parser::new(buffered_chars(fh), settings);
    p.parse()
}

pub fn read_str(s: &str) -> Result<Option<Node>, ParseErrorWithPos> {
    read_one(s.as_bytes(), &DEFAULT_SETTINGS)
}

pub fn write_node(
    out: impl Write,
    node: &Node,
) -> Result<(), std::io::Error> {
    let mut out = out; // for `File`
    writeln!(out, "{}", node)
}
