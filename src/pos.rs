// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


use std::cmp::Eq;

/// Both line and offset are zero based. `offset` counts the
/// characters already consumed on the current line, i.e. it is the
/// offset *after* the most recently read character.

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Pos {
    pub line: u32,
    pub offset: u32,
}

impl Pos {
    /// The position following character `c` read at `self`.
    pub fn after(self, c: char) -> Pos {
        if c == '\n' {
            Pos { line: self.line + 1, offset: 0 }
        } else {
            Pos { line: self.line, offset: self.offset + 1 }
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_fmt(format_args!("({}:{})", self.line, self.offset))
    }
}
