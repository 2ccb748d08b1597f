// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! The syntax tree built by the parser. Every node renders to its
//! canonical text via `Display`; re-reading that text gives back an
//! equivalent node, except for comments and generic literals which
//! are passed through as raw text.

use crate::number::parse_int;
use crate::parse::{ParseError, ParseErrorWithPos};
use crate::pos::Pos;
use crate::scan::Scanner;
use kstring::KString;
use std::fmt::Write;
use std::num::ParseIntError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    List(Vec<Node>),
    /// `raw` is the source text, `value` its base-10 reading.
    IntLiteral { value: i64, raw: KString },
    /// Unescaped content.
    StringLiteral(KString),
    /// `+`, `-`, `*` or `/`; `:` never reaches here (see `Token::Colon`).
    Symbol(KString),
    /// `nil`, `true` or `false`, in the case it was written.
    Basic(KString),
    GenericLiteral(KString),
    /// The text after the `;`.
    Comment(KString),
}

impl Node {
    pub fn int_literal(raw: KString) -> Result<Node, ParseIntError> {
        let value = parse_int(&raw)?;
        Ok(Node::IntLiteral { value, raw })
    }

    /// Read the body of a string whose opening `"` has just been
    /// scanned, up to and including the closing `"`.
    pub fn string_literal<I>(s: &mut Scanner<I>)
                             -> Result<Node, ParseErrorWithPos>
        where I: Iterator<Item = anyhow::Result<(char, Pos)>>
    {
        let mut out = String::new();
        loop {
            match s.read_char()? {
                None => return Err(ParseError::UnterminatedString.at(s.pos())),
                Some('"') => return Ok(Node::StringLiteral(KString::from_string(out))),
                Some('\\') => match s.read_char()? {
                    Some('n') => out.push('\n'),
                    Some('"') => out.push('"'),
                    Some('\\') => out.push('\\'),
                    Some(c) => return Err(ParseError::InvalidEscape(c).at(s.pos())),
                    None => return Err(ParseError::UnterminatedString.at(s.pos())),
                },
                Some(c) => out.push(c),
            }
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::List(children) => children,
            _ => &[],
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::List(_) => "list",
            Node::IntLiteral { .. } => "int",
            Node::StringLiteral(_) => "string",
            Node::Symbol(_) => "symbol",
            Node::Basic(_) => "basic",
            Node::GenericLiteral(_) => "literal",
            Node::Comment(_) => "comment",
        }
    }
}

fn fmt_string(f: &mut std::fmt::Formatter<'_>, s: &str)
              -> Result<(), std::fmt::Error> {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '"' | '\\' => {
                f.write_char('\\')?;
                f.write_char(c)?
            }
            _ => f.write_char(c)?
        }
    }
    f.write_char('"')
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Node::List(children) => {
                // `(  )` when empty
                f.write_str("( ")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    child.fmt(f)?;
                }
                f.write_str(" )")
            }
            Node::IntLiteral { raw, .. } => f.write_str(raw),
            Node::StringLiteral(s) => fmt_string(f, s),
            Node::Symbol(s) => f.write_str(s),
            Node::Basic(s) => f.write_str(&s.to_ascii_uppercase()),
            Node::GenericLiteral(s) => f.write_str(s),
            Node::Comment(s) => {
                f.write_char(';')?;
                f.write_str(s)
            }
        }
    }
}
