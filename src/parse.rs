// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Building one syntax node per call from the token stream. The
//! parser holds back at most one token, which is how a nested parse
//! leaves a closing paren for the enclosing list to consume.

use crate::node::Node;
use crate::pos::Pos;
use crate::scan::{Scanner, Token};
use crate::settings::Settings;
use kstring::KString;
use std::num::ParseIntError;
use thiserror::Error;
use tracing::{debug, trace};

// Messages are worded after the sl front end; the position is always
// appended by `ParseErrorWithPos` rather than placed inside the text.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error ({0}) after")]
    IOError(anyhow::Error),
    #[error("Invalid token \"{0}\"")]
    IllegalToken(KString),
    #[error("Invalid INT literal: {0}")]
    InvalidIntLiteral(ParseIntError),
    #[error("Invalid STRING. Missing closing '\"'")]
    UnterminatedString,
    #[error("Invalid escaped STRING character \"{0}\". \
             Only \\n, \\\", and \\\\ are allowed.")]
    InvalidEscape(char),
    #[error("Invalid list. Missing closing parens \")\"")]
    UnterminatedList,
    #[error("Invalid list. Nesting too deep")]
    NestingTooDeep,
}

#[derive(Error, Debug)]
#[error("{err} {pos}")]
pub struct ParseErrorWithPos {
    pub err: ParseError,
    pub pos: Pos
}

impl ParseError {
    pub fn at(self, p: Pos) -> ParseErrorWithPos {
        ParseErrorWithPos {
            err: self,
            pos: p
        }
    }
}

pub struct Parser<I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    s: Scanner<I>,
    held: Option<(Token, KString)>,
    settings: Settings,
    depth: u32,
}

impl<I> Parser<I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    pub fn new(cs: I, settings: &Settings) -> Parser<I> {
        Parser {
            s: Scanner::new(cs),
            held: None,
            settings: *settings,
            depth: 0,
        }
    }

    /// True if the last `parse` returned no node because it hit a
    /// `)`; at the top level that paren has no opening counterpart.
    pub fn pending_close(&self) -> bool {
        matches!(self.held, Some((Token::ParenClose, _)))
    }

    fn scan(&mut self) -> Result<(Token, KString), ParseErrorWithPos> {
        if let Some(t) = self.held.take() {
            return Ok(t)
        }
        self.s.scan()
    }

    fn unscan(&mut self, tok: Token, lit: KString) {
        debug_assert!(self.held.is_none(), "can only hold back one token");
        self.held = Some((tok, lit));
    }

    fn scan_ignore_whitespace(&mut self)
                              -> Result<(Token, KString), ParseErrorWithPos> {
        loop {
            let (tok, lit) = self.scan()?;
            match tok {
                Token::Whitespace => {}
                Token::Comment if !self.settings.keep_comments => {}
                _ => return Ok((tok, lit))
            }
        }
    }

    /// Parse the next form. `Ok(None)` means the end of input was
    /// reached, or a `)` was found (see `pending_close`).
    pub fn parse(&mut self) -> Result<Option<Node>, ParseErrorWithPos> {
        let (tok, lit) = self.scan_ignore_whitespace()?;
        trace!(token = %tok, lit = lit.as_str(), "dispatch");
        let node = match tok {
            Token::Eof => return Ok(None),
            Token::Nil | Token::True | Token::False => Node::Basic(lit),
            Token::Plus | Token::Minus | Token::Mult | Token::Div =>
                Node::Symbol(lit),
            Token::Int => Node::int_literal(lit)
                .map_err(|e| ParseError::InvalidIntLiteral(e).at(self.s.pos()))?,
            Token::Comment => Node::Comment(lit),
            Token::Quote => Node::string_literal(&mut self.s)?,
            Token::Literal => Node::GenericLiteral(lit),
            Token::ParenOpen => self.parse_list()?,
            Token::ParenClose => {
                self.unscan(tok, lit);
                return Ok(None)
            }
            Token::Whitespace | Token::Colon | Token::Float | Token::Illegal =>
                return Err(ParseError::IllegalToken(lit).at(self.s.pos())),
        };
        Ok(Some(node))
    }

    fn parse_list(&mut self) -> Result<Node, ParseErrorWithPos> {
        if self.depth >= self.settings.depth_fuel {
            return Err(ParseError::NestingTooDeep.at(self.s.pos()))
        }
        self.depth += 1;
        let r = self.parse_list_items();
        self.depth -= 1;
        r
    }

    fn parse_list_items(&mut self) -> Result<Node, ParseErrorWithPos> {
        let mut children = Vec::new();
        while let Some(child) = self.parse()? {
            children.push(child);
        }
        // `parse` returned no node, either at the end of input or
        // after holding back a token that must be our `)`.
        let (tok, _) = self.scan_ignore_whitespace()?;
        if tok == Token::ParenClose {
            debug!(depth = self.depth, len = children.len(), "list complete");
            Ok(Node::List(children))
        } else {
            Err(ParseError::UnterminatedList.at(self.s.pos()))
        }
    }
}
