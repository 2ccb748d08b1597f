// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Translating a character stream into classified tokens. Tokens do
//! not carry their text; `Scanner::scan` returns it alongside. String
//! bodies are not tokenized here: after a `Token::Quote` the string
//! node reads the raw characters itself via `Scanner::read_char`.

use crate::number::{NumberKind, is_number_char};
use crate::parse::{ParseError, ParseErrorWithPos};
use crate::pos::Pos;
use kstring::KString;
use std::iter::Fuse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Eof,
    Whitespace,
    ParenOpen,
    ParenClose,
    Plus,
    Minus,
    Mult,
    Div,
    Comment,
    /// Part of the token set, but no rule produces it: a leading `:`
    /// scans as `Illegal`, a later one is part of an identifier.
    Colon,
    Quote,
    Int,
    Float,
    Nil,
    True,
    False,
    Literal,
    Illegal,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(match self {
            Token::Eof => "EOF",
            Token::Whitespace => "WS",
            Token::ParenOpen => "PAREN_OPEN",
            Token::ParenClose => "PAREN_CLOSE",
            Token::Plus => "PLUS",
            Token::Minus => "MINUS",
            Token::Mult => "MULT",
            Token::Div => "DIV",
            Token::Comment => "COMMENT",
            Token::Colon => "COLON",
            Token::Quote => "QUOTE",
            Token::Int => "INT",
            Token::Float => "FLOAT",
            Token::Nil => "NIL",
            Token::True => "TRUE",
            Token::False => "FALSE",
            Token::Literal => "LITERAL",
            Token::Illegal => "ILLEGAL",
        })
    }
}

pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r' || c == ','
}

fn is_special(c: char) -> bool {
    c == '(' || c == ')'
}

fn is_ident_char(c: char) -> bool {
    !is_whitespace(c) && !is_special(c)
}

fn keyword(s: &str) -> Option<Token> {
    if s.eq_ignore_ascii_case("nil") {
        Some(Token::Nil)
    } else if s.eq_ignore_ascii_case("true") {
        Some(Token::True)
    } else if s.eq_ignore_ascii_case("false") {
        Some(Token::False)
    } else {
        None
    }
}

pub struct Scanner<I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    cs: Fuse<I>,
    pos: Pos,
    // the most recently read character, so that it can be unread
    last: Option<(char, Pos)>,
    unread: Option<(char, Pos)>,
}

impl<I> Scanner<I>
    where I: Iterator<Item = anyhow::Result<(char, Pos)>>
{
    pub fn new(cs: I) -> Scanner<I> {
        Scanner {
            cs: cs.fuse(),
            pos: Pos::default(),
            last: None,
            unread: None,
        }
    }

    /// The position after the most recently read character.
    pub fn pos(&self) -> Pos {
        self.pos
    }

    /// Read the next raw character, `None` at the end of input.
    pub fn read_char(&mut self) -> Result<Option<char>, ParseErrorWithPos> {
        let cp = match self.unread.take() {
            Some(cp) => Some(cp),
            None => match self.cs.next() {
                Some(Ok(cp)) => Some(cp),
                Some(Err(e)) => return Err(ParseError::IOError(e).at(self.pos)),
                None => None,
            }
        };
        self.last = cp;
        Ok(cp.map(|(c, pos)| {
            self.pos = pos.after(c);
            c
        }))
    }

    /// Push back the character returned by the last `read_char`; a
    /// no-op after reaching the end of input.
    fn unread_char(&mut self) {
        if let Some((c, pos)) = self.last.take() {
            self.pos = pos;
            self.unread = Some((c, pos));
        }
    }

    // Collect `first` and all following characters satisfying
    // `accepted`; the first character that doesn't is left unread.
    fn scan_while(
        &mut self,
        first: char,
        accepted: fn(char) -> bool,
    ) -> Result<String, ParseErrorWithPos> {
        let mut out = String::new();
        out.push(first);
        while let Some(c) = self.read_char()? {
            if accepted(c) {
                out.push(c);
            } else {
                self.unread_char();
                break;
            }
        }
        Ok(out)
    }

    fn scan_number(&mut self, first: char)
                   -> Result<(Token, KString), ParseErrorWithPos> {
        let s = self.scan_while(first, is_number_char)?;
        let tok = match NumberKind::classify(&s) {
            NumberKind::Int => Token::Int,
            NumberKind::Float => Token::Float,
        };
        Ok((tok, KString::from_string(s)))
    }

    fn scan_ident(&mut self, first: char)
                  -> Result<(Token, KString), ParseErrorWithPos> {
        let s = self.scan_while(first, is_ident_char)?;
        let tok = keyword(&s).unwrap_or(Token::Literal);
        Ok((tok, KString::from_string(s)))
    }

    // `;` up to the end of the line; the newline itself is left for
    // the next whitespace token. The literal excludes the `;`.
    fn scan_comment(&mut self) -> Result<(Token, KString), ParseErrorWithPos> {
        let mut out = String::new();
        while let Some(c) = self.read_char()? {
            if c == '\n' {
                self.unread_char();
                break;
            }
            out.push(c);
        }
        Ok((Token::Comment, KString::from_string(out)))
    }

    // A `-` is a negative number if a digit follows, the minus symbol
    // if whitespace or the end of input follows, and the start of an
    // identifier otherwise.
    fn scan_minus(&mut self) -> Result<(Token, KString), ParseErrorWithPos> {
        match self.read_char()? {
            Some(c) if c.is_ascii_digit() => {
                self.unread_char();
                self.scan_number('-')
            }
            Some(c) if is_whitespace(c) => {
                self.unread_char();
                Ok((Token::Minus, KString::from_static("-")))
            }
            None => Ok((Token::Minus, KString::from_static("-"))),
            Some(_) => {
                self.unread_char();
                self.scan_ident('-')
            }
        }
    }

    pub fn scan(&mut self) -> Result<(Token, KString), ParseErrorWithPos> {
        let c = match self.read_char()? {
            Some(c) => c,
            None => return Ok((Token::Eof, KString::from_static(""))),
        };
        if is_whitespace(c) {
            let s = self.scan_while(c, is_whitespace)?;
            return Ok((Token::Whitespace, KString::from_string(s)));
        }
        if c.is_ascii_digit() {
            return self.scan_number(c);
        }
        if c.is_ascii_alphabetic() {
            return self.scan_ident(c);
        }
        let tok = match c {
            '(' => Token::ParenOpen,
            ')' => Token::ParenClose,
            '+' => Token::Plus,
            '*' => Token::Mult,
            '/' => Token::Div,
            '"' => Token::Quote,
            ';' => return self.scan_comment(),
            '-' => return self.scan_minus(),
            _ => Token::Illegal,
        };
        Ok((tok, KString::from_string(c.to_string())))
    }
}
