// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Line-oriented front end: every line of stdin is parsed on its own
//! and echoed back in canonical form.

use sl::buffered_chars::buffered_chars;
use sl::parse::Parser;
use sl::read::write_node;
use sl::scan::{Scanner, Token};
use sl::settings::{Settings, DEFAULT_SETTINGS};
use clap::Parser as ClapParser;
use std::io::{stdin, stdout, BufRead, IsTerminal, Write};
use anyhow::{Context, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const PROMPT: &str = "sl> ";

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Print the variant-tagged tree instead of the canonical form
    #[clap(long, value_parser)]
    dump: bool,
    /// Print the tokens of each line instead of parsing it
    #[clap(long, value_parser)]
    tokens: bool,
    /// Skip comments instead of echoing them
    #[clap(long, value_parser)]
    skip_comments: bool,
    /// Maximum nesting depth of lists
    #[clap(long, value_parser, default_value_t = DEFAULT_SETTINGS.depth_fuel)]
    depth: u32,
    /// Don't print the prompt (it is only shown when stdin is a terminal)
    #[clap(short, long, value_parser)]
    quiet: bool,
}

// No prompt when input is piped in.
fn wants_prompt(quiet: bool, interactive: bool) -> bool {
    interactive && !quiet
}

fn print_tokens(out: &mut impl Write, line: &str) -> Result<()> {
    let mut s = Scanner::new(buffered_chars(line.as_bytes()));
    loop {
        match s.scan() {
            Err(e) => {
                eprintln!("{e}");
                return Ok(())
            }
            Ok((Token::Eof, _)) => return Ok(()),
            Ok((tok, lit)) => writeln!(out, "{} {:?} {}", tok, lit.as_str(), s.pos())?,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env()
                         .unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let settings = Settings {
        depth_fuel: args.depth,
        keep_comments: !args.skip_comments,
    };

    let stdin = stdin();
    let prompt = wants_prompt(args.quiet, stdin.is_terminal());
    let mut input = stdin.lock();
    let stdout = stdout();
    let mut out = stdout.lock();
    let mut buf = String::new();
    loop {
        if prompt {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        buf.clear();
        if input.read_line(&mut buf).context("error on input")? == 0 {
            return Ok(())
        }
        let line = buf.trim_end_matches(|c: char| c == '\n' || c == '\r');

        if args.tokens {
            print_tokens(&mut out, line)?;
            continue;
        }

        // Each line gets a fresh parser, nothing carries over.
        let mut p = Parser::new(buffered_chars(line.as_bytes()), &settings);
        match p.parse() {
            Err(e) => eprintln!("{e}"),
            Ok(Some(node)) => {
                if args.dump {
                    write_node(&mut out, &node.dump())?
                } else {
                    write_node(&mut out, &node)?
                }
            }
            Ok(None) => {
                if p.pending_close() {
                    warn!("unexpected closing paren \")\"");
                }
            }
        }
    }
}
