// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! A reader for a minimal S-expression notation, turning one unit of
//! input into a syntax tree and rendering it back in canonical form.
//!
//! * `scan` classifies characters into tokens (with positions for
//!   error messages),
//! * `parse` builds one `node::Node` per call, recursing for lists,
//! * `read` wraps both for callers like the `sl` binary, which feeds
//!   it one line at a time.
//!
//! There is no evaluator; input is only parsed and re-printed.
//!
//! ```
//! let node = sl::read::read_str("(+ 1 (* 2 3))").unwrap().unwrap();
//! assert_eq!(node.to_string(), "( + 1 ( * 2 3 ) )");
//! ```

pub mod buffered_chars;
pub mod debug;
pub mod node;
pub mod number;
pub mod parse;
pub mod pos;
pub mod read;
pub mod scan;
pub mod settings;
