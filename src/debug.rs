// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Utilities for debugging parses

use kstring::KString;

use crate::node::Node;

fn tag(name: &str) -> Node {
    Node::GenericLiteral(KString::from_ref(name))
}

fn text(s: &KString) -> Node {
    Node::StringLiteral(s.clone())
}

impl Node {
    /// A tree spelling out the variant of every node, e.g. `1` dumps
    /// as `( int 1 )` and `"a"` as `( string "a" )`.
    pub fn dump(&self) -> Node {
        let payload = match self {
            Node::List(children) => {
                let mut vals = vec![tag(self.kind_name())];
                vals.extend(children.iter().map(Node::dump));
                return Node::List(vals)
            }
            Node::IntLiteral { value, .. } => Node::IntLiteral {
                value: *value,
                raw: KString::from_string(value.to_string()),
            },
            Node::StringLiteral(s)
                | Node::Symbol(s)
                | Node::Basic(s)
                | Node::GenericLiteral(s)
                | Node::Comment(s) => text(s),
        };
        Node::List(vec![tag(self.kind_name()), payload])
    }
}
