// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.


//! Settings for parsing.

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Maximum nesting depth of lists.
    pub depth_fuel: u32,
    /// If false, comments are skipped like whitespace instead of
    /// being returned as nodes.
    pub keep_comments: bool,
}

pub const DEFAULT_SETTINGS : Settings = Settings {
    depth_fuel: 500,
    // ^ the limit with default settings on Linux is around 1200
    keep_comments: true,
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}
