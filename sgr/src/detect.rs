//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! One-shot terminal capability detection from `TERM` and `COLORTERM`.

use crate::TerminalSupport;
use std::ffi::OsString;
use tracing::debug;

/// `TERM` fragments identifying a terminal that understands escape codes.
const ESCAPE_CODE_INDICATORS: [&str; 3] = ["xterm", "vt1", "linux"];

/// `TERM`/`COLORTERM` fragments identifying 256 color support.
const COLORS_8BIT_INDICATORS: [&str; 2] = ["256color", "rxvt-xpm"];

/// `COLORTERM` fragments identifying true color support.
const COLORS_24BIT_INDICATORS: [&str; 2] = ["truecolor", "24bit"];

/// The environment strings terminal detection is based on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TerminalEnvironment {
    /// Value of `TERM`, if set.
    pub term: Option<String>,
    /// Value of `COLORTERM`, if set.
    pub colorterm: Option<String>,
}

impl TerminalEnvironment {
    /// Builds an environment from explicit values.
    pub fn new(term: Option<&str>, colorterm: Option<&str>) -> TerminalEnvironment {
        TerminalEnvironment {
            term: term.map(str::to_owned),
            colorterm: colorterm.map(str::to_owned),
        }
    }

    /// Reads `TERM` and `COLORTERM` from the process environment.
    ///
    /// Non-Unicode values are decoded lossily so their markers are still
    /// recognized.
    pub fn from_env() -> TerminalEnvironment {
        TerminalEnvironment {
            term: lossy(std::env::var_os("TERM")),
            colorterm: lossy(std::env::var_os("COLORTERM")),
        }
    }

    /// Derives terminal support from the environment strings.
    ///
    /// - `TERM` naming an xterm, VT100-family or Linux console enables escape
    ///   codes.
    /// - A `256color` or `rxvt-xpm` marker in either variable enables escape
    ///   codes and 8-bit color.
    /// - A `truecolor` or `24bit` marker in `COLORTERM` enables escape codes and
    ///   24-bit color.
    /// - Styles follow escape code support; there is no separate signal for
    ///   them.
    ///
    /// Missing or empty variables leave everything unsupported.
    pub fn detect(&self) -> TerminalSupport {
        let term = self.term.as_deref().unwrap_or_default();
        let colorterm = self.colorterm.as_deref().unwrap_or_default();
        let mut support = TerminalSupport::none();

        if contains_any(term, &ESCAPE_CODE_INDICATORS) {
            support.escape_codes = true;
        }
        if contains_any(term, &COLORS_8BIT_INDICATORS)
            || contains_any(colorterm, &COLORS_8BIT_INDICATORS)
        {
            support.escape_codes = true;
            support.colors_8bit = true;
        }
        if contains_any(colorterm, &COLORS_24BIT_INDICATORS) {
            support.escape_codes = true;
            support.colors_24bit = true;
        }
        support.styles = support.escape_codes;

        debug!(
            term = self.term.as_deref(),
            colorterm = self.colorterm.as_deref(),
            ?support,
            "Detected terminal support"
        );
        support
    }
}

fn lossy(value: Option<OsString>) -> Option<String> {
    value.map(|value| value.to_string_lossy().into_owned())
}

fn contains_any(value: &str, indicators: &[&str]) -> bool {
    !value.is_empty() && indicators.iter().any(|indicator| value.contains(indicator))
}
