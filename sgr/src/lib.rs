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

//! Capability-aware ANSI Select Graphic Rendition output.
//!
//! A [`TerminalSession`] tracks the current foreground, background and text
//! attributes of a terminal and renders every change as a single
//! `ESC[0;...m` sequence, degraded to whatever the terminal supports:
//!
//! - 24-bit `38;2;R;G;B` colors when true color is in effect
//! - 8-bit `38;5;N` colors, quantized against the xterm palette
//! - 4-bit `30`-`37`/`90`-`97` colors as the last resort
//! - the host's native color API when escape codes are off entirely
//!
//! Support is detected from `TERM`/`COLORTERM` and can be overridden per
//! [`Feature`] through [`Capabilities`] or a [`SessionConfig`].

mod capability;
mod config;
mod console;
mod consts;
mod detect;
mod result;
mod session;
mod state;
mod style;

pub use self::capability::{Capabilities, Feature, TerminalSupport};
pub use self::config::{FeatureConfig, SessionConfig};
pub use self::console::{ConsoleEvent, HostConsole, RecordingConsole, StreamConsole};
pub use self::consts::MAX_SEQUENCE_LENGTH;
pub use self::detect::TerminalEnvironment;
pub use self::result::{SgrError, SgrResult};
pub use self::session::TerminalSession;
pub use self::state::SgrState;
pub use self::style::{Style, StyleSet};
pub use ansiterm_palette::{Color, ConsoleColor, Quantizer, SgrPalette};
