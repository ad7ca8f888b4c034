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

//! Host output seam.

use ansiterm_palette::ConsoleColor;
use std::io::{self, Write};
use tracing::trace;

/// The output device a [`TerminalSession`](crate::TerminalSession) renders to.
///
/// Escape sequences and text are written as-is. The native color methods are
/// the legacy path used when escape codes are not in effect; hosts without a
/// native color API may treat them as no-ops.
pub trait HostConsole {
    /// Writes a complete escape sequence.
    fn write_sequence(&mut self, sequence: &[u8]) -> io::Result<()>;

    /// Writes plain text.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Sets the foreground through the host's native color API.
    fn set_native_foreground(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// Sets the background through the host's native color API.
    fn set_native_background(&mut self, color: ConsoleColor) -> io::Result<()>;

    /// Restores the host's default native colors.
    fn reset_native_colors(&mut self) -> io::Result<()>;
}

/// A [`HostConsole`] over any byte stream.
///
/// Sequences are flushed as soon as they are written so that attribute
/// changes take effect before the next piece of text. Native colors have no
/// byte representation and are ignored.
#[derive(Debug)]
pub struct StreamConsole<W: Write> {
    writer: W,
}

impl<W: Write> StreamConsole<W> {
    /// Wraps `writer`.
    pub fn new(writer: W) -> StreamConsole<W> {
        StreamConsole { writer }
    }

    /// Borrows the underlying writer.
    pub fn inner(&self) -> &W {
        &self.writer
    }

    /// Mutably borrows the underlying writer.
    pub fn inner_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwraps the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamConsole<io::Stdout> {
    /// A console writing to standard output.
    pub fn stdout() -> StreamConsole<io::Stdout> {
        StreamConsole::new(io::stdout())
    }
}

impl<W: Write> HostConsole for StreamConsole<W> {
    fn write_sequence(&mut self, sequence: &[u8]) -> io::Result<()> {
        self.writer.write_all(sequence)?;
        self.writer.flush()
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn set_native_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        trace!(?color, "Native foreground unavailable on byte stream");
        Ok(())
    }

    fn set_native_background(&mut self, color: ConsoleColor) -> io::Result<()> {
        trace!(?color, "Native background unavailable on byte stream");
        Ok(())
    }

    fn reset_native_colors(&mut self) -> io::Result<()> {
        trace!("Native color reset unavailable on byte stream");
        Ok(())
    }
}

/// One call made against a [`RecordingConsole`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConsoleEvent {
    Sequence(Vec<u8>),
    Text(String),
    NativeForeground(ConsoleColor),
    NativeBackground(ConsoleColor),
    NativeReset,
}

/// A [`HostConsole`] that records every call in order.
///
/// Useful for asserting exactly what a session emitted.
#[derive(Clone, Debug, Default)]
pub struct RecordingConsole {
    events: Vec<ConsoleEvent>,
}

impl RecordingConsole {
    pub fn new() -> RecordingConsole {
        RecordingConsole::default()
    }

    /// All recorded calls, oldest first.
    pub fn events(&self) -> &[ConsoleEvent] {
        &self.events
    }

    /// The escape sequences written so far, decoded as text.
    pub fn sequences(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ConsoleEvent::Sequence(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect()
    }

    /// Everything written so far, sequences and text, in order.
    pub fn output(&self) -> String {
        let mut output = String::new();
        for event in &self.events {
            match event {
                ConsoleEvent::Sequence(bytes) => output.push_str(&String::from_utf8_lossy(bytes)),
                ConsoleEvent::Text(text) => output.push_str(text),
                _ => {}
            }
        }
        output
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl HostConsole for RecordingConsole {
    fn write_sequence(&mut self, sequence: &[u8]) -> io::Result<()> {
        self.events.push(ConsoleEvent::Sequence(sequence.to_vec()));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.events.push(ConsoleEvent::Text(text.to_owned()));
        Ok(())
    }

    fn set_native_foreground(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.events.push(ConsoleEvent::NativeForeground(color));
        Ok(())
    }

    fn set_native_background(&mut self, color: ConsoleColor) -> io::Result<()> {
        self.events.push(ConsoleEvent::NativeBackground(color));
        Ok(())
    }

    fn reset_native_colors(&mut self) -> io::Result<()> {
        self.events.push(ConsoleEvent::NativeReset);
        Ok(())
    }
}
