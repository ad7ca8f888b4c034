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

//! The terminal session: capabilities, rendition state and output in one
//! owned value.

use crate::{
    Capabilities, Feature, HostConsole, SessionConfig, SgrError, SgrResult, SgrState, Style,
    StyleSet, TerminalEnvironment, TerminalSupport,
};
use ansiterm_palette::{Color, Quantizer};
use tracing::{debug, instrument, trace};

/// A colored, styled terminal.
///
/// Every change to a color or style that alters the current state is rendered
/// immediately: as a single `ESC[0;...m` sequence when escape codes are in
/// effect, or through the host's native color API otherwise.
///
/// # Examples
///
/// ```
/// use ansiterm_sgr::{Color, RecordingConsole, TerminalSession, TerminalSupport};
///
/// let mut session = TerminalSession::with_support(RecordingConsole::new(), TerminalSupport::all());
/// session.set_foreground(Some(Color::rgb(10, 20, 30))).unwrap();
/// session.write_str("hello").unwrap();
/// assert_eq!(session.console().output(), "\x1b[0;38;2;10;20;30mhello");
/// ```
#[derive(Debug)]
pub struct TerminalSession<C: HostConsole> {
    console: C,
    capabilities: Capabilities,
    state: SgrState,
    quantizer: Quantizer,
}

impl<C: HostConsole> TerminalSession<C> {
    /// Builds a session from a detected environment and configuration overrides.
    pub fn new(
        console: C,
        environment: &TerminalEnvironment,
        config: &SessionConfig,
    ) -> TerminalSession<C> {
        let mut capabilities = Capabilities::new(environment.detect());
        config.apply(&mut capabilities);
        debug!(?capabilities, "Created terminal session");
        TerminalSession::from_capabilities(console, capabilities)
    }

    /// Builds a session from the process environment with no overrides.
    pub fn from_env(console: C) -> TerminalSession<C> {
        TerminalSession::new(console, &TerminalEnvironment::from_env(), &SessionConfig::detected())
    }

    /// Builds a session for a terminal with known support.
    pub fn with_support(console: C, support: TerminalSupport) -> TerminalSession<C> {
        TerminalSession::from_capabilities(console, Capabilities::new(support))
    }

    /// Builds a session around an existing capability graph.
    pub fn from_capabilities(console: C, capabilities: Capabilities) -> TerminalSession<C> {
        TerminalSession {
            console,
            capabilities,
            state: SgrState::new(),
            quantizer: Quantizer::new(),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    /// Mutable access to the capability graph.
    ///
    /// Changes take effect on the next emitted sequence; nothing is re-rendered
    /// by the change itself.
    pub fn capabilities_mut(&mut self) -> &mut Capabilities {
        &mut self.capabilities
    }

    pub fn state(&self) -> &SgrState {
        &self.state
    }

    pub fn quantizer(&self) -> &Quantizer {
        &self.quantizer
    }

    pub fn foreground(&self) -> Option<Color> {
        self.state.foreground()
    }

    pub fn background(&self) -> Option<Color> {
        self.state.background()
    }

    /// Sets the foreground color; `None` restores the terminal default.
    ///
    /// Setting the current value again renders nothing.
    pub fn set_foreground(&mut self, color: Option<Color>) -> SgrResult<()> {
        if !self.state.set_foreground(color) {
            return Ok(());
        }
        if self.escape_codes() {
            return self.emit();
        }
        match color {
            Some(color) => {
                let native = self.quantizer.to_console_color(color);
                self.console.set_native_foreground(native)?;
            }
            None => {
                self.console.reset_native_colors()?;
                if let Some(background) = self.state.background() {
                    let native = self.quantizer.to_console_color(background);
                    self.console.set_native_background(native)?;
                }
            }
        }
        Ok(())
    }

    /// Sets the background color; `None` restores the terminal default.
    ///
    /// Setting the current value again renders nothing.
    pub fn set_background(&mut self, color: Option<Color>) -> SgrResult<()> {
        if !self.state.set_background(color) {
            return Ok(());
        }
        if self.escape_codes() {
            return self.emit();
        }
        match color {
            Some(color) => {
                let native = self.quantizer.to_console_color(color);
                self.console.set_native_background(native)?;
            }
            None => {
                self.console.reset_native_colors()?;
                if let Some(foreground) = self.state.foreground() {
                    let native = self.quantizer.to_console_color(foreground);
                    self.console.set_native_foreground(native)?;
                }
            }
        }
        Ok(())
    }

    /// Unsets both colors.
    pub fn reset_color(&mut self) -> SgrResult<()> {
        self.state.reset_colors();
        if self.escape_codes() {
            self.emit()
        } else {
            Ok(self.console.reset_native_colors()?)
        }
    }

    pub fn styles(&self) -> StyleSet {
        self.state.styles()
    }

    pub fn style(&self, style: Style) -> bool {
        self.state.style(style)
    }

    /// Activates or deactivates a text attribute.
    ///
    /// Ignored when styles are not in effect. Otherwise the state is rendered
    /// even if the value did not change.
    pub fn set_style(&mut self, style: Style, value: bool) -> SgrResult<()> {
        if !self.capabilities.in_effect(Feature::Styles) {
            trace!(%style, value, "Styles not in effect");
            return Ok(());
        }
        self.state.set_style(style, value);
        self.emit()
    }

    /// Deactivates every text attribute.
    pub fn reset_style(&mut self) -> SgrResult<()> {
        self.state.reset_styles();
        self.emit()
    }

    pub fn bold(&self) -> bool {
        self.style(Style::Bold)
    }

    pub fn set_bold(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::Bold, value)
    }

    pub fn faint(&self) -> bool {
        self.style(Style::Faint)
    }

    pub fn set_faint(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::Faint, value)
    }

    pub fn italic(&self) -> bool {
        self.style(Style::Italic)
    }

    pub fn set_italic(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::Italic, value)
    }

    pub fn underline(&self) -> bool {
        self.style(Style::Underline)
    }

    pub fn set_underline(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::Underline, value)
    }

    pub fn blink(&self) -> bool {
        self.style(Style::Blink)
    }

    pub fn set_blink(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::Blink, value)
    }

    pub fn rapid_blink(&self) -> bool {
        self.style(Style::RapidBlink)
    }

    pub fn set_rapid_blink(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::RapidBlink, value)
    }

    pub fn reverse(&self) -> bool {
        self.style(Style::Reverse)
    }

    pub fn set_reverse(&mut self, value: bool) -> SgrResult<()> {
        self.set_style(Style::Reverse, value)
    }

    /// Writes plain text with the current rendition.
    pub fn write_str(&mut self, text: &str) -> SgrResult<()> {
        Ok(self.console.write_text(text)?)
    }

    /// Writes plain text followed by a newline.
    pub fn write_line(&mut self, text: &str) -> SgrResult<()> {
        self.console.write_text(text)?;
        Ok(self.console.write_text("\n")?)
    }

    /// Writes `text` in the given colors, then restores the previous colors.
    ///
    /// A `None` color leaves that channel untouched.
    pub fn write_colored(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> SgrResult<()> {
        let previous_foreground = self.state.foreground();
        let previous_background = self.state.background();

        let mut result = Ok(());
        if foreground.is_some() {
            result = self.set_foreground(foreground);
        }
        if result.is_ok() && background.is_some() {
            result = self.set_background(background);
        }
        if result.is_ok() {
            result = self.console.write_text(text).map_err(SgrError::from);
        }

        // Restore even after a failure; the first error wins.
        if foreground.is_some() {
            result = result.and(self.set_foreground(previous_foreground));
        }
        if background.is_some() {
            result = result.and(self.set_background(previous_background));
        }
        result
    }

    /// Like [`TerminalSession::write_colored`], with a newline written after
    /// the colors are restored.
    pub fn write_line_colored(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> SgrResult<()> {
        self.write_colored(text, foreground, background)?;
        Ok(self.console.write_text("\n")?)
    }

    fn escape_codes(&self) -> bool {
        self.capabilities.in_effect(Feature::EscapeCodes)
    }

    #[instrument(level = "trace", skip_all)]
    fn emit(&mut self) -> SgrResult<()> {
        let Some(sequence) = self.state.compile(&self.capabilities, &mut self.quantizer) else {
            return Ok(());
        };
        trace!(sequence = %sequence.escape_ascii(), "Emitting SGR sequence");
        Ok(self.console.write_sequence(&sequence)?)
    }
}
