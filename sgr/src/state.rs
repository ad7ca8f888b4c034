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

//! Select Graphic Rendition state and the sequence compiler.

use crate::consts::{
    CSI, MAX_SEQUENCE_LENGTH, SGR_COLOR_INDEXED, SGR_COLOR_RGB, SGR_FINAL, SGR_RESET,
    SGR_SEPARATOR,
};
use crate::{Capabilities, Feature, Style, StyleSet};
use ansiterm_palette::{Color, Quantizer, SgrPalette};
use bytes::{BufMut, BytesMut};

/// The current colors and text attributes of a terminal.
///
/// `None` is the unset color: the terminal's own default. A state compiles to
/// a single `ESC[0;...m` sequence that resets the terminal and re-applies
/// everything that is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SgrState {
    foreground: Option<Color>,
    background: Option<Color>,
    styles: StyleSet,
}

impl SgrState {
    /// A state with unset colors and no active styles.
    pub const fn new() -> SgrState {
        SgrState {
            foreground: None,
            background: None,
            styles: StyleSet::new(),
        }
    }

    /// Current foreground color.
    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    /// Current background color.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Active text attributes.
    pub fn styles(&self) -> StyleSet {
        self.styles
    }

    /// Is `style` active?
    pub fn style(&self, style: Style) -> bool {
        self.styles.contains(style)
    }

    /// Sets the foreground color. Returns `true` if the value changed.
    pub fn set_foreground(&mut self, color: Option<Color>) -> bool {
        replace_if_changed(&mut self.foreground, color)
    }

    /// Sets the background color. Returns `true` if the value changed.
    pub fn set_background(&mut self, color: Option<Color>) -> bool {
        replace_if_changed(&mut self.background, color)
    }

    /// Activates or deactivates a text attribute.
    pub fn set_style(&mut self, style: Style, value: bool) {
        self.styles.set(style, value);
    }

    /// Unsets both colors.
    pub fn reset_colors(&mut self) {
        self.foreground = None;
        self.background = None;
    }

    /// Deactivates every text attribute.
    pub fn reset_styles(&mut self) {
        self.styles.clear();
    }

    /// The SGR parameters describing this state, without the leading reset.
    ///
    /// Returns `None` when escape codes are not in effect. Styles are listed
    /// in ascending code order when styles are in effect, followed by the
    /// foreground and then the background color, each encoded with the best
    /// color feature in effect: 24-bit, then 8-bit, then the 4-bit fallback.
    pub fn parameters(
        &self,
        capabilities: &Capabilities,
        quantizer: &mut Quantizer,
    ) -> Option<Vec<u8>> {
        if !capabilities.in_effect(Feature::EscapeCodes) {
            return None;
        }

        let mut parameters = Vec::new();
        if capabilities.in_effect(Feature::Styles) {
            parameters.extend(self.styles.iter().map(Style::code));
        }
        if let Some(color) = self.foreground {
            push_color(&mut parameters, color, SgrPalette::Foreground, capabilities, quantizer);
        }
        if let Some(color) = self.background {
            push_color(&mut parameters, color, SgrPalette::Background, capabilities, quantizer);
        }
        Some(parameters)
    }

    /// Encodes the complete escape sequence for this state into `dst`.
    ///
    /// Returns `false`, writing nothing, when escape codes are not in effect.
    pub fn encode<T: BufMut>(
        &self,
        dst: &mut T,
        capabilities: &Capabilities,
        quantizer: &mut Quantizer,
    ) -> bool {
        let Some(parameters) = self.parameters(capabilities, quantizer) else {
            return false;
        };

        dst.put_slice(&CSI);
        dst.put_u8(SGR_RESET);
        for parameter in parameters {
            dst.put_u8(SGR_SEPARATOR);
            put_decimal(dst, parameter);
        }
        dst.put_u8(SGR_FINAL);
        true
    }

    /// Compiles this state into a freshly allocated escape sequence.
    pub fn compile(
        &self,
        capabilities: &Capabilities,
        quantizer: &mut Quantizer,
    ) -> Option<BytesMut> {
        let mut sequence = BytesMut::with_capacity(MAX_SEQUENCE_LENGTH);
        self.encode(&mut sequence, capabilities, quantizer)
            .then_some(sequence)
    }
}

fn replace_if_changed(slot: &mut Option<Color>, value: Option<Color>) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

fn push_color(
    parameters: &mut Vec<u8>,
    color: Color,
    palette: SgrPalette,
    capabilities: &Capabilities,
    quantizer: &mut Quantizer,
) {
    if capabilities.in_effect(Feature::Colors24Bit) {
        parameters.extend([
            palette.extended_prefix(),
            SGR_COLOR_RGB,
            color.r,
            color.g,
            color.b,
        ]);
    } else if capabilities.in_effect(Feature::Colors8Bit) {
        parameters.extend([
            palette.extended_prefix(),
            SGR_COLOR_INDEXED,
            quantizer.to_8bit(color),
        ]);
    } else {
        parameters.push(quantizer.to_4bit_sgr(color, palette));
    }
}

fn put_decimal<T: BufMut>(dst: &mut T, value: u8) {
    if value >= 100 {
        dst.put_u8(b'0' + value / 100);
    }
    if value >= 10 {
        dst.put_u8(b'0' + (value / 10) % 10);
    }
    dst.put_u8(b'0' + value % 10);
}
