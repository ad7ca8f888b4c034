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

use crate::SgrError;

/// A Select Graphic Rendition text attribute.
///
/// The discriminant of each variant is both its SGR parameter code and its
/// index in a [`StyleSet`]. Attributes are always emitted in ascending code
/// order.
///
/// | Style        | Code | Effect                                  |
/// |--------------|------|-----------------------------------------|
/// | `Bold`       | `1`  | Increased intensity                     |
/// | `Faint`      | `2`  | Decreased intensity                     |
/// | `Italic`     | `3`  | Italic (sometimes rendered as inverse)  |
/// | `Underline`  | `4`  | Single underline                        |
/// | `Blink`      | `5`  | Slow blink, under 150 per minute        |
/// | `RapidBlink` | `6`  | Rapid blink, 150 per minute or more     |
/// | `Reverse`    | `7`  | Swap foreground and background colors   |
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Style {
    /// SGR `1`.
    Bold = 1,
    /// SGR `2`.
    Faint = 2,
    /// SGR `3`.
    Italic = 3,
    /// SGR `4`.
    Underline = 4,
    /// SGR `5`.
    Blink = 5,
    /// SGR `6`.
    RapidBlink = 6,
    /// SGR `7`.
    Reverse = 7,
}

impl Style {
    /// Every style in ascending code order.
    pub const ALL: [Style; 7] = [
        Style::Bold,
        Style::Faint,
        Style::Italic,
        Style::Underline,
        Style::Blink,
        Style::RapidBlink,
        Style::Reverse,
    ];

    /// The SGR parameter code for this style.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a style by its SGR parameter code.
    pub fn from_code(code: u8) -> Option<Style> {
        match code {
            1 => Some(Style::Bold),
            2 => Some(Style::Faint),
            3 => Some(Style::Italic),
            4 => Some(Style::Underline),
            5 => Some(Style::Blink),
            6 => Some(Style::RapidBlink),
            7 => Some(Style::Reverse),
            _ => None,
        }
    }

    const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl TryFrom<u8> for Style {
    type Error = SgrError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Style::from_code(code).ok_or(SgrError::InvalidStyle(code))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Style::Bold => "bold",
            Style::Faint => "faint",
            Style::Italic => "italic",
            Style::Underline => "underline",
            Style::Blink => "blink",
            Style::RapidBlink => "rapid blink",
            Style::Reverse => "reverse",
        };
        f.write_str(name)
    }
}

/// The set of active text attributes, one flag per [`Style`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleSet {
    bits: u8,
}

impl StyleSet {
    /// An empty set.
    pub const fn new() -> StyleSet {
        StyleSet { bits: 0 }
    }

    /// Returns `true` if `style` is active.
    pub const fn contains(&self, style: Style) -> bool {
        self.bits & style.mask() != 0
    }

    /// Activates or deactivates `style`.
    pub fn set(&mut self, style: Style, value: bool) {
        if value {
            self.bits |= style.mask();
        } else {
            self.bits &= !style.mask();
        }
    }

    /// Deactivates every style.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns `true` if no style is active.
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Active styles in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = Style> + '_ {
        Style::ALL.into_iter().filter(|style| self.contains(*style))
    }
}

impl FromIterator<Style> for StyleSet {
    fn from_iter<T: IntoIterator<Item = Style>>(iter: T) -> Self {
        let mut set = StyleSet::new();
        for style in iter {
            set.set(style, true);
        }
        set
    }
}
