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

/// A 24-bit RGB color with an 8-bit alpha channel.
///
/// Equality and hashing compare all four channels exactly. The alpha channel is
/// carried along for callers that need it, but it never influences palette
/// quantization or the escape sequences produced for a color.
///
/// # Examples
///
/// ```
/// use ansiterm_palette::Color;
///
/// let orange = Color::rgb(255, 165, 0);
/// assert_eq!(orange.a, 255);
/// assert_ne!(orange, Color::rgba(255, 165, 0, 128));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel. Ignored by quantization and SGR encoding.
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// Opaque black, `#000000`.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Opaque white, `#FFFFFF`.
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Opaque pure red, `#FF0000`.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Opaque pure green, `#00FF00`.
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    /// Opaque pure blue, `#0000FF`.
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Creates an opaque color from its red, green and blue channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: u8::MAX }
    }

    /// Creates a color from its red, green, blue and alpha channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Unweighted Manhattan distance between two colors in RGB space.
    ///
    /// Alpha is not part of the distance.
    pub fn distance(&self, other: &Color) -> u32 {
        u32::from(self.r.abs_diff(other.r))
            + u32::from(self.g.abs_diff(other.g))
            + u32::from(self.b.abs_diff(other.b))
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Selects which half of an SGR color pair a color code addresses.
///
/// The discriminant is the base of the 4-bit code range:
///
/// - Foreground: `30`–`37` for dark colors, `90`–`97` for bright colors, and
///   `38` as the prefix for 8-bit and 24-bit colors.
/// - Background: `40`–`47` for dark colors, `100`–`107` for bright colors, and
///   `48` as the prefix for 8-bit and 24-bit colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SgrPalette {
    /// Text color.
    Foreground = 30,
    /// Cell color behind the text.
    Background = 40,
}

impl SgrPalette {
    /// Base code for the eight dark colors.
    pub const fn base(self) -> u8 {
        self as u8
    }

    /// Base code for the eight bright colors.
    pub const fn bright_base(self) -> u8 {
        self as u8 + 60
    }

    /// Prefix introducing an extended (`5;N` or `2;R;G;B`) color.
    pub const fn extended_prefix(self) -> u8 {
        self as u8 + 8
    }
}

/// The sixteen colors a legacy console can render without escape codes.
///
/// Variants are declared in palette order, so the discriminant of each
/// variant is its index in the basic 16-color palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConsoleColor {
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Gray,
    DarkGray,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl ConsoleColor {
    /// All console colors in basic palette order.
    pub const ALL: [ConsoleColor; 16] = [
        ConsoleColor::Black,
        ConsoleColor::DarkRed,
        ConsoleColor::DarkGreen,
        ConsoleColor::DarkYellow,
        ConsoleColor::DarkBlue,
        ConsoleColor::DarkMagenta,
        ConsoleColor::DarkCyan,
        ConsoleColor::Gray,
        ConsoleColor::DarkGray,
        ConsoleColor::Red,
        ConsoleColor::Green,
        ConsoleColor::Yellow,
        ConsoleColor::Blue,
        ConsoleColor::Magenta,
        ConsoleColor::Cyan,
        ConsoleColor::White,
    ];

    /// Looks up the console color for a basic palette index.
    ///
    /// Returns `None` for indices outside `0..16`.
    pub fn from_index(index: u8) -> Option<ConsoleColor> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Index of this color in the basic 16-color palette.
    pub const fn index(self) -> u8 {
        self as u8
    }
}
