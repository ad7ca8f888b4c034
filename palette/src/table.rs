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

//! The ANSI 8-bit color table.
//!
//! - **0-15**: the sixteen system colors (8 dark, 8 bright)
//! - **16-231**: 6×6×6 RGB cube, index `16 + 36×r + 6×g + b`
//! - **232-255**: 24-step grayscale ramp from `#080808` to `#EEEEEE`

use crate::Color;

/// Number of entries in the full 8-bit palette.
pub const PALETTE_LEN: usize = 256;

/// Number of entries in the basic (4-bit) sub-palette.
pub const BASIC_PALETTE_LEN: usize = 16;

/// The 256 ANSI 8-bit colors in index order.
pub static PALETTE: [Color; PALETTE_LEN] = build_palette();

/// The sixteen system colors in xterm order.
const SYSTEM_COLORS: [Color; BASIC_PALETTE_LEN] = [
    Color::rgb(0, 0, 0),
    Color::rgb(128, 0, 0),
    Color::rgb(0, 128, 0),
    Color::rgb(128, 128, 0),
    Color::rgb(0, 0, 128),
    Color::rgb(128, 0, 128),
    Color::rgb(0, 128, 128),
    Color::rgb(192, 192, 192),
    Color::rgb(128, 128, 128),
    Color::rgb(255, 0, 0),
    Color::rgb(0, 255, 0),
    Color::rgb(255, 255, 0),
    Color::rgb(0, 0, 255),
    Color::rgb(255, 0, 255),
    Color::rgb(0, 255, 255),
    Color::rgb(255, 255, 255),
];

/// Channel levels of the 6×6×6 color cube.
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

const CUBE_START: usize = 16;
const GRAY_START: usize = 232;

const fn build_palette() -> [Color; PALETTE_LEN] {
    let mut table = [Color::BLACK; PALETTE_LEN];

    let mut index = 0;
    while index < BASIC_PALETTE_LEN {
        table[index] = SYSTEM_COLORS[index];
        index += 1;
    }

    let mut offset = 0;
    while offset < GRAY_START - CUBE_START {
        table[CUBE_START + offset] = Color::rgb(
            CUBE_LEVELS[offset / 36],
            CUBE_LEVELS[(offset / 6) % 6],
            CUBE_LEVELS[offset % 6],
        );
        offset += 1;
    }

    let mut step = 0;
    while step < PALETTE_LEN - GRAY_START {
        let level = (8 + step * 10) as u8;
        table[GRAY_START + step] = Color::rgb(level, level, level);
        step += 1;
    }

    table
}

/// The basic 16-color view over [`PALETTE`].
pub fn basic_palette() -> &'static [Color] {
    &PALETTE[..BASIC_PALETTE_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_colors() {
        assert_eq!(PALETTE[0], Color::rgb(0, 0, 0));
        assert_eq!(PALETTE[7], Color::rgb(192, 192, 192));
        assert_eq!(PALETTE[8], Color::rgb(128, 128, 128));
        assert_eq!(PALETTE[9], Color::rgb(255, 0, 0));
        assert_eq!(PALETTE[15], Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_cube_corners() {
        assert_eq!(PALETTE[16], Color::rgb(0, 0, 0));
        assert_eq!(PALETTE[17], Color::rgb(0, 0, 95));
        assert_eq!(PALETTE[22], Color::rgb(0, 95, 0));
        assert_eq!(PALETTE[52], Color::rgb(95, 0, 0));
        assert_eq!(PALETTE[196], Color::rgb(255, 0, 0));
        assert_eq!(PALETTE[231], Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_gray_ramp() {
        assert_eq!(PALETTE[232], Color::rgb(8, 8, 8));
        assert_eq!(PALETTE[244], Color::rgb(128, 128, 128));
        assert_eq!(PALETTE[255], Color::rgb(238, 238, 238));
    }

    #[test]
    fn test_all_entries_opaque() {
        assert!(PALETTE.iter().all(|color| color.a == 255));
    }

    #[test]
    fn test_basic_palette_view() {
        let basic = basic_palette();
        assert_eq!(basic.len(), BASIC_PALETTE_LEN);
        assert_eq!(basic, &PALETTE[..16]);
    }
}
