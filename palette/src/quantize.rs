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

//! Nearest-color quantization against the ANSI palette.
//!
//! Arbitrary 24-bit colors are reduced to a palette index by a linear scan
//! using the unweighted Manhattan distance `|ΔR| + |ΔG| + |ΔB|` (not
//! perceptual). Results are memoized per cache, so each distinct color is
//! scanned at most once per cache.

use crate::table::{BASIC_PALETTE_LEN, PALETTE, PALETTE_LEN};
use crate::{Color, ConsoleColor, SgrPalette};
use std::collections::HashMap;
use std::ops::Range;
use tracing::trace;

/// Index range covering the full 8-bit palette.
pub const FULL_RANGE: Range<usize> = 0..PALETTE_LEN;

/// Index range covering the basic 16-color palette.
pub const BASIC_RANGE: Range<usize> = 0..BASIC_PALETTE_LEN;

/// Memoized color to palette index lookups.
///
/// A cache is only meaningful for the range it was filled against; lookups for
/// different ranges must use separate caches. Entries are never evicted.
#[derive(Clone, Debug, Default)]
pub struct QuantizationCache {
    entries: HashMap<Color, u8>,
    scans: usize,
}

impl QuantizationCache {
    /// Creates an empty cache.
    pub fn new() -> QuantizationCache {
        QuantizationCache::default()
    }

    /// Returns the memoized index for `color`, if any.
    pub fn get(&self, color: &Color) -> Option<u8> {
        self.entries.get(color).copied()
    }

    /// Number of memoized colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of palette scans performed on behalf of this cache.
    ///
    /// Only cache misses scan, so this equals the number of misses.
    pub fn scans(&self) -> usize {
        self.scans
    }
}

/// Finds the palette index in `range` nearest to `color`.
///
/// On a cache hit the stored index is returned without scanning. On a miss the
/// entries of `range` are visited in ascending order; an exact match ends the
/// scan immediately, otherwise the first index to reach a new strict minimum
/// distance wins, so ties resolve to the lowest index. The result is stored in
/// `cache` before returning.
///
/// `range` is clamped to the palette bounds. An empty range yields its start
/// index, clamped to the last palette index.
pub fn nearest_index(color: Color, range: Range<usize>, cache: &mut QuantizationCache) -> u8 {
    if let Some(index) = cache.get(&color) {
        return index;
    }

    let start = range.start.min(PALETTE_LEN - 1);
    let end = range.end.min(PALETTE_LEN);
    let mut best = start;
    let mut nearest_distance = u32::MAX;

    for (index, entry) in PALETTE.iter().enumerate().take(end).skip(start) {
        let distance = entry.distance(&color);
        if distance == 0 {
            best = index;
            nearest_distance = 0;
            break;
        }
        if distance < nearest_distance {
            nearest_distance = distance;
            best = index;
        }
    }

    // Palette indices always fit in a byte.
    let index = best as u8;
    cache.scans += 1;
    cache.entries.insert(color, index);
    trace!(%color, index, distance = nearest_distance, "Quantized color");
    index
}

/// Maps a basic palette index to its 4-bit SGR color code.
///
/// Indices below 8 map to `base + index`, the bright half maps to
/// `base + 60 + (index - 8)`.
pub fn basic_index_to_sgr(index: u8, palette: SgrPalette) -> u8 {
    if index < 8 {
        palette.base() + index
    } else {
        palette.bright_base() + (index - 8)
    }
}

/// Owns the two independent lookup caches used when reducing colors.
///
/// The 8-bit cache answers "nearest of all 256 entries" and the 4-bit cache
/// answers "nearest of the first 16 entries"; they never share entries.
#[derive(Clone, Debug, Default)]
pub struct Quantizer {
    ansi_8bit: QuantizationCache,
    xterm_4bit: QuantizationCache,
}

impl Quantizer {
    /// Creates a quantizer with empty caches.
    pub fn new() -> Quantizer {
        Quantizer::default()
    }

    /// Nearest index in the full 256-color palette.
    pub fn to_8bit(&mut self, color: Color) -> u8 {
        nearest_index(color, FULL_RANGE, &mut self.ansi_8bit)
    }

    /// Nearest index in the basic 16-color palette.
    pub fn to_4bit(&mut self, color: Color) -> u8 {
        nearest_index(color, BASIC_RANGE, &mut self.xterm_4bit)
    }

    /// The 4-bit SGR color code (`30`-`37`/`90`-`97` or `40`-`47`/`100`-`107`)
    /// nearest to `color`.
    pub fn to_4bit_sgr(&mut self, color: Color, palette: SgrPalette) -> u8 {
        basic_index_to_sgr(self.to_4bit(color), palette)
    }

    /// The legacy console color nearest to `color`.
    pub fn to_console_color(&mut self, color: Color) -> ConsoleColor {
        ConsoleColor::ALL[usize::from(self.to_4bit(color))]
    }

    /// Cache backing [`Quantizer::to_8bit`].
    pub fn cache_8bit(&self) -> &QuantizationCache {
        &self.ansi_8bit
    }

    /// Cache backing [`Quantizer::to_4bit`] and its derived conversions.
    pub fn cache_4bit(&self) -> &QuantizationCache {
        &self.xterm_4bit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_returns_first_occurrence() {
        let mut cache = QuantizationCache::new();
        // Pure red appears at index 9 and again at 196.
        assert_eq!(nearest_index(Color::RED, FULL_RANGE, &mut cache), 9);
        // Black appears at index 0 and again at 16.
        assert_eq!(nearest_index(Color::BLACK, FULL_RANGE, &mut cache), 0);
    }

    #[test]
    fn test_cube_entry_maps_to_itself() {
        let mut cache = QuantizationCache::new();
        assert_eq!(nearest_index(Color::rgb(95, 135, 175), FULL_RANGE, &mut cache), 67);
    }

    #[test]
    fn test_near_miss_picks_closest() {
        let mut cache = QuantizationCache::new();
        // (250, 5, 5) is 15 away from pure red at index 9.
        assert_eq!(nearest_index(Color::rgb(250, 5, 5), FULL_RANGE, &mut cache), 9);
    }

    #[test]
    fn test_tie_resolves_to_lowest_index() {
        let mut cache = QuantizationCache::new();
        // (64, 0, 0) is 64 away from both black (0) and dark red (1).
        assert_eq!(nearest_index(Color::rgb(64, 0, 0), BASIC_RANGE, &mut cache), 0);
    }

    #[test]
    fn test_basic_range_stays_in_bounds() {
        let mut cache = QuantizationCache::new();
        let index = nearest_index(Color::rgb(95, 135, 175), BASIC_RANGE, &mut cache);
        assert!(index < 16);
    }

    #[test]
    fn test_cache_hit_does_not_scan() {
        let mut cache = QuantizationCache::new();
        let color = Color::rgb(12, 34, 56);
        let first = nearest_index(color, FULL_RANGE, &mut cache);
        assert_eq!(cache.scans(), 1);
        let second = nearest_index(color, FULL_RANGE, &mut cache);
        assert_eq!(first, second);
        assert_eq!(cache.scans(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_alpha_is_a_distinct_key_with_same_result() {
        let mut cache = QuantizationCache::new();
        let opaque = nearest_index(Color::rgb(12, 34, 56), FULL_RANGE, &mut cache);
        let clear = nearest_index(Color::rgba(12, 34, 56, 0), FULL_RANGE, &mut cache);
        assert_eq!(opaque, clear);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_empty_range_yields_start() {
        let mut cache = QuantizationCache::new();
        assert_eq!(nearest_index(Color::WHITE, 5..5, &mut cache), 5);
    }

    #[test]
    fn test_out_of_bounds_range_is_clamped() {
        let mut cache = QuantizationCache::new();
        assert_eq!(nearest_index(Color::WHITE, 300..300, &mut cache), 255);

        let mut cache = QuantizationCache::new();
        assert_eq!(nearest_index(Color::WHITE, 250..400, &mut cache), 255);
    }

    #[test]
    fn test_basic_index_to_sgr() {
        assert_eq!(basic_index_to_sgr(0, SgrPalette::Foreground), 30);
        assert_eq!(basic_index_to_sgr(7, SgrPalette::Foreground), 37);
        assert_eq!(basic_index_to_sgr(8, SgrPalette::Foreground), 90);
        assert_eq!(basic_index_to_sgr(9, SgrPalette::Foreground), 91);
        assert_eq!(basic_index_to_sgr(15, SgrPalette::Foreground), 97);
        assert_eq!(basic_index_to_sgr(0, SgrPalette::Background), 40);
        assert_eq!(basic_index_to_sgr(9, SgrPalette::Background), 101);
        assert_eq!(basic_index_to_sgr(15, SgrPalette::Background), 107);
    }

    #[test]
    fn test_quantizer_caches_are_independent() {
        let mut quantizer = Quantizer::new();
        let color = Color::rgb(95, 135, 175);
        assert_eq!(quantizer.to_8bit(color), 67);
        assert!(quantizer.cache_4bit().is_empty());
        assert!(quantizer.to_4bit(color) < 16);
        assert_eq!(quantizer.cache_8bit().len(), 1);
        assert_eq!(quantizer.cache_4bit().len(), 1);
    }

    #[test]
    fn test_to_4bit_sgr() {
        let mut quantizer = Quantizer::new();
        assert_eq!(quantizer.to_4bit_sgr(Color::RED, SgrPalette::Foreground), 91);
        assert_eq!(quantizer.to_4bit_sgr(Color::RED, SgrPalette::Background), 101);
        assert_eq!(quantizer.to_4bit_sgr(Color::rgb(128, 0, 0), SgrPalette::Foreground), 31);
    }

    #[test]
    fn test_to_console_color() {
        let mut quantizer = Quantizer::new();
        assert_eq!(quantizer.to_console_color(Color::BLACK), ConsoleColor::Black);
        assert_eq!(quantizer.to_console_color(Color::rgb(128, 0, 0)), ConsoleColor::DarkRed);
        assert_eq!(quantizer.to_console_color(Color::rgb(192, 192, 192)), ConsoleColor::Gray);
        assert_eq!(quantizer.to_console_color(Color::RED), ConsoleColor::Red);
        assert_eq!(quantizer.to_console_color(Color::WHITE), ConsoleColor::White);
    }
}
