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

//! Property tests for palette quantization

use ansiterm_palette::{
    BASIC_RANGE, Color, FULL_RANGE, PALETTE, QuantizationCache, Quantizer, nearest_index,
};
use proptest::prelude::*;

fn any_color() -> impl Strategy<Value = Color> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Color::rgba(r, g, b, a))
}

#[test]
fn test_every_palette_entry_maps_to_its_first_occurrence() {
    let mut cache = QuantizationCache::new();
    for (index, color) in PALETTE.iter().enumerate() {
        let found = nearest_index(*color, FULL_RANGE, &mut cache) as usize;
        assert_eq!(PALETTE[found], *color, "entry {} resolved to {}", index, found);
        assert!(found <= index);
        let first = PALETTE.iter().position(|c| c == color).unwrap();
        assert_eq!(found, first);
    }
}

#[test]
fn test_unique_palette_entries_map_to_own_index() {
    let mut cache = QuantizationCache::new();
    // The gray ramp never repeats an earlier entry except for 128 at index 244.
    for index in 232..256usize {
        let found = nearest_index(PALETTE[index], FULL_RANGE, &mut cache) as usize;
        if index == 244 {
            assert_eq!(found, 8);
        } else {
            assert_eq!(found, index);
        }
    }
}

#[test]
fn test_basic_palette_entries_map_to_own_index() {
    let mut quantizer = Quantizer::new();
    for index in 0..16u8 {
        assert_eq!(quantizer.to_4bit(PALETTE[index as usize]), index);
    }
}

proptest! {
    #[test]
    fn prop_lookup_is_idempotent_and_scans_once(color in any_color()) {
        let mut cache = QuantizationCache::new();
        let first = nearest_index(color, FULL_RANGE, &mut cache);
        let scans = cache.scans();
        let second = nearest_index(color, FULL_RANGE, &mut cache);
        prop_assert_eq!(first, second);
        prop_assert_eq!(cache.scans(), scans);
        prop_assert_eq!(scans, 1);
    }

    #[test]
    fn prop_result_is_a_minimum(color in any_color()) {
        let mut cache = QuantizationCache::new();
        let found = nearest_index(color, FULL_RANGE, &mut cache) as usize;
        let best = PALETTE[found].distance(&color);
        for (index, entry) in PALETTE.iter().enumerate() {
            let distance = entry.distance(&color);
            prop_assert!(distance >= best);
            // Ties resolve to the lowest index.
            if index < found {
                prop_assert!(distance > best);
            }
        }
    }

    #[test]
    fn prop_basic_range_is_respected(color in any_color()) {
        let mut cache = QuantizationCache::new();
        let found = nearest_index(color, BASIC_RANGE, &mut cache);
        prop_assert!(found < 16);
    }

    #[test]
    fn prop_alpha_never_changes_the_index(r in any::<u8>(), g in any::<u8>(), b in any::<u8>(), a in any::<u8>()) {
        let mut quantizer = Quantizer::new();
        prop_assert_eq!(
            quantizer.to_8bit(Color::rgb(r, g, b)),
            quantizer.to_8bit(Color::rgba(r, g, b, a))
        );
    }

    #[test]
    fn prop_4bit_sgr_code_ranges(color in any_color()) {
        let mut quantizer = Quantizer::new();
        let fg = quantizer.to_4bit_sgr(color, ansiterm_palette::SgrPalette::Foreground);
        let bg = quantizer.to_4bit_sgr(color, ansiterm_palette::SgrPalette::Background);
        prop_assert!((30..=37).contains(&fg) || (90..=97).contains(&fg));
        prop_assert!((40..=47).contains(&bg) || (100..=107).contains(&bg));
        prop_assert_eq!(bg, fg + 10);
    }
}
