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

//! # ANSI Palette
//!
//! Color values, the fixed ANSI 256-color table, and the quantizer that reduces
//! arbitrary RGB colors to 8-bit and 4-bit palette indices.
//!
//! ```
//! use ansiterm_palette::{Color, Quantizer, SgrPalette};
//!
//! let mut quantizer = Quantizer::new();
//! assert_eq!(quantizer.to_8bit(Color::rgb(95, 135, 175)), 67);
//! assert_eq!(quantizer.to_4bit_sgr(Color::RED, SgrPalette::Foreground), 91);
//! ```

mod color;
mod quantize;
mod table;

pub use self::color::{Color, ConsoleColor, SgrPalette};
pub use self::quantize::{
    BASIC_RANGE, FULL_RANGE, QuantizationCache, Quantizer, basic_index_to_sgr, nearest_index,
};
pub use self::table::{BASIC_PALETTE_LEN, PALETTE, PALETTE_LEN, basic_palette};
