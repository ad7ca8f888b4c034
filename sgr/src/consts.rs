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

/// Escape control character.
pub const ESC: u8 = 0x1B;

/// Control Sequence Introducer, `ESC [`.
pub const CSI: [u8; 2] = [ESC, b'['];

/// Final byte of a Select Graphic Rendition sequence.
pub const SGR_FINAL: u8 = b'm';

/// Separator between SGR parameters.
pub const SGR_SEPARATOR: u8 = b';';

/// Leading SGR parameter. Every sequence resets attributes before applying
/// the current state.
pub const SGR_RESET: u8 = b'0';

/// Second parameter of an extended color selecting an 8-bit palette index.
pub const SGR_COLOR_INDEXED: u8 = 5;

/// Second parameter of an extended color selecting a 24-bit RGB value.
pub const SGR_COLOR_RGB: u8 = 2;

/// Upper bound on the length of a compiled SGR sequence in bytes.
///
/// `ESC[0;1;2;3;4;5;6;7;38;2;255;255;255;48;2;255;255;255m` is the longest
/// sequence the state tracker can produce.
pub const MAX_SEQUENCE_LENGTH: usize = 52;
