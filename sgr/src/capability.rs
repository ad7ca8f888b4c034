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

//! Terminal capability graph.
//!
//! Four features describe what the session may emit. Each feature carries a
//! user preference (`enabled`), an override that disregards detection
//! (`ignoring_support`), and the detected terminal support. Whether a feature
//! is *in effect* is derived from those flags and from the features it depends
//! on, and is recomputed on every read, so changing a dependency is observed
//! immediately by all of its dependents.

use tracing::trace;

/// A togglable terminal capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// ANSI escape codes in general.
    EscapeCodes = 0,
    /// SGR with 8-bit color support (256 colors as specified by ANSI).
    Colors8Bit = 1,
    /// SGR with 24-bit color support (RGB true color).
    Colors24Bit = 2,
    /// SGR bold, italic, underline and the other text attributes.
    Styles = 3,
}

impl Feature {
    /// Every feature, in dependency order.
    pub const ALL: [Feature; 4] = [
        Feature::EscapeCodes,
        Feature::Colors8Bit,
        Feature::Colors24Bit,
        Feature::Styles,
    ];

    /// Friendly name for printing.
    pub const fn name(self) -> &'static str {
        match self {
            Feature::EscapeCodes => "ANSI escape codes",
            Feature::Colors8Bit => "8-bit (256 colors) ANSI palette",
            Feature::Colors24Bit => "24-bit true color palette",
            Feature::Styles => "XTerm formatting styles",
        }
    }

    /// The features this feature depends on.
    ///
    /// A feature may only depend on features declared before it in
    /// [`Feature::ALL`]; this is checked at compile time.
    pub const fn dependencies(self) -> &'static [Feature] {
        match self {
            Feature::EscapeCodes => &[],
            Feature::Colors8Bit | Feature::Colors24Bit | Feature::Styles => {
                &[Feature::EscapeCodes]
            }
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const fn dependencies_are_ordered() -> bool {
    let mut feature = 0;
    while feature < Feature::ALL.len() {
        if Feature::ALL[feature].index() != feature {
            return false;
        }
        let dependencies = Feature::ALL[feature].dependencies();
        let mut dependency = 0;
        while dependency < dependencies.len() {
            if dependencies[dependency].index() >= feature {
                return false;
            }
            dependency += 1;
        }
        feature += 1;
    }
    true
}

// Dependencies only point backwards, so the graph cannot contain a cycle.
const _: () = assert!(dependencies_are_ordered());

/// Detected terminal support for each feature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TerminalSupport {
    /// The terminal understands ANSI escape codes.
    pub escape_codes: bool,
    /// The terminal understands 8-bit indexed colors.
    pub colors_8bit: bool,
    /// The terminal understands 24-bit RGB colors.
    pub colors_24bit: bool,
    /// The terminal understands SGR text attributes.
    pub styles: bool,
}

impl TerminalSupport {
    /// A terminal that supports nothing.
    pub const fn none() -> TerminalSupport {
        TerminalSupport {
            escape_codes: false,
            colors_8bit: false,
            colors_24bit: false,
            styles: false,
        }
    }

    /// A terminal that supports every feature.
    pub const fn all() -> TerminalSupport {
        TerminalSupport {
            escape_codes: true,
            colors_8bit: true,
            colors_24bit: true,
            styles: true,
        }
    }

    /// Detected support for `feature`.
    pub const fn supports(&self, feature: Feature) -> bool {
        match feature {
            Feature::EscapeCodes => self.escape_codes,
            Feature::Colors8Bit => self.colors_8bit,
            Feature::Colors24Bit => self.colors_24bit,
            Feature::Styles => self.styles,
        }
    }
}

/// Mutable flags of a single feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct FeatureState {
    enabled: bool,
    ignoring_support: bool,
    has_terminal_support: bool,
}

/// The capability graph of a terminal session.
///
/// Terminal support is fixed when the graph is built; user preference and
/// overrides can change at any time.
///
/// # Examples
///
/// ```
/// use ansiterm_sgr::{Capabilities, Feature, TerminalSupport};
///
/// let mut capabilities = Capabilities::new(TerminalSupport::all());
/// assert!(capabilities.in_effect(Feature::Colors8Bit));
///
/// capabilities.disable(Feature::EscapeCodes);
/// assert!(capabilities.is_enabled(Feature::Colors8Bit));
/// assert!(!capabilities.in_effect(Feature::Colors8Bit));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities {
    features: [FeatureState; 4],
}

impl Capabilities {
    /// Builds the graph from detected terminal support. Every feature starts
    /// enabled and respecting support.
    pub fn new(support: TerminalSupport) -> Capabilities {
        let state = |feature: Feature| FeatureState {
            enabled: true,
            ignoring_support: false,
            has_terminal_support: support.supports(feature),
        };
        Capabilities {
            features: Feature::ALL.map(state),
        }
    }

    fn state(&self, feature: Feature) -> &FeatureState {
        &self.features[feature.index()]
    }

    fn state_mut(&mut self, feature: Feature) -> &mut FeatureState {
        &mut self.features[feature.index()]
    }

    /// Permit the use of `feature`, within the limits of terminal support.
    pub fn enable(&mut self, feature: Feature) {
        self.state_mut(feature).enabled = true;
        trace!(%feature, "Feature enabled");
    }

    /// Prevent the use of `feature`.
    pub fn disable(&mut self, feature: Feature) {
        self.state_mut(feature).enabled = false;
        trace!(%feature, "Feature disabled");
    }

    /// Enables a disabled feature or disables an enabled one.
    pub fn toggle(&mut self, feature: Feature) {
        if self.is_enabled(feature) {
            self.disable(feature);
        } else {
            self.enable(feature);
        }
    }

    /// Disregard detected terminal support for `feature`.
    ///
    /// An enabled feature that ignores support is in effect even on terminals
    /// that were not detected as supporting it, and regardless of the
    /// features it depends on.
    pub fn ignore_support(&mut self, feature: Feature, ignore: bool) {
        self.state_mut(feature).ignoring_support = ignore;
        trace!(%feature, ignore, "Feature support override changed");
    }

    /// Is `feature` enabled by the user?
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.state(feature).enabled
    }

    /// Is `feature` set to ignore terminal support?
    pub fn is_ignoring_support(&self, feature: Feature) -> bool {
        self.state(feature).ignoring_support
    }

    /// Was the terminal detected as supporting `feature` on its own?
    pub fn has_terminal_support(&self, feature: Feature) -> bool {
        self.state(feature).has_terminal_support
    }

    /// Can `feature` be guaranteed to work on the current terminal?
    ///
    /// Requires terminal support for the feature and, for every dependency,
    /// both terminal support and the user's consent.
    pub fn is_supported(&self, feature: Feature) -> bool {
        self.has_terminal_support(feature)
            && feature.dependencies().iter().all(|dependency| {
                self.has_terminal_support(*dependency) && self.is_enabled(*dependency)
            })
    }

    /// The last word on whether `feature` is used, combining preference,
    /// override, terminal support and dependencies.
    pub fn in_effect(&self, feature: Feature) -> bool {
        self.is_enabled(feature) && (self.is_ignoring_support(feature) || self.is_supported(feature))
    }

    /// The detected terminal support this graph was built from.
    pub fn terminal_support(&self) -> TerminalSupport {
        TerminalSupport {
            escape_codes: self.has_terminal_support(Feature::EscapeCodes),
            colors_8bit: self.has_terminal_support(Feature::Colors8Bit),
            colors_24bit: self.has_terminal_support(Feature::Colors24Bit),
            styles: self.has_terminal_support(Feature::Styles),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Capabilities::new(TerminalSupport::none())
    }
}
