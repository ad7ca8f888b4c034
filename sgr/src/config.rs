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

use crate::{Capabilities, Feature};

/// Override for a single [`Feature`], applied on top of terminal detection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct FeatureConfig {
    /// Force the feature on or off. `None` keeps the detected default.
    pub enabled: Option<bool>,
    /// Treat the feature as usable even if the terminal lacks support.
    pub ignore_support: bool,
}

impl FeatureConfig {
    /// Leave the feature as detected.
    pub const fn detected() -> FeatureConfig {
        FeatureConfig {
            enabled: None,
            ignore_support: false,
        }
    }
    /// Turn the feature off.
    pub const fn disabled() -> FeatureConfig {
        FeatureConfig {
            enabled: Some(false),
            ignore_support: false,
        }
    }
    /// Turn the feature on and use it whatever the terminal reports.
    pub const fn forced() -> FeatureConfig {
        FeatureConfig {
            enabled: Some(true),
            ignore_support: true,
        }
    }
}

/// Capability overrides for a [`TerminalSession`](crate::TerminalSession).
///
/// The presets mirror the common rendering levels:
///
/// - [`SessionConfig::detected`]: whatever the environment reports
/// - [`SessionConfig::plain`]: no escape codes at all
/// - [`SessionConfig::basic_color_only`]: 16 colors
/// - [`SessionConfig::fixed_color_only`]: up to 256 colors
/// - [`SessionConfig::true_color`]: 24-bit color even on unknown terminals
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SessionConfig {
    features: [FeatureConfig; 4],
}

impl SessionConfig {
    /// No overrides
    pub fn detected() -> SessionConfig {
        SessionConfig::default()
    }
    /// Strip all escape codes
    pub fn plain() -> SessionConfig {
        SessionConfig::detected().with_feature(Feature::EscapeCodes, FeatureConfig::disabled())
    }
    /// Strip all but basic color
    pub fn basic_color_only() -> SessionConfig {
        SessionConfig::detected()
            .with_feature(Feature::Colors8Bit, FeatureConfig::disabled())
            .with_feature(Feature::Colors24Bit, FeatureConfig::disabled())
    }
    /// Strip all but fixed color
    pub fn fixed_color_only() -> SessionConfig {
        SessionConfig::detected().with_feature(Feature::Colors24Bit, FeatureConfig::disabled())
    }
    /// Force true color
    pub fn true_color() -> SessionConfig {
        SessionConfig::detected()
            .with_feature(Feature::EscapeCodes, FeatureConfig::forced())
            .with_feature(Feature::Colors24Bit, FeatureConfig::forced())
    }

    /// Replaces the override for `feature`.
    pub fn with_feature(mut self, feature: Feature, config: FeatureConfig) -> SessionConfig {
        self.features[feature as usize] = config;
        self
    }

    /// The override for `feature`.
    pub fn feature(&self, feature: Feature) -> FeatureConfig {
        self.features[feature as usize]
    }

    /// Applies every override to `capabilities`.
    pub fn apply(&self, capabilities: &mut Capabilities) {
        for feature in Feature::ALL {
            let config = self.feature(feature);
            match config.enabled {
                Some(true) => capabilities.enable(feature),
                Some(false) => capabilities.disable(feature),
                None => {}
            }
            if config.ignore_support {
                capabilities.ignore_support(feature, true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TerminalSupport;

    fn applied(config: &SessionConfig, support: TerminalSupport) -> Capabilities {
        let mut capabilities = Capabilities::new(support);
        config.apply(&mut capabilities);
        capabilities
    }

    #[test]
    fn test_detected_changes_nothing() {
        let capabilities = applied(&SessionConfig::detected(), TerminalSupport::all());
        assert_eq!(capabilities, Capabilities::new(TerminalSupport::all()));
        assert_eq!(SessionConfig::default(), SessionConfig::detected());
    }

    #[test]
    fn test_plain_disables_escape_codes() {
        let capabilities = applied(&SessionConfig::plain(), TerminalSupport::all());
        assert!(!capabilities.in_effect(Feature::EscapeCodes));
        assert!(!capabilities.is_supported(Feature::Colors24Bit));
    }

    #[test]
    fn test_basic_color_only() {
        let capabilities = applied(&SessionConfig::basic_color_only(), TerminalSupport::all());
        assert!(capabilities.in_effect(Feature::EscapeCodes));
        assert!(!capabilities.in_effect(Feature::Colors8Bit));
        assert!(!capabilities.in_effect(Feature::Colors24Bit));
        assert!(capabilities.in_effect(Feature::Styles));
    }

    #[test]
    fn test_fixed_color_only() {
        let capabilities = applied(&SessionConfig::fixed_color_only(), TerminalSupport::all());
        assert!(capabilities.in_effect(Feature::Colors8Bit));
        assert!(!capabilities.in_effect(Feature::Colors24Bit));
    }

    #[test]
    fn test_true_color_on_unknown_terminal() {
        let capabilities = applied(&SessionConfig::true_color(), TerminalSupport::none());
        assert!(capabilities.in_effect(Feature::EscapeCodes));
        assert!(capabilities.in_effect(Feature::Colors24Bit));
        assert!(!capabilities.in_effect(Feature::Colors8Bit));
        assert!(!capabilities.in_effect(Feature::Styles));
    }

    #[test]
    fn test_with_feature_round_trips() {
        let config = SessionConfig::detected().with_feature(Feature::Styles, FeatureConfig::forced());
        assert_eq!(config.feature(Feature::Styles), FeatureConfig::forced());
        assert_eq!(config.feature(Feature::EscapeCodes), FeatureConfig::detected());
    }
}
