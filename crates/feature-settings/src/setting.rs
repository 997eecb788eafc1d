//! The (type, selector) pair applied to a font.

use std::fmt::{self, Display, Formatter};

use crate::registry::{FEATURE_SELECTOR_IDENTIFIER_KEY, FEATURE_TYPE_IDENTIFIER_KEY};

/// One entry in the host font system's feature-settings table.
///
/// A setting selects one behavior (`selector`) within a feature family
/// (`feature_type`). Settings carry no identity beyond the two numbers, and
/// a settings sequence may hold several entries with the same feature type;
/// nothing in this crate deduplicates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureSetting {
    /// Feature type from the platform registry.
    pub feature_type: u16,
    /// Selector within the feature type.
    pub selector: u16,
}

impl FeatureSetting {
    pub const fn new(feature_type: u16, selector: u16) -> Self {
        Self {
            feature_type,
            selector,
        }
    }
}

impl From<(u16, u16)> for FeatureSetting {
    fn from((feature_type, selector): (u16, u16)) -> Self {
        Self::new(feature_type, selector)
    }
}

impl From<FeatureSetting> for (u16, u16) {
    fn from(setting: FeatureSetting) -> Self {
        (setting.feature_type, setting.selector)
    }
}

impl Display for FeatureSetting {
    /// Renders the two-fixed-key record shape the host expects for one
    /// settings table entry.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{FEATURE_TYPE_IDENTIFIER_KEY} = {}, {FEATURE_SELECTOR_IDENTIFIER_KEY} = {}}}",
            self.feature_type, self.selector
        )
    }
}
