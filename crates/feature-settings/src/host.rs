//! In-memory reference implementations of [`FontSystem`].
//!
//! Real deployments implement [`FontSystem`] over their platform's font
//! stack; these hosts keep descriptors in plain memory so the derivation
//! path can be exercised without one. `LenientFontSystem` mirrors
//! platforms whose constructors never fail, `StrictFontSystem` mirrors
//! platforms that validate descriptors and reject malformed ones.

use std::convert::Infallible;

use crate::descriptor::{AttributeValue, Attributes};
use crate::error::FontConstructionError;
use crate::registry::FEATURE_SETTINGS_ATTRIBUTE;
use crate::system::FontSystem;

/// A font held entirely in memory: a point size and an attribute mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryFont {
    size: f32,
    attributes: Attributes,
}

impl MemoryFont {
    pub fn new(size: f32, attributes: Attributes) -> Self {
        Self { size, attributes }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Host without descriptor validation: construction always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientFontSystem;

impl FontSystem for LenientFontSystem {
    type Font = MemoryFont;
    type Error = Infallible;

    fn attributes(&self, font: &MemoryFont) -> Attributes {
        font.attributes.clone()
    }

    fn point_size(&self, font: &MemoryFont) -> f32 {
        font.size
    }

    fn font_with_attributes(
        &self,
        attributes: Attributes,
        size: f32,
    ) -> Result<MemoryFont, Infallible> {
        Ok(MemoryFont::new(size, attributes))
    }
}

/// Host with descriptor validation: a malformed mapping is rejected with
/// [`FontConstructionError`] instead of producing a degraded font.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictFontSystem;

impl FontSystem for StrictFontSystem {
    type Font = MemoryFont;
    type Error = FontConstructionError;

    fn attributes(&self, font: &MemoryFont) -> Attributes {
        font.attributes.clone()
    }

    fn point_size(&self, font: &MemoryFont) -> f32 {
        font.size
    }

    fn font_with_attributes(
        &self,
        attributes: Attributes,
        size: f32,
    ) -> Result<MemoryFont, FontConstructionError> {
        if !(size.is_finite() && size > 0.0) {
            return Err(FontConstructionError::InvalidPointSize(size));
        }
        match attributes.get(FEATURE_SETTINGS_ATTRIBUTE) {
            None | Some(AttributeValue::Settings(_)) => {}
            Some(_) => {
                return Err(FontConstructionError::MalformedSettings {
                    key: FEATURE_SETTINGS_ATTRIBUTE.to_owned(),
                });
            }
        }
        Ok(MemoryFont::new(size, attributes))
    }
}
