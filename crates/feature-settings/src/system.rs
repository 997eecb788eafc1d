//! The host font system seam and the font-derivation wrapper.

use std::error::Error;

use log::debug;

use crate::descriptor::{Attributes, apply_features};
use crate::variants::FeatureVariant;

/// The host font system: descriptor storage plus font construction.
///
/// Everything behind this trait is out of this crate's hands — glyph
/// shaping, font loading, fallback. The crate needs exactly three
/// capabilities: read a font's current attribute mapping, read its point
/// size, and build a new font from a mapping at a size.
///
/// Whether construction can fail depends on the host platform. Hosts that
/// validate descriptors reject malformed mappings through their [`Error`]
/// type (see [`FontConstructionError`](crate::FontConstructionError));
/// hosts without validation set `Error` to
/// [`Infallible`](core::convert::Infallible). The two behaviors are
/// deliberately kept distinct rather than unified into one signature.
///
/// [`Error`]: FontSystem::Error
pub trait FontSystem {
    type Font;
    type Error: Error;

    /// The font's current attribute mapping.
    fn attributes(&self, font: &Self::Font) -> Attributes;

    /// The font's point size.
    fn point_size(&self, font: &Self::Font) -> f32;

    /// Constructs a new font from an attribute mapping at a point size.
    fn font_with_attributes(
        &self,
        attributes: Attributes,
        size: f32,
    ) -> Result<Self::Font, Self::Error>;
}

/// Derives a new font from `font` with the given features merged in.
///
/// The merged mapping keeps the source font's point size. A new font is
/// constructed even when `providers` is empty, so the caller always gets a
/// fresh instance; only construction itself can fail, and only on hosts
/// whose error type is inhabited.
pub fn derive_font<S: FontSystem>(
    system: &S,
    font: &S::Font,
    providers: &[FeatureVariant],
) -> Result<S::Font, S::Error> {
    let size = system.point_size(font);
    let attributes = apply_features(system.attributes(font), providers);
    debug!(
        "deriving font at {size}pt with {} feature settings",
        attributes.feature_settings().len()
    );
    system.font_with_attributes(attributes, size)
}
