//! # AAT feature settings
//!
//! Encode human-meaningful typographic choices (number case, number
//! spacing, vertical position, small caps, stylistic alternates) into the
//! (feature-type, feature-selector) pairs an AAT-style font host consumes,
//! merge them into a font descriptor's attribute mapping, and derive a new
//! font from the result at the original point size.
//!
//! ## Example
//!
//! ```
//! use aat_feature_settings::{
//!     Attributes, LenientFontSystem, MemoryFont, NumberCase, SmallCaps, derive_font,
//! };
//!
//! let system = LenientFontSystem;
//! let font = MemoryFont::new(12.0, Attributes::new());
//! let derived = derive_font(
//!     &system,
//!     &font,
//!     &[NumberCase::Upper.into(), SmallCaps::FromLowercase.into()],
//! )
//! .unwrap();
//! assert_eq!(derived.attributes().feature_settings().len(), 2);
//! ```

mod descriptor;
mod error;
mod host;
pub mod registry;
mod setting;
mod system;
mod variants;

pub use descriptor::{Attributes, AttributeValue, apply_features, feature_settings};
pub use error::{FontConstructionError, ParseFeatureError};
pub use host::{LenientFontSystem, MemoryFont, StrictFontSystem};
pub use setting::FeatureSetting;
pub use system::{FontSystem, derive_font};
pub use variants::{
    FeatureVariant, NumberCase, NumberSpacing, SmallCaps, StylisticAlternates, VerticalPosition,
};
