//! AAT feature-registry constants.
//!
//! The numeric identifiers below are owned by the host platform's font
//! feature registry (Apple's `SFNTLayoutTypes.h`); this crate only owns the
//! association between a human-readable option and these numbers.

/// Number spacing feature type.
pub const NUMBER_SPACING_TYPE: u16 = 6;

/// Fixed-width numerals.
pub const MONOSPACED_NUMBERS_SELECTOR: u16 = 0;

/// Proportional-width numerals.
pub const PROPORTIONAL_NUMBERS_SELECTOR: u16 = 1;

/// Vertical position feature type.
pub const VERTICAL_POSITION_TYPE: u16 = 10;

/// Glyphs on the baseline.
pub const NORMAL_POSITION_SELECTOR: u16 = 0;

/// Superior (superscript) glyphs.
pub const SUPERIORS_SELECTOR: u16 = 1;

/// Inferior (subscript) glyphs.
pub const INFERIORS_SELECTOR: u16 = 2;

/// Ordinal suffix glyphs (1st, 2nd).
pub const ORDINALS_SELECTOR: u16 = 3;

/// Inferiors for scientific notation.
pub const SCIENTIFIC_INFERIORS_SELECTOR: u16 = 4;

/// Number case feature type.
pub const NUMBER_CASE_TYPE: u16 = 21;

/// Old-style (lowercase) figures.
pub const LOWER_CASE_NUMBERS_SELECTOR: u16 = 0;

/// Lining (uppercase) figures.
pub const UPPER_CASE_NUMBERS_SELECTOR: u16 = 1;

/// Stylistic alternatives feature type, shared by all twenty alternate sets.
pub const STYLISTIC_ALTERNATIVES_TYPE: u16 = 35;

/// No stylistic alternates.
pub const NO_STYLISTIC_ALTERNATES_SELECTOR: u16 = 0;

/// Lower case feature type.
pub const LOWER_CASE_TYPE: u16 = 37;

/// Default lowercase forms.
pub const DEFAULT_LOWER_CASE_SELECTOR: u16 = 0;

/// Small caps derived from lowercase.
pub const LOWER_CASE_SMALL_CAPS_SELECTOR: u16 = 1;

/// Upper case feature type.
pub const UPPER_CASE_TYPE: u16 = 38;

/// Default uppercase forms.
pub const DEFAULT_UPPER_CASE_SELECTOR: u16 = 0;

/// Small caps derived from uppercase.
pub const UPPER_CASE_SMALL_CAPS_SELECTOR: u16 = 1;

/// On-selector for stylistic alternate set `n` (1..=20).
///
/// The registry assigns selectors pairwise: alt-one on/off = 2/3 up through
/// alt-twenty on/off = 40/41.
pub const fn stylistic_alt_on_selector(n: u16) -> u16 {
    n * 2
}

/// Off-selector for stylistic alternate set `n` (1..=20).
pub const fn stylistic_alt_off_selector(n: u16) -> u16 {
    n * 2 + 1
}

/// Descriptor attribute key under which the host stores the ordered
/// feature-settings sequence.
pub const FEATURE_SETTINGS_ATTRIBUTE: &str = "NSCTFontFeatureSettingsAttribute";

/// Record key for the feature type identifier in one settings entry.
pub const FEATURE_TYPE_IDENTIFIER_KEY: &str = "CTFeatureTypeIdentifier";

/// Record key for the feature selector identifier in one settings entry.
pub const FEATURE_SELECTOR_IDENTIFIER_KEY: &str = "CTFeatureSelectorIdentifier";
