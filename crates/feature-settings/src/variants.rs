//! Typographic feature families and their settings mappings.
//!
//! Each family is a closed enum whose members select exactly one semantic
//! behavior. `settings()` is a total lookup into the platform registry:
//! every member yields a fixed, non-empty sequence of
//! [`FeatureSetting`](crate::FeatureSetting) values. The families are not
//! mutually exclusive; a single request may combine members from any of
//! them.

use std::str::FromStr;

use crate::error::ParseFeatureError;
use crate::registry::*;
use crate::setting::FeatureSetting;

/// Case of numeral glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberCase {
    /// Lining figures, aligned with uppercase letters.
    Upper,
    /// Old-style figures with ascenders and descenders.
    Lower,
}

impl NumberCase {
    pub fn settings(&self) -> Vec<FeatureSetting> {
        let selector = match self {
            Self::Upper => UPPER_CASE_NUMBERS_SELECTOR,
            Self::Lower => LOWER_CASE_NUMBERS_SELECTOR,
        };
        vec![FeatureSetting::new(NUMBER_CASE_TYPE, selector)]
    }
}

/// Horizontal spacing of numeral glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSpacing {
    /// Fixed-width numerals, for tabular alignment.
    Monospaced,
    /// Numerals spaced to their natural widths.
    Proportional,
}

impl NumberSpacing {
    pub fn settings(&self) -> Vec<FeatureSetting> {
        let selector = match self {
            Self::Monospaced => MONOSPACED_NUMBERS_SELECTOR,
            Self::Proportional => PROPORTIONAL_NUMBERS_SELECTOR,
        };
        vec![FeatureSetting::new(NUMBER_SPACING_TYPE, selector)]
    }
}

/// Vertical placement of glyphs relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPosition {
    Normal,
    Superscript,
    Subscript,
    /// Ordinal suffixes (1st, 2nd) raised and shrunk.
    Ordinals,
    /// Inferiors sized for scientific notation (H₂O).
    ScientificInferiors,
}

impl VerticalPosition {
    pub fn settings(&self) -> Vec<FeatureSetting> {
        let selector = match self {
            Self::Normal => NORMAL_POSITION_SELECTOR,
            Self::Superscript => SUPERIORS_SELECTOR,
            Self::Subscript => INFERIORS_SELECTOR,
            Self::Ordinals => ORDINALS_SELECTOR,
            Self::ScientificInferiors => SCIENTIFIC_INFERIORS_SELECTOR,
        };
        vec![FeatureSetting::new(VERTICAL_POSITION_TYPE, selector)]
    }
}

/// Small-caps substitution.
///
/// The two directions are independent features in the registry and are not
/// mutually exclusive: a request may enable both `FromUppercase` and
/// `FromLowercase` at once, which yields two settings with different
/// feature types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmallCaps {
    /// Reset both case directions to their default forms.
    ///
    /// Because the directions toggle independently, disabling emits two
    /// settings rather than one, so that each direction is explicitly
    /// returned to its default.
    Disabled,
    /// Substitute small caps for uppercase letters.
    FromUppercase,
    /// Substitute small caps for lowercase letters.
    FromLowercase,
}

impl SmallCaps {
    pub fn settings(&self) -> Vec<FeatureSetting> {
        match self {
            Self::Disabled => vec![
                FeatureSetting::new(UPPER_CASE_TYPE, DEFAULT_UPPER_CASE_SELECTOR),
                FeatureSetting::new(LOWER_CASE_TYPE, DEFAULT_LOWER_CASE_SELECTOR),
            ],
            Self::FromUppercase => vec![FeatureSetting::new(
                UPPER_CASE_TYPE,
                UPPER_CASE_SMALL_CAPS_SELECTOR,
            )],
            Self::FromLowercase => vec![FeatureSetting::new(
                LOWER_CASE_TYPE,
                LOWER_CASE_SMALL_CAPS_SELECTOR,
            )],
        }
    }
}

/// Stylistic alternate sets one through twenty, each independently
/// toggleable, plus an explicit "no alternates" reset.
///
/// All twenty sets share one feature type; the registry assigns each set
/// its own on/off selector pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylisticAlternates {
    NoAlternates,
    One { on: bool },
    Two { on: bool },
    Three { on: bool },
    Four { on: bool },
    Five { on: bool },
    Six { on: bool },
    Seven { on: bool },
    Eight { on: bool },
    Nine { on: bool },
    Ten { on: bool },
    Eleven { on: bool },
    Twelve { on: bool },
    Thirteen { on: bool },
    Fourteen { on: bool },
    Fifteen { on: bool },
    Sixteen { on: bool },
    Seventeen { on: bool },
    Eighteen { on: bool },
    Nineteen { on: bool },
    Twenty { on: bool },
}

impl StylisticAlternates {
    /// Builds the member for alternate set `n` (1..=20).
    pub fn numbered(n: u16, on: bool) -> Option<Self> {
        Some(match n {
            1 => Self::One { on },
            2 => Self::Two { on },
            3 => Self::Three { on },
            4 => Self::Four { on },
            5 => Self::Five { on },
            6 => Self::Six { on },
            7 => Self::Seven { on },
            8 => Self::Eight { on },
            9 => Self::Nine { on },
            10 => Self::Ten { on },
            11 => Self::Eleven { on },
            12 => Self::Twelve { on },
            13 => Self::Thirteen { on },
            14 => Self::Fourteen { on },
            15 => Self::Fifteen { on },
            16 => Self::Sixteen { on },
            17 => Self::Seventeen { on },
            18 => Self::Eighteen { on },
            19 => Self::Nineteen { on },
            20 => Self::Twenty { on },
            _ => return None,
        })
    }

    /// The set number and toggle state, or `None` for `NoAlternates`.
    pub fn ordinal(&self) -> Option<(u16, bool)> {
        Some(match *self {
            Self::NoAlternates => return None,
            Self::One { on } => (1, on),
            Self::Two { on } => (2, on),
            Self::Three { on } => (3, on),
            Self::Four { on } => (4, on),
            Self::Five { on } => (5, on),
            Self::Six { on } => (6, on),
            Self::Seven { on } => (7, on),
            Self::Eight { on } => (8, on),
            Self::Nine { on } => (9, on),
            Self::Ten { on } => (10, on),
            Self::Eleven { on } => (11, on),
            Self::Twelve { on } => (12, on),
            Self::Thirteen { on } => (13, on),
            Self::Fourteen { on } => (14, on),
            Self::Fifteen { on } => (15, on),
            Self::Sixteen { on } => (16, on),
            Self::Seventeen { on } => (17, on),
            Self::Eighteen { on } => (18, on),
            Self::Nineteen { on } => (19, on),
            Self::Twenty { on } => (20, on),
        })
    }

    pub fn settings(&self) -> Vec<FeatureSetting> {
        let selector = match self.ordinal() {
            None => NO_STYLISTIC_ALTERNATES_SELECTOR,
            Some((n, true)) => stylistic_alt_on_selector(n),
            Some((n, false)) => stylistic_alt_off_selector(n),
        };
        vec![FeatureSetting::new(STYLISTIC_ALTERNATIVES_TYPE, selector)]
    }
}

/// One selected typographic feature, from any of the five families.
///
/// This is the provider type consumed by
/// [`apply_features`](crate::apply_features): an ordered sequence of these,
/// heterogeneous across families, describes one feature request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureVariant {
    NumberCase(NumberCase),
    NumberSpacing(NumberSpacing),
    VerticalPosition(VerticalPosition),
    SmallCaps(SmallCaps),
    StylisticAlternates(StylisticAlternates),
}

impl FeatureVariant {
    /// The ordered settings this variant contributes.
    ///
    /// Total and pure: every member of every family maps to a fixed,
    /// non-empty sequence.
    pub fn settings(&self) -> Vec<FeatureSetting> {
        match self {
            Self::NumberCase(v) => v.settings(),
            Self::NumberSpacing(v) => v.settings(),
            Self::VerticalPosition(v) => v.settings(),
            Self::SmallCaps(v) => v.settings(),
            Self::StylisticAlternates(v) => v.settings(),
        }
    }
}

impl From<NumberCase> for FeatureVariant {
    fn from(v: NumberCase) -> Self {
        Self::NumberCase(v)
    }
}

impl From<NumberSpacing> for FeatureVariant {
    fn from(v: NumberSpacing) -> Self {
        Self::NumberSpacing(v)
    }
}

impl From<VerticalPosition> for FeatureVariant {
    fn from(v: VerticalPosition) -> Self {
        Self::VerticalPosition(v)
    }
}

impl From<SmallCaps> for FeatureVariant {
    fn from(v: SmallCaps) -> Self {
        Self::SmallCaps(v)
    }
}

impl From<StylisticAlternates> for FeatureVariant {
    fn from(v: StylisticAlternates) -> Self {
        Self::StylisticAlternates(v)
    }
}

impl FromStr for FeatureVariant {
    type Err = ParseFeatureError;

    /// Parses the `family=option` syntax used by the command line:
    /// `number-case=upper`, `number-spacing=monospaced`,
    /// `vertical-position=scientific-inferiors`,
    /// `small-caps=from-lowercase`, `alt7=on`, `alt12=off`,
    /// `no-alternates`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if spec == "no-alternates" {
            return Ok(StylisticAlternates::NoAlternates.into());
        }
        if let Some(rest) = spec.strip_prefix("alt") {
            if let Some((number, flag)) = rest.split_once('=') {
                let n = number
                    .parse::<u16>()
                    .map_err(|_| ParseFeatureError::UnknownFeature(spec.to_owned()))?;
                let on = match flag {
                    "on" => true,
                    "off" => false,
                    other => return Err(ParseFeatureError::InvalidAltFlag(other.to_owned())),
                };
                return StylisticAlternates::numbered(n, on)
                    .map(Into::into)
                    .ok_or(ParseFeatureError::AltOutOfRange(n));
            }
        }
        let (family, option) = spec
            .split_once('=')
            .ok_or_else(|| ParseFeatureError::UnknownFeature(spec.to_owned()))?;
        let unknown_option = || ParseFeatureError::UnknownOption {
            family: family.to_owned(),
            option: option.to_owned(),
        };
        match family {
            "number-case" => match option {
                "upper" => Ok(NumberCase::Upper.into()),
                "lower" => Ok(NumberCase::Lower.into()),
                _ => Err(unknown_option()),
            },
            "number-spacing" => match option {
                "monospaced" => Ok(NumberSpacing::Monospaced.into()),
                "proportional" => Ok(NumberSpacing::Proportional.into()),
                _ => Err(unknown_option()),
            },
            "vertical-position" => match option {
                "normal" => Ok(VerticalPosition::Normal.into()),
                "superscript" => Ok(VerticalPosition::Superscript.into()),
                "subscript" => Ok(VerticalPosition::Subscript.into()),
                "ordinals" => Ok(VerticalPosition::Ordinals.into()),
                "scientific-inferiors" => Ok(VerticalPosition::ScientificInferiors.into()),
                _ => Err(unknown_option()),
            },
            "small-caps" => match option {
                "disabled" => Ok(SmallCaps::Disabled.into()),
                "from-uppercase" => Ok(SmallCaps::FromUppercase.into()),
                "from-lowercase" => Ok(SmallCaps::FromLowercase.into()),
                _ => Err(unknown_option()),
            },
            _ => Err(ParseFeatureError::UnknownFeature(spec.to_owned())),
        }
    }
}
