//! Descriptor attribute mapping and the feature-settings merge.

use indexmap::IndexMap;
use log::debug;

use crate::registry::FEATURE_SETTINGS_ATTRIBUTE;
use crate::setting::FeatureSetting;
use crate::variants::FeatureVariant;

/// One value slot in a descriptor attribute mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
    /// The ordered feature-settings sequence kept under
    /// [`FEATURE_SETTINGS_ATTRIBUTE`].
    Settings(Vec<FeatureSetting>),
}

/// A font descriptor's attribute configuration.
///
/// String-keyed, insertion-ordered storage owned by the caller. The merge
/// in [`apply_features`] reads and rewrites exactly one reserved key
/// ([`FEATURE_SETTINGS_ATTRIBUTE`]) and leaves every other key untouched.
/// Inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    map: IndexMap<String, AttributeValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.map.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.map.get(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The feature-settings sequence under the reserved key.
    ///
    /// An absent key, or one holding a value of another kind, reads as the
    /// empty sequence.
    pub fn feature_settings(&self) -> &[FeatureSetting] {
        match self.map.get(FEATURE_SETTINGS_ATTRIBUTE) {
            Some(AttributeValue::Settings(settings)) => settings,
            _ => &[],
        }
    }

    /// Replaces the sequence under the reserved key.
    pub fn set_feature_settings(&mut self, settings: Vec<FeatureSetting>) {
        self.map.insert(
            FEATURE_SETTINGS_ATTRIBUTE.to_owned(),
            AttributeValue::Settings(settings),
        );
    }

    /// Builder-style convenience for seeding a descriptor.
    pub fn with(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.insert(key, value);
        self
    }
}

/// Concatenates the settings contributed by `providers`, in provider order
/// and, within one provider, in that family's fixed order.
pub fn feature_settings(providers: &[FeatureVariant]) -> Vec<FeatureSetting> {
    providers.iter().flat_map(FeatureVariant::settings).collect()
}

/// Merges the settings derived from `providers` into `attributes`.
///
/// The new settings are appended after whatever sequence already exists
/// under the reserved key; nothing is removed, reordered, or deduplicated,
/// so applying the same providers twice grows the sequence twice. With no
/// providers the mapping is returned unchanged.
pub fn apply_features(mut attributes: Attributes, providers: &[FeatureVariant]) -> Attributes {
    if providers.is_empty() {
        return attributes;
    }
    let mut merged = attributes.feature_settings().to_vec();
    let existing = merged.len();
    merged.extend(feature_settings(providers));
    debug!(
        "appending {} feature settings after {existing} existing",
        merged.len() - existing
    );
    attributes.set_feature_settings(merged);
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{NumberCase, NumberSpacing};

    #[test]
    fn absent_or_foreign_reserved_key_reads_as_empty() {
        assert!(Attributes::new().feature_settings().is_empty());

        let attributes = Attributes::new()
            .with(FEATURE_SETTINGS_ATTRIBUTE, AttributeValue::Number(4.0));
        assert!(attributes.feature_settings().is_empty());
    }

    #[test]
    fn merge_only_touches_the_reserved_key() {
        let attributes = Attributes::new()
            .with("FontNameAttribute", AttributeValue::Text("Menlo".into()))
            .with("FontSizeAttribute", AttributeValue::Number(11.0));

        let merged = apply_features(attributes, &[NumberCase::Upper.into()]);

        assert_eq!(
            merged.get("FontNameAttribute"),
            Some(&AttributeValue::Text("Menlo".into()))
        );
        assert_eq!(
            merged.get("FontSizeAttribute"),
            Some(&AttributeValue::Number(11.0))
        );
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn inserting_an_existing_key_replaces_its_value() {
        let mut attributes = Attributes::new();
        attributes.insert("FontSizeAttribute", AttributeValue::Number(11.0));
        attributes.insert("FontSizeAttribute", AttributeValue::Number(13.0));
        assert_eq!(
            attributes.get("FontSizeAttribute"),
            Some(&AttributeValue::Number(13.0))
        );
        assert_eq!(attributes.len(), 1);
    }

    #[test]
    fn settings_concatenate_in_provider_order() {
        let settings = feature_settings(&[
            NumberSpacing::Monospaced.into(),
            NumberCase::Upper.into(),
        ]);
        let pairs: Vec<(u16, u16)> = settings.into_iter().map(Into::into).collect();
        assert_eq!(pairs, vec![(6, 0), (21, 1)]);
    }
}
