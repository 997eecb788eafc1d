//! End-to-end tests for the settings merge and the font-derivation path.

use aat_feature_settings::{
    AttributeValue, Attributes, FeatureSetting, FeatureVariant, FontConstructionError,
    LenientFontSystem, MemoryFont, NumberCase, NumberSpacing, SmallCaps, StrictFontSystem,
    StylisticAlternates, VerticalPosition, apply_features, derive_font, feature_settings,
    registry::FEATURE_SETTINGS_ATTRIBUTE,
};

fn pairs(settings: &[FeatureSetting]) -> Vec<(u16, u16)> {
    settings.iter().map(|s| (s.feature_type, s.selector)).collect()
}

fn base_with(settings: Vec<FeatureSetting>) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.set_feature_settings(settings);
    attributes
}

// ============================================================================
// Merge semantics
// ============================================================================

#[test]
fn test_apply_without_providers_is_identity() {
    let base = base_with(vec![FeatureSetting::new(21, 1)])
        .with("FontNameAttribute", AttributeValue::Text("Menlo".into()));

    let merged = apply_features(base.clone(), &[]);

    assert_eq!(merged, base);
    assert_eq!(pairs(merged.feature_settings()), vec![(21, 1)]);
}

#[test]
fn test_apply_appends_in_provider_order() {
    let providers: Vec<FeatureVariant> = vec![
        NumberCase::Upper.into(),
        NumberSpacing::Monospaced.into(),
    ];

    let merged = apply_features(Attributes::new(), &providers);

    assert_eq!(pairs(merged.feature_settings()), vec![(21, 1), (6, 0)]);
}

#[test]
fn test_apply_preserves_existing_entries_in_order() {
    let base = base_with(vec![
        FeatureSetting::new(35, 2),
        FeatureSetting::new(10, 3),
    ]);

    let merged = apply_features(base, &[VerticalPosition::Superscript.into()]);

    assert_eq!(
        pairs(merged.feature_settings()),
        vec![(35, 2), (10, 3), (10, 1)]
    );
}

#[test]
fn test_disabled_small_caps_yields_two_reset_entries() {
    let merged = apply_features(Attributes::new(), &[SmallCaps::Disabled.into()]);

    assert_eq!(pairs(merged.feature_settings()), vec![(38, 0), (37, 0)]);
}

#[test]
fn test_both_small_caps_directions_may_coexist() {
    let merged = apply_features(
        Attributes::new(),
        &[SmallCaps::FromUppercase.into(), SmallCaps::FromLowercase.into()],
    );

    assert_eq!(pairs(merged.feature_settings()), vec![(38, 1), (37, 1)]);
}

#[test]
fn test_repeated_application_grows_the_sequence() {
    // Append-only on purpose: the merge never deduplicates, so reapplying
    // the same providers must not be idempotent.
    let providers: Vec<FeatureVariant> = vec![NumberSpacing::Proportional.into()];

    let once = apply_features(Attributes::new(), &providers);
    let twice = apply_features(once.clone(), &providers);

    assert_eq!(once.feature_settings().len(), 1);
    assert_eq!(twice.feature_settings().len(), 2);
    assert_eq!(pairs(twice.feature_settings()), vec![(6, 1), (6, 1)]);
}

#[test]
fn test_all_families_combine_in_one_request() {
    let providers: Vec<FeatureVariant> = vec![
        NumberCase::Lower.into(),
        NumberSpacing::Monospaced.into(),
        VerticalPosition::Ordinals.into(),
        SmallCaps::FromUppercase.into(),
        StylisticAlternates::Seven { on: true }.into(),
        StylisticAlternates::Seven { on: false }.into(),
    ];

    let settings = feature_settings(&providers);

    assert_eq!(
        pairs(&settings),
        vec![(21, 0), (6, 0), (10, 3), (38, 1), (35, 14), (35, 15)]
    );
}

// ============================================================================
// Font derivation
// ============================================================================

#[test]
fn test_derive_with_empty_providers_still_constructs() {
    let font = MemoryFont::new(14.0, base_with(vec![FeatureSetting::new(6, 0)]));

    let derived = derive_font(&LenientFontSystem, &font, &[]).unwrap();

    assert_eq!(derived.size(), 14.0);
    assert_eq!(derived.attributes(), font.attributes());
}

#[test]
fn test_derive_keeps_the_original_point_size() {
    let font = MemoryFont::new(22.5, Attributes::new());

    let derived = derive_font(&StrictFontSystem, &font, &[NumberCase::Upper.into()]).unwrap();

    assert_eq!(derived.size(), 22.5);
    assert_eq!(pairs(derived.attributes().feature_settings()), vec![(21, 1)]);
}

#[test]
fn test_strict_host_rejects_malformed_base_mapping() {
    let malformed = Attributes::new().with(
        FEATURE_SETTINGS_ATTRIBUTE,
        AttributeValue::Text("not a settings sequence".into()),
    );
    let font = MemoryFont::new(12.0, malformed);

    let result = derive_font(&StrictFontSystem, &font, &[]);

    assert!(matches!(
        result,
        Err(FontConstructionError::MalformedSettings { .. })
    ));
}

#[test]
fn test_strict_host_rejects_invalid_point_size() {
    let font = MemoryFont::new(f32::NAN, Attributes::new());

    let result = derive_font(&StrictFontSystem, &font, &[NumberCase::Upper.into()]);

    assert!(matches!(
        result,
        Err(FontConstructionError::InvalidPointSize(_))
    ));
}

#[test]
fn test_lenient_host_never_fails() {
    // A host without descriptor validation accepts what a strict host
    // rejects; the foreign value under the reserved key reads as an empty
    // sequence and is replaced by the merge.
    let malformed = Attributes::new()
        .with(FEATURE_SETTINGS_ATTRIBUTE, AttributeValue::Number(7.0));
    let font = MemoryFont::new(12.0, malformed);

    let derived =
        derive_font(&LenientFontSystem, &font, &[SmallCaps::FromLowercase.into()]).unwrap();

    assert_eq!(pairs(derived.attributes().feature_settings()), vec![(37, 1)]);
}

// ============================================================================
// Parsed requests end to end
// ============================================================================

#[test]
fn test_parsed_specs_drive_derivation() {
    let providers: Vec<FeatureVariant> = "number-case=upper, small-caps=disabled, alt3=on"
        .split(',')
        .map(|s| s.trim().parse().unwrap())
        .collect();

    let font = MemoryFont::new(11.0, Attributes::new());
    let derived = derive_font(&StrictFontSystem, &font, &providers).unwrap();

    assert_eq!(
        pairs(derived.attributes().feature_settings()),
        vec![(21, 1), (38, 0), (37, 0), (35, 6)]
    );
}
