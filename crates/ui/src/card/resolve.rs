//! Prop resolution for the card.
//!
//! Merges the three precedence layers (explicit prop, ambient configuration,
//! built-in default) into one fully resolved configuration and normalizes
//! legacy prop aliases, so the composer and the render code never see an
//! "inherit" value or an alias. Nothing in here panics: unset or invalid
//! optional input resolves to the documented default.

use super::CardTab;
use crate::config::Variant;
use crate::tabs::{TabItem, TabSize};

/// Card size scale. Local-only: unlike the variant it is never taken from
/// the ambient configuration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardSize {
    #[default]
    Default,
    Small,
}

impl CardSize {
    /// Parse a size prop value. Anything other than "small" is the default.
    pub fn parse(s: Option<&str>) -> CardSize {
        match s {
            Some("small") => CardSize::Small,
            _ => CardSize::Default,
        }
    }
}

/// Per-slot class overrides, appended after each slot's base class.
#[derive(Clone, Debug, Default)]
pub struct CardSlotClasses {
    pub header: Option<String>,
    pub title: Option<String>,
    pub extra: Option<String>,
    pub body: Option<String>,
    pub cover: Option<String>,
    pub actions: Option<String>,
}

/// Per-slot inline style overrides.
#[derive(Clone, Debug, Default)]
pub struct CardSlotStyles {
    pub header: Option<String>,
    pub title: Option<String>,
    pub extra: Option<String>,
    pub body: Option<String>,
    pub cover: Option<String>,
    pub actions: Option<String>,
}

/// Raw resolver input, one snapshot of the card's configuration props.
#[derive(Default)]
pub struct ResolveInputs {
    pub size: Option<String>,
    pub variant: Option<String>,
    /// Legacy flag: `Some(false)` means borderless, `Some(true)` outlined.
    pub bordered: Option<bool>,
    pub ambient_variant: Option<Variant>,
    pub loading: bool,
    pub class_names: CardSlotClasses,
    pub styles: CardSlotStyles,
    /// Legacy alias for `styles.body`; the explicit field wins.
    pub body_style: Option<String>,
}

/// Fully resolved configuration. Every field holds a concrete value.
#[derive(Clone, Debug)]
pub struct CardConfig {
    pub size: CardSize,
    pub variant: Variant,
    pub loading: bool,
    pub classes: CardSlotClasses,
    pub styles: CardSlotStyles,
}

impl CardConfig {
    pub fn resolve(inputs: ResolveInputs) -> CardConfig {
        let mut styles = inputs.styles;
        styles.body = merge_body_style(styles.body.take(), inputs.body_style);
        CardConfig {
            size: CardSize::parse(inputs.size.as_deref()),
            variant: resolve_variant(
                inputs.variant.as_deref().and_then(Variant::parse),
                inputs.bordered,
                inputs.ambient_variant,
            ),
            loading: inputs.loading,
            classes: inputs.class_names,
            styles,
        }
    }
}

/// Variant precedence: local prop, then the legacy `bordered` flag, then the
/// ambient configuration, then the outlined default. A set local value keeps
/// winning over any later ambient change.
pub fn resolve_variant(
    local: Option<Variant>,
    bordered: Option<bool>,
    ambient: Option<Variant>,
) -> Variant {
    if let Some(variant) = local {
        return variant;
    }
    match bordered {
        Some(false) => Variant::Borderless,
        Some(true) => Variant::Outlined,
        None => ambient.unwrap_or(Variant::Outlined),
    }
}

/// Size handed to the tab strip. An explicit `tab_props.size` wins; otherwise
/// the card size maps small to small and default to large.
pub fn tab_strip_size(size: CardSize, tab_props_size: Option<TabSize>) -> TabSize {
    tab_props_size.unwrap_or(match size {
        CardSize::Small => TabSize::Small,
        CardSize::Default => TabSize::Large,
    })
}

/// Base slot class plus the caller's override, if any.
pub fn slot_class(base: &str, custom: Option<&str>) -> String {
    match custom {
        Some(custom) if !custom.is_empty() => format!("{base} {custom}"),
        _ => base.to_string(),
    }
}

/// Folds the legacy `body_style` prop into `styles.body`.
pub fn merge_body_style(body: Option<String>, legacy: Option<String>) -> Option<String> {
    body.or(legacy)
}

/// Body style actually applied. While the skeleton is shown the override is
/// suppressed, so a zeroed padding cannot collapse the loading placeholder.
pub fn effective_body_style(body: Option<&str>, loading: bool) -> Option<String> {
    if loading {
        None
    } else {
        body.map(str::to_string)
    }
}

/// Normalizes tab descriptors into the strip's shape: the deprecated `tab`
/// field folds into `label`, `closable` defaults to true.
pub fn normalize_tabs(list: Vec<CardTab>) -> Vec<TabItem> {
    list.into_iter()
        .map(|tab| {
            if tab.label.is_none() && tab.tab.is_some() {
                log::warn!("Card: `tab` on tab \"{}\" is deprecated, use `label` instead", tab.key);
            }
            TabItem {
                key: tab.key,
                label: tab.label.or(tab.tab).unwrap_or_default(),
                disabled: tab.disabled,
                closable: tab.closable.unwrap_or(true),
            }
        })
        .collect()
}

/// Key of the first descriptor, or the empty sentinel for an empty list.
pub fn first_tab_key(items: &[TabItem]) -> String {
    items.first().map(|item| item.key.clone()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_is_local_only_and_defaults() {
        assert_eq!(CardSize::parse(None), CardSize::Default);
        assert_eq!(CardSize::parse(Some("small")), CardSize::Small);
        assert_eq!(CardSize::parse(Some("medium")), CardSize::Default);
    }

    #[test]
    fn variant_defaults_to_outlined() {
        assert_eq!(resolve_variant(None, None, None), Variant::Outlined);
    }

    #[test]
    fn ambient_variant_applies_when_local_is_unset() {
        assert_eq!(
            resolve_variant(None, None, Some(Variant::Borderless)),
            Variant::Borderless
        );
    }

    #[test]
    fn local_variant_wins_over_any_ambient_value() {
        // The sequence from the config-provider scenario: ambient flips to
        // borderless, then a local override appears, then ambient flips again.
        assert_eq!(resolve_variant(None, None, None), Variant::Outlined);
        assert_eq!(
            resolve_variant(None, None, Some(Variant::Borderless)),
            Variant::Borderless
        );
        assert_eq!(
            resolve_variant(Some(Variant::Outlined), None, Some(Variant::Borderless)),
            Variant::Outlined
        );
        assert_eq!(
            resolve_variant(Some(Variant::Outlined), None, Some(Variant::Borderless)),
            Variant::Outlined
        );
    }

    #[test]
    fn legacy_bordered_flag_counts_as_explicit() {
        assert_eq!(
            resolve_variant(None, Some(false), Some(Variant::Outlined)),
            Variant::Borderless
        );
        assert_eq!(
            resolve_variant(None, Some(true), Some(Variant::Borderless)),
            Variant::Outlined
        );
        // But the variant prop still outranks it.
        assert_eq!(
            resolve_variant(Some(Variant::Borderless), Some(true), None),
            Variant::Borderless
        );
    }

    #[test]
    fn unknown_variant_string_resolves_like_unset() {
        let config = CardConfig::resolve(ResolveInputs {
            variant: Some("dotted".to_string()),
            ambient_variant: Some(Variant::Borderless),
            ..Default::default()
        });
        assert_eq!(config.variant, Variant::Borderless);
    }

    #[test]
    fn tab_strip_size_maps_card_size() {
        assert_eq!(tab_strip_size(CardSize::Default, None), TabSize::Large);
        assert_eq!(tab_strip_size(CardSize::Small, None), TabSize::Small);
    }

    #[test]
    fn tab_props_size_overrides_the_mapping() {
        assert_eq!(
            tab_strip_size(CardSize::Default, Some(TabSize::Small)),
            TabSize::Small
        );
        assert_eq!(
            tab_strip_size(CardSize::Small, Some(TabSize::Large)),
            TabSize::Large
        );
    }

    #[test]
    fn slot_class_appends_custom_class() {
        assert_eq!(slot_class("card__head", None), "card__head");
        assert_eq!(
            slot_class("card__head", Some("custom-head")),
            "card__head custom-head"
        );
        assert_eq!(slot_class("card__head", Some("")), "card__head");
    }

    #[test]
    fn legacy_body_style_folds_into_styles_body() {
        assert_eq!(
            merge_body_style(None, Some("padding: 0;".to_string())),
            Some("padding: 0;".to_string())
        );
        assert_eq!(
            merge_body_style(
                Some("color: red;".to_string()),
                Some("padding: 0;".to_string())
            ),
            Some("color: red;".to_string())
        );
    }

    #[test]
    fn loading_neutralizes_the_body_padding_override() {
        assert_eq!(effective_body_style(Some("padding: 0;"), true), None);
        assert_eq!(
            effective_body_style(Some("padding: 0;"), false),
            Some("padding: 0;".to_string())
        );
        assert_eq!(effective_body_style(None, true), None);
    }

    #[test]
    fn resolve_produces_concrete_values_for_empty_input() {
        let config = CardConfig::resolve(ResolveInputs::default());
        assert_eq!(config.size, CardSize::Default);
        assert_eq!(config.variant, Variant::Outlined);
        assert!(!config.loading);
        assert!(config.styles.body.is_none());
    }

    #[test]
    fn normalize_tabs_applies_alias_and_defaults() {
        let items = normalize_tabs(vec![
            CardTab::new("basic", || "Basic"),
            CardTab {
                key: "deprecated".to_string(),
                tab: Some(leptos::prelude::ViewFn::default()),
                ..Default::default()
            },
            CardTab {
                key: "disabled".to_string(),
                disabled: true,
                ..Default::default()
            },
            CardTab {
                key: "not-closable".to_string(),
                closable: Some(false),
                ..Default::default()
            },
        ]);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].key, "basic");
        assert!(!items[0].disabled);
        assert!(items[0].closable);
        assert_eq!(items[1].key, "deprecated");
        assert!(items[2].disabled);
        assert!(!items[3].closable);
    }

    #[test]
    fn first_tab_key_falls_back_to_sentinel() {
        assert_eq!(first_tab_key(&[]), "");
        let items = normalize_tabs(vec![CardTab::new("tab1", || "One")]);
        assert_eq!(first_tab_key(&items), "tab1");
    }
}
