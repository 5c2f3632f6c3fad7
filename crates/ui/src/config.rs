//! Ambient configuration for the component library.
//!
//! A `ConfigProvider` higher up the tree supplies defaults that components
//! pick up through context unless the caller sets the matching prop locally.
//! The context value is read-only for consumers and reactive: changing the
//! provider's props re-resolves every card below it on the next render.

use leptos::prelude::*;

/// Border rendering variant shared between the provider and the card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    /// Default: the card draws its border.
    Outlined,
    /// No border is drawn.
    Borderless,
}

impl Variant {
    /// Parse a variant prop value. Unknown strings count as "not set".
    pub fn parse(s: &str) -> Option<Variant> {
        match s {
            "outlined" => Some(Variant::Outlined),
            "borderless" => Some(Variant::Borderless),
            _ => None,
        }
    }
}

/// Inherited defaults, threaded down via context.
#[derive(Clone, Copy)]
pub struct UiConfig {
    /// Variant to use when a component does not set one locally.
    pub variant: Signal<Option<Variant>>,
}

/// Provides [`UiConfig`] to all components below.
#[component]
pub fn ConfigProvider(
    /// Default variant for descendant components: "outlined" or "borderless".
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let variant = Signal::derive(move || variant.get().as_deref().and_then(Variant::parse));
    provide_context(UiConfig { variant });

    children()
}

/// Reads the ambient configuration, if a provider is present.
pub fn use_ui_config() -> Option<UiConfig> {
    use_context::<UiConfig>()
}
