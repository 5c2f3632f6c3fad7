//! Tab strip widget: a row of clickable tab labels with an optional
//! "add" affordance and extra content on either side.
//!
//! The strip owns no selection state. It highlights whatever `active_key`
//! says and reports clicks through `on_change`; disabled tabs never emit.

use leptos::prelude::*;

/// Tab strip sizing, decoupled from the card's own size scale.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TabSize {
    Small,
    Large,
}

impl TabSize {
    /// Parse a size prop value. Unknown strings count as "not set".
    pub fn parse(s: &str) -> Option<TabSize> {
        match s {
            "small" => Some(TabSize::Small),
            "large" => Some(TabSize::Large),
            _ => None,
        }
    }

    fn class(self) -> &'static str {
        match self {
            TabSize::Small => "tab-strip tab-strip--small",
            TabSize::Large => "tab-strip tab-strip--large",
        }
    }
}

/// One entry in the strip, already normalized (no legacy aliases).
#[derive(Clone)]
pub struct TabItem {
    pub key: String,
    pub label: ViewFn,
    pub disabled: bool,
    pub closable: bool,
}

/// Renders the row of tab labels.
#[component]
pub fn TabStrip(
    /// Tabs in rendering order. Keys must be unique.
    items: Vec<TabItem>,
    /// Key of the highlighted tab; an empty string highlights none.
    #[prop(into)]
    active_key: Signal<String>,
    /// Fires with the clicked tab's key. Disabled tabs do not fire.
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(default = TabSize::Large)]
    size: TabSize,
    /// Editable strips render an "add" affordance after the tabs.
    #[prop(optional)]
    editable: bool,
    #[prop(optional)]
    on_add: Option<Callback<()>>,
    /// Content before the tabs.
    #[prop(optional_no_strip)]
    left_extra: Option<ViewFn>,
    /// Content after the tabs (and after the add affordance).
    #[prop(optional_no_strip)]
    right_extra: Option<ViewFn>,
) -> impl IntoView {
    let strip_class = size.class();

    view! {
        <div class=strip_class role="tablist">
            {left_extra.map(|v| view! { <div class="tab-strip__extra tab-strip__extra--left">{v.run()}</div> })}
            <div class="tab-strip__nav">
                {items
                    .into_iter()
                    .map(|item| {
                        let key_for_class = item.key.clone();
                        let key_for_click = item.key.clone();
                        let disabled = item.disabled;
                        let tab_class = move || {
                            let mut class = String::from("tab-strip__tab");
                            if active_key.get() == key_for_class {
                                class.push_str(" tab-strip__tab--active");
                            }
                            if disabled {
                                class.push_str(" tab-strip__tab--disabled");
                            }
                            class
                        };
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=tab_class
                                disabled=disabled
                                on:click=move |_| {
                                    if !disabled {
                                        on_change.run(key_for_click.clone());
                                    }
                                }
                            >
                                {item.label.run()}
                            </button>
                        }
                    })
                    .collect_view()}
                {editable
                    .then(|| {
                        view! {
                            <button
                                type="button"
                                class="tab-strip__add"
                                on:click=move |_| {
                                    if let Some(handler) = on_add {
                                        handler.run(());
                                    }
                                }
                            >
                                "+"
                            </button>
                        }
                    })}
            </div>
            {right_extra.map(|v| view! { <div class="tab-strip__extra tab-strip__extra--right">{v.run()}</div> })}
        </div>
    }
}
