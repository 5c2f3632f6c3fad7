//! Card container: a bordered panel composed of an optional header row,
//! tab strip, cover, body and action bar.
//!
//! The card inherits its variant from an enclosing [`ConfigProvider`] unless
//! set locally, renders only the slots its inputs call for, and owns the
//! active-tab selection unless the caller supplies `active_tab_key`.

use leptos::html::Div;
use leptos::prelude::*;

use crate::config::{use_ui_config, Variant};
use crate::skeleton::Skeleton;
use crate::tabs::{TabSize, TabStrip};

pub mod resolve;
pub mod slots;
pub mod tab_state;

pub use resolve::{CardConfig, CardSize, CardSlotClasses, CardSlotStyles};

use resolve::{
    effective_body_style, first_tab_key, normalize_tabs, resolve_variant, slot_class,
    ResolveInputs,
};
use slots::{compose, ActionsShape, SlotInputs, TabsInput};
use tab_state::TabSelection;

/// One tab descriptor. The list order is the rendering order and keys must
/// be unique within one card.
#[derive(Clone, Default)]
pub struct CardTab {
    pub key: String,
    pub label: Option<ViewFn>,
    /// Deprecated alias for `label`.
    pub tab: Option<ViewFn>,
    pub disabled: bool,
    /// Defaults to true; only meaningful on an editable strip.
    pub closable: Option<bool>,
}

impl CardTab {
    pub fn new(key: impl Into<String>, label: impl Into<ViewFn>) -> Self {
        CardTab {
            key: key.into(),
            label: Some(label.into()),
            ..Default::default()
        }
    }
}

/// Configuration forwarded to the tab strip.
#[derive(Clone, Copy, Default)]
pub struct CardTabProps {
    /// Overrides the size derived from the card's own size.
    pub size: Option<TabSize>,
    /// Editable strips render the add affordance, even for an empty list.
    pub editable: bool,
    pub on_add: Option<Callback<()>>,
}

/// Extra content flanking the tab strip: a single trailing node, or
/// explicit left/right sides.
#[derive(Clone)]
pub enum TabBarExtra {
    Trailing(ViewFn),
    Split {
        left: Option<ViewFn>,
        right: Option<ViewFn>,
    },
}

impl TabBarExtra {
    pub fn trailing(view: impl Into<ViewFn>) -> Self {
        TabBarExtra::Trailing(view.into())
    }

    pub fn split(left: Option<ViewFn>, right: Option<ViewFn>) -> Self {
        TabBarExtra::Split { left, right }
    }

    fn into_sides(self) -> (Option<ViewFn>, Option<ViewFn>) {
        match self {
            TabBarExtra::Trailing(view) => (None, Some(view)),
            TabBarExtra::Split { left, right } => (left, right),
        }
    }
}

/// Action bar input. Only a sequence of renderable nodes produces a slot;
/// scalar values are representable so loose call sites stay harmless, and
/// the composer drops them without rendering anything.
pub enum ActionsProp {
    List(Vec<AnyView>),
    Invalid,
}

impl ActionsProp {
    fn shape(&self) -> ActionsShape {
        match self {
            ActionsProp::List(nodes) => ActionsShape::List(nodes.len()),
            ActionsProp::Invalid => ActionsShape::Invalid,
        }
    }
}

impl From<Vec<AnyView>> for ActionsProp {
    fn from(nodes: Vec<AnyView>) -> Self {
        ActionsProp::List(nodes)
    }
}

macro_rules! scalar_actions_are_invalid {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for ActionsProp {
            fn from(_: $ty) -> Self {
                ActionsProp::Invalid
            }
        })*
    };
}

scalar_actions_are_invalid!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char, &'static str,
    String,
);

#[component]
pub fn Card(
    /// Header title content.
    #[prop(optional, into)]
    title: Option<AnyView>,
    /// Content on the right side of the header row.
    #[prop(optional, into)]
    extra: Option<AnyView>,
    /// Content rendered above the body, below the head region.
    #[prop(optional, into)]
    cover: Option<AnyView>,
    /// Action bar nodes; anything that is not a list renders nothing.
    #[prop(optional, into)]
    actions: Option<ActionsProp>,
    /// Tab descriptors. An empty list still renders the strip shell.
    #[prop(optional)]
    tab_list: Option<Vec<CardTab>>,
    #[prop(optional)]
    tab_props: CardTabProps,
    #[prop(optional)]
    tab_bar_extra: Option<TabBarExtra>,
    /// Controlled active tab key; presence opts into controlled mode.
    #[prop(optional, into)]
    active_tab_key: MaybeProp<String>,
    /// Initial key for uncontrolled mode; defaults to the first tab's key.
    #[prop(optional, into)]
    default_active_tab_key: MaybeProp<String>,
    /// Fires with the selected key on every tab change, in either mode.
    #[prop(optional)]
    on_tab_change: Option<Callback<String>>,
    /// Replaces the body content with a skeleton placeholder.
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// "default" or "small". Never inherited from ambient configuration.
    #[prop(optional, into)]
    size: MaybeProp<String>,
    /// "outlined" or "borderless"; unset inherits from the provider.
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Legacy flag: `bordered=false` equals `variant="borderless"`.
    #[prop(optional, into)]
    bordered: MaybeProp<bool>,
    /// Extra class on the root element.
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline style on the root element.
    #[prop(optional, into)]
    style: MaybeProp<String>,
    #[prop(optional)]
    class_names: CardSlotClasses,
    #[prop(optional)]
    styles: CardSlotStyles,
    /// Legacy alias for `styles.body`.
    #[prop(optional, into)]
    body_style: MaybeProp<String>,
    /// Forwarded to the root element.
    #[prop(optional)]
    node_ref: NodeRef<Div>,
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let ambient = use_ui_config();

    // One-shot resolution for the structural decisions. The variant is also
    // resolved reactively in the root class below, so ambient updates and a
    // later local override both apply live.
    let config = CardConfig::resolve(ResolveInputs {
        size: size.get_untracked(),
        variant: variant.get_untracked(),
        bordered: bordered.get_untracked(),
        ambient_variant: ambient.and_then(|config| config.variant.get_untracked()),
        loading: loading.get_untracked().unwrap_or(false),
        class_names,
        styles,
        body_style: body_style.get_untracked(),
    });

    let tabs_input = tab_list.as_ref().map(|list| TabsInput {
        count: list.len(),
        editable: tab_props.editable,
        size_override: tab_props.size,
    });
    let plan = compose(
        &SlotInputs {
            has_title: title.is_some(),
            has_extra: extra.is_some(),
            tabs: tabs_input,
            has_cover: cover.is_some(),
            actions: actions
                .as_ref()
                .map(ActionsProp::shape)
                .unwrap_or(ActionsShape::Missing),
        },
        &config,
    );

    let tab_items = normalize_tabs(tab_list.unwrap_or_default());
    let first_key = first_tab_key(&tab_items);
    let selection = RwSignal::new(TabSelection::init(
        active_tab_key.get_untracked(),
        default_active_tab_key.get_untracked().as_deref(),
        &first_key,
    ));

    {
        let active_tab_key = active_tab_key.clone();
        Effect::new(move |_| {
            let controlled = active_tab_key.get();
            selection.update(|state| {
                let (next, switch) = state.clone().sync(controlled.clone());
                if switch.is_some() {
                    log::warn!(
                        "Card: `active_tab_key` was removed after being set; \
                         keeping the last controlled key as internal state"
                    );
                }
                *state = next;
            });
        });
    }

    let active = {
        let active_tab_key = active_tab_key.clone();
        Signal::derive(move || match active_tab_key.get() {
            Some(key) => key,
            None => selection.with(|state| state.active_key().to_string()),
        })
    };

    let handle_change = Callback::new(move |key: String| {
        // Internal state updates first, the caller's callback runs second,
        // both before this handler returns.
        let (next, emitted) = selection.get_untracked().select(key);
        selection.set(next);
        if let Some(callback) = on_tab_change {
            callback.run(emitted);
        }
    });

    let head_view = plan.has_head_region().then(|| {
        let header_row = plan.header.then(|| {
            let title_class = slot_class("card__title", config.classes.title.as_deref());
            let title_style = config.styles.title.clone().unwrap_or_default();
            let extra_class = slot_class("card__extra", config.classes.extra.as_deref());
            let extra_style = config.styles.extra.clone().unwrap_or_default();
            view! {
                <div class="card__head-wrapper">
                    {title.map(|title| view! { <div class=title_class style=title_style>{title}</div> })}
                    {extra.map(|extra| view! { <div class=extra_class style=extra_style>{extra}</div> })}
                </div>
            }
        });
        let tabs_view = plan.tabs.map(|tabs_plan| {
            let (left_extra, right_extra) = tab_bar_extra
                .map(TabBarExtra::into_sides)
                .unwrap_or((None, None));
            let user_on_add = tab_props.on_add;
            let on_add = Callback::new(move |_| {
                if let Some(callback) = user_on_add {
                    callback.run(());
                }
            });
            view! {
                <TabStrip
                    items=tab_items
                    active_key=active
                    on_change=handle_change
                    size=tabs_plan.size
                    editable=tabs_plan.show_add
                    on_add=on_add
                    left_extra=left_extra
                    right_extra=right_extra
                />
            }
        });
        let head_class = slot_class("card__head", config.classes.header.as_deref());
        let head_style = config.styles.header.clone().unwrap_or_default();
        view! {
            <div class=head_class style=head_style>
                {header_row}
                {tabs_view}
            </div>
        }
    });

    let cover_view = plan.cover.then(|| {
        let cover_class = slot_class("card__cover", config.classes.cover.as_deref());
        let cover_style = config.styles.cover.clone().unwrap_or_default();
        view! { <div class=cover_class style=cover_style>{cover}</div> }
    });

    let body_class = slot_class("card__body", config.classes.body.as_deref());
    let body_override = config.styles.body.clone();
    let body_style_attr = {
        let loading = loading.clone();
        move || {
            effective_body_style(body_override.as_deref(), loading.get().unwrap_or(false))
                .unwrap_or_default()
        }
    };
    let body_content = {
        let loading = loading.clone();
        move || {
            if loading.get().unwrap_or(false) {
                view! { <Skeleton /> }.into_any()
            } else {
                match children.clone() {
                    Some(children) => children(),
                    None => ().into_any(),
                }
            }
        }
    };
    let body_view = view! {
        <div class=body_class style=body_style_attr>
            {body_content}
        </div>
    };

    let actions_view = plan.actions.and_then(|len| {
        let nodes = match actions {
            Some(ActionsProp::List(nodes)) => nodes,
            _ => return None,
        };
        let actions_class = slot_class("card__actions", config.classes.actions.as_deref());
        let actions_style = config.styles.actions.clone().unwrap_or_default();
        let item_style = format!("width: {}%;", 100.0 / len as f64);
        Some(view! {
            <ul class=actions_class style=actions_style>
                {nodes
                    .into_iter()
                    .map(|node| {
                        let item_style = item_style.clone();
                        view! {
                            <li style=item_style>
                                <span>{node}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        })
    });

    let root_class = {
        let loading = loading.clone();
        move || {
            let resolved = resolve_variant(
                variant.get().as_deref().and_then(Variant::parse),
                bordered.get(),
                ambient.and_then(|config| config.variant.get()),
            );
            let mut value = String::from("card");
            if resolved == Variant::Outlined {
                value.push_str(" card--bordered");
            }
            if CardSize::parse(size.get().as_deref()) == CardSize::Small {
                value.push_str(" card--small");
            }
            if loading.get().unwrap_or(false) {
                value.push_str(" card--loading");
            }
            if let Some(custom) = class.get() {
                if !custom.is_empty() {
                    value.push(' ');
                    value.push_str(&custom);
                }
            }
            value
        }
    };
    let root_style = move || style.get().unwrap_or_default();

    view! {
        <div node_ref=node_ref class=root_class style=root_style>
            {head_view}
            {cover_view}
            {body_view}
            {actions_view}
        </div>
    }
}
