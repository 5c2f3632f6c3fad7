//! Slot composition for the card.
//!
//! A pure description of which regions the card renders for a given input
//! combination. The render code consumes the plan; nothing in here touches
//! the view tree or any signal.

use super::resolve::{tab_strip_size, CardConfig};
use crate::tabs::TabSize;

/// Shape of the `actions` input after type checking. Anything that is not a
/// sequence of renderable nodes is `Invalid` and never reaches the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionsShape {
    Missing,
    List(usize),
    Invalid,
}

/// Tab-related input, present iff a tab list was supplied at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct TabsInput {
    pub count: usize,
    pub editable: bool,
    pub size_override: Option<TabSize>,
}

/// Presence flags the composer decides from.
#[derive(Clone, Copy, Debug)]
pub struct SlotInputs {
    pub has_title: bool,
    pub has_extra: bool,
    pub tabs: Option<TabsInput>,
    pub has_cover: bool,
    pub actions: ActionsShape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabsPlan {
    pub size: TabSize,
    pub show_add: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyPlan {
    pub skeleton: bool,
}

/// Which slots exist, in structural order: head region (title/extra row,
/// then tabs), cover, body, actions.
#[derive(Clone, Copy, Debug)]
pub struct SlotPlan {
    pub header: bool,
    pub tabs: Option<TabsPlan>,
    pub cover: bool,
    pub body: BodyPlan,
    /// Number of action nodes, when the actions slot exists.
    pub actions: Option<usize>,
}

impl SlotPlan {
    /// The head region wraps both the title/extra row and the tab strip.
    pub fn has_head_region(&self) -> bool {
        self.header || self.tabs.is_some()
    }
}

pub fn compose(inputs: &SlotInputs, config: &CardConfig) -> SlotPlan {
    SlotPlan {
        header: inputs.has_title || inputs.has_extra,
        // An empty tab list still renders the strip shell, so an editable
        // strip can expose its add affordance.
        tabs: inputs.tabs.map(|tabs| TabsPlan {
            size: tab_strip_size(config.size, tabs.size_override),
            show_add: tabs.editable,
        }),
        cover: inputs.has_cover,
        body: BodyPlan {
            skeleton: config.loading,
        },
        actions: match inputs.actions {
            ActionsShape::List(len) if len > 0 => Some(len),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::resolve::{CardConfig, ResolveInputs};

    fn inputs() -> SlotInputs {
        SlotInputs {
            has_title: false,
            has_extra: false,
            tabs: None,
            has_cover: false,
            actions: ActionsShape::Missing,
        }
    }

    fn config() -> CardConfig {
        CardConfig::resolve(ResolveInputs::default())
    }

    #[test]
    fn header_absent_without_title_and_extra() {
        let plan = compose(&inputs(), &config());
        assert!(!plan.header);
        assert!(!plan.has_head_region());
    }

    #[test]
    fn header_present_with_title_or_extra() {
        let plan = compose(&SlotInputs { has_title: true, ..inputs() }, &config());
        assert!(plan.header);
        let plan = compose(&SlotInputs { has_extra: true, ..inputs() }, &config());
        assert!(plan.header);
    }

    #[test]
    fn body_always_present_and_skeleton_follows_loading() {
        let plan = compose(&inputs(), &config());
        assert!(!plan.body.skeleton);
        let loading = CardConfig::resolve(ResolveInputs {
            loading: true,
            ..Default::default()
        });
        let plan = compose(&inputs(), &loading);
        assert!(plan.body.skeleton);
    }

    #[test]
    fn empty_tab_list_still_renders_the_strip_shell() {
        let plan = compose(
            &SlotInputs {
                tabs: Some(TabsInput { count: 0, editable: true, size_override: None }),
                ..inputs()
            },
            &config(),
        );
        let tabs = plan.tabs.expect("strip shell expected for an empty list");
        assert!(tabs.show_add);
        assert!(plan.has_head_region());
    }

    #[test]
    fn tab_size_extends_card_size() {
        let small = CardConfig::resolve(ResolveInputs {
            size: Some("small".to_string()),
            ..Default::default()
        });
        let tabs = Some(TabsInput { count: 1, editable: false, size_override: None });
        let plan = compose(&SlotInputs { tabs, ..inputs() }, &config());
        assert_eq!(plan.tabs.unwrap().size, TabSize::Large);
        let plan = compose(&SlotInputs { tabs, ..inputs() }, &small);
        assert_eq!(plan.tabs.unwrap().size, TabSize::Small);
    }

    #[test]
    fn tab_props_size_wins_over_the_card_size() {
        let tabs = Some(TabsInput {
            count: 1,
            editable: false,
            size_override: Some(TabSize::Small),
        });
        let plan = compose(&SlotInputs { tabs, ..inputs() }, &config());
        assert_eq!(plan.tabs.unwrap().size, TabSize::Small);
    }

    #[test]
    fn invalid_actions_value_yields_no_actions_slot() {
        let plan = compose(
            &SlotInputs { actions: ActionsShape::Invalid, ..inputs() },
            &config(),
        );
        assert_eq!(plan.actions, None);
    }

    #[test]
    fn empty_actions_list_yields_no_actions_slot() {
        let plan = compose(
            &SlotInputs { actions: ActionsShape::List(0), ..inputs() },
            &config(),
        );
        assert_eq!(plan.actions, None);
    }

    #[test]
    fn actions_slot_carries_the_node_count() {
        let plan = compose(
            &SlotInputs { actions: ActionsShape::List(3), ..inputs() },
            &config(),
        );
        assert_eq!(plan.actions, Some(3));
    }

    #[test]
    fn cover_slot_follows_its_input() {
        let plan = compose(&SlotInputs { has_cover: true, ..inputs() }, &config());
        assert!(plan.cover);
    }
}
