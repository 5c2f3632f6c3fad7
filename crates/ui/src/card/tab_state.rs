//! Ownership of the card's active-tab selection.
//!
//! The selection is either controlled (the caller supplies the key through
//! a prop and keeps it current) or uncontrolled (the card stores the key
//! itself). Which variant is active follows from the presence of the
//! controlled prop; the two values are never mirrored into one field.

/// Active-tab selection, tagged by who owns the key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabSelection {
    /// The caller owns the key; user clicks are only forwarded.
    Controlled(String),
    /// The card owns the key; user clicks mutate it in place.
    Uncontrolled(String),
}

/// Ownership change that deserves a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeSwitch {
    /// The controlled key prop disappeared after being set. The last
    /// controlled key is carried over into internal state (last write wins).
    ControlledToUncontrolled,
}

impl TabSelection {
    /// Initial state on first render. A supplied controlled key wins;
    /// otherwise the explicit default key, the first descriptor's key, or
    /// the empty-string "no active tab" sentinel for an empty list.
    pub fn init(controlled: Option<String>, default_key: Option<&str>, first_key: &str) -> Self {
        match controlled {
            Some(key) => TabSelection::Controlled(key),
            None => TabSelection::Uncontrolled(default_key.unwrap_or(first_key).to_string()),
        }
    }

    pub fn active_key(&self) -> &str {
        match self {
            TabSelection::Controlled(key) | TabSelection::Uncontrolled(key) => key,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self, TabSelection::Controlled(_))
    }

    /// Re-aligns the state with the controlled prop on a later render.
    /// Uncontrolled state is left untouched while the prop stays absent.
    pub fn sync(self, controlled: Option<String>) -> (Self, Option<ModeSwitch>) {
        match (self, controlled) {
            (_, Some(key)) => (TabSelection::Controlled(key), None),
            (TabSelection::Controlled(last), None) => (
                TabSelection::Uncontrolled(last),
                Some(ModeSwitch::ControlledToUncontrolled),
            ),
            (state, None) => (state, None),
        }
    }

    /// Applies a user-initiated selection reported by the tab strip.
    /// Returns the next state and the key to hand to the caller's callback,
    /// verbatim and without membership validation.
    pub fn select(self, key: String) -> (Self, String) {
        match self {
            TabSelection::Controlled(current) => (TabSelection::Controlled(current), key),
            TabSelection::Uncontrolled(_) => (TabSelection::Uncontrolled(key.clone()), key),
        }
    }
}
