//! Action kind enumeration - the type tag of every action variant.

/// Types of actions a menu can trigger.
///
/// The snake_case name is the canonical configuration type string; see
/// [`ActionKind::aliases`] for the alternative spellings the registry accepts.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ActionKind {
    // ========================================================================
    // Text
    // ========================================================================
    /// Text above the hotbar.
    ActionBar,

    /// Chat message to every online player.
    Broadcast,

    /// Chat message to the player.
    Message,

    /// Title and subtitle on screen.
    Title,

    // ========================================================================
    // Commands
    // ========================================================================
    /// Command run as the player.
    Command,

    /// Command run as the console.
    Console,

    /// Command run as the player with operator permission level.
    OpCommand,

    // ========================================================================
    // Navigation
    // ========================================================================
    /// Reopen the menu recorded as previous, or close.
    Back,

    /// Close the open menu.
    Close,

    /// Open another menu.
    OpenMenu,

    /// Re-render the open menu.
    Refresh,

    /// Transfer to another server behind the proxy.
    Connect,

    // ========================================================================
    // World
    // ========================================================================
    GiveItem,

    TakeItem,

    Teleport,

    Sound,

    // ========================================================================
    // Session
    // ========================================================================
    /// Write a value into the session data map.
    SetData,

    // ========================================================================
    // Flow
    // ========================================================================
    /// Scheduling marker: suspend the sequence for N ticks.
    Delay,

    /// Ordered group of child actions.
    Sequence,
}

impl ActionKind {
    /// Canonical configuration type string (`"open_menu"`).
    pub fn as_snake_case(&self) -> &'static str {
        self.into()
    }

    /// Alternative configuration type strings accepted by the registry.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            ActionKind::ActionBar => &["actionbar"],
            ActionKind::Command => &["cmd"],
            ActionKind::OpCommand => &["op", "opcommand"],
            ActionKind::OpenMenu => &["open", "menu", "openmenu"],
            ActionKind::Connect => &["server"],
            ActionKind::GiveItem => &["give", "giveitem"],
            ActionKind::TakeItem => &["take", "takeitem"],
            ActionKind::Teleport => &["tp"],
            ActionKind::SetData => &["data", "setdata"],
            ActionKind::Delay => &["wait"],
            ActionKind::Broadcast
            | ActionKind::Message
            | ActionKind::Title
            | ActionKind::Console
            | ActionKind::Back
            | ActionKind::Close
            | ActionKind::Refresh
            | ActionKind::Sound
            | ActionKind::Sequence => &[],
        }
    }

    /// Whether the configuration value may be empty.
    pub fn value_optional(&self) -> bool {
        matches!(
            self,
            ActionKind::Back
                | ActionKind::Close
                | ActionKind::Refresh
                | ActionKind::Message
                | ActionKind::ActionBar
                | ActionKind::Broadcast
                | ActionKind::Title
                | ActionKind::Delay
                | ActionKind::Sequence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn canonical_names_are_snake_case() {
        assert_eq!(ActionKind::OpenMenu.as_snake_case(), "open_menu");
        assert_eq!(ActionKind::ActionBar.to_string(), "action_bar");
        assert_eq!(ActionKind::OpCommand.as_ref(), "op_command");
    }

    #[test]
    fn aliases_never_shadow_canonical_names() {
        let canonical: Vec<&str> = ActionKind::iter().map(|k| k.as_snake_case()).collect();
        for kind in ActionKind::iter() {
            for alias in kind.aliases() {
                assert!(!canonical.contains(alias), "{alias} shadows a canonical name");
            }
        }
    }

    #[test]
    fn nineteen_variants() {
        assert_eq!(ActionKind::iter().count(), 19);
    }
}
