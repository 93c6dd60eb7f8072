//! Action domain - configured effects triggered from menus.
//!
//! An [`Action`] is one immutable, configured effect. Free-text values are kept
//! as written and resolved through the placeholder manager each time the
//! action runs, so the same action can serve every player.
//!
//! # Module Structure
//!
//! - `kind`: type tags and configuration aliases
//! - `context`: per-invocation player/session/arguments bundle
//! - `params`: structured value syntaxes (title, sound, items, teleport)
//! - `execute`: per-variant effects against the collaborator environment
//! - `registry`: configuration type string to constructor mapping
//! - `error`: execution and construction errors

mod context;
mod error;
mod execute;
mod kind;
mod params;
mod registry;

pub use context::ActionContext;
pub use error::{ActionError, ActionParseError};
pub use kind::ActionKind;
pub use params::{Coordinate, ItemSpec, SoundSpec, TeleportSpec, TitleSpec};
pub use registry::{ActionConstructor, ActionRegistry};

use std::sync::Arc;

/// One configured menu action.
///
/// String payloads are raw configuration text and may contain placeholders.
/// `Delay` is a scheduling marker: executing it does nothing, the executor
/// interprets it instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    ActionBar(String),
    /// Reopen the previous menu, or close when there is none.
    Back,
    Broadcast(String),
    Close,
    /// Command run as the player.
    Command(String),
    /// Command run as the console.
    Console(String),
    /// Proxy server name.
    Connect(String),
    /// Ticks to wait before the rest of the sequence runs.
    Delay(u64),
    /// `item [amount]`.
    GiveItem(String),
    Message(String),
    /// Command run as the player with operator permission level.
    OpCommand(String),
    /// Menu identifier.
    OpenMenu(String),
    Refresh,
    Sequence(Arc<[Action]>),
    /// `key value...`.
    SetData(String),
    /// `sound [volume] [pitch]`.
    Sound(String),
    /// `item [amount]`.
    TakeItem(String),
    /// `x y z [yaw pitch]`.
    Teleport(String),
    /// `title|subtitle|fadeIn|stay|fadeOut`.
    Title(String),
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::ActionBar(_) => ActionKind::ActionBar,
            Action::Back => ActionKind::Back,
            Action::Broadcast(_) => ActionKind::Broadcast,
            Action::Close => ActionKind::Close,
            Action::Command(_) => ActionKind::Command,
            Action::Console(_) => ActionKind::Console,
            Action::Connect(_) => ActionKind::Connect,
            Action::Delay(_) => ActionKind::Delay,
            Action::GiveItem(_) => ActionKind::GiveItem,
            Action::Message(_) => ActionKind::Message,
            Action::OpCommand(_) => ActionKind::OpCommand,
            Action::OpenMenu(_) => ActionKind::OpenMenu,
            Action::Refresh => ActionKind::Refresh,
            Action::Sequence(_) => ActionKind::Sequence,
            Action::SetData(_) => ActionKind::SetData,
            Action::Sound(_) => ActionKind::Sound,
            Action::TakeItem(_) => ActionKind::TakeItem,
            Action::Teleport(_) => ActionKind::Teleport,
            Action::Title(_) => ActionKind::Title,
        }
    }

    /// Canonical configuration type string.
    pub fn type_tag(&self) -> &'static str {
        self.kind().as_snake_case()
    }

    /// Tick count if this is a delay marker.
    pub fn delay_ticks(&self) -> Option<u64> {
        match self {
            Action::Delay(ticks) => Some(*ticks),
            _ => None,
        }
    }

    pub fn sequence<I: IntoIterator<Item = Action>>(children: I) -> Self {
        Action::Sequence(children.into_iter().collect())
    }
}

/// What the executor should do after an action returns.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// The effect was performed; continue with the next action.
    Completed,
    /// Run these children inline before continuing.
    Nested(Arc<[Action]>),
}
