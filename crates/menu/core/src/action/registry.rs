//! Registry mapping configuration type strings to action constructors.

use core::fmt;
use std::collections::HashMap;
use std::sync::Arc;

use strum::IntoEnumIterator;
use tracing::{debug, warn};

use super::{Action, ActionKind, ActionParseError};

/// Builds an action from its configuration value.
///
/// Receives the registry so composite actions can parse their children.
pub type ActionConstructor =
    Arc<dyn Fn(&ActionRegistry, &str) -> Result<Action, ActionParseError> + Send + Sync>;

/// Type-string to constructor table.
///
/// Type strings are case-insensitive. Every [`ActionKind`] is registered under
/// its snake_case name and its aliases by [`ActionRegistry::with_builtins`];
/// hosts may add their own names or replace built-in ones.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    constructors: HashMap<String, ActionConstructor>,
}

impl ActionRegistry {
    /// Separator between child lines of a `sequence` value.
    pub const SEQUENCE_SEPARATOR: char = ';';

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry knowing every built-in action type and alias.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for kind in ActionKind::iter() {
            let constructor = builtin(kind);
            registry.register_arc(kind.as_snake_case(), Arc::clone(&constructor));
            for alias in kind.aliases() {
                registry.register_arc(alias, Arc::clone(&constructor));
            }
        }
        registry
    }

    /// Registers `constructor` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: &str, constructor: F)
    where
        F: Fn(&ActionRegistry, &str) -> Result<Action, ActionParseError> + Send + Sync + 'static,
    {
        self.register_arc(name, Arc::new(constructor));
    }

    pub fn register_arc(&mut self, name: &str, constructor: ActionConstructor) {
        let key = name.trim().to_ascii_lowercase();
        if self.constructors.insert(key.clone(), constructor).is_some() {
            debug!(target: "menu::actions", action = %key, "replaced action constructor");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors
            .contains_key(&name.trim().to_ascii_lowercase())
    }

    /// Registered type strings, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Builds an action from a type string and its value.
    ///
    /// # Errors
    ///
    /// `UnknownType` when no constructor is registered under `action_type`;
    /// whatever the constructor reports otherwise.
    pub fn parse(&self, action_type: &str, value: &str) -> Result<Action, ActionParseError> {
        let key = action_type.trim().to_ascii_lowercase();
        let constructor = self
            .constructors
            .get(&key)
            .ok_or_else(|| ActionParseError::UnknownType(action_type.trim().to_string()))?;
        constructor(self, value.trim())
    }

    /// Builds an action from a `type: value` or `[type] value` line.
    ///
    /// A bare word (`close`) is a type with an empty value.
    pub fn parse_line(&self, line: &str) -> Result<Action, ActionParseError> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix('[') {
            let (action_type, value) = rest
                .split_once(']')
                .ok_or_else(|| ActionParseError::MalformedLine(line.to_string()))?;
            return self.parse(action_type, value);
        }

        if let Some((action_type, value)) = line.split_once(':') {
            return self.parse(action_type, value);
        }

        if !line.is_empty() && !line.contains(char::is_whitespace) {
            return self.parse(line, "");
        }

        Err(ActionParseError::MalformedLine(line.to_string()))
    }

    /// Builds the children of a `;`-separated sequence value. Blank entries
    /// are skipped.
    pub fn parse_sequence(&self, value: &str) -> Result<Vec<Action>, ActionParseError> {
        value
            .split(Self::SEQUENCE_SEPARATOR)
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| self.parse_line(line))
            .collect()
    }

    /// Builds one action per configuration line.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<Vec<Action>, ActionParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        lines.into_iter().map(|line| self.parse_line(line)).collect()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("types", &self.names())
            .finish()
    }
}

fn builtin(kind: ActionKind) -> ActionConstructor {
    Arc::new(move |registry: &ActionRegistry, value: &str| {
        if value.is_empty() && !kind.value_optional() {
            return Err(ActionParseError::MissingValue { kind });
        }

        let text = value.to_string();
        let action = match kind {
            ActionKind::ActionBar => Action::ActionBar(text),
            ActionKind::Broadcast => Action::Broadcast(text),
            ActionKind::Message => Action::Message(text),
            ActionKind::Title => Action::Title(text),
            ActionKind::Command => Action::Command(text),
            ActionKind::Console => Action::Console(text),
            ActionKind::OpCommand => Action::OpCommand(text),
            ActionKind::Back => Action::Back,
            ActionKind::Close => Action::Close,
            ActionKind::OpenMenu => Action::OpenMenu(text),
            ActionKind::Refresh => Action::Refresh,
            ActionKind::Connect => Action::Connect(text),
            ActionKind::GiveItem => Action::GiveItem(text),
            ActionKind::TakeItem => Action::TakeItem(text),
            ActionKind::Teleport => Action::Teleport(text),
            ActionKind::Sound => Action::Sound(text),
            ActionKind::SetData => Action::SetData(text),
            ActionKind::Delay => Action::Delay(parse_delay(value)),
            ActionKind::Sequence => Action::sequence(registry.parse_sequence(value)?),
        };
        Ok(action)
    })
}

fn parse_delay(value: &str) -> u64 {
    if value.is_empty() {
        return 0;
    }
    value.parse().unwrap_or_else(|_| {
        warn!(target: "menu::actions", value, "invalid delay, using 0 ticks");
        0
    })
}
