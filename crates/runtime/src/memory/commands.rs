use std::collections::HashSet;
use std::sync::Mutex;

use menu_core::{CommandSink, CommandSource, ItemFactory, ItemStack, OracleError};

use super::lock;

/// Command dispatcher that records what it ran.
///
/// Commands whose first word is registered with [`Self::failing`] are
/// rejected, simulating an unknown command on the host.
#[derive(Default)]
pub struct MemoryCommandSink {
    failing: HashSet<String>,
    dispatched: Mutex<Vec<(CommandSource, String)>>,
}

impl MemoryCommandSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failing = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn dispatched(&self) -> Vec<(CommandSource, String)> {
        lock(&self.dispatched).clone()
    }
}

impl CommandSink for MemoryCommandSink {
    fn perform(&self, source: CommandSource, command: &str) -> Result<(), OracleError> {
        let label = command.split_whitespace().next().unwrap_or_default();
        if self.failing.contains(label) {
            return Err(OracleError::rejected("commands", format!("unknown command '{label}'")));
        }
        lock(&self.dispatched).push((source, command.to_string()));
        Ok(())
    }
}

/// Item factory over a fixed catalogue; an empty catalogue accepts any id.
#[derive(Default)]
pub struct MemoryItemFactory {
    catalogue: HashSet<String>,
}

impl MemoryItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            catalogue: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl ItemFactory for MemoryItemFactory {
    fn create(&self, item: &str, amount: u32) -> Result<ItemStack, OracleError> {
        let item = item.to_ascii_lowercase();
        if !self.catalogue.is_empty() && !self.catalogue.contains(&item) {
            return Err(OracleError::UnknownItem(item));
        }
        Ok(ItemStack::new(item, amount))
    }
}
