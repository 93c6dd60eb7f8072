use super::OracleError;
use crate::state::ItemStack;

/// Resolves textual item identifiers into concrete stacks.
///
/// Identifier syntax and item metadata are owned by the host.
pub trait ItemFactory: Send + Sync {
    fn create(&self, item: &str, amount: u32) -> Result<ItemStack, OracleError>;
}
