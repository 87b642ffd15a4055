#![warn(missing_docs)]
//! Core item primitives shared across the workspace.

pub mod enchantment;
pub mod item;
pub mod material;
pub mod text;

// Re-export commonly used types
pub use enchantment::{Enchantment, EnchantmentType};
pub use item::{ItemFlags, ItemStack};
pub use material::{Material, MaterialError};
pub use text::Text;

/// Kit contents: one optional stack per slot.
pub type ItemSlots = Vec<Option<ItemStack>>;

/// An item array of `len` empty slots.
pub fn empty_slots(len: usize) -> ItemSlots {
    vec![None; len]
}
