//! Item stacks as stored in kits and displayed in menus.

use serde::{Deserialize, Serialize};

use crate::enchantment::{Enchantment, EnchantmentType};
use crate::material::{normalize_token, Material};
use crate::text::Text;

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    /// Tooltip sections the client should hide.
    pub struct ItemFlags: u16 {
        /// Enchantment list
        const HIDE_ENCHANTS = 1 << 0;
        /// Attribute modifiers
        const HIDE_ATTRIBUTES = 1 << 1;
        /// Unbreakable marker
        const HIDE_UNBREAKABLE = 1 << 2;
        /// "Can destroy" list
        const HIDE_DESTROYS = 1 << 3;
        /// "Can be placed on" list
        const HIDE_PLACED_ON = 1 << 4;
        /// Potion effects
        const HIDE_POTION_EFFECTS = 1 << 5;
        /// Leather dye colour
        const HIDE_DYE = 1 << 6;
        /// Armor trim
        const HIDE_ARMOR_TRIM = 1 << 7;
        /// Stored (book) enchantments
        const HIDE_STORED_ENCHANTS = 1 << 8;
        /// Any additional tooltip
        const HIDE_ADDITIONAL_TOOLTIP = 1 << 9;
    }
}

impl ItemFlags {
    /// Flags attached to purely decorative menu items.
    pub const MENU_DECORATION: ItemFlags = ItemFlags::HIDE_ENCHANTS
        .union(ItemFlags::HIDE_POTION_EFFECTS)
        .union(ItemFlags::HIDE_ATTRIBUTES)
        .union(ItemFlags::HIDE_UNBREAKABLE)
        .union(ItemFlags::HIDE_DESTROYS)
        .union(ItemFlags::HIDE_PLACED_ON)
        .union(ItemFlags::HIDE_DYE);

    /// Resolve a single flag token such as `hide enchants`.
    pub fn parse_name(token: &str) -> Option<ItemFlags> {
        ItemFlags::from_name(&normalize_token(token))
    }
}

/// An item stack in a kit, an inventory snapshot, or a menu slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Material of the item
    pub material: Material,
    /// Quantity in stack
    pub count: u32,
    /// Custom display name
    #[serde(default)]
    pub name: Option<Text>,
    /// Lore lines shown under the name
    #[serde(default)]
    pub lore: Vec<Text>,
    /// Hidden tooltip sections
    #[serde(default)]
    pub flags: ItemFlags,
    /// Enchantments (may be cosmetic)
    #[serde(default)]
    pub enchantments: Vec<Enchantment>,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(material: Material, count: u32) -> Self {
        Self {
            material,
            count,
            name: None,
            lore: Vec::new(),
            flags: ItemFlags::empty(),
            enchantments: Vec::new(),
        }
    }

    /// An item that occupies no slot (air or zero quantity).
    pub fn is_empty(&self) -> bool {
        self.material.is_air() || self.count == 0
    }

    /// Attach enchantment `ty` at `level`, replacing any existing level.
    ///
    /// Applicability and compatibility are not checked; menus use this for
    /// glow effects on items that could never carry the enchantment.
    pub fn force_enchantment(&mut self, ty: EnchantmentType, level: u8) {
        let enchantment = Enchantment::new(ty, level);
        match self
            .enchantments
            .iter_mut()
            .find(|e| e.enchantment_type == ty)
        {
            Some(existing) => *existing = enchantment,
            None => self.enchantments.push(enchantment),
        }
    }

    /// Check if this item has a specific enchantment type
    pub fn has_enchantment(&self, enchant_type: EnchantmentType) -> bool {
        self.enchantments
            .iter()
            .any(|e| e.enchantment_type == enchant_type)
    }

    /// Visible name without format codes, if any.
    pub fn plain_name(&self) -> Option<String> {
        self.name.as_ref().map(Text::plain)
    }
}
