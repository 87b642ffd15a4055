//! Display item construction.

use perkit_core::{EnchantmentType, ItemFlags, ItemStack, Material, Text};

/// Build a display item from raw configuration strings.
///
/// Name and lore go through `&` colour-code translation. An empty name leaves
/// the item unnamed. The quantity is not checked against the material's stack
/// cap; the host clamps it.
pub fn render(material: Material, quantity: u32, name: Option<&str>, lore: &[&str]) -> ItemStack {
    debug_assert!(quantity > 0, "display items need a positive quantity");
    let mut item = ItemStack::new(material, quantity);
    if let Some(name) = name.filter(|name| !name.is_empty()) {
        item.name = Some(Text::legacy(name));
    }
    item.lore = lore.iter().map(|line| Text::legacy(line)).collect();
    item
}

/// Hide every tooltip section that would leak item metadata.
pub fn add_hide_flags(mut item: ItemStack) -> ItemStack {
    item.flags |= ItemFlags::MENU_DECORATION;
    item
}

/// Make the item glow without showing an enchantment line.
pub fn add_enchant_look(item: ItemStack) -> ItemStack {
    let mut item = add_hide_flags(item);
    item.force_enchantment(EnchantmentType::Mending, 1);
    item
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_translates_name_and_lore() {
        let item = render(
            Material::Chest,
            1,
            Some("&a&lIMPORT"),
            &["&7● Import from inventory"],
        );
        assert_eq!(item.material, Material::Chest);
        assert_eq!(item.count, 1);
        assert_eq!(item.name.as_ref().map(|t| t.content.as_str()), Some("§a§lIMPORT"));
        assert_eq!(item.lore.len(), 1);
        assert_eq!(item.lore[0].plain(), "● Import from inventory");
    }

    #[test]
    fn empty_name_leaves_item_unnamed() {
        let item = render(Material::Stone, 3, Some(""), &[]);
        assert!(item.name.is_none());
        assert!(item.lore.is_empty());

        let pane = render(Material::BlueStainedGlassPane, 1, Some(" "), &[]);
        assert_eq!(pane.plain_name().as_deref(), Some(" "));
    }

    #[test]
    fn decorations_are_idempotent() {
        let base = render(Material::Barrier, 2, Some("&c&lEDIT MENU"), &[]);

        let hidden = add_hide_flags(base.clone());
        assert_eq!(add_hide_flags(hidden.clone()), hidden);
        assert!(hidden.enchantments.is_empty());

        let glowing = add_enchant_look(base);
        assert_eq!(add_enchant_look(glowing.clone()), glowing);
        assert_eq!(glowing.enchantments.len(), 1);
        assert!(glowing.has_enchantment(EnchantmentType::Mending));
        assert!(glowing.flags.contains(ItemFlags::HIDE_ENCHANTS));
        assert_eq!(glowing.count, 2);
    }
}
