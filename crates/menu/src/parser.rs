//! Configuration node → display item.

use perkit_core::{EnchantmentType, ItemFlags, ItemStack, Material, Text};
use tracing::debug;

use crate::error::{ConfigError, DecorationError};
use crate::layout::ItemDefinition;

/// Ordered literal token replacements (`<kit>` → `3`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    entries: Vec<(String, String)>,
}

impl Placeholders {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A set with one replacement.
    pub fn single(token: &str, value: impl ToString) -> Self {
        Self::new().with(token, value)
    }

    /// Add a replacement; replacements apply in insertion order.
    pub fn with(mut self, token: &str, value: impl ToString) -> Self {
        self.entries.push((token.to_string(), value.to_string()));
        self
    }

    /// Replace every occurrence of every token, literally.
    pub fn apply(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (token, value)| acc.replace(token, value))
    }
}

/// Parse an item definition into a display item.
///
/// Fails when the node is absent, has no material, or names an unknown
/// material. Unknown flag and enchantment tokens are skipped one by one.
/// Name and lore are rendered non-italic.
pub fn parse(
    node: Option<&ItemDefinition>,
    placeholders: Option<&Placeholders>,
) -> Result<ItemStack, ConfigError> {
    let node = node.ok_or(ConfigError::MissingItem)?;
    let token = node.material.as_deref().ok_or(ConfigError::MissingMaterial)?;
    let material: Material = token.parse()?;

    let substitute = |text: &str| match placeholders {
        Some(placeholders) => placeholders.apply(text),
        None => text.to_string(),
    };

    let mut item = ItemStack::new(material, 1);
    if let Some(name) = &node.name {
        item.name = Some(Text::legacy(&substitute(name)).non_italic());
    }
    item.lore = node
        .lore
        .iter()
        .map(|line| Text::legacy(&substitute(line)).non_italic())
        .collect();

    for token in &node.flags {
        match parse_flag(token) {
            Ok(flag) => item.flags |= flag,
            Err(err) => debug!(%err, "skipping item flag"),
        }
    }
    for token in &node.enchantments {
        match parse_enchantment(token) {
            Ok(ty) => item.force_enchantment(ty, 1),
            Err(err) => debug!(%err, "skipping enchantment"),
        }
    }

    Ok(item)
}

fn parse_flag(token: &str) -> Result<ItemFlags, DecorationError> {
    ItemFlags::parse_name(token).ok_or_else(|| DecorationError::UnknownFlag(token.to_string()))
}

fn parse_enchantment(token: &str) -> Result<EnchantmentType, DecorationError> {
    EnchantmentType::from_name(token)
        .ok_or_else(|| DecorationError::UnknownEnchantment(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(material: &str) -> ItemDefinition {
        ItemDefinition::of_material(material)
    }

    #[test]
    fn absent_node_is_a_config_error() {
        assert!(matches!(parse(None, None), Err(ConfigError::MissingItem)));
    }

    #[test]
    fn missing_material_is_a_config_error() {
        let def = ItemDefinition {
            name: Some("&cNo material".to_string()),
            ..ItemDefinition::default()
        };
        assert!(matches!(
            parse(Some(&def), None),
            Err(ConfigError::MissingMaterial)
        ));
    }

    #[test]
    fn unknown_material_is_a_config_error() {
        let err = parse(Some(&node("GLASS_OF_WATER")), None).unwrap_err();
        assert_eq!(err.to_string(), "invalid material: GLASS_OF_WATER");
    }

    #[test]
    fn material_tokens_are_normalised() {
        let item = parse(Some(&node("blue stained glass pane")), None).expect("parses");
        assert_eq!(item.material, Material::BlueStainedGlassPane);
        assert_eq!(item.count, 1);
        assert!(item.name.is_none());
    }

    #[test]
    fn name_and_lore_are_substituted_then_formatted() {
        let def = ItemDefinition {
            material: Some("CHEST".to_string()),
            name: Some("&3&lKit <kit>".to_string()),
            lore: vec!["&7Slot <kit> of <max>".to_string()],
            ..ItemDefinition::default()
        };
        let placeholders = Placeholders::single("<kit>", 4).with("<max>", 9);
        let item = parse(Some(&def), Some(&placeholders)).expect("parses");

        let name = item.name.expect("named");
        assert_eq!(name.content, "§3§lKit 4");
        assert_eq!(name.italic, Some(false));
        assert_eq!(item.lore[0].content, "§7Slot 4 of 9");
        assert_eq!(item.lore[0].italic, Some(false));
    }

    #[test]
    fn no_placeholders_leaves_tokens() {
        let def = ItemDefinition {
            material: Some("CHEST".to_string()),
            name: Some("Kit <kit>".to_string()),
            ..ItemDefinition::default()
        };
        let item = parse(Some(&def), None).expect("parses");
        assert_eq!(item.plain_name().as_deref(), Some("Kit <kit>"));
    }

    #[test]
    fn substitution_is_literal() {
        let placeholders = Placeholders::single("<kit>", 3);
        assert_eq!(placeholders.apply("<kit>2"), "32");
        assert_eq!(placeholders.apply("<kit><kit>"), "33");
        assert_eq!(placeholders.apply("<ki>t <KIT>"), "<ki>t <KIT>");
    }

    #[test]
    fn invalid_decorations_are_skipped_individually() {
        let def = ItemDefinition {
            material: Some("DIAMOND_SWORD".to_string()),
            flags: vec![
                "HIDE_ENCHANTS".to_string(),
                "HIDE_NOTHING".to_string(),
                "hide attributes".to_string(),
            ],
            enchantments: vec![
                "SHARPNESS".to_string(),
                "SUPER_SHARP".to_string(),
                "durability".to_string(),
            ],
            ..ItemDefinition::default()
        };
        let item = parse(Some(&def), None).expect("invalid decorations are not fatal");

        assert_eq!(item.flags, ItemFlags::HIDE_ENCHANTS | ItemFlags::HIDE_ATTRIBUTES);
        assert_eq!(item.enchantments.len(), 2);
        assert!(item.has_enchantment(EnchantmentType::Sharpness));
        assert!(item.has_enchantment(EnchantmentType::Unbreaking));
        assert!(item.enchantments.iter().all(|e| e.level == 1));
    }

    #[test]
    fn decoration_errors_name_the_token() {
        assert_eq!(
            parse_flag("HIDE_NOTHING").unwrap_err().to_string(),
            "unknown item flag `HIDE_NOTHING`"
        );
        assert_eq!(
            parse_enchantment("SUPER_SHARP").unwrap_err(),
            DecorationError::UnknownEnchantment("SUPER_SHARP".to_string())
        );
    }
}
