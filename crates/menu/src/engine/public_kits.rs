use perkit_core::{ItemSlots, Material, Text};
use std::ops::Range;
use tracing::{debug, warn};

use super::{fill_region, place_buttons, shell, MenuEngine};
use crate::click::ClickHandler;
use crate::error::{ConfigError, MenuError};
use crate::handle::{KitHandle, Viewer};
use crate::parser::Placeholders;
use crate::render::render;
use crate::view::{MenuKind, MenuView, KIT_SLOTS};

const ADMIN_LORE: &str = "&7● [ADMIN] Shift click to edit";
const UNASSIGNED_SUFFIX: &str = " &c&l[UNASSIGNED]";
const UNASSIGNED_LORE: &str = "&7● Admins have not yet setup this kit yet";

/// Where each kit slot lands in the read-only public view: main inventory
/// first, then the hotbar row, then armor and off-hand.
const VIEW_MAPPING: [(Range<usize>, usize); 3] = [(9..36, 9), (0..9, 36), (36..41, 45)];

impl MenuEngine {
    /// Catalog of configured public kits.
    pub fn open_public_catalog(&self, viewer: &Viewer) -> Result<MenuView, MenuError> {
        let layouts = self.layouts();
        let settings = self.settings();
        let (mut view, layout) = shell(&layouts, MenuKind::PublicKitCatalog, &Placeholders::new())?;
        let section = view.kind().section();

        fill_region(&mut view, layout, "filter", None)?;
        fill_region(&mut view, layout, "kits", None)?;

        let slots = layout.region("kits").map(|r| r.slots.as_slice()).unwrap_or(&[]);
        if settings.public_kits.len() > slots.len() {
            warn!(
                kits = settings.public_kits.len(),
                slots = slots.len(),
                "more public kits than catalog slots; extra kits are hidden"
            );
        }
        for (entry, &slot) in settings.public_kits.iter().zip(slots) {
            let material = entry
                .icon
                .parse::<Material>()
                .map_err(|err| ConfigError::from(err).in_region(section, "kits"))?;
            let assigned = self.collab.store.get(&KitHandle::Public(entry.id.clone())).is_some();

            let mut name = format!("&r{}", entry.name);
            let mut lore = Vec::new();
            if !assigned {
                name.push_str(UNASSIGNED_SUFFIX);
                lore.push(UNASSIGNED_LORE);
            }
            if viewer.is_admin() {
                lore.push(ADMIN_LORE);
            }
            view.set_item(slot, Some(render(material, 1, Some(&name), &lore)));

            if viewer.is_admin() {
                view.set_handler(slot, ClickHandler::admin_public_kit(&entry.id));
            } else if assigned {
                view.set_handler(slot, ClickHandler::public_kit(&entry.id));
            }
        }

        place_buttons(&mut view, layout, &["back"], None)?;
        view.activate(&viewer.id);
        debug!(viewer = %viewer.name, "public kit catalog opened");
        Ok(view)
    }

    /// Read-only view of public kit `id`.
    ///
    /// With nothing stored the viewer gets a message instead of a menu, and
    /// administrators are told how to assign the kit.
    pub fn open_public_kit_view(
        &self,
        viewer: &Viewer,
        id: &str,
    ) -> Result<Option<MenuView>, MenuError> {
        let Some(items) = self.stored(&KitHandle::Public(id.to_string())) else {
            let player = &self.collab.player;
            player.send_message(&viewer.id, Text::legacy("&cKit not found"));
            if viewer.is_admin() {
                player.send_message(
                    &viewer.id,
                    Text::legacy(&format!(
                        "&cTo assign a kit to this publickit use /savepublickit {id}"
                    )),
                );
            }
            return Ok(None);
        };

        let layouts = self.layouts();
        let (mut view, layout) = shell(
            &layouts,
            MenuKind::PublicKitView(id.to_string()),
            &Placeholders::single("<id>", id),
        )?;

        fill_region(&mut view, layout, "filter", None)?;
        place_view_contents(&mut view, &items);
        place_buttons(&mut view, layout, &["load", "back"], None)?;

        view.activate(&viewer.id);
        debug!(viewer = %viewer.name, id, "public kit view opened");
        Ok(Some(view))
    }
}

fn place_view_contents(view: &mut MenuView, items: &ItemSlots) {
    debug_assert_eq!(items.len(), KIT_SLOTS);
    for (range, start) in VIEW_MAPPING {
        view.load_contents(start, &items[range]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perkit_core::ItemStack;

    #[test]
    fn view_mapping_places_hotbar_below_inventory() {
        let mut view = MenuView::build(
            MenuKind::PublicKitView("x".into()),
            6,
            "t",
            &Placeholders::new(),
        );
        let items: ItemSlots = (0..KIT_SLOTS)
            .map(|i| Some(ItemStack::new(Material::Arrow, i as u32 + 1)))
            .collect();
        place_view_contents(&mut view, &items);

        let count = |slot: usize| view.item(slot).map(|item| item.count);
        assert_eq!(count(9), Some(10), "kit slot 9 stays at 9");
        assert_eq!(count(35), Some(36));
        assert_eq!(count(36), Some(1), "hotbar slot 0 moves to 36");
        assert_eq!(count(44), Some(9));
        assert_eq!(count(45), Some(37), "boots at 45");
        assert_eq!(count(49), Some(41), "off-hand at 49");
        assert_eq!(count(0), None);
        assert_eq!(count(50), None);
    }
}
