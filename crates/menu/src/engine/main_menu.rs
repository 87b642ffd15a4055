use tracing::debug;

use super::{fill_region, kit_number, place_buttons, shell, MenuEngine};
use crate::click::{bind_edit, ClickHandler};
use crate::error::{ConfigError, MenuError};
use crate::handle::{KitHandle, Viewer};
use crate::layout::MenuLayout;
use crate::parser::{self, Placeholders};
use crate::view::{MenuKind, MenuView};

/// `kits` slot N shows personal kit N - 8.
const KIT_SLOT_OFFSET: usize = 8;
/// `ender_chests` slot N shows ender-chest kit N - 17.
const ENDER_CHEST_SLOT_OFFSET: usize = 17;

const BUTTONS: &[&str] = &[
    "info",
    "share_kits",
    "kit_room",
    "premade_kits",
    "repair_items",
    "clear_inventory",
];

impl MenuEngine {
    /// The viewer's kit overview.
    pub fn open_main_menu(&self, viewer: &Viewer) -> Result<MenuView, MenuError> {
        let layouts = self.layouts();
        let (mut view, layout) = shell(
            &layouts,
            MenuKind::Main,
            &Placeholders::single("<player>", &viewer.name),
        )?;

        fill_region(&mut view, layout, "filter", None)?;
        self.place_kit_entries(&mut view, layout, viewer)?;
        self.place_ender_chest_entries(&mut view, layout, viewer)?;
        self.place_kit_status(&mut view, layout, viewer)?;
        place_buttons(&mut view, layout, BUTTONS, None)?;

        view.allow_cursor_drop();
        view.activate(&viewer.id);
        debug!(viewer = %viewer.name, "main menu opened");
        Ok(view)
    }

    fn place_kit_entries(
        &self,
        view: &mut MenuView,
        layout: &MenuLayout,
        viewer: &Viewer,
    ) -> Result<(), ConfigError> {
        let Some(region) = layout.region("kits") else {
            return Ok(());
        };
        let section = view.kind().section();
        for &slot in &region.slots {
            let kit = kit_number(section, "kits", slot, KIT_SLOT_OFFSET)?;
            let item = parser::parse(Some(&region.item), Some(&Placeholders::single("<kit>", kit)))
                .map_err(|err| err.in_region(section, "kits"))?;
            view.set_item(slot, Some(item));
            let handle = KitHandle::Personal {
                owner: viewer.id.clone(),
                slot: kit,
            };
            view.set_handler(slot, ClickHandler::load_or_edit(handle, MenuKind::KitEditor(kit)));
        }
        Ok(())
    }

    fn place_ender_chest_entries(
        &self,
        view: &mut MenuView,
        layout: &MenuLayout,
        viewer: &Viewer,
    ) -> Result<(), ConfigError> {
        let Some(region) = layout.region("ender_chests") else {
            return Ok(());
        };
        let section = view.kind().section();
        for &slot in &region.slots {
            let kit = kit_number(section, "ender_chests", slot, ENDER_CHEST_SLOT_OFFSET)?;
            let item = parser::parse(Some(&region.item), Some(&Placeholders::single("<ec>", kit)))
                .map_err(|err| err.in_region(section, "ender_chests"))?;
            view.set_item(slot, Some(item));
            let handle = KitHandle::EnderChest {
                owner: viewer.id.clone(),
                slot: kit,
            };
            view.set_handler(
                slot,
                ClickHandler::load_or_edit(handle, MenuKind::EnderChestEditor(kit)),
            );
        }
        Ok(())
    }

    /// One indicator per personal kit, numbered by position in the region.
    fn place_kit_status(
        &self,
        view: &mut MenuView,
        layout: &MenuLayout,
        viewer: &Viewer,
    ) -> Result<(), ConfigError> {
        let Some(region) = layout.region("kit_exists") else {
            return Ok(());
        };
        let section = view.kind().section();
        for (position, &slot) in region.slots.iter().enumerate() {
            let kit = position as u32 + 1;
            let handle = KitHandle::Personal {
                owner: viewer.id.clone(),
                slot: kit,
            };
            let variant = if self.collab.store.get(&handle).is_some() {
                "exists"
            } else {
                "not_found"
            };
            let item = parser::parse(
                region.variant(variant),
                Some(&Placeholders::single("<kit>", kit)),
            )
            .map_err(|err| err.in_region(section, "kit_exists"))?;
            view.set_item(slot, Some(item));
            bind_edit(view, slot, MenuKind::KitEditor(kit));
        }
        Ok(())
    }
}
