use tracing::debug;

use super::{fill_region, place_buttons, shell, MenuEngine, ENDER_CHEST_START};
use crate::error::MenuError;
use crate::handle::{KitHandle, Viewer};
use crate::parser::Placeholders;
use crate::view::{MenuKind, MenuView, ENDER_CHEST_SLOTS, KIT_SLOTS};

/// Cosmetic labels over the armor and off-hand slots.
pub(super) const EQUIPMENT_LABELS: &[&str] = &["boots", "leggings", "chestplate", "helmet", "off_hand"];

const EDITOR_BUTTONS: &[&str] = &["import", "clear_kit", "back"];

impl MenuEngine {
    /// Editor for the viewer's personal kit `slot`.
    pub fn open_kit_editor(&self, viewer: &Viewer, slot: u32) -> Result<MenuView, MenuError> {
        let handle = KitHandle::Personal {
            owner: viewer.id.clone(),
            slot,
        };
        let view = self.editor(
            viewer,
            MenuKind::KitEditor(slot),
            Placeholders::single("<kit>", slot),
            &handle,
        )?;
        debug!(viewer = %viewer.name, slot, "kit editor opened");
        Ok(view)
    }

    /// Editor for a public kit; content is the same 41-slot layout.
    pub fn open_public_kit_editor(&self, viewer: &Viewer, id: &str) -> Result<MenuView, MenuError> {
        let view = self.editor(
            viewer,
            MenuKind::PublicKitEditor(id.to_string()),
            Placeholders::single("<id>", id),
            &KitHandle::Public(id.to_string()),
        )?;
        debug!(viewer = %viewer.name, id, "public kit editor opened");
        Ok(view)
    }

    fn editor(
        &self,
        viewer: &Viewer,
        kind: MenuKind,
        placeholders: Placeholders,
        handle: &KitHandle,
    ) -> Result<MenuView, MenuError> {
        let layouts = self.layouts();
        let (mut view, layout) = shell(&layouts, kind, &placeholders)?;

        fill_region(&mut view, layout, "filter", None)?;
        for label in EQUIPMENT_LABELS {
            fill_region(&mut view, layout, label, None)?;
        }
        if let Some(items) = self.stored(handle) {
            view.load_contents(0, &items);
        }
        view.allow_modification(0..KIT_SLOTS);
        place_buttons(&mut view, layout, EDITOR_BUTTONS, None)?;

        view.allow_cursor_drop();
        view.activate(&viewer.id);
        Ok(view)
    }

    /// Editor for the viewer's ender-chest kit `slot`, shown in rows 2-4.
    pub fn open_ender_chest_editor(&self, viewer: &Viewer, slot: u32) -> Result<MenuView, MenuError> {
        let layouts = self.layouts();
        let (mut view, layout) = shell(
            &layouts,
            MenuKind::EnderChestEditor(slot),
            &Placeholders::single("<slot>", slot),
        )?;

        fill_region(&mut view, layout, "filter", None)?;
        let handle = KitHandle::EnderChest {
            owner: viewer.id.clone(),
            slot,
        };
        if let Some(items) = self.stored(&handle) {
            view.load_contents(ENDER_CHEST_START, &items);
        }
        view.allow_modification(ENDER_CHEST_START..ENDER_CHEST_START + ENDER_CHEST_SLOTS);
        place_buttons(&mut view, layout, EDITOR_BUTTONS, None)?;

        view.allow_cursor_drop();
        view.activate(&viewer.id);
        debug!(viewer = %viewer.name, slot, "ender chest editor opened");
        Ok(view)
    }
}
