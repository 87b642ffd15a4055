use tracing::debug;

use super::kit_editor::EQUIPMENT_LABELS;
use super::{fill_region, shell, MenuEngine};
use crate::error::MenuError;
use crate::handle::{KitHandle, Viewer, ViewerId};
use crate::parser::Placeholders;
use crate::view::{MenuKind, MenuView};

impl MenuEngine {
    /// Read-only view of `target`'s personal kit `slot`. No buttons.
    pub fn open_inspect(
        &self,
        viewer: &Viewer,
        target: &ViewerId,
        slot: u32,
    ) -> Result<MenuView, MenuError> {
        let layouts = self.layouts();
        let placeholders = Placeholders::single("<target>", target).with("<slot>", slot);
        let (mut view, layout) = shell(
            &layouts,
            MenuKind::Inspect {
                target: target.clone(),
                slot,
            },
            &placeholders,
        )?;

        fill_region(&mut view, layout, "filter", None)?;
        for label in EQUIPMENT_LABELS {
            fill_region(&mut view, layout, label, None)?;
        }
        let handle = KitHandle::Personal {
            owner: target.clone(),
            slot,
        };
        if let Some(items) = self.stored(&handle) {
            view.load_contents(0, &items);
        }

        view.activate(&viewer.id);
        debug!(viewer = %viewer.name, %target, slot, "inspect view opened");
        Ok(view)
    }
}
