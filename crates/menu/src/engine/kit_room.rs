use perkit_core::Material;
use tracing::debug;

use super::{fill_region, place_buttons, shell, MenuEngine};
use crate::click::{bind_navigate, bind_save_kit_room};
use crate::error::{ConfigError, MenuError};
use crate::handle::{KitHandle, Viewer};
use crate::layout::MenuLayout;
use crate::parser::{self, Placeholders};
use crate::render::{add_enchant_look, add_hide_flags, render};
use crate::settings::Settings;
use crate::view::{MenuKind, MenuView, KIT_ROOM_SLOTS};

impl MenuEngine {
    /// Kit room page `page` (0-based).
    ///
    /// Pages are the `pages` region slots that have a configured button.
    /// Viewers allowed to edit the kit room get the save button in place of
    /// `back`.
    pub fn open_kit_room(&self, viewer: &Viewer, page: usize) -> Result<MenuView, MenuError> {
        let layouts = self.layouts();
        let settings = self.settings();
        let pages = page_count(layouts.section(MenuKind::KitRoom(page).section())?, &settings);
        if page >= pages {
            return Err(MenuError::UnknownKitRoomPage { page, pages });
        }

        let (mut view, layout) = shell(
            &layouts,
            MenuKind::KitRoom(page),
            &Placeholders::single("<page>", page + 1),
        )?;

        fill_region(&mut view, layout, "filter", None)?;
        if let Some(items) = self.stored(&KitHandle::KitRoomPage(page)) {
            view.load_contents(0, &items);
        }
        view.allow_modification(0..KIT_ROOM_SLOTS);

        place_buttons(&mut view, layout, &["refill"], None)?;
        place_page_buttons(&mut view, layout, &settings, page)?;
        if viewer.can_edit_kit_room() {
            place_save_button(&mut view, layout, page)?;
        } else {
            place_buttons(&mut view, layout, &["back"], None)?;
        }

        view.allow_cursor_drop();
        view.activate(&viewer.id);
        debug!(viewer = %viewer.name, page, "kit room opened");
        Ok(view)
    }
}

/// Number of kit room pages: page slots with a configured button.
pub(super) fn page_count(layout: &MenuLayout, settings: &Settings) -> usize {
    layout
        .region("pages")
        .map_or(0, |r| r.slots.len().min(settings.kit_room.pages.len()))
}

fn place_page_buttons(
    view: &mut MenuView,
    layout: &MenuLayout,
    settings: &Settings,
    current: usize,
) -> Result<(), ConfigError> {
    let Some(region) = layout.region("pages") else {
        return Ok(());
    };
    let section = view.kind().section();
    for (page, (&slot, button)) in region.slots.iter().zip(&settings.kit_room.pages).enumerate() {
        let material = button
            .material
            .parse::<Material>()
            .map_err(|err| ConfigError::from(err).in_region(section, "pages"))?;

        let item = add_hide_flags(render(material, 1, Some(&format!("&r{}", button.name)), &[]));
        let item = if page == current {
            add_enchant_look(item)
        } else {
            item
        };
        view.set_item(slot, Some(item));
        bind_navigate(view, slot, MenuKind::KitRoom(page));
    }
    Ok(())
}

/// The `edit` button; its stack size shows the page number.
fn place_save_button(view: &mut MenuView, layout: &MenuLayout, page: usize) -> Result<(), ConfigError> {
    let Some(region) = layout.region("edit") else {
        return Ok(());
    };
    let section = view.kind().section();
    let mut item =
        parser::parse(Some(&region.item), None).map_err(|err| err.in_region(section, "edit"))?;
    item.count = page as u32 + 1;
    for &slot in &region.slots {
        view.set_item(slot, Some(item.clone()));
        bind_save_kit_room(view, slot, page);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{MenuConfig, KIT_ROOM_MENU};

    #[test]
    fn page_count_is_capped_by_configured_buttons() {
        let layouts = MenuConfig::builtin().expect("builtin layouts");
        let layout = layouts.section(KIT_ROOM_MENU).expect("kit room layout");

        assert_eq!(page_count(layout, &Settings::default()), 5);
        let settings = Settings::from_toml_str(
            "[kit_room]\npages = [{ material = \"TOTEM_OF_UNDYING\", name = \"Misc\" }]",
        )
        .expect("settings");
        assert_eq!(page_count(layout, &settings), 1);
    }
}
