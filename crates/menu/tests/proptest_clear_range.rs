//! Property tests for range clearing and content import.

use perkit_core::{ItemStack, Material};
use perkit_menu::click::bind_clear;
use perkit_menu::{
    ClickType, MenuConfig, MenuEngine, MenuKind, MenuView, Placeholders, Settings, Viewer,
};
use perkit_testkit::MemoryWorld;
use proptest::prelude::*;

fn click_type() -> impl Strategy<Value = ClickType> {
    prop_oneof![
        Just(ClickType::Left),
        Just(ClickType::Right),
        Just(ClickType::ShiftLeft),
        Just(ClickType::ShiftRight),
        Just(ClickType::Middle),
        Just(ClickType::DoubleClick),
        Just(ClickType::NumberKey),
        Just(ClickType::Drop),
        Just(ClickType::ControlDrop),
    ]
}

proptest! {
    /// Property: a shift click empties exactly [start, end); anything else is a no-op
    #[test]
    fn clear_touches_exactly_the_range(
        (start, end) in (0usize..53).prop_flat_map(|start| (Just(start), start..53)),
        click in click_type(),
    ) {
        let world = MemoryWorld::new();
        let engine = MenuEngine::new(MenuConfig::default(), Settings::default(), world.collaborators());
        let viewer = Viewer::new("u", "Steve");

        let mut view = MenuView::build(MenuKind::KitEditor(1), 6, "t", &Placeholders::new());
        let all: Vec<usize> = (0..53).collect();
        view.fill(&all, &ItemStack::new(Material::Cobweb, 1));
        bind_clear(&mut view, 53, start..end);

        engine.click(&viewer, &mut view, 53, click).expect("click");

        for slot in 0..53 {
            let cleared = click.is_shift_click() && (start..end).contains(&slot);
            prop_assert_eq!(view.item(slot).is_none(), cleared, "slot {}", slot);
        }
    }

    /// Property: import replaces the content region wholesale, empty slots included
    #[test]
    fn import_is_a_full_replacement(
        inventory in prop::collection::vec(prop::option::of(1u32..=64), 41),
    ) {
        let world = MemoryWorld::new();
        let viewer = Viewer::new("u", "Steve");
        let items: Vec<Option<ItemStack>> = inventory
            .iter()
            .map(|count| count.map(|count| ItemStack::new(Material::Arrow, count)))
            .collect();
        world.inventory.set_inventory(&viewer.id, items.clone());

        let engine = MenuEngine::new(
            MenuConfig::builtin().expect("builtin"),
            Settings::default(),
            world.collaborators(),
        );
        let mut view = engine
            .open(&viewer, &MenuKind::KitEditor(1))
            .expect("opens")
            .expect("shown");
        let all: Vec<usize> = (0..41).collect();
        view.fill(&all, &ItemStack::new(Material::Stone, 1));

        engine.click(&viewer, &mut view, 51, ClickType::Left).expect("import");
        prop_assert_eq!(view.contents(0..41), items);
    }
}
