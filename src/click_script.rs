use anyhow::Result;
use perkit_core::ItemSlots;
use perkit_menu::{ClickType, KitHandle, MenuEngine, MenuKind, MenuSession, SessionEvent};
use perkit_testkit::{MemoryWorld, ViewSummary};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::config::ConfigDir;

#[derive(Debug, Deserialize)]
struct ClickScriptFile {
    steps: Vec<ScriptStep>,
}

fn default_click() -> ClickType {
    ClickType::Left
}

/// One replay step.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    /// Seed the kit store.
    Store { handle: KitHandle, items: ItemSlots },
    /// Replace the viewer's carried inventory.
    Inventory { items: ItemSlots },
    /// Open a menu.
    Open(MenuKind),
    /// Click a slot of the open menu.
    Click {
        slot: usize,
        #[serde(rename = "type", default = "default_click")]
        click: ClickType,
    },
    /// Persist the open editor.
    Commit,
    /// Close the open menu.
    Close,
    /// Reload configuration from disk.
    Reload,
}

/// What one step produced, printed as a JSON line.
#[derive(Debug, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub event: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSummary>,
}

/// Headless menu session replay.
///
/// Scripts are a list of steps executed in file order against one viewer's
/// session.
#[derive(Debug)]
pub struct ClickScript {
    steps: Vec<ScriptStep>,
}

impl ClickScript {
    /// Load a click script from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Load a click script from an in-memory JSON string.
    pub fn from_str(contents: &str) -> Result<Self> {
        let file: ClickScriptFile = serde_json::from_str(contents)?;
        if file.steps.is_empty() {
            anyhow::bail!("click script contains no steps");
        }

        let mut opened = false;
        for step in &file.steps {
            match step {
                ScriptStep::Open(_) => opened = true,
                ScriptStep::Click { .. } | ScriptStep::Commit | ScriptStep::Close if !opened => {
                    anyhow::bail!("click script uses a menu before opening one");
                }
                _ => {}
            }
        }

        Ok(Self { steps: file.steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Run every step, handing each report to `report` as soon as the step
    /// finishes. Stops at the first failing step.
    pub fn run(
        &self,
        engine: &MenuEngine,
        world: &MemoryWorld,
        config: &ConfigDir,
        session: &mut MenuSession,
        mut report: impl FnMut(StepReport) -> Result<()>,
    ) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            let event = match step {
                ScriptStep::Store { handle, items } => {
                    world.store.insert(handle, items.clone());
                    "stored"
                }
                ScriptStep::Inventory { items } => {
                    world
                        .inventory
                        .set_inventory(&session.viewer().id, items.clone());
                    "inventory"
                }
                ScriptStep::Open(kind) => event_name(session.open(engine, kind)?),
                ScriptStep::Click { slot, click } => {
                    event_name(session.click(engine, *slot, *click)?)
                }
                ScriptStep::Commit => match session.current().and_then(|view| engine.commit(view)) {
                    Some(_) => "committed",
                    None => "ignored",
                },
                ScriptStep::Close => match session.close(engine) {
                    Some(_) => "closed",
                    None => "ignored",
                },
                ScriptStep::Reload => {
                    config.reload(engine)?;
                    "reloaded"
                }
            };
            report(StepReport {
                step: index,
                event,
                view: session.current().map(ViewSummary::of),
            })?;
        }
        Ok(())
    }
}

fn event_name(event: SessionEvent) -> &'static str {
    match event {
        SessionEvent::Ignored => "ignored",
        SessionEvent::Updated => "updated",
        SessionEvent::Opened => "opened",
        SessionEvent::Closed => "closed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perkit_menu::{Settings, Viewer};

    fn engine(world: &MemoryWorld) -> MenuEngine {
        MenuEngine::new(
            perkit_menu::MenuConfig::builtin().expect("builtin layouts"),
            Settings::default(),
            world.collaborators(),
        )
    }

    #[test]
    fn click_script_rejects_clicks_before_open() {
        let json = r#"{
            "steps": [
                {"click": {"slot": 10}},
                {"open": "main"}
            ]
        }"#;
        let err = ClickScript::from_str(json).unwrap_err();
        assert!(
            err.to_string().contains("before opening"),
            "unexpected error: {err:#}"
        );
    }

    #[test]
    fn click_script_rejects_empty_scripts() {
        assert!(ClickScript::from_str(r#"{"steps": []}"#).is_err());
    }

    #[test]
    fn click_script_replays_navigation() {
        let json = r#"{
            "steps": [
                {"open": "main"},
                {"click": {"slot": 10, "type": "right"}},
                {"click": {"slot": 53}},
                {"click": {"slot": 47}},
                "close"
            ]
        }"#;
        let script = ClickScript::from_str(json).expect("script should parse");
        assert_eq!(script.len(), 5);

        let world = MemoryWorld::new();
        let engine = engine(&world);
        let mut session = MenuSession::new(Viewer::new("u", "Steve"));
        let mut reports = Vec::new();
        script
            .run(
                &engine,
                &world,
                &ConfigDir::new("does-not-exist"),
                &mut session,
                |report| {
                    reports.push(report);
                    Ok(())
                },
            )
            .expect("script runs");

        let events: Vec<&str> = reports.iter().map(|r| r.event).collect();
        assert_eq!(events, ["opened", "opened", "opened", "opened", "closed"]);
        let kinds: Vec<Option<MenuKind>> = reports
            .iter()
            .map(|r| r.view.as_ref().map(|v| v.kind.clone()))
            .collect();
        assert_eq!(
            kinds,
            [
                Some(MenuKind::Main),
                Some(MenuKind::KitEditor(2)),
                Some(MenuKind::Main),
                Some(MenuKind::PublicKitCatalog),
                None,
            ]
        );
    }

    #[test]
    fn click_script_reports_steps_before_a_failure() {
        let json = r#"{
            "steps": [
                {"open": "main"},
                {"open": {"kit_room": 9}},
                "close"
            ]
        }"#;
        let script = ClickScript::from_str(json).expect("script should parse");
        let world = MemoryWorld::new();
        let engine = engine(&world);
        let mut session = MenuSession::new(Viewer::new("u", "Steve"));
        let mut events = Vec::new();
        let result = script.run(
            &engine,
            &world,
            &ConfigDir::new("does-not-exist"),
            &mut session,
            |report| {
                events.push(report.event);
                Ok(())
            },
        );

        assert!(result.is_err(), "page 9 does not exist");
        assert_eq!(events, ["opened"]);
    }

    #[test]
    fn click_script_seeds_the_store() {
        let json = r#"{
            "steps": [
                {"store": {
                    "handle": {"personal": {"owner": "u", "slot": 1}},
                    "items": [{"material": "STONE", "count": 1}]
                }},
                {"open": "main"}
            ]
        }"#;
        let script = ClickScript::from_str(json).expect("script should parse");
        let world = MemoryWorld::new();
        let engine = engine(&world);
        let mut session = MenuSession::new(Viewer::new("u", "Steve"));
        let mut last = None;
        script
            .run(
                &engine,
                &world,
                &ConfigDir::new("does-not-exist"),
                &mut session,
                |report| {
                    last = report.view;
                    Ok(())
                },
            )
            .expect("script runs");

        let main = last.expect("main menu open");
        assert_eq!(
            main.slot(27).map(|s| s.material.as_str()),
            Some("LIME_STAINED_GLASS_PANE")
        );
    }
}
