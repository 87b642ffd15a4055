//! perkit - kit menus for a Minecraft server
//!
//! Headless driver: loads configuration and replays click scripts against an
//! in-memory world, printing each resulting view as a JSON line.

mod click_script;
mod config;

use anyhow::{Context, Result};
use click_script::ClickScript;
use config::{ConfigDir, DEFAULT_CONFIG_DIR};
use perkit_menu::{Capabilities, MenuEngine, MenuKind, MenuSession, Viewer};
use perkit_testkit::{JsonlSink, MemoryWorld, RecordingBroadcast, ViewSummary};
use std::{env, path::PathBuf};
use tracing::info;

fn main() -> Result<()> {
    // WARN by default, RUST_LOG overrides
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    info!("Starting perkit v{}", env!("CARGO_PKG_VERSION"));

    let cli = CliOptions::parse(env::args().skip(1));
    let config = ConfigDir::new(cli.config_dir.clone());
    let layouts = config.load_layouts()?;
    if cli.check {
        let sections: Vec<&str> = layouts.section_names().collect();
        println!("{} menu sections OK: {}", sections.len(), sections.join(", "));
        return Ok(());
    }
    let settings = config.load_settings();

    let world = match &cli.journal {
        Some(path) => {
            let journal = JsonlSink::create(path)
                .with_context(|| format!("Failed to open journal {}", path.display()))?;
            MemoryWorld::with_broadcast(RecordingBroadcast::with_journal(journal))
        }
        None => MemoryWorld::new(),
    };
    let engine = MenuEngine::new(layouts, settings, world.collaborators());
    let mut session = MenuSession::new(cli.viewer());

    let Some(script_path) = cli.script.as_ref() else {
        session.open(&engine, &MenuKind::Main)?;
        if let Some(view) = session.current() {
            println!("{}", serde_json::to_string(&ViewSummary::of(view))?);
        }
        return Ok(());
    };

    let script = ClickScript::from_path(script_path)
        .with_context(|| format!("Failed to load click script {}", script_path.display()))?;
    info!(steps = script.len(), path = %script_path.display(), "replaying click script");

    script.run(&engine, &world, &config, &mut session, |report| {
        println!("{}", serde_json::to_string(&report)?);
        Ok(())
    })
}

#[derive(Debug)]
struct CliOptions {
    config_dir: PathBuf,
    script: Option<PathBuf>,
    journal: Option<PathBuf>,
    viewer_id: String,
    viewer_name: String,
    admin: bool,
    kit_room_editor: bool,
    check: bool,
}

impl CliOptions {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Self {
        let mut opts = CliOptions {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            script: None,
            journal: None,
            viewer_id: "00000000-0000-0000-0000-000000000000".to_string(),
            viewer_name: "Player".to_string(),
            admin: false,
            kit_room_editor: false,
            check: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(path) = args.next() {
                        opts.config_dir = PathBuf::from(path);
                    } else {
                        tracing::error!("--config requires a directory path");
                    }
                }
                "--script" => {
                    if let Some(path) = args.next() {
                        opts.script = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--script requires a file path");
                    }
                }
                "--journal" => {
                    if let Some(path) = args.next() {
                        opts.journal = Some(PathBuf::from(path));
                    } else {
                        tracing::error!("--journal requires a file path");
                    }
                }
                "--viewer" => {
                    if let Some(name) = args.next() {
                        opts.viewer_name = name;
                    } else {
                        tracing::error!("--viewer requires a player name");
                    }
                }
                "--uuid" => {
                    if let Some(id) = args.next() {
                        opts.viewer_id = id;
                    } else {
                        tracing::error!("--uuid requires a player id");
                    }
                }
                "--admin" => opts.admin = true,
                "--kit-room-editor" => opts.kit_room_editor = true,
                "--check" => opts.check = true,
                other => tracing::warn!(arg = other, "ignoring unknown argument"),
            }
        }

        opts
    }

    fn viewer(&self) -> Viewer {
        let mut capabilities = Capabilities::empty();
        if self.admin {
            capabilities |= Capabilities::ADMIN;
        }
        if self.kit_room_editor {
            capabilities |= Capabilities::EDIT_KIT_ROOM;
        }
        Viewer::new(self.viewer_id.clone(), self.viewer_name.clone()).with_capabilities(capabilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliOptions {
        CliOptions::parse(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn defaults_without_arguments() {
        let opts = parse(&[]);
        assert_eq!(opts.config_dir, PathBuf::from(DEFAULT_CONFIG_DIR));
        assert!(opts.script.is_none());
        assert!(opts.viewer().capabilities.is_empty());
    }

    #[test]
    fn capability_flags_combine() {
        let opts = parse(&["--admin", "--kit-room-editor", "--viewer", "Alex"]);
        let viewer = opts.viewer();
        assert_eq!(viewer.name, "Alex");
        assert!(viewer.is_admin());
        assert!(viewer.can_edit_kit_room());
    }

    #[test]
    fn missing_values_keep_defaults() {
        let opts = parse(&["--script"]);
        assert!(opts.script.is_none());
    }
}
