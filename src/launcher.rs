// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application start-up.
//!
//! Resolves the class configuration and starting directory from the
//! command line, wires the backend into the UI engine, loads the UI
//! definition and runs the event loop. Every failure ends the process
//! with exit code 1.

use crate::backend::{utils::UiUtils, LabelBackend};
use crate::cli::StartupParameters;
use crate::engine::UiEngine;
use crate::resources::Resources;
use crate::runtime::Application;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "label-grab";
pub const ORGANIZATION_NAME: &str = "EPFL";
pub const ORGANIZATION_DOMAIN: &str = "ch";

/// Environment variable selecting the UI style.
pub const STYLE_ENV: &str = "LABEL_GRAB_STYLE";
pub const DEFAULT_STYLE: &str = "dark";

/// Context property and image provider names used by the UI.
pub const BACKEND_NAME: &str = "backend";
pub const UTILS_NAME: &str = "utils";

/// Exit code for any start-up or load failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Configuration path and starting directory derived from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStartup {
    pub config: Option<PathBuf>,
    pub start_dir: Option<PathBuf>,
}

/// Runs the GUI until the application quits.
pub trait EventLoop {
    /// Take ownership of the engine and block until the window closes,
    /// returning the loop's exit code.
    fn exec(&mut self, app: Application, engine: UiEngine) -> Result<i32>;
}

/// Pick the configuration file and starting directory.
///
/// A starting directory that is not a directory is dropped. Without an
/// explicit configuration, the first `.json` file in the starting directory
/// (by file name) is used.
pub fn resolve_startup(config: Option<PathBuf>, dir: Option<PathBuf>) -> ResolvedStartup {
    let start_dir = dir.filter(|dir| dir.is_dir());

    let config = match (config, &start_dir) {
        (Some(config), _) => Some(config),
        (None, Some(dir)) => find_config_in(dir),
        (None, None) => None,
    };

    ResolvedStartup { config, start_dir }
}

fn find_config_in(dir: &Path) -> Option<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Cannot scan {} for a configuration: {}", dir.display(), e);
            return None;
        }
    };

    let mut candidates: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    candidates.sort();

    let found = candidates.into_iter().next();
    if let Some(path) = &found {
        log::info!("Found configuration {} in starting directory", path.display());
    }
    found
}

/// Set an environment variable unless the user already set it.
pub fn set_default_env(key: &str, value: &str) {
    if std::env::var_os(key).is_none() {
        std::env::set_var(key, value);
    }
}

/// Run the application and return the process exit code.
pub fn run<E: EventLoop>(params: StartupParameters, resources: &Resources, event_loop: &mut E) -> i32 {
    match try_run(params, resources, event_loop) {
        Ok(code) => code,
        Err(e) => {
            log::error!("Exception in main application: {:?}", e);
            FAILURE_EXIT_CODE
        }
    }
}

fn try_run<E: EventLoop>(
    params: StartupParameters,
    resources: &Resources,
    event_loop: &mut E,
) -> Result<i32> {
    let startup = resolve_startup(params.config, params.dir);
    let config = startup
        .config
        .unwrap_or_else(|| resources.default_config());
    log::info!("Using class configuration {}", config.display());

    set_default_env(STYLE_ENV, DEFAULT_STYLE);

    let mut app = Application::new(APP_NAME);
    app.set_organization(ORGANIZATION_NAME, ORGANIZATION_DOMAIN);
    app.set_window_icon(&resources.icon());

    let mut engine = UiEngine::new();
    engine.add_import_path(resources.root());

    let mut backend = LabelBackend::new();
    backend.load_config(&config)?;
    backend.set_starting_directory(startup.start_dir);
    backend.set_image_path(&resources.sample_image())?;

    let provider = backend.image_provider();
    engine.set_context_property(BACKEND_NAME, backend);
    engine.set_context_property(UTILS_NAME, UiUtils::new());
    engine.add_image_provider(BACKEND_NAME, provider)?;

    engine.load(&resources.main_ui());

    if engine.root_objects().is_empty() {
        log::error!("UI definition failed to load");
        return Ok(FAILURE_EXIT_CODE);
    }

    let code = event_loop.exec(app, engine)?;
    log::info!("Event loop finished with code {}", code);
    Ok(code)
}
