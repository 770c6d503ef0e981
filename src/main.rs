// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Label Grab
//!
//! A desktop application for labeling images with a class list loaded
//! from a JSON configuration file.

mod app;
mod backend;
mod cli;
mod engine;
mod io;
mod launcher;
mod models;
mod resources;
mod runtime;
mod ui;
mod util;

use app::NativeEventLoop;
use clap::Parser;
use cli::StartupParameters;
use resources::Resources;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = StartupParameters::parse();
    let resources = Resources::locate();

    let code = launcher::run(params, &resources, &mut NativeEventLoop);
    std::process::exit(code);
}
