// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Command-line options.
//!
//! Paths are validated while parsing, so the launcher only ever sees an
//! existing configuration file and an existing directory.

use clap::Parser;
use std::path::PathBuf;

/// Label images with a configurable class list.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "label-grab", version, about, long_about = None)]
pub struct StartupParameters {
    /// Class configuration file (JSON)
    #[arg(long, value_name = "PATH", value_parser = existing_file)]
    pub config: Option<PathBuf>,

    /// Start in this directory
    #[arg(long, value_name = "PATH", value_parser = existing_dir)]
    pub dir: Option<PathBuf>,
}

fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("File '{}' does not exist.", value));
    }
    if path.is_dir() {
        return Err(format!("File '{}' is a directory.", value));
    }
    std::fs::File::open(&path).map_err(|e| format!("File '{}' is not readable: {}", value, e))?;
    Ok(path)
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if !path.exists() {
        return Err(format!("Directory '{}' does not exist.", value));
    }
    if !path.is_dir() {
        return Err(format!("Directory '{}' is a file.", value));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: Vec<OsString>) -> Result<StartupParameters, clap::Error> {
        StartupParameters::try_parse_from(std::iter::once(OsString::from("label-grab")).chain(args))
    }

    #[test]
    fn test_no_options() {
        let params = parse(Vec::new()).unwrap();
        assert!(params.config.is_none());
        assert!(params.dir.is_none());
    }

    #[test]
    fn test_valid_paths() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("cfg.json");
        std::fs::write(&config, "{}").unwrap();

        let params = parse(vec![
            "--config".into(),
            config.clone().into(),
            "--dir".into(),
            dir.path().into(),
        ])
        .unwrap();
        assert_eq!(params.config, Some(config));
        assert_eq!(params.dir, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_config_must_exist_and_be_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");

        assert!(parse(vec!["--config".into(), missing.into()]).is_err());
        assert!(parse(vec!["--config".into(), dir.path().into()]).is_err());
    }

    #[test]
    fn test_dir_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(parse(vec!["--dir".into(), file.into()]).is_err());
        assert!(parse(vec!["--dir".into(), dir.path().join("nope").into()]).is_err());
    }
}
