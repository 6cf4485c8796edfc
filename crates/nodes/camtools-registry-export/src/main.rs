//! Prints the node registry and registration map as JSON.
//!
//! Usage: `camtools-registry-export [--config <host.json>] [--root <dir>]`

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use camtools_nodes::{registration, registry, HostConfig};
use log::info;

fn flag_value(args: &[String], flag: &str) -> Result<Option<String>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => match args.get(i + 1) {
            Some(value) => Ok(Some(value.clone())),
            None => bail!("{flag} expects a value"),
        },
        None => Ok(None),
    }
}

fn host_config(args: &[String]) -> Result<HostConfig> {
    if let Some(path) = flag_value(args, "--config")? {
        return HostConfig::from_json_file(&path)
            .with_context(|| format!("loading host config from {path}"));
    }
    let root = flag_value(args, "--root")?
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(HostConfig::with_root(root))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config = host_config(&args)?;
    info!("exporting registry for models under {}", config.models_dir().display());

    let registry = registry(&config).context("building node registry")?;
    let out = serde_json::json!({
        "registry": registry,
        "registration": registration(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
