use anyhow::Result;
use camino::Utf8Path;
use tracing::info;

use crate::cli::Cli;
use crate::config::{self, ScaffoldConfig};
use crate::scaffold::{self, DryRunFilesystem, Filesystem, LocalFilesystem};

pub fn run(cli: Cli) -> Result<()> {
    let file = cli
        .file
        .as_deref()
        .map(config::load_from_path)
        .transpose()?;
    let config = config::resolve(file, cli.overrides())?;

    if cli.dry_run {
        generate(&config, &mut DryRunFilesystem)?;
        println!("    (dry-run) skipped writing {}", display_base(&config.base_path));
        return Ok(());
    }

    generate(&config, &mut LocalFilesystem)?;
    println!(
        "Project scaffold created at {} using '{}' mode.",
        display_base(&config.base_path),
        config.mode
    );
    Ok(())
}

/// Build the plan for `config` and apply it through `fs`.
fn generate<F: Filesystem>(config: &ScaffoldConfig, fs: &mut F) -> Result<usize> {
    let plan = scaffold::build_plan(config);
    let written = scaffold::apply_plan(&config.base_path, &plan, fs)?;
    info!(
        base = %config.base_path,
        mode = %config.mode,
        modules = config.modules.len(),
        files = written,
        "scaffold applied"
    );
    Ok(written)
}

/// Relative bases print as `./base/`, absolute ones as `base/`.
fn display_base(base: &Utf8Path) -> String {
    let trimmed = base.as_str().trim_end_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        return "./".to_owned();
    }
    if base.is_absolute() || trimmed.starts_with("./") || trimmed.starts_with("../") {
        format!("{trimmed}/")
    } else {
        format!("./{trimmed}/")
    }
}
