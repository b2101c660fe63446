use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PayrollError, Result};
use crate::store::JsonStore;

pub struct AppContext {
    pub root: PathBuf,
    pub config: Config,
    pub store: JsonStore,
}

impl AppContext {
    pub fn from_cli(cli: &crate::cli::Cli) -> Result<Self> {
        let root = resolve_root(cli)?;
        let config = Config::load(cli.config.as_deref(), &root)?;
        let store = JsonStore::open(
            data_file_path(&root, &config.storage.file),
            config.storage.pretty,
        )?;

        Ok(Self {
            root,
            config,
            store,
        })
    }
}

fn resolve_root(cli: &crate::cli::Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Ok(root) = std::env::var("PAYROLL_ROOT") {
        return Ok(PathBuf::from(root));
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| PayrollError::MissingConfig("data directory not found".to_string()))?;
    Ok(data_dir.join("payroll"))
}

fn data_file_path(root: &Path, file: &str) -> PathBuf {
    let file = PathBuf::from(file);
    if file.is_absolute() {
        file
    } else {
        root.join(file)
    }
}
