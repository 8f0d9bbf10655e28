//! Case-insensitive collision check against existing artifact folders.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::naming, error::ArgonResult};

/// Whether an artifact called `name` already lives directly under `kind_root`.
///
/// `kind_root` is created when missing. The lower-cased name is compared with
/// the folder listing as-is, so `Card` and `card` collide.
#[instrument(skip(fs), fields(root = %kind_root.display()))]
pub fn artifact_exists(fs: &dyn Filesystem, kind_root: &Path, name: &str) -> ArgonResult<bool> {
    if !fs.exists(kind_root) {
        debug!("Creating missing artifact root");
        fs.create_dir_all(kind_root)?;
    }

    let folder = naming::to_folder_name(name);
    let exists = fs.list_dir(kind_root)?.iter().any(|entry| *entry == folder);
    Ok(exists)
}
