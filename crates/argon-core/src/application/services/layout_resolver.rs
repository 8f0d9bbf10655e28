//! Picks the layout file referenced by preview templates.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::ArgonResult,
};

/// Resolve the layout file name for `layouts`.
///
/// A file path yields its base name. A directory yields the alphabetically
/// first entry; several layouts are not told apart in any smarter way.
#[instrument(skip(fs), fields(path = %layouts.display()))]
pub fn resolve_layout_file_name(fs: &dyn Filesystem, layouts: &Path) -> ArgonResult<String> {
    let fail = |reason: &str| ApplicationError::LayoutResolution {
        path: layouts.to_path_buf(),
        reason: reason.to_owned(),
    };

    if !fs.exists(layouts) {
        return Err(fail("path does not exist").into());
    }

    let name = if fs.is_dir(layouts) {
        let mut entries = fs
            .list_dir(layouts)
            .map_err(|e| fail(&e.to_string()))?;
        entries.sort();
        entries
            .into_iter()
            .next()
            .ok_or_else(|| fail("directory contains no layouts"))?
    } else {
        layouts
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| fail("path has no file name"))?
    };

    debug!(layout = %name, "Layout resolved");
    Ok(name)
}
