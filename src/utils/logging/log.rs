//! Log lines for dataset and settings files

use std::path::Path;
use std::time::Duration;

/// Log that work on a file has started
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{operation} {}", path.display());
}

/// Log the number of records handled from a file
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    records: usize,
    elapsed: Option<Duration>,
) {
    match elapsed {
        Some(elapsed) => log::info!(
            "{operation} {records} records from {} in {elapsed:?}",
            path.display()
        ),
        None => log::info!("{operation} {records} records from {}", path.display()),
    }
}

pub fn log_warning(message: &str, path: Option<&Path>) {
    match path {
        Some(path) => log::warn!("{message}: {}", path.display()),
        None => log::warn!("{message}"),
    }
}
