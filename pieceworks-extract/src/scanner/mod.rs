//! Connector source tree discovery.

mod walker;

pub use walker::{
    action_files, entry_file, list_connector_dirs, source_files, trigger_files, ConnectorDir,
};
