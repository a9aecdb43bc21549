pub mod catalog;
pub mod config;
pub mod error;
pub mod imports;
pub mod insert;
pub mod quickcode;

// Re-export common items for convenience
pub use catalog::{Catalog, Component, ComponentGroup};
pub use config::{config_dir, state_file_path};
pub use error::{Result, SnipdeckError};
pub use insert::{
    run_insert_flow, EditorHost, FlowOutcome, MenuChoice, SelectionMenu, TemplateSource,
    TemplateVariant, TextBufferEditor,
};
pub use quickcode::{
    CodeGroup, CodeItem, JsonFileStore, MemoryStore, QuickCodeService, StateStore,
};
