/// File layer: case transforms, directory listing, confirmation prompt.
pub mod confirm;
pub mod errors;
pub mod listing;
pub mod transform;

pub use confirm::confirm;
pub use errors::AppError;
pub use listing::{DirEntry, EntryKind, list_dir};
pub use transform::{
    Outcome, ProcessOptions, Transform, TransformResult, confirm_batch, process_files,
};
