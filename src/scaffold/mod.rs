pub mod apply;
pub mod plan;

pub use apply::{DryRunFilesystem, Filesystem, LocalFilesystem, apply_plan};
pub use plan::{FilePlan, build_plan};
