pub mod environment;
pub mod paths;

pub use environment::default_docs_root;
pub use paths::{format_path_with_tilde, relative_posix_path};
