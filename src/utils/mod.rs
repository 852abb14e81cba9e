pub mod file;
pub mod logging;
pub mod naming;

pub use file::{collect_font_files, ensure_directory_exists, unique_path};
pub use logging::init_logging;
pub use naming::{clean_name, fixed_file_name};
