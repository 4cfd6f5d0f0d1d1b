pub mod data_loader;
pub mod lenient;
pub mod paths;
pub mod shot_type;

pub use data_loader::{JsonlStore, load_all_data};
pub use paths::get_data_paths;
