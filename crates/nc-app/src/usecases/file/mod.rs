mod load_from_file;
mod save_to_file;

pub use load_from_file::LoadFromFile;
pub use save_to_file::{SaveOutcome, SaveToFile};
