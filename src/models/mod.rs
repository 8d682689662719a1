pub mod entry;
pub mod layout;
pub mod settings;
pub mod storage;

pub use entry::*;
pub use layout::*;
pub use settings::*;
pub use storage::*;
