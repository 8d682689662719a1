pub mod crystal_spec;
pub mod entry_store;
pub mod growth;
pub mod layout;
pub mod persistence;
pub mod ranking;

pub use entry_store::EntryStore;
