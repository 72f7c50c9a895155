pub mod memory;

pub use memory::InMemoryStore;
pub use snip_core::{Result, StoreError, UrlStore};
