//! Template store adapters.

mod embedded;
mod memory;

pub use embedded::EmbeddedStore;
pub use memory::InMemoryStore;
