pub mod security;
mod session_registry_memory;

pub use session_registry_memory::InMemorySessionRegistry;
