// larder-store: async client for the larder document-store backend.

pub mod client;
pub mod document;
pub mod error;
pub mod memory;
pub mod transport;

pub use client::StoreClient;
pub use document::{Document, DocumentStore, Fields};
pub use error::Error;
pub use memory::MemoryStore;
pub use transport::{TlsMode, TransportConfig};
