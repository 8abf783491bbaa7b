// larder-core: inventory domain layer between larder-store and consumers.

pub mod config;
pub mod error;
pub mod inventory;
pub mod model;
pub mod search;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{AuthCredentials, StoreConfig, TlsVerification};
pub use error::CoreError;
pub use inventory::Inventory;
pub use model::InventoryItem;
pub use search::filter_by_name;
pub use stream::ItemsStream;
