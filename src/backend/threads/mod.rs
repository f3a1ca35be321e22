//! Threads Module
//!
//! CRUD over discussion threads. Threads live only in process memory.
//!
//! # Module Structure
//!
//! ```text
//! threads/
//! ├── mod.rs          - Module exports
//! ├── store.rs        - ThreadStore trait and in-memory implementation
//! └── handlers.rs     - HTTP handlers for /threads
//! ```
//!
//! # Endpoints
//!
//! - **`create_thread`** - POST /threads
//! - **`list_threads`** - GET /threads
//! - **`get_thread`** - GET /threads/{id}
//! - **`update_thread`** - PUT /threads/{id}
//! - **`delete_thread`** - DELETE /threads/{id}

/// Thread storage
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use handlers::{create_thread, delete_thread, get_thread, list_threads, update_thread};
pub use store::{InMemoryThreadStore, ThreadStore, ThreadStoreError};
