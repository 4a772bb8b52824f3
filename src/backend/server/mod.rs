//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState`, the store and token verifier shared by handlers
//! - **`config`** - Environment configuration and store selection
//! - **`init`** - App creation from a loaded configuration
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState
//! ├── config.rs       - AppConfig, AppConfigBuilder, load_store
//! └── init.rs         - create_app
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use travel_lists::backend::server::{create_app, config::AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{AppConfig, ConfigError};
pub use init::create_app;
pub use state::AppState;
