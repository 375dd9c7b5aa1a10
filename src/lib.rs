#![allow(clippy::missing_errors_doc)] // Every public method returns ClientResult
#![allow(clippy::must_use_candidate)] // Accessors are self-explanatory

//! # Agent Monitor Client
//!
//! Blocking client library for the Agent Monitor REST API. Every public method maps to
//! exactly one HTTP request against the configured base URL; responses come back as
//! untouched `serde_json::Value`s.
//!
//! ## Module Organization
//!
//! - [`client`] - The [`AgentMonitorClient`] façade and its domain methods
//! - [`auth`] - Credentials and request header resolution
//! - [`query`] - Per-call query option structures
//! - [`config`] - Layered client configuration (defaults, TOML file, environment)
//! - [`error`] - Client error type
//!
//! ## Example
//!
//! ```rust,no_run
//! use agent_monitor_client::{AgentMonitorClient, ConversationQuery, ListOptions};
//!
//! let mut client = AgentMonitorClient::builder()
//!     .base_url("http://127.0.0.1:8000")
//!     .build()?;
//!
//! client.login("admin", "secret")?;
//!
//! let page = client.get_conversations(&ConversationQuery {
//!     include_messages: Some(true),
//!     list: ListOptions::new().limit(5).include_pagination(true),
//!     ..Default::default()
//! })?;
//! println!("{}", page["page_info"]["total_items"]);
//! # Ok::<(), agent_monitor_client::ClientError>(())
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod query;

// Re-export commonly used types for convenience
pub use auth::{AuthMode, Credentials};
pub use client::{AgentMonitorClient, AgentMonitorClientBuilder, SampleDataSize};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use query::{ConversationQuery, ListOptions, SortOrder};
