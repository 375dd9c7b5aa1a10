//! Command handlers for the Agent Monitor CLI
//!
//! This module contains all command handler implementations, decomposed by command category.

pub mod agent;
pub mod auth;
pub mod collection;
pub mod config;
pub mod conversation;
pub mod group;
pub mod system;
pub mod user;

pub use agent::handle_agent_command;
pub use auth::handle_auth_command;
pub use collection::handle_collection_command;
pub use config::handle_config_command;
pub use conversation::handle_conversation_command;
pub use group::handle_group_command;
pub use system::handle_system_command;
pub use user::handle_user_command;
