//! CLI module for the Agent Monitor CLI tool
//!
//! This module organizes all CLI-related functionality including
//! output rendering, argument helpers and command handlers.

pub mod commands;

pub use commands::{
    handle_agent_command, handle_auth_command, handle_collection_command, handle_config_command,
    handle_conversation_command, handle_group_command, handle_system_command,
    handle_user_command,
};

use agent_monitor_client::{ClientError, ClientResult, ListOptions};
use serde_json::Value;

use crate::ListArgs;

/// Renders command results on stdout
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pretty: bool,
}

impl Output {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn render(&self, value: &Value) -> ClientResult<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }

    pub fn print(&self, value: &Value) -> ClientResult<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    /// Print a call's response, or report the failure on stderr and pass it on
    pub fn emit(&self, action: &str, result: ClientResult<Value>) -> ClientResult<()> {
        match result {
            Ok(value) => self.print(&value),
            Err(e) => {
                eprintln!("✗ Failed to {}: {}", action, e);
                Err(e)
            }
        }
    }
}

/// Parse a JSON argument given inline or as `@path/to/file.json`
pub fn parse_json_arg(arg: &str) -> ClientResult<Value> {
    let content = match arg.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)?,
        None => arg.to_string(),
    };
    serde_json::from_str(&content)
        .map_err(|e| ClientError::invalid_input(format!("Invalid JSON argument: {}", e)))
}

/// Listing flags to client options; unset flags send nothing
pub fn list_options(args: &ListArgs) -> ListOptions {
    ListOptions {
        skip: args.skip,
        limit: args.limit,
        sort_by: args.sort_by.clone(),
        sort_order: args.sort_order,
        include_pagination: args.pagination,
    }
}
