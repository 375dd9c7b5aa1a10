//! Configuration command handlers for the Agent Monitor CLI

use std::path::Path;

use agent_monitor_client::{AuthMode, ClientConfig, ClientResult};

use crate::ConfigCommands;

pub fn handle_config_command(
    cmd: ConfigCommands,
    config: &ClientConfig,
    config_path: Option<&Path>,
) -> ClientResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Current CLI Configuration:");
            println!("══════════════════════════\n");

            println!("API Endpoint:");
            println!("  URL: {}", config.resolved_base_url());
            match config.api.timeout_ms {
                Some(timeout_ms) => println!("  Timeout: {}ms", timeout_ms),
                None => println!("  Timeout: (transport default)"),
            }
            println!();

            let credentials = config.credentials();
            println!("Authentication:");
            println!("  Mode: {}", describe_mode(credentials.mode()));
            if let Some(ref client_id) = credentials.client_id {
                println!("  Client ID: {}", client_id);
            }
            println!();

            println!("Output:");
            println!("  Pretty JSON: {}", config.cli.pretty);
            println!();

            let file = config_path
                .map(Path::to_path_buf)
                .or_else(ClientConfig::find_config_file);
            match file {
                Some(path) => println!("Config File: {}", path.display()),
                None => println!("Config File: (not found)"),
            }
        }
    }

    Ok(())
}

fn describe_mode(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Bearer => "bearer token",
        AuthMode::ApiKey => "API key",
        AuthMode::None => "none",
    }
}
