//! Authentication command handlers for the Agent Monitor CLI

use std::path::Path;

use agent_monitor_client::{AgentMonitorClient, ClientConfig, ClientResult};
use tracing::debug;

use crate::cli::Output;
use crate::AuthCommands;

pub fn handle_auth_command(
    cmd: AuthCommands,
    client: &mut AgentMonitorClient,
    config_path: Option<&Path>,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        AuthCommands::Login {
            username,
            password,
            save,
        } => {
            let response = client.login(&username, &password).map_err(|e| {
                eprintln!("✗ Login failed: {}", e);
                e
            })?;

            match client.token() {
                Some(token) => {
                    eprintln!("✓ Logged in as {}", username);
                    if save {
                        let path = save_token(token, config_path)?;
                        eprintln!("✓ Token saved to {}", path.display());
                    }
                }
                None => eprintln!("✗ Login response did not contain an access token"),
            }

            output.print(&response)
        }
        AuthCommands::Status => output.emit("get auth status", client.get_auth_status()),
    }
}

/// Write the token into the config file, leaving other file settings untouched
///
/// Starts from the file contents rather than the merged configuration so that
/// environment values are never persisted.
fn save_token(token: &str, config_path: Option<&Path>) -> ClientResult<std::path::PathBuf> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => ClientConfig::default_config_path()?,
    };

    let mut file_config = if path.is_file() {
        ClientConfig::load_from_file(&path)?
    } else {
        ClientConfig::default()
    };
    file_config.auth.token = Some(token.to_string());
    file_config.save_to_file(&path)?;

    debug!("Saved access token to {}", path.display());
    Ok(path)
}
