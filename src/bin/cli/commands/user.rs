//! User command handlers for the Agent Monitor CLI

use agent_monitor_client::{AgentMonitorClient, ClientResult};

use crate::cli::{parse_json_arg, Output};
use crate::UserCommands;

pub fn handle_user_command(
    cmd: UserCommands,
    client: &AgentMonitorClient,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        UserCommands::List { ids } => output.emit("list users", client.get_users(&ids)),
        UserCommands::Get { user_id } => output.emit("get user", client.get_user(&user_id)),
        UserCommands::Current => output.emit("get current user", client.get_current_user()),
        UserCommands::Create { data } => {
            let user = parse_json_arg(&data)?;
            output.emit("create user", client.create_user(&user))
        }
        UserCommands::Update { user_id, data } => {
            let user = parse_json_arg(&data)?;
            output.emit("update user", client.update_user(&user_id, &user))
        }
        UserCommands::Delete { user_id } => {
            output.emit("delete user", client.delete_user(&user_id))
        }
        UserCommands::ByRole { role } => {
            output.emit("list users by role", client.get_users_by_role(&role))
        }
    }
}
