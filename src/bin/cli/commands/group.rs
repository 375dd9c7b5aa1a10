//! Group command handlers for the Agent Monitor CLI
//!
//! Covers group CRUD plus the membership, admin, collection and permission
//! relationships.

use agent_monitor_client::{AgentMonitorClient, ClientResult};

use crate::cli::{parse_json_arg, Output};
use crate::GroupCommands;

pub fn handle_group_command(
    cmd: GroupCommands,
    client: &AgentMonitorClient,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        GroupCommands::List { ids } => {
            output.emit("list groups", client.get_groups(&ids))
        }
        GroupCommands::Get { group_id } => output.emit("get group", client.get_group(&group_id)),
        GroupCommands::Create { data } => {
            let group = parse_json_arg(&data)?;
            output.emit("create group", client.create_group(&group))
        }
        GroupCommands::Update { group_id, data } => {
            let group = parse_json_arg(&data)?;
            output.emit("update group", client.update_group(&group_id, &group))
        }
        GroupCommands::Delete { group_id } => {
            output.emit("delete group", client.delete_group(&group_id))
        }
        GroupCommands::ByAdmin { user_id } => output.emit(
            "list admin groups",
            client.get_groups_by_admin_user(&user_id),
        ),
        GroupCommands::ByUser { user_id } => {
            output.emit("list user groups", client.get_groups_by_user(&user_id))
        }
        GroupCommands::ByCollection { collection_id } => output.emit(
            "list collection groups",
            client.get_groups_by_collection(&collection_id),
        ),
        GroupCommands::ByPurpose { purpose } => output.emit(
            "list groups by purpose",
            client.get_groups_by_purpose(&purpose),
        ),
        GroupCommands::AddUser {
            group_id,
            user_id,
            permission,
        } => output.emit(
            "add user to group",
            client.add_user_to_group(&group_id, &user_id, &permission),
        ),
        GroupCommands::RemoveUser { group_id, user_id } => output.emit(
            "remove user from group",
            client.remove_user_from_group(&group_id, &user_id),
        ),
        GroupCommands::AddAdmin { group_id, user_id } => output.emit(
            "add admin to group",
            client.add_admin_to_group(&group_id, &user_id),
        ),
        GroupCommands::AddCollection {
            group_id,
            collection_id,
        } => output.emit(
            "add collection to group",
            client.add_collection_to_group(&group_id, &collection_id),
        ),
        GroupCommands::RemoveCollection {
            group_id,
            collection_id,
        } => output.emit(
            "remove collection from group",
            client.remove_collection_from_group(&group_id, &collection_id),
        ),
        GroupCommands::Permission { group_id, user_id } => output.emit(
            "get permission level",
            client.get_user_permission_level(&group_id, &user_id),
        ),
        GroupCommands::UsersWithPermission { group_id, level } => output.emit(
            "list users with permission level",
            client.get_users_with_permission_level(&group_id, &level),
        ),
    }
}
