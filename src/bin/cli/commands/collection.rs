//! Collection command handlers for the Agent Monitor CLI

use agent_monitor_client::{AgentMonitorClient, ClientResult};

use crate::cli::{parse_json_arg, Output};
use crate::CollectionCommands;

pub fn handle_collection_command(
    cmd: CollectionCommands,
    client: &AgentMonitorClient,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        CollectionCommands::List { ids } => output.emit(
            "list collections",
            client.get_collections(&ids),
        ),
        CollectionCommands::Get { collection_id } => {
            output.emit("get collection", client.get_collection(&collection_id))
        }
        CollectionCommands::Create { data } => {
            let collection = parse_json_arg(&data)?;
            output.emit("create collection", client.create_collection(&collection))
        }
        CollectionCommands::Update {
            collection_id,
            data,
        } => {
            let collection = parse_json_arg(&data)?;
            output.emit(
                "update collection",
                client.update_collection(&collection_id, &collection),
            )
        }
        CollectionCommands::Delete { collection_id } => output.emit(
            "delete collection",
            client.delete_collection(&collection_id),
        ),
        CollectionCommands::ByGroup { group_id } => output.emit(
            "list group collections",
            client.get_collections_by_group(&group_id),
        ),
        CollectionCommands::ByCreator { user_id } => output.emit(
            "list collections by creator",
            client.get_collections_by_creator(&user_id),
        ),
    }
}
