//! Conversation command handlers for the Agent Monitor CLI

use agent_monitor_client::{AgentMonitorClient, ClientResult, ConversationQuery};

use crate::cli::{list_options, parse_json_arg, Output};
use crate::ConversationCommands;

pub fn handle_conversation_command(
    cmd: ConversationCommands,
    client: &AgentMonitorClient,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        ConversationCommands::List {
            ids,
            messages,
            list,
        } => {
            let query = ConversationQuery {
                ids,
                include_messages: messages.then_some(true),
                list: list_options(&list),
            };
            output.emit("list conversations", client.get_conversations(&query))
        }
        ConversationCommands::Get {
            conversation_id,
            messages,
        } => output.emit(
            "get conversation",
            client.get_conversation(&conversation_id, messages.then_some(true)),
        ),
        ConversationCommands::Create { data } => {
            let conversation = parse_json_arg(&data)?;
            output.emit(
                "create conversation",
                client.create_conversation(&conversation),
            )
        }
        ConversationCommands::Update {
            conversation_id,
            data,
        } => {
            let conversation = parse_json_arg(&data)?;
            output.emit(
                "update conversation",
                client.update_conversation(&conversation_id, &conversation),
            )
        }
        ConversationCommands::Delete { conversation_id } => output.emit(
            "delete conversation",
            client.delete_conversation(&conversation_id),
        ),
        ConversationCommands::Filter { criteria } => {
            let criteria = parse_json_arg(&criteria)?;
            output.emit(
                "filter conversations",
                client.filter_conversations(&criteria),
            )
        }
        ConversationCommands::ByCollection {
            collection_id,
            list,
        } => output.emit(
            "list collection conversations",
            client.get_conversations_by_collection(&collection_id, &list_options(&list)),
        ),
        ConversationCommands::ByAgent { agent_id, list } => output.emit(
            "list agent conversations",
            client.get_conversations_by_ai_agent(&agent_id, &list_options(&list)),
        ),
        ConversationCommands::ByUser { user_id, list } => output.emit(
            "list user conversations",
            client.get_conversations_by_user(&user_id, &list_options(&list)),
        ),
    }
}
