//! AI agent command handlers for the Agent Monitor CLI

use agent_monitor_client::{AgentMonitorClient, ClientResult};

use crate::cli::{parse_json_arg, Output};
use crate::AgentCommands;

pub fn handle_agent_command(
    cmd: AgentCommands,
    client: &AgentMonitorClient,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        AgentCommands::List { ids } => {
            output.emit("list AI agents", client.get_ai_agents(&ids))
        }
        AgentCommands::Get { agent_id } => {
            output.emit("get AI agent", client.get_ai_agent(&agent_id))
        }
        AgentCommands::Create { data } => {
            let agent = parse_json_arg(&data)?;
            output.emit("create AI agent", client.create_ai_agent(&agent))
        }
        AgentCommands::Update { agent_id, data } => {
            let agent = parse_json_arg(&data)?;
            output.emit("update AI agent", client.update_ai_agent(&agent_id, &agent))
        }
        AgentCommands::Delete { agent_id } => {
            output.emit("delete AI agent", client.delete_ai_agent(&agent_id))
        }
        AgentCommands::ByStatus { status } => output.emit(
            "list AI agents by status",
            client.get_ai_agents_by_status(&status),
        ),
    }
}
