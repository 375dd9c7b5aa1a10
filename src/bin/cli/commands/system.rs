//! System command handlers for the Agent Monitor CLI

use agent_monitor_client::{AgentMonitorClient, ClientResult};

use crate::cli::Output;
use crate::SystemCommands;

pub fn handle_system_command(
    cmd: SystemCommands,
    client: &AgentMonitorClient,
    output: &Output,
) -> ClientResult<()> {
    match cmd {
        SystemCommands::Initialize => {
            eprintln!("Initializing data source...");
            output.emit("initialize system", client.initialize_system())
        }
        SystemCommands::Save => output.emit("save data", client.save_data()),
        SystemCommands::ClearCache => output.emit("clear cache", client.clear_cache()),
        SystemCommands::GenerateSample { size } => {
            match size {
                Some(size) => eprintln!("Generating {} sample data set...", size),
                None => eprintln!("Generating sample data with the server default size..."),
            }
            output.emit("generate sample data", client.generate_sample_data(size))
        }
        SystemCommands::SampleStatus => output.emit(
            "get sample data status",
            client.get_sample_data_status(),
        ),
        SystemCommands::GenerateStatic => {
            eprintln!("Generating static sample data sets (small, medium, large)...");
            output.emit(
                "generate static sample data",
                client.generate_static_sample_data(),
            )
        }
        SystemCommands::LoadStatic { size } => output.emit(
            "load static sample data",
            client.load_static_sample_data(size),
        ),
        SystemCommands::SaveStatic { size } => output.emit(
            "save current data as static",
            client.save_current_as_static(size),
        ),
    }
}
