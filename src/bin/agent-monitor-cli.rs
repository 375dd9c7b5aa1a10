//! # Agent Monitor CLI Tool
//!
//! Command-line interface for the Agent Monitor REST API.
//! Every subcommand maps to one client call and prints the JSON response.

mod cli;

use agent_monitor_client::{AgentMonitorClient, ClientConfig, SampleDataSize, SortOrder};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{
    handle_agent_command, handle_auth_command, handle_collection_command, handle_config_command,
    handle_conversation_command, handle_group_command, handle_system_command,
    handle_user_command, Output,
};

#[derive(Parser, Debug)]
#[command(name = "agent-monitor-cli")]
#[command(about = "Command-line interface for the Agent Monitor API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file path (default: ./agent-monitor.toml or ~/.agent-monitor/config.toml)
    #[arg(short, long)]
    config: Option<String>,

    /// API base URL (overrides config and AGENT_MONITOR_API_HOST/PORT)
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token
    #[arg(long)]
    token: Option<String>,

    /// API-key secret sent as X-API-KEY
    #[arg(long)]
    client_secret: Option<String>,

    /// Client id sent as X-Client-ID
    #[arg(long)]
    client_id: Option<String>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authentication operations
    #[command(subcommand)]
    Auth(AuthCommands),

    /// Conversation operations
    #[command(subcommand)]
    Conversation(ConversationCommands),

    /// Collection operations
    #[command(subcommand)]
    Collection(CollectionCommands),

    /// Group, membership and permission operations
    #[command(subcommand)]
    Group(GroupCommands),

    /// AI agent operations
    #[command(subcommand)]
    Agent(AgentCommands),

    /// User operations
    #[command(subcommand)]
    User(UserCommands),

    /// System and sample data operations
    #[command(subcommand)]
    System(SystemCommands),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Pagination and sorting flags shared by listing commands
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Number of items to skip
    #[arg(long)]
    pub skip: Option<u64>,
    /// Maximum number of items to return
    #[arg(short, long)]
    pub limit: Option<u64>,
    /// Field to sort by
    #[arg(long)]
    pub sort_by: Option<String>,
    /// Sort order (asc or desc)
    #[arg(long)]
    pub sort_order: Option<SortOrder>,
    /// Wrap results in an {items, page_info} envelope (--pagination or --pagination=false)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub pagination: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum AuthCommands {
    /// Exchange username and password for an access token
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Store the returned token in the config file
        #[arg(long)]
        save: bool,
    },
    /// Show current authentication status
    Status,
}

#[derive(Debug, Subcommand)]
pub enum ConversationCommands {
    /// List conversations
    List {
        /// Comma-separated conversation ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
        /// Include decoded messages
        #[arg(short, long)]
        messages: bool,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Get a conversation by id
    Get {
        #[arg(value_name = "CONVERSATION_ID")]
        conversation_id: String,
        /// Include decoded messages
        #[arg(short, long)]
        messages: bool,
    },
    /// Create a conversation from a JSON document (or @file)
    Create {
        #[arg(short, long)]
        data: String,
    },
    /// Update a conversation from a JSON document (or @file)
    Update {
        #[arg(value_name = "CONVERSATION_ID")]
        conversation_id: String,
        #[arg(short, long)]
        data: String,
    },
    /// Delete a conversation
    Delete {
        #[arg(value_name = "CONVERSATION_ID")]
        conversation_id: String,
    },
    /// Filter conversations by JSON criteria (or @file)
    Filter {
        #[arg(short, long)]
        criteria: String,
    },
    /// Conversations in a collection
    ByCollection {
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Conversations handled by an AI agent
    ByAgent {
        #[arg(value_name = "AGENT_ID")]
        agent_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Conversations of a user
    ByUser {
        #[arg(value_name = "USER_ID")]
        user_id: String,
        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum CollectionCommands {
    /// List collections
    List {
        /// Comma-separated collection ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// Get a collection by id
    Get {
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
    },
    /// Create a collection
    Create {
        #[arg(short, long)]
        data: String,
    },
    /// Update a collection
    Update {
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
        #[arg(short, long)]
        data: String,
    },
    /// Delete a collection
    Delete {
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
    },
    /// Collections shared with a group
    ByGroup {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
    },
    /// Collections created by a user
    ByCreator {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum GroupCommands {
    /// List groups
    List {
        /// Comma-separated group ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// Get a group by id
    Get {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
    },
    /// Create a group
    Create {
        #[arg(short, long)]
        data: String,
    },
    /// Update a group
    Update {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(short, long)]
        data: String,
    },
    /// Delete a group
    Delete {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
    },
    /// Groups where a user is admin
    ByAdmin {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Groups a user belongs to
    ByUser {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Groups that include a collection
    ByCollection {
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
    },
    /// Groups with a purpose (evaluation, security, efficiency, ...)
    ByPurpose {
        #[arg(value_name = "PURPOSE")]
        purpose: String,
    },
    /// Add a user to a group
    AddUser {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "USER_ID")]
        user_id: String,
        /// Permission level for the user
        #[arg(short, long)]
        permission: String,
    },
    /// Remove a user from a group
    RemoveUser {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Make a user a group admin
    AddAdmin {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Add a collection to a group
    AddCollection {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
    },
    /// Remove a collection from a group
    RemoveCollection {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "COLLECTION_ID")]
        collection_id: String,
    },
    /// Show a user's permission level in a group
    Permission {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// List users holding a permission level in a group
    UsersWithPermission {
        #[arg(value_name = "GROUP_ID")]
        group_id: String,
        #[arg(value_name = "LEVEL")]
        level: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AgentCommands {
    /// List AI agents
    List {
        /// Comma-separated agent ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// Get an AI agent by id
    Get {
        #[arg(value_name = "AGENT_ID")]
        agent_id: String,
    },
    /// Create an AI agent
    Create {
        #[arg(short, long)]
        data: String,
    },
    /// Update an AI agent
    Update {
        #[arg(value_name = "AGENT_ID")]
        agent_id: String,
        #[arg(short, long)]
        data: String,
    },
    /// Delete an AI agent
    Delete {
        #[arg(value_name = "AGENT_ID")]
        agent_id: String,
    },
    /// AI agents in a status (active, inactive, training)
    ByStatus {
        #[arg(value_name = "STATUS")]
        status: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommands {
    /// List users
    List {
        /// Comma-separated user ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },
    /// Get a user by id
    Get {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Show the authenticated user
    Current,
    /// Create a user
    Create {
        #[arg(short, long)]
        data: String,
    },
    /// Update a user
    Update {
        #[arg(value_name = "USER_ID")]
        user_id: String,
        #[arg(short, long)]
        data: String,
    },
    /// Delete a user
    Delete {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Users with a role (admin, supervisor, executive, ...)
    ByRole {
        #[arg(value_name = "ROLE")]
        role: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum SystemCommands {
    /// Initialize the data source
    Initialize,
    /// Save all data to persistent storage
    Save,
    /// Clear all cached data
    ClearCache,
    /// Generate sample data
    GenerateSample {
        /// Data set size (small, medium, large)
        #[arg(short, long)]
        size: Option<SampleDataSize>,
    },
    /// Show sample data status
    SampleStatus,
    /// Generate and save all static sample data sets
    GenerateStatic,
    /// Load a static sample data set
    LoadStatic {
        /// Data set size (small, medium, large)
        #[arg(short, long)]
        size: Option<SampleDataSize>,
    },
    /// Save the current data as a static sample data set
    SaveStatic {
        /// Data set size (small, medium, large)
        #[arg(short, long)]
        size: SampleDataSize,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current CLI configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag when set
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_ref().map(std::path::PathBuf::from);
    let mut config = match &config_path {
        Some(path) => ClientConfig::load_with_file(path)?,
        None => ClientConfig::load()?,
    };

    // Command-line flags take precedence over file and environment
    if let Some(base_url) = cli.base_url {
        config.api.base_url = Some(base_url);
    }
    if let Some(token) = cli.token {
        config.auth.token = Some(token);
    }
    if let Some(secret) = cli.client_secret {
        config.auth.client_secret = Some(secret);
    }
    if let Some(client_id) = cli.client_id {
        config.auth.client_id = Some(client_id);
    }
    if cli.compact {
        config.cli.pretty = false;
    }

    info!(base_url = %config.resolved_base_url(), "Agent Monitor CLI starting");

    let output = Output::new(config.cli.pretty);
    let connect = || AgentMonitorClient::from_config(&config);

    match cli.command {
        Commands::Auth(cmd) => {
            let mut client = connect()?;
            handle_auth_command(cmd, &mut client, config_path.as_deref(), &output)?
        }
        Commands::Conversation(cmd) => handle_conversation_command(cmd, &connect()?, &output)?,
        Commands::Collection(cmd) => handle_collection_command(cmd, &connect()?, &output)?,
        Commands::Group(cmd) => handle_group_command(cmd, &connect()?, &output)?,
        Commands::Agent(cmd) => handle_agent_command(cmd, &connect()?, &output)?,
        Commands::User(cmd) => handle_user_command(cmd, &connect()?, &output)?,
        Commands::System(cmd) => handle_system_command(cmd, &connect()?, &output)?,
        Commands::Config(cmd) => handle_config_command(cmd, &config, config_path.as_deref())?,
    }

    Ok(())
}
