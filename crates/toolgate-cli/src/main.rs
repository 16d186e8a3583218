use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod call_cmd;
mod generate_cmd;

#[derive(Parser)]
#[command(name = "toolgate", about = "Toolgate CLI - call schema-typed tools on a toolgate server")]
struct Cli {
    /// Toolgate server URL
    #[arg(long, env = "TOOLGATE_URL", default_value = "http://localhost:3000")]
    url: String,

    /// Bearer token for the server
    #[arg(long, env = "TOOLGATE_TOKEN")]
    token: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the tools the server exposes
    List,

    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, default_value = "{}")]
        args: String,
    },

    /// Send a prompt through the server's language-model proxy
    Generate {
        /// Prompt text
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => call_cmd::list(&cli.url, &cli.token).await?,
        Commands::Call { tool, args } => {
            call_cmd::call(&cli.url, &cli.token, &tool, &args).await?;
        }
        Commands::Generate { prompt } => {
            generate_cmd::run(&cli.url, &cli.token, &prompt).await?;
        }
    }

    Ok(())
}
