use clap::{Parser, Subcommand};
use p4_navigator::commands::*;
use p4_navigator::core::{
    config::ClientConfig,
    error::{P4NavigatorError, Result},
    print_error, P4Client, SystemExecutor,
};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "p4-navigator")]
#[command(about = "A lightweight Perforce client with structured fstat output")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long = "directory", global = true)]
    directory: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show all fstat fields of a file
    Stat { path: String },
    /// Show the revision of a file synced to the workspace
    Have { path: String },
    /// List the files of a directory
    StatDir {
        /// Include subdirectories
        #[arg(short, long)]
        recursive: bool,
        dir: Option<String>,
    },
    /// Open a file for edit
    Edit { path: String },
    /// Open a file for add
    Add { path: String },
    /// Open a file for edit, or for add if it is not on the client yet
    SmartEdit { path: String },
    /// Revert a file
    Revert {
        /// Only revert files that are open but unchanged
        #[arg(short = 'a', long)]
        unchanged: bool,
        path: Option<String>,
    },
    /// Submit a file
    Submit {
        /// Changelist description
        #[arg(short = 'm', long = "message")]
        message: String,
        path: String,
    },
    /// Sync a file, or the whole workspace when no path is given
    Sync { path: Option<String> },
    /// Sync the files of a directory
    SyncDir {
        /// Include subdirectories
        #[arg(short, long)]
        recursive: bool,
        dir: Option<String>,
    },
    /// Log in; the password is read from P4PASSWD or stdin
    Login { user: String },
    /// Pass arguments straight to p4
    Run {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        args: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ClientConfig::load_from(path)?,
        None => ClientConfig::load_or_default()?,
    };

    let mut client = P4Client::from_config(&config, Arc::new(SystemExecutor));
    if let Some(dir) = &cli.directory {
        let dir = if dir.is_absolute() {
            dir.clone()
        } else {
            env::current_dir()?.join(dir)
        };
        client.cd(dir);
    }

    let json = cli.json;
    match cli.command {
        Commands::Stat { path } => execute_stat(&client, &path, json).await,
        Commands::Have { path } => execute_have(&client, &path, json).await,
        Commands::StatDir { recursive, dir } => {
            execute_stat_dir(&mut client, dir.as_deref(), recursive, json).await
        }
        Commands::Edit { path } => execute_edit(&client, &path, json).await,
        Commands::Add { path } => execute_add(&client, &path, json).await,
        Commands::SmartEdit { path } => execute_smart_edit(&client, &path, json).await,
        Commands::Revert { unchanged, path } => {
            execute_revert(&client, path.as_deref(), unchanged, json).await
        }
        Commands::Submit { message, path } => execute_submit(&client, &path, &message, json).await,
        Commands::Sync { path } => execute_sync(&client, path.as_deref(), json).await,
        Commands::SyncDir { recursive, dir } => {
            execute_sync_dir(&mut client, dir.as_deref(), recursive, json).await
        }
        Commands::Login { user } => execute_login(&client, &user, json).await,
        Commands::Run { args } => {
            if args.is_empty() {
                return Err(P4NavigatorError::missing_argument("Please pass a p4 command to run!"));
            }
            execute_run(&client, &args, json).await
        }
    }
}
