//! Command-line interface for the dws client.
//!
//! Each subcommand corresponds to one view of the original front-end: it
//! checks the session guard, validates its form values, issues a single
//! client call, and renders the result.

pub mod commands;
pub mod messages;
pub mod output;

pub use output::Output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// dws - Document Workflow Service client
#[derive(Parser, Debug)]
#[command(
    name = "dws",
    version,
    about = "Client for the Document Workflow Service",
    long_about = "Terminal client for the Document Workflow Service: log in, manage\n\
                  projects and tasks, and upload file versions.",
    after_help = "EXAMPLES:\n    \
                  dws login alice@example.com        # Obtain and store a session token\n    \
                  dws project list                   # List your projects\n    \
                  dws project create \"thesis\"        # Create a project\n    \
                  dws task create <project> \"review\" # Add a task to a project\n    \
                  dws version add <project> <task> <file> draft.txt --label v2 --message \"typo fixes\""
)]
pub struct Cli {
    /// Path to the configuration file (defaults to dws.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides configuration)
    #[arg(short, long, global = true, env = "DWS_SERVER_URL")]
    pub server: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store a session token
    Login {
        /// Account email
        email: String,

        /// Password (prompted for when omitted)
        #[arg(long, env = "DWS_PASSWORD")]
        password: Option<String>,
    },

    /// Delete the stored session token
    Logout,

    /// Register a new account
    Register {
        /// Account email
        email: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Password (prompted for when omitted)
        #[arg(long, env = "DWS_PASSWORD")]
        password: Option<String>,

        /// Password repeated (prompted for when omitted)
        #[arg(long)]
        password_repeated: Option<String>,
    },

    /// Show the current identity and session expiry
    Whoami,

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage tasks within a project
    #[command(subcommand)]
    Task(TaskCommands),

    /// Inspect files within a task
    #[command(subcommand)]
    File(FileCommands),

    /// Manage file versions
    #[command(subcommand)]
    Version(VersionCommands),
}

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List all projects
    List,

    /// Create a project
    Create {
        /// Project name (at most 40 characters)
        name: String,

        /// Project description
        #[arg(long)]
        description: Option<String>,
    },

    /// Show one project's details
    Show {
        /// Project id
        project_id: String,
    },

    /// Delete a project
    Delete {
        /// Project id
        project_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Task subcommands
#[derive(Subcommand, Debug)]
pub enum TaskCommands {
    /// Create a task under a project
    Create {
        /// Parent project id
        project_id: String,

        /// Task name (at most 50 characters)
        name: String,

        /// Task description
        #[arg(long)]
        description: Option<String>,

        /// Administrator email (defaults to the current user)
        #[arg(long)]
        admin: Option<String>,
    },

    /// Show one task's details
    Show {
        /// Parent project id
        project_id: String,

        /// Task id
        task_id: String,
    },

    /// Delete a task
    Delete {
        /// Parent project id
        project_id: String,

        /// Task id
        task_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// File subcommands
#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Show one file's metadata and versions
    Show {
        /// Parent project id
        project_id: String,

        /// Parent task id
        task_id: String,

        /// File id
        file_id: String,
    },

    /// Delete a file and all of its versions
    Delete {
        /// Parent project id
        project_id: String,

        /// Parent task id
        task_id: String,

        /// File id
        file_id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Version subcommands
#[derive(Subcommand, Debug)]
pub enum VersionCommands {
    /// Upload a new version of a file
    Add {
        /// Parent project id
        project_id: String,

        /// Parent task id
        task_id: String,

        /// File id
        file_id: String,

        /// Local file to upload
        path: PathBuf,

        /// Version label, unique within the file (at most 20 characters)
        #[arg(long)]
        label: String,

        /// Version message
        #[arg(long)]
        message: String,
    },
}
