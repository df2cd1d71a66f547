//! dws CLI entry point.

use clap::Parser;
use dws::api::ApiClient;
use dws::cli::{
    commands, Cli, Commands, FileCommands, Output, ProjectCommands, TaskCommands, VersionCommands,
};
use dws::config::ClientConfig;
use dws::session::SessionStore;
use dws::types::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let out = Output::new(!cli.no_color);
    init_tracing(cli.verbose);

    if let Err(error) = run(cli, &out).await {
        commands::report_error(&out, &error);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "dws=debug" } else { "dws=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli, out: &Output) -> Result<()> {
    let config = ClientConfig::load(cli.config.as_ref())?;
    let base_url = cli
        .server
        .unwrap_or_else(|| config.server.base_url.clone());
    let session = SessionStore::new(config.token_path());
    let api = ApiClient::new(base_url, session);

    match cli.command {
        Commands::Login { email, password } => {
            commands::login(&api, out, &email, password).await
        }
        Commands::Logout => {
            commands::logout(&api, out);
            Ok(())
        }
        Commands::Register {
            email,
            name,
            password,
            password_repeated,
        } => commands::register(&api, out, &email, &name, password, password_repeated).await,
        Commands::Whoami => commands::whoami(&api, out),
        Commands::Project(command) => match command {
            ProjectCommands::List => commands::project_list(&api, out).await,
            ProjectCommands::Create { name, description } => {
                commands::project_create(&api, out, &name, description).await
            }
            ProjectCommands::Show { project_id } => {
                commands::project_show(&api, out, &project_id).await
            }
            ProjectCommands::Delete { project_id, yes } => {
                commands::project_delete(&api, out, &project_id, yes).await
            }
        },
        Commands::Task(command) => match command {
            TaskCommands::Create {
                project_id,
                name,
                description,
                admin,
            } => commands::task_create(&api, out, &project_id, &name, description, admin).await,
            TaskCommands::Show {
                project_id,
                task_id,
            } => commands::task_show(&api, out, &project_id, &task_id).await,
            TaskCommands::Delete {
                project_id,
                task_id,
                yes,
            } => commands::task_delete(&api, out, &project_id, &task_id, yes).await,
        },
        Commands::File(command) => match command {
            FileCommands::Show {
                project_id,
                task_id,
                file_id,
            } => commands::file_show(&api, out, &project_id, &task_id, &file_id).await,
            FileCommands::Delete {
                project_id,
                task_id,
                file_id,
                yes,
            } => commands::file_delete(&api, out, &project_id, &task_id, &file_id, yes).await,
        },
        Commands::Version(VersionCommands::Add {
            project_id,
            task_id,
            file_id,
            path,
            label,
            message,
        }) => {
            commands::version_add(
                &api, out, &project_id, &task_id, &file_id, path, &label, &message,
            )
            .await
        }
    }
}
