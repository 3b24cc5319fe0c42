mod commands;
mod output;

use anyhow::Result;
use catalog_lib::{Client, Config, FileStorage, Session};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse and manage a product catalog")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API root URL
    #[arg(long, env = "CATALOG_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List, search and filter products, or look one up by ID
    Products(commands::products::ProductsArgs),
    /// Create a product
    Create(commands::create::CreateArgs),
    /// Change fields of a product
    Update(commands::update::UpdateArgs),
    /// Delete a product
    Delete(commands::update::DeleteArgs),
    /// Sign in and remember the session
    Login(commands::auth::LoginArgs),
    /// Create an account
    Register(commands::auth::RegisterArgs),
    /// Show who is signed in
    Whoami,
    /// Forget the stored session
    Logout,
    /// Interactive session keeping filters and the product table between commands
    Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load();
    let cli = Cli::parse();

    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let format = OutputFormat::parse(&cli.output);

    let session = Session::new(FileStorage::new(config.session_file.clone()));
    let client = Client::with_base_url(&config.base_url).with_token(&session.get_token());
    tracing::debug!("Using API at {}", client.base_url());

    match &cli.command {
        Commands::Products(args) => {
            commands::products::run(args, &client, &config, &format).await?
        }
        Commands::Create(args) => commands::create::run(args, &client, &config, &format).await?,
        Commands::Update(args) => commands::update::run(args, &client, &config, &format).await?,
        Commands::Delete(args) => commands::update::run_delete(args, &client).await?,
        Commands::Login(args) => commands::auth::login(args, &client, &session).await?,
        Commands::Register(args) => commands::auth::register(args, &client).await?,
        Commands::Whoami => commands::auth::whoami(&session),
        Commands::Logout => commands::auth::logout(&session)?,
        Commands::Shell => commands::shell::run(&client, &config, &session).await?,
    }

    Ok(())
}
