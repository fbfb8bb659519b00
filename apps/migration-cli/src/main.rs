use std::str::FromStr;

use clap::Parser;
use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database};

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Whist tally database migration tool")]
struct Args {
    /// Migration command: up | down | fresh | reset | refresh | status
    command: String,

    /// Target database, e.g. postgres://... or sqlite://whist.db?mode=rwc
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let command = match MigrationCommand::from_str(&args.command) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
    };

    if args.database_url.contains(":memory:") {
        eprintln!("In-memory SQLite is gone when this command exits; point at a file instead.");
        std::process::exit(1);
    }

    let mut opt = ConnectOptions::new(args.database_url.as_str());
    opt.sqlx_logging(false);

    let db = match Database::connect(opt).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Could not connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
