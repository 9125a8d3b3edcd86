use clap::Parser;
use jielewe::application::{init::init, ConfigService, JournalService};
use jielewe::cli::{format_activities, format_analysis, format_history, Cli, Commands};
use jielewe::domain::activities_for_name;
use jielewe::error::JieleweError;
use jielewe::infrastructure::{BackendKind, FileSystemRepository};
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(JieleweError::Io)
        .and_then(|runtime| runtime.block_on(run(cli)));

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> Result<(), JieleweError> {
    match cli.command {
        Commands::Init { path, backend } => {
            let backend = BackendKind::from_str(&backend).map_err(JieleweError::Config)?;
            init(&path, backend)
        }
        Commands::Analyze { text, save } => {
            let repo = FileSystemRepository::discover()?;
            let mut service = JournalService::open(&repo)?;

            let analysis = service.analyze(&text).await?;
            print!("{}", format_analysis(analysis.text.as_str(), &analysis.emotion));
            println!();
            print!("{}", format_activities(analysis.activities()));

            if save {
                let entry = service.save(&analysis)?;
                println!();
                println!("Entry saved! 💾 ({})", entry.id);
            }
            Ok(())
        }
        Commands::History { limit } => {
            let repo = FileSystemRepository::discover()?;
            let service = JournalService::open(&repo)?;
            let output = format_history(service.history(limit));
            if output.ends_with('\n') {
                print!("{}", output);
            } else {
                println!("{}", output);
            }
            Ok(())
        }
        Commands::Clear => {
            let repo = FileSystemRepository::discover()?;
            let mut service = JournalService::open(&repo)?;
            service.clear();
            println!("Journal history cleared");
            Ok(())
        }
        Commands::Activities { emotion } => {
            print!("{}", format_activities(activities_for_name(&emotion)));
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("backend = {}", config.backend);
                println!("model = {}", config.model);
                println!("endpoint = {}", config.endpoint);
                println!("timeout_secs = {}", config.timeout_secs);
                println!("retries = {}", config.retries);
                println!("retry_delay_ms = {}", config.retry_delay_ms);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: jielewe config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    jielewe::application::manage_config::CONFIG_KEYS
                );
                Ok(())
            }
        }
    }
}
