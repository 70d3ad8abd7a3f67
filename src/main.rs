use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mot_creators::application::LoadCatalogUseCase;
use mot_creators::infrastructure::{AppConfig, CliArgs, ConfigFile, catalog_source};
use mot_creators::presentation::Shell;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let file = ConfigFile::resolve(args.config.as_deref())
        .wrap_err("Failed to locate config file")?;
    let mut config = file.load().wrap_err("Failed to load configuration")?;
    config.merge_with_args(args);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    info!(version = mot_creators::VERSION, "Starting {}", mot_creators::NAME);

    let source = catalog_source(config.catalog.as_deref());
    let loaded = LoadCatalogUseCase::new(source)
        .execute()
        .await
        .wrap_err("Failed to load catalog")?;

    let mut shell = Shell::new(loaded, &config);

    if args.exec.is_empty() {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        shell
            .run(stdin, tokio::io::stdout())
            .await
            .wrap_err("Shell I/O failed")?;
    } else {
        for output in shell.run_script(&args.exec) {
            if !output.is_empty() {
                println!("{output}");
            }
        }
    }

    info!("Exiting");
    Ok(())
}
