use std::sync::Arc;

use clap::Parser;

use novel_fixture::config::{AppState, Config, Overrides, Profile, DEFAULT_CONFIG_PATH};
use novel_fixture::{logger, server};

/// Mock novel site for crawler testing
#[derive(Parser, Debug)]
#[command(name = "novel-fixture-server", version, about)]
struct Cli {
    /// Config file path without extension
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Catalog profile
    #[arg(long, value_enum)]
    profile: Option<Profile>,

    /// Number of chapters (basic profile)
    #[arg(long)]
    chapters: Option<u32>,

    /// Chapters per table-of-contents page
    #[arg(long)]
    page_size: Option<usize>,

    /// Tokio worker threads
    #[arg(long)]
    workers: Option<usize>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            port: self.port,
            profile: self.profile,
            chapter_count: self.chapters,
            page_size: self.page_size,
            workers: self.workers,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = Config::load_from(Some(&cli.config), &cli.overrides())?;

    if cli.print_config {
        print!("{}", cfg.to_toml()?);
        return Ok(());
    }

    logger::init(&cfg)?;

    // Worker count follows the config; the default is one thread per core
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    let local_addr = listener.local_addr()?;

    let state = Arc::new(AppState::for_listener(&cfg, local_addr));
    logger::log_server_start(&local_addr, &state.config, &state.catalog);

    let shutdown = server::start_signal_handler()?;

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local
        .run_until(server::start_server_loop(listener, state, shutdown))
        .await?;
    Ok(())
}
