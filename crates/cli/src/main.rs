use clap::Parser;
use focusgate_api::AppState;
use focusgate_domain::CliOverrides;
use focusgate_infrastructure::alarms::TokioAlarmService;
use focusgate_infrastructure::notifications::NotificationCenter;
use focusgate_jobs::{JobRunner, ReconciliationJob};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

mod bootstrap;
mod di;
mod events;
mod server;

#[derive(Parser)]
#[command(name = "focusgate")]
#[command(version)]
#[command(about = "Focusgate - temporary access restrictions for distracting domains")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Focusgate v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    // Dependency wiring: repositories, alarm adapter, notification center,
    // then the use cases on top.
    let repos = di::Repositories::new(pool);
    let (alarms, alarm_rx) = TokioAlarmService::new();
    let notifier = Arc::new(NotificationCenter::new(alarms.clone()));
    let use_cases = di::UseCases::new(&repos, &config, alarms, notifier.clone());

    // Restore scheduler state from the record store before anything else:
    // grants that expired while the process was down are reblocked here, the
    // rest get their alarm pair back.
    match use_cases.reblock.reconcile_all().await {
        Ok(summary) => info!(
            reblocked = summary.reblocked,
            rearmed = summary.rearmed,
            failed = summary.failed,
            "Startup reconciliation finished"
        ),
        Err(e) => warn!(error = %e, "Startup reconciliation failed; the sweep job will retry"),
    }

    events::spawn_event_loop(alarm_rx, use_cases.reblock.clone(), notifier.clone());

    let shutdown = CancellationToken::new();
    JobRunner::new()
        .with_reconciliation(ReconciliationJob::new(
            use_cases.reblock.clone(),
            config.blocking.reconcile_interval_secs,
        ))
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    let app_state = AppState {
        add_site: use_cases.add_site,
        remove_site: use_cases.remove_site,
        toggle_site: use_cases.toggle_site,
        update_duration: use_cases.update_duration,
        get_sites: use_cases.get_sites,
        unblock_site: use_cases.unblock_site,
        extend_grant: use_cases.extend_grant,
        check_url: use_cases.check_url,
        get_history: use_cases.get_history,
        get_stats: use_cases.get_stats,
        notifier,
    };

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            ctrl_c_token.cancel();
        }
    });

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    if let Err(e) = server::start_web_server(web_addr, app_state, shutdown).await {
        error!(error = %e, "Web server error");
        return Err(e);
    }

    info!("Server shutdown complete");
    Ok(())
}
