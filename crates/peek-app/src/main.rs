mod cli;
mod replay;
mod trigger;

use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;

use peek_bridge::{BridgeTiming, CommandBridge, LocalPages, ScriptInjector};
use peek_common::{BridgeError, ContextId, PeekError};
use peek_config::PeekConfig;
use peek_overlay::PageContext;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::trigger::Trigger;

/// The single headless page the CLI drives.
const PAGE: ContextId = ContextId(1);

fn load_config(args: &Args) -> Result<PeekConfig, PeekError> {
    let config = match &args.config {
        Some(path) => peek_config::load_config_from(path)?,
        None => peek_config::load_config()?,
    };
    Ok(config)
}

fn init_logging(log_level: Option<&str>, config: &PeekConfig) {
    let directive = log_level.unwrap_or_else(|| config.logging.level.directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("peek=info")),
        )
        .init();
}

fn read_markup(args: &Args) -> std::io::Result<String> {
    if let Some(markup) = &args.embed {
        return Ok(markup.clone());
    }
    if let Some(path) = &args.embed_file {
        return std::fs::read_to_string(path);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

async fn run(args: &Args, config: &PeekConfig) -> Result<serde_json::Value, PeekError> {
    let markup = read_markup(args)?;

    let pages = LocalPages::new(
        config.overlay.panel_size(),
        config.overlay.initial_position(),
    );
    let page = PageContext::new(PAGE, args.viewport);
    pages
        .open(if args.restricted { page.restricted() } else { page })
        .await;

    if args.preinstalled {
        let injected = match pages.execute_script(PAGE).await {
            Ok(()) => pages.insert_css(PAGE).await,
            Err(e) => Err(e),
        };
        injected.map_err(|e| BridgeError::InjectionFailure(e.to_string()))?;
        tracing::info!("Overlay runtime preinstalled in {PAGE}");
    }

    let shared = Arc::new(pages.clone());
    let bridge = CommandBridge::new(shared.clone(), shared, BridgeTiming::from(&config.bridge));
    let trigger = Trigger::new(bridge, PAGE);
    trigger
        .submit(&markup)
        .await
        .map_err(|e| PeekError::Other(e.to_string()))?;

    let origin = pages
        .with_page(PAGE, |p| p.overlay_state().map(|s| s.position()))
        .await
        .flatten()
        .unwrap_or_else(|| config.overlay.initial_position());
    let mut input = replay::build_input(origin, args.drag, &args.keys)
        .map_err(|e| PeekError::Other(format!("invalid chord: {e}")))?;
    tracing::debug!("Replaying {} input events", input.len());

    pages
        .with_page(PAGE, |page| {
            page.pump(&mut input);
            serde_json::json!({
                "context": page.id(),
                "state": page.overlay_state(),
                "surface": page.runtime().map(|rt| rt.surface()),
                "stylesheet": page.has_stylesheet(),
                "key_listeners": page.listener_count(),
                "host_received": page.host_received(),
            })
        })
        .await
        .ok_or_else(|| PeekError::Other(format!("{PAGE} was closed")))
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Logging depends on the config, so a load failure is reported after init.
    let (config, config_error) = match load_config(&args) {
        Ok(config) => (config, None),
        Err(e) => (PeekConfig::default(), Some(e)),
    };
    init_logging(args.log_level.as_deref(), &config);

    tracing::info!("peek v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }

    match run(&args, &config).await {
        Ok(report) => {
            match serde_json::to_string_pretty(&report) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    tracing::error!("Failed to serialize result: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
