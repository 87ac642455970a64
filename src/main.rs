use walletpersona::{
    arguments::{get_enabled_debug_modes, is_help_requested, print_help},
    logger::{self as logger, LogTag},
};

/// Main entry point for the wallet personality checker
///
/// Loads `.env`, initializes logging from the command line, then runs the
/// HTTP service until Ctrl-C.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Environment first so ALCHEMY_API_KEY / PORT from .env are visible
    let dotenv_loaded = dotenv::dotenv().is_ok();

    logger::init();

    if is_help_requested() {
        print_help();
        return Ok(());
    }

    logger::info(LogTag::System, "🚀 Wallet personality checker starting up...");
    if dotenv_loaded {
        logger::debug(LogTag::Config, "Loaded environment from .env");
    }

    let debug_modes = get_enabled_debug_modes();
    if !debug_modes.is_empty() {
        logger::info(
            LogTag::System,
            &format!("Debug modes enabled: {}", debug_modes.join(", ")),
        );
    }

    if let Err(e) = walletpersona::run::run().await {
        logger::error(LogTag::System, &format!("❌ Service failed: {}", e));
        return Err(anyhow::anyhow!(e));
    }

    logger::info(LogTag::System, "✅ Shutdown complete");
    Ok(())
}
