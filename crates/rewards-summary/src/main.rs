mod bootstrap;

use anyhow::Result;
use rewards_core::calculations::CashbackCalculator;
use rewards_core::settings::Settings;
use rewards_data::analysis::analyze_rewards;
use rewards_data::source::{JsonFileSource, PlaceholderSource, TransactionSource};
use rewards_ui::app::App;
use rewards_ui::report::render_report;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();
    settings.validate()?;

    let state_dir = bootstrap::ensure_directories()?;

    // The dashboard owns the terminal, so its logs go to a file by default.
    let log_file = match settings.view.as_str() {
        "dashboard" => Some(
            settings
                .log_file
                .clone()
                .unwrap_or_else(|| bootstrap::default_log_file(&state_dir)),
        ),
        _ => settings.log_file.clone(),
    };
    bootstrap::setup_logging(&settings.log_level, log_file.as_ref())?;

    tracing::info!("Rewards Summary v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Account: {}, View: {}, Theme: {}",
        settings.account,
        settings.view,
        settings.theme
    );

    let source: Box<dyn TransactionSource> = match &settings.data_file {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(PlaceholderSource),
    };

    let analysis = analyze_rewards(source.as_ref(), &settings.account)?;

    match settings.view.as_str() {
        "dashboard" => {
            let app = App::new(&settings.theme, settings.currency.clone(), analysis);

            // Ctrl+C is also watched at the OS level so a signal delivered
            // while the terminal is in raw mode still ends the process cleanly.
            tokio::select! {
                result = app.run() => {
                    result?;
                }
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Ctrl+C received; shutting down");
                }
            }
        }

        "report" => {
            let series = CashbackCalculator::trend_series(&analysis.snapshot.history);
            print!(
                "{}",
                render_report(
                    &analysis.snapshot,
                    &series,
                    &settings.account,
                    &settings.currency
                )
            );
        }

        unknown => {
            eprintln!("Unknown view mode: {}", unknown);
        }
    }

    Ok(())
}
