// Engine main entry point
use engine::config::settings::EngineSettings;
use engine::services::report_service::InvestmentReportService;
use tracing::info;

fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    info!("Starting public-works investment report...");

    let settings = EngineSettings::default();
    let service = InvestmentReportService::new(settings);
    let summary = service.run()?;

    info!(
        records = summary.records_loaded,
        groups = summary.points.len(),
        output = %summary.output_path,
        "Report complete"
    );

    Ok(())
}
