// Orchestrates the report pipeline: load -> clean -> aggregate -> render.
use crate::aggregate::aggregate_by_year_and_scope;
use crate::chart;
use crate::config::settings::EngineSettings;
use crate::data::csv_loader::ContractCsvLoader;
use crate::error::EngineError;
use shared::models::AggregatedPoint;
use tracing::info;

pub struct InvestmentReportService {
    settings: EngineSettings,
}

#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub records_loaded: usize,
    pub points: Vec<AggregatedPoint>,
    pub output_path: String,
}

impl InvestmentReportService {
    pub fn new(settings: EngineSettings) -> Self {
        InvestmentReportService { settings }
    }

    /// Runs the whole pipeline and writes the chart image. Any stage failure
    /// aborts the run without producing the image; there is no retry or
    /// partial-output policy.
    pub fn run(&self) -> Result<ReportSummary, EngineError> {
        let (records_loaded, points) = self.load_and_aggregate()?;
        info!(
            records = records_loaded,
            groups = points.len(),
            "Aggregated contract values by year and scope"
        );

        chart::render_trend_chart(
            &points,
            &self.settings.output_path,
            self.settings.figure_width,
            self.settings.figure_height,
        )?;
        info!(output = %self.settings.output_path, "Chart written");

        Ok(ReportSummary {
            records_loaded,
            points,
            output_path: self.settings.output_path.clone(),
        })
    }

    /// Loader and aggregator stages without rendering. An input that cleans
    /// down to zero rows is an error, not an empty chart.
    pub fn load_and_aggregate(&self) -> Result<(usize, Vec<AggregatedPoint>), EngineError> {
        info!(input = %self.settings.input_path, "Loading contracts CSV");
        let records = ContractCsvLoader::load_contracts_from_csv(&self.settings.input_path)?;

        if records.is_empty() {
            return Err(EngineError::EmptyDataset);
        }

        let points = aggregate_by_year_and_scope(&records);
        Ok((records.len(), points))
    }
}
