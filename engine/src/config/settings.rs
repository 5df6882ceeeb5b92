// Engine settings, potentially loaded from a config file in the future.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    pub input_path: String,
    pub output_path: String,
    pub figure_width: u32,
    pub figure_height: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        // Fixed input/output paths; the figure matches the original 12x7 layout.
        EngineSettings {
            input_path: "obras.csv".to_string(),
            output_path: "investimento_anual_por_ambito.png".to_string(),
            figure_width: 1200,
            figure_height: 700,
        }
    }
}
