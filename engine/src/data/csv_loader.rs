use crate::error::EngineError;
use csv::{ReaderBuilder, StringRecord};
use shared::models::ContractRecord;
use shared::utils::{brazilian_format, normalize_scope};
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

// CSV Header (semicolon-delimited), e.g.:
// ...;Ano do Contrato;Âmbito;Valor do Contrato;...
// Example value: "1.234.567,89" (Brazilian decimal format)
const YEAR_COLUMN: &str = "Ano do Contrato";
const SCOPE_COLUMN: &str = "Âmbito";
const VALUE_COLUMN: &str = "Valor do Contrato";

pub struct ContractCsvLoader;

impl ContractCsvLoader {
    /// Loads and cleans the contracts CSV. Rows with a field count different
    /// from the header are skipped, and rows whose year or monetary value
    /// cannot be parsed are dropped from the result. Neither case is an
    /// error; a missing required column is.
    pub fn load_contracts_from_csv(file_path: &str) -> Result<Vec<ContractRecord>, EngineError> {
        let file = File::open(file_path)?;
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = rdr.headers()?.clone();
        let year_idx = Self::column_index(&headers, YEAR_COLUMN)?;
        let scope_idx = Self::column_index(&headers, SCOPE_COLUMN)?;
        let value_idx = Self::column_index(&headers, VALUE_COLUMN)?;

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (idx, result) in rdr.records().enumerate() {
            let line = idx + 2; // 1-based, after the header line
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    debug!(line, error = %e, "Skipping unreadable CSV record");
                    dropped += 1;
                    continue;
                }
            };

            // Malformed-line tolerance: wrong field count means the row does
            // not line up with the header, so it cannot be trusted.
            if record.len() != headers.len() {
                debug!(line, fields = record.len(), "Skipping row with unexpected field count");
                dropped += 1;
                continue;
            }

            match Self::parse_record(&record, year_idx, scope_idx, value_idx) {
                Some(contract) => records.push(contract),
                None => {
                    debug!(line, "Dropping row with unparseable year or contract value");
                    dropped += 1;
                }
            }
        }

        debug!(
            loaded = records.len(),
            dropped, "Finished loading contracts CSV"
        );
        Ok(records)
    }

    fn parse_record(
        record: &StringRecord,
        year_idx: usize,
        scope_idx: usize,
        value_idx: usize,
    ) -> Option<ContractRecord> {
        let year = record.get(year_idx)?.trim().parse::<i32>().ok()?;
        let scope = normalize_scope(record.get(scope_idx)?);
        let value = brazilian_format::parse_decimal(record.get(value_idx)?).ok()?;

        Some(ContractRecord { year, scope, value })
    }

    fn column_index(headers: &StringRecord, name: &str) -> Result<usize, EngineError> {
        headers
            .iter()
            .position(|header| header.trim() == name)
            .ok_or_else(|| EngineError::MissingColumn(name.to_string()))
    }
}
