use std::path::Path;

use csv_async::AsyncWriter;
use tokio::fs::File;
use tracing::info;

use crate::error::{Result, StarsExportError};
use crate::records::StargazerTable;

/// Output must be a `.csv` path. Checked before any network activity.
pub fn validate_output_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("csv") => Ok(()),
        _ => Err(StarsExportError::UnsupportedOutputFormat(
            path.display().to_string(),
        )),
    }
}

/// Write the table as CSV: one header row of column names, then one record
/// per stargazer. An empty table writes the header only.
pub async fn write_csv(path: &Path, table: &StargazerTable) -> Result<()> {
    validate_output_path(path)?;

    let file = File::create(path).await?;
    let mut writer = AsyncWriter::from_writer(file);

    writer.write_record(table.columns()).await?;
    for record in table.records() {
        writer.write_record(record).await?;
    }
    writer.flush().await?;

    info!("wrote {} rows to {}", table.len(), path.display());
    Ok(())
}
