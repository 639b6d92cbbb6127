//! Export request paths and download filenames for property data files.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use serde::{Deserialize, Serialize};

/// File formats offered by the property export endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Stand table as comma-separated values.
    Csv,
    /// Full property workbook.
    Xlsx,
}

impl ExportFormat {
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Endpoint path for exporting one parcel, with the access token embedded.
#[must_use]
pub fn export_path(parcel_id: &str, format: ExportFormat, access_token: &str) -> String {
    format!(
        "/scout/property/{parcel_id}/export?type={}&accessToken={access_token}",
        format.extension()
    )
}

/// Local filename for a saved export.
///
/// CSV exports only carry stand rows, which the name reflects.
#[must_use]
pub fn export_filename(cadastral_id: &str, parcel_id: &str, format: ExportFormat) -> String {
    match format {
        ExportFormat::Csv => format!("property_{cadastral_id}_{parcel_id}_stands_data.csv"),
        ExportFormat::Xlsx => format!("property_{cadastral_id}_{parcel_id}.xlsx"),
    }
}
