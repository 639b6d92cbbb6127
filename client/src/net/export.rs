//! Property file export: fetch an access token, download the file and hand
//! it to the browser as a named download.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use forest::ExportFormat;
use forest::export::{export_filename, export_path};

use super::api;
use super::error::ExportError;
use super::types::Property;
use crate::config::ScoutConfig;
use crate::util::analytics::AnalyticsEvent;

#[must_use]
pub fn mime_type(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "text/csv",
        ExportFormat::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    }
}

#[must_use]
pub fn export_event(format: ExportFormat, parcel_id: &str) -> AnalyticsEvent {
    let parcel_id = parcel_id.to_owned();
    match format {
        ExportFormat::Csv => AnalyticsEvent::ExportCsv { parcel_id },
        ExportFormat::Xlsx => AnalyticsEvent::ExportXlsx { parcel_id },
    }
}

/// A file handed to the browser, with the analytics event to report for it.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedExport {
    pub filename: String,
    pub event: AnalyticsEvent,
}

/// Download `property` in `format`.
///
/// The export event is only produced once the save has been triggered.
///
/// # Errors
///
/// Returns [`ExportError`] when the property is missing, the token request
/// fails or the file cannot be downloaded or saved.
pub async fn download_export(
    config: &ScoutConfig,
    property: Option<&Property>,
    format: ExportFormat,
) -> Result<SavedExport, ExportError> {
    let property = property.ok_or(ExportError::MissingProperty)?;
    let token = api::fetch_access_token(config).await.map_err(ExportError::Token)?;
    let path = export_path(&property.parcel_id, format, &token);
    let bytes = api::fetch_export_file(config, &path)
        .await
        .map_err(|e| ExportError::Download(e.to_string()))?;
    let filename = export_filename(&property.cadastral_id, &property.parcel_id, format);
    save_file(&bytes, &filename, mime_type(format))?;
    Ok(SavedExport { filename, event: export_event(format, &property.parcel_id) })
}

#[cfg(feature = "hydrate")]
fn save_file(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ExportError> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| ExportError::Download(format!("{e:?}"));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Download("no document".to_owned()))?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| ExportError::Download("anchor cast failed".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
fn save_file(bytes: &[u8], filename: &str, mime: &str) -> Result<(), ExportError> {
    let _ = (bytes, filename, mime);
    Err(ExportError::Download("not available on server".to_owned()))
}
