//! Download of the loaded matrix as pretty-printed JSON.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::engine::{CompatibilityMatrix, MatrixError, Result};

pub const EXPORT_FILE_NAME: &str = "language-compatibility-matrix.json";

fn dom_error(context: &str, value: JsValue) -> MatrixError {
	MatrixError::Dom(format!("{context}: {value:?}"))
}

/// Offer the matrix to the browser as a file download.
pub fn download_matrix(matrix: &CompatibilityMatrix) -> Result<()> {
	let json = matrix.to_json_pretty()?;

	let parts = js_sys::Array::of1(&JsValue::from_str(&json));
	let options = BlobPropertyBag::new();
	options.set_type("application/json");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
		.map_err(|e| dom_error("blob", e))?;
	let url = Url::create_object_url_with_blob(&blob).map_err(|e| dom_error("object url", e))?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| MatrixError::Dom("no document".to_string()))?;
	let body = document
		.body()
		.ok_or_else(|| MatrixError::Dom("no document body".to_string()))?;
	let anchor: HtmlAnchorElement = document
		.create_element("a")
		.map_err(|e| dom_error("anchor", e))?
		.dyn_into()
		.map_err(|e| dom_error("anchor", e.into()))?;
	anchor.set_href(&url);
	anchor.set_download(EXPORT_FILE_NAME);

	body.append_child(&anchor).map_err(|e| dom_error("anchor", e))?;
	anchor.click();
	let _ = body.remove_child(&anchor);
	let _ = Url::revoke_object_url(&url);

	log::info!("Exported {} source languages to {EXPORT_FILE_NAME}", matrix.sources().count());
	Ok(())
}
