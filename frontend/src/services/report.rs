//! "Download Report": the grading result as a JSON file.

use papercheck::GradingResult;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// File name offered for a result, e.g. `mathematics-paper-1-o-level-report.json`.
pub fn report_filename(result: &GradingResult) -> String {
    let mut slug = String::new();
    for c in result.paper_title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "report.json".to_string()
    } else {
        format!("{}-report.json", slug)
    }
}

/// Serialize the result and have the browser save it.
pub fn download_report(result: &GradingResult) -> Result<(), String> {
    let json = serde_json::to_string_pretty(result)
        .map_err(|e| format!("Failed to serialize report: {}", e))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let clicked = gloo_utils::document()
        .create_element("a")
        .map_err(|e| format!("Failed to create link: {:?}", e))
        .and_then(|el| {
            el.dyn_into::<HtmlAnchorElement>()
                .map_err(|_| "Created element is not a link".to_string())
        })
        .map(|anchor| {
            anchor.set_href(&url);
            anchor.set_download(&report_filename(result));
            anchor.click();
        });

    // Revoke even if the click failed.
    let _ = Url::revoke_object_url(&url);
    clicked?;

    log::info!("📥 Report downloaded ({} bytes)", json.len());
    Ok(())
}
