//! Export, print and share actions behind the page header buttons.

use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub enum ShareError {
    #[error("no browser window")]
    NoWindow,
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Hand `csv` to the user as a file named `filename`.
#[cfg(target_arch = "wasm32")]
pub fn export_csv(filename: &str, csv: &str) -> Result<(), ShareError> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or(ShareError::NoWindow)?;
    let document = window.document().ok_or(ShareError::NoWindow)?;
    let href = format!(
        "data:text/csv;charset=utf-8,{}",
        String::from(js_sys::encode_uri_component(csv))
    );
    let link = document
        .create_element("a")
        .map_err(|e| ShareError::Js(format!("{e:?}")))?;
    link.set_attribute("href", &href)
        .map_err(|e| ShareError::Js(format!("{e:?}")))?;
    link.set_attribute("download", filename)
        .map_err(|e| ShareError::Js(format!("{e:?}")))?;
    link.unchecked_into::<web_sys::HtmlElement>().click();
    tracing::info!("Exported {filename}");
    Ok(())
}

/// Write `csv` into the download directory, or the working directory when
/// there is none.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_csv(filename: &str, csv: &str) -> Result<(), ShareError> {
    let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(filename);
    std::fs::write(&path, csv)?;
    tracing::info!("Exported {}", path.display());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn print_page() -> Result<(), ShareError> {
    web_sys::window()
        .ok_or(ShareError::NoWindow)?
        .print()
        .map_err(|e| ShareError::Js(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn print_page() -> Result<(), ShareError> {
    tracing::warn!("Printing is only available in the browser");
    Ok(())
}

/// Offer `text` to the user for copying.
#[cfg(target_arch = "wasm32")]
pub fn share_summary(text: &str) -> Result<(), ShareError> {
    web_sys::window()
        .ok_or(ShareError::NoWindow)?
        .prompt_with_message_and_default("Copy this summary to share it:", text)
        .map_err(|e| ShareError::Js(format!("{e:?}")))?;
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn share_summary(text: &str) -> Result<(), ShareError> {
    tracing::info!("Share summary:\n{text}");
    Ok(())
}
