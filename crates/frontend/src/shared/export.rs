/// Экспорт списков: сервер сам формирует файл, браузер просто переходит по ссылке
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Открывает URL экспорта в новой вкладке, браузер скачивает файл
pub fn open_export(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    // Временная ссылка с target=_blank
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(url);
    anchor.set_target("_blank");
    anchor.set_rel("noopener noreferrer");
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    log::debug!("export opened: {}", url);
    Ok(())
}
