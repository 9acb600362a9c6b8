use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Hide an element by id. Returns false when the element does not exist.
pub fn hide_element(document: &web::Document, element_id: &str) -> bool {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let _ = el.set_attribute("style", "display:none");
            true
        }
        None => false,
    }
}
