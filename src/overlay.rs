use crate::constants::{CLASS_HIDDEN, OVERLAY_ID, PERMISSION_ERROR_ID};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().remove_1(CLASS_HIDDEN);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(OVERLAY_ID) {
        _ = el.class_list().add_1(CLASS_HIDDEN);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

/// Show a permission problem under the grant button.
pub fn show_error(document: &web::Document, message: &str) {
    dom::set_text(document, PERMISSION_ERROR_ID, message);
    if let Some(el) = document.get_element_by_id(PERMISSION_ERROR_ID) {
        _ = el.set_attribute("style", "");
    }
}

pub fn clear_error(document: &web::Document) {
    dom::set_text(document, PERMISSION_ERROR_ID, "");
}
