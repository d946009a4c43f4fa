//! Checkout fragments: busy button and result modal icon.

use super::escape_html;

/// Place-order button content while the payment is processed.
pub fn render_processing_button(label: &str) -> String {
    format!(r#"<span class="spinner"></span> {}"#, escape_html(label))
}

/// Icon markup of the result modal.
pub fn render_modal_icon(success: bool) -> &'static str {
    if success {
        r#"<i class="bi bi-check-circle-fill"></i>"#
    } else {
        r#"<i class="bi bi-x-circle-fill"></i>"#
    }
}

/// Class of the result modal icon container.
pub fn modal_icon_class(success: bool) -> &'static str {
    if success {
        "modal-icon success"
    } else {
        "modal-icon error"
    }
}
