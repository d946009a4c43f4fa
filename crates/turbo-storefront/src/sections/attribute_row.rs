//! Variant attribute list rows.

use super::escape_html;
use crate::AttributeRow;

/// Render one `<li>` of the variant attribute list.
pub fn render_attribute_row(row_class: &str, row: &AttributeRow) -> String {
    format!(
        r#"<li class="{class}">
    <p>{label}</p>
    <span class="badge rounded-pill bg-warning">{value}</span>
</li>"#,
        class = escape_html(row_class),
        label = escape_html(&row.label),
        value = escape_html(&row.value)
    )
}

/// Render a whole attribute list body.
pub fn render_attribute_rows(row_class: &str, rows: &[AttributeRow]) -> String {
    rows.iter()
        .map(|row| render_attribute_row(row_class, row))
        .collect()
}
