//! Document seam.
//!
//! Handlers never touch a browser API directly; they read and write the page
//! through [`Document`], keyed by element id. A browser binding implements it
//! over the real DOM, [`MemoryDocument`](crate::MemoryDocument) keeps the page
//! in memory.

use crate::SyncError;

/// One label/value row of a variant's attribute list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub label: String,
    pub value: String,
}

impl AttributeRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Page access used by every handler.
///
/// Getters return `None` for unknown ids; setters fail with
/// [`SyncError::MissingElement`].
pub trait Document {
    /// Current page URL.
    fn location(&self) -> String;

    /// Raw `document.cookie` string.
    fn cookie(&self) -> String;

    /// Form control value.
    fn value(&self, id: &str) -> Option<String>;
    fn set_value(&mut self, id: &str, value: &str) -> Result<(), SyncError>;

    /// Visible text of an element.
    fn text(&self, id: &str) -> Option<String>;
    /// Replace the content with plain text.
    fn set_text(&mut self, id: &str, text: &str) -> Result<(), SyncError>;

    fn inner_html(&self, id: &str) -> Option<String>;
    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), SyncError>;
    /// Insert markup at the end of the element.
    fn append_html(&mut self, id: &str, html: &str) -> Result<(), SyncError>;

    fn attribute(&self, id: &str, name: &str) -> Option<String>;
    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), SyncError>;

    fn is_disabled(&self, id: &str) -> Option<bool>;
    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), SyncError>;

    fn has_class(&self, id: &str, class: &str) -> bool;
    fn set_class_name(&mut self, id: &str, class_name: &str) -> Result<(), SyncError>;
    fn add_class(&mut self, id: &str, class: &str) -> Result<(), SyncError>;
    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), SyncError>;

    /// Ids of every element carrying `class`, in document order.
    fn ids_with_class(&self, class: &str) -> Vec<String>;

    /// Detach an element. Returns whether it existed.
    fn remove_element(&mut self, id: &str) -> bool;

    /// Every attribute row with `row_class`, in document order.
    fn attribute_rows(&self, row_class: &str) -> Vec<AttributeRow>;
    /// Replace the rows of the list `list_id`.
    fn set_attribute_rows(
        &mut self,
        list_id: &str,
        row_class: &str,
        rows: &[AttributeRow],
    ) -> Result<(), SyncError>;

    /// Blocking notice.
    fn alert(&mut self, message: &str);
    /// Blocking yes/no prompt.
    fn confirm(&mut self, message: &str) -> bool;
    /// Leave the page.
    fn navigate(&mut self, url: &str);
}

pub(crate) fn require_value<D: Document + ?Sized>(dom: &D, id: &str) -> Result<String, SyncError> {
    dom.value(id)
        .ok_or_else(|| SyncError::MissingElement(id.to_string()))
}

pub(crate) fn require_attribute<D: Document + ?Sized>(
    dom: &D,
    id: &str,
    name: &str,
) -> Result<String, SyncError> {
    dom.attribute(id, name)
        .ok_or_else(|| SyncError::MissingElement(format!("{}[{}]", id, name)))
}
