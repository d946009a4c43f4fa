//! In-memory document.
//!
//! Holds a flat list of elements keyed by id, plus the side effects a real
//! page would show (alerts, confirmations, navigation). Used by tests and by
//! any host that renders the page itself.

use std::collections::VecDeque;

use crate::dom::{AttributeRow, Document};
use crate::sections::{escape_html, render_attribute_rows, unescape_html};
use crate::SyncError;

/// Default page location.
pub const DEFAULT_LOCATION: &str = "http://localhost:8000/";

/// One element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub value: String,
    pub html: String,
    /// Fragments inserted with `append_html` since the last reset.
    pub fragments: Vec<String>,
    pub attributes: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub disabled: bool,
    /// Rows when the element is an attribute list.
    pub rows: Vec<AttributeRow>,
    pub row_class: Option<String>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.html = escape_html(text);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.put_attribute(name, value.into());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn with_rows(mut self, row_class: &str, rows: Vec<AttributeRow>) -> Self {
        self.replace_rows(row_class, rows);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    fn put_attribute(&mut self, name: &str, value: String) {
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    fn add_class(&mut self, class: &str) {
        for c in class.split_whitespace() {
            if !self.classes.iter().any(|existing| existing == c) {
                self.classes.push(c.to_string());
            }
        }
    }

    fn has_classes(&self, class: &str) -> bool {
        let mut wanted = class.split_whitespace().peekable();
        wanted.peek().is_some() && wanted.all(|c| self.classes.iter().any(|have| have == c))
    }

    fn replace_rows(&mut self, row_class: &str, rows: Vec<AttributeRow>) {
        self.html = render_attribute_rows(row_class, &rows);
        self.fragments.clear();
        self.rows = rows;
        self.row_class = Some(row_class.to_string());
    }

    fn reset_content(&mut self, html: String) {
        self.html = html;
        self.fragments.clear();
        self.rows.clear();
    }
}

/// A page held in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    location: String,
    cookie: String,
    elements: Vec<(String, Element)>,
    alerts: Vec<String>,
    confirmations: Vec<String>,
    confirm_answers: VecDeque<bool>,
    navigations: Vec<String>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            cookie: String::new(),
            elements: Vec::new(),
            alerts: Vec::new(),
            confirmations: Vec::new(),
            confirm_answers: VecDeque::new(),
            navigations: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.cookie = cookie.into();
        self
    }

    /// Add (or replace) an element.
    pub fn with_element(mut self, id: &str, element: Element) -> Self {
        self.insert(id, element);
        self
    }

    /// Queue the answer of the next `confirm` prompt. Unqueued prompts answer yes.
    pub fn answer_confirm(&mut self, answer: bool) {
        self.confirm_answers.push_back(answer);
    }

    pub fn insert(&mut self, id: &str, element: Element) {
        match self.elements.iter_mut().find(|(k, _)| k == id) {
            Some(entry) => entry.1 = element,
            None => self.elements.push((id.to_string(), element)),
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|(k, _)| k == id).map(|(_, e)| e)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn confirmations(&self) -> &[String] {
        &self.confirmations
    }

    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Element, SyncError> {
        self.elements
            .iter_mut()
            .find(|(k, _)| k == id)
            .map(|(_, e)| e)
            .ok_or_else(|| SyncError::MissingElement(id.to_string()))
    }
}

impl Document for MemoryDocument {
    fn location(&self) -> String {
        self.location.clone()
    }

    fn cookie(&self) -> String {
        self.cookie.clone()
    }

    fn value(&self, id: &str) -> Option<String> {
        self.element(id).map(|e| e.value.clone())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), SyncError> {
        self.element_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn text(&self, id: &str) -> Option<String> {
        self.element(id).map(|e| unescape_html(&e.html))
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), SyncError> {
        self.element_mut(id)?.reset_content(escape_html(text));
        Ok(())
    }

    fn inner_html(&self, id: &str) -> Option<String> {
        self.element(id).map(|e| e.html.clone())
    }

    fn set_inner_html(&mut self, id: &str, html: &str) -> Result<(), SyncError> {
        self.element_mut(id)?.reset_content(html.to_string());
        Ok(())
    }

    fn append_html(&mut self, id: &str, html: &str) -> Result<(), SyncError> {
        let element = self.element_mut(id)?;
        element.html.push_str(html);
        element.fragments.push(html.to_string());
        Ok(())
    }

    fn attribute(&self, id: &str, name: &str) -> Option<String> {
        self.element(id)?.attribute(name).map(String::from)
    }

    fn set_attribute(&mut self, id: &str, name: &str, value: &str) -> Result<(), SyncError> {
        self.element_mut(id)?.put_attribute(name, value.to_string());
        Ok(())
    }

    fn is_disabled(&self, id: &str) -> Option<bool> {
        self.element(id).map(|e| e.disabled)
    }

    fn set_disabled(&mut self, id: &str, disabled: bool) -> Result<(), SyncError> {
        self.element_mut(id)?.disabled = disabled;
        Ok(())
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.element(id).is_some_and(|e| e.has_classes(class))
    }

    fn set_class_name(&mut self, id: &str, class_name: &str) -> Result<(), SyncError> {
        let element = self.element_mut(id)?;
        element.classes.clear();
        element.add_class(class_name);
        Ok(())
    }

    fn add_class(&mut self, id: &str, class: &str) -> Result<(), SyncError> {
        self.element_mut(id)?.add_class(class);
        Ok(())
    }

    fn remove_class(&mut self, id: &str, class: &str) -> Result<(), SyncError> {
        self.element_mut(id)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn ids_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|(_, e)| e.has_classes(class))
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn remove_element(&mut self, id: &str) -> bool {
        let before = self.elements.len();
        self.elements.retain(|(k, _)| k != id);
        self.elements.len() != before
    }

    fn attribute_rows(&self, row_class: &str) -> Vec<AttributeRow> {
        self.elements
            .iter()
            .filter(|(_, e)| e.row_class.as_deref() == Some(row_class))
            .flat_map(|(_, e)| e.rows.iter().cloned())
            .collect()
    }

    fn set_attribute_rows(
        &mut self,
        list_id: &str,
        row_class: &str,
        rows: &[AttributeRow],
    ) -> Result<(), SyncError> {
        self.element_mut(list_id)?
            .replace_rows(row_class, rows.to_vec());
        Ok(())
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.confirm_answers.pop_front().unwrap_or(true)
    }

    fn navigate(&mut self, url: &str) {
        self.navigations.push(url.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_setter_fails() {
        let mut dom = MemoryDocument::new();
        assert_eq!(
            dom.set_text("nope", "x"),
            Err(SyncError::MissingElement("nope".to_string()))
        );
        assert_eq!(dom.value("nope"), None);
    }

    #[test]
    fn test_text_is_escaped_in_html() {
        let mut dom = MemoryDocument::new().with_element("t", Element::new());
        dom.set_text("t", "A & B").unwrap();
        assert_eq!(dom.inner_html("t").as_deref(), Some("A &amp; B"));
        assert_eq!(dom.text("t").as_deref(), Some("A & B"));
    }

    #[test]
    fn test_classes() {
        let mut dom = MemoryDocument::new()
            .with_element("a", Element::new().with_class("thumbnail active"))
            .with_element("b", Element::new().with_class("thumbnail"))
            .with_element("c", Element::new());

        assert_eq!(dom.ids_with_class("thumbnail"), vec!["a", "b"]);
        assert!(dom.has_class("a", "active"));
        dom.remove_class("a", "active").unwrap();
        assert!(!dom.has_class("a", "active"));
        dom.set_class_name("c", "message error show").unwrap();
        assert!(dom.has_class("c", "message show"));
        assert!(!dom.has_class("c", ""));
    }

    #[test]
    fn test_append_and_reset() {
        let mut dom = MemoryDocument::new().with_element("grid", Element::new().with_text("old"));
        dom.set_inner_html("grid", "").unwrap();
        dom.append_html("grid", "<div>1</div>").unwrap();
        dom.append_html("grid", "<div>2</div>").unwrap();
        let grid = dom.element("grid").unwrap();
        assert_eq!(grid.fragments.len(), 2);
        assert_eq!(grid.html, "<div>1</div><div>2</div>");
    }

    #[test]
    fn test_rows_in_document_order() {
        let mut dom = MemoryDocument::new()
            .with_element(
                "list",
                Element::new().with_rows("attr", vec![AttributeRow::new("Color", "Red")]),
            )
            .with_element("other", Element::new().with_rows("misc", vec![AttributeRow::new("X", "1")]));

        assert_eq!(dom.attribute_rows("attr"), vec![AttributeRow::new("Color", "Red")]);

        dom.set_attribute_rows("list", "attr", &[]).unwrap();
        assert!(dom.attribute_rows("attr").is_empty());
        assert_eq!(dom.inner_html("list").as_deref(), Some(""));
    }

    #[test]
    fn test_confirm_answers_queue() {
        let mut dom = MemoryDocument::new();
        dom.answer_confirm(false);
        assert!(!dom.confirm("Sure?"));
        assert!(dom.confirm("Sure?"));
        assert_eq!(dom.confirmations().len(), 2);
    }

    #[test]
    fn test_remove_element() {
        let mut dom = MemoryDocument::new().with_element("row", Element::new());
        assert!(dom.remove_element("row"));
        assert!(!dom.remove_element("row"));
    }
}
