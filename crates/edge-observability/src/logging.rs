//! Structured logging with page context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::PageId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Page id for correlation.
    pub page_id: String,
    /// Component that emitted the entry (e.g. "cart", "variant").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields, sorted by key.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = match &self.component {
            Some(component) => format!("[{}] {}: {}", self.level, component, self.message),
            None => format!("[{}] {}", self.level, self.message),
        };

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }

    /// Get a field value as a string, if present.
    pub fn field(&self, key: &str) -> Option<String> {
        self.fields.get(key).map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Destination for log entries.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Emit as `tracing` events at the matching level.
    #[default]
    Tracing,
    /// Keep entries in memory; shared between clones of the logger.
    Memory(Arc<Mutex<Vec<LogEntry>>>),
}

impl LogSink {
    /// Create an empty in-memory sink.
    pub fn memory() -> Self {
        Self::Memory(Arc::new(Mutex::new(Vec::new())))
    }
}

/// Structured logger with page context.
///
/// Cheap to clone; clones share the sink. Each component of the page takes a
/// clone scoped with [`StructuredLogger::for_component`].
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    page_id: PageId,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: LogSink,
}

impl StructuredLogger {
    /// Create a new logger for a page.
    pub fn new(page_id: PageId) -> Self {
        Self {
            page_id,
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: LogSink::Tracing,
        }
    }

    /// Set the component name.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the sink.
    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    /// Clone this logger scoped to another component.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        self.clone().with_component(component)
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if level < self.min_level {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            page_id: self.page_id.to_string(),
            component: self.component.clone(),
            fields,
        };

        match &self.sink {
            LogSink::Tracing => {
                let output = match self.format {
                    LogFormat::Json => entry.to_json(),
                    LogFormat::Human => entry.to_human(),
                };
                match level {
                    LogLevel::Trace => tracing::trace!(target: "storefront", "{}", output),
                    LogLevel::Debug => tracing::debug!(target: "storefront", "{}", output),
                    LogLevel::Info => tracing::info!(target: "storefront", "{}", output),
                    LogLevel::Warn => tracing::warn!(target: "storefront", "{}", output),
                    LogLevel::Error => tracing::error!(target: "storefront", "{}", output),
                }
            }
            LogSink::Memory(entries) => {
                if let Ok(mut entries) = entries.lock() {
                    entries.push(entry);
                }
            }
        }
    }

    /// Get the page id.
    pub fn page_id(&self) -> &PageId {
        &self.page_id
    }

    /// Snapshot of the entries recorded by a memory sink.
    ///
    /// Empty for the tracing sink.
    pub fn recorded(&self) -> Vec<LogEntry> {
        match &self.sink {
            LogSink::Memory(entries) => entries.lock().map(|e| e.clone()).unwrap_or_default(),
            LogSink::Tracing => Vec::new(),
        }
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a StructuredLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_logger() -> StructuredLogger {
        StructuredLogger::new(PageId::from_string("page-test")).with_sink(LogSink::memory())
    }

    #[test]
    fn test_min_level_filters() {
        let logger = memory_logger().with_min_level(LogLevel::Warn);
        logger.info("dropped");
        logger.warn("kept");
        let entries = logger.recorded();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn test_component_clones_share_sink() {
        let logger = memory_logger();
        let cart = logger.for_component("cart");
        cart.info_builder("added")
            .field("sku", "SKU-1")
            .field_u64("count", 3)
            .emit();

        let entries = logger.recorded();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].component.as_deref(), Some("cart"));
        assert_eq!(entries[0].field("sku").as_deref(), Some("SKU-1"));
        assert_eq!(entries[0].field("count").as_deref(), Some("3"));
    }

    #[test]
    fn test_json_format_flattens_fields() {
        let logger = memory_logger().with_component("variant");
        logger.warn_builder("stale").field_bool("discarded", true).emit();
        let json = logger.recorded()[0].to_json();
        assert!(json.contains("\"level\":\"warn\""));
        assert!(json.contains("\"discarded\":true"));
        assert!(json.contains("\"page_id\":\"page-test\""));
    }

    #[test]
    fn test_human_format() {
        let logger = memory_logger().with_component("promo");
        logger.error_builder("rejected").field("code", "SAVE10").emit();
        let human = logger.recorded()[0].to_human();
        assert_eq!(human, "[ERROR] promo: rejected | code=\"SAVE10\"");
    }

    #[test]
    fn test_tracing_sink_records_nothing() {
        let logger = StructuredLogger::new(PageId::generate());
        logger.info("to tracing");
        assert!(logger.recorded().is_empty());
    }
}
