//! Structured logging with request context.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RequestId;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    fn label(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// How entries are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `[LEVEL] component: message | key=value` lines.
    Human,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Human => f.write_str("human"),
        }
    }
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            other => Err(format!("unknown log format: {}", other)),
        }
    }
}

#[derive(Serialize)]
struct Entry<'a> {
    level: LogLevel,
    message: &'a str,
    request_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    component: Option<&'a str>,
    elapsed_us: u64,
    #[serde(flatten)]
    fields: &'a BTreeMap<String, Value>,
}

impl Entry<'_> {
    fn human(&self) -> String {
        let mut line = format!("[{}] ", self.level);
        if let Some(component) = self.component {
            line.push_str(component);
            line.push_str(": ");
        }
        line.push_str(self.message);
        line.push_str(&format!(" ({}us)", self.elapsed_us));

        if !self.fields.is_empty() {
            let pairs: Vec<String> = self
                .fields
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            line.push_str(" | ");
            line.push_str(&pairs.join(" "));
        }
        line
    }
}

/// Logger bound to one CLI invocation.
///
/// Every entry carries the request id, the emitting component, and the time
/// since the logger was created. Entries go to stderr.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    component: Option<String>,
    started: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    /// Create a logger for `request_id` at info level in JSON format.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            component: None,
            started: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    /// A copy of this logger tagged with a component name.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
            ..self.clone()
        }
    }

    /// Drop entries below `level`.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Log a plain debug message.
    pub fn debug(&self, message: &str) {
        self.event(LogLevel::Debug, message).emit();
    }

    /// Log a plain error message.
    pub fn error(&self, message: &str) {
        self.event(LogLevel::Error, message).emit();
    }

    /// Start an entry at `level`.
    pub fn event(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Start a debug entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.event(LogLevel::Debug, message)
    }

    /// Start an info entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        self.event(LogLevel::Info, message)
    }

    fn render(
        &self,
        level: LogLevel,
        message: &str,
        fields: &BTreeMap<String, Value>,
    ) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let request_id = self.request_id.to_string();
        let entry = Entry {
            level,
            message,
            request_id: &request_id,
            component: self.component.as_deref(),
            elapsed_us: self.started.elapsed().as_micros() as u64,
            fields,
        };

        Some(match self.format {
            LogFormat::Json => {
                serde_json::to_string(&entry).unwrap_or_else(|_| message.to_string())
            }
            LogFormat::Human => entry.human(),
        })
    }
}

/// An entry being assembled; nothing is written until [`LogBuilder::emit`].
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, Value>,
}

impl LogBuilder<'_> {
    /// Attach a field. Values that fail to serialize are recorded as null.
    pub fn field(mut self, key: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.fields.insert(key.to_string(), value);
        self
    }

    /// The formatted line, or `None` when the level is filtered out.
    pub fn render(&self) -> Option<String> {
        self.logger.render(self.level, &self.message, &self.fields)
    }

    /// Write the entry to stderr.
    pub fn emit(self) {
        if let Some(line) = self.render() {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("req-1"))
    }

    #[test]
    fn test_json_entry_carries_context() {
        let line = logger()
            .for_component("storefront")
            .info_builder("listed products")
            .field("page", 2)
            .field("category", None::<&str>)
            .render()
            .unwrap();

        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["request_id"], "req-1");
        assert_eq!(value["component"], "storefront");
        assert_eq!(value["page"], 2);
        assert!(value["category"].is_null());
        assert!(value["elapsed_us"].is_u64());
    }

    #[test]
    fn test_below_min_level_is_dropped() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.debug_builder("noise").render().is_none());
        assert!(logger.event(LogLevel::Error, "boom").render().is_some());
    }

    #[test]
    fn test_human_format_sorts_fields() {
        let line = logger()
            .with_format(LogFormat::Human)
            .event(LogLevel::Warn, "cart rejected item")
            .field("retry", false)
            .field("reason", "limit")
            .render()
            .unwrap();

        assert!(line.starts_with("[WARN] cart rejected item ("));
        assert!(line.ends_with("| reason=\"limit\" retry=false"));
    }

    #[test]
    fn test_component_prefix() {
        let line = logger()
            .with_format(LogFormat::Human)
            .for_component("admin")
            .info_builder("product saved")
            .render()
            .unwrap();
        assert!(line.starts_with("[INFO] admin: product saved"));
    }

    #[test]
    fn test_parse_level_and_format() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert!("loud".parse::<LogLevel>().is_err());
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!(LogFormat::Human.to_string(), "human");
    }
}
