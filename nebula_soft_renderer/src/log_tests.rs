//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, and DefaultLogger.

use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use std::time::SystemTime;

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    // Test PartialOrd implementation
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_equality() {
    assert_eq!(LogSeverity::Info, LogSeverity::Info);
    assert_ne!(LogSeverity::Trace, LogSeverity::Debug);
    assert_ne!(LogSeverity::Info, LogSeverity::Error);
}

// ============================================================================
// LOG ENTRY TESTS
// ============================================================================

#[test]
fn test_log_entry_creation_without_file_line() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "nebula::Pipeline".to_string(),
        message: "Pipeline created".to_string(),
        file: None,
        line: None,
    };
    assert_eq!(entry.severity, LogSeverity::Info);
    assert_eq!(entry.source, "nebula::Pipeline");
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_clone() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "nebula_demo".to_string(),
        message: "boom".to_string(),
        file: Some("main.rs"),
        line: Some(42),
    };
    let cloned = entry.clone();
    assert_eq!(cloned.message, "boom");
    assert_eq!(cloned.file, Some("main.rs"));
    assert_eq!(cloned.line, Some(42));
}

// ============================================================================
// CUSTOM LOGGER TESTS
// ============================================================================

struct CountingLogger {
    count: std::sync::atomic::AtomicUsize,
}

impl Logger for CountingLogger {
    fn log(&self, _entry: &LogEntry) {
        self.count.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[test]
fn test_custom_logger_receives_entries() {
    let logger = CountingLogger {
        count: std::sync::atomic::AtomicUsize::new(0),
    };
    let entry = LogEntry {
        severity: LogSeverity::Debug,
        timestamp: SystemTime::now(),
        source: "test".to_string(),
        message: "message".to_string(),
        file: None,
        line: None,
    };
    logger.log(&entry);
    logger.log(&entry);
    assert_eq!(logger.count.load(std::sync::atomic::Ordering::SeqCst), 2);
}

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "test".to_string(),
        message: "detailed".to_string(),
        file: Some("log_tests.rs"),
        line: Some(1),
    });
}
