//! Shared helpers for integration tests.

#![allow(dead_code)]

use alertlog_core::{Alert, AlertSender, LoggerConfig, Result, SimpleLogger};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::{mpsc, Arc};

/// In-memory sink shared between the logger and the test.
#[derive(Clone, Default)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    /// Lines written so far.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(str::to_string)
            .collect()
    }
}

/// Sender that records every alert with its target URL.
pub struct Recorder(Mutex<mpsc::Sender<(String, Alert)>>);

#[async_trait]
impl AlertSender for Recorder {
    async fn send(&self, webhook_url: &str, alert: &Alert) -> Result<()> {
        let _ = self.0.lock().send((webhook_url.to_string(), alert.clone()));
        Ok(())
    }
}

pub fn panic_exit(code: i32) -> ! {
    panic!("exit status {}", code)
}

/// Logger writing to a buffer and recording deliveries.
pub fn test_logger(config: LoggerConfig) -> (SimpleLogger, Buffer, mpsc::Receiver<(String, Alert)>) {
    let buffer = Buffer::default();
    let (tx, rx) = mpsc::channel();
    let logger = SimpleLogger::builder(config)
        .sender(Arc::new(Recorder(Mutex::new(tx))))
        .writer(buffer.clone())
        .exit_handler(panic_exit)
        .build()
        .unwrap();
    (logger, buffer, rx)
}
