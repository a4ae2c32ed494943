use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tradenote::domain::NotificationText;
use tradenote::error::Result;
use tradenote::port::NotificationSink;

/// Thread-safe notification collector for delivery assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingSink {
    texts: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.texts.lock().expect("lock recorded texts").len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().expect("lock recorded texts").clone()
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn deliver(&self, text: &NotificationText) -> Result<()> {
        self.texts
            .lock()
            .expect("lock recorded texts")
            .push(text.as_str().to_string());
        Ok(())
    }
}
