use std::sync::{Arc, Mutex};

use sparkd_notifier_engine::{PushDelivery, PushDeliveryError, PushMessage};

/// A push service that accepts everything and remembers what it was sent.
#[derive(Clone, Default)]
pub struct RecordingPush {
    sent: Arc<Mutex<Vec<PushMessage>>>,
}

impl RecordingPush {
    pub fn sent(&self) -> Vec<PushMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl PushDelivery for RecordingPush {
    async fn send(&self, message: &PushMessage) -> Result<String, PushDeliveryError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(message.clone());
        Ok(format!("projects/sparkd-test/messages/{}", sent.len()))
    }
}
