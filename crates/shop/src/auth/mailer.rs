//! Activation mail dispatch.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Mail dispatch failed: {0}")]
pub struct MailError(pub String);

/// Sends the activation link to a newly registered address.
#[async_trait]
pub trait ActivationMailer: Send + Sync {
    async fn send(&self, to: &str, activation_url: &str) -> Result<(), MailError>;
}

/// A message handed to [`LogMailer`].
#[derive(Debug, Clone, PartialEq)]
pub struct SentMail {
    pub from: String,
    pub to: String,
    pub activation_url: String,
}

/// Logs activation links instead of delivering them, and keeps them in an
/// in-memory outbox.
#[derive(Debug, Clone)]
pub struct LogMailer {
    sender: String,
    outbox: Arc<Mutex<Vec<SentMail>>>,
}

impl LogMailer {
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            outbox: Arc::default(),
        }
    }

    /// Everything sent so far, oldest first.
    pub fn sent(&self) -> Vec<SentMail> {
        self.outbox
            .lock()
            .map(|outbox| outbox.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ActivationMailer for LogMailer {
    #[instrument(skip(self, activation_url))]
    async fn send(&self, to: &str, activation_url: &str) -> Result<(), MailError> {
        info!(from = %self.sender, %activation_url, "Activation mail");
        let mut outbox = self
            .outbox
            .lock()
            .map_err(|_| MailError("outbox unavailable".to_string()))?;
        outbox.push(SentMail {
            from: self.sender.clone(),
            to: to.to_string(),
            activation_url: activation_url.to_string(),
        });
        Ok(())
    }
}
