//! Command delivery
//!
//! The host registers one handler during initialization and forwards every
//! keyboard command event through `emit`. Overlapping emissions are not
//! serialized; two concurrent events race exactly as they would on the host.

use async_trait::async_trait;

use crate::Result;

/// Receives every command name the host delivers.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn on_command(&self, name: &str) -> Result<()>;
}

/// Single-subscription dispatcher between the host event source and the
/// handler.
pub struct CommandBus<H> {
    handler: H,
}

impl<H: CommandHandler> CommandBus<H> {
    /// The one subscription call, made at startup.
    pub fn subscribe(handler: H) -> Self {
        tracing::debug!("command handler subscribed");
        Self { handler }
    }

    /// Deliver one command event to the handler.
    ///
    /// Failures propagate to the embedding host, which decides how
    /// visible they are.
    pub async fn emit(&self, name: &str) -> Result<()> {
        self.handler.on_command(name).await
    }
}
