// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use futures::StreamExt;
use tokio::task::JoinHandle;

use crate::core::contract::{MintedEvent, MintedEvents};

/// A running minted-event listener. Dropping the handle stops the listener.
#[derive(Debug)]
pub struct Subscription {
    task: JoinHandle<()>,
}

impl Subscription {
    /// Spawns a task feeding every event to `handler`, in arrival order.
    pub fn spawn<F>(mut events: MintedEvents, mut handler: F) -> Self
    where
        F: FnMut(MintedEvent) + Send + 'static,
    {
        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                handler(event);
            }
            debug!(@grey, "minted event stream ended");
        });
        Self { task }
    }

    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}
