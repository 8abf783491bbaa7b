//! Data bridge — connects the [`Inventory`] controller to TUI actions.
//!
//! Runs as a background task: performs the initial refresh, then loops
//! forwarding every snapshot change as an [`Action`] and executing
//! [`InventoryCommand`]s from the UI. Key handlers dispatch commands and
//! return immediately (fire-and-forget); commands execute sequentially
//! here, so overlapping mutations for the same item remain racy only at
//! the store level, as in the read-then-write design.

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use larder_core::{CoreError, Inventory};
use larder_store::DocumentStore;

use crate::action::{Action, Notification};

/// Inventory operations the UI can request.
#[derive(Debug, Clone)]
pub enum InventoryCommand {
    /// Add one unit of the named item (create at 1 if absent).
    Add(String),
    /// Remove one unit of the named item (delete at 0).
    Remove(String),
    /// Manual full refresh.
    Refresh,
}

/// Run the data bridge until cancelled.
pub async fn run_data_bridge<S: DocumentStore + 'static>(
    inventory: Inventory<S>,
    action_tx: mpsc::UnboundedSender<Action>,
    mut command_rx: mpsc::UnboundedReceiver<InventoryCommand>,
    cancel: CancellationToken,
) {
    // Initial load. A failure is surfaced but the UI keeps running with an
    // empty list; a later manual refresh can recover.
    match inventory.refresh().await {
        Ok(()) => {
            let _ = action_tx.send(Action::Connected);
        }
        Err(e) => {
            warn!(error = %e, "initial inventory refresh failed");
            let _ = action_tx.send(Action::Disconnected(e.to_string()));
            let _ = action_tx.send(Action::Notify(Notification::error(e.to_string())));
        }
    }

    let mut items = inventory.subscribe();

    // Push the initial snapshot so the list renders immediately
    let _ = action_tx.send(Action::ItemsUpdated(items.current().clone()));

    loop {
        tokio::select! {
            biased;

            () = cancel.cancelled() => break,

            Some(snapshot) = items.changed() => {
                let _ = action_tx.send(Action::ItemsUpdated(snapshot));
            }

            cmd = command_rx.recv() => {
                let Some(cmd) = cmd else { break };
                execute(&inventory, &action_tx, cmd).await;
            }
        }
    }

    debug!("data bridge shut down");
}

/// Execute one command, surfacing failures as a toast.
async fn execute<S: DocumentStore>(
    inventory: &Inventory<S>,
    action_tx: &mpsc::UnboundedSender<Action>,
    cmd: InventoryCommand,
) {
    let result = match &cmd {
        InventoryCommand::Add(name) => inventory.add_item(name).await,
        InventoryCommand::Remove(name) => inventory.remove_item(name).await,
        InventoryCommand::Refresh => inventory.refresh().await,
    };

    match result {
        Ok(()) => {
            let _ = action_tx.send(Action::Connected);
            // Mutation success is silent; a manual refresh gets feedback.
            if matches!(cmd, InventoryCommand::Refresh) {
                let _ = action_tx.send(Action::Notify(Notification::info("Inventory refreshed")));
            }
        }
        Err(e) => {
            warn!(error = %e, ?cmd, "inventory operation failed");
            // Unreachable-store failures flip the status indicator; a
            // later successful command flips it back via Connected.
            if matches!(e, CoreError::ConnectionFailed { .. } | CoreError::Timeout) {
                let _ = action_tx.send(Action::Disconnected(e.to_string()));
            }
            let _ = action_tx.send(Action::Notify(Notification::error(e.to_string())));
        }
    }
}
