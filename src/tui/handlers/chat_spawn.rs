//! Spawns the chat request in a background thread with a result channel.

use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::client::ChatClient;

use super::PendingChat;

/// Spawn one POST for `message`. The UI loop polls the returned receiver.
pub fn spawn_chat(rt: &Arc<Runtime>, client: Arc<ChatClient>, message: String) -> PendingChat {
    let (result_tx, result_rx) = mpsc::channel();
    let rt_clone = Arc::clone(rt);

    std::thread::spawn(move || {
        let result = rt_clone.block_on(client.send(&message));
        let _ = result_tx.send(result);
    });

    PendingChat { result_rx }
}
