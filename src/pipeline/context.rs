//! Relay channels and handles for threaded mode.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::thread::JoinHandle;

use crate::types::ChunkResult;

/// Rendezvous capacity: a send completes only when the writer takes the chunk, so at most one
/// chunk is in flight between the threads.
pub const RELAY_CHANNEL_CAP: usize = 0;

/// Producer end (reader thread) and consumer end (writer) of the relay.
pub struct RelayChannels {
    pub chunk_tx: Sender<ChunkResult>,
    pub chunk_rx: Receiver<ChunkResult>,
}

pub fn create_relay_channels() -> RelayChannels {
    let (chunk_tx, chunk_rx) = bounded::<ChunkResult>(RELAY_CHANNEL_CAP);
    RelayChannels { chunk_tx, chunk_rx }
}

/// Returned by [`spawn_producer_thread`](super::spawn_producer_thread): the writer drains
/// `chunk_rx`, then joins `producer_handle` (yields the number of chunks sent).
pub struct RelayHandles {
    pub chunk_rx: Receiver<ChunkResult>,
    pub producer_handle: JoinHandle<usize>,
}
