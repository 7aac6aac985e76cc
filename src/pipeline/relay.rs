//! Producer thread: runs the reader and hands each chunk across the rendezvous channel.

use crossbeam_channel::Sender;
use log::debug;
use std::thread;

use crate::engine::reader::Chunks;
use crate::error::CopyError;
use crate::types::ChunkResult;

use super::context::{RelayHandles, create_relay_channels};

/// Pull every item from `chunks` and send it to `chunk_tx`. Stops after an `Err` item or when the
/// receiver is gone (writer failed). Drops `chunk_tx` when done so the writer sees end of stream.
/// Returns the number of items sent.
pub fn run_producer_loop<I>(chunk_tx: Sender<ChunkResult>, chunks: I) -> usize
where
    I: Iterator<Item = ChunkResult>,
{
    let mut sent = 0_usize;
    for item in chunks {
        let is_err = item.is_err();
        if chunk_tx.send(item).is_err() {
            debug!("relay: writer hung up after {} chunks", sent);
            break;
        }
        sent += 1;
        if is_err {
            break;
        }
    }
    drop(chunk_tx);
    sent
}

pub fn spawn_producer_thread(chunks: Chunks) -> RelayHandles {
    let channels = create_relay_channels();
    let chunk_tx = channels.chunk_tx;
    let producer_handle = thread::spawn(move || run_producer_loop(chunk_tx, chunks));
    RelayHandles {
        chunk_rx: channels.chunk_rx,
        producer_handle,
    }
}

/// Join the producer after the writer is done with `chunk_rx`.
pub fn join_producer(producer_handle: thread::JoinHandle<usize>) -> Result<usize, CopyError> {
    producer_handle
        .join()
        .map_err(|_| CopyError::Relay("reader thread panicked".to_string()))
}
