//! Background slice writer.
//!
//! A dedicated thread owns the storage backend and applies writes in the
//! order they were enqueued, so disk latency never blocks a dispatch.

use std::sync::mpsc::{Sender, channel};
use std::thread::{self, JoinHandle};

use super::SliceStorage;

/// Statistics from the writer thread.
#[derive(Debug, Default, Clone)]
pub struct WriteStats {
    pub writes: usize,
    pub failures: usize,
}

enum WriteRequest {
    Write { key: &'static str, payload: String },
    Stop,
}

/// A background thread draining slice writes onto a storage backend.
///
/// Jobs arrive over an mpsc channel. A stop request travels the same
/// channel, so every write enqueued before it is applied first.
pub struct SliceWriter {
    tx: Sender<WriteRequest>,
    handle: Option<JoinHandle<WriteStats>>,
}

impl SliceWriter {
    /// Spawn the writer thread, moving `storage` into it.
    pub fn spawn<S>(storage: S) -> Self
    where
        S: SliceStorage + 'static,
    {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let mut stats = WriteStats::default();

            loop {
                match rx.recv() {
                    Ok(WriteRequest::Write { key, payload }) => {
                        match storage.write(key, &payload) {
                            Ok(()) => stats.writes += 1,
                            Err(e) => {
                                stats.failures += 1;
                                tracing::warn!(key, error = %e, "Failed to persist slice");
                            }
                        }
                    }
                    Ok(WriteRequest::Stop) | Err(_) => break,
                }
            }

            stats
        });

        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// A cloneable handle for enqueueing writes from subscribers.
    #[must_use]
    pub fn handle(&self) -> WriterHandle {
        WriterHandle {
            tx: self.tx.clone(),
        }
    }

    /// Signal the writer to stop and wait for it to finish.
    /// Returns the write statistics.
    pub fn stop(mut self) -> WriteStats {
        let _ = self.tx.send(WriteRequest::Stop);
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or_default()
        } else {
            WriteStats::default()
        }
    }
}

impl Drop for SliceWriter {
    fn drop(&mut self) {
        let _ = self.tx.send(WriteRequest::Stop);
        // Don't join on drop - let the thread finish naturally
    }
}

/// Enqueues slice writes onto the writer thread.
#[derive(Debug, Clone)]
pub struct WriterHandle {
    tx: Sender<WriteRequest>,
}

impl WriterHandle {
    /// Queue a payload for `key`. If the writer has already stopped, the
    /// write is dropped with a warning.
    pub fn enqueue(&self, key: &'static str, payload: String) {
        if self.tx.send(WriteRequest::Write { key, payload }).is_err() {
            tracing::warn!(key, "Slice writer is gone, dropping write");
        }
    }
}
