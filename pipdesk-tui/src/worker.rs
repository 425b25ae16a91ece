//! Background refresh worker — simulates feed latency off the UI thread.
//!
//! Communication with the main thread is via `mpsc` channels. A refresh
//! sleeps for the configured latency (in short slices so Esc can cancel
//! it), then delivers a fresh deterministic signal batch.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use pipdesk_core::domain::signal::TradingSignal;

use crate::sample_data;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    Refresh { latency_ms: u64 },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug, Clone)]
pub enum WorkerResponse {
    RefreshDone { signals: Vec<TradingSignal> },
    RefreshCancelled,
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    cancel: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("pipdesk-worker".into())
        .spawn(move || worker_loop(rx, tx, cancel))
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, cancel: Arc<AtomicBool>) {
    // Each refresh produces a distinct batch; the counter is the seed.
    let mut generation: u64 = 0;

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::Refresh { latency_ms }) => {
                if simulate_latency(latency_ms, &cancel) {
                    generation += 1;
                    let _ = tx.send(WorkerResponse::RefreshDone {
                        signals: sample_data::refreshed_signals(generation),
                    });
                } else {
                    cancel.store(false, Ordering::Relaxed);
                    let _ = tx.send(WorkerResponse::RefreshCancelled);
                }
            }
        }
    }
}

/// Sleep in 25 ms slices so a cancel request takes effect quickly.
/// Returns false when the sleep was cancelled.
fn simulate_latency(latency_ms: u64, cancel: &AtomicBool) -> bool {
    let mut remaining = latency_ms;
    while remaining > 0 {
        if cancel.load(Ordering::Relaxed) {
            return false;
        }
        let slice = remaining.min(25);
        thread::sleep(Duration::from_millis(slice));
        remaining -= slice;
    }
    !cancel.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn worker_shuts_down_cleanly() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, _resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx, Arc::new(AtomicBool::new(false)));

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().expect("worker should join cleanly");
    }

    #[test]
    fn refresh_delivers_a_batch() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx, Arc::new(AtomicBool::new(false)));

        cmd_tx
            .send(WorkerCommand::Refresh { latency_ms: 0 })
            .unwrap();
        match resp_rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            WorkerResponse::RefreshDone { signals } => assert_eq!(signals.len(), 5),
            other => panic!("expected RefreshDone, got {other:?}"),
        }

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn cancel_interrupts_a_slow_refresh() {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let handle = spawn_worker(cmd_rx, resp_tx, cancel.clone());

        cmd_tx
            .send(WorkerCommand::Refresh { latency_ms: 10_000 })
            .unwrap();
        thread::sleep(Duration::from_millis(50));
        cancel.store(true, Ordering::Relaxed);

        match resp_rx.recv_timeout(Duration::from_secs(2)).unwrap() {
            WorkerResponse::RefreshCancelled => {}
            other => panic!("expected RefreshCancelled, got {other:?}"),
        }

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn dropping_the_command_sender_stops_the_worker() {
        let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();
        let (resp_tx, _resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx, Arc::new(AtomicBool::new(false)));

        drop(cmd_tx);
        handle.join().expect("worker should exit on disconnect");
    }
}
