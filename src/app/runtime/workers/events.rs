use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Spawn the blocking terminal event reader.
///
/// Inputs:
/// - `headless`: When `true`, no thread is started (tests without a TTY)
/// - `event_tx`: Channel the events are forwarded to
/// - `cancelled`: Flag checked between polls; set on exit
///
/// Details:
/// - Polls with a 50ms timeout so the thread notices cancellation promptly.
/// - Exits when the receiving side is dropped.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            // poll and read errors are transient; keep looping
            if let Ok(true) = crossterm::event::poll(Duration::from_millis(50))
                && let Ok(ev) = crossterm::event::read()
                && (cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err())
            {
                break;
            }
        }
    });
}
