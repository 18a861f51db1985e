use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A repeating tick source that lives as long as the value does.
///
/// A background thread sends one message per period. Dropping the ticker
/// stops that thread and waits for it, so no tick arrives after the owner
/// is gone.
pub struct Ticker {
    ticks: Receiver<()>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn start(period: Duration) -> Self {
        let (tick_tx, ticks) = mpsc::channel();
        let (stop, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            match stop_rx.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    if tick_tx.send(()).is_err() {
                        break;
                    }
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Ticker {
            ticks,
            stop: Some(stop),
            handle: Some(handle),
        }
    }

    /// Number of ticks that fired since the last call.
    pub fn drain(&self) -> usize {
        self.ticks.try_iter().count()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        // Disconnecting the stop channel wakes the thread immediately.
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn delivers_ticks_each_period() {
        let ticker = Ticker::start(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(120));
        assert!(ticker.drain() >= 3);
    }

    #[test]
    fn drain_empties_the_queue() {
        let ticker = Ticker::start(Duration::from_secs(60));
        assert_eq!(ticker.drain(), 0);
    }

    #[test]
    fn drop_stops_promptly() {
        let ticker = Ticker::start(Duration::from_secs(60));
        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
