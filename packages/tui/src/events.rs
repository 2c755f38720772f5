use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::warn;

/// Default interval between redraws when no key is pressed
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Event types for the TUI application
#[derive(Debug, Clone)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Periodic redraw; picks up flows that finished in the background and expired toasts
    Tick,
    Resize,
    Quit,
}

/// Reads terminal input on a blocking thread and forwards it with periodic ticks
pub struct EventHandler {
    sender: mpsc::UnboundedSender<AppEvent>,
    receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: u64) -> Self {
        let tick_rate = Duration::from_millis(tick_rate.max(1));
        let (sender, receiver) = mpsc::unbounded_channel();
        let events = sender.clone();

        // Polling crossterm blocks, so keep it off the async workers.
        // The loop ends once the receiving side is dropped.
        tokio::task::spawn_blocking(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate.saturating_sub(last_tick.elapsed());

                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                                events.send(AppEvent::Key(key))
                            }
                            Ok(Event::Resize(_, _)) => events.send(AppEvent::Resize),
                            Ok(_) => Ok(()),
                            Err(e) => {
                                warn!(error = %e, "Failed to read terminal event");
                                Ok(())
                            }
                        };
                        if forwarded.is_err() {
                            break;
                        }
                    }
                    Ok(false) => {}
                    Err(e) => warn!(error = %e, "Failed to poll terminal events"),
                }

                if last_tick.elapsed() >= tick_rate {
                    if events.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { sender, receiver }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.receiver.recv().await
    }

    pub fn sender(&self) -> &mpsc::UnboundedSender<AppEvent> {
        &self.sender
    }
}
