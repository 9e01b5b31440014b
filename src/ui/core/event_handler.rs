use crossterm::event::{poll, Event, KeyEvent, KeyEventKind};
use tokio::time::{Duration, Instant};

/// Polls the terminal without blocking the runtime, falling back to ticks.
pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Instant,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(50))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: Instant::now(),
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
                Event::Resize(w, h) => EventType::Resize(w, h),
                _ => EventType::Other,
            });
        }

        // Nothing pending: yield so background tasks can make progress
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    pub fn tick_rate(&self) -> Duration {
        self.tick_rate
    }

    /// Record that a frame was drawn
    pub fn mark_rendered(&mut self) {
        self.last_render_time = Instant::now();
    }

    /// Check if we should render based on timing
    pub fn should_render(&self) -> bool {
        self.last_render_time.elapsed() >= Duration::from_millis(16) // Cap at ~60 FPS
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
