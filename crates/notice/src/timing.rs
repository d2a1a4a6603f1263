use std::time::Duration;

/// Timing knobs for the response wait loop and the fade-out.
#[derive(Debug, Clone)]
pub struct NoticeTiming {
    /// Interval between click polls.
    pub choice_poll: Duration,
    /// Interval between fade steps.
    pub fade_tick: Duration,
    /// Opacity decrement per fade step.
    pub fade_step: f64,
}

impl Default for NoticeTiming {
    fn default() -> Self {
        Self {
            choice_poll: Duration::from_millis(300),
            fade_tick: Duration::from_millis(40),
            fade_step: 0.1,
        }
    }
}

impl NoticeTiming {
    pub fn with_choice_poll(mut self, ms: u64) -> Self {
        self.choice_poll = Duration::from_millis(ms);
        self
    }

    pub fn with_fade_tick(mut self, ms: u64) -> Self {
        self.fade_tick = Duration::from_millis(ms);
        self
    }

    pub fn with_fade_step(mut self, step: f64) -> Self {
        self.fade_step = step;
        self
    }
}
