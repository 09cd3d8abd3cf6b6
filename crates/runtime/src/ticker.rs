use crate::frame::Frame;

/// Default animation cadence (frames per second).
pub const DEFAULT_TICK_HZ: f64 = 60.0;

/// Stoppable, restartable fixed-cadence frame source.
///
/// The host drives it from its platform animation primitive; the ticker only
/// owns the deterministic frame sequence. `restart` resets the sequence and
/// is expected on every full draw setup (dataset, metric, or viewport
/// change), since derived scales change there.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticker {
    frame: Frame,
    running: bool,
}

impl Ticker {
    pub fn new(hz: f64) -> Self {
        let hz = if hz > 0.0 { hz } else { DEFAULT_TICK_HZ };
        Self {
            frame: Frame::new(0, 1.0 / hz),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop; pending `tick` calls become no-ops until restarted.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset the frame sequence and resume ticking.
    pub fn restart(&mut self) {
        self.frame = Frame::new(0, self.frame.dt_s);
        self.running = true;
    }

    /// Advance one frame. Returns the frame that just elapsed, or `None`
    /// when stopped.
    pub fn tick(&mut self) -> Option<Frame> {
        if !self.running {
            return None;
        }
        let elapsed = self.frame;
        self.frame = self.frame.next();
        Some(elapsed)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_HZ)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_TICK_HZ, Ticker};

    #[test]
    fn ticks_advance_frames() {
        let mut ticker = Ticker::new(DEFAULT_TICK_HZ);
        assert_eq!(ticker.tick().unwrap().index, 0);
        assert_eq!(ticker.tick().unwrap().index, 1);
    }

    #[test]
    fn stopped_ticker_yields_nothing() {
        let mut ticker = Ticker::new(60.0);
        ticker.stop();
        assert!(ticker.tick().is_none());
        assert!(!ticker.is_running());
    }

    #[test]
    fn restart_resets_the_sequence() {
        let mut ticker = Ticker::new(60.0);
        ticker.tick();
        ticker.tick();
        ticker.stop();
        ticker.restart();
        assert!(ticker.is_running());
        assert_eq!(ticker.tick().unwrap().index, 0);
    }

    #[test]
    fn non_positive_rate_falls_back_to_default() {
        let mut ticker = Ticker::new(0.0);
        let frame = ticker.tick().unwrap();
        assert!((frame.dt_s - 1.0 / DEFAULT_TICK_HZ).abs() < 1e-15);
    }
}
