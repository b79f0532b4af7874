use std::time::Duration;

/// Pacing between emitted lines.
///
/// The emitter calls [`Delay::pause`] once per data line. Swap the
/// implementation to run the full sequence without waiting on the clock.
pub trait Delay {
	fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread for the requested duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepDelay;

impl Delay for SleepDelay {
	fn pause(&mut self, duration: Duration) {
		if !duration.is_zero() {
			std::thread::sleep(duration);
		}
	}
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
	fn pause(&mut self, _duration: Duration) {}
}

impl<F> Delay for F
where
	F: FnMut(Duration),
{
	fn pause(&mut self, duration: Duration) {
		self(duration);
	}
}

