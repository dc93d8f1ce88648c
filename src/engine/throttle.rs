use std::sync::Mutex;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};

/// Paces calls so that two consecutive `wait` return at least `delay` apart.
/// The first call also waits `delay`, as a listing call is always preceded by the pause.
#[derive(Debug)]
pub struct Throttle {
	delay: Duration,
	last: Mutex<Option<Instant>>,
}

impl Throttle {
	pub fn new(delay: Duration) -> Throttle {
		Throttle {
			delay,
			last: Mutex::new(None),
		}
	}

	pub async fn wait(&self) {
		if self.delay.is_zero() {
			return;
		}

		let deadline = {
			let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
			let now = Instant::now();
			let deadline = match *last {
				Some(prev) => (prev + self.delay).max(now),
				None => now + self.delay,
			};
			*last = Some(deadline);
			deadline
		};

		sleep_until(deadline).await;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test(start_paused = true)]
	async fn test_throttle_spaces_calls() {
		let throttle = Throttle::new(Duration::from_millis(100));
		let start = Instant::now();

		for _ in 0..5 {
			throttle.wait().await;
		}

		assert_eq!(start.elapsed(), Duration::from_millis(500));
	}

	#[tokio::test(start_paused = true)]
	async fn test_throttle_no_wait_when_slow_caller() {
		let throttle = Throttle::new(Duration::from_millis(100));
		throttle.wait().await;

		// caller work longer than the delay
		tokio::time::sleep(Duration::from_millis(250)).await;
		let before = Instant::now();
		throttle.wait().await;

		assert_eq!(before.elapsed(), Duration::ZERO);
	}

	#[tokio::test(start_paused = true)]
	async fn test_throttle_zero_delay() {
		let throttle = Throttle::new(Duration::ZERO);
		let start = Instant::now();
		throttle.wait().await;
		assert_eq!(start.elapsed(), Duration::ZERO);
	}
}
