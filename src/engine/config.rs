use crate::consts::{
	DEFAULT_DELETE_BATCH_SIZE, DEFAULT_DELETE_COOLDOWN, DEFAULT_LIST_DELAY, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
use std::time::Duration;

/// Tuning of the traversal and bulk delete rates.
#[derive(Debug, Clone)]
pub struct EngineConfig {
	/// ListItems `MaxResults`, within 1..=500.
	pub page_size: i32,
	/// Pause before each listing call.
	pub list_delay: Duration,
	/// Number of deletes dispatched concurrently and awaited together.
	pub delete_batch_size: usize,
	/// Pause between two delete batches.
	pub delete_cooldown: Duration,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			list_delay: DEFAULT_LIST_DELAY,
			delete_batch_size: DEFAULT_DELETE_BATCH_SIZE,
			delete_cooldown: DEFAULT_DELETE_COOLDOWN,
		}
	}
}

impl EngineConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_page_size(mut self, page_size: i32) -> Self {
		self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
		self
	}

	pub fn with_list_delay(mut self, list_delay: Duration) -> Self {
		self.list_delay = list_delay;
		self
	}

	pub fn with_delete_batch_size(mut self, delete_batch_size: usize) -> Self {
		self.delete_batch_size = delete_batch_size.max(1);
		self
	}

	pub fn with_delete_cooldown(mut self, delete_cooldown: Duration) -> Self {
		self.delete_cooldown = delete_cooldown;
		self
	}

	/// Sustained delete rate ceiling implied by the batch size and cooldown.
	pub fn deletes_per_second(&self) -> Option<f64> {
		let secs = self.delete_cooldown.as_secs_f64();
		(secs > 0.0).then(|| self.delete_batch_size as f64 / secs)
	}
}
