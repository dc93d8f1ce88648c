use crate::msw::{ObjectRef, StoreClient};
use crate::Error;
use futures::future::join_all;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

// region:    --- DeleteReport

#[derive(Debug, Default)]
pub struct DeleteReport {
	pub succeeded: usize,
	pub total: usize,
	pub failures: Vec<FailedDelete>,
}

#[derive(Debug)]
pub struct FailedDelete {
	pub path: String,
	pub error: Error,
}

impl DeleteReport {
	/// True when every object handed to the deleter was deleted.
	pub fn is_complete(&self) -> bool {
		self.succeeded == self.total
	}
}

// endregion: --- DeleteReport

// region:    --- BulkDeleter

/// Deletes objects in batches of `batch_size` concurrent requests,
/// pausing `cooldown` between two batches.
pub struct BulkDeleter<'a> {
	client: &'a dyn StoreClient,
	batch_size: usize,
	cooldown: Duration,
}

impl<'a> BulkDeleter<'a> {
	pub fn new(client: &'a dyn StoreClient, batch_size: usize, cooldown: Duration) -> BulkDeleter<'a> {
		BulkDeleter {
			client,
			batch_size: batch_size.max(1),
			cooldown,
		}
	}
}

impl BulkDeleter<'_> {
	/// One failed delete does not stop the others, it is recorded in the report.
	pub async fn delete_all(&self, objects: &[ObjectRef]) -> DeleteReport {
		let mut report = DeleteReport {
			total: objects.len(),
			..Default::default()
		};

		for (idx, batch) in objects.chunks(self.batch_size).enumerate() {
			if idx > 0 && !self.cooldown.is_zero() {
				sleep(self.cooldown).await;
			}

			let results = join_all(batch.iter().map(|obj| async move {
				debug!(path = %obj.path, "deleting");
				(obj, self.client.delete_object(&obj.path).await)
			}))
			.await;

			let mut batch_failed = 0;
			for (obj, res) in results {
				match res {
					Ok(()) => report.succeeded += 1,
					Err(error) => {
						warn!(path = %obj.path, %error, "delete failed");
						batch_failed += 1;
						report.failures.push(FailedDelete {
							path: obj.path.clone(),
							error,
						});
					}
				}
			}

			info!(
				batch = idx + 1,
				size = batch.len(),
				failed = batch_failed,
				done = report.succeeded,
				total = report.total,
				"delete batch done"
			);
		}

		report
	}
}

// endregion: --- BulkDeleter
