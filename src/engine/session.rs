use super::config::EngineConfig;
use super::deleter::{BulkDeleter, DeleteReport};
use super::lister::{list_entries, list_entries_or_empty};
use super::throttle::Throttle;
use super::walker::{TreeWalker, Walk};
use crate::msw::cred::client_from_cred;
use crate::msw::{AggregateResult, Entry, ItemPage, ObjectRef, StoreClient, StoreCred};
use crate::{Error, Result};
use tracing::{info, warn};

/// An authenticated (or not yet) connection to one store.
/// Every operation but `authenticate...` requires the session to be authenticated.
pub struct Session {
	client: Option<Box<dyn StoreClient>>,
	endpoint: Option<String>,
	config: EngineConfig,
	list_throttle: Throttle,
}

impl Default for Session {
	fn default() -> Self {
		Session::new(EngineConfig::default())
	}
}

impl Session {
	/// Constructor
	pub fn new(config: EngineConfig) -> Session {
		let list_throttle = Throttle::new(config.list_delay);
		Session {
			client: None,
			endpoint: None,
			config,
			list_throttle,
		}
	}

	pub fn is_authenticated(&self) -> bool {
		self.client.is_some()
	}

	pub fn endpoint(&self) -> Option<&str> {
		self.endpoint.as_deref()
	}

	fn client(&self) -> Result<&dyn StoreClient> {
		self.client.as_deref().ok_or(Error::NotAuthenticated)
	}
}

// region:    --- Authentication

impl Session {
	/// Build a MediaStore client for the key pair and endpoint (region derived from the endpoint),
	/// and keep it only if the liveness probe succeeds.
	pub async fn authenticate(&mut self, key_secret: &str, key_id: &str, endpoint: &str) -> bool {
		self.endpoint = Some(endpoint.to_string());

		let cred = StoreCred {
			key_id: key_id.to_string(),
			key_secret: key_secret.to_string(),
			endpoint: endpoint.to_string(),
		};

		match client_from_cred(cred) {
			Ok(client) => self.authenticate_with(client).await,
			Err(err) => {
				warn!(endpoint, %err, "cannot build store client");
				self.client = None;
				false
			}
		}
	}

	/// Probe the given client and keep it as the session client on success.
	/// On failure, the session is left without client, even if it had one before.
	pub async fn authenticate_with(&mut self, client: impl StoreClient + 'static) -> bool {
		self.client = None;

		match client.probe().await {
			Ok(ItemPage { items: Some(_), .. }) => {
				info!(endpoint = self.endpoint.as_deref().unwrap_or_default(), "authenticated");
				self.client = Some(Box::new(client));
				true
			}
			Ok(ItemPage { items: None, .. }) => {
				warn!("probe response has no items list");
				false
			}
			Err(err) => {
				warn!(%err, "probe failed");
				false
			}
		}
	}
}

// endregion: --- Authentication

// region:    --- Operations

impl Session {
	/// Entries of one level, folders included. Empty on listing failure.
	pub async fn list_level(&self, path: &str) -> Result<Vec<Entry>> {
		let client = self.client()?;
		Ok(list_entries_or_empty(client, path, self.config.page_size).await)
	}

	pub async fn try_list_level(&self, path: &str) -> Result<Vec<Entry>> {
		let client = self.client()?;
		list_entries(client, path, self.config.page_size).await
	}

	/// All the objects under `path`, recursively. Empty on failure.
	pub async fn list_by_path(&self, path: &str) -> Result<Vec<ObjectRef>> {
		Ok(self.walker()?.collect(path).await)
	}

	pub async fn try_list_by_path(&self, path: &str) -> Result<Walk<Vec<ObjectRef>>> {
		self.walker()?.try_collect(path).await
	}

	/// Object count and total size under `path`. Zero on failure.
	pub async fn size_by_path(&self, path: &str) -> Result<AggregateResult> {
		Ok(self.walker()?.aggregate(path).await)
	}

	pub async fn try_size_by_path(&self, path: &str) -> Result<Walk<AggregateResult>> {
		self.walker()?.try_aggregate(path).await
	}

	/// Delete every object under `path`. True when all the discovered objects were deleted.
	pub async fn delete_by_path(&self, path: &str) -> Result<bool> {
		let report = self.delete_by_path_report(path).await?;
		Ok(report.is_complete())
	}

	pub async fn delete_by_path_report(&self, path: &str) -> Result<DeleteReport> {
		let objects = self.list_by_path(path).await?;
		self.delete_objects(&objects).await
	}

	pub async fn delete_objects(&self, objects: &[ObjectRef]) -> Result<DeleteReport> {
		let client = self.client()?;
		let deleter = BulkDeleter::new(client, self.config.delete_batch_size, self.config.delete_cooldown);
		Ok(deleter.delete_all(objects).await)
	}

	fn walker(&self) -> Result<TreeWalker<'_>> {
		let client = self.client()?;
		Ok(TreeWalker::new(client, self.config.page_size, &self.list_throttle))
	}
}

// endregion: --- Operations
