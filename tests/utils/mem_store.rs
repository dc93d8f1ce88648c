use async_trait::async_trait;
use mdstore::msw::{Entry, ItemPage, StoreClient};
use mdstore::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In memory StoreClient. Clones share the same state, so a test can keep one
/// while the session owns the other.
#[derive(Clone, Default)]
pub struct MemStore {
	inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
	levels: HashMap<String, Vec<Entry>>,
	pages: HashMap<(String, Option<String>), ItemPage>,
	fail_list: HashSet<String>,
	fail_page: HashSet<(String, String)>,
	fail_delete: HashSet<String>,
	malformed_probe: bool,
	fail_probe: bool,
	delete_latency: Duration,

	list_calls: Mutex<Vec<(String, Option<String>)>>,
	page_sizes: Mutex<Vec<i32>>,
	deleted: Mutex<Vec<String>>,
	delete_calls: AtomicUsize,
	in_flight: AtomicUsize,
	max_in_flight: AtomicUsize,
}

// builders (only before sharing)
impl MemStore {
	pub fn new() -> MemStore {
		MemStore::default()
	}

	fn inner_mut(&mut self) -> &mut Inner {
		Arc::get_mut(&mut self.inner).expect("MemStore builders must be called before cloning")
	}

	/// Entries of a level, paged by the requested max_results.
	pub fn with_level(mut self, path: &str, entries: Vec<Entry>) -> MemStore {
		self.inner_mut().levels.insert(path.to_string(), entries);
		self
	}

	/// Explicit page returned for a (path, token) request.
	pub fn with_page(mut self, path: &str, token: Option<&str>, items: Vec<Entry>, next: Option<&str>) -> MemStore {
		let page = ItemPage::new(items, next.map(|s| s.to_string()));
		self.inner_mut().pages.insert((path.to_string(), token.map(|s| s.to_string())), page);
		self
	}

	pub fn with_fail_list(mut self, path: &str) -> MemStore {
		self.inner_mut().fail_list.insert(path.to_string());
		self
	}

	/// Fail only the request of `path` carrying `token`.
	pub fn with_fail_page(mut self, path: &str, token: &str) -> MemStore {
		self.inner_mut().fail_page.insert((path.to_string(), token.to_string()));
		self
	}

	pub fn with_fail_delete(mut self, path: &str) -> MemStore {
		self.inner_mut().fail_delete.insert(path.to_string());
		self
	}

	pub fn with_malformed_probe(mut self) -> MemStore {
		self.inner_mut().malformed_probe = true;
		self
	}

	pub fn with_fail_probe(mut self) -> MemStore {
		self.inner_mut().fail_probe = true;
		self
	}

	pub fn with_delete_latency(mut self, latency: Duration) -> MemStore {
		self.inner_mut().delete_latency = latency;
		self
	}
}

// checks
impl MemStore {
	pub fn list_calls(&self) -> Vec<(String, Option<String>)> {
		self.inner.list_calls.lock().unwrap().clone()
	}

	/// The max_results of every list_items request, in call order.
	pub fn page_sizes(&self) -> Vec<i32> {
		self.inner.page_sizes.lock().unwrap().clone()
	}

	pub fn deleted(&self) -> Vec<String> {
		self.inner.deleted.lock().unwrap().clone()
	}

	pub fn delete_calls(&self) -> usize {
		self.inner.delete_calls.load(Ordering::SeqCst)
	}

	pub fn max_in_flight(&self) -> usize {
		self.inner.max_in_flight.load(Ordering::SeqCst)
	}
}

#[async_trait]
impl StoreClient for MemStore {
	async fn list_items(&self, path: &str, max_results: i32, next_token: Option<String>) -> Result<ItemPage> {
		let inner = &self.inner;
		inner.list_calls.lock().unwrap().push((path.to_string(), next_token.clone()));
		inner.page_sizes.lock().unwrap().push(max_results);

		let page_failed = next_token
			.as_ref()
			.map(|t| inner.fail_page.contains(&(path.to_string(), t.clone())))
			.unwrap_or(false);
		if page_failed || inner.fail_list.contains(path) {
			return Err(Error::AwsServiceError("ListItems", format!("mock failure for '{path}'")));
		}

		if let Some(page) = inner.pages.get(&(path.to_string(), next_token.clone())) {
			return Ok(page.clone());
		}

		let entries = inner.levels.get(path).cloned().unwrap_or_default();
		let offset: usize = next_token.and_then(|t| t.parse().ok()).unwrap_or(0);
		let end = (offset + max_results as usize).min(entries.len());
		let next = (end < entries.len()).then(|| end.to_string());

		Ok(ItemPage::new(entries[offset..end].to_vec(), next))
	}

	async fn delete_object(&self, path: &str) -> Result<()> {
		let inner = &self.inner;
		inner.delete_calls.fetch_add(1, Ordering::SeqCst);
		let now = inner.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
		inner.max_in_flight.fetch_max(now, Ordering::SeqCst);

		if !inner.delete_latency.is_zero() {
			tokio::time::sleep(inner.delete_latency).await;
		}

		inner.in_flight.fetch_sub(1, Ordering::SeqCst);

		if inner.fail_delete.contains(path) {
			return Err(Error::AwsServiceError("DeleteObject", format!("mock failure for '{path}'")));
		}
		inner.deleted.lock().unwrap().push(path.to_string());
		Ok(())
	}

	async fn probe(&self) -> Result<ItemPage> {
		if self.inner.fail_probe {
			return Err(Error::AwsServiceError("ListItems", "mock probe failure".to_string()));
		}
		if self.inner.malformed_probe {
			return Ok(ItemPage::default());
		}
		self.list_items("", 1, None).await
	}
}
