use super::throttle::Throttle;
use crate::consts::MAX_PAGE_SIZE;
use crate::msw::{Entry, StoreClient};
use crate::Result;
use tracing::{debug, warn};

/// List all the entries of one directory level, merging every page in cursor order.
/// Any page failure fails the whole level, partial levels are never returned.
pub async fn list_entries(client: &dyn StoreClient, path: &str, page_size: i32) -> Result<Vec<Entry>> {
	list_entries_throttled(client, path, page_size, None).await
}

/// Compatibility flavor of `list_entries`, any failure gives an empty listing.
pub async fn list_entries_or_empty(client: &dyn StoreClient, path: &str, page_size: i32) -> Vec<Entry> {
	match list_entries(client, path, page_size).await {
		Ok(entries) => entries,
		Err(err) => {
			warn!(path, %err, "listing failed, treated as empty");
			Vec::new()
		}
	}
}

/// Same as `list_entries`, waiting on the throttle (when given) before each page request.
pub(crate) async fn list_entries_throttled(
	client: &dyn StoreClient,
	path: &str,
	page_size: i32,
	throttle: Option<&Throttle>,
) -> Result<Vec<Entry>> {
	let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
	let mut entries: Vec<Entry> = Vec::new();
	let mut next_token: Option<String> = None;
	let mut pages = 0;

	loop {
		if let Some(throttle) = throttle {
			throttle.wait().await;
		}

		let page = client.list_items(path, page_size, next_token.take()).await?;
		pages += 1;

		if let Some(items) = page.items {
			entries.extend(items);
		}

		// an empty token is also the last page
		match page.next_token {
			Some(token) if !token.is_empty() => next_token = Some(token),
			_ => break,
		}
	}

	debug!(path, pages, entries = entries.len(), "listed level");

	Ok(entries)
}
