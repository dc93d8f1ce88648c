use super::item::{Entry, ItemPage};
use super::StoreClient;
use crate::Result;
use async_trait::async_trait;
use aws_sdk_mediastoredata::types::{Item, ItemType};
use aws_sdk_mediastoredata::Client;
use tracing::debug;

/// StoreClient backed by the AWS MediaStore Data API.
#[derive(Debug, Clone)]
pub struct MediaStoreClient {
	client: Client,
}

impl MediaStoreClient {
	/// Constructor
	pub fn from_client(client: Client) -> MediaStoreClient {
		MediaStoreClient { client }
	}
}

#[async_trait]
impl StoreClient for MediaStoreClient {
	async fn list_items(&self, path: &str, max_results: i32, next_token: Option<String>) -> Result<ItemPage> {
		// BUILD - the aws ListItems request
		let mut builder = self
			.client
			.list_items()
			.max_results(max_results)
			.set_next_token(next_token);

		// The container root is addressed by omitting the path.
		if !path.is_empty() {
			builder = builder.path(path);
		}

		// EXECUTE - the AWS request
		let resp = builder.send().await?;

		let items = resp.items().map(|items| items.iter().filter_map(entry_from_item).collect::<Vec<_>>());
		let next_token = resp.next_token().map(|t| t.to_string());

		debug!(
			path,
			items = items.as_ref().map(|i| i.len()).unwrap_or_default(),
			has_next = next_token.is_some(),
			"list_items page"
		);

		Ok(ItemPage { items, next_token })
	}

	async fn delete_object(&self, path: &str) -> Result<()> {
		let builder = self.client.delete_object().path(path);

		builder.send().await?;

		Ok(())
	}
}

/// Items without a name or with an unknown type are skipped.
fn entry_from_item(item: &Item) -> Option<Entry> {
	let name = item.name()?.to_string();
	match item.r#type()? {
		ItemType::Folder => Some(Entry::folder(name)),
		ItemType::Object => {
			let content_length = item.content_length().unwrap_or_default().max(0) as u64;
			Some(Entry::object(name, content_length))
		}
		_ => None,
	}
}
