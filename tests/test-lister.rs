use anyhow::Result;
use mdstore::engine::{list_entries, list_entries_or_empty};
use mdstore::msw::Entry;
use utils::MemStore;

mod utils;

#[tokio::test]
async fn test_lister_merge_pages_in_cursor_order() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::new()
		.with_page("media", None, vec![Entry::object("1.ts", 1), Entry::object("2.ts", 2)], Some("A"))
		.with_page("media", Some("A"), vec![Entry::folder("f1"), Entry::object("3.ts", 3)], Some("B"))
		.with_page("media", Some("B"), vec![Entry::object("4.ts", 4)], Some("C"))
		.with_page("media", Some("C"), vec![Entry::object("5.ts", 5)], None);

	// -- Exec
	let entries = list_entries(&store, "media", 500).await?;

	// -- Check
	let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
	assert_eq!(names, ["1.ts", "2.ts", "f1", "3.ts", "4.ts", "5.ts"]);
	let tokens: Vec<Option<String>> = store.list_calls().into_iter().map(|(_, t)| t).collect();
	assert_eq!(
		tokens,
		[None, Some("A".to_string()), Some("B".to_string()), Some("C".to_string())]
	);

	Ok(())
}

#[tokio::test]
async fn test_lister_page_size_requested() -> Result<()> {
	// -- Setup & Fixtures
	let entries: Vec<Entry> = (0..1203).map(|i| Entry::object(format!("{i}.ts"), 1)).collect();
	let store = MemStore::new().with_level("big", entries);

	// -- Exec
	let listed = list_entries(&store, "big", 500).await?;

	// -- Check
	assert_eq!(listed.len(), 1203);
	assert_eq!(listed[1202].name, "1202.ts");
	assert_eq!(store.list_calls().len(), 3);

	Ok(())
}

#[tokio::test]
async fn test_lister_empty_token_is_last_page() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::new().with_page("media", None, vec![Entry::object("1.ts", 1)], Some(""));

	// -- Exec
	let entries = list_entries(&store, "media", 500).await?;

	// -- Check
	assert_eq!(entries.len(), 1);
	assert_eq!(store.list_calls().len(), 1);

	Ok(())
}

#[tokio::test]
async fn test_lister_failure_on_later_page() -> Result<()> {
	// -- Setup & Fixtures
	// the second page fails, the first page must not leak out
	let store = MemStore::new()
		.with_page("media", None, vec![Entry::object("1.ts", 1)], Some("A"))
		.with_fail_page("media", "A");

	// -- Exec
	let res = list_entries(&store, "media", 500).await;
	let compat = list_entries_or_empty(&store, "media", 500).await;

	// -- Check
	assert!(res.is_err());
	assert!(compat.is_empty());
	assert_eq!(store.list_calls().len(), 4);

	Ok(())
}

#[tokio::test]
async fn test_lister_page_size_capped_at_500() -> Result<()> {
	// -- Setup & Fixtures
	let entries: Vec<Entry> = (0..1203).map(|i| Entry::object(format!("{i}.ts"), 1)).collect();
	let store = MemStore::new().with_level("big", entries);

	// -- Exec
	let listed = list_entries(&store, "big", 10_000).await?;

	// -- Check
	assert_eq!(listed.len(), 1203);
	assert_eq!(store.page_sizes(), [500, 500, 500]);

	Ok(())
}

#[tokio::test]
async fn test_lister_page_size_at_least_1() -> Result<()> {
	// -- Setup & Fixtures
	let store = MemStore::new().with_level("small", vec![Entry::object("1.ts", 1), Entry::object("2.ts", 2)]);

	// -- Exec
	let listed = list_entries(&store, "small", 0).await?;

	// -- Check
	assert_eq!(listed.len(), 2);
	assert_eq!(store.page_sizes(), [1, 1]);

	Ok(())
}
