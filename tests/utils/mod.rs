#![allow(unused)]

// --- Re-exports
pub use mem_store::MemStore;

// --- Imports
use mdstore::msw::{Entry, ObjectRef};

// --- Sub-Modules
mod mem_store;

// region:    --- Fixtures

/// root/
///   a.txt (10)
///   sub/
///     b.txt (20)
pub fn fixture_simple() -> MemStore {
	MemStore::new()
		.with_level("root", vec![Entry::object("a.txt", 10), Entry::folder("sub")])
		.with_level("root/sub", vec![Entry::object("b.txt", 20)])
}

/// live/
///   index.m3u8 (100)
///   empty/
///   2024/
///     01/
///       seg-1.ts (1000)
///       seg-2.ts (1500)
///     02/
///       seg-3.ts (2000)
///   poster.jpg (50)
pub fn fixture_multi_level() -> MemStore {
	MemStore::new()
		.with_level(
			"live",
			vec![
				Entry::object("index.m3u8", 100),
				Entry::folder("empty"),
				Entry::folder("2024"),
				Entry::object("poster.jpg", 50),
			],
		)
		.with_level("live/empty", vec![])
		.with_level("live/2024", vec![Entry::folder("01"), Entry::folder("02")])
		.with_level(
			"live/2024/01",
			vec![Entry::object("seg-1.ts", 1000), Entry::object("seg-2.ts", 1500)],
		)
		.with_level("live/2024/02", vec![Entry::object("seg-3.ts", 2000)])
}

pub fn object_refs(count: usize) -> Vec<ObjectRef> {
	(0..count)
		.map(|i| ObjectRef {
			path: format!("bulk/obj-{i:04}.ts"),
			name: format!("obj-{i:04}.ts"),
			content_length: 1,
		})
		.collect()
}

// endregion: --- Fixtures

// region:    --- Check Utils

pub fn paths(objects: &[ObjectRef]) -> Vec<&str> {
	objects.iter().map(|o| o.path.as_str()).collect()
}

// endregion: --- Check Utils
