use crate::consts::PATH_SEPARATOR;
use std::ops::{Add, AddAssign};

// region:    --- Entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
	Folder,
	Object,
}

/// One item of a directory level listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
	pub name: String,
	pub typ: EntryType,
	/// Only present for objects.
	pub content_length: Option<u64>,
}

// builders
impl Entry {
	pub fn folder(name: impl Into<String>) -> Entry {
		Entry {
			name: name.into(),
			typ: EntryType::Folder,
			content_length: None,
		}
	}

	pub fn object(name: impl Into<String>, content_length: u64) -> Entry {
		Entry {
			name: name.into(),
			typ: EntryType::Object,
			content_length: Some(content_length),
		}
	}
}

impl Entry {
	pub fn is_folder(&self) -> bool {
		matches!(self.typ, EntryType::Folder)
	}

	/// Path of this entry under `parent`. No normalization beyond the concatenation.
	pub fn child_path(&self, parent: &str) -> String {
		child_path(parent, &self.name)
	}
}

pub fn child_path(parent: &str, name: &str) -> String {
	format!("{parent}{PATH_SEPARATOR}{name}")
}
// endregion: --- Entry

// region:    --- ItemPage
/// One page of a ListItems response.
/// `items` is None when the response did not carry an items list at all.
#[derive(Debug, Clone, Default)]
pub struct ItemPage {
	pub items: Option<Vec<Entry>>,
	pub next_token: Option<String>,
}

impl ItemPage {
	pub fn new(items: Vec<Entry>, next_token: Option<String>) -> ItemPage {
		ItemPage {
			items: Some(items),
			next_token,
		}
	}
}
// endregion: --- ItemPage

// region:    --- ObjectRef
/// A resolved leaf object, as collected for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
	pub path: String,
	pub name: String,
	pub content_length: u64,
}

impl ObjectRef {
	pub fn from_entry(parent: &str, entry: &Entry) -> ObjectRef {
		ObjectRef {
			path: entry.child_path(parent),
			name: entry.name.clone(),
			content_length: entry.content_length.unwrap_or_default(),
		}
	}
}
// endregion: --- ObjectRef

// region:    --- AggregateResult
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateResult {
	pub count: u64,
	pub total_size: u64,
}

impl AggregateResult {
	pub fn new(count: u64, total_size: u64) -> AggregateResult {
		AggregateResult { count, total_size }
	}

	pub fn add_object(&mut self, content_length: u64) {
		self.count += 1;
		self.total_size += content_length;
	}

	pub fn is_empty(&self) -> bool {
		self.count == 0
	}
}

impl Add for AggregateResult {
	type Output = AggregateResult;

	fn add(self, rhs: AggregateResult) -> AggregateResult {
		AggregateResult {
			count: self.count + rhs.count,
			total_size: self.total_size + rhs.total_size,
		}
	}
}

impl AddAssign for AggregateResult {
	fn add_assign(&mut self, rhs: AggregateResult) {
		*self = *self + rhs;
	}
}
// endregion: --- AggregateResult
