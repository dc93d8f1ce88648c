use super::lister::list_entries_throttled;
use super::throttle::Throttle;
use crate::msw::{AggregateResult, Entry, ObjectRef, StoreClient};
use crate::{Error, Result};
use tracing::{debug, warn};

// region:    --- Walk Types

/// Result of a traversal, with the subtrees that could not be listed and were left out.
#[derive(Debug)]
pub struct Walk<T> {
	pub value: T,
	pub skipped: Vec<SkippedPath>,
}

impl<T> Walk<T> {
	pub fn is_complete(&self) -> bool {
		self.skipped.is_empty()
	}
}

#[derive(Debug)]
pub struct SkippedPath {
	pub path: String,
	pub error: Error,
}

/// How a traversal folds the objects of a level and the results of its sub folders.
trait Accumulator: Default {
	fn add_object(&mut self, parent: &str, entry: &Entry);
	fn merge_child(&mut self, child: Self);
}

impl Accumulator for AggregateResult {
	fn add_object(&mut self, _parent: &str, entry: &Entry) {
		AggregateResult::add_object(self, entry.content_length.unwrap_or_default());
	}

	/// An empty sub folder (or one that failed) contributes nothing.
	fn merge_child(&mut self, child: Self) {
		if !child.is_empty() {
			*self += child;
		}
	}
}

impl Accumulator for Vec<ObjectRef> {
	fn add_object(&mut self, parent: &str, entry: &Entry) {
		self.push(ObjectRef::from_entry(parent, entry));
	}

	fn merge_child(&mut self, child: Self) {
		self.extend(child);
	}
}

// endregion: --- Walk Types

// region:    --- TreeWalker

pub struct TreeWalker<'a> {
	client: &'a dyn StoreClient,
	page_size: i32,
	throttle: &'a Throttle,
}

impl<'a> TreeWalker<'a> {
	pub fn new(client: &'a dyn StoreClient, page_size: i32, throttle: &'a Throttle) -> TreeWalker<'a> {
		TreeWalker {
			client,
			page_size,
			throttle,
		}
	}
}

/// Typed traversals. A failure listing `path` itself is returned as error,
/// failures below it drop the failing subtree and are reported in `Walk::skipped`.
impl TreeWalker<'_> {
	pub async fn try_aggregate(&self, path: &str) -> Result<Walk<AggregateResult>> {
		self.walk(path).await
	}

	pub async fn try_collect(&self, path: &str) -> Result<Walk<Vec<ObjectRef>>> {
		self.walk(path).await
	}
}

/// Compatibility traversals, any failure at `path` gives the empty result.
impl TreeWalker<'_> {
	pub async fn aggregate(&self, path: &str) -> AggregateResult {
		match self.try_aggregate(path).await {
			Ok(walk) => walk.value,
			Err(err) => {
				warn!(path, %err, "aggregate failed, reporting zero");
				AggregateResult::default()
			}
		}
	}

	pub async fn collect(&self, path: &str) -> Vec<ObjectRef> {
		match self.try_collect(path).await {
			Ok(walk) => walk.value,
			Err(err) => {
				warn!(path, %err, "collect failed, reporting no objects");
				Vec::new()
			}
		}
	}
}

struct Frame<A> {
	path: String,
	entries: std::vec::IntoIter<Entry>,
	acc: A,
}

impl<A: Accumulator> Frame<A> {
	fn new(path: String, entries: Vec<Entry>) -> Frame<A> {
		Frame {
			path,
			entries: entries.into_iter(),
			acc: A::default(),
		}
	}
}

impl TreeWalker<'_> {
	/// Depth first, with an explicit stack of pending levels. Each level keeps its own accumulator,
	/// merged into its parent when exhausted, so results keep the listing encounter order.
	async fn walk<A: Accumulator>(&self, root: &str) -> Result<Walk<A>> {
		let root_entries = self.list(root).await?;

		let mut stack: Vec<Frame<A>> = vec![Frame::new(root.to_string(), root_entries)];
		let mut skipped: Vec<SkippedPath> = Vec::new();

		while let Some(frame) = stack.last_mut() {
			match frame.entries.next() {
				Some(entry) if entry.is_folder() => {
					let child_path = entry.child_path(&frame.path);
					match self.list(&child_path).await {
						Ok(entries) => stack.push(Frame::new(child_path, entries)),
						Err(error) => {
							warn!(path = %child_path, %error, "subtree skipped");
							skipped.push(SkippedPath {
								path: child_path,
								error,
							});
						}
					}
				}
				Some(entry) => frame.acc.add_object(&frame.path, &entry),
				None => {
					let Some(done) = stack.pop() else { break };
					match stack.last_mut() {
						Some(parent) => parent.acc.merge_child(done.acc),
						None => {
							debug!(path = root, skipped = skipped.len(), "walk done");
							return Ok(Walk {
								value: done.acc,
								skipped,
							});
						}
					}
				}
			}
		}

		Ok(Walk {
			value: A::default(),
			skipped,
		})
	}

	async fn list(&self, path: &str) -> Result<Vec<Entry>> {
		list_entries_throttled(self.client, path, self.page_size, Some(self.throttle)).await
	}
}

// endregion: --- TreeWalker
