//! AWS MediaStore Data API Wrapper

// region:    --- Modules

// -- Sub-modules
mod client;
mod endpoint;
mod item;

pub mod cred;

// -- Re-exports
pub use self::client::MediaStoreClient;
pub use self::cred::{client_from_cred, load_store_cred, CredArgs, StoreCred};
pub use self::endpoint::Endpoint;
pub use self::item::{child_path, AggregateResult, Entry, EntryType, ItemPage, ObjectRef};

// -- Imports
use crate::consts::PROBE_MAX_RESULTS;
use crate::Result;
use async_trait::async_trait;
use globset::{Glob, GlobSet, GlobSetBuilder};

// endregion: --- Modules

// region:    --- StoreClient

/// The remote store primitives the engine is built on.
#[async_trait]
pub trait StoreClient: Send + Sync {
	/// One page of the direct children of `path`.
	async fn list_items(&self, path: &str, max_results: i32, next_token: Option<String>) -> Result<ItemPage>;

	/// Delete a single object by its exact path.
	async fn delete_object(&self, path: &str) -> Result<()>;

	/// Minimal listing used only to validate a credential/endpoint pair.
	async fn probe(&self) -> Result<ItemPage> {
		self.list_items("", PROBE_MAX_RESULTS, None).await
	}
}

// endregion: --- StoreClient

// region:    --- Includes/Excludes Utils

/// Include/exclude glob rules applied to object paths.
#[derive(Debug, Default, Clone)]
pub struct PathFilter {
	includes: Option<GlobSet>,
	excludes: Option<GlobSet>,
}

/// Inclusion/Exclusion result
enum Inex {
	Include,
	ExcludeInExclude,
	ExcludeNotInInclude,
}

impl PathFilter {
	pub fn new(includes: &[&str], excludes: &[&str]) -> Result<PathFilter> {
		Ok(PathFilter {
			includes: build_globset(includes)?,
			excludes: build_globset(excludes)?,
		})
	}

	pub fn is_empty(&self) -> bool {
		self.includes.is_none() && self.excludes.is_none()
	}

	pub fn accept(&self, path: &str) -> bool {
		matches!(self.compute_inex(path), Inex::Include)
	}

	fn compute_inex(&self, path: &str) -> Inex {
		// Note: Those match_... will have 3 states, None (if no rule), Some(true), Some(false)
		let match_include = self.includes.as_ref().map(|gs| gs.is_match(path));
		let match_exclude = self.excludes.as_ref().map(|gs| gs.is_match(path));

		match (match_include, match_exclude) {
			// if pass the include gate (no include rule or matched it) and not in eventual exclude
			(None | Some(true), None | Some(false)) => Inex::Include,
			// passed the include gate, but is explicity excluded
			(None | Some(true), Some(true)) => Inex::ExcludeInExclude,
			// Did not pass the include gate
			(Some(false), _) => Inex::ExcludeNotInInclude,
		}
	}
}

fn build_globset(globs: &[&str]) -> Result<Option<GlobSet>> {
	if globs.is_empty() {
		return Ok(None);
	}
	let mut builder = GlobSetBuilder::new();
	for glob in globs {
		builder.add(Glob::new(glob)?);
	}
	Ok(Some(builder.build()?))
}

// endregion: --- Includes/Excludes Utils

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_path_filter_empty_accepts_all() {
		let filter = PathFilter::default();
		assert!(filter.is_empty());
		assert!(filter.accept("root/a.txt"));
	}

	#[test]
	fn test_path_filter_include_exclude() -> Result<()> {
		let filter = PathFilter::new(&["**/*.ts", "**/*.m3u8"], &["**/tmp/**"])?;
		assert!(filter.accept("live/stream/seg-001.ts"));
		assert!(filter.accept("live/index.m3u8"));
		assert!(!filter.accept("live/poster.jpg"));
		assert!(!filter.accept("live/tmp/seg-002.ts"));
		Ok(())
	}
}
