//! Global constants

use std::time::Duration;

/// MediaStore caps `MaxResults` at 500 per ListItems page.
pub const MAX_PAGE_SIZE: i32 = 500;
pub const DEFAULT_PAGE_SIZE: i32 = MAX_PAGE_SIZE;

/// Delay before each directory-level listing call.
pub const DEFAULT_LIST_DELAY: Duration = Duration::from_millis(100);

pub const DEFAULT_DELETE_BATCH_SIZE: usize = 100;
pub const DEFAULT_DELETE_COOLDOWN: Duration = Duration::from_secs(1);

pub const PROBE_MAX_RESULTS: i32 = 1;

pub const PATH_SEPARATOR: &str = "/";
