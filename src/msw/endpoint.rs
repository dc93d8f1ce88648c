use crate::Error;
use regex::Regex;

/// Position of the region label in a MediaStore data host,
/// e.g. `xxxx.data.mediastore.us-east-1.amazonaws.com`.
const REGION_LABEL_IDX: usize = 3;

// region:    Endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
	url: String,
	host: String,
	region: String,
}

impl Endpoint {
	pub fn url(&self) -> &str {
		&self.url
	}
	pub fn host(&self) -> &str {
		&self.host
	}
	pub fn region(&self) -> &str {
		&self.region
	}
}

/// Builders
impl Endpoint {
	/// Parse the endpoint url. The scheme is optional (defaults to https), port and path are ignored
	/// for the region derivation.
	pub fn parse(url: &str) -> Result<Self, Error> {
		let rx = Regex::new(r"^(?:([a-zA-Z][a-zA-Z0-9+.-]*)://)?([^:/\s]+)").expect("Invalid Endpoint parsing regex");

		let caps = rx.captures(url.trim()).ok_or_else(|| Error::InvalidEndpoint(url.to_string()))?;
		let host = caps.get(2).map(|m| m.as_str()).unwrap_or_default();

		let region = host
			.split('.')
			.nth(REGION_LABEL_IDX)
			.filter(|r| !r.is_empty())
			.ok_or_else(|| Error::InvalidEndpoint(url.to_string()))?;

		let url = match caps.get(1) {
			Some(_) => url.trim().to_string(),
			None => format!("https://{}", url.trim()),
		};

		Ok(Endpoint {
			url,
			host: host.to_string(),
			region: region.to_string(),
		})
	}
}
// endregion: Endpoint
