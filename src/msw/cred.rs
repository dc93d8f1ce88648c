use super::client::MediaStoreClient;
use super::endpoint::Endpoint;
use crate::{Error, Result};
use aws_config::profile::profile_file::ProfileFiles;
use aws_config::profile::Profile;
use aws_sdk_mediastoredata::config::{Builder, Credentials, Region};
use aws_sdk_mediastoredata::Client;
use aws_types::os_shim_internal::{Env, Fs};
use std::env;
use tracing::debug;

// Default environement names (used as last fallback)
const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
const MDSTORE_ENDPOINT: &str = "MDSTORE_ENDPOINT";

// Key of the endpoint in the aws config/credentials profile files.
const PROFILE_ENDPOINT_KEY: &str = "mediastore_endpoint";

#[derive(Debug, Clone)]
pub struct StoreCred {
	pub key_id: String,
	pub key_secret: String,
	pub endpoint: String,
}

/// What the command line provided, all optional.
#[derive(Debug, Default, Clone)]
pub struct CredArgs {
	pub profile: Option<String>,
	pub key_id: Option<String>,
	pub key_secret: Option<String>,
	pub endpoint: Option<String>,
}

enum CredKey {
	Id,
	Secret,
	Endpoint,
}

impl CredKey {
	fn env_part(&self) -> &'static str {
		match self {
			CredKey::Id => "KEY_ID",
			CredKey::Secret => "KEY_SECRET",
			CredKey::Endpoint => "ENDPOINT",
		}
	}
}

/// Build the MediaStore data client bound to the credential, the endpoint, and the region derived from it.
pub fn client_from_cred(cred: StoreCred) -> Result<MediaStoreClient> {
	let StoreCred {
		key_id,
		key_secret,
		endpoint,
	} = cred;

	let endpoint = Endpoint::parse(&endpoint)?;

	let cred = Credentials::new(key_id, key_secret, None, None, "loaded-from-config-or-env");

	let config = Builder::new()
		.credentials_provider(cred)
		.endpoint_url(endpoint.url())
		.region(Region::new(endpoint.region().to_string()))
		.build();

	debug!(endpoint = endpoint.url(), region = endpoint.region(), "mediastore client");

	Ok(MediaStoreClient::from_client(Client::from_conf(config)))
}

/// Load the StoreCred from
/// - The explicit arguments, when key id, secret, and endpoint are all given
/// - If Profile,
///    - first try the MDSTORE_PROFILE_... envs,
///    - then try standard aws config files
/// - Last fallback, the default AWS key envs + MDSTORE_ENDPOINT
/// Explicit arguments always override what was found.
pub async fn load_store_cred(args: CredArgs) -> Result<StoreCred> {
	let CredArgs {
		profile,
		key_id,
		key_secret,
		endpoint,
	} = args;

	let mut cred_result: Option<StoreCred> = match (&key_id, &key_secret, &endpoint) {
		(Some(key_id), Some(key_secret), Some(endpoint)) => Some(StoreCred {
			key_id: key_id.clone(),
			key_secret: key_secret.clone(),
			endpoint: endpoint.clone(),
		}),
		_ => None,
	};

	// -- If not complete args, then, go by profile if specified.
	if cred_result.is_none() {
		if let Some(profile) = &profile {
			cred_result = load_store_cred_from_profile_env(profile).ok();

			if cred_result.is_none() {
				cred_result = load_store_cred_from_aws_profile_configs(profile).await.ok();
			}
		}
	}

	// -- Last fall back default envs
	if cred_result.is_none() {
		cred_result = load_store_cred_from_default_env().ok();
	}

	let mut cred = cred_result.ok_or(Error::NoCredentialsFound)?;

	// -- args take precedence
	if let Some(key_id) = key_id {
		cred.key_id = key_id;
	}
	if let Some(key_secret) = key_secret {
		cred.key_secret = key_secret;
	}
	if let Some(endpoint) = endpoint {
		cred.endpoint = endpoint;
	}

	Ok(cred)
}

/// Attempt to create StoreCred from MDSTORE PROFILE environment variables
/// - `MDSTORE_PROFILE_profile_name_KEY_ID`
/// - `MDSTORE_PROFILE_profile_name_KEY_SECRET`
/// - `MDSTORE_PROFILE_profile_name_ENDPOINT`
fn load_store_cred_from_profile_env(profile: &str) -> Result<StoreCred> {
	let key_id = get_env(&get_env_name(CredKey::Id, profile))?;
	let key_secret = get_env(&get_env_name(CredKey::Secret, profile))?;
	let endpoint = get_env(&get_env_name(CredKey::Endpoint, profile))?;

	Ok(StoreCred {
		key_id,
		key_secret,
		endpoint,
	})
}

async fn load_store_cred_from_aws_profile_configs(profile_str: &str) -> Result<StoreCred> {
	let (fs, ev) = (Fs::real(), Env::default());
	let profiles = aws_config::profile::load(&fs, &ev, &ProfileFiles::default(), None).await;
	if let Ok(profiles) = profiles {
		if let Some(profile) = profiles.get_profile(profile_str) {
			let key_id = get_profile_value(profile, "aws_access_key_id")?;
			let key_secret = get_profile_value(profile, "aws_secret_access_key")?;
			let endpoint = get_profile_value(profile, PROFILE_ENDPOINT_KEY)?;

			return Ok(StoreCred {
				key_id,
				key_secret,
				endpoint,
			});
		}
	}

	Err(Error::NoCredentialsForProfile(profile_str.to_string()))
}

fn load_store_cred_from_default_env() -> Result<StoreCred> {
	let key_id = get_env(AWS_ACCESS_KEY_ID)?;
	let key_secret = get_env(AWS_SECRET_ACCESS_KEY)?;
	let endpoint = get_env(MDSTORE_ENDPOINT)?;

	Ok(StoreCred {
		key_id,
		key_secret,
		endpoint,
	})
}

// region:    Utils
fn get_env_name(key: CredKey, name: &str) -> String {
	let name = name.replace('-', "_");
	format!("MDSTORE_PROFILE_{}_{}", name, key.env_part())
}

fn get_profile_value(profile: &Profile, key: &str) -> Result<String> {
	match profile.get(key) {
		Some(value) => Ok(value.to_string()),
		None => Err(Error::NoCredentialConfig(key.to_string())),
	}
}

fn get_env(name: &str) -> Result<String> {
	match env::var(name) {
		Ok(v) => Ok(v),
		Err(_) => Err(Error::NoCredentialEnv(name.to_string())),
	}
}
// endregion: Utils
