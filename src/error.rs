use aws_sdk_mediastoredata::error::SdkError;
use aws_sdk_mediastoredata::operation::delete_object::DeleteObjectError;
use aws_sdk_mediastoredata::operation::list_items::ListItemsError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Not authenticated. Call authenticate with a valid key pair and endpoint first.")]
	NotAuthenticated,

	#[error("Not a valid MediaStore data endpoint '{0}'. Should be format 'https://xxxx.data.mediastore.<region>.amazonaws.com'")]
	InvalidEndpoint(String),

	#[error("Cannot authenticate against '{0}'. Check the key pair and the endpoint.")]
	AuthenticationFailed(String),

	#[error("Bulk delete incomplete, {succeeded} of {total} objects deleted")]
	PartialDelete { succeeded: usize, total: usize },

	#[error("Credential environment variable {0} not found")]
	NoCredentialEnv(String),

	#[error("Credential profile config key {0} not found")]
	NoCredentialConfig(String),

	#[error("No credentials found for profile {0}.")]
	NoCredentialsForProfile(String),

	#[error(
		"No credential found. Provide the following (by order of precedence):
  - Provide '--key-id', '--key-secret' and '--endpoint' arguments
  - Provide '--profile profile_name' with the following MDSTORE_PROFILE_... environments:
    - MDSTORE_PROFILE_profile_name_KEY_ID
    - MDSTORE_PROFILE_profile_name_KEY_SECRET
    - MDSTORE_PROFILE_profile_name_ENDPOINT
  - Provide '--profile profile_name' which should be configured in aws default config files
    (with a 'mediastore_endpoint' key)
  - As a last fallback, use the default environment variables:
    - AWS_ACCESS_KEY_ID
    - AWS_SECRET_ACCESS_KEY
    - MDSTORE_ENDPOINT
  NOTE: '-' characters in profile names will be replaced by '_' for environment names above.
  	"
	)]
	NoCredentialsFound,

	#[error("AWS Service Error. Operation: {0}, Message: {1}")]
	AwsServiceError(&'static str, String), // operation, message

	#[error(transparent)]
	InvalidGlob(#[from] globset::Error),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

/// For better CLI error reporting.
impl From<SdkError<ListItemsError>> for Error {
	fn from(val: SdkError<ListItemsError>) -> Self {
		let se = val.into_service_error();
		Error::AwsServiceError("ListItems", se.to_string())
	}
}

impl From<SdkError<DeleteObjectError>> for Error {
	fn from(val: SdkError<DeleteObjectError>) -> Self {
		let se = val.into_service_error();
		Error::AwsServiceError("DeleteObject", se.to_string())
	}
}
