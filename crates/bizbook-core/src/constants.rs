/// Prefix for environment variables read into [`crate::config::Settings`].
pub const ENV_PREFIX: &str = "BIZBOOK";

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "config.toml";

/// File extension accepted by the upload pre-check.
pub const VCF_EXTENSION: &str = ".vcf";

/// File-name fragment that also marks an upload as a contact export.
pub const CONTACT_NAME_HINT: &str = "contact";

pub const DEFAULT_LOG_LEVEL: &str = "info";
