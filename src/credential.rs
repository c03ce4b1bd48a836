// ESV API credential handling.
// Resolves the token from the command line, environment or token file.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, VerseError};

/// Environment variable consulted when no token is passed on the command line.
pub const TOKEN_ENV: &str = "ESV_API_TOKEN";

/// Anything this short cannot be an ESV token (they are 40 hex characters).
const MIN_TOKEN_LEN: usize = 11;

/// An ESV API token. Never printed: `Debug` is redacted and there is no `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Validate and wrap a token string.
    pub fn new(token: &str) -> Result<Self> {
        let token = token.trim();
        if token.len() < MIN_TOKEN_LEN {
            return Err(VerseError::InvalidToken);
        }
        Ok(Self(token.to_string()))
    }

    /// The raw token, for building the request header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(<redacted>)")
    }
}

/// Pick the token to use for this run.
///
/// A token given on the command line replaces the stored one. Otherwise
/// `env_token` (from `ESV_API_TOKEN`) is used as-is, then the token file.
pub fn resolve(supplied: Option<&str>, env_token: Option<&str>, path: &Path) -> Result<ApiToken> {
    if let Some(supplied) = supplied {
        let token = ApiToken::new(supplied)?;
        save(path, &token)?;
        log::info!("Saved ESV API token to {}", path.display());
        return Ok(token);
    }

    if let Some(env_token) = env_token.filter(|t| !t.trim().is_empty()) {
        log::debug!("Using ESV API token from {}", TOKEN_ENV);
        return ApiToken::new(env_token);
    }

    match load(path)? {
        Some(token) => {
            log::debug!("Loaded ESV API token from {}", path.display());
            Ok(token)
        }
        None => Err(VerseError::MissingToken),
    }
}

/// Read the stored token, if there is one.
pub fn load(path: &Path) -> Result<Option<ApiToken>> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(None),
        Ok(contents) => ApiToken::new(&contents).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Store the token, readable only by the current user where supported.
pub fn save(path: &Path, token: &ApiToken) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    write_private(path, token.expose().as_bytes())?;
    Ok(())
}

#[cfg(unix)]
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // mode() only applies on creation; tighten an existing file too.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(not(unix))]
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}
