//! Session cookie settings read from the environment.
//!
//! Debug builds fall back to permissive defaults with a warning; release
//! builds insist on every toggle being present and valid. The signing key is
//! shared with the authentication service that issues the cookies, so it is
//! always loaded from a file outside debug builds.

use std::path::{Path, PathBuf};
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const DEFAULT_TTL_HOURS: u64 = 2;

pub const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
pub const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
pub const SAMESITE_ENV: &str = "SESSION_SAMESITE";
pub const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
pub const TTL_HOURS_ENV: &str = "SESSION_TTL_HOURS";

const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";
const TTL_EXPECTED: &str = "a positive whole number of hours";

/// Build flavour used to decide how strict validation is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Mode matching `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated cookie session settings.
pub struct SessionSettings {
    pub key: Key,
    pub cookie_secure: bool,
    pub same_site: SameSite,
    /// Lifetime of the persistent session cookie.
    pub ttl: Duration,
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Read and validate the session settings.
///
/// # Examples
///
/// ```rust
/// use mockable::MockEnv;
/// use storefront::inbound::http::session_config::{BuildMode, session_settings_from_env};
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
///
/// let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
/// assert!(settings.cookie_secure);
/// assert_eq!(settings.ttl.as_secs(), 2 * 60 * 60);
/// ```
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let reader = EnvReader { env, mode };
    let cookie_secure = reader.flag(COOKIE_SECURE_ENV, true)?;
    let same_site = reader.same_site(cookie_secure)?;
    let allow_ephemeral = reader.flag(ALLOW_EPHEMERAL_ENV, false)?;
    if allow_ephemeral && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let ttl = reader.ttl()?;
    let key = reader.key(allow_ephemeral)?;
    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
        ttl,
    })
}

struct EnvReader<'a, E> {
    env: &'a E,
    mode: BuildMode,
}

impl<E: Env> EnvReader<'_, E> {
    /// Missing or malformed values fall back to `default` in debug builds
    /// and fail in release builds.
    fn lenient<T>(
        &self,
        name: &'static str,
        expected: &'static str,
        default: T,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Result<T, SessionConfigError> {
        let Some(value) = self.env.string(name) else {
            if self.mode.is_debug() {
                warn!(variable = name, "session setting not set; using debug default");
                return Ok(default);
            }
            return Err(SessionConfigError::MissingEnv { name });
        };
        match parse(&value) {
            Some(parsed) => Ok(parsed),
            None if self.mode.is_debug() => {
                warn!(
                    variable = name,
                    value = %value,
                    "invalid session setting; using debug default"
                );
                Ok(default)
            }
            None => Err(SessionConfigError::InvalidEnv {
                name,
                value,
                expected,
            }),
        }
    }

    fn flag(&self, name: &'static str, default: bool) -> Result<bool, SessionConfigError> {
        self.lenient(name, BOOL_EXPECTED, default, parse_bool)
    }

    fn same_site(&self, cookie_secure: bool) -> Result<SameSite, SessionConfigError> {
        let default = if self.mode.is_debug() {
            SameSite::Lax
        } else {
            SameSite::Strict
        };
        let same_site = self.lenient(SAMESITE_ENV, SAMESITE_EXPECTED, default, parse_same_site)?;
        if same_site == SameSite::None && !cookie_secure {
            if !self.mode.is_debug() {
                return Err(SessionConfigError::InsecureSameSiteNone);
            }
            warn!("SESSION_SAMESITE=None without a secure cookie; browsers may drop it");
        }
        Ok(same_site)
    }

    /// The lifetime is optional in every build mode.
    fn ttl(&self) -> Result<Duration, SessionConfigError> {
        let Some(value) = self.env.string(TTL_HOURS_ENV) else {
            return Ok(Duration::from_secs(DEFAULT_TTL_HOURS * 3600));
        };
        match value.trim().parse::<u64>() {
            Ok(hours) if hours > 0 => Ok(Duration::from_secs(hours.saturating_mul(3600))),
            _ => Err(SessionConfigError::InvalidEnv {
                name: TTL_HOURS_ENV,
                value,
                expected: TTL_EXPECTED,
            }),
        }
    }

    fn key(&self, allow_ephemeral: bool) -> Result<Key, SessionConfigError> {
        let path = PathBuf::from(
            self.env
                .string(KEY_FILE_ENV)
                .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
        );
        match read_key_file(&path) {
            Ok(mut bytes) => {
                let length = bytes.len();
                let too_short = length < SESSION_KEY_MIN_LEN;
                if too_short && !self.mode.is_debug() {
                    bytes.zeroize();
                    return Err(SessionConfigError::KeyTooShort {
                        path,
                        length,
                        min_len: SESSION_KEY_MIN_LEN,
                    });
                }
                let key = Key::derive_from(&bytes);
                bytes.zeroize();
                Ok(key)
            }
            Err(source) if self.mode.is_debug() || allow_ephemeral => {
                warn!(path = %path.display(), error = %source, "using a temporary session key");
                Ok(Key::generate())
            }
            Err(source) => Err(SessionConfigError::KeyRead { path, source }),
        }
    }
}

fn read_key_file(path: &Path) -> std::io::Result<Vec<u8>> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "session key path has no file name")
    })?;
    Dir::open_ambient_dir(parent, ambient_authority())?.read(file_name)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

fn parse_same_site(value: &str) -> Option<SameSite> {
    match value.trim().to_ascii_lowercase().as_str() {
        "lax" => Some(SameSite::Lax),
        "strict" => Some(SameSite::Strict),
        "none" => Some(SameSite::None),
        _ => None,
    }
}
