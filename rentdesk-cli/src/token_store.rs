use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use shared::ClientConfig;
use shared::session::{StoreError, TokenStore};
use tracing::debug;

/// Bearer token kept in a single file, readable by the owner only.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `RENTDESK_TOKEN_FILE`, or `<config dir>/rentdesk/<token_storage_key>`.
    pub fn for_config(config: &ClientConfig) -> Self {
        Self::new(token_path(
            env::var_os("RENTDESK_TOKEN_FILE").map(PathBuf::from),
            &config.token_storage_key,
        ))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn token_path(explicit: Option<PathBuf>, key: &str) -> PathBuf {
    explicit.unwrap_or_else(|| {
        BaseDirs::new().map_or_else(
            || PathBuf::from(format!("./rentdesk.{key}")),
            |dirs| dirs.config_dir().join("rentdesk").join(key),
        )
    })
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                StoreError::Unavailable(format!("{}: {err}", parent.display()))
            })?;
        }
        fs::write(&self.path, token)
            .map_err(|err| StoreError::Write(format!("{}: {err}", self.path.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))
                .map_err(|err| StoreError::Write(format!("{}: {err}", self.path.display())))?;
        }
        debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!(path = %self.path.display(), "token removed"),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => debug!(path = %self.path.display(), error = %err, "failed to remove token"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_load_clear() {
        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested").join("token"));

        assert_eq!(store.load(), None);
        store.save("a.b.c").unwrap();
        assert_eq!(store.load().as_deref(), Some("a.b.c"));

        store.clear();
        store.clear();
        assert_eq!(store.load(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn token_file_is_named_after_the_storage_key() {
        let path = token_path(None, "staging-token");
        assert_eq!(path.file_name().and_then(|name| name.to_str()), Some("staging-token"));

        let explicit = PathBuf::from("/tmp/explicit-token");
        assert_eq!(token_path(Some(explicit.clone()), "staging-token"), explicit);
    }

    #[cfg(unix)]
    #[test]
    fn token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileTokenStore::new(dir.path().join("token"));
        store.save("a.b.c").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
