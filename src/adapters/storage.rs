use crate::domain::ports::Storage;
use crate::utils::error::{CdmError, Result};
use std::path::{Component, Path, PathBuf};

/// Resource name used when the CLI is given no input.
pub const DEFAULT_RESOURCE: &str = "golden-schema.json";

const BUNDLED: &[(&str, &str)] = &[(
    DEFAULT_RESOURCE,
    include_str!("../../resources/golden-schema.json"),
)];

/// Filesystem storage rooted at `base_path`. Absolute paths ignore the root.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn exists(&self, path: &str) -> bool {
        tokio::fs::try_exists(self.resolve(path))
            .await
            .unwrap_or(false)
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let data = tokio::fs::read(self.resolve(path)).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }
}

/// Named Golden Schema resources: an optional directory on disk, then the
/// documents compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct ResourceStorage {
    dir: Option<PathBuf>,
}

impl ResourceStorage {
    pub fn bundled() -> Self {
        Self { dir: None }
    }

    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: Some(dir.as_ref().to_path_buf()),
        }
    }

    pub fn bundled_names() -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }

    fn embedded(name: &str) -> Option<&'static str> {
        let name = name.trim_start_matches('/');
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, content)| *content)
    }

    /// Only plain relative names resolve; `..` or absolute components never leave `dir`.
    async fn on_disk(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name.trim_start_matches('/'));
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            tracing::warn!("Rejected resource name outside the resources directory: {}", name);
            return None;
        }

        let path = self.dir.as_ref()?.join(relative);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => Some(path),
            _ => None,
        }
    }
}

impl Storage for ResourceStorage {
    async fn exists(&self, path: &str) -> bool {
        self.on_disk(path).await.is_some() || Self::embedded(path).is_some()
    }

    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        if let Some(file) = self.on_disk(path).await {
            tracing::debug!("Reading resource {} from {}", path, file.display());
            return Ok(tokio::fs::read(file).await?);
        }

        Self::embedded(path)
            .map(|content| content.as_bytes().to_vec())
            .ok_or_else(|| CdmError::ConfigMissing {
                message: format!("Golden Schema resource not found: {}", path),
            })
    }

    async fn write_file(&self, path: &str, _data: &[u8]) -> Result<()> {
        Err(CdmError::ConfigError {
            message: format!("Resources are read-only, cannot write {}", path),
        })
    }
}
