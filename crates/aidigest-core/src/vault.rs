use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::CoreError;

const LOCK_FILE: &str = ".ai-digest.lock";

/// A note resolved inside the vault. Items expose the vault-relative path
/// and the base name (file stem) used as the digest section heading.
#[derive(Debug, Clone)]
pub struct NoteItem {
    pub path: String,
    pub base_name: String,
    abs: PathBuf,
}

/// The content store: a directory of notes addressed by vault-relative path.
///
/// Reads never mutate source notes; the only write surface is
/// [`Vault::write_note`], which replaces the target atomically.
pub struct Vault {
    root: PathBuf,
}

impl Vault {
    /// Open the vault rooted at the given directory.
    pub fn open(root: &Path) -> Result<Self, CoreError> {
        if !root.is_dir() {
            return Err(CoreError::Config(format!(
                "vault root is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a note by vault-relative path.
    ///
    /// Returns `None` when the path does not name a readable note: missing
    /// entries, directories, and paths that escape the vault all miss.
    pub fn item(&self, path: &str) -> Option<NoteItem> {
        let abs = self.resolve(path).ok()?;
        if !abs.is_file() {
            return None;
        }
        let base_name = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path)
            .to_string();
        Some(NoteItem {
            path: path.to_string(),
            base_name,
            abs,
        })
    }

    /// Read a note's full text content.
    pub fn read(&self, item: &NoteItem) -> Result<String, CoreError> {
        let bytes = fs::read(&item.abs)?;
        String::from_utf8(bytes).map_err(CoreError::Utf8)
    }

    /// Create or fully replace a note at the given vault-relative path.
    ///
    /// The content is written to a sibling temp file and renamed into place,
    /// so a failed run leaves any previous note untouched.
    pub fn write_note(&self, path: &str, content: &str) -> Result<NoteItem, CoreError> {
        let abs = self.resolve(path)?;
        if let Some(parent) = abs.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = abs.clone();
        tmp.set_extension("md.tmp");
        fs::write(&tmp, content)?;
        if let Err(e) = fs::rename(&tmp, &abs) {
            let _ = fs::remove_file(&tmp);
            return Err(CoreError::Io(e));
        }

        let base_name = Path::new(path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(path)
            .to_string();
        Ok(NoteItem {
            path: path.to_string(),
            base_name,
            abs,
        })
    }

    /// Acquire the single in-flight run guard for this vault.
    ///
    /// Fails with [`CoreError::Locked`] when another run holds it.
    pub fn lock_run(&self) -> Result<RunLock, CoreError> {
        let file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.root.join(LOCK_FILE))?;
        match fs2::FileExt::try_lock_exclusive(&file) {
            Ok(()) => Ok(RunLock { file }),
            Err(e) if e.kind() == fs2::lock_contended_error().kind() => Err(CoreError::Locked),
            Err(e) => Err(CoreError::Io(e)),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, CoreError> {
        let rel = Path::new(path);
        if rel.is_absolute()
            || rel
                .components()
                .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Err(CoreError::OutsideVault(path.to_string()));
        }
        Ok(self.root.join(rel))
    }
}

/// Holds the exclusive run lock; released when dropped.
pub struct RunLock {
    file: fs::File,
}

impl Drop for RunLock {
    fn drop(&mut self) {
        let _ = fs2::FileExt::unlock(&self.file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn vault_with(notes: &[(&str, &str)]) -> (TempDir, Vault) {
        let tmp = TempDir::new().unwrap();
        for (path, content) in notes {
            let abs = tmp.path().join(path);
            if let Some(parent) = abs.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(abs, content).unwrap();
        }
        let vault = Vault::open(tmp.path()).unwrap();
        (tmp, vault)
    }

    #[test]
    fn test_open_rejects_non_directory() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("note.md");
        fs::write(&file, "x").unwrap();
        assert!(Vault::open(&file).is_err());
    }

    #[test]
    fn test_item_resolves_and_reads() {
        let (_tmp, vault) = vault_with(&[("notes/A.md", "hello")]);
        let item = vault.item("notes/A.md").unwrap();
        assert_eq!(item.path, "notes/A.md");
        assert_eq!(item.base_name, "A");
        assert_eq!(vault.read(&item).unwrap(), "hello");
    }

    #[test]
    fn test_missing_and_directory_paths_miss() {
        let (_tmp, vault) = vault_with(&[("notes/A.md", "hello")]);
        assert!(vault.item("missing.md").is_none());
        assert!(vault.item("notes").is_none());
    }

    #[test]
    fn test_escaping_paths_miss() {
        let (_tmp, vault) = vault_with(&[("A.md", "hello")]);
        assert!(vault.item("../A.md").is_none());
        assert!(vault.item("/etc/passwd").is_none());
    }

    #[test]
    fn test_write_note_creates_then_replaces() {
        let (_tmp, vault) = vault_with(&[]);
        vault.write_note("ai-digest.md", "first").unwrap();
        let item = vault.item("ai-digest.md").unwrap();
        assert_eq!(vault.read(&item).unwrap(), "first");

        vault.write_note("ai-digest.md", "second").unwrap();
        assert_eq!(vault.read(&item).unwrap(), "second");
    }

    #[test]
    fn test_write_note_leaves_no_temp_file() {
        let (tmp, vault) = vault_with(&[]);
        vault.write_note("ai-digest.md", "content").unwrap();
        let entries: Vec<_> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["ai-digest.md"]);
    }

    #[test]
    fn test_write_note_rejects_escape() {
        let (_tmp, vault) = vault_with(&[]);
        assert!(matches!(
            vault.write_note("../out.md", "x"),
            Err(CoreError::OutsideVault(_))
        ));
    }

    #[test]
    fn test_read_rejects_non_utf8() {
        let (tmp, vault) = vault_with(&[]);
        fs::write(tmp.path().join("bin.md"), [0xff, 0xfe, 0x00]).unwrap();
        let item = vault.item("bin.md").unwrap();
        assert!(matches!(vault.read(&item), Err(CoreError::Utf8(_))));
    }

    #[test]
    fn test_second_lock_fails_while_held() {
        let (_tmp, vault) = vault_with(&[]);
        let guard = vault.lock_run().unwrap();
        assert!(matches!(vault.lock_run(), Err(CoreError::Locked)));
        drop(guard);
        assert!(vault.lock_run().is_ok());
    }
}
