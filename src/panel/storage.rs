//! # 文件访问抽象模块
//!
//! ## 设计思路
//!
//! 面板提取只需要三种文件操作：查询体积（兼做存在性检查）、读取、写入。
//! 将其抽象为 `PanelStorage`，生产环境使用 `LocalStorage`，
//! 测试使用 `MemoryStorage`，无需在磁盘上准备真实文件。
//!
//! ## 实现思路
//!
//! - 每次调用内部打开并关闭文件句柄，不跨调用持有资源。
//! - `file_len` 返回 `Ok(None)` 表示文件不存在，由加载阶段映射为 `NotFound`。
//! - `MemoryStorage` 用 `Mutex<HashMap>` 保存文件，锁中毒映射为 `FileSystem` 错误。

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::PanelError;

/// 面板提取所需的文件访问能力。
pub trait PanelStorage {
    /// 返回文件字节数；文件不存在时返回 `Ok(None)`。
    fn file_len(&self, path: &Path) -> Result<Option<u64>, PanelError>;

    fn read(&self, path: &Path) -> Result<Vec<u8>, PanelError>;

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), PanelError>;
}

/// 基于本地文件系统的实现。
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStorage;

impl PanelStorage for LocalStorage {
    fn file_len(&self, path: &Path) -> Result<Option<u64>, PanelError> {
        match std::fs::metadata(path) {
            Ok(metadata) => Ok(Some(metadata.len())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PanelError::FileSystem(format!(
                "cannot stat {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, PanelError> {
        std::fs::read(path)
            .map_err(|e| PanelError::FileSystem(format!("cannot read {}: {}", path.display(), e)))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), PanelError> {
        std::fs::write(path, bytes)
            .map_err(|e| PanelError::FileSystem(format!("cannot write {}: {}", path.display(), e)))
    }
}

/// 内存文件表实现，主要用于测试。
#[derive(Debug, Default)]
pub struct MemoryStorage {
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个文件。
    pub fn insert(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Result<(), PanelError> {
        self.lock()?.insert(path.into(), bytes);
        Ok(())
    }

    pub fn contains(&self, path: &Path) -> Result<bool, PanelError> {
        Ok(self.lock()?.contains_key(path))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<PathBuf, Vec<u8>>>, PanelError> {
        self.files
            .lock()
            .map_err(|_| PanelError::FileSystem("memory storage lock poisoned".to_string()))
    }
}

impl PanelStorage for MemoryStorage {
    fn file_len(&self, path: &Path) -> Result<Option<u64>, PanelError> {
        Ok(self.lock()?.get(path).map(|bytes| bytes.len() as u64))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>, PanelError> {
        self.lock()?
            .get(path)
            .cloned()
            .ok_or_else(|| PanelError::FileSystem(format!("cannot read {}: no such file", path.display())))
    }

    fn write(&self, path: &Path, bytes: &[u8]) -> Result<(), PanelError> {
        self.lock()?.insert(path.to_path_buf(), bytes.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_storage_reports_missing_file_as_none() {
        let dir = tempfile::tempdir().expect("tempdir failed");

        let len = LocalStorage.file_len(&dir.path().join("missing.png")).expect("stat failed");

        assert_eq!(len, None);
    }

    #[test]
    fn local_storage_write_then_read_back() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("panel.png");

        LocalStorage.write(&path, b"panel-bytes").expect("write failed");

        assert_eq!(LocalStorage.file_len(&path).expect("stat failed"), Some(11));
        assert_eq!(LocalStorage.read(&path).expect("read failed"), b"panel-bytes");
    }

    #[test]
    fn local_storage_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().expect("tempdir failed");
        let path = dir.path().join("no-such-dir").join("panel.png");

        assert!(matches!(
            LocalStorage.write(&path, b"x"),
            Err(PanelError::FileSystem(_))
        ));
    }

    #[test]
    fn memory_storage_tracks_inserted_and_written_files() {
        let storage = MemoryStorage::new();
        storage.insert("a.png", vec![1, 2, 3]).expect("insert failed");
        storage.write(Path::new("b.png"), &[4]).expect("write failed");

        assert_eq!(storage.file_len(Path::new("a.png")).expect("stat"), Some(3));
        assert_eq!(storage.read(Path::new("b.png")).expect("read"), vec![4]);
        assert!(!storage.contains(Path::new("c.png")).expect("contains"));
        assert!(matches!(
            storage.read(Path::new("c.png")),
            Err(PanelError::FileSystem(_))
        ));
    }
}
