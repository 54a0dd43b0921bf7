pub mod config;
pub mod tasks;

use std::path::PathBuf;

use crate::error::Result;

/// 获取 ~/.sill/ 目录路径
pub fn sill_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".sill")
}

/// 键值存储能力：每个 key 对应一个完整序列化的 blob。
///
/// 任务列表整体存在单个 key 下，读写都是全量的。抽象成 trait
/// 是为了让 store 可以在没有真实文件系统的环境下测试。
pub trait Storage {
    /// 读取 key 对应的 blob，不存在返回 `None`
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// 全量写入 key 对应的 blob
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// 文件存储：每个 key 对应 ~/.sill/{key}.json
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        Self { root: sill_dir() }
    }

    /// 指定根目录（测试用）
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// 内存存储（测试用）
#[cfg(test)]
pub struct MemStorage {
    map: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemStorage {
    pub fn new() -> Self {
        Self {
            map: std::cell::RefCell::new(std::collections::HashMap::new()),
        }
    }

    /// 预置 key 内容（模拟已有的持久化数据）
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.map.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    /// 读取当前 blob 原文（断言持久化结果用）
    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl Storage for MemStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::at(dir.path());

        assert!(storage.read("tasks").unwrap().is_none());

        storage.write("tasks", "[]").unwrap();
        assert_eq!(storage.read("tasks").unwrap().as_deref(), Some("[]"));

        // key 落在根目录下的独立文件里
        assert!(dir.path().join("tasks.json").exists());
    }

    #[test]
    fn test_file_storage_creates_root_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("sill");
        let storage = FileStorage::at(&nested);

        storage.write("tasks", "[]").unwrap();
        assert!(nested.join("tasks.json").exists());
    }

    #[test]
    fn test_mem_storage_roundtrip() {
        let storage = MemStorage::new();
        assert!(storage.read("tasks").unwrap().is_none());

        storage.write("tasks", "[1]").unwrap();
        assert_eq!(storage.read("tasks").unwrap().as_deref(), Some("[1]"));
        assert_eq!(storage.raw("tasks").as_deref(), Some("[1]"));
    }
}
