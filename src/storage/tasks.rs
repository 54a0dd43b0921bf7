use serde::{Deserialize, Serialize};

use crate::error::{Result, SillError};

use super::{FileStorage, Storage};

/// 任务列表的存储 key（整个列表序列化为一个 JSON 数组）
pub const TASKS_KEY: &str = "tasks";

/// 任务数据
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 稳定 ID（单调递增，删除后不复用）
    pub id: u64,
    /// 任务文本（已 trim，非空）
    pub text: String,
    /// 是否已完成
    pub completed: bool,
}

/// 任务存储层：加载 / 追加 / 翻转 / 删除。
///
/// 每次操作都完整读出再完整写回，调用之间不保留内存缓存。
/// 列表很短，全量重写比增量补丁省事得多。
pub struct TaskStore<S: Storage> {
    storage: S,
}

impl TaskStore<FileStorage> {
    /// 打开默认的文件存储（~/.sill/tasks.json）
    pub fn open() -> Self {
        Self::with_storage(FileStorage::new())
    }
}

impl<S: Storage> TaskStore<S> {
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// 加载任务列表。
    ///
    /// 数据缺失或无法解析时按约定返回空列表。这是刻意的默认值，
    /// 不是吞掉的异常：首次启动和损坏的 blob 都从空列表重新开始。
    pub fn list(&self) -> Vec<Task> {
        match self.storage.read(TASKS_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// 追加任务。纯空白输入是 no-op，返回 `None`。
    pub fn add(&self, text: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut tasks = self.list();
        let task = Task {
            id: next_id(&tasks),
            text: text.to_string(),
            completed: false,
        };
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(Some(task))
    }

    /// 翻转指定任务的完成状态，返回更新后的任务
    pub fn toggle(&self, id: u64) -> Result<Task> {
        let mut tasks = self.list();
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Err(SillError::not_found(format!("task {}", id)));
        };
        task.completed = !task.completed;
        let updated = task.clone();
        self.save(&tasks)?;
        Ok(updated)
    }

    /// 删除指定任务，返回被删除的任务
    pub fn delete(&self, id: u64) -> Result<Task> {
        let mut tasks = self.list();
        let Some(pos) = tasks.iter().position(|t| t.id == id) else {
            return Err(SillError::not_found(format!("task {}", id)));
        };
        let removed = tasks.remove(pos);
        self.save(&tasks)?;
        Ok(removed)
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let raw = serde_json::to_string(tasks)?;
        self.storage.write(TASKS_KEY, &raw)
    }
}

/// 下一个任务 ID：现有最大 ID + 1。
/// 从列表本身恢复，blob 里不需要单独的计数器槽位。
fn next_id(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn empty_store() -> TaskStore<MemStorage> {
        TaskStore::with_storage(MemStorage::new())
    }

    #[test]
    fn test_add_and_list() {
        let store = empty_store();
        let task = store.add("buy milk").unwrap().unwrap();

        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);

        let tasks = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], task);
    }

    #[test]
    fn test_add_trims_text() {
        let store = empty_store();
        let task = store.add("  water plants  ").unwrap().unwrap();
        assert_eq!(task.text, "water plants");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let store = empty_store();
        assert!(store.add("").unwrap().is_none());
        assert!(store.add("   \t  ").unwrap().is_none());
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let store = empty_store();
        let task = store.add("stretch").unwrap().unwrap();

        assert!(store.toggle(task.id).unwrap().completed);
        assert!(!store.toggle(task.id).unwrap().completed);
    }

    #[test]
    fn test_delete_preserves_order() {
        let store = empty_store();
        let a = store.add("A").unwrap().unwrap();
        store.add("B").unwrap().unwrap();

        store.delete(a.id).unwrap();

        let tasks = store.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "B");
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let store = empty_store();
        store.add("only one").unwrap();

        assert!(matches!(store.toggle(99), Err(SillError::NotFound(_))));
        assert!(matches!(store.delete(99), Err(SillError::NotFound(_))));
    }

    #[test]
    fn test_ids_stay_stable_after_delete() {
        let store = empty_store();
        let a = store.add("A").unwrap().unwrap();
        let b = store.add("B").unwrap().unwrap();
        let c = store.add("C").unwrap().unwrap();
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));

        // 删掉最前面的任务，后面的 ID 不动
        store.delete(a.id).unwrap();
        let tasks = store.list();
        assert_eq!(tasks[0].id, b.id);
        assert_eq!(tasks[1].id, c.id);

        // 新任务拿到的是 max+1，而不是被释放的 1
        let d = store.add("D").unwrap().unwrap();
        assert_eq!(d.id, 4);
    }

    #[test]
    fn test_missing_or_garbage_blob_is_empty_list() {
        let store = empty_store();
        assert!(store.list().is_empty());

        let store = TaskStore::with_storage(MemStorage::with_entry(TASKS_KEY, "not json at all"));
        assert!(store.list().is_empty());

        // 类型对不上也按空列表处理
        let store = TaskStore::with_storage(MemStorage::with_entry(TASKS_KEY, "{\"text\":1}"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_reload_reproduces_sequence_and_flags() {
        let storage = MemStorage::new();
        let store = TaskStore::with_storage(storage);
        store.add("A").unwrap();
        let b = store.add("B").unwrap().unwrap();
        store.add("C").unwrap();
        store.toggle(b.id).unwrap();

        // 用同一份 blob 重新打开，顺序和完成标记都要复原
        let raw = store.storage.raw(TASKS_KEY).unwrap();
        let reloaded = TaskStore::with_storage(MemStorage::with_entry(TASKS_KEY, &raw));
        let tasks = reloaded.list();

        let texts: Vec<&str> = tasks.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["A", "B", "C"]);
        assert_eq!(
            tasks.iter().map(|t| t.completed).collect::<Vec<_>>(),
            [false, true, false]
        );
    }

    #[test]
    fn test_matches_reference_model() {
        // 参照模型：对一串操作逐一模拟，最终状态必须和 store 一致
        let store = empty_store();
        let mut model: Vec<(String, bool)> = Vec::new();
        let mut ids: Vec<u64> = Vec::new();

        for text in ["email", "  ", "groceries", "run", ""] {
            if let Some(task) = store.add(text).unwrap() {
                model.push((task.text.clone(), false));
                ids.push(task.id);
            }
        }

        store.toggle(ids[1]).unwrap();
        model[1].1 = true;

        store.delete(ids[0]).unwrap();
        model.remove(0);
        ids.remove(0);

        store.toggle(ids[1]).unwrap();
        model[1].1 = true;

        let got: Vec<(String, bool)> = store
            .list()
            .into_iter()
            .map(|t| (t.text, t.completed))
            .collect();
        assert_eq!(got, model);
    }
}
