use crate::application::ports::NavigationHistory;
use std::sync::Mutex as StdMutex;

#[derive(Debug)]
struct Entries {
    stack: Vec<String>,
    index: usize,
}

/// メモリ上の履歴スタック。戻る・進むで位置だけが動く
#[derive(Debug)]
pub struct MemoryHistory {
    entries: StdMutex<Entries>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: StdMutex::new(Entries {
                stack: vec![initial_path.to_string()],
                index: 0,
            }),
        }
    }

    fn with_entries<R>(&self, f: impl FnOnce(&mut Entries) -> R) -> R {
        let mut guard = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }

    /// 一つ前のエントリへ戻る。先頭なら false
    pub fn back(&self) -> bool {
        self.with_entries(|e| {
            if e.index == 0 {
                return false;
            }
            e.index -= 1;
            true
        })
    }

    pub fn forward(&self) -> bool {
        self.with_entries(|e| {
            if e.index + 1 >= e.stack.len() {
                return false;
            }
            e.index += 1;
            true
        })
    }

    pub fn len(&self) -> usize {
        self.with_entries(|e| e.stack.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NavigationHistory for MemoryHistory {
    fn current_path(&self) -> String {
        self.with_entries(|e| e.stack[e.index].clone())
    }

    fn push_path(&self, path: &str) {
        self.with_entries(|e| {
            e.stack.truncate(e.index + 1);
            e.stack.push(path.to_string());
            e.index = e.stack.len() - 1;
        });
    }
}
