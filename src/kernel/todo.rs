//! 待办列表：有序条目 + 待提交的输入缓冲
//!
//! Display ids are positional (`1..=n`) and recomputed after every removal.
//! Deletion matches on [`ItemKey`], which is assigned once at creation and
//! never changes, so a row captured at render time always refers to the same
//! item even after the ids around it shift.

use tracing::debug;

/// Stable per-session identity of an item. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemKey(u64);

impl ItemKey {
    pub fn raw(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: usize,
    key: ItemKey,
    name: String,
}

impl Item {
    /// 1-based position in the list.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn key(&self) -> ItemKey {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default)]
pub struct TodoList {
    items: Vec<Item>,
    pending: String,
    next_key: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_name(&self) -> &str {
        &self.pending
    }

    pub fn set_pending_name(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Appends the pending name as a new item and clears the buffer.
    ///
    /// An empty buffer is not an error: nothing happens and `None` is returned.
    /// Whitespace is not trimmed, so `" "` is a valid name.
    pub fn add_item(&mut self) -> Option<ItemKey> {
        if self.pending.is_empty() {
            return None;
        }

        let key = ItemKey(self.next_key);
        self.next_key += 1;

        let name = std::mem::take(&mut self.pending);
        let id = self.items.len() + 1;
        debug!(id, key = key.0, "item added");
        self.items.push(Item { id, key, name });
        Some(key)
    }

    /// Removes the item with `key` and renumbers the rest. Returns `false` if
    /// no such item exists, in which case the list is untouched.
    pub fn delete_item(&mut self, key: ItemKey) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };

        self.items.remove(index);
        self.renumber();
        debug!(key = key.0, remaining = self.items.len(), "item deleted");
        true
    }

    pub fn snapshot(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn position(&self, key: ItemKey) -> Option<usize> {
        self.items.iter().position(|item| item.key == key)
    }

    fn renumber(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.id = index + 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/todo.rs"]
mod tests;
