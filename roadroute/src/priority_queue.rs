//! Binary min-heap with removal of arbitrary elements.

use crate::error::QueueError;

/// Element of an [`IndexedHeap`].
///
/// Items are ordered by `Ord`, the smallest one is at the top. `slot()` identifies the item:
/// at most one item per slot can be queued at a time.
pub trait HeapItem: Ord + Copy {
  fn slot(&self) -> usize;
}

pub struct IndexedHeap<T: HeapItem> {
  items: Vec<T>,
  // For each slot the index of its item in `items`
  positions: Vec<Option<usize>>,
}

impl<T: HeapItem> IndexedHeap<T> {
  pub fn new() -> Self {
    Self::with_slots(0)
  }

  /// Creates a heap with room for slots `0..slots` reserved up front.
  pub fn with_slots(slots: usize) -> Self {
    IndexedHeap {
      items: Vec::new(),
      positions: vec![None; slots],
    }
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn contains(&self, slot: usize) -> bool {
    self.position(slot).is_some()
  }

  pub fn insert(&mut self, item: T) -> Result<(), QueueError> {
    let slot = item.slot();
    if self.contains(slot) {
      return Err(QueueError::Duplicate(slot));
    }
    if slot >= self.positions.len() {
      self.positions.resize(slot + 1, None);
    }

    let index = self.items.len();
    self.items.push(item);
    self.positions[slot] = Some(index);
    self.sift_up(index);
    Ok(())
  }

  pub fn peek(&self) -> Option<&T> {
    self.items.first()
  }

  pub fn pop(&mut self) -> Option<T> {
    self.take(0)
  }

  /// Removes the item queued in `slot`, if any.
  pub fn remove(&mut self, slot: usize) -> Option<T> {
    let index = self.position(slot)?;
    self.take(index)
  }

  fn position(&self, slot: usize) -> Option<usize> {
    self.positions.get(slot).copied().flatten()
  }

  fn take(&mut self, index: usize) -> Option<T> {
    if index >= self.items.len() {
      return None;
    }
    let last = self.items.len() - 1;
    self.swap(index, last);

    let item = self.items.pop()?;
    self.positions[item.slot()] = None;

    if index < self.items.len() {
      if index > 0 && self.items[index] < self.items[(index - 1) / 2] {
        self.sift_up(index);
      } else {
        self.sift_down(index);
      }
    }
    Some(item)
  }

  fn swap(&mut self, a: usize, b: usize) {
    self.items.swap(a, b);
    self.positions[self.items[a].slot()] = Some(a);
    self.positions[self.items[b].slot()] = Some(b);
  }

  fn sift_up(&mut self, mut index: usize) {
    while index > 0 {
      let parent = (index - 1) / 2;
      if self.items[index] >= self.items[parent] {
        break;
      }
      self.swap(index, parent);
      index = parent;
    }
  }

  fn sift_down(&mut self, mut index: usize) {
    let len = self.items.len();
    loop {
      let left = 2 * index + 1;
      let right = left + 1;
      let mut smallest = index;

      if left < len && self.items[left] < self.items[smallest] {
        smallest = left;
      }
      if right < len && self.items[right] < self.items[smallest] {
        smallest = right;
      }
      if smallest == index {
        break;
      }
      self.swap(index, smallest);
      index = smallest;
    }
  }
}

impl<T: HeapItem> Default for IndexedHeap<T> {
  fn default() -> Self {
    Self::new()
  }
}
