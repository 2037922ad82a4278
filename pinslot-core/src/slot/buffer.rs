//! Per-slot character storage

/// Fixed-size buffer of optional single characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotBuffer {
    slots: Vec<Option<char>>,
}

impl SlotBuffer {
    /// Create an empty buffer with `slot_count` slots
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Create a buffer seeded left-to-right from `code`
    ///
    /// Characters beyond `slot_count` are dropped.
    pub fn seeded(slot_count: usize, code: &str) -> Self {
        let mut buffer = Self::new(slot_count);
        buffer.fill_from(code);
        buffer
    }

    /// Replace the contents with `code`, emptying the remaining slots
    pub fn fill_from(&mut self, code: &str) {
        let mut chars = code.chars();
        for slot in self.slots.iter_mut() {
            *slot = chars.next();
        }
    }

    /// Number of slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the buffer has no slots at all
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Character in slot `index`, if any
    pub fn get(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    /// Write `value` into slot `index`
    ///
    /// Returns false when `index` is out of range and nothing was written.
    pub fn set(&mut self, index: usize, value: Option<char>) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Number of non-empty slots
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Check if every slot holds a character
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Concatenation of the filled slots, in order
    pub fn assembled(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    /// Per-slot view, empties included
    pub fn as_slice(&self) -> &[Option<char>] {
        &self.slots
    }
}
