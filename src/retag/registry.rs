use std::collections::HashSet;

/// Deduplicated collection of tags in first-seen order. Letters are assigned
/// by position, so reruns over the same input produce identical output.
#[derive(Debug, Default)]
pub struct TagRegistry {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tag: &str) {
        if self.seen.insert(tag.to_string()) {
            self.order.push(tag.to_string());
        }
    }

    /// Letter code for a registered tag: 'A' for index 0, 'B' for 1, and so
    /// on. Beyond 26 tags the codes run into the ASCII characters after 'Z'
    /// ('[', '\\', ...), a known limitation of the format.
    pub fn letter(&self, tag: &str) -> Option<char> {
        let index = self.order.iter().position(|t| t == tag)?;
        char::from_u32('A' as u32 + index as u32)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
