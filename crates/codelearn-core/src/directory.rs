//! In-memory topic directory.

use crate::error::DirectoryError;
use crate::topic::Topic;

/// Read-only directory over the topic list.
///
/// Built once at process start; lookups never mutate it, so it can be
/// shared across request handlers without locking.
#[derive(Debug, Clone)]
pub struct TopicDirectory {
    topics: Vec<Topic>,
}

impl TopicDirectory {
    /// Create a directory over the built-in topic list.
    pub fn builtin() -> Self {
        Self::with_topics(vec![
            Topic::new(1, "C++", "Learn C++ from basics to advanced."),
            Topic::new(2, "React", "Learn React for building UIs."),
        ])
    }

    /// Create a directory over an explicit topic list.
    pub fn with_topics(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// All topics, in definition order.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Number of topics in the directory.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether the directory holds no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Look up a topic by id.
    pub fn get(&self, id: u32) -> Result<&Topic, DirectoryError> {
        self.topics
            .iter()
            .find(|topic| topic.id == id)
            .ok_or(DirectoryError::TopicNotFound(id))
    }
}

impl Default for TopicDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
