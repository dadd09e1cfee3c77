//! # Breadcrumb
//!
//! The navigation path from the diff root to a node.
//!
//! Segments are pushed on the way down and popped on the way back up,
//! so a single breadcrumb is reused for the whole traversal.

use std::fmt;

/// One step of a path
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A mapping key
    Key(String),
    /// A sequence index, displayed as `List[i]`
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(i) => write!(f, "List[{}]", i),
        }
    }
}

/// Ordered path of segments
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Breadcrumb {
    segments: Vec<Segment>,
}

impl Breadcrumb {
    /// Default separator between segments
    pub const SEPARATOR: &'static str = ":";

    /// Empty path (the root)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Join segments with a custom separator
    pub fn join(&self, separator: &str) -> String {
        self.segments
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// True if `self` is a strict prefix of `other`
    pub fn is_ancestor_of(&self, other: &Breadcrumb) -> bool {
        self.len() < other.len() && other.segments[..self.len()] == self.segments[..]
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(Self::SEPARATOR))
    }
}

impl FromIterator<Segment> for Breadcrumb {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_with_colon() {
        let path: Breadcrumb = [Segment::Key("a".into()), Segment::Index(1), Segment::Key("b".into())]
            .into_iter()
            .collect();
        assert_eq!(path.to_string(), "a:List[1]:b");
    }

    #[test]
    fn test_root_is_empty_string() {
        assert_eq!(Breadcrumb::new().to_string(), "");
    }

    #[test]
    fn test_push_pop_is_a_stack() {
        let mut path = Breadcrumb::new();
        path.push(Segment::Key("x".into()));
        path.push(Segment::Index(0));
        assert_eq!(path.pop(), Some(Segment::Index(0)));
        assert_eq!(path.to_string(), "x");
    }

    #[test]
    fn test_ancestor() {
        let parent: Breadcrumb = [Segment::Key("a".into())].into_iter().collect();
        let child: Breadcrumb = [Segment::Key("a".into()), Segment::Index(3)].into_iter().collect();
        assert!(parent.is_ancestor_of(&child));
        assert!(!child.is_ancestor_of(&parent));
        assert!(!parent.is_ancestor_of(&parent));
    }

    #[test]
    fn test_custom_separator() {
        let path: Breadcrumb = [Segment::Key("a".into()), Segment::Key("b".into())].into_iter().collect();
        assert_eq!(path.join("/"), "a/b");
    }
}
