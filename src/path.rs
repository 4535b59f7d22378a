//! Field paths locating values inside a structured request body.
//!
//! A [`JsonPath`] is the sequence of object keys and array indices leading
//! from the root of a body to the value that failed validation. It renders as
//! a JSON Pointer without the leading slash (`pizza/toppings/1`), which is the
//! form used for the `name` of body-scoped findings.

use std::fmt::{self, Display};

/// A segment of a field path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key (e.g., `name`, `toppings`)
    Field(String),
    /// An array index (e.g., `0`, `42`)
    Index(usize),
}

impl PathSegment {
    /// Creates a new field segment.
    pub fn field(name: impl Into<String>) -> Self {
        PathSegment::Field(name.into())
    }

    /// Creates a new index segment.
    pub fn index(idx: usize) -> Self {
        PathSegment::Index(idx)
    }

    pub(crate) fn parse(raw: &str) -> Self {
        // Only canonical decimal indices are treated as indices; "01" stays a key.
        let canonical = raw == "0" || (!raw.starts_with('0') && !raw.is_empty());
        match raw.parse::<usize>() {
            Ok(idx) if canonical => PathSegment::Index(idx),
            _ => PathSegment::Field(raw.to_string()),
        }
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{}", name),
            PathSegment::Index(idx) => write!(f, "{}", idx),
        }
    }
}

/// A path to a value inside a structured request body.
///
/// # Example
///
/// ```rust
/// use inquest::JsonPath;
///
/// let path = JsonPath::root()
///     .push_field("pizza")
///     .push_field("toppings")
///     .push_index(1);
///
/// assert_eq!(path.to_string(), "pizza/toppings/1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates an empty path representing the root value.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from a single field segment.
    pub fn from_field(name: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Field(name.into())],
        }
    }

    /// Creates a path from any sequence of segments.
    pub fn from_segments(segments: impl IntoIterator<Item = PathSegment>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    /// Parses an RFC 6901 JSON Pointer such as `/pizza/toppings/1`.
    ///
    /// The empty pointer is the root and `"/"` is the empty key. A missing
    /// leading slash is tolerated. `~1` and `~0` are unescaped to `/` and `~`.
    /// Segments made of canonical decimal digits become indices.
    pub fn from_pointer(pointer: &str) -> Self {
        if pointer.is_empty() {
            return Self::root();
        }
        let segments = pointer
            .strip_prefix('/')
            .unwrap_or(pointer)
            .split('/')
            .map(|raw| PathSegment::parse(&raw.replace("~1", "/").replace("~0", "~")))
            .collect();
        Self { segments }
    }

    /// Returns a new path with a field segment appended.
    pub fn push_field(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.into()));
        Self { segments }
    }

    /// Returns a new path with an index segment appended.
    pub fn push_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Returns true if this is the root path (no segments).
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments in this path.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if this path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the path segments.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None if this is root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }
}

/// Segments joined with `/`, without a leading slash and without escaping.
impl Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
