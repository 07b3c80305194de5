//! Route path patterns: literal segments with an optional trailing wildcard.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern {0:?} must start with '/'")]
    MissingLeadingSlash(String),
    #[error("pattern {0:?} contains an empty segment")]
    EmptySegment(String),
    #[error("pattern {0:?} has a wildcard before its last segment")]
    WildcardNotLast(String),
    #[error("pattern {0:?} has a wildcard without a name")]
    UnnamedWildcard(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Wildcard(String),
}

/// A parsed route pattern such as `/`, `/showcase` or `/*path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
}

/// Successful match, with the remainder captured by a wildcard if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternMatch {
    pub wildcard: Option<(String, String)>,
}

/// Non-empty segments of a request path. Leading, trailing and repeated
/// slashes carry no meaning.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// `true` for `""`, `"/"` and any other path without segments.
pub fn is_root_path(path: &str) -> bool {
    path_segments(path).next().is_none()
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let Some(rest) = raw.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(raw.to_owned()));
        };
        if rest.is_empty() {
            return Ok(Self::root());
        }

        let parts: Vec<&str> = rest.split('/').collect();
        let mut segments = Vec::with_capacity(parts.len());
        for (index, part) in parts.iter().enumerate() {
            if part.is_empty() {
                return Err(PatternError::EmptySegment(raw.to_owned()));
            }
            if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(PatternError::UnnamedWildcard(raw.to_owned()));
                }
                if index + 1 != parts.len() {
                    return Err(PatternError::WildcardNotLast(raw.to_owned()));
                }
                segments.push(Segment::Wildcard(name.to_owned()));
            } else {
                segments.push(Segment::Literal((*part).to_owned()));
            }
        }
        Ok(Self { segments })
    }

    /// `/`
    pub fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// `/<segment>`
    pub fn literal(segment: &str) -> Self {
        Self {
            segments: vec![Segment::Literal(segment.to_owned())],
        }
    }

    /// `/*<name>`, matching every path.
    pub fn catch_all(name: &str) -> Self {
        Self {
            segments: vec![Segment::Wildcard(name.to_owned())],
        }
    }

    /// A pattern made of a single wildcard.
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Wildcard(_)])
    }

    /// Concrete path for patterns without a wildcard.
    pub fn static_path(&self) -> Option<String> {
        let mut path = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    path.push('/');
                    path.push_str(text);
                }
                Segment::Wildcard(_) => return None,
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Some(path)
    }

    pub fn matches(&self, path: &str) -> Option<PatternMatch> {
        let mut remaining = path_segments(path);
        for segment in &self.segments {
            match segment {
                Segment::Literal(expected) => {
                    if remaining.next() != Some(expected.as_str()) {
                        return None;
                    }
                }
                Segment::Wildcard(name) => {
                    let rest: Vec<&str> = remaining.collect();
                    return Some(PatternMatch {
                        wildcard: Some((name.clone(), rest.join("/"))),
                    });
                }
            }
        }
        if remaining.next().is_some() {
            return None;
        }
        Some(PatternMatch { wildcard: None })
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "/{text}")?,
                Segment::Wildcard(name) => write!(f, "/*{name}")?,
            }
        }
        Ok(())
    }
}
