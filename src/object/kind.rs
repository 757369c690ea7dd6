use std::fmt::{self, Display, Formatter};

/// Describes the type tag of an object (blob, tree, commit, tag, or anything else).
///
/// We use the word `kind` here to avoid conflict with the Rust reserved word `type`.
///
/// The object store never rejects a tag it doesn't recognize. Unknown tags are
/// carried verbatim in `Kind::Other` so they survive a write/read cycle unchanged.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Blob,
    Tree,
    Commit,
    Tag,
    Other(Vec<u8>),
}

impl Kind {
    /// Interpret a type tag as it appears in an object header.
    pub fn from_bytes(tag: &[u8]) -> Kind {
        match tag {
            b"blob" => Kind::Blob,
            b"tree" => Kind::Tree,
            b"commit" => Kind::Commit,
            b"tag" => Kind::Tag,
            _ => Kind::Other(tag.to_vec()),
        }
    }

    /// Return the type tag exactly as it is written into an object header.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Kind::Blob => b"blob",
            Kind::Tree => b"tree",
            Kind::Commit => b"commit",
            Kind::Tag => b"tag",
            Kind::Other(tag) => tag,
        }
    }

    /// Returns true if this tag can be framed unambiguously.
    ///
    /// A tag must be non-empty and may not contain the space or NUL bytes
    /// that delimit the object header.
    pub fn is_valid(&self) -> bool {
        let tag = self.as_bytes();
        !tag.is_empty() && !tag.iter().any(|b| *b == b' ' || *b == 0)
    }
}

impl From<&str> for Kind {
    fn from(tag: &str) -> Kind {
        Kind::from_bytes(tag.as_bytes())
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}
