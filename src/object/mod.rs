//! Represents the git concept of an "object" which is a tuple of
//! object type and binary data identified by the hash of both.
//!
//! Nothing in this module touches the file system. See `gitobj::repo`
//! for storing and retrieving objects.

use sha1::{Digest, Sha1};

mod frame;
pub use frame::FrameError;

mod id;
pub use id::{Id, ParseIdError, ID_LEN};

mod kind;
pub use kind::Kind;

/// Describes a single object stored (or about to be stored) in a repository.
///
/// An object is immutable. Changing the content yields a different object
/// with a different ID.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Object {
    kind: Kind,
    content: Vec<u8>,
}

impl Object {
    /// Create a new Object.
    ///
    /// It is an error if the kind can not be written into an object header
    /// (see `Kind::is_valid`).
    pub fn new(kind: Kind, content: Vec<u8>) -> Result<Object, FrameError> {
        if !kind.is_valid() {
            return Err(FrameError::InvalidKind(kind.to_string()));
        }

        Ok(Object { kind, content })
    }

    /// Reconstruct an object from its canonical frame
    /// (`<type> SP <length> NUL <content>`).
    ///
    /// Fails if either delimiter is missing or if the declared length
    /// doesn't match the number of content bytes.
    pub fn from_frame(frame: Vec<u8>) -> Result<Object, FrameError> {
        let (kind, content) = frame::split(frame)?;
        Object::new(Kind::from_bytes(&kind), content)
    }

    /// Return the kind of the object.
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    /// Return the content of the object.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the object, returning its content.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// Return the size (in bytes) of the object's content.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the canonical frame for this object. This is the byte sequence
    /// that is hashed to form the ID and compressed to form the loose object file.
    pub fn frame(&self) -> Vec<u8> {
        let mut frame = frame::header(self.kind.as_bytes(), self.len());
        frame.extend_from_slice(&self.content);
        frame
    }

    /// Computes the object's ID from its type, size, and content.
    ///
    /// This is functionally equivalent to the
    /// [`git hash-object`](https://git-scm.com/docs/git-hash-object) command
    /// without the `-w` option that would write the object to the repo.
    pub fn id(&self) -> Id {
        let mut hasher = Sha1::new();
        hasher.update(frame::header(self.kind.as_bytes(), self.len()));
        hasher.update(&self.content);

        // SHA-1 output is always 20 bytes.
        let mut digest = [0; ID_LEN];
        digest.copy_from_slice(&hasher.finalize());
        Id::from(digest)
    }
}
