//! Represents an abstract git repository.
//!
//! ## Design Goals
//!
//! Repositories could be stored in multiple different mechanisms.
//! This crate includes built-in support for local on-disk repositories
//! (see `gitobj::repo::on_disk`), but the object store is described by the
//! `Repo` trait so that other storage can be substituted.

mod error;
pub use error::{Error, Result};

pub mod config;

pub mod on_disk;

use crate::object::{Id, Object};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing a git object database.
///
/// The required methods on this trait represent the most primitive operations
/// which must be defined for a given storage architecture.
pub trait Repo {
    /// Store an object, returning its ID.
    ///
    /// Storing an object that already exists is not an error and leaves
    /// the existing copy untouched.
    fn put_object(&mut self, object: &Object) -> Result<Id>;

    /// Retrieve a previously stored object.
    fn get_object(&self, id: &Id) -> Result<Object>;

    /// Returns true if the object is present in the repository.
    fn has_object(&self, id: &Id) -> bool;
}
