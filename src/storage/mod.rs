//! Document storage
//!
//! [`FileStorage`] owns the path to the single JSON file holding the whole
//! dataset; [`DocumentRepository`] runs the read-validate-mutate-write cycle
//! for one entity kind on top of it.
//!
//! Known limitations, kept deliberately:
//!
//! - Every save is a full-file rewrite with no temp-file-then-rename step, so
//!   a crash mid-write can corrupt the store.
//! - There is no lock around the load-validate-mutate-save sequence. Two
//!   mutating operations that interleave both read the same pre-state and the
//!   second save silently clobbers the first (lost update). The deployment
//!   assumption is a single process handling one request at a time.

mod file;
mod repository;

pub use file::FileStorage;
pub use repository::DocumentRepository;
