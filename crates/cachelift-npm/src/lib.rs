//! npm support for cachelift.
//!
//! Extracts tarball URLs from `package-lock.json` and plans the
//! download and re-publish commands for them.

pub mod lockfile;

pub use lockfile::{LOCK_FILE_NAME, LockScan, plan_npm, read_lock_file, scan_lock_file};
