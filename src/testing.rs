//! Testing utilities for key-wise reductions.
//!
//! This module provides the pieces end-user tests keep rewriting by hand:
//!
//! - **Assertions**: compare emitted mappings with expected results,
//!   order-independently and with detailed failure messages
//! - **Builders**: construct fragments fluently, null entries included
//! - **Debug utilities**: render mappings as stable JSON for logs and diffs
//!
//! # Quick Start
//!
//! ```
//! use keymin::{Fragment, GroupMinReducer, ReduceFn};
//! use keymin::testing::{FragmentBuilder, assert_map_entries};
//!
//! let reducer = GroupMinReducer::<i32>::new();
//! let mut acc = reducer.create();
//!
//! let frag = FragmentBuilder::new()
//!     .kv("a", 5)
//!     .null_value("b") // skipped by the fold
//!     .build();
//! reducer.observe(&mut acc, &frag);
//!
//! assert_map_entries(&reducer.finalize(acc), &[("a", 5)]);
//! ```

pub mod assertions;
pub mod builders;
pub mod debug;

// Re-export commonly used items
pub use assertions::*;
pub use builders::*;
pub use debug::*;
