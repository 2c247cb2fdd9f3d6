//! # Keymin
//!
//! A **distributed key-wise minimum reduction engine** for string-keyed
//! numeric maps. Many small key→value mappings, produced across partitions
//! of a dataset, are combined into one mapping per logical group; each key's
//! final value is the minimum of all values ever seen for that key, across
//! all partitions.
//!
//! The engine is built to sit under an external map-reduce-style driver: it
//! exposes an explicit three-phase protocol (local accumulation →
//! partial-result merge → final emission) whose combine rule is commutative,
//! associative, and idempotent on merge, so the driver may run partial
//! merges in any order, any number of times, on machines with no shared
//! memory.
//!
//! ## Quick Start
//!
//! ```
//! use keymin::{Fragment, GroupMinReducer, ReduceFn};
//!
//! let reducer = GroupMinReducer::<i64>::new();
//! let mut acc = reducer.create();
//!
//! // Local accumulation: fold raw per-row fragments.
//! reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 5), ("b".to_string(), 3)]));
//! reducer.observe(&mut acc, &Fragment::from_values([("a".to_string(), 2), ("b".to_string(), 9)]));
//!
//! // A partial produced on another partition merges in with the same rule.
//! let mut partial = reducer.create();
//! reducer.observe(&mut partial, &Fragment::from_values([("b".to_string(), 1)]));
//! reducer.merge(&mut acc, &partial);
//!
//! let out = reducer.finalize(acc);
//! assert_eq!(out["a"], 2);
//! assert_eq!(out["b"], 1);
//! ```
//!
//! ## Core Concepts
//!
//! ### Three-phase protocol
//!
//! [`ReduceFn`] is the seam an execution engine drives:
//! [`create`](ReduceFn::create) / [`reset`](ReduceFn::reset),
//! [`observe`](ReduceFn::observe) for raw per-row contributions,
//! [`merge`](ReduceFn::merge) for pre-aggregated partials from other
//! partitions, and [`snapshot`](ReduceFn::snapshot) /
//! [`finalize`](ReduceFn::finalize) to ship results onward. A snapshot may
//! be taken mid-stream and accumulation can continue; `finalize` consumes
//! the accumulator.
//!
//! ### Value kinds
//!
//! Reductions are parametrized over four numeric kinds (`i32`, `i64`,
//! `f32`, `f64`) through the [`MinValue`] adapter. The combine rule is a
//! strict less-than replace, which for float kinds means NaN comparisons are
//! false: a NaN is stored only as a key's first observation and neither
//! displaces nor is displaced afterwards.
//!
//! ### Null skipping
//!
//! A [`Fragment`] entry with a null key or null value is skipped: it never
//! creates a key and never alters a stored minimum. An absent fragment is a
//! no-op, not an error.
//!
//! ### Engine binding
//!
//! A host engine that resolves types at query-compile time binds through
//! [`BoundReducer`]: the four declared mapping types (`map<string,int>`,
//! `map<string,bigint>`, `map<string,float>`, `map<string,double>`) resolve
//! to a [`ValueKind`]; anything else is rejected up front with a
//! [`BindError`]. Every kind-erased argument is checked against the bound
//! kind and mismatches fail fast with [`KindMismatch`], never a silent
//! coercion.
//!
//! ### Companion filter
//!
//! [`retain_at_least`] / [`filter_lower_than`] drop entries strictly below a
//! same-kind threshold (boundary values kept), the stateless elementwise
//! companion to the reduction.
//!
//! ## Execution
//!
//! The core has no suspension points, no I/O, and no internal locking;
//! concurrency belongs to the surrounding engine, with one owner per
//! accumulator at a time. The [`driver`] module is a reference consumer:
//! [`driver::fold_all`] folds sequentially, and with the `parallel` feature
//! [`driver::fold_partitioned`] pre-aggregates partitions on rayon workers
//! before merging the partials.
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - the driver's partitioned execution path (rayon).
//!
//! ## Module Overview
//!
//! - [`reduce`] - the [`ReduceFn`] protocol and [`GroupMinReducer`]
//! - [`accumulator`] - per-group accumulator state
//! - [`fragment`] - per-row input mappings with nullable entries
//! - [`kind`] - value kinds, declared-type resolution, error types
//! - [`value`] - per-kind comparison adapters
//! - [`bind`] - kind-erased engine boundary
//! - [`filter`] - the elementwise threshold filter
//! - [`driver`] - reference sequential/partitioned drivers
//! - [`testing`] - assertion helpers and builders for tests

pub mod accumulator;
pub mod bind;
pub mod driver;
pub mod filter;
pub mod fragment;
pub mod kind;
pub mod reduce;
pub mod testing;
pub mod value;

// General re-exports
pub use accumulator::GroupAccumulator;
pub use bind::{BoundReducer, KindAccumulator, KindFragment, KindMap, KindValue};
pub use filter::{filter_lower_than, retain_at_least};
pub use fragment::Fragment;
pub use kind::{BindError, KindMismatch, ValueKind};
pub use reduce::{GroupMinReducer, ReduceFn};
pub use value::MinValue;

pub use driver::{fold_all, group_min_seq};

// Gated re-exports
#[cfg(feature = "parallel")]
pub use driver::{fold_partitioned, group_min_par};
