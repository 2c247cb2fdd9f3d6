//! Kind-erased boundary for engine binding.
//!
//! The typed core ([`GroupMinReducer`]) fixes its value kind at compile time.
//! A host engine resolves kinds at query-compile time instead, from the
//! declared type of the input mapping, and then feeds the reducer values
//! whose kind is only known at run time. This module is that boundary:
//!
//! - [`BoundReducer::bind`] resolves a declared mapping type
//!   (`map<string,int>`, `map<string,bigint>`, `map<string,float>`,
//!   `map<string,double>`) and fixes the reducer's kind, rejecting anything
//!   else before any row is processed.
//! - [`KindFragment`], [`KindAccumulator`], [`KindMap`], and [`KindValue`]
//!   carry the four kinds behind one variant each. Every operation checks its
//!   arguments' kinds against the bound kind and fails fast with
//!   [`KindMismatch`](crate::KindMismatch); values are never silently
//!   coerced.
//!
//! There is one generic implementation underneath, instantiated per kind by
//! the dispatch below, not four duplicated reducers.
//!
//! ```
//! use keymin::{BoundReducer, Fragment, KindFragment, KindMap};
//!
//! # fn main() -> anyhow::Result<()> {
//! let reducer = BoundReducer::bind("map<string,bigint>")?;
//! let mut acc = reducer.new_accumulator();
//!
//! let frag = KindFragment::from(Fragment::from_values([("a".to_string(), 5i64)]));
//! reducer.observe(&mut acc, Some(&frag))?;
//! reducer.observe(&mut acc, None)?; // absent fragment: a no-op, not an error
//!
//! let KindMap::Int64(out) = reducer.finalize(acc)? else { unreachable!() };
//! assert_eq!(out["a"], 5);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::accumulator::GroupAccumulator;
use crate::fragment::Fragment;
use crate::kind::{BindError, KindMismatch, ValueKind};
use crate::reduce::{GroupMinReducer, ReduceFn};

/// A scalar of one of the supported kinds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum KindValue {
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
}

/// A fragment whose kind is known only at run time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum KindFragment {
    Int32(Fragment<i32>),
    Int64(Fragment<i64>),
    Float32(Fragment<f32>),
    Float64(Fragment<f64>),
}

/// An accumulator whose kind is known only at run time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum KindAccumulator {
    Int32(GroupAccumulator<i32>),
    Int64(GroupAccumulator<i64>),
    Float32(GroupAccumulator<f32>),
    Float64(GroupAccumulator<f64>),
}

/// An emitted mapping whose kind is known only at run time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum KindMap {
    Int32(HashMap<String, i32>),
    Int64(HashMap<String, i64>),
    Float32(HashMap<String, f32>),
    Float64(HashMap<String, f64>),
}

macro_rules! impl_kind_accessor {
    ($($ty:ident),* $(,)?) => {$(
        impl $ty {
            /// The runtime kind of this value.
            pub fn kind(&self) -> ValueKind {
                match self {
                    $ty::Int32(_) => ValueKind::Int32,
                    $ty::Int64(_) => ValueKind::Int64,
                    $ty::Float32(_) => ValueKind::Float32,
                    $ty::Float64(_) => ValueKind::Float64,
                }
            }
        }
    )*};
}

impl_kind_accessor!(KindValue, KindFragment, KindAccumulator, KindMap);

macro_rules! impl_kind_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {$(
        impl From<$ty> for KindValue {
            fn from(v: $ty) -> Self {
                KindValue::$variant(v)
            }
        }
        impl From<Fragment<$ty>> for KindFragment {
            fn from(f: Fragment<$ty>) -> Self {
                KindFragment::$variant(f)
            }
        }
        impl From<HashMap<String, $ty>> for KindMap {
            fn from(m: HashMap<String, $ty>) -> Self {
                KindMap::$variant(m)
            }
        }
    )*};
}

impl_kind_conversions!(Int32 => i32, Int64 => i64, Float32 => f32, Float64 => f64);

/// Dispatch over a single accumulator whose kind was already verified.
macro_rules! dispatch_acc {
    ($acc:expr, |$a:ident| $body:expr) => {
        match $acc {
            KindAccumulator::Int32($a) => $body,
            KindAccumulator::Int64($a) => $body,
            KindAccumulator::Float32($a) => $body,
            KindAccumulator::Float64($a) => $body,
        }
    };
}

/// Dispatch over an accumulator paired with a same-kind argument. Kinds are
/// verified before expansion, so the cross-kind arms cannot be reached.
macro_rules! dispatch_pair {
    ($left:expr, $right:expr, $lty:ident, $rty:ident, |$a:ident, $b:ident| $body:expr) => {
        match ($left, $right) {
            ($lty::Int32($a), $rty::Int32($b)) => $body,
            ($lty::Int64($a), $rty::Int64($b)) => $body,
            ($lty::Float32($a), $rty::Float32($b)) => $body,
            ($lty::Float64($a), $rty::Float64($b)) => $body,
            _ => unreachable!("value kinds verified before dispatch"),
        }
    };
}

/// Dispatch over an accumulator, wrapping each arm's result back into a
/// [`KindMap`] of the same kind.
macro_rules! dispatch_into_map {
    ($acc:expr, |$a:ident| $body:expr) => {
        match $acc {
            KindAccumulator::Int32($a) => KindMap::Int32($body),
            KindAccumulator::Int64($a) => KindMap::Int64($body),
            KindAccumulator::Float32($a) => KindMap::Float32($body),
            KindAccumulator::Float64($a) => KindMap::Float64($body),
        }
    };
}

impl KindMap {
    /// Number of keys in the mapping.
    pub fn len(&self) -> usize {
        match self {
            KindMap::Int32(m) => m.len(),
            KindMap::Int64(m) => m.len(),
            KindMap::Float32(m) => m.len(),
            KindMap::Float64(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A reducer bound to one resolved [`ValueKind`].
///
/// The binding analog of the engine's compile-time type resolution: the kind
/// is fixed once at bind time, and every subsequent fragment or accumulator
/// is checked against it before any of its entries is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundReducer {
    kind: ValueKind,
}

impl BoundReducer {
    /// Bind from a declared mapping type, e.g. `map<string,bigint>`.
    ///
    /// Fails with a [`BindError`] naming the declared type if it is not one
    /// of the four supported mapping types.
    pub fn bind(declared: &str) -> Result<Self, BindError> {
        Ok(Self {
            kind: ValueKind::resolve(declared)?,
        })
    }

    /// Bind directly to an already-resolved kind.
    pub fn for_kind(kind: ValueKind) -> Self {
        Self { kind }
    }

    /// The kind this reducer was bound to.
    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    fn check(&self, found: ValueKind) -> Result<(), KindMismatch> {
        if found == self.kind {
            Ok(())
        } else {
            Err(KindMismatch {
                expected: self.kind,
                found,
            })
        }
    }

    /// Fresh, empty accumulator of the bound kind.
    pub fn new_accumulator(&self) -> KindAccumulator {
        match self.kind {
            ValueKind::Int32 => KindAccumulator::Int32(GroupAccumulator::new()),
            ValueKind::Int64 => KindAccumulator::Int64(GroupAccumulator::new()),
            ValueKind::Float32 => KindAccumulator::Float32(GroupAccumulator::new()),
            ValueKind::Float64 => KindAccumulator::Float64(GroupAccumulator::new()),
        }
    }

    /// Clear `acc` in place for reuse across groups.
    pub fn reset(&self, acc: &mut KindAccumulator) -> Result<(), KindMismatch> {
        self.check(acc.kind())?;
        dispatch_acc!(acc, |a| GroupMinReducer::new().reset(a));
        Ok(())
    }

    /// Fold one fragment into `acc`. `None` is a no-op, not an error.
    pub fn observe(
        &self,
        acc: &mut KindAccumulator,
        fragment: Option<&KindFragment>,
    ) -> Result<(), KindMismatch> {
        self.check(acc.kind())?;
        let Some(fragment) = fragment else {
            return Ok(());
        };
        self.check(fragment.kind())?;
        dispatch_pair!(acc, fragment, KindAccumulator, KindFragment, |a, f| {
            GroupMinReducer::new().observe(a, f)
        });
        Ok(())
    }

    /// Combine another accumulator's contents into `acc`. `other` is not
    /// mutated.
    pub fn merge(
        &self,
        acc: &mut KindAccumulator,
        other: &KindAccumulator,
    ) -> Result<(), KindMismatch> {
        self.check(acc.kind())?;
        self.check(other.kind())?;
        dispatch_pair!(acc, other, KindAccumulator, KindAccumulator, |a, b| {
            GroupMinReducer::new().merge(a, b)
        });
        Ok(())
    }

    /// Immutable copy of the current contents, for partial or final emission.
    pub fn snapshot(&self, acc: &KindAccumulator) -> Result<KindMap, KindMismatch> {
        self.check(acc.kind())?;
        Ok(dispatch_into_map!(acc, |a| GroupMinReducer::new().snapshot(a)))
    }

    /// Final emission for the group. Same data as
    /// [`snapshot`](BoundReducer::snapshot); consumes the accumulator.
    pub fn finalize(&self, acc: KindAccumulator) -> Result<KindMap, KindMismatch> {
        self.check(acc.kind())?;
        Ok(dispatch_into_map!(acc, |a| GroupMinReducer::new().finalize(a)))
    }
}
