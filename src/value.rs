//! Per-kind comparison adapters.

use crate::kind::ValueKind;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Bound for numeric values a reduction can carry.
///
/// One implementation per supported kind; the strict less-than test in
/// [`replaces`](MinValue::replaces) is the only comparison the combine rule
/// uses. For the float kinds any comparison involving NaN is false, so a NaN
/// can enter an accumulator only as a key's literal first observation and is
/// neither displaced by nor displaces later values. That behavior is part of
/// the contract, not an accident.
pub trait MinValue:
    'static + Send + Sync + Copy + PartialOrd + Serialize + DeserializeOwned
{
    /// Runtime tag for this value type.
    const KIND: ValueKind;

    /// Strict less-than under the kind's natural ordering.
    #[inline]
    fn replaces(self, current: Self) -> bool {
        self < current
    }
}

macro_rules! impl_min_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {$(
        impl MinValue for $ty {
            const KIND: ValueKind = ValueKind::$kind;
        }
    )*};
}

impl_min_value!(i32 => Int32, i64 => Int64, f32 => Float32, f64 => Float64);
