//! Fixed-precision string serialization for display figures
//! (percentages, averages, money).

use serde::Serializer;

pub(crate) fn one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.1}"))
}

pub(crate) fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.2}"))
}
