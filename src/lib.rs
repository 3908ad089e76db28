mod interval;
mod ranges;

pub use crate::interval::{Interval, IntervalError, Intervals, parse_collection};
pub use crate::ranges::{Coalesce, coalesce, is_normalized, merge, merged, try_merge};
