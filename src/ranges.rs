use crate::interval::{Interval, IntervalError};

/// Sorts `intervals` by their low bound and coalesces overlapping or touching intervals in place,
/// so that afterwards the vector holds disjoint intervals in ascending order.
///
/// All intervals must satisfy `low <= high`. This is only checked in debug builds; use
/// [`try_merge`] for untrusted input.
pub fn merge(intervals: &mut Vec<Interval>) {
    debug_assert!(
        intervals.iter().all(Interval::is_well_formed),
        "merging malformed intervals"
    );

    if intervals.is_empty() {
        return;
    }

    let input_len = intervals.len();
    intervals.sort_by_key(|interval| interval.low);

    // `last` is the index of the interval currently being grown. It never overtakes the read
    // index, so overwriting `intervals[last]` only clobbers slots that were already consumed.
    let mut last = 0;
    for i in 1..intervals.len() {
        let interval = intervals[i];
        if intervals[last].high >= interval.low {
            intervals[last] = intervals[last].hull(&interval);
        } else {
            last += 1;
            intervals[last] = interval;
        }
    }
    intervals.truncate(last + 1);

    log::trace!("merged {input_len} intervals into {}", intervals.len());
}

/// Like [`merge`], but rejects malformed intervals instead of producing garbage. The vector is not
/// modified on error.
pub fn try_merge(intervals: &mut Vec<Interval>) -> Result<(), IntervalError> {
    if let Some(bad) = intervals.iter().find(|interval| !interval.is_well_formed()) {
        log::debug!("refusing to merge malformed interval {bad}");
        return Err(IntervalError::Inverted {
            low: bad.low,
            high: bad.high,
        });
    }
    merge(intervals);
    Ok(())
}

/// Merges a stream of intervals sorted by `low` lazily. Unsorted input yields intervals that are
/// each a union of neighbours, but the result as a whole is not normalized.
pub struct Coalesce<I> {
    iter: I,
    pending: Option<Interval>,
}

pub fn coalesce<I: IntoIterator<Item = Interval>>(intervals: I) -> Coalesce<I::IntoIter> {
    Coalesce {
        iter: intervals.into_iter(),
        pending: None,
    }
}

impl<I: Iterator<Item = Interval>> Iterator for Coalesce<I> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        let mut current = self.pending.take().or_else(|| self.iter.next())?;
        for interval in self.iter.by_ref() {
            if current.high >= interval.low {
                current = current.hull(&interval);
            } else {
                self.pending = Some(interval);
                break;
            }
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = usize::from(self.pending.is_some());
        let (low, high) = self.iter.size_hint();
        (
            pending.max(low.min(1)),
            high.and_then(|high| high.checked_add(pending)),
        )
    }
}

/// Allocating counterpart of [`merge`] that leaves its input alone.
pub fn merged(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(|interval| interval.low);
    coalesce(sorted).collect()
}

/// Checks whether `intervals` is a possible output of [`merge`].
pub fn is_normalized(intervals: &[Interval]) -> bool {
    intervals.iter().all(Interval::is_well_formed)
        && intervals.windows(2).all(|pair| pair[0].high < pair[1].low)
}
