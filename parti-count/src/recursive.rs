use im::Vector;
use itertools::Itertools;

use crate::{Addend, Count, ensure_positive, PartitionError};

/// Top-down twin of [`crate::tabular::count`]. Same recurrence, phrased as
/// include-the-last-addend (it may repeat) plus drop-it-for-good.
pub fn count(addends: &[Addend], target: u64) -> Result<Count, PartitionError> {
    ensure_positive(addends)?;
    Ok(count_inner(addends, target))
}

fn count_inner(addends: &[Addend], remaining: u64) -> Count {
    // checked before the empty-set case so count([], 0) is 1
    if remaining == 0 {
        return 1;
    }
    let Some((last, rest)) = addends.split_last() else {
        return 0;
    };
    let included = if remaining >= *last {
        count_inner(addends, remaining - last)
    } else {
        0
    };
    included + count_inner(rest, remaining)
}

/// Every concrete partition, as the paths of the count recursion: the
/// include branch comes first and the addends are walked back to front.
/// Hand it an ascending set and each partition lists its largest part
/// first, with the whole result in first-visited order.
pub fn partitions(addends: &[Addend], target: u64) -> Result<Vec<Vec<Addend>>, PartitionError> {
    ensure_positive(addends)?;
    let mut found = Vec::new();
    walk(addends, target, Vector::new(), &mut found);
    Ok(found
        .iter()
        .map(|path| path.iter().copied().collect_vec())
        .collect_vec())
}

fn walk(addends: &[Addend], remaining: u64, path: Vector<Addend>, found: &mut Vec<Vector<Addend>>) {
    if remaining == 0 {
        found.push(path);
        return;
    }
    let Some((last, rest)) = addends.split_last() else {
        return;
    };
    if remaining >= *last {
        let mut with_last = path.clone();
        with_last.push_back(*last);
        walk(addends, remaining - last, with_last, found);
    }
    walk(rest, remaining, path, found);
}
