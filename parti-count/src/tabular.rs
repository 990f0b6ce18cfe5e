use crate::{Addend, Count, ensure_positive, PartitionError};

/// Bottom-up count of the ways `target` splits into addends from the set,
/// every addend reusable.
///
/// `table[r][c]` = ways to reach sum `c` using only the first `r` addends:
///
/// 1. `table[0][0] = 1`, the empty selection reaches 0
///
/// 2. `table[0][c] = 0` for `c > 0`, no addends reach nothing positive
///
/// 3. `table[r][0] = 1`, the empty selection never goes away
///
/// 4. `table[r][c] = table[r-1][c] + table[r][c - a]` when addend `a` of row
///    `r` fits into `c`, else just `table[r-1][c]`. The second term stays in
///    row `r`, that is what lets an addend repeat. Referencing row `r-1`
///    there instead would count 0/1 subsets.
///
/// The answer sits in the last cell. Time and space are O(len * target).
/// The grid lives in one flat row-major buffer, `row * (target + 1) + col`.
pub fn count(addends: &[Addend], target: u64) -> Result<Count, PartitionError> {
    ensure_positive(addends)?;

    let cols = target as usize + 1;
    let mut table = vec![0 as Count; (addends.len() + 1) * cols];

    table[0] = 1;
    for row in 1..=addends.len() {
        table[row * cols] = 1;
    }

    for row in 1..=addends.len() {
        let addend = addends[row - 1];
        for col in 1..cols {
            let without = table[(row - 1) * cols + col];
            table[row * cols + col] = if col as u64 >= addend {
                without + table[row * cols + col - addend as usize]
            } else {
                without
            };
        }
    }

    Ok(table[addends.len() * cols + target as usize])
}

#[cfg(test)]
mod test {
    use super::count;
    use crate::PartitionError;

    #[test]
    fn classic_partition_numbers() {
        assert_eq!(count(&[1, 2, 3], 3), Ok(3));
        assert_eq!(count(&[1, 2, 3, 4, 5], 5), Ok(7));
        assert_eq!(count(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], 10), Ok(42));
    }

    #[test]
    fn coin_style_sets() {
        assert_eq!(count(&[2, 3, 4], 6), Ok(3));
        assert_eq!(count(&[2, 5, 8, 9, 10], 10), Ok(4));
        assert_eq!(count(&[8, 9, 10], 10), Ok(1));
    }

    #[test]
    fn target_zero_counts_the_empty_selection() {
        assert_eq!(count(&[], 0), Ok(1));
        assert_eq!(count(&[3, 7], 0), Ok(1));
    }

    #[test]
    fn no_addends_reach_nothing_positive() {
        assert_eq!(count(&[], 1), Ok(0));
        assert_eq!(count(&[], 999), Ok(0));
    }

    #[test]
    fn growing_the_set_never_shrinks_the_count() {
        let full = [2u64, 3, 5, 7, 11];
        for target in 0..=40 {
            for upto in 0..full.len() {
                let fewer = count(&full[..upto], target).unwrap();
                let more = count(&full[..=upto], target).unwrap();
                assert!(
                    more >= fewer,
                    "target={target} upto={upto}: {more} < {fewer}"
                );
            }
        }
    }

    #[test]
    fn same_input_same_answer() {
        let addends = [1u64, 2, 5];
        assert_eq!(count(&addends, 17), count(&addends, 17));
        assert_eq!(addends, [1, 2, 5]);
    }

    #[test]
    fn zero_addend_is_rejected_before_any_work() {
        assert_eq!(
            count(&[1, 0, 3], 5),
            Err(PartitionError::ZeroAddend { index: 1 })
        );
        // even the always-one target 0 fails first
        assert_eq!(count(&[0], 0), Err(PartitionError::ZeroAddend { index: 0 }));
    }
}
