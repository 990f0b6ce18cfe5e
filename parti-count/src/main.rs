use itertools::Itertools;
use parti_count::tabular;

fn main() -> anyhow::Result<()> {
    for num in [3u64, 5, 10] {
        let numset = (1..=num).collect_vec();
        println!("{}", tabular::count(&numset, num)?);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use parti_count::{recursive, tabular};

    #[test]
    fn deliver_same_count() {
        for n in 0..=30u64 {
            let numset = (1..=n).collect_vec();
            let filled = tabular::count(&numset, n).unwrap();
            println!("n={n:3} count={filled:8?}");
            assert_eq!(filled, recursive::count(&numset, n).unwrap());
        }
    }

    #[test]
    fn enumeration_agrees_with_the_count() {
        for n in 0..=18u64 {
            let numset = (1..=n).collect_vec();
            let ways = tabular::count(&numset, n).unwrap();
            let paths = recursive::partitions(&numset, n).unwrap();
            assert_eq!(paths.len() as u64, ways);
        }
    }
}
