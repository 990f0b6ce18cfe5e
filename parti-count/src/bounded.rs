use std::collections::BTreeMap;
use std::fmt::Display;

use itertools::Itertools;

use crate::{Addend, PartitionError, recursive};

/// One partition plan (addend -> uses per instance) together with how many
/// instances of it the solver decided to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanUse {
    pub plan: BTreeMap<Addend, u64>,
    pub instances: u64,
}

impl PlanUse {
    /// total times `addend` is consumed across all instances of this plan
    pub fn used_total(&self, addend: Addend) -> u64 {
        self.plan.get(&addend).copied().unwrap_or(0) * self.instances
    }
}

impl Display for PlanUse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plan = self
            .plan
            .iter()
            .map(|(addend, uses)| format!("{uses}x{addend}"))
            .join(" + ");
        write!(f, "{} of ({plan})", self.instances)
    }
}

/// sum of instances over every plan
pub fn total_instances(plans: &[PlanUse]) -> u64 {
    plans.iter().map(|plan_use| plan_use.instances).sum()
}

/// how often each addend is consumed across every plan instance
pub fn addend_usage(plans: &[PlanUse]) -> BTreeMap<Addend, u64> {
    let mut usage = BTreeMap::new();
    for plan_use in plans {
        for (addend, uses) in &plan_use.plan {
            *usage.entry(*addend).or_insert(0) += uses * plan_use.instances;
        }
    }
    usage
}

/// Split a finite stock of addends into as many groups as possible where
/// every group sums to `target`.
///
/// Runs in two phases:
///
/// 1. enumerate every partition plan of `target` over the distinct stocked
///    addends ([`recursive::partitions`], availability ignored)
///
/// 2. decide how often to build each plan so the grand total of instances
///    is maximal without overdrawing any addend. A depth-first search over
///    multiplicities, largest first, pruned by `remaining stock value /
///    target`: each instance consumes exactly `target` worth of stock, so
///    the division caps what is still winnable.
///
/// Stocking 20 ones, 10 twos and 4 fives with target 10 builds six tens,
/// e.g. two of `10x1`, two of `5x2` and two of `2x5`.
///
/// Duplicate inventory entries are merged. Returns one [`PlanUse`] per
/// phase-1 plan, in enumeration order, zero-instance plans included.
pub fn max_partitions(
    inventory: &[(Addend, u64)],
    target: u64,
) -> Result<Vec<PlanUse>, PartitionError> {
    let stock = aggregate(inventory)?;
    if target == 0 {
        return Ok(Vec::new());
    }
    let addends = stock.keys().copied().collect_vec();
    let plans = recursive::partitions(&addends, target)?
        .iter()
        .map(|path| plan_of_path(path))
        .collect_vec();
    Ok(assign_instances(&stock, target, &plans))
}

/// Phase 2 on its own: the caller brings the plans, not necessarily all of
/// them. Every plan must sum to `target`; a plan using an addend the
/// inventory does not stock at all gets zero instances.
pub fn max_partitions_with_plans(
    inventory: &[(Addend, u64)],
    target: u64,
    plans: &[BTreeMap<Addend, u64>],
) -> Result<Vec<PlanUse>, PartitionError> {
    let stock = aggregate(inventory)?;
    if target == 0 {
        return Ok(Vec::new());
    }
    Ok(assign_instances(&stock, target, plans))
}

/// merges duplicate addend entries, rejects zero addends by pair index
fn aggregate(inventory: &[(Addend, u64)]) -> Result<BTreeMap<Addend, u64>, PartitionError> {
    let mut stock = BTreeMap::new();
    for (index, (addend, available)) in inventory.iter().enumerate() {
        if *addend == 0 {
            return Err(PartitionError::ZeroAddend { index });
        }
        *stock.entry(*addend).or_insert(0) += available;
    }
    Ok(stock)
}

/// a non-increasing path collapses into (addend, uses) runs
fn plan_of_path(path: &[Addend]) -> BTreeMap<Addend, u64> {
    path.iter()
        .dedup_with_count()
        .map(|(uses, addend)| (*addend, uses as u64))
        .collect()
}

fn assign_instances(
    stock: &BTreeMap<Addend, u64>,
    target: u64,
    plans: &[BTreeMap<Addend, u64>],
) -> Vec<PlanUse> {
    debug_assert_ne!(target, 0);
    let addends = stock.keys().copied().collect_vec();

    // per plan: uses aligned to `addends`, all zeros when the plan wants an
    // addend the inventory does not stock
    let aligned = plans
        .iter()
        .map(|plan| {
            let mut row = vec![0u64; addends.len()];
            for (addend, uses) in plan {
                match addends.binary_search(addend) {
                    Ok(pos) => row[pos] = *uses,
                    Err(_) => return vec![0; addends.len()],
                }
            }
            debug_assert_eq!(
                row.iter()
                    .zip(&addends)
                    .map(|(uses, addend)| uses * addend)
                    .sum::<u64>(),
                target,
                "a partition plan must sum to the partitioned target"
            );
            row
        })
        .collect_vec();
    let plan_value = aligned
        .iter()
        .map(|row| {
            row.iter()
                .zip(&addends)
                .map(|(uses, addend)| uses * addend)
                .sum::<u64>()
        })
        .collect_vec();

    let mut remaining = addends.iter().map(|addend| stock[addend]).collect_vec();
    let remaining_value = addends
        .iter()
        .zip(&remaining)
        .map(|(addend, have)| addend * have)
        .sum();

    let mut search = Search {
        aligned,
        plan_value,
        target,
        best_total: 0,
        best: vec![0; plans.len()],
        current: vec![0; plans.len()],
    };
    search.descend(0, &mut remaining, remaining_value, 0);

    plans
        .iter()
        .zip(search.best)
        .map(|(plan, instances)| PlanUse {
            plan: plan.clone(),
            instances,
        })
        .collect_vec()
}

struct Search {
    aligned: Vec<Vec<u64>>,
    plan_value: Vec<u64>,
    target: u64,
    best_total: u64,
    best: Vec<u64>,
    current: Vec<u64>,
}

impl Search {
    fn descend(
        &mut self,
        plan_idx: usize,
        remaining: &mut [u64],
        remaining_value: u64,
        total: u64,
    ) {
        if total + remaining_value / self.target <= self.best_total {
            return;
        }
        if plan_idx == self.aligned.len() {
            if total > self.best_total {
                self.best_total = total;
                self.best.copy_from_slice(&self.current);
            }
            return;
        }

        let mut usable = false;
        let mut max_instances = u64::MAX;
        for (a, have) in remaining.iter().enumerate() {
            let uses = self.aligned[plan_idx][a];
            if uses > 0 {
                usable = true;
                max_instances = max_instances.min(have / uses);
            }
        }
        if !usable {
            max_instances = 0;
        }

        // largest multiplicity first, good totals show up early and feed
        // the value bound
        for instances in (0..=max_instances).rev() {
            for (a, have) in remaining.iter_mut().enumerate() {
                *have -= instances * self.aligned[plan_idx][a];
            }
            self.current[plan_idx] = instances;
            self.descend(
                plan_idx + 1,
                remaining,
                remaining_value - instances * self.plan_value[plan_idx],
                total + instances,
            );
            for (a, have) in remaining.iter_mut().enumerate() {
                *have += instances * self.aligned[plan_idx][a];
            }
        }
    }
}
