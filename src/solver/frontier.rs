use std::cmp::Ordering;

/// Frontier entry. Several entries may exist for the same cell, one per improvement of its cost;
/// the stale ones are discarded when popped.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallestCostHolder {
    pub estimated_total: f32,
    pub cost: f32,
    pub index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated total, reversed so the max-heap pops the smallest one.
        // Ties go to the larger cost, favoring cells deeper along their path, then to the lower
        // cell index.
        other
            .estimated_total
            .total_cmp(&self.estimated_total)
            .then_with(|| self.cost.total_cmp(&other.cost))
            .then_with(|| other.index.cmp(&self.index))
    }
}
