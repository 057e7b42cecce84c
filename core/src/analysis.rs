use std::fmt;

use serde::Serialize;

use crate::registry::EntityRegistry;

/// Accumulated cost for one category along a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCost {
    pub category: String,
    pub cost: u64,
}

/// Per-category cost totals, in the order categories were first seen on the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CostBreakdown {
    entries: Vec<CategoryCost>,
}

impl CostBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `category` is present, then add `cost` to its total.
    ///
    /// Totals saturate at `u64::MAX`.
    pub fn add(&mut self, category: &str, cost: u64) {
        match self.entries.iter_mut().find(|e| e.category == category) {
            Some(entry) => entry.cost = entry.cost.saturating_add(cost),
            None => self.entries.push(CategoryCost {
                category: category.to_string(),
                cost,
            }),
        }
    }

    pub fn get(&self, category: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.cost)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryCost> {
        self.entries.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.category.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First category holding the maximum total. `None` only when empty.
    ///
    /// Scans in insertion order and only replaces the current best on a
    /// strictly greater total, so ties go to the earliest category.
    pub fn highest(&self) -> Option<&str> {
        let mut best: Option<&CategoryCost> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.cost > b.cost) {
                best = Some(entry);
            }
        }
        best.map(|e| e.category.as_str())
    }
}

/// Renders as `[cat1 (n1), cat2 (n2)]`.
impl fmt::Display for CostBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", entry.category, entry.cost)?;
        }
        f.write_str("]")
    }
}

/// Path cost analysis over an already computed path.
///
/// Endpoints never pay: only intermediate nodes contribute cost. Path
/// elements with no registered entity are skipped entirely.
#[derive(Debug, Clone, Copy)]
pub struct RouteAnalyzer<'a> {
    registry: &'a EntityRegistry,
}

impl<'a> RouteAnalyzer<'a> {
    pub fn new(registry: &'a EntityRegistry) -> Self {
        Self { registry }
    }

    /// Sum of costs strictly between the first and last element, saturating
    /// at `u64::MAX`.
    pub fn total_cost<S: AsRef<str>>(&self, path: &[S]) -> u64 {
        intermediates(path)
            .iter()
            .filter_map(|id| self.registry.get(id.as_ref()))
            .fold(0u64, |total, e| total.saturating_add(e.cost))
    }

    /// Every category on the path becomes a key (endpoints included, at 0);
    /// only intermediate nodes add their cost.
    pub fn cost_by_category<S: AsRef<str>>(&self, path: &[S]) -> CostBreakdown {
        let last = path.len().saturating_sub(1);
        let mut breakdown = CostBreakdown::new();

        for (i, id) in path.iter().enumerate() {
            let Some(entity) = self.registry.get(id.as_ref()) else {
                continue;
            };
            let cost = if i > 0 && i < last { entity.cost } else { 0 };
            breakdown.add(&entity.category, cost);
        }

        breakdown
    }

    /// See [`CostBreakdown::highest`].
    pub fn highest_cost_category<'b>(&self, breakdown: &'b CostBreakdown) -> Option<&'b str> {
        breakdown.highest()
    }
}

fn intermediates<S>(path: &[S]) -> &[S] {
    if path.len() > 2 {
        &path[1..path.len() - 1]
    } else {
        &[]
    }
}
