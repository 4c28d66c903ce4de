use crate::graph::Edge;

/// Cost function and allowed-edge predicate of a search.
///
/// Costs must be non-negative: the label-setting search relies on it and doesn't check.
pub trait Weighting {
  fn is_allowed(&self, edge: &Edge) -> bool;
  fn cost(&self, edge: &Edge) -> f64;
}

/// A pair of closures `(cost, allowed)` can be used as a weighting
impl<C, A> Weighting for (C, A)
where
  C: Fn(&Edge) -> f64,
  A: Fn(&Edge) -> bool,
{
  fn is_allowed(&self, edge: &Edge) -> bool {
    (self.1)(edge)
  }

  fn cost(&self, edge: &Edge) -> f64 {
    (self.0)(edge)
  }
}

impl<'a, W: Weighting + ?Sized> Weighting for &'a W {
  fn is_allowed(&self, edge: &Edge) -> bool {
    (*self).is_allowed(edge)
  }

  fn cost(&self, edge: &Edge) -> f64 {
    (*self).cost(edge)
  }
}

/// Edge length in meters
pub fn length_cost(edge: &Edge) -> f64 {
  edge.length as f64
}

/// Travel time in seconds at the maximum allowed speed
pub fn time_cost(edge: &Edge) -> f64 {
  edge.minimum_travel_time()
}

pub fn all_edges(_: &Edge) -> bool {
  true
}
