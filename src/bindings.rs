use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A source of variable values for evaluation.
///
/// Implement this trait to evaluate expressions against your own storage,
/// e.g. a struct of event fields or an indexed record. Lookups happen while
/// walking the tree, once per identifier occurrence.
pub trait Bindings {
    /// Returns the value bound to `name`, or `None` if it is unbound.
    fn lookup(&self, name: &str) -> Option<f64>;
}

impl<S: BuildHasher> Bindings for HashMap<String, f64, S> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl<S: BuildHasher> Bindings for HashMap<&str, f64, S> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Bindings for BTreeMap<String, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

impl Bindings for BTreeMap<&str, f64> {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.get(name).copied()
    }
}

// Linear scan; the last pair wins when a name appears twice.
impl Bindings for [(&str, f64)] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.iter().rev().find(|(k, _)| *k == name).map(|&(_, v)| v)
    }
}

impl<const N: usize> Bindings for [(&str, f64); N] {
    fn lookup(&self, name: &str) -> Option<f64> {
        self.as_slice().lookup(name)
    }
}

impl<B: Bindings + ?Sized> Bindings for &B {
    fn lookup(&self, name: &str) -> Option<f64> {
        (**self).lookup(name)
    }
}
