//! Double-buffered boolean table.
//!
//! One slot per code. `current` is the state as of the last commit and
//! `previous` the state as of the commit before it; edges are derived from the
//! pair instead of being stored.

/// Fixed-size current/previous boolean table with edge queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeTable<const N: usize> {
    current: [bool; N],
    previous: [bool; N],
}

impl<const N: usize> EdgeTable<N> {
    pub const fn new() -> Self {
        Self {
            current: [false; N],
            previous: [false; N],
        }
    }

    /// Copy `current` into `previous`. Called once at the start of a commit.
    pub fn snapshot(&mut self) {
        self.previous = self.current;
    }

    /// Write a slot of `current`. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, is_down: bool) {
        if let Some(slot) = self.current.get_mut(index) {
            *slot = is_down;
        }
    }

    pub fn is_down(&self, index: usize) -> bool {
        self.current[index]
    }

    pub fn was_down(&self, index: usize) -> bool {
        self.previous[index]
    }

    pub fn went_down(&self, index: usize) -> bool {
        self.current[index] && !self.previous[index]
    }

    pub fn went_up(&self, index: usize) -> bool {
        !self.current[index] && self.previous[index]
    }

    pub fn any_down(&self) -> bool {
        self.current.iter().any(|&d| d)
    }

    pub fn any_went_down(&self) -> bool {
        self.current
            .iter()
            .zip(self.previous.iter())
            .any(|(&cur, &prev)| cur && !prev)
    }

    /// Indices currently held, ascending.
    pub fn iter_down(&self) -> impl Iterator<Item = usize> + '_ {
        self.current
            .iter()
            .enumerate()
            .filter_map(|(i, &d)| d.then_some(i))
    }

    /// Indices with a down edge at the last commit, ascending.
    pub fn iter_went_down(&self) -> impl Iterator<Item = usize> + '_ {
        (0..N).filter(move |&i| self.went_down(i))
    }

    /// Indices with an up edge at the last commit, ascending.
    pub fn iter_went_up(&self) -> impl Iterator<Item = usize> + '_ {
        (0..N).filter(move |&i| self.went_up(i))
    }
}

impl<const N: usize> Default for EdgeTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_follow_snapshot() {
        let mut t = EdgeTable::<4>::new();

        t.snapshot();
        t.set(1, true);
        assert!(t.is_down(1));
        assert!(t.went_down(1));
        assert!(!t.went_up(1));

        // No new writes: previous catches up and the edge disappears.
        t.snapshot();
        assert!(t.is_down(1));
        assert!(!t.went_down(1));

        t.snapshot();
        t.set(1, false);
        assert!(t.went_up(1));
        assert!(t.was_down(1));
    }

    #[test]
    fn test_set_out_of_range_is_ignored() {
        let mut t = EdgeTable::<4>::new();
        t.set(4, true);
        t.set(usize::MAX, true);
        assert!(!t.any_down());
    }

    #[test]
    fn test_iterators() {
        let mut t = EdgeTable::<8>::new();
        t.set(2, true);
        t.set(5, true);
        t.snapshot();
        t.set(2, false);
        t.set(7, true);

        assert_eq!(t.iter_down().collect::<Vec<_>>(), vec![5, 7]);
        assert_eq!(t.iter_went_down().collect::<Vec<_>>(), vec![7]);
        assert_eq!(t.iter_went_up().collect::<Vec<_>>(), vec![2]);
        assert!(t.any_went_down());
    }
}
