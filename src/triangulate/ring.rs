//! Cyclic doubly linked list over polygon indices, stored as an arena of
//! slots. Each slot also carries the reflex flag of its vertex.

#[derive(Debug, Clone, Copy)]
struct Link {
    next: usize,
    prev: usize,
    live: bool,
    reflex: bool,
}

/// The shrinking boundary of the polygon being clipped.
///
/// Slot `i` belongs to polygon index `i`. Members keep their original cyclic
/// order; the only mutation after construction is [`ActiveRing::remove`].
#[derive(Debug, Clone)]
pub(crate) struct ActiveRing {
    links: Vec<Link>,
    count: usize,
}

impl ActiveRing {
    /// Links the indices `0..n` in order, closing `n - 1` back onto `0`.
    pub fn new(n: usize) -> Self {
        let links = (0..n)
            .map(|i| Link {
                next: if i + 1 < n { i + 1 } else { 0 },
                prev: if i > 0 { i - 1 } else { n.saturating_sub(1) },
                live: true,
                reflex: false,
            })
            .collect();
        Self { links, count: n }
    }

    #[inline(always)]
    pub fn next(&self, idx: usize) -> usize {
        self.links[idx].next
    }

    #[inline(always)]
    pub fn previous(&self, idx: usize) -> usize {
        self.links[idx].prev
    }

    #[inline(always)]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn contains(&self, idx: usize) -> bool {
        self.links[idx].live
    }

    /// Unlinks `idx`, joining its neighbors. Removed slots keep their stale
    /// links and are never reached again from a live member.
    pub fn remove(&mut self, idx: usize) {
        debug_assert!(self.contains(idx), "slot {} removed twice", idx);
        let Link { next, prev, .. } = self.links[idx];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        self.links[idx].live = false;
        self.links[idx].reflex = false;
        self.count -= 1;
    }

    #[inline(always)]
    pub fn is_reflex(&self, idx: usize) -> bool {
        self.links[idx].reflex
    }

    #[inline(always)]
    pub fn set_reflex(&mut self, idx: usize, reflex: bool) {
        self.links[idx].reflex = reflex;
    }

    /// Live members currently flagged reflex, in slot order.
    pub fn reflex_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.links
            .iter()
            .enumerate()
            .filter(|(_, link)| link.live && link.reflex)
            .map(|(idx, _)| idx)
    }

    /// Live members in ring order, starting at `start`.
    #[cfg(test)]
    pub fn walk(&self, start: usize) -> Vec<usize> {
        let mut members = Vec::with_capacity(self.count);
        let mut idx = start;
        for _ in 0..self.count {
            members.push(idx);
            idx = self.next(idx);
        }
        members
    }
}
