use crate::network::NodeId;

/// A highlight revert waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct HighlightRevert {
    pub(super) node: NodeId,
    pub(super) due_secs: f64,
    pub(super) generation: u64,
}

/// Fire-and-forget deferred highlight reverts, polled once per frame.
#[derive(Default)]
pub(super) struct TimerQueue {
    pending: Vec<HighlightRevert>,
}

impl TimerQueue {
    pub(super) fn schedule(&mut self, node: NodeId, due_secs: f64, generation: u64) {
        self.pending.push(HighlightRevert {
            node,
            due_secs,
            generation,
        });
    }

    /// Removes and returns every revert due at `now_secs`, in deadline order so the
    /// last-scheduled deadline wins when several target the same node.
    pub(super) fn drain_due(&mut self, now_secs: f64, due: &mut Vec<HighlightRevert>) {
        due.clear();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due_secs <= now_secs {
                due.push(self.pending.swap_remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by(|a, b| a.due_secs.total_cmp(&b.due_secs));
    }

    pub(super) fn clear(&mut self) {
        self.pending.clear();
    }

    pub(super) fn len(&self) -> usize {
        self.pending.len()
    }
}
