//! Comparison sorts recorded step by step
//!
//! Both sorts work on a private copy of the input. Every snapshot stores a
//! fresh clone of the working array, so a caller holding snapshot `k` is
//! unaffected by the steps recorded after it.

use crate::generators::{Algorithm, SortAlgorithm};
use crate::snapshot::{Metrics, Snapshot, StepKind, StepState, Timeline, TimelineInput};

/// Records array snapshots while keeping running comparison/write counts
struct SortRecorder {
    timeline: Timeline,
    comparisons: usize,
    writes: usize,
}

impl SortRecorder {
    fn new(algorithm: SortAlgorithm, input: &[i32], initial_highlight: Vec<usize>) -> Self {
        let initial = Snapshot::new(
            StepKind::Start,
            StepState::Array(input.to_vec()),
            initial_highlight,
            Metrics::Sort {
                comparisons: 0,
                writes: 0,
            },
            format!("Initial array of {} element(s)", input.len()),
        );
        SortRecorder {
            timeline: Timeline::new(
                Algorithm::Sort(algorithm),
                TimelineInput::Array(input.to_vec()),
                initial,
            ),
            comparisons: 0,
            writes: 0,
        }
    }

    fn record(&mut self, kind: StepKind, array: &[i32], highlight: &[usize], description: String) {
        self.timeline.push(Snapshot::new(
            kind,
            StepState::Array(array.to_vec()),
            highlight.to_vec(),
            Metrics::Sort {
                comparisons: self.comparisons,
                writes: self.writes,
            },
            description,
        ));
    }

    fn finish(mut self, array: &[i32]) -> Timeline {
        self.record(StepKind::Complete, array, &[], "Array sorted".to_string());
        self.timeline
    }
}

/// Insertion sort by adjacent swaps
///
/// For each position `i` a `select` step highlights the element being
/// inserted; each swap is recorded twice, once before (`compare`) and once
/// after (`swap`) with the same highlighted pair `(j, j - 1)`.
pub fn insertion_sort(input: &[i32]) -> Timeline {
    let initial_highlight = if input.is_empty() { vec![] } else { vec![0] };
    let mut recorder = SortRecorder::new(SortAlgorithm::Insertion, input, initial_highlight);
    let mut a = input.to_vec();

    for i in 1..a.len() {
        recorder.record(
            StepKind::Select,
            &a,
            &[i],
            format!("Inserting {} from position {}", a[i], i),
        );

        let mut j = i;
        while j > 0 {
            recorder.comparisons += 1;
            if a[j - 1] <= a[j] {
                break;
            }
            recorder.record(
                StepKind::Compare,
                &a,
                &[j, j - 1],
                format!("{} > {}: swapping", a[j - 1], a[j]),
            );
            a.swap(j - 1, j);
            recorder.writes += 2;
            recorder.record(
                StepKind::Swap,
                &a,
                &[j, j - 1],
                format!("Swapped positions {} and {}", j - 1, j),
            );
            j -= 1;
        }
    }

    recorder.finish(&a)
}

/// Top-down merge sort over inclusive index ranges
pub fn merge_sort(input: &[i32]) -> Timeline {
    let mut recorder = SortRecorder::new(SortAlgorithm::Merge, input, vec![]);
    let mut a = input.to_vec();

    merge_sort_by_key(&mut a, |v| *v, &mut |kind, items: &[i32], highlight| {
        let description = match (kind, highlight) {
            (StepKind::Compare, &[i, j]) => {
                recorder.comparisons += 1;
                format!("Comparing {} and {}", items[i], items[j])
            }
            (StepKind::Drain, &[i]) => format!("Taking remaining {}", items[i]),
            (StepKind::MergeWrite, &[k]) => {
                recorder.writes += 1;
                format!("Writing {} to position {}", items[k], k)
            }
            _ => kind.label().to_string(),
        };
        recorder.record(kind, items, highlight, description);
    });

    recorder.finish(&a)
}

/// Merge sort reporting every compare, drain and write-back to `observe`.
///
/// Ties take the left element first, so the sort is stable with respect to
/// `key`.
pub(crate) fn merge_sort_by_key<T, K, F, O>(items: &mut [T], key: F, observe: &mut O)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
    O: FnMut(StepKind, &[T], &[usize]),
{
    if items.len() > 1 {
        let right = items.len() - 1;
        merge_range(items, 0, right, &key, observe);
    }
}

fn merge_range<T, K, F, O>(items: &mut [T], left: usize, right: usize, key: &F, observe: &mut O)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
    O: FnMut(StepKind, &[T], &[usize]),
{
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_range(items, left, mid, key, observe);
    merge_range(items, mid + 1, right, key, observe);
    merge(items, left, mid, right, key, observe);
}

fn merge<T, K, F, O>(items: &mut [T], left: usize, mid: usize, right: usize, key: &F, observe: &mut O)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
    O: FnMut(StepKind, &[T], &[usize]),
{
    let mut merged = Vec::with_capacity(right - left + 1);
    let (mut i, mut j) = (left, mid + 1);

    while i <= mid && j <= right {
        observe(StepKind::Compare, items, &[i, j]);
        if key(&items[i]) <= key(&items[j]) {
            merged.push(items[i].clone());
            i += 1;
        } else {
            merged.push(items[j].clone());
            j += 1;
        }
    }
    while i <= mid {
        observe(StepKind::Drain, items, &[i]);
        merged.push(items[i].clone());
        i += 1;
    }
    while j <= right {
        observe(StepKind::Drain, items, &[j]);
        merged.push(items[j].clone());
        j += 1;
    }

    for (offset, item) in merged.into_iter().enumerate() {
        let k = left + offset;
        items[k] = item;
        observe(StepKind::MergeWrite, items, &[k]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_merge_writes_left_to_right() {
        let mut items = vec![4, 1];
        let mut writes = Vec::new();
        merge_sort_by_key(&mut items, |v| *v, &mut |kind, _: &[i32], highlight| {
            if kind == StepKind::MergeWrite {
                writes.push(highlight[0]);
            }
        });
        assert_eq!(items, vec![1, 4]);
        assert_eq!(writes, vec![0, 1]);
    }

    proptest! {
        #[test]
        fn merge_sort_is_stable(keys in proptest::collection::vec(0_i32..5, 0..30)) {
            // Tag each key with its origin index; equal keys must keep ascending tags
            let mut tagged: Vec<(i32, usize)> =
                keys.iter().copied().enumerate().map(|(id, k)| (k, id)).collect();
            merge_sort_by_key(&mut tagged, |&(k, _)| k, &mut |_, _: &[(i32, usize)], _| {});

            for pair in tagged.windows(2) {
                prop_assert!(pair[0].0 <= pair[1].0);
                if pair[0].0 == pair[1].0 {
                    prop_assert!(pair[0].1 < pair[1].1);
                }
            }
        }
    }
}
