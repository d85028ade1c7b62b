// Integration tests for the sorting timelines

use algotty::generators::{generate_sort_timeline, Algorithm, SortAlgorithm};
use algotty::snapshot::{Metrics, StepKind, Timeline, TimelineInput};
use proptest::prelude::*;

fn final_array(algorithm: SortAlgorithm, input: &[i32]) -> Vec<i32> {
    let timeline = generate_sort_timeline(algorithm, input);
    timeline
        .last()
        .state
        .as_array()
        .expect("sort timelines hold arrays")
        .to_vec()
}

#[test]
fn test_insertion_sort_small_array() {
    let timeline = generate_sort_timeline(SortAlgorithm::Insertion, &[5, 3, 8, 1]);

    assert_eq!(timeline.algorithm(), Algorithm::Sort(SortAlgorithm::Insertion));
    assert_eq!(timeline.len(), 13);
    assert_eq!(timeline.first().state.as_array(), Some(&[5, 3, 8, 1][..]));
    assert_eq!(timeline.first().highlight, vec![0]);
    assert_eq!(timeline.last().kind, StepKind::Complete);
    assert_eq!(timeline.last().state.as_array(), Some(&[1, 3, 5, 8][..]));
    assert_eq!(
        timeline.last().metrics,
        Metrics::Sort {
            comparisons: 5,
            writes: 8
        }
    );

    let swaps = timeline.iter().filter(|s| s.kind == StepKind::Swap).count();
    let compares = timeline.iter().filter(|s| s.kind == StepKind::Compare).count();
    assert_eq!(swaps, 4);
    assert_eq!(compares, 4);
}

/// Swap steps recorded while inserting each element, keyed by the value
/// its `select` step picked up
fn swaps_per_insertion(timeline: &Timeline) -> Vec<(i32, usize)> {
    let mut out: Vec<(i32, usize)> = Vec::new();
    for snapshot in timeline.iter() {
        match snapshot.kind {
            StepKind::Select => {
                let index = snapshot.highlight[0];
                let value = snapshot.state.as_array().unwrap()[index];
                out.push((value, 0));
            }
            StepKind::Swap => {
                if let Some(last) = out.last_mut() {
                    last.1 += 1;
                }
            }
            _ => {}
        }
    }
    out
}

#[test]
fn test_insertion_swaps_per_element() {
    let timeline = generate_sort_timeline(SortAlgorithm::Insertion, &[5, 3, 8, 1]);
    assert_eq!(swaps_per_insertion(&timeline), vec![(3, 1), (8, 0), (1, 3)]);

    let selects: Vec<&str> = timeline
        .iter()
        .filter(|s| s.kind == StepKind::Select)
        .map(|s| s.description.as_str())
        .collect();
    assert_eq!(selects[0], "Inserting 3 from position 1");
    assert_eq!(selects[2], "Inserting 1 from position 3");

    // Moving 1 to the front alternates compare and swap, with no failed compare
    let kinds: Vec<StepKind> = timeline.iter().map(|s| s.kind).collect();
    let last_select = kinds
        .iter()
        .rposition(|&k| k == StepKind::Select)
        .unwrap();
    let tail = &kinds[last_select + 1..kinds.len() - 1];
    assert_eq!(tail.len(), 6);
    assert!(tail
        .chunks(2)
        .all(|pair| pair == [StepKind::Compare, StepKind::Swap]));
}

#[test]
fn test_insertion_swap_steps_share_highlight() {
    let timeline = generate_sort_timeline(SortAlgorithm::Insertion, &[2, 1]);
    let kinds: Vec<StepKind> = timeline.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Start,
            StepKind::Select,
            StepKind::Compare,
            StepKind::Swap,
            StepKind::Complete
        ]
    );
    // Compare shows the array before the swap, Swap after
    assert_eq!(timeline.snapshots()[2].state.as_array(), Some(&[2, 1][..]));
    assert_eq!(timeline.snapshots()[3].state.as_array(), Some(&[1, 2][..]));
    assert_eq!(timeline.snapshots()[2].highlight, vec![1, 0]);
    assert_eq!(timeline.snapshots()[3].highlight, vec![1, 0]);
}

#[test]
fn test_merge_sort_small_array() {
    let timeline = generate_sort_timeline(SortAlgorithm::Merge, &[5, 3, 8, 1]);

    assert_eq!(timeline.first().kind, StepKind::Start);
    assert!(timeline.first().highlight.is_empty());
    assert_eq!(timeline.last().state.as_array(), Some(&[1, 3, 5, 8][..]));

    // Every level of the recursion writes each element back once
    let writes = timeline
        .iter()
        .filter(|s| s.kind == StepKind::MergeWrite)
        .count();
    assert_eq!(writes, 8);
    assert!(timeline
        .iter()
        .filter(|s| s.kind == StepKind::MergeWrite)
        .all(|s| s.highlight.len() == 1));
}

#[test]
fn test_merge_sort_drains_leftovers() {
    let timeline = generate_sort_timeline(SortAlgorithm::Merge, &[1, 2]);
    let kinds: Vec<StepKind> = timeline.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Start,
            StepKind::Compare,
            StepKind::Drain,
            StepKind::MergeWrite,
            StepKind::MergeWrite,
            StepKind::Complete
        ]
    );
}

#[test]
fn test_empty_and_single_inputs() {
    for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
        let empty = generate_sort_timeline(algorithm, &[]);
        assert_eq!(empty.len(), 2);
        assert!(empty.first().highlight.is_empty());
        assert_eq!(empty.last().state.as_array(), Some(&[][..]));

        let single = generate_sort_timeline(algorithm, &[42]);
        assert_eq!(single.last().state.as_array(), Some(&[42][..]));
        assert_eq!(single.last().kind, StepKind::Complete);
    }
}

#[test]
fn test_input_is_kept_on_timeline() {
    let input = vec![9, 4, 7];
    let timeline = generate_sort_timeline(SortAlgorithm::Merge, &input);
    assert_eq!(timeline.input(), &TimelineInput::Array(input));
}

#[test]
fn test_sorted_input_never_swaps() {
    let timeline = generate_sort_timeline(SortAlgorithm::Insertion, &[1, 2, 3, 4, 5]);
    assert!(timeline.iter().all(|s| s.kind != StepKind::Swap));
    assert_eq!(
        timeline.last().metrics,
        Metrics::Sort {
            comparisons: 4,
            writes: 0
        }
    );
}

proptest! {
    #[test]
    fn sorts_produce_sorted_permutation(input in proptest::collection::vec(-50_i32..100, 0..40)) {
        let mut expected = input.clone();
        expected.sort();
        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            prop_assert_eq!(&final_array(algorithm, &input), &expected);
        }
    }

    #[test]
    fn every_snapshot_is_a_permutation(input in proptest::collection::vec(0_i32..20, 0..20)) {
        let mut expected = input.clone();
        expected.sort();
        let timeline = generate_sort_timeline(SortAlgorithm::Insertion, &input);
        for snapshot in timeline.iter() {
            let mut values = snapshot.state.as_array().unwrap().to_vec();
            values.sort();
            prop_assert_eq!(&values, &expected);
            prop_assert!(snapshot.highlight.iter().all(|&h| h < input.len()));
        }
    }

    #[test]
    fn metrics_never_decrease(input in proptest::collection::vec(0_i32..100, 0..25)) {
        for algorithm in [SortAlgorithm::Insertion, SortAlgorithm::Merge] {
            let timeline = generate_sort_timeline(algorithm, &input);
            let counts: Vec<(usize, usize)> = timeline
                .iter()
                .map(|s| match s.metrics {
                    Metrics::Sort { comparisons, writes } => (comparisons, writes),
                    other => panic!("unexpected metrics {:?}", other),
                })
                .collect();
            for pair in counts.windows(2) {
                prop_assert!(pair[0].0 <= pair[1].0);
                prop_assert!(pair[0].1 <= pair[1].1);
            }
        }
    }
}
