//! The check suite.
//!
//! Each check starts from fresh copies of the generated columns, runs one
//! algorithm on a zip of them and on materialized tuples, and compares.

use tandem_core::prelude::*;

use crate::config::CheckConfig;
use crate::data::{pair_up, Columns};
use crate::report::{compare_rows, expect_count, CheckError, Result};

/// A named check.
#[derive(Clone, Copy)]
pub struct Check {
    /// Name, also used as the stage in error reports.
    pub name: &'static str,
    /// Runs the check.
    pub run: fn(&'static str, &Columns) -> Result<()>,
}

/// Every check, in run order.
pub const CHECKS: &[Check] = &[
    Check { name: "copy by loop", run: copy_by_loop },
    Check { name: "copy_to", run: copy_by_copy_to },
    Check { name: "mismatch", run: mismatch_both_orders },
    Check { name: "field access", run: field_access },
    Check { name: "quicksort", run: quicksort_matches },
    Check { name: "sort", run: sort_matches },
    Check { name: "make_heap and sort_heap", run: heap_matches },
    Check { name: "unique_copy", run: unique_copy_matches },
    Check { name: "unique and truncate", run: unique_in_place_matches },
    Check { name: "sort by first field", run: sort_first_field_matches },
    Check { name: "unique_copy by first field", run: unique_copy_first_field_matches },
    Check { name: "nested sort by first field", run: nested_first_field_matches },
    Check { name: "nested sort", run: nested_lexicographic_matches },
    Check { name: "nested sort with reversed part", run: nested_reversed_matches },
];

/// Generates the input columns and runs every check, stopping at the first
/// failure.
pub fn run_all(config: &CheckConfig) -> Result<()> {
    config.validate()?;
    let data = Columns::generate(config);
    for check in CHECKS {
        log::info!("running check: {}", check.name);
        (check.run)(check.name, &data)?;
    }
    log::info!("{} checks passed on {} rows", CHECKS.len(), data.len());
    Ok(())
}

fn sorted_pairs(data: &Columns) -> Vec<(i32, i32)> {
    let mut pairs = data.pairs();
    pairs.sort_unstable();
    pairs
}

fn sorted_columns(data: &Columns) -> (Vec<i32>, Vec<i32>) {
    let (mut c1, mut c2) = (data.v1.clone(), data.v2.clone());
    sort(&mut zip((&mut c1, &mut c2)));
    (c1, c2)
}

// ============================================================================
// Traversal
// ============================================================================

fn copy_by_loop(stage: &'static str, data: &Columns) -> Result<()> {
    let mut found = Vec::with_capacity(data.len());
    for row in &zip((&data.v1, &data.v2)) {
        found.push(row.snapshot());
    }
    compare_rows(stage, &data.pairs(), &found)
}

fn copy_by_copy_to(stage: &'static str, data: &Columns) -> Result<()> {
    let mut found = vec![(0, 0); data.len()];
    let written = copy_to(&zip((&data.v1, &data.v2)), &mut found);
    expect_count(stage, found.len(), written)?;
    compare_rows(stage, &data.pairs(), &found)
}

fn mismatch_both_orders(stage: &'static str, data: &Columns) -> Result<()> {
    let pairs = data.pairs();
    let rows = try_zip((&data.v1, &data.v2))?;

    let (p, r) = mismatch_by(&pairs, &rows, |pair, row| *pair == row.snapshot());
    if !p.is_end() || !r.is_end() {
        return Err(CheckError::RowDiffers {
            stage,
            index: p.index(),
        });
    }

    let (r, p) = mismatch_by(&rows, &pairs, |row, pair| row.snapshot() == *pair);
    if !r.is_end() || !p.is_end() {
        return Err(CheckError::RowDiffers {
            stage,
            index: r.index(),
        });
    }
    Ok(())
}

fn field_access(stage: &'static str, data: &Columns) -> Result<()> {
    let pairs = data.pairs();
    let rows = zip((&data.v1, &data.v2));
    match pairs
        .iter()
        .zip(&rows)
        .position(|(pair, row)| pair.0 != *row.0 || pair.1 != *row.1)
    {
        Some(index) => Err(CheckError::RowDiffers { stage, index }),
        None => Ok(()),
    }
}

// ============================================================================
// Sorting
// ============================================================================

fn quicksort_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let expected = sorted_pairs(data);

    let mut pairs = data.pairs();
    quicksort(&mut pairs);
    compare_rows(stage, &expected, &pairs)?;

    let (mut c1, mut c2) = (data.v1.clone(), data.v2.clone());
    quicksort(&mut zip((&mut c1, &mut c2)));
    compare_rows(stage, &expected, &pair_up(&c1, &c2))
}

fn sort_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let (c1, c2) = sorted_columns(data);
    compare_rows(stage, &sorted_pairs(data), &pair_up(&c1, &c2))
}

fn heap_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let (mut c1, mut c2) = (data.v1.clone(), data.v2.clone());
    let mut rows = zip((&mut c1, &mut c2));
    make_heap(&mut rows);
    if !is_heap(&rows) {
        return Err(CheckError::RowDiffers { stage, index: 0 });
    }
    sort_heap(&mut rows);
    compare_rows(stage, &sorted_pairs(data), &pair_up(&c1, &c2))
}

// ============================================================================
// Deduplication
// ============================================================================

fn unique_copy_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let mut expected = sorted_pairs(data);
    expected.dedup();

    let (c1, c2) = sorted_columns(data);
    let mut found = Vec::new();
    let written = unique_copy(&zip((&c1, &c2)), &mut found);
    expect_count(stage, found.len(), written)?;
    compare_rows(stage, &expected, &found)
}

fn unique_in_place_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let mut expected = sorted_pairs(data);
    expected.dedup();

    let (mut c1, mut c2) = sorted_columns(data);
    let mut rows = zip((&mut c1, &mut c2));
    let kept = unique(&mut rows);
    let (c1, c2) = rows.into_parts();
    c1.truncate(kept);
    c2.truncate(kept);
    expect_count(stage, c1.len(), c2.len())?;

    let mut found = vec![(0, 0); kept];
    let written = copy_to(&zip((&*c1, &*c2)), &mut found);
    expect_count(stage, kept, written)?;
    compare_rows(stage, &expected, &found)
}

// ============================================================================
// First-field comparators
// ============================================================================

/// Sorts materialized pairs and zipped columns by first field with the same
/// algorithm, so both see identical comparison outcomes.
fn sorted_by_first(data: &Columns) -> (Vec<(i32, i32)>, Vec<i32>, Vec<i32>) {
    let mut pairs = data.pairs();
    sort_by(&mut pairs, |a, b| a.get().0 < b.get().0);

    let (mut c1, mut c2) = (data.v1.clone(), data.v2.clone());
    sort_by(&mut zip((&mut c1, &mut c2)), less_first);
    (pairs, c1, c2)
}

fn sort_first_field_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let (expected, c1, c2) = sorted_by_first(data);
    let mut found = pair_up(&c1, &c2);
    compare_rows(stage, &expected, &found)?;

    // Same rows overall, only regrouped.
    found.sort_unstable();
    compare_rows(stage, &sorted_pairs(data), &found)
}

fn unique_copy_first_field_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let (mut expected, c1, c2) = sorted_by_first(data);
    let kept = unique_by(&mut expected, |a, b| a.get().0 == b.get().0);
    expected.truncate(kept);

    let mut found = Vec::new();
    unique_copy_by(&zip((&c1, &c2)), &mut found, eq_first);
    compare_rows(stage, &expected, &found)
}

// ============================================================================
// Nested zips
// ============================================================================

fn nested_first_field_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let mut expected = data.triples();
    sort_by(&mut expected, |a, b| a.get().0 < b.get().0);

    let (mut c1, mut c2, mut c3) = (data.v1.clone(), data.v2.clone(), data.v3.clone());
    sort_by(&mut zip((zip((&mut c1, &mut c2)), &mut c3)), less_first);

    let found = zip((zip((&c1, &c2)), &c3)).to_rows();
    compare_rows(stage, &expected, &found)
}

fn nested_lexicographic_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let mut expected = data.triples();
    expected.sort_unstable();

    let (mut c1, mut c2, mut c3) = (data.v1.clone(), data.v2.clone(), data.v3.clone());
    let mut rows = zip((zip((&mut c1, &mut c2)), &mut c3));
    sort(&mut rows);
    compare_rows(stage, &expected, &rows.to_rows())
}

fn nested_reversed_matches(stage: &'static str, data: &Columns) -> Result<()> {
    let n = data.len();
    let mut expected: Vec<((i32, i32), i32)> = (0..n)
        .map(|i| ((data.v1[i], data.v2[n - 1 - i]), data.v3[i]))
        .collect();
    expected.sort_unstable();

    let (mut c1, mut c2, mut c3) = (data.v1.clone(), data.v2.clone(), data.v3.clone());
    let mut rows = zip((zip((&mut c1, (&mut c2).reversed())), &mut c3));
    sort(&mut rows);
    compare_rows(stage, &expected, &rows.to_rows())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_check_passes_on_small_input() {
        let data = Columns::generate(&CheckConfig::new().with_size(64).with_modulus(5));
        for check in CHECKS {
            assert!((check.run)(check.name, &data).is_ok(), "{}", check.name);
        }
    }

    #[test]
    fn test_check_names_are_unique() {
        let mut names: Vec<_> = CHECKS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CHECKS.len());
    }

    #[test]
    fn test_run_all_rejects_bad_config() {
        let config = CheckConfig::new().with_modulus(0);
        assert!(matches!(run_all(&config), Err(CheckError::Config(_))));
    }
}
