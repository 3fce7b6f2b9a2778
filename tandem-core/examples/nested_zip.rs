//! Nested zips, projected comparators and reversed parts.

use tandem_core::prelude::*;

fn main() {
    println!("Tandem Core Nested Zip Example");
    println!("==============================\n");

    let mut year = vec![2021, 2019, 2021, 2019, 2020];
    let mut month = vec![3, 11, 1, 11, 6];
    let mut note = vec!["e", "b", "d", "a", "c"];

    // ((year, month), note): the first field is itself a zip.
    let mut table = zip((zip((&mut year, &mut month)), &mut note));

    sort_by(&mut table, less_first);
    println!("By (year, month):");
    for ((y, m), n) in table.rows() {
        println!("  {y}-{m:02} {n}");
    }
    println!("✓ sorted on first field: {}\n", is_sorted_by(&table, less_first));

    dedup_by(&mut table, eq_first);
    println!("One note per month: {:?}\n", table.to_rows());

    // Reversed parts sort back to front.
    let mut scores = vec![3, 1, 2];
    let mut labels = vec!['c', 'a', 'b'];
    sort(&mut zip(((&mut scores).reversed(), (&mut labels).reversed())));
    println!("Descending: {scores:?} {labels:?}");

    // Heap of the largest rows.
    let mut heap_keys = vec![5, 8, 1, 9];
    let mut heap_vals = vec!["five", "eight", "one", "nine"];
    let mut heap = zip((&mut heap_keys, &mut heap_vals));
    make_heap(&mut heap);
    pop_heap(&mut heap, 4);
    let (k, v) = heap.row(3);
    println!("Popped max: ({k}, {v})");
    println!("✓ remaining rows form a heap: {}", is_heap(&heap_keys[..3]));
}
