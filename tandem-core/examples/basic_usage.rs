//! Basic usage example for Tandem Core.

use tandem_core::prelude::*;

fn main() -> Result<()> {
    println!("Tandem Core Basic Usage Example");
    println!("===============================\n");

    let mut ids = vec![4, 2, 9, 2, 7];
    let mut names = vec!["delta", "bravo", "india", "bravo", "golf"];

    // Example 1: Reading rows
    println!("Example 1: Reading Rows");
    println!("-----------------------");

    let table = try_zip((&ids, &names))?;
    for (id, name) in &table {
        println!("  {id:>2} {name}");
    }

    let cursor = table.begin() + 2;
    let (id, name) = cursor.get();
    println!("Row {}: ({}, {})", cursor.index(), id, name);
    println!("Distance begin..end: {}\n", table.end() - table.begin());

    // Example 2: Sorting in lockstep
    println!("Example 2: Sorting In Lockstep");
    println!("------------------------------");

    sort(&mut zip((&mut ids, &mut names)));
    println!("ids:   {ids:?}");
    println!("names: {names:?}\n");

    // Example 3: Deduplication
    println!("Example 3: Deduplication");
    println!("------------------------");

    let mut table = zip((&mut ids, &mut names));
    let kept = unique(&mut table);
    table.truncate(kept);
    println!("{} distinct rows: {:?}\n", kept, table.to_rows());

    // Example 4: Writing through proxies
    println!("Example 4: Writing Through Proxies");
    println!("----------------------------------");

    table.row_mut(0).assign((1, "alpha"));
    let mut rows = table.rows_mut();
    while let Some((id, _)) = rows.next() {
        *id *= 10;
    }
    println!("Updated: {:?}\n", table.to_rows());

    // Example 5: Length checks
    println!("Example 5: Length Checks");
    println!("------------------------");

    let short = vec![1];
    match try_zip((&ids, &short)) {
        Ok(_) => println!("Unexpectedly zipped"),
        Err(e) => println!("✓ Rejected: {e}"),
    }

    println!("\nAll examples completed successfully!");

    Ok(())
}
