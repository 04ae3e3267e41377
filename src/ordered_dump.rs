//! Ordered listing of the catalog.
//!
//! Records come out of the table in bucket order, which is meaningless to a
//! reader. They are gathered and sorted by course number with a quicksort
//! using a midpoint pivot and Hoare partitioning. The sort is not stable, so
//! duplicate numbers may come out in either order.

use std::io::Write;

use crate::course::Course;
use crate::hash_table::ChainedHashTable;

/// Splits `items[low..=high]` around the key at its midpoint and returns the
/// index of the last element of the lower part.
fn partition<T, K, F>(items: &mut [T], mut low: usize, mut high: usize, key: &F) -> usize
where
    K: Ord + Clone,
    F: Fn(&T) -> &K,
{
    // Captured by value; the midpoint element may move while partitioning.
    let pivot = key(&items[low + (high - low) / 2]).clone();

    loop {
        while *key(&items[low]) < pivot {
            low += 1;
        }
        while pivot < *key(&items[high]) {
            high -= 1;
        }

        if low >= high {
            return high;
        }

        items.swap(low, high);
        low += 1;
        high -= 1;
    }
}

fn quicksort<T, K, F>(items: &mut [T], begin: usize, end: usize, key: &F)
where
    K: Ord + Clone,
    F: Fn(&T) -> &K,
{
    if begin >= end {
        return;
    }

    let mid = partition(items, begin, end, key);
    quicksort(items, begin, mid, key);
    quicksort(items, mid + 1, end, key);
}

/// Sorts `items` ascending by the key `key` projects. Average O(n log n),
/// O(n^2) on adversarial inputs.
pub fn quicksort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord + Clone,
    F: Fn(&T) -> &K,
{
    if items.len() < 2 {
        return;
    }
    quicksort(items, 0, items.len() - 1, &key);
}

/// Every record in the table, ascending by course number.
pub fn enumerate_sorted(table: &ChainedHashTable) -> Vec<&Course> {
    let mut courses: Vec<&Course> = table.iter().collect();
    quicksort_by_key(&mut courses, |course| &course.number);
    courses
}

/// Writes one rendered course per line, ascending by course number.
pub fn write_sorted<W: Write>(table: &ChainedHashTable, out: &mut W) -> std::io::Result<()> {
    for course in enumerate_sorted(table) {
        writeln!(out, "{}", course)?;
    }
    Ok(())
}
