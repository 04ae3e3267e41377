//! Hash Table
//!
//! Fixed-capacity table of course records with separate chaining. Every bucket
//! is either empty or the head of a singly linked chain of colliding records.
//! The bucket array never grows; a high load factor only lengthens chains.

use std::vec::IntoIter;

use log::trace;

use crate::course::Course;

/// Number of buckets used when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 179;

/// Character offset where the numeric part of a course number starts, after
/// the four letter department code.
const NUMERIC_OFFSET: usize = 4;

struct Node {
    course: Course,
    /// Hash of this node's own course number.
    key: usize,
    next: Option<Box<Node>>,
}

impl Node {
    fn new(course: Course, key: usize) -> Self {
        Self {
            course,
            key,
            next: None,
        }
    }
}

type Bucket = Option<Box<Node>>;

pub struct ChainedHashTable {
    buckets: Vec<Bucket>,
    size: usize,
}

impl ChainedHashTable {
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a table with `capacity` buckets. A capacity of zero falls back
    /// to [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        let mut buckets = Vec::with_capacity(capacity);

        for _ in 0..capacity {
            buckets.push(None);
        }

        Self { buckets, size: 0 }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets.len() as f64
    }

    #[inline(always)]
    pub fn hash(&self, key: &str) -> usize {
        course_hash(key, self.buckets.len())
    }

    /// Inserts `course` at the head of its bucket, or at the tail of the
    /// bucket's chain when the head is taken. Duplicate numbers are not
    /// detected: a second record with the same number stays reachable, but
    /// lookups find the earlier one first.
    pub fn insert(&mut self, course: Course) {
        let index = self.hash(&course.number);
        trace!("insert {} into bucket {}", course.number, index);

        let mut slot = &mut self.buckets[index];
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        *slot = Some(Box::new(Node::new(course, index)));
        self.size += 1;
    }

    /// Returns the first record along the bucket's chain whose number equals
    /// `number`.
    pub fn search(&self, number: &str) -> Option<&Course> {
        let index = self.hash(number);
        let mut node = self.buckets[index].as_deref();

        while let Some(current) = node {
            debug_assert_eq!(current.key, index);
            if current.course.number == number {
                return Some(&current.course);
            }
            node = current.next.as_deref();
        }

        trace!("search {} missed bucket {}", number, index);
        None
    }

    /// Unlinks the first record matching `number` and hands it back. Removing
    /// a head promotes the next chain node into the bucket. Absent numbers are
    /// a no-op.
    pub fn remove(&mut self, number: &str) -> Option<Course> {
        let index = self.hash(number);
        let mut slot = &mut self.buckets[index];

        while slot
            .as_ref()
            .map_or(false, |node| node.course.number != number)
        {
            slot = &mut slot.as_mut()?.next;
        }

        let mut removed = slot.take()?;
        debug_assert_eq!(removed.key, index);
        *slot = removed.next.take();
        self.size -= 1;
        trace!("removed {} from bucket {}", number, index);

        Some(removed.course)
    }

    /// Number of records reachable from bucket `index`, or zero when the index
    /// is out of range.
    pub fn chain_len(&self, index: usize) -> usize {
        let mut count = 0;
        let mut node = self.buckets.get(index).and_then(|bucket| bucket.as_deref());

        while let Some(current) = node {
            count += 1;
            node = current.next.as_deref();
        }

        count
    }

    /// Visits every record in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
        }
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Bucket>,
    node: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.node {
                self.node = node.next.as_deref();
                return Some(&node.course);
            }
            self.node = self.buckets.next()?.as_deref();
        }
    }
}

impl<'a> IntoIterator for &'a ChainedHashTable {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ChainedHashTable {
    type Item = Course;
    type IntoIter = IntoIter<Course>;

    fn into_iter(self) -> Self::IntoIter {
        let mut records = Vec::with_capacity(self.size);

        for bucket in self.buckets {
            let mut node = bucket;
            while let Some(current) = node {
                let current = *current;
                records.push(current.course);
                node = current.next;
            }
        }

        records.into_iter()
    }
}

/// Bucket index of `key` in a table of `capacity` buckets.
///
/// The digits after the department code are parsed leniently (anything that is
/// not a number counts as 0), the code point of the first character is added,
/// and the wrapped 32-bit sum is reduced modulo `capacity`. Keys shorter than
/// the department code hash as if their numeric part were 0.
pub fn course_hash(key: &str, capacity: usize) -> usize {
    let numeric = key
        .char_indices()
        .nth(NUMERIC_OFFSET)
        .map_or(0, |(start, _)| parse_leading_int(key[start..].as_bytes()));
    let first = key.chars().next().map_or(0, |c| c as i32);
    let sum = numeric.wrapping_add(first) as u32;

    sum as usize % capacity
}

fn parse_leading_int(data: &[u8]) -> i32 {
    let mut position = 0;
    while position < data.len() && data[position].is_ascii_whitespace() {
        position += 1;
    }

    let neg = data.get(position) == Some(&b'-');
    if neg || data.get(position) == Some(&b'+') {
        position += 1;
    }

    let mut result: i32 = 0;
    while position < data.len() && data[position].is_ascii_digit() {
        result = result
            .wrapping_mul(10)
            .wrapping_add((data[position] - b'0') as i32);
        position += 1;
    }

    if neg {
        result.wrapping_neg()
    } else {
        result
    }
}
