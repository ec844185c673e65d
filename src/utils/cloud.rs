// src/utils/cloud.rs
use std::collections::VecDeque;

use crate::models::{Tag, WeightedTag};

/// Reorders items so the first ones end up in the middle: item 0 goes to the
/// back, item 1 to the front, item 2 to the back and so on.
pub fn snowball<T>(items: Vec<T>) -> Vec<T> {
    let mut out = VecDeque::with_capacity(items.len());
    for (i, item) in items.into_iter().enumerate() {
        if i % 2 == 0 {
            out.push_back(item);
        } else {
            out.push_front(item);
        }
    }
    out.into()
}

/// Assigns each tag a weight in `1..=buckets`, scaled linearly between the
/// smallest and largest count present. When all counts are equal every tag
/// gets the top weight. Input order is preserved.
pub fn weigh<'a>(tags: &[&'a Tag], buckets: u8) -> Vec<WeightedTag<'a>> {
    let buckets = buckets.max(1);
    let min = tags.iter().map(|t| t.count).min().unwrap_or(0);
    let max = tags.iter().map(|t| t.count).max().unwrap_or(0);
    let span = (max - min) as f64;

    tags.iter()
        .map(|&tag| {
            let weight = if span == 0.0 {
                buckets
            } else {
                let ratio = (tag.count - min) as f64 / span;
                1 + (ratio * (buckets - 1) as f64).round() as u8
            };
            WeightedTag { tag, weight }
        })
        .collect()
}
