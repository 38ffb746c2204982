//! Ranked frequency tables.

use std::collections::HashMap;

use serde::Serialize;

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub label: String,
    pub count: usize,
}

impl Tally {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Counts `labels`, most frequent first.
///
/// Equal counts keep the order in which their labels first appeared.
pub fn ranked<I, S>(labels: I) -> Vec<Tally>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut tallies: Vec<Tally> = Vec::new();

    for label in labels {
        let label = label.as_ref();
        match index.get(label) {
            Some(&i) => tallies[i].count += 1,
            None => {
                index.insert(label.to_string(), tallies.len());
                tallies.push(Tally::new(label, 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies
}
