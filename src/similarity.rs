//! Textual similarity between two response bodies.
//!
//! The score is the Ratcliff/Obershelp ratio `2 * M / T`, where `T` is the
//! combined length of both texts and `M` is the total length of the matching
//! blocks found by repeatedly taking the longest common contiguous block and
//! recursing on the pieces to its left and right.
//!
//! Texts are compared as sequences of Unicode scalar values. For long second
//! sequences, elements that make up more than 1% of it (plus one) are
//! "popular" and are not used to seed a match, although matches may still
//! extend across them. This keeps markup-heavy pages (lots of `<`, `>`, `"`
//! and spaces) from dominating the running time.

use std::collections::{HashMap, HashSet};

/// Sequences shorter than this never get the popular-element treatment.
const AUTOJUNK_MIN_LEN: usize = 200;

/// Computes the similarity of two response bodies, in `[0.0, 1.0]`.
///
/// Leading and trailing whitespace is ignored. Identical texts score `1.0`
/// (two empty texts included); texts with no character in common score `0.0`.
///
/// The measure is symmetric: the pair is put into a canonical order
/// (shorter first, then lexicographic) before matching, so
/// `similarity(a, b) == similarity(b, a)` holds exactly.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim();
    let b = b.trim();
    if a == b {
        return 1.0;
    }

    let (first, second) = if (a.len(), a) <= (b.len(), b) {
        (a, b)
    } else {
        (b, a)
    };

    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();
    SequenceMatcher::new(&first, &second).ratio()
}

/// A matched block: `a[a_start..a_start + size] == b[b_start..b_start + size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a_start: usize,
    b_start: usize,
    size: usize,
}

struct SequenceMatcher<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// For each non-popular element of `b`, the ascending indices where it occurs.
    b2j: HashMap<&'a T, Vec<usize>>,
}

impl<'a, T: Eq + std::hash::Hash> SequenceMatcher<'a, T> {
    fn new(a: &'a [T], b: &'a [T]) -> Self {
        let mut b2j: HashMap<&T, Vec<usize>> = HashMap::new();
        for (j, elt) in b.iter().enumerate() {
            b2j.entry(elt).or_default().push(j);
        }

        let n = b.len();
        if n >= AUTOJUNK_MIN_LEN {
            let ntest = n / 100 + 1;
            let popular: HashSet<&T> = b2j
                .iter()
                .filter(|(_, indices)| indices.len() > ntest)
                .map(|(elt, _)| *elt)
                .collect();
            for elt in popular {
                b2j.remove(elt);
            }
        }

        Self { a, b, b2j }
    }

    /// Finds the longest matching block in `a[alo..ahi]` and `b[blo..bhi]`.
    ///
    /// Among equally long blocks the one starting earliest in `a` wins, and
    /// among those the one starting earliest in `b`.
    fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
        let (a, b) = (self.a, self.b);
        let mut best = Block {
            a_start: alo,
            b_start: blo,
            size: 0,
        };

        // j2len[j] = length of the longest match ending at a[i - 1] and b[j]
        let mut j2len: HashMap<usize, usize> = HashMap::new();
        for (i, elt) in a.iter().enumerate().take(ahi).skip(alo) {
            let mut new_j2len: HashMap<usize, usize> = HashMap::new();
            if let Some(indices) = self.b2j.get(elt) {
                for &j in indices {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    new_j2len.insert(j, k);
                    if k > best.size {
                        best = Block {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            j2len = new_j2len;
        }

        // Popular elements never seed a match, but a match may run through them
        while best.a_start > alo
            && best.b_start > blo
            && a[best.a_start - 1] == b[best.b_start - 1]
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.size += 1;
        }
        while best.a_start + best.size < ahi
            && best.b_start + best.size < bhi
            && a[best.a_start + best.size] == b[best.b_start + best.size]
        {
            best.size += 1;
        }

        best
    }

    fn matching_blocks(&self) -> Vec<Block> {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let block = self.find_longest_match(alo, ahi, blo, bhi);
            if block.size == 0 {
                continue;
            }
            let (i, j, k) = (block.a_start, block.b_start, block.size);
            blocks.push(block);
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        blocks.sort_by_key(|block| (block.a_start, block.b_start));
        blocks
    }

    fn ratio(&self) -> f64 {
        let total = self.a.len() + self.b.len();
        if total == 0 {
            return 1.0;
        }
        let matched: usize = self.matching_blocks().iter().map(|block| block.size).sum();
        2.0 * matched as f64 / total as f64
    }
}
