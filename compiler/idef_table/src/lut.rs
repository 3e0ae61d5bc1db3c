//! Lookup-table compaction.
//!
//! A [`Lut`] collects many item sequences and packs them into one backing
//! array where overlapping sequences share storage. Every sequence stays
//! recoverable as the contiguous range `[offset, offset + len)`.
//!
//! Packing is a greedy shortest-common-superstring approximation:
//!
//! 1. Sort sequences by descending length, ties in insertion order.
//! 2. Seed the output with the longest unplaced sequence, appended.
//! 3. Repeatedly place the unplaced sequence that overlaps the current
//!    output the most, at any shift, including shifts that grow the output
//!    to the left. Ties go to the first match in scan order.
//! 4. When nothing overlaps, seed again. Stop when everything is placed.
//!
//! Items are compared through dense integer ids assigned on first
//! encounter, so alignment search never compares the items themselves.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Handle to a sequence added to a [`Lut`].
///
/// Only meaningful for the [`Compacted`] produced by the same `Lut`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SequenceId(u32);

impl SequenceId {
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug)]
struct Sequence {
    /// Start in `Lut::storage`.
    start: usize,
    len: usize,
}

/// Collects sequences until [`Lut::compact`] packs them.
#[derive(Clone, Debug)]
pub struct Lut<T> {
    storage: Vec<T>,
    sequences: Vec<Sequence>,
}

impl<T> Default for Lut<T> {
    fn default() -> Self {
        Lut {
            storage: Vec::new(),
            sequences: Vec::new(),
        }
    }
}

impl<T: Clone + Eq + Hash> Lut<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence. Empty sequences occupy no storage and get no handle.
    pub fn add(&mut self, items: impl IntoIterator<Item = T>) -> Option<SequenceId> {
        let start = self.storage.len();
        self.storage.extend(items);
        let len = self.storage.len() - start;
        if len == 0 {
            return None;
        }
        let id = SequenceId(u32::try_from(self.sequences.len()).ok()?);
        self.sequences.push(Sequence { start, len });
        Some(id)
    }

    /// Number of sequences added so far.
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Pack every added sequence into one array.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(sequences = self.sequences.len(), items = self.storage.len())
    )]
    pub fn compact(self) -> Compacted<T> {
        let ids = self.item_ids();
        let mut order: Vec<usize> = (0..self.sequences.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(self.sequences[i].len));

        let mut out: Vec<u32> = Vec::with_capacity(self.storage.len());
        let mut offsets: Vec<usize> = vec![0; self.sequences.len()];
        let mut placed: Vec<usize> = Vec::with_capacity(self.sequences.len());
        let mut unplaced = order;

        while !unplaced.is_empty() {
            let seed = unplaced.remove(0);
            let Sequence { start, len } = self.sequences[seed];
            offsets[seed] = out.len();
            out.extend_from_slice(&ids[start..start + len]);
            placed.push(seed);

            while let Some((position, shift)) = best_overlap(&out, &ids, &self.sequences, &unplaced)
            {
                let index = unplaced.remove(position);
                let Sequence { start, len } = self.sequences[index];
                let at = if shift < 0 {
                    let grow = shift.unsigned_abs();
                    out.splice(0..0, ids[start..start + grow].iter().copied());
                    for &p in &placed {
                        offsets[p] += grow;
                    }
                    0
                } else {
                    shift.unsigned_abs()
                };
                let overlap = (out.len() - at).min(len);
                out.extend_from_slice(&ids[start + overlap..start + len]);
                offsets[index] = at;
                placed.push(index);
            }
        }

        let mut by_id: Vec<Option<&T>> = vec![None; ids.len()];
        for (item, &id) in self.storage.iter().zip(&ids) {
            by_id[id as usize].get_or_insert(item);
        }
        let items: Vec<T> = out
            .iter()
            .filter_map(|&id| by_id[id as usize].cloned())
            .collect();
        tracing::debug!(before = self.storage.len(), after = items.len(), "compacted");

        Compacted {
            items,
            ranges: self
                .sequences
                .iter()
                .zip(offsets)
                .map(|(seq, offset)| (offset, seq.len))
                .collect(),
        }
    }

    /// Dense id per distinct item, numbered by first appearance in storage.
    fn item_ids(&self) -> Vec<u32> {
        let mut ids: FxHashMap<&T, u32> = FxHashMap::default();
        self.storage
            .iter()
            .map(|item| {
                let next = u32::try_from(ids.len()).unwrap_or(u32::MAX);
                *ids.entry(item).or_insert(next)
            })
            .collect()
    }
}

/// The unplaced sequence (position in `unplaced`) and shift with the
/// longest exact overlap against `out`.
fn best_overlap(
    out: &[u32],
    ids: &[u32],
    sequences: &[Sequence],
    unplaced: &[usize],
) -> Option<(usize, isize)> {
    let size = isize::try_from(out.len()).ok()?;
    let mut best: Option<(usize, isize)> = None;
    let mut best_len = 0;
    for (position, &index) in unplaced.iter().enumerate() {
        let Sequence { start, len } = sequences[index];
        // Sorted by length: nothing further down can overlap more.
        if best_len >= len {
            break;
        }
        let count = isize::try_from(len).ok()?;
        for shift in (1 - count)..size {
            let begin = shift.max(0);
            let end = (shift + count).min(size);
            let overlap = (end - begin).unsigned_abs();
            if overlap <= best_len {
                continue;
            }
            let from = start + (begin - shift).unsigned_abs();
            if out[begin.unsigned_abs()..end.unsigned_abs()] == ids[from..from + overlap] {
                best = Some((position, shift));
                best_len = overlap;
            }
        }
    }
    best
}

/// The packed array plus the location of every added sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Compacted<T> {
    items: Vec<T>,
    /// `(offset, len)` per [`SequenceId`].
    ranges: Vec<(usize, usize)>,
}

impl<T> Compacted<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn offset(&self, id: SequenceId) -> usize {
        self.ranges[id.index()].0
    }

    /// The items of one sequence, as stored in the packed array.
    pub fn get(&self, id: SequenceId) -> &[T] {
        let (offset, len) = self.ranges[id.index()];
        &self.items[offset..offset + len]
    }

    /// Offset of an optional sequence, as a `u32` table index.
    pub fn index_of(&self, id: Option<SequenceId>) -> Option<u32> {
        id.and_then(|id| u32::try_from(self.offset(id)).ok())
    }
}
