//! Index → visual tag projection.
//!
//! Every array cell gets exactly one [`CellTag`], derived from a
//! [`SessionSnapshot`]. Nothing is stored per cell, so the view can be
//! rebuilt from scratch after every step.

use super::session::{SearchStatus, SessionSnapshot};

/// Visual role of a single array cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellTag {
    /// Inside the active region, no special role.
    None,
    /// The `lo` bound.
    Low,
    /// The `hi` bound.
    High,
    /// Index the next step will compare.
    Mid,
    /// Excluded from the search by an earlier comparison.
    Examined,
    /// Where the target was found.
    Found,
}

impl CellTag {
    /// Short label used in legends and colourless rendering.
    pub fn label(self) -> &'static str {
        match self {
            CellTag::None => "",
            CellTag::Low => "low",
            CellTag::High => "high",
            CellTag::Mid => "mid",
            CellTag::Examined => "examined",
            CellTag::Found => "found",
        }
    }

    /// Single-character marker for compact strips.
    pub fn marker(self) -> char {
        match self {
            CellTag::None => '.',
            CellTag::Low => 'L',
            CellTag::High => 'H',
            CellTag::Mid => 'M',
            CellTag::Examined => 'x',
            CellTag::Found => '*',
        }
    }
}

/// Compute the tag of every index.
///
/// Precedence when roles coincide: Found > Mid > Low > High. Indices outside
/// `[lo, hi]` are exactly the union of all examined ranges so far.
pub fn project(snapshot: &SessionSnapshot) -> Vec<CellTag> {
    (0..snapshot.len)
        .map(|index| tag_for(snapshot, index))
        .collect()
}

fn tag_for(snapshot: &SessionSnapshot, index: usize) -> CellTag {
    if snapshot.status == SearchStatus::NotFound {
        return CellTag::Examined;
    }
    if snapshot.found_index == Some(index) {
        return CellTag::Found;
    }
    if !snapshot.in_region(index) {
        return CellTag::Examined;
    }
    if snapshot.mid == Some(index) {
        CellTag::Mid
    } else if index == snapshot.lo {
        CellTag::Low
    } else if snapshot.hi == Some(index) {
        CellTag::High
    } else {
        CellTag::None
    }
}

/// Render tags as a compact marker string, e.g. `"L.M.H"`.
pub fn strip(tags: &[CellTag]) -> String {
    tags.iter().map(|tag| tag.marker()).collect()
}
