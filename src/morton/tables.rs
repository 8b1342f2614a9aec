/// Lookup tables for Morton encoding/decoding
///
/// Each axis gets three forward tables (chunk -> spread key bits) and three
/// inverse tables (masked key fragment -> chunk). Eighteen tables in total,
/// built once and shared read-only by every encode/decode call.

use std::fmt;

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::{chunks, layout, masks};

/// Coordinate axis. The discriminant is the axis' bit offset inside each
/// 3-bit key group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline(always)]
    pub const fn offset(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Spreads an 8-bit chunk so bit k lands on bit 3k + axis offset
///
/// Two zero bits follow every input bit, so the three axes can be OR-ed
/// together without collisions. Bits above the low byte are ignored.
#[inline(always)]
pub const fn spread_chunk(value: u32, axis: Axis) -> u64 {
    let mut result = 0u64;
    let mut bit = 0;
    while bit < 8 {
        if (value >> bit) & 1 != 0 {
            result |= 1u64 << (bit * 3 + axis.offset());
        }
        bit += 1;
    }
    result
}

/// Forward and inverse tables for one axis
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTables {
    axis: Axis,
    // Forward: chunk value -> key bits, already shifted to the chunk's key range
    low: [u64; chunks::LOW_ENTRIES],
    middle: [u64; chunks::MIDDLE_ENTRIES],
    top: [u64; chunks::TOP_ENTRIES],
    // Inverse: masked key fragment -> chunk, already shifted to its place
    // in the 21-bit integer
    low_inverse: FxHashMap<u64, u32>,
    middle_inverse: FxHashMap<u64, u32>,
    top_inverse: FxHashMap<u64, u32>,
    low_mask: u64,
    middle_mask: u64,
    top_mask: u64,
}

impl AxisTables {
    pub fn build(axis: Axis) -> Self {
        let mut low = [0u64; chunks::LOW_ENTRIES];
        let mut middle = [0u64; chunks::MIDDLE_ENTRIES];
        let mut top = [0u64; chunks::TOP_ENTRIES];

        for (chunk, slot) in low.iter_mut().enumerate() {
            *slot = spread_chunk(chunk as u32, axis) << chunks::LOW_KEY_SHIFT;
        }
        for (chunk, slot) in middle.iter_mut().enumerate() {
            *slot = spread_chunk(chunk as u32, axis) << chunks::MIDDLE_KEY_SHIFT;
        }
        for (chunk, slot) in top.iter_mut().enumerate() {
            *slot = (spread_chunk(chunk as u32, axis) << chunks::TOP_KEY_SHIFT) & layout::KEY_MASK;
        }

        let (low_mask, middle_mask, top_mask) = match axis {
            Axis::X => (masks::X_LOW, masks::X_MIDDLE, masks::X_TOP),
            Axis::Y => (masks::Y_LOW, masks::Y_MIDDLE, masks::Y_TOP),
            Axis::Z => (masks::Z_LOW, masks::Z_MIDDLE, masks::Z_TOP),
        };

        Self {
            axis,
            low_inverse: invert(&low, chunks::LOW_INPUT_SHIFT),
            middle_inverse: invert(&middle, chunks::MIDDLE_INPUT_SHIFT),
            top_inverse: invert(&top, chunks::TOP_INPUT_SHIFT),
            low,
            middle,
            top,
            low_mask,
            middle_mask,
            top_mask,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Spreads a 21-bit quantized coordinate into its key bits.
    /// Bits above 21 are ignored.
    #[inline(always)]
    pub fn spread(&self, quantized: u32) -> u64 {
        self.top[((quantized >> chunks::TOP_INPUT_SHIFT) & chunks::TOP_CHUNK_MASK) as usize]
            | self.middle[((quantized >> chunks::MIDDLE_INPUT_SHIFT) & chunks::MIDDLE_CHUNK_MASK) as usize]
            | self.low[((quantized >> chunks::LOW_INPUT_SHIFT) & chunks::LOW_CHUNK_MASK) as usize]
    }

    /// Recovers this axis' 21-bit quantized coordinate from a key
    #[inline(always)]
    pub fn compact(&self, key: u64) -> u32 {
        // A masked fragment is a subset of the level mask, and every subset
        // is tabulated, so indexing cannot miss.
        self.top_inverse[&(key & self.top_mask)]
            | self.middle_inverse[&(key & self.middle_mask)]
            | self.low_inverse[&(key & self.low_mask)]
    }

    /// Decode masks for (top, middle, low) levels
    pub fn masks(&self) -> (u64, u64, u64) {
        (self.top_mask, self.middle_mask, self.low_mask)
    }

    pub fn forward_entries(&self) -> usize {
        self.low.len() + self.middle.len() + self.top.len()
    }

    pub fn inverse_entries(&self) -> usize {
        self.low_inverse.len() + self.middle_inverse.len() + self.top_inverse.len()
    }
}

/// Swaps the (chunk, fragment) pairs of a forward table
fn invert(forward: &[u64], input_shift: u32) -> FxHashMap<u64, u32> {
    let mut inverse = FxHashMap::with_capacity_and_hasher(forward.len(), Default::default());
    for (chunk, &fragment) in forward.iter().enumerate() {
        inverse.insert(fragment, (chunk as u32) << input_shift);
    }
    inverse
}

/// All eighteen tables
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTables {
    pub x: AxisTables,
    pub y: AxisTables,
    pub z: AxisTables,
}

impl LookupTables {
    pub fn build() -> Self {
        Self {
            x: AxisTables::build(Axis::X),
            y: AxisTables::build(Axis::Y),
            z: AxisTables::build(Axis::Z),
        }
    }

    #[inline(always)]
    pub fn axis(&self, axis: Axis) -> &AxisTables {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }

    /// Number of distinct tables (forward + inverse)
    pub const fn table_count() -> usize {
        18
    }

    pub fn forward_entries(&self) -> usize {
        Axis::ALL.iter().map(|&axis| self.axis(axis).forward_entries()).sum()
    }

    pub fn inverse_entries(&self) -> usize {
        Axis::ALL.iter().map(|&axis| self.axis(axis).inverse_entries()).sum()
    }
}

lazy_static! {
    /// Process-wide tables - built on first use, never mutated afterwards
    pub static ref TABLES: LookupTables = {
        let tables = LookupTables::build();
        log::debug!(
            "Built {} Morton lookup tables ({} forward entries, {} inverse entries)",
            LookupTables::table_count(),
            tables.forward_entries(),
            tables.inverse_entries()
        );
        tables
    };
}

/// Shared tables (forces construction on first call)
#[inline(always)]
pub fn lookup_tables() -> &'static LookupTables {
    &TABLES
}
