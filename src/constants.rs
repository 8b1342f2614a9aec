// morton63 constants - SINGLE SOURCE OF TRUTH
//
// Every width, shift, mask and scale used by the codec lives here.
// The table builder, encoder and decoder all read from this file.

/// Key layout - 21 bits per axis, three axes, 63 bits total
pub mod layout {
    /// Bits of quantized precision per axis
    pub const BITS_PER_AXIS: u32 = 21;
    pub const AXIS_COUNT: u32 = 3;
    pub const KEY_BITS: u32 = BITS_PER_AXIS * AXIS_COUNT; // 63

    /// All 63 key bits set. Bit 63 is never produced by encoding.
    pub const KEY_MASK: u64 = (1u64 << KEY_BITS) - 1;

    /// Largest quantized axis value (2^21 - 1)
    pub const MAX_QUANTIZED: u32 = (1u32 << BITS_PER_AXIS) - 1;
}

/// Chunk levels of a 21-bit quantized coordinate
///
/// Level 1 is the top 5 bits, level 2 the middle byte, level 3 the low byte.
pub mod chunks {
    pub const LOW_WIDTH: u32 = 8;
    pub const MIDDLE_WIDTH: u32 = 8;
    pub const TOP_WIDTH: u32 = 5;

    /// Position of each chunk inside the 21-bit integer
    pub const LOW_INPUT_SHIFT: u32 = 0;
    pub const MIDDLE_INPUT_SHIFT: u32 = 8;
    pub const TOP_INPUT_SHIFT: u32 = 16;

    /// Position of each spread chunk inside the key (3 × input shift)
    pub const LOW_KEY_SHIFT: u32 = 0;
    pub const MIDDLE_KEY_SHIFT: u32 = 24;
    pub const TOP_KEY_SHIFT: u32 = 48;

    /// Distinct values per level (table sizes)
    pub const LOW_ENTRIES: usize = 1 << LOW_WIDTH; // 256
    pub const MIDDLE_ENTRIES: usize = 1 << MIDDLE_WIDTH; // 256
    pub const TOP_ENTRIES: usize = 1 << TOP_WIDTH; // 32

    pub const LOW_CHUNK_MASK: u32 = (1 << LOW_WIDTH) - 1;
    pub const MIDDLE_CHUNK_MASK: u32 = (1 << MIDDLE_WIDTH) - 1;
    pub const TOP_CHUNK_MASK: u32 = (1 << TOP_WIDTH) - 1;
}

/// Decode masks - the interleave pattern 0b1001001... shifted per axis and level
///
/// Each mask covers exactly the key bits one forward table can produce.
pub mod masks {
    pub const X_LOW: u64 = 0x0000_0000_0024_9249;
    pub const Y_LOW: u64 = 0x0000_0000_0049_2492;
    pub const Z_LOW: u64 = 0x0000_0000_0092_4924;

    pub const X_MIDDLE: u64 = 0x0000_2492_4900_0000;
    pub const Y_MIDDLE: u64 = 0x0000_4924_9200_0000;
    pub const Z_MIDDLE: u64 = 0x0000_9249_2400_0000;

    pub const X_TOP: u64 = 0x1249_0000_0000_0000;
    pub const Y_TOP: u64 = 0x2492_0000_0000_0000;
    pub const Z_TOP: u64 = 0x4924_0000_0000_0000;
}

/// Fixed-point scale between normalized floats and quantized integers
pub mod quantization {
    /// 2^20 - one quantization step is 1 / SCALE
    pub const SCALE: f64 = 1_048_576.0;

    /// Exactly 1 / 2^20
    pub const INV_SCALE: f64 = 9.5367431640625e-7;

    /// Round-half-up bias applied before flooring
    pub const ROUNDING_BIAS: f64 = 0.5;

    /// Width of one quantization step in normalized units
    pub const STEP: f64 = INV_SCALE;

    /// Accepted input range for checked encoding
    pub const MIN_COORD: f64 = -1.0;
    pub const MAX_COORD: f64 = 1.0;
}
