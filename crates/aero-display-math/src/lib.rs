//! Integer helpers and fixed-point wrappers shared by the display timing, DSC and
//! DisplayPort bandwidth crates.
//!
//! The VESA and DisplayPort formulas are specified over scaled integers. Each scale gets its
//! own wrapper type here so a U6.4 bits-per-pixel value can't be mixed up with an 11-bit
//! fractional DSC offset by accident:
//!
//! - [`Bppx16`]: U6.4 bits per pixel (DSC `bits_per_pixel`, DP stream bpp)
//! - [`ScaleU3_3`]: U3.3 rate-control scale factor (DSC initial/final scale)
//! - [`Offset11`]: offsets carrying 11 fractional bits (DSC NFL/NSL/slice bpg offsets)
#![forbid(unsafe_code)]

mod fixed;
mod int;

pub use fixed::{Bppx16, Offset11, ScaleU3_3, OFFSET_FRACTIONAL_BITS};
pub use int::{
    checksum, div_round_down, div_round_up, gcd, round_to_3_decimals, round_to_nearest,
    MAX_24BIT_REGISTER,
};
