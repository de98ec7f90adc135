use core::fmt;

/// Number of fractional bits carried by DSC line/slice bpg offsets.
pub const OFFSET_FRACTIONAL_BITS: u32 = 11;

/// Bits per pixel in unsigned 6.4 fixed point (the raw value is `bpp * 16`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bppx16(u16);

impl Bppx16 {
    pub const FRACTIONAL_BITS: u32 = 4;
    pub const DIVISOR: u32 = 1 << Self::FRACTIONAL_BITS;

    /// Wraps a raw U6.4 register value.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Whole bits per pixel.
    pub const fn from_int(bpp: u16) -> Self {
        Self(bpp << Self::FRACTIONAL_BITS)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Integer part (truncating).
    pub const fn whole(self) -> u16 {
        self.0 >> Self::FRACTIONAL_BITS
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / f64::from(Self::DIVISOR)
    }

    /// Returns the value doubled, saturating at the register width.
    pub const fn doubled(self) -> Self {
        Self(self.0.saturating_mul(2))
    }
}

impl fmt::Display for Bppx16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let frac = (self.0 & 0xF) as u32 * 10_000 / Self::DIVISOR;
        write!(f, "{}.{:04}", self.whole(), frac)
    }
}

/// Rate-control scale factor in unsigned 3.3 fixed point (the raw value is `scale * 8`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScaleU3_3(u8);

impl ScaleU3_3 {
    pub const FRACTIONAL_BITS: u32 = 3;
    /// The largest scale the 6-bit PPS field holds (7.875).
    pub const MAX: Self = Self(63);

    /// Returns `None` when `bits` does not fit the 6-bit PPS field.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        if bits > Self::MAX.0 as u32 {
            None
        } else {
            Some(Self(bits as u8))
        }
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Unsigned offset with [`OFFSET_FRACTIONAL_BITS`] fractional bits, limited to the 16-bit
/// PPS field width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset11(u16);

impl Offset11 {
    pub const MAX: Self = Self(u16::MAX);

    /// Returns `None` when `bits` overflows the 16-bit PPS field.
    pub fn from_bits(bits: u64) -> Option<Self> {
        u16::try_from(bits).ok().map(Self)
    }

    /// `ceil((numerator << 11) / denominator)`; `None` on a zero denominator or overflow.
    pub fn ratio_round_up(numerator: u64, denominator: u64) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        Self::from_bits((numerator << OFFSET_FRACTIONAL_BITS).div_ceil(denominator))
    }

    pub const fn bits(self) -> u16 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bppx16_conversions() {
        let bpp = Bppx16::from_int(24);
        assert_eq!(bpp.bits(), 0x180);
        assert_eq!(bpp.whole(), 24);
        assert_eq!(bpp.as_f64(), 24.0);
        assert_eq!(Bppx16::from_bits(0x88).to_string(), "8.5000");
        assert_eq!(Bppx16::from_int(8).doubled(), Bppx16::from_int(16));
    }

    #[test]
    fn scale_rejects_values_wider_than_six_bits() {
        assert_eq!(ScaleU3_3::from_bits(63).map(ScaleU3_3::bits), Some(63));
        assert!(ScaleU3_3::from_bits(64).is_none());
    }

    #[test]
    fn offset_ratio_rounds_up_and_detects_overflow() {
        // ceil((15 << 11) / 107) = ceil(30720 / 107) = 288
        assert_eq!(Offset11::ratio_round_up(15, 107).map(Offset11::bits), Some(288));
        assert!(Offset11::ratio_round_up(15, 0).is_none());
        assert!(Offset11::ratio_round_up(64, 1).is_none());
        assert_eq!(
            Offset11::ratio_round_up(31, 1).map(Offset11::bits),
            Some(31 << 11)
        );
    }
}
