use crate::{Result, TimingError};

/// Sync pulse polarity.
///
/// EDID descriptors store "positive" as a set bit; [`TimingInfo`] keeps the polarity as an
/// explicit enum so the inversion only happens at the descriptor boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SyncPolarity {
    #[default]
    Positive,
    Negative,
}

impl SyncPolarity {
    pub const fn from_positive_bit(positive: bool) -> Self {
        if positive {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Positive)
    }
}

/// Where a [`TimingInfo`] came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModeSource {
    #[default]
    Unknown,
    DetailedTiming,
    GenericTiming,
    Gtf,
    Cvt,
    CvtReducedBlanking,
    Cvt2,
}

/// Expanded video timing.
///
/// Horizontal positions are in pixels and vertical positions in lines, all counted from the
/// start of the active region. The `*_end` fields are inclusive (zero based), so a blank
/// interval spanning the rest of the line ends at `h_total - 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimingInfo {
    pub dot_clock_hz: u64,

    pub h_total: u32,
    pub h_active: u32,
    pub h_blank_start: u32,
    pub h_blank_end: u32,
    pub h_sync_start: u32,
    pub h_sync_end: u32,
    /// Line rate in Hz.
    pub h_refresh: u32,

    pub v_total: u32,
    pub v_active: u32,
    pub v_blank_start: u32,
    pub v_blank_end: u32,
    pub v_sync_start: u32,
    pub v_sync_end: u32,
    /// Frame rate rounded to the nearest Hz.
    pub v_rounded_rr: u32,

    pub interlaced: bool,
    pub h_sync_polarity: SyncPolarity,
    pub v_sync_polarity: SyncPolarity,

    /// Pixel replication factor minus one (0 means no replication).
    pub pixel_replication: u8,
    /// Mask of supported stereo 3D formats.
    pub s3d_format_mask: u32,
    pub mode_source: ModeSource,
}

/// Allowed pixel clock deviation for two clocks to be treated as equal, in units of
/// 1/100000 (500 = 0.5%, the VESA DMT tolerance).
pub const PIXEL_CLOCK_TOLERANCE_PER_100K: u64 = 500;

impl TimingInfo {
    pub fn h_blank(&self) -> u32 {
        self.h_total.saturating_sub(self.h_active)
    }

    pub fn v_blank(&self) -> u32 {
        self.v_total.saturating_sub(self.v_active)
    }

    pub fn h_front_porch(&self) -> u32 {
        self.h_sync_start.saturating_sub(self.h_active)
    }

    pub fn v_front_porch(&self) -> u32 {
        self.v_sync_start.saturating_sub(self.v_active)
    }

    pub fn h_sync_width(&self) -> u32 {
        self.h_sync_end.saturating_add(1).saturating_sub(self.h_sync_start)
    }

    pub fn v_sync_width(&self) -> u32 {
        self.v_sync_end.saturating_add(1).saturating_sub(self.v_sync_start)
    }

    /// Checks the structural invariants: blank end ≥ blank start ≥ active, and the sync
    /// pulse contained in the blank interval, for both directions.
    pub fn is_well_formed(&self) -> bool {
        fn axis(active: u32, total: u32, bs: u32, be: u32, ss: u32, se: u32) -> bool {
            active <= bs && bs <= be && be < total && bs <= ss && ss <= se && se <= be
        }
        axis(
            self.h_active,
            self.h_total,
            self.h_blank_start,
            self.h_blank_end,
            self.h_sync_start,
            self.h_sync_end,
        ) && axis(
            self.v_active,
            self.v_total,
            self.v_blank_start,
            self.v_blank_end,
            self.v_sync_start,
            self.v_sync_end,
        )
    }

    /// Same mode for mode-list deduplication: geometry, dot clock, scan type and stereo
    /// capabilities all match. Sync placement and polarity are ignored.
    pub fn is_same_timing(&self, other: &TimingInfo) -> bool {
        self.h_active == other.h_active
            && self.h_total == other.h_total
            && self.v_active == other.v_active
            && self.v_total == other.v_total
            && self.dot_clock_hz == other.dot_clock_hz
            && self.interlaced == other.interlaced
            && self.s3d_format_mask == other.s3d_format_mask
    }

    /// Shrinks the active region by `v_delta` lines and `h_delta` pixels while keeping the
    /// totals, sync widths and front porches unchanged (the back porch absorbs the delta).
    ///
    /// Used to report a reduced-active timing for panels that need a misalignment border.
    pub fn apply_custom_alignment(&mut self, v_delta: u32, h_delta: u32) -> Result<()> {
        if v_delta >= self.v_active {
            return Err(TimingError::AlignmentExceedsActive {
                delta: v_delta,
                active: self.v_active,
            });
        }
        if h_delta >= self.h_active {
            return Err(TimingError::AlignmentExceedsActive {
                delta: h_delta,
                active: self.h_active,
            });
        }
        self.v_active -= v_delta;
        self.v_blank_start -= v_delta;
        self.v_sync_start -= v_delta;
        self.v_sync_end -= v_delta;

        self.h_active -= h_delta;
        self.h_blank_start -= h_delta;
        self.h_sync_start -= h_delta;
        self.h_sync_end -= h_delta;
        Ok(())
    }

    /// Derives the source timing for a pixel-replicated mode.
    ///
    /// `pr_mask` is the replication factor: 1 returns the timing unchanged, larger values
    /// divide the dot clock and every horizontal quantity by the factor.
    pub fn from_pixel_replicated(&self, pr_mask: u8) -> Result<TimingInfo> {
        if pr_mask == 0 {
            return Err(TimingError::InvalidPixelReplication);
        }
        let mut out = *self;
        if pr_mask > 1 {
            let factor = u32::from(pr_mask);
            let h_blank = (self.h_blank_end + 1).saturating_sub(self.h_blank_start);
            let h_sync_offset = self.h_front_porch();
            let h_sync_width = self.h_sync_width();

            out.dot_clock_hz = self.dot_clock_hz / u64::from(pr_mask);
            out.h_total = self.h_total / factor;
            out.h_active = self.h_active / factor;
            out.h_blank_start = out.h_active;
            out.h_blank_end = (out.h_blank_start + h_blank / factor).saturating_sub(1);
            out.h_sync_start = out.h_active + h_sync_offset / factor;
            out.h_sync_end = (out.h_sync_start + h_sync_width / factor).saturating_sub(1);
        }
        out.pixel_replication = pr_mask - 1;
        Ok(out)
    }
}

/// `true` when `candidate` is within ±0.5% of `reference`. A zero reference never matches.
pub fn is_same_pixel_clock(reference: u64, candidate: u64) -> bool {
    if reference == 0 {
        return false;
    }
    let deviation = u128::from(reference.abs_diff(candidate)) * 100_000 / u128::from(reference);
    deviation <= u128::from(PIXEL_CLOCK_TOLERANCE_PER_100K)
}

/// Rounded frame rate, `(clock + total/2) / total`.
pub(crate) fn rounded_refresh(pixel_clock_hz: u64, h_total: u32, v_total: u32) -> u32 {
    let pixels = u64::from(h_total) * u64::from(v_total);
    if pixels == 0 {
        return 0;
    }
    ((pixel_clock_hz + pixels / 2) / pixels) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing_1080p() -> TimingInfo {
        TimingInfo {
            dot_clock_hz: 148_500_000,
            h_total: 2200,
            h_active: 1920,
            h_blank_start: 1920,
            h_blank_end: 2199,
            h_sync_start: 2008,
            h_sync_end: 2051,
            h_refresh: 67_500,
            v_total: 1125,
            v_active: 1080,
            v_blank_start: 1080,
            v_blank_end: 1124,
            v_sync_start: 1084,
            v_sync_end: 1088,
            v_rounded_rr: 60,
            ..TimingInfo::default()
        }
    }

    #[test]
    fn pixel_clock_tolerance_is_half_a_percent() {
        assert!(is_same_pixel_clock(148_500_000, 148_500_000));
        assert!(is_same_pixel_clock(148_500_000, 148_352_000));
        assert!(is_same_pixel_clock(148_500_000, 149_242_500));
        assert!(!is_same_pixel_clock(148_500_000, 149_300_000));
        assert!(!is_same_pixel_clock(0, 0));
    }

    #[test]
    fn same_timing_ignores_sync_placement() {
        let a = timing_1080p();
        let mut b = a;
        b.h_sync_start += 4;
        b.v_sync_polarity = SyncPolarity::Negative;
        assert!(a.is_same_timing(&b));
        b.s3d_format_mask = 1;
        assert!(!a.is_same_timing(&b));
    }

    #[test]
    fn custom_alignment_keeps_totals_and_porches() {
        let mut t = timing_1080p();
        t.apply_custom_alignment(8, 16).unwrap();
        assert_eq!(t.h_active, 1904);
        assert_eq!(t.v_active, 1072);
        assert_eq!(t.h_total, 2200);
        assert_eq!(t.v_total, 1125);
        assert_eq!(t.h_front_porch(), 88);
        assert_eq!(t.v_sync_width(), 5);
    }

    #[test]
    fn custom_alignment_rejects_delta_larger_than_active() {
        let mut t = timing_1080p();
        assert!(matches!(
            t.apply_custom_alignment(1080, 0).unwrap_err(),
            TimingError::AlignmentExceedsActive { delta: 1080, .. }
        ));
    }

    #[test]
    fn pixel_replication_divides_horizontal_timing() {
        let t = timing_1080p();
        let same = t.from_pixel_replicated(1).unwrap();
        assert_eq!(same.h_active, 1920);
        assert_eq!(same.pixel_replication, 0);

        let half = t.from_pixel_replicated(2).unwrap();
        assert_eq!(half.dot_clock_hz, 74_250_000);
        assert_eq!(half.h_total, 1100);
        assert_eq!(half.h_active, 960);
        assert_eq!(half.h_blank_end, 1099);
        assert_eq!(half.h_sync_start, 1004);
        assert_eq!(half.h_sync_end, 1025);
        assert_eq!(half.pixel_replication, 1);
        assert_eq!(half.v_total, 1125);

        assert_eq!(
            t.from_pixel_replicated(0).unwrap_err(),
            TimingError::InvalidPixelReplication
        );
    }

    #[test]
    fn well_formed_checks_both_axes() {
        let mut t = timing_1080p();
        assert!(t.is_well_formed());
        t.v_sync_end = 1125;
        assert!(!t.is_well_formed());
    }
}
