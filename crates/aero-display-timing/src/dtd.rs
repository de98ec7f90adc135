use bitflags::bitflags;

use crate::timing::rounded_refresh;
use crate::{ModeSource, Result, SyncPolarity, TimingError, TimingInfo};

/// Size of an EDID detailed timing descriptor.
pub const DTD_SIZE: usize = 18;

/// Largest values an 18-byte descriptor can carry.
pub mod limits {
    pub const MAX_PIXEL_CLOCK_HZ: u64 = 655_350_000;
    pub const MAX_H_ACTIVE: u32 = 4095;
    pub const MAX_H_BLANK: u32 = 4095;
    pub const MAX_H_SYNC: u32 = 1023;
    pub const MAX_H_FRONT_PORCH: u32 = 1023;
    pub const MAX_V_ACTIVE: u32 = 4095;
    pub const MAX_V_BLANK: u32 = 4095;
    pub const MAX_V_SYNC: u32 = 63;
    pub const MAX_V_FRONT_PORCH: u32 = 63;
}

bitflags! {
    /// Byte 17 of a detailed timing descriptor.
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
    pub struct DtdFlags: u8 {
        const STEREO_LOW = 1 << 0;
        /// Digital separate sync: horizontal sync is positive.
        const HSYNC_POSITIVE = 1 << 1;
        /// Digital separate sync: vertical sync is positive.
        const VSYNC_POSITIVE = 1 << 2;
        const SYNC_SEPARATE = 1 << 3;
        const SYNC_DIGITAL = 1 << 4;
        const STEREO_HIGH = 0b11 << 5;
        const INTERLACED = 1 << 7;
    }
}

/// Unpacked EDID detailed timing descriptor.
///
/// Field widths follow the descriptor encoding: 12-bit active/blank/image size, 10-bit
/// horizontal sync offset and width, 6-bit vertical sync offset and width. Values wider
/// than their field are truncated by [`DetailedTimingDescriptor::to_bytes`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DetailedTimingDescriptor {
    /// Pixel clock in 10 kHz units.
    pub pixel_clock_10khz: u16,
    pub h_active: u16,
    pub h_blank: u16,
    pub v_active: u16,
    pub v_blank: u16,
    pub h_sync_offset: u16,
    pub h_sync_width: u16,
    pub v_sync_offset: u8,
    pub v_sync_width: u8,
    pub h_image_size_mm: u16,
    pub v_image_size_mm: u16,
    pub h_border: u8,
    pub v_border: u8,
    pub flags: DtdFlags,
}

impl DetailedTimingDescriptor {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let b: &[u8; DTD_SIZE] = bytes
            .try_into()
            .map_err(|_| TimingError::DescriptorLength { len: bytes.len() })?;

        let hi_nibble = |byte: u8| u16::from(byte >> 4) << 8;
        let lo_nibble = |byte: u8| u16::from(byte & 0x0F) << 8;

        Ok(Self {
            pixel_clock_10khz: u16::from_le_bytes([b[0], b[1]]),
            h_active: u16::from(b[2]) | hi_nibble(b[4]),
            h_blank: u16::from(b[3]) | lo_nibble(b[4]),
            v_active: u16::from(b[5]) | hi_nibble(b[7]),
            v_blank: u16::from(b[6]) | lo_nibble(b[7]),
            h_sync_offset: u16::from(b[8]) | (u16::from((b[11] >> 6) & 0x3) << 8),
            h_sync_width: u16::from(b[9]) | (u16::from((b[11] >> 4) & 0x3) << 8),
            v_sync_offset: (b[10] >> 4) | (((b[11] >> 2) & 0x3) << 4),
            v_sync_width: (b[10] & 0x0F) | ((b[11] & 0x3) << 4),
            h_image_size_mm: u16::from(b[12]) | hi_nibble(b[14]),
            v_image_size_mm: u16::from(b[13]) | lo_nibble(b[14]),
            h_border: b[15],
            v_border: b[16],
            flags: DtdFlags::from_bits_retain(b[17]),
        })
    }

    pub fn to_bytes(&self) -> [u8; DTD_SIZE] {
        let mut b = [0u8; DTD_SIZE];
        b[0..2].copy_from_slice(&self.pixel_clock_10khz.to_le_bytes());
        b[2] = self.h_active as u8;
        b[3] = self.h_blank as u8;
        b[4] = (((self.h_active >> 8) & 0xF) << 4) as u8 | ((self.h_blank >> 8) & 0xF) as u8;
        b[5] = self.v_active as u8;
        b[6] = self.v_blank as u8;
        b[7] = (((self.v_active >> 8) & 0xF) << 4) as u8 | ((self.v_blank >> 8) & 0xF) as u8;
        b[8] = self.h_sync_offset as u8;
        b[9] = self.h_sync_width as u8;
        b[10] = ((self.v_sync_offset & 0xF) << 4) | (self.v_sync_width & 0xF);
        b[11] = ((((self.h_sync_offset >> 8) & 0x3) as u8) << 6)
            | ((((self.h_sync_width >> 8) & 0x3) as u8) << 4)
            | (((self.v_sync_offset >> 4) & 0x3) << 2)
            | ((self.v_sync_width >> 4) & 0x3);
        b[12] = self.h_image_size_mm as u8;
        b[13] = self.v_image_size_mm as u8;
        b[14] = (((self.h_image_size_mm >> 8) & 0xF) << 4) as u8
            | ((self.v_image_size_mm >> 8) & 0xF) as u8;
        b[15] = self.h_border;
        b[16] = self.v_border;
        b[17] = self.flags.bits();
        b
    }

    pub fn is_interlaced(&self) -> bool {
        self.flags.contains(DtdFlags::INTERLACED)
    }

    /// Expands the descriptor into a [`TimingInfo`].
    ///
    /// A sync pulse that overruns the blank interval is shortened to fit instead of
    /// rejected; many shipping panels carry such descriptors and work with the clamped
    /// timing.
    pub fn to_timing(&self) -> Result<TimingInfo> {
        let x_res = u32::from(self.h_active);
        let mut y_res = u32::from(self.v_active);
        let pixel_clock = u64::from(self.pixel_clock_10khz) * 10_000;

        if pixel_clock == 0 || x_res == 0 || y_res == 0 {
            tracing::debug!(
                pixel_clock,
                x_res,
                y_res,
                "rejecting detailed timing with zero clock or active area"
            );
            return Err(TimingError::InvalidTiming(
                "zero pixel clock or active area in descriptor",
            ));
        }

        let interlaced = self.is_interlaced();
        let h_blank = u32::from(self.h_blank);
        let h_total = x_res + h_blank;
        let mut v_blank = u32::from(self.v_blank);
        let mut v_sync_width = u32::from(self.v_sync_width);
        let mut v_sync_offset = u32::from(self.v_sync_offset);
        if interlaced {
            y_res *= 2;
            v_blank *= 2;
            v_sync_width *= 2;
            v_sync_offset *= 2;
        }
        let v_total = y_res + v_blank;

        let mut refresh = rounded_refresh(pixel_clock, h_total, v_total);
        if interlaced {
            refresh *= 2;
        }

        let h_sync_offset = u32::from(self.h_sync_offset);
        let mut h_sync_width = u32::from(self.h_sync_width);
        if h_sync_offset + h_sync_width > h_blank {
            tracing::debug!(
                h_sync_offset,
                h_sync_width,
                h_blank,
                "clamping horizontal sync pulse to blank interval"
            );
            h_sync_width = h_blank.saturating_sub(h_sync_offset);
        }
        if v_sync_offset + v_sync_width > v_blank {
            tracing::debug!(
                v_sync_offset,
                v_sync_width,
                v_blank,
                "clamping vertical sync pulse to blank interval"
            );
            v_sync_width = v_blank.saturating_sub(v_sync_offset);
        }

        let h_border = u32::from(self.h_border);
        let v_border = u32::from(self.v_border);
        let h_sync_start = x_res + h_sync_offset;
        let v_sync_start = y_res + v_sync_offset;

        let mut timing = TimingInfo {
            dot_clock_hz: pixel_clock,
            h_total,
            h_active: x_res,
            h_blank_start: x_res + h_border,
            h_blank_end: (h_total - 1).saturating_sub(h_border),
            h_sync_start,
            h_sync_end: (h_sync_start + h_sync_width).saturating_sub(1),
            h_refresh: (pixel_clock / u64::from(h_total)) as u32,
            v_total,
            v_active: y_res,
            v_blank_start: y_res + v_border,
            v_blank_end: (v_total - 1).saturating_sub(v_border),
            v_sync_start,
            v_sync_end: (v_sync_start + v_sync_width).saturating_sub(1),
            v_rounded_rr: refresh,
            interlaced,
            h_sync_polarity: SyncPolarity::from_positive_bit(
                self.flags.contains(DtdFlags::HSYNC_POSITIVE),
            ),
            v_sync_polarity: SyncPolarity::from_positive_bit(
                self.flags.contains(DtdFlags::VSYNC_POSITIVE),
            ),
            mode_source: ModeSource::DetailedTiming,
            ..TimingInfo::default()
        };

        // An interlaced frame has one more line than two fields' worth of descriptor lines.
        if interlaced {
            timing.v_total += 1;
            timing.v_blank_end += 1;
        }
        Ok(timing)
    }

    /// Packs a [`TimingInfo`] into a descriptor.
    ///
    /// The vertical sync offset is clamped to the 6-bit field maximum (0x3F) rather than
    /// rejected. Any other value wider than its descriptor field is an error. Sync is always
    /// encoded as digital separate.
    pub fn from_timing(timing: &TimingInfo) -> Result<Self> {
        if timing.h_active == 0 || timing.v_active == 0 || timing.dot_clock_hz == 0 {
            return Err(TimingError::InvalidTiming(
                "zero pixel clock or active area in timing",
            ));
        }
        if timing.h_total < timing.h_active || timing.v_total < timing.v_active {
            return Err(TimingError::InvalidTiming("total is smaller than active"));
        }

        let h_active = timing.h_active;
        let h_blank = timing.h_total.saturating_sub(timing.h_active);
        let mut v_active = timing.v_active;
        let mut v_blank = timing.v_total.saturating_sub(timing.v_active);
        if timing.interlaced {
            v_active = (v_active + 1) >> 1;
            // The extra interlace line was added to v_total, so a plain shift drops it.
            v_blank >>= 1;
        }

        let h_sync_offset = timing.h_sync_start.saturating_sub(timing.h_active);
        let h_sync_width = timing.h_sync_width();
        let mut v_sync_offset = timing
            .v_sync_start
            .saturating_sub(timing.v_active)
            .min(0x3F);
        let mut v_sync_width = timing.v_sync_width();
        if timing.interlaced {
            v_sync_offset = (v_sync_offset + 1) >> 1;
            v_sync_width = (v_sync_width + 1) >> 1;
        }

        let mut flags = DtdFlags::SYNC_DIGITAL | DtdFlags::SYNC_SEPARATE;
        if timing.interlaced {
            flags |= DtdFlags::INTERLACED;
        }
        if timing.v_sync_polarity.is_positive() {
            flags |= DtdFlags::VSYNC_POSITIVE;
        }
        if timing.h_sync_polarity.is_positive() {
            flags |= DtdFlags::HSYNC_POSITIVE;
        }

        let field = |value: u32, max: u32, name: &'static str| {
            if value > max {
                tracing::warn!(value, max, field = name, "timing does not fit a descriptor");
                return Err(TimingError::InvalidTiming(name));
            }
            Ok(value)
        };
        let pixel_clock_10khz = u16::try_from(timing.dot_clock_hz / 10_000)
            .map_err(|_| TimingError::InvalidTiming("pixel clock exceeds 655.35 MHz"))?;
        let h_active = field(h_active, limits::MAX_H_ACTIVE, "horizontal active too wide")?;
        let h_blank = field(h_blank, limits::MAX_H_BLANK, "horizontal blank too wide")?;
        let v_active = field(v_active, limits::MAX_V_ACTIVE, "vertical active too tall")?;
        let v_blank = field(v_blank, limits::MAX_V_BLANK, "vertical blank too tall")?;
        let h_sync_offset = field(
            h_sync_offset,
            limits::MAX_H_FRONT_PORCH,
            "horizontal sync offset exceeds 10 bits",
        )?;
        let h_sync_width = field(
            h_sync_width,
            limits::MAX_H_SYNC,
            "horizontal sync width exceeds 10 bits",
        )?;
        let v_sync_width = field(
            v_sync_width,
            limits::MAX_V_SYNC,
            "vertical sync width exceeds 6 bits",
        )?;
        let h_border = field(
            timing.h_blank_start.saturating_sub(timing.h_active),
            u32::from(u8::MAX),
            "horizontal border exceeds 8 bits",
        )?;
        let v_border = field(
            timing.v_total.saturating_sub(1).saturating_sub(timing.v_blank_end),
            u32::from(u8::MAX),
            "vertical border exceeds 8 bits",
        )?;

        // Every value is range checked above.
        Ok(Self {
            pixel_clock_10khz,
            h_active: h_active as u16,
            h_blank: h_blank as u16,
            v_active: v_active as u16,
            v_blank: v_blank as u16,
            h_sync_offset: h_sync_offset as u16,
            h_sync_width: h_sync_width as u16,
            v_sync_offset: v_sync_offset as u8,
            v_sync_width: v_sync_width as u8,
            h_image_size_mm: 0,
            v_image_size_mm: 0,
            h_border: h_border as u8,
            v_border: v_border as u8,
            flags,
        })
    }
}

/// Checks that every field of `timing` fits the width of its descriptor field, so a
/// [`DetailedTimingDescriptor::from_timing`] round trip is lossless.
pub fn can_timing_fit_in_edid(timing: &TimingInfo) -> bool {
    use limits::*;

    timing.dot_clock_hz <= MAX_PIXEL_CLOCK_HZ
        && timing.h_active <= MAX_H_ACTIVE
        && timing.v_active <= MAX_V_ACTIVE
        && timing.h_blank() <= MAX_H_BLANK
        && timing.v_blank() <= MAX_V_BLANK
        && timing.h_sync_width() <= MAX_H_SYNC
        && timing.v_sync_width() <= MAX_V_SYNC
        && timing.h_front_porch() <= MAX_H_FRONT_PORCH
        && timing.v_front_porch() <= MAX_V_FRONT_PORCH
}

/// Timing record used by DisplayID and VBT generic timing blocks. Unlike a detailed
/// timing descriptor it has no border or stereo fields and cannot describe interlace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GenericTimingData {
    pub pixel_clock_khz: u32,
    pub h_active: u16,
    pub h_blank: u16,
    pub h_front_porch: u16,
    pub h_sync: u16,
    pub v_active: u16,
    pub v_blank: u16,
    pub v_front_porch: u16,
    pub v_sync: u16,
    pub h_image_size: u16,
    pub v_image_size: u16,
    pub h_sync_positive: bool,
    pub v_sync_positive: bool,
}

impl GenericTimingData {
    pub fn to_timing(&self) -> Result<TimingInfo> {
        let h_active = u32::from(self.h_active);
        let v_active = u32::from(self.v_active);
        let pixel_clock = u64::from(self.pixel_clock_khz) * 1000;

        if pixel_clock == 0 || h_active == 0 || v_active == 0 {
            return Err(TimingError::InvalidTiming(
                "zero pixel clock or active area in generic timing",
            ));
        }

        let h_total = h_active + u32::from(self.h_blank);
        let v_total = v_active + u32::from(self.v_blank);
        let h_sync_start = h_active + u32::from(self.h_front_porch);
        let v_sync_start = v_active + u32::from(self.v_front_porch);

        Ok(TimingInfo {
            dot_clock_hz: pixel_clock,
            h_total,
            h_active,
            h_blank_start: h_active,
            h_blank_end: h_total - 1,
            h_sync_start,
            h_sync_end: (h_sync_start + u32::from(self.h_sync)).saturating_sub(1),
            h_refresh: (pixel_clock / u64::from(h_total)) as u32,
            v_total,
            v_active,
            v_blank_start: v_active,
            v_blank_end: v_total - 1,
            v_sync_start,
            v_sync_end: (v_sync_start + u32::from(self.v_sync)).saturating_sub(1),
            v_rounded_rr: rounded_refresh(pixel_clock, h_total, v_total),
            h_sync_polarity: SyncPolarity::from_positive_bit(self.h_sync_positive),
            v_sync_polarity: SyncPolarity::from_positive_bit(self.v_sync_positive),
            mode_source: ModeSource::GenericTiming,
            ..TimingInfo::default()
        })
    }

    pub fn from_timing(timing: &TimingInfo) -> Result<Self> {
        if timing.h_active == 0 || timing.v_active == 0 || timing.dot_clock_hz == 0 {
            return Err(TimingError::InvalidTiming(
                "zero pixel clock or active area in timing",
            ));
        }
        if timing.interlaced {
            return Err(TimingError::InvalidTiming(
                "generic timings cannot describe interlaced modes",
            ));
        }
        let field = |v: u32| {
            u16::try_from(v).map_err(|_| TimingError::InvalidTiming("value exceeds 16 bits"))
        };
        Ok(Self {
            pixel_clock_khz: u32::try_from(timing.dot_clock_hz / 1000)
                .map_err(|_| TimingError::InvalidTiming("pixel clock exceeds 32 bits"))?,
            h_active: field(timing.h_active)?,
            h_blank: field(timing.h_blank())?,
            h_front_porch: field(timing.h_front_porch())?,
            h_sync: field(timing.h_sync_width())?,
            v_active: field(timing.v_active)?,
            v_blank: field(timing.v_blank())?,
            v_front_porch: field(timing.v_front_porch())?,
            v_sync: field(timing.v_sync_width())?,
            h_image_size: 0,
            v_image_size: 0,
            h_sync_positive: timing.h_sync_polarity.is_positive(),
            v_sync_positive: timing.v_sync_polarity.is_positive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1024x768@60 (DMT), as shipped in the emulated monitor's base block.
    const DTD_1024X768: [u8; DTD_SIZE] = [
        0x64, 0x19, 0x00, 0x40, 0x41, 0x00, 0x26, 0x30, 0x18, 0x88, 0x36, 0x00, 0x54, 0x0E,
        0x11, 0x00, 0x00, 0x18,
    ];

    #[test]
    fn unpacks_split_fields() {
        let dtd = DetailedTimingDescriptor::from_bytes(&DTD_1024X768).unwrap();
        assert_eq!(dtd.pixel_clock_10khz, 6500);
        assert_eq!(dtd.h_active, 1024);
        assert_eq!(dtd.h_blank, 320);
        assert_eq!(dtd.v_active, 768);
        assert_eq!(dtd.v_blank, 38);
        assert_eq!(dtd.h_sync_offset, 24);
        assert_eq!(dtd.h_sync_width, 136);
        assert_eq!(dtd.v_sync_offset, 3);
        assert_eq!(dtd.v_sync_width, 6);
        assert_eq!(dtd.h_image_size_mm, 340);
        assert_eq!(dtd.v_image_size_mm, 270);
        assert_eq!(dtd.flags, DtdFlags::SYNC_DIGITAL | DtdFlags::SYNC_SEPARATE);
        assert_eq!(dtd.to_bytes(), DTD_1024X768);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            DetailedTimingDescriptor::from_bytes(&[0u8; 17]).unwrap_err(),
            TimingError::DescriptorLength { len: 17 }
        );
    }

    #[test]
    fn expands_to_timing() {
        let t = DetailedTimingDescriptor::from_bytes(&DTD_1024X768)
            .unwrap()
            .to_timing()
            .unwrap();
        assert_eq!(t.dot_clock_hz, 65_000_000);
        assert_eq!(t.h_total, 1344);
        assert_eq!(t.v_total, 806);
        assert_eq!(t.h_sync_start, 1048);
        assert_eq!(t.h_sync_end, 1183);
        assert_eq!(t.v_sync_start, 771);
        assert_eq!(t.v_sync_end, 776);
        assert_eq!(t.v_rounded_rr, 60);
        assert_eq!(t.h_refresh, 48_363);
        assert_eq!(t.h_sync_polarity, SyncPolarity::Negative);
        assert_eq!(t.v_sync_polarity, SyncPolarity::Negative);
        assert!(t.is_well_formed());
    }

    #[test]
    fn clamps_sync_pulse_overrunning_blank() {
        let mut dtd = DetailedTimingDescriptor::from_bytes(&DTD_1024X768).unwrap();
        dtd.h_sync_offset = 300;
        dtd.h_sync_width = 100;
        let t = dtd.to_timing().unwrap();
        assert_eq!(t.h_sync_start, 1324);
        assert_eq!(t.h_sync_end, 1343);
    }

    #[test]
    fn zero_clock_is_invalid() {
        let mut dtd = DetailedTimingDescriptor::from_bytes(&DTD_1024X768).unwrap();
        dtd.pixel_clock_10khz = 0;
        assert!(matches!(
            dtd.to_timing().unwrap_err(),
            TimingError::InvalidTiming(_)
        ));
    }

    #[test]
    fn vertical_sync_offset_is_clamped_to_six_bits() {
        let mut t = DetailedTimingDescriptor::from_bytes(&DTD_1024X768)
            .unwrap()
            .to_timing()
            .unwrap();
        t.v_total = 900;
        t.v_blank_end = 899;
        t.v_sync_start = t.v_active + 80;
        t.v_sync_end = t.v_sync_start + 5;
        let dtd = DetailedTimingDescriptor::from_timing(&t).unwrap();
        assert_eq!(dtd.v_sync_offset, 0x3F);
        assert!(!can_timing_fit_in_edid(&t));
    }

    #[test]
    fn oversized_timing_is_rejected() {
        // 7680x4320@60 at 1188 MHz: clock and active width both overflow their fields.
        let t = TimingInfo {
            dot_clock_hz: 1_188_000_000,
            h_total: 9000,
            h_active: 7680,
            h_blank_start: 7680,
            h_blank_end: 8999,
            h_sync_start: 8032,
            h_sync_end: 8207,
            v_total: 4400,
            v_active: 4320,
            v_blank_start: 4320,
            v_blank_end: 4399,
            v_sync_start: 4336,
            v_sync_end: 4345,
            ..TimingInfo::default()
        };
        assert!(!can_timing_fit_in_edid(&t));
        assert!(matches!(
            DetailedTimingDescriptor::from_timing(&t).unwrap_err(),
            TimingError::InvalidTiming(_)
        ));

        let t = TimingInfo {
            dot_clock_hz: 594_000_000,
            ..t
        };
        assert!(matches!(
            DetailedTimingDescriptor::from_timing(&t).unwrap_err(),
            TimingError::InvalidTiming(_)
        ));
    }

    #[test]
    fn total_below_active_is_rejected() {
        let mut t = DetailedTimingDescriptor::from_bytes(&DTD_1024X768)
            .unwrap()
            .to_timing()
            .unwrap();
        t.v_total = 0;
        assert_eq!(
            DetailedTimingDescriptor::from_timing(&t),
            Err(TimingError::InvalidTiming("total is smaller than active"))
        );
        t.v_total = 806;
        t.h_total = 1000;
        assert!(DetailedTimingDescriptor::from_timing(&t).is_err());
    }

    #[test]
    fn generic_timing_expands_without_borders() {
        let generic = GenericTimingData {
            pixel_clock_khz: 148_500,
            h_active: 1920,
            h_blank: 280,
            h_front_porch: 88,
            h_sync: 44,
            v_active: 1080,
            v_blank: 45,
            v_front_porch: 4,
            v_sync: 5,
            h_sync_positive: true,
            v_sync_positive: true,
            ..GenericTimingData::default()
        };
        let t = generic.to_timing().unwrap();
        assert_eq!(t.h_total, 2200);
        assert_eq!(t.h_sync_end, 2051);
        assert_eq!(t.v_blank_end, 1124);
        assert_eq!(t.v_rounded_rr, 60);
        assert_eq!(t.h_sync_polarity, SyncPolarity::Positive);
        assert_eq!(GenericTimingData::from_timing(&t).unwrap(), generic);
    }
}
