//! Minimal EDID base block synthesis for emulated or virtual sinks.
//!
//! The block advertises the given timings as detailed timing descriptors, followed by a
//! monitor range limits descriptor that covers all of them.

use aero_display_math::{checksum, div_round_up};

use crate::dtd::{can_timing_fit_in_edid, DetailedTimingDescriptor, DTD_SIZE};
use crate::{Result, TimingError, TimingInfo};

pub const EDID_BLOCK_SIZE: usize = 128;
/// Four descriptor slots, one of which is reserved for the range limits descriptor.
pub const MAX_BASE_BLOCK_DTDS: usize = 3;

const HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];
/// Manufacturer ID, product code, serial number and manufacture week/year.
const VENDOR_PRODUCT: [u8; 10] = [0x36, 0x7F, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x0C];
const CHROMATICITY: [u8; 10] = [0x00, 0x00, 0xA0, 0x57, 0x49, 0x9B, 0x26, 0x10, 0x48, 0x4F];

const VIDEO_INPUT_DP: u8 = 0xA5;
const VIDEO_INPUT_HDMI: u8 = 0x80;
/// Gamma is defined in an extension block.
const GAMMA_UNDEFINED: u8 = 0xFF;
/// Active-off, RGB colour type, sRGB default, preferred timing, continuous frequency.
const FEATURE_SUPPORT: u8 = 0x2F;
const ESTABLISHED_640X480_60: u8 = 0x20;
const STANDARD_TIMING_UNUSED: u8 = 0x01;

const DESCRIPTOR_BASE: usize = 54;
const TAG_RANGE_LIMITS: u8 = 0xFD;
const TAG_DUMMY: u8 = 0x10;

/// Sink type; selects the EDID revision and the video input definition byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdidSinkKind {
    /// EDID 1.4, digital input, 8 bits per colour, DisplayPort interface.
    DisplayPort,
    /// EDID 1.3, digital input.
    Hdmi,
}

impl EdidSinkKind {
    fn revision(self) -> u8 {
        match self {
            Self::DisplayPort => 4,
            Self::Hdmi => 3,
        }
    }

    fn video_input(self) -> u8 {
        match self {
            Self::DisplayPort => VIDEO_INPUT_DP,
            Self::Hdmi => VIDEO_INPUT_HDMI,
        }
    }
}

/// Rates advertised by the range limits descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeLimits {
    pub min_v_rate_hz: u8,
    pub max_v_rate_hz: u8,
    pub min_h_rate_khz: u8,
    pub max_h_rate_khz: u8,
    pub max_pixel_clock_10mhz: u8,
}

impl RangeLimits {
    /// Smallest range covering every timing.
    pub fn covering(timings: &[TimingInfo]) -> Result<Self> {
        let mut limits: Option<Self> = None;
        for t in timings {
            let v_rate = u8::try_from(t.v_rounded_rr)
                .map_err(|_| TimingError::InvalidTiming("refresh rate exceeds 255 Hz"))?;
            let h_min = u8::try_from(t.h_refresh / 1000)
                .map_err(|_| TimingError::InvalidTiming("line rate exceeds 255 kHz"))?;
            let h_max = u8::try_from(div_round_up(u64::from(t.h_refresh), 1000))
                .map_err(|_| TimingError::InvalidTiming("line rate exceeds 255 kHz"))?;
            let clock = u8::try_from(div_round_up(t.dot_clock_hz, 10_000_000))
                .map_err(|_| TimingError::InvalidTiming("pixel clock exceeds 2.55 GHz"))?;

            limits = Some(match limits {
                None => Self {
                    min_v_rate_hz: v_rate,
                    max_v_rate_hz: v_rate,
                    min_h_rate_khz: h_min,
                    max_h_rate_khz: h_max,
                    max_pixel_clock_10mhz: clock,
                },
                Some(l) => Self {
                    min_v_rate_hz: l.min_v_rate_hz.min(v_rate),
                    max_v_rate_hz: l.max_v_rate_hz.max(v_rate),
                    min_h_rate_khz: l.min_h_rate_khz.min(h_min),
                    max_h_rate_khz: l.max_h_rate_khz.max(h_max),
                    max_pixel_clock_10mhz: l.max_pixel_clock_10mhz.max(clock),
                },
            });
        }
        limits.ok_or(TimingError::InvalidTiming("no timings to cover"))
    }

    fn to_descriptor(self) -> [u8; DTD_SIZE] {
        let mut d = [0u8; DTD_SIZE];
        d[3] = TAG_RANGE_LIMITS;
        d[5] = self.min_v_rate_hz;
        d[6] = self.max_v_rate_hz;
        d[7] = self.min_h_rate_khz;
        d[8] = self.max_h_rate_khz;
        d[9] = self.max_pixel_clock_10mhz;
        // Default GTF, then line feed and space padding.
        d[10] = 0x00;
        d[11] = 0x0A;
        d[12..].fill(0x20);
        d
    }
}

fn dummy_descriptor() -> [u8; DTD_SIZE] {
    let mut d = [0u8; DTD_SIZE];
    d[3] = TAG_DUMMY;
    d
}

/// Builds a 128-byte EDID base block. The first timing is the preferred one.
pub fn build_edid_base_block(
    kind: EdidSinkKind,
    timings: &[TimingInfo],
) -> Result<[u8; EDID_BLOCK_SIZE]> {
    if timings.is_empty() {
        return Err(TimingError::InvalidTiming("EDID needs a preferred timing"));
    }
    if timings.len() > MAX_BASE_BLOCK_DTDS {
        return Err(TimingError::TooManyTimings {
            count: timings.len(),
            max: MAX_BASE_BLOCK_DTDS,
        });
    }
    if !timings.iter().all(can_timing_fit_in_edid) {
        return Err(TimingError::InvalidTiming(
            "timing is not representable as a detailed timing descriptor",
        ));
    }
    let limits = RangeLimits::covering(timings)?;

    let mut edid = [0u8; EDID_BLOCK_SIZE];
    edid[0..8].copy_from_slice(&HEADER);
    edid[8..18].copy_from_slice(&VENDOR_PRODUCT);
    edid[18] = 1;
    edid[19] = kind.revision();
    edid[20] = kind.video_input();
    // Screen size unknown.
    edid[21] = 0;
    edid[22] = 0;
    edid[23] = GAMMA_UNDEFINED;
    edid[24] = FEATURE_SUPPORT;
    edid[25..35].copy_from_slice(&CHROMATICITY);
    edid[35] = ESTABLISHED_640X480_60;
    edid[38..54].fill(STANDARD_TIMING_UNUSED);

    let mut slots =
        edid[DESCRIPTOR_BASE..DESCRIPTOR_BASE + 4 * DTD_SIZE].chunks_exact_mut(DTD_SIZE);
    for (slot, timing) in slots.by_ref().zip(timings) {
        slot.copy_from_slice(&DetailedTimingDescriptor::from_timing(timing)?.to_bytes());
    }
    if let Some(slot) = slots.next() {
        slot.copy_from_slice(&limits.to_descriptor());
    }
    for slot in slots {
        slot.copy_from_slice(&dummy_descriptor());
    }

    edid[126] = 0;
    edid[127] = checksum(&edid);

    tracing::debug!(
        ?kind,
        dtds = timings.len(),
        max_pixel_clock_10mhz = limits.max_pixel_clock_10mhz,
        "synthesized EDID base block"
    );
    Ok(edid)
}
