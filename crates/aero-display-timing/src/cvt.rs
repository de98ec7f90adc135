//! VESA Coordinated Video Timings.
//!
//! [`create_cvt_timing`] implements CVT 1.1 standard ("CRT") blanking and reduced blanking
//! version 1. [`create_cvt2_timing`] implements the CVT 2.0 reduced blanking versions 2 and 3.
//! Margins are not supported by either generator.

use aero_display_math::{round_to_3_decimals, round_to_nearest};

use crate::gtf::{C_PRIME, M_PRIME};
use crate::{timing_value, ModeSource, Result, SyncPolarity, TimingError, TimingInfo};

const CELL_GRAN: u32 = 8;
const MIN_V_FRONT_PORCH: u32 = 3;
const MIN_V_BACK_PORCH: u32 = 6;
/// Standard blanking never uses fewer back porch lines than this.
const MIN_V_BACK_PORCH_STANDARD: u32 = 7;
const HSYNC_PERCENT: f64 = 8.0;
const MIN_VSYNC_BP_US: f64 = 550.0;
const MIN_DUTY_CYCLE: f64 = 20.0;
/// Pixel clock granularity, in clock steps per MHz (0.25 MHz).
const CLOCK_STEPS_PER_MHZ: f64 = 4.0;

const RB_MIN_V_BLANK_US: f64 = 460.0;
const RB_H_BLANK: u32 = 160;
const RB_H_SYNC: u32 = 32;

/// Vertical sync width, keyed by aspect ratio `(num, den, lines)`. Anything else is a
/// custom aspect ratio and gets 10 lines.
const VSYNC_BY_ASPECT: [(u32, u32, u32); 5] =
    [(4, 3, 4), (16, 9, 5), (16, 10, 6), (5, 4, 7), (15, 9, 7)];
const VSYNC_CUSTOM_ASPECT: u32 = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CvtBlanking {
    #[default]
    Standard,
    /// Reduced blanking version 1 (160 pixel horizontal blank).
    Reduced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CvtRequest {
    pub x_res: u32,
    pub y_res: u32,
    pub refresh_rate: u32,
    pub blanking: CvtBlanking,
    pub interlaced: bool,
}

impl CvtRequest {
    pub const fn new(x_res: u32, y_res: u32, refresh_rate: u32) -> Self {
        Self {
            x_res,
            y_res,
            refresh_rate,
            blanking: CvtBlanking::Standard,
            interlaced: false,
        }
    }

    pub const fn reduced_blanking(mut self) -> Self {
        self.blanking = CvtBlanking::Reduced;
        self
    }

    pub const fn interlaced(mut self, interlaced: bool) -> Self {
        self.interlaced = interlaced;
        self
    }
}

/// Whole lines needed to cover `time_us`, rounded up past any fraction.
fn lines_covering(time_us: f64, h_period_us: f64) -> Result<u32> {
    timing_value(((time_us / h_period_us).floor() + 1.0) as i64, "vertical blank lines")
}

fn add(a: u32, b: u32, name: &'static str) -> Result<u32> {
    a.checked_add(b).ok_or(TimingError::InconsistentTiming(name))
}

/// Vertical sync width for an active area.
///
/// An aspect ratio matches when the cell-rounded width equals the width that ratio implies
/// for `v_pixels`, rounded down to whole character cells.
pub fn cvt_vsync_lines(h_pixels_rnd: u32, v_pixels: u32) -> u32 {
    VSYNC_BY_ASPECT
        .iter()
        .find(|&&(num, den, _)| {
            let width = u64::from(v_pixels) * u64::from(num) / u64::from(den);
            u64::from(h_pixels_rnd) == width / u64::from(CELL_GRAN) * u64::from(CELL_GRAN)
        })
        .map_or(VSYNC_CUSTOM_ASPECT, |&(_, _, lines)| lines)
}

pub fn create_cvt_timing(req: &CvtRequest) -> Result<TimingInfo> {
    crate::validate_request(req.x_res, req.y_res, req.refresh_rate)?;

    let interlaced = req.interlaced;
    let interlace = if interlaced { 0.5 } else { 0.0 };
    let v_field_rate_rqd = f64::from(req.refresh_rate) * if interlaced { 2.0 } else { 1.0 };

    let h_pixels_rnd = timing_value(
        round_to_nearest(f64::from(req.x_res) / f64::from(CELL_GRAN)) * i64::from(CELL_GRAN),
        "horizontal active",
    )?;
    let active_pixels = h_pixels_rnd;
    let v_lines = f64::from(req.y_res);
    let v_lines_rnd = timing_value(
        round_to_nearest(if interlaced { v_lines / 2.0 } else { v_lines }),
        "vertical active",
    )?;
    let v_pixels = if interlaced {
        add(v_lines_rnd, v_lines_rnd, "vertical active")?
    } else {
        v_lines_rnd
    };

    let vsync_lines = cvt_vsync_lines(h_pixels_rnd, v_pixels);

    let (h_blank_pixels, h_sync_pixels, total_v_lines, pixel_freq_mhz, h_pol, v_pol) =
        match req.blanking {
            CvtBlanking::Standard => {
                let h_period_est = ((1.0 / v_field_rate_rqd) - MIN_VSYNC_BP_US / 1_000_000.0)
                    / (f64::from(v_lines_rnd) + f64::from(MIN_V_FRONT_PORCH) + interlace)
                    * 1_000_000.0;
                crate::validate_h_period(h_period_est, req.x_res, req.y_res, req.refresh_rate)?;

                let vsync_bp_est = lines_covering(MIN_VSYNC_BP_US, h_period_est)?;
                let vsync_bp = vsync_bp_est.max(vsync_lines + MIN_V_BACK_PORCH);
                let v_back_porch = (vsync_bp - vsync_lines).max(MIN_V_BACK_PORCH_STANDARD);
                let vsync_bp = add(vsync_lines, v_back_porch, "vertical blank")?;

                let total_v_lines = f64::from(v_lines_rnd)
                    + f64::from(vsync_bp)
                    + f64::from(MIN_V_FRONT_PORCH)
                    + interlace;

                let duty = (C_PRIME - M_PRIME * h_period_est / 1000.0).max(MIN_DUTY_CYCLE);
                let cells = (f64::from(active_pixels) * duty
                    / (100.0 - duty)
                    / f64::from(2 * CELL_GRAN)) as u32;
                let h_blank = cells * 2 * CELL_GRAN;
                let total_pixels = add(active_pixels, h_blank, "horizontal total")?;

                let steps = (f64::from(total_pixels) / h_period_est * CLOCK_STEPS_PER_MHZ) as u64;
                let pixel_freq = steps as f64 / CLOCK_STEPS_PER_MHZ;

                let h_sync = timing_value(
                    round_to_nearest(
                        f64::from(total_pixels) / f64::from(CELL_GRAN) * HSYNC_PERCENT / 100.0,
                    ) * i64::from(CELL_GRAN),
                    "horizontal sync width",
                )?;

                (
                    h_blank,
                    h_sync,
                    total_v_lines,
                    pixel_freq,
                    SyncPolarity::Negative,
                    SyncPolarity::Positive,
                )
            }
            CvtBlanking::Reduced => {
                let h_period_est = ((1_000_000.0 / v_field_rate_rqd) - RB_MIN_V_BLANK_US)
                    / f64::from(v_lines_rnd);
                crate::validate_h_period(h_period_est, req.x_res, req.y_res, req.refresh_rate)?;
                let rb_vb_lines = lines_covering(RB_MIN_V_BLANK_US, h_period_est)?;
                let rb_min_vb_lines = vsync_lines + MIN_V_FRONT_PORCH + MIN_V_BACK_PORCH;
                let act_vb_lines = rb_vb_lines.max(rb_min_vb_lines);

                let total_v_lines = f64::from(v_lines_rnd) + f64::from(act_vb_lines) + interlace;
                let total_pixels = add(active_pixels, RB_H_BLANK, "horizontal total")?;

                let steps = (v_field_rate_rqd * total_v_lines * f64::from(total_pixels)
                    * CLOCK_STEPS_PER_MHZ
                    / 1_000_000.0) as u64;
                let pixel_freq = steps as f64 / CLOCK_STEPS_PER_MHZ;

                (
                    RB_H_BLANK,
                    RB_H_SYNC,
                    total_v_lines,
                    pixel_freq,
                    SyncPolarity::Positive,
                    SyncPolarity::Negative,
                )
            }
        };

    let total_pixels = add(active_pixels, h_blank_pixels, "horizontal total")?;
    let act_h_freq_khz = 1000.0 * pixel_freq_mhz / f64::from(total_pixels);
    let act_v_field_rate = 1000.0 * act_h_freq_khz / total_v_lines;
    let act_v_frame_rate = if interlaced {
        act_v_field_rate / 2.0
    } else {
        act_v_field_rate
    };

    // Quantize to whole kHz before scaling up so float error can't leak into the Hz value.
    let pixel_clock_khz = u64::try_from(round_to_nearest(pixel_freq_mhz * 1000.0))
        .map_err(|_| TimingError::InconsistentTiming("negative pixel clock"))?;
    let dot_clock_hz = crate::dot_clock_from_khz(if interlaced {
        pixel_clock_khz / 2
    } else {
        pixel_clock_khz
    })?;

    let h_refresh = timing_value(
        round_to_nearest(round_to_3_decimals(act_h_freq_khz) * 1000.0),
        "horizontal frequency",
    )?;
    let h_refresh = if interlaced { h_refresh / 2 } else { h_refresh };

    let v_total = timing_value(
        if interlaced {
            round_to_3_decimals(total_v_lines * 2.0)
        } else {
            round_to_3_decimals(total_v_lines)
        } as i64,
        "vertical total",
    )?;

    let interlace_line = u32::from(interlaced);
    let v_sync_start = v_pixels + MIN_V_FRONT_PORCH + interlace_line;

    Ok(TimingInfo {
        dot_clock_hz,
        h_total: total_pixels,
        h_active: active_pixels,
        h_blank_start: active_pixels,
        h_blank_end: total_pixels - 1,
        h_sync_start: active_pixels + h_blank_pixels / 2 - h_sync_pixels,
        h_sync_end: active_pixels + h_blank_pixels / 2 - 1,
        h_refresh,
        v_total,
        v_active: v_pixels,
        v_blank_start: v_pixels,
        v_blank_end: v_total - 1,
        v_sync_start,
        v_sync_end: v_sync_start + vsync_lines - 1,
        v_rounded_rr: timing_value(
            round_to_nearest(round_to_3_decimals(act_v_frame_rate)),
            "refresh rate",
        )?,
        interlaced,
        h_sync_polarity: h_pol,
        v_sync_polarity: v_pol,
        mode_source: match req.blanking {
            CvtBlanking::Standard => ModeSource::Cvt,
            CvtBlanking::Reduced => ModeSource::CvtReducedBlanking,
        },
        ..TimingInfo::default()
    })
}

/// CVT 2.0 reduced blanking revision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RbVersion {
    #[default]
    V2,
    V3,
}

const RB2_CLOCK_STEP_KHZ: f64 = 1.0;
const RB2_H_FRONT_PORCH: u32 = 8;
const RB2_MIN_H_BLANK: u32 = 80;
const RB2_H_SYNC: u32 = 32;
const RB2_VSYNC: u32 = 8;
const RB2_MIN_V_BACK_PORCH: u32 = 6;
const RB2_MIN_V_FRONT_PORCH: u32 = 1;
/// Parts-per-million added to the requested refresh rate for reduced blanking v3.
const RB3_V_FIELD_RATE_ADJ_PPM: f64 = 350.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cvt2Request {
    pub x_res: u32,
    pub y_res: u32,
    pub refresh_rate: u32,
    pub version: RbVersion,
    /// v3 only: place the vertical sync at the start of the blanking interval.
    pub early_vsync: bool,
    /// v2 only: apply the 1000/1001 video-optimized refresh multiplier.
    pub video_optimized: bool,
    /// v3 only: requested horizontal blank in pixels, never below 80.
    pub h_blank_pixels: u32,
    /// Requested minimum vertical blank in µs, never below 460.
    pub v_blank_time_us: u32,
}

impl Cvt2Request {
    pub const fn new(x_res: u32, y_res: u32, refresh_rate: u32, version: RbVersion) -> Self {
        Self {
            x_res,
            y_res,
            refresh_rate,
            version,
            early_vsync: false,
            video_optimized: false,
            h_blank_pixels: RB2_MIN_H_BLANK,
            v_blank_time_us: RB_MIN_V_BLANK_US as u32,
        }
    }
}

pub fn create_cvt2_timing(req: &Cvt2Request) -> Result<TimingInfo> {
    crate::validate_request(req.x_res, req.y_res, req.refresh_rate)?;

    let v3 = req.version == RbVersion::V3;
    let cell_gran = if v3 { 8 } else { 1 };
    let v_field_rate_adj = if v3 { RB3_V_FIELD_RATE_ADJ_PPM } else { 0.0 };

    let v_field_rate_rqd = f64::from(req.refresh_rate) * (1.0 + v_field_rate_adj / 1_000_000.0);
    let active_pixels = timing_value(
        round_to_nearest(f64::from(req.x_res) / f64::from(cell_gran)) * i64::from(cell_gran),
        "horizontal active",
    )?;
    let v_lines = req.y_res;

    let h_period_est =
        ((1_000_000.0 / v_field_rate_rqd) - RB_MIN_V_BLANK_US) / f64::from(v_lines);
    crate::validate_h_period(h_period_est, req.x_res, req.y_res, req.refresh_rate)?;
    let act_vb_time = f64::from(req.v_blank_time_us).max(RB_MIN_V_BLANK_US);
    let rb_vb_lines = lines_covering(act_vb_time, h_period_est)?;
    let rb_min_vb_lines = RB2_VSYNC + RB2_MIN_V_FRONT_PORCH + RB2_MIN_V_BACK_PORCH;
    let v_blank = rb_vb_lines.max(rb_min_vb_lines);
    let total_v_lines = add(v_lines, v_blank, "vertical total")?;

    let v_back_porch = if v3 && req.early_vsync {
        rb_vb_lines / 2
    } else {
        RB2_MIN_V_BACK_PORCH
    };
    let v_front_porch = v_blank.saturating_sub(v_back_porch + RB2_VSYNC);

    let h_blank = if v3 {
        req.h_blank_pixels.max(RB2_MIN_H_BLANK)
    } else {
        RB2_MIN_H_BLANK
    };
    let total_pixels = add(active_pixels, h_blank, "horizontal total")?;

    let refresh_multiplier = if !v3 && req.video_optimized {
        1000.0 / 1001.0
    } else {
        1.0
    };
    // Clock in kHz steps: v2 rounds down, v3 rounds up (at 0.1 step resolution).
    let steps = v_field_rate_rqd * f64::from(total_v_lines) * f64::from(total_pixels)
        * refresh_multiplier
        / 1000.0
        / RB2_CLOCK_STEP_KHZ;
    let pixel_clock_khz = if v3 {
        ((steps * 10.0) as u64).div_ceil(10)
    } else {
        steps as u64
    };

    let act_h_freq_khz = pixel_clock_khz as f64 / f64::from(total_pixels);
    let act_v_frame_rate = 1000.0 * act_h_freq_khz / f64::from(total_v_lines);

    let h_sync_start = active_pixels + RB2_H_FRONT_PORCH;
    let v_sync_start = v_lines + v_front_porch;
    let h_refresh = ((round_to_3_decimals(act_h_freq_khz * 1000.0) * 10.0) as u64).div_ceil(10);
    let dot_clock_hz = crate::dot_clock_from_khz(pixel_clock_khz)?;

    Ok(TimingInfo {
        dot_clock_hz,
        h_total: total_pixels,
        h_active: active_pixels,
        h_blank_start: active_pixels,
        h_blank_end: total_pixels - 1,
        h_sync_start,
        h_sync_end: h_sync_start + RB2_H_SYNC - 1,
        h_refresh: u32::try_from(h_refresh)
            .map_err(|_| TimingError::InconsistentTiming("horizontal frequency"))?,
        v_total: total_v_lines,
        v_active: v_lines,
        v_blank_start: v_lines,
        v_blank_end: total_v_lines - 1,
        v_sync_start,
        v_sync_end: v_sync_start + RB2_VSYNC - 1,
        v_rounded_rr: timing_value(round_to_nearest(act_v_frame_rate), "refresh rate")?,
        interlaced: false,
        h_sync_polarity: SyncPolarity::Positive,
        v_sync_polarity: SyncPolarity::Negative,
        mode_source: ModeSource::Cvt2,
        ..TimingInfo::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vsync_width_follows_aspect_ratio() {
        assert_eq!(cvt_vsync_lines(1024, 768), 4);
        assert_eq!(cvt_vsync_lines(1920, 1080), 5);
        assert_eq!(cvt_vsync_lines(1920, 1200), 6);
        assert_eq!(cvt_vsync_lines(1280, 1024), 7);
        assert_eq!(cvt_vsync_lines(1280, 768), 7);
        assert_eq!(cvt_vsync_lines(2560, 1080), 10);
    }

    #[test]
    fn cvt_1920x1080_60_standard_blanking() {
        let t = create_cvt_timing(&CvtRequest::new(1920, 1080, 60)).unwrap();
        assert_eq!(t.h_active, 1920);
        assert_eq!(t.h_total, 2576);
        assert_eq!(t.h_sync_start, 2040);
        assert_eq!(t.h_sync_end, 2247);
        assert_eq!(t.v_active, 1080);
        assert_eq!(t.v_total, 1120);
        assert_eq!(t.v_sync_start, 1083);
        assert_eq!(t.v_sync_end, 1087);
        assert_eq!(t.dot_clock_hz, 173_000_000);
        assert_eq!(t.v_rounded_rr, 60);
        assert_eq!(t.h_sync_polarity, SyncPolarity::Negative);
        assert_eq!(t.v_sync_polarity, SyncPolarity::Positive);
        assert_eq!(t.mode_source, ModeSource::Cvt);
        assert!(t.is_well_formed());
    }

    #[test]
    fn cvt_1920x1080_60_reduced_blanking() {
        let t = create_cvt_timing(&CvtRequest::new(1920, 1080, 60).reduced_blanking()).unwrap();
        assert_eq!(t.h_total, 2080);
        assert_eq!(t.h_sync_start, 1968);
        assert_eq!(t.h_sync_end, 1999);
        assert_eq!(t.v_total, 1111);
        assert_eq!(t.dot_clock_hz, 138_500_000);
        assert_eq!(t.h_sync_polarity, SyncPolarity::Positive);
        assert_eq!(t.v_sync_polarity, SyncPolarity::Negative);
        assert!(t.is_well_formed());
    }

    #[test]
    fn cvt2_rb2_1920x1080_60() {
        let t = create_cvt2_timing(&Cvt2Request::new(1920, 1080, 60, RbVersion::V2)).unwrap();
        assert_eq!(t.h_total, 2000);
        assert_eq!(t.v_total, 1111);
        assert_eq!(t.dot_clock_hz, 133_320_000);
        assert_eq!(t.h_sync_start, 1928);
        assert_eq!(t.h_sync_end, 1959);
        assert_eq!(t.v_sync_start, 1097);
        assert_eq!(t.v_sync_end, 1104);
        assert_eq!(t.v_rounded_rr, 60);
        assert!(t.is_well_formed());
    }

    #[test]
    fn cvt2_video_optimized_lowers_clock() {
        let mut req = Cvt2Request::new(1920, 1080, 60, RbVersion::V2);
        req.video_optimized = true;
        let t = create_cvt2_timing(&req).unwrap();
        assert_eq!(t.dot_clock_hz, 133_186_000);
    }

    #[test]
    fn cvt2_rb3_honours_h_blank_floor() {
        let mut req = Cvt2Request::new(1920, 1080, 60, RbVersion::V3);
        req.h_blank_pixels = 40;
        let t = create_cvt2_timing(&req).unwrap();
        assert_eq!(t.h_total - t.h_active, 80);

        req.h_blank_pixels = 160;
        let t = create_cvt2_timing(&req).unwrap();
        assert_eq!(t.h_total, 2080);
    }

    #[test]
    fn field_period_shorter_than_vertical_blank_is_rejected() {
        let too_fast = TimingError::InvalidRequest {
            x_res: 1920,
            y_res: 1080,
            refresh_rate: 1900,
        };
        assert_eq!(create_cvt_timing(&CvtRequest::new(1920, 1080, 1900)), Err(too_fast));
        // Reduced blanking only needs 460 µs, so 1900 Hz still has room; 2200 Hz does not.
        assert!(create_cvt_timing(&CvtRequest::new(1920, 1080, 1900).reduced_blanking()).is_ok());
        assert!(matches!(
            create_cvt_timing(&CvtRequest::new(1920, 1080, 2200).reduced_blanking()).unwrap_err(),
            TimingError::InvalidRequest { .. }
        ));
        assert_eq!(
            create_cvt2_timing(&Cvt2Request::new(1920, 1080, 2200, RbVersion::V2)),
            Err(TimingError::InvalidRequest {
                x_res: 1920,
                y_res: 1080,
                refresh_rate: 2200,
            })
        );
    }

    #[test]
    fn generators_reject_zero_inputs() {
        assert!(matches!(
            create_cvt_timing(&CvtRequest::new(1920, 1080, 0)).unwrap_err(),
            TimingError::InvalidRequest { .. }
        ));
        assert!(matches!(
            create_cvt2_timing(&Cvt2Request::new(0, 1080, 60, RbVersion::V3)).unwrap_err(),
            TimingError::InvalidRequest { .. }
        ));
    }
}
