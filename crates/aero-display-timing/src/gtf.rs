//! VESA Generalized Timing Formula (GTF 1.1), default secondary curve.

use aero_display_math::round_to_nearest;

use crate::{timing_value, ModeSource, Result, SyncPolarity, TimingError, TimingInfo};

const CELL_GRAN: f64 = 8.0;
const MIN_PORCH: u32 = 1;
const VSYNC_LINES: u32 = 3;
const HSYNC_PERCENT: f64 = 8.0;
/// Minimum vertical sync plus back porch, in µs.
const MIN_VSYNC_BP_US: f64 = 550.0;

const BLANKING_GRADIENT_M: f64 = 600.0;
const BLANKING_OFFSET_C: f64 = 40.0;
const BLANKING_SCALING_K: f64 = 128.0;
const BLANKING_WEIGHTING_J: f64 = 20.0;

/// C' = (C − J)·K/256 + J
pub(crate) const C_PRIME: f64 =
    (BLANKING_OFFSET_C - BLANKING_WEIGHTING_J) * BLANKING_SCALING_K / 256.0 + BLANKING_WEIGHTING_J;
/// M' = K/256·M
pub(crate) const M_PRIME: f64 = BLANKING_SCALING_K / 256.0 * BLANKING_GRADIENT_M;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GtfRequest {
    pub x_res: u32,
    pub y_res: u32,
    /// Frame rate in Hz.
    pub refresh_rate: u32,
    pub interlaced: bool,
}

impl GtfRequest {
    pub const fn new(x_res: u32, y_res: u32, refresh_rate: u32) -> Self {
        Self {
            x_res,
            y_res,
            refresh_rate,
            interlaced: false,
        }
    }

    pub const fn interlaced(mut self, interlaced: bool) -> Self {
        self.interlaced = interlaced;
        self
    }
}

/// Generates a GTF timing for the requested mode.
pub fn create_gtf_timing(req: &GtfRequest) -> Result<TimingInfo> {
    crate::validate_request(req.x_res, req.y_res, req.refresh_rate)?;

    let interlaced = req.interlaced;
    let interlace = if interlaced { 0.5 } else { 0.0 };

    let h_pixels_rnd = timing_value(
        round_to_nearest(f64::from(req.x_res) / CELL_GRAN) * CELL_GRAN as i64,
        "horizontal active",
    )?;
    let v_lines = f64::from(req.y_res);
    let v_lines_rnd = timing_value(
        round_to_nearest(if interlaced { v_lines / 2.0 } else { v_lines }),
        "vertical active",
    )?;
    let v_field_rate_rqd = f64::from(req.refresh_rate) * if interlaced { 2.0 } else { 1.0 };

    // Horizontal period estimate, then refine it against the field rate that estimate yields.
    let h_period_est = ((1.0 / v_field_rate_rqd) - MIN_VSYNC_BP_US / 1_000_000.0)
        / (f64::from(v_lines_rnd) + f64::from(MIN_PORCH) + interlace)
        * 1_000_000.0;
    crate::validate_h_period(h_period_est, req.x_res, req.y_res, req.refresh_rate)?;
    let vsync_bp = round_to_nearest(MIN_VSYNC_BP_US / h_period_est);
    let v_back_porch = vsync_bp - i64::from(VSYNC_LINES);
    let total_v_lines =
        f64::from(v_lines_rnd) + f64::from(MIN_PORCH) + vsync_bp as f64 + interlace;

    let v_field_rate_est = 1.0 / h_period_est / total_v_lines * 1_000_000.0;
    let h_period = h_period_est / (v_field_rate_rqd / v_field_rate_est);
    let v_field_rate = 1.0 / h_period / total_v_lines * 1_000_000.0;
    let v_frame_rate = if interlaced {
        v_field_rate / 2.0
    } else {
        v_field_rate
    };

    let active_pixels = h_pixels_rnd;
    let ideal_duty_cycle = C_PRIME - M_PRIME * h_period / 1000.0;
    if ideal_duty_cycle <= 0.0 {
        return Err(TimingError::InconsistentTiming(
            "blanking duty cycle is not positive",
        ));
    }
    let h_blank_pixels = round_to_nearest(
        f64::from(active_pixels) * ideal_duty_cycle
            / (100.0 - ideal_duty_cycle)
            / (2.0 * CELL_GRAN),
    ) * (2 * CELL_GRAN as i64);
    let total_pixels = i64::from(active_pixels) + h_blank_pixels;

    let pixel_clock_khz = u64::try_from(round_to_nearest(total_pixels as f64 / h_period * 1000.0))
        .map_err(|_| TimingError::InconsistentTiming("negative pixel clock"))?;
    let h_freq_hz = 1000.0 / h_period * 1000.0;
    let h_sync_pixels = round_to_nearest(total_pixels as f64 / CELL_GRAN * (HSYNC_PERCENT / 100.0))
        * CELL_GRAN as i64;
    let h_sync_start = i64::from(active_pixels) + h_blank_pixels / 2 - h_sync_pixels;
    let h_sync_end = i64::from(active_pixels) + h_blank_pixels / 2 - 1;
    if h_sync_start < i64::from(active_pixels) {
        tracing::debug!(
            h_sync_start,
            active_pixels,
            "GTF horizontal sync would start inside the active region"
        );
        return Err(TimingError::InconsistentTiming(
            "horizontal sync starts before the end of the active region",
        ));
    }

    let v_total = round_to_nearest(if interlaced {
        2.0 * total_v_lines
    } else {
        total_v_lines
    });
    let v_active = if interlaced {
        v_lines_rnd
            .checked_mul(2)
            .ok_or(TimingError::InconsistentTiming("vertical active"))?
    } else {
        v_lines_rnd
    };
    let interlace_line = round_to_nearest(interlace);
    let v_sync_start = i64::from(v_active) + i64::from(MIN_PORCH) + interlace_line;
    let v_sync_end = v_total
        - if interlaced {
            2 * v_back_porch
        } else {
            v_back_porch
        }
        - 3 * interlace_line
        - 1;

    let dot_clock_hz = crate::dot_clock_from_khz(pixel_clock_khz)?;
    let dot_clock_hz = if interlaced {
        dot_clock_hz / 2
    } else {
        dot_clock_hz
    };
    let h_refresh = if interlaced {
        round_to_nearest(h_freq_hz) / 2
    } else {
        round_to_nearest(h_freq_hz)
    };

    Ok(TimingInfo {
        dot_clock_hz,
        h_total: timing_value(total_pixels, "horizontal total")?,
        h_active: active_pixels,
        h_blank_start: active_pixels,
        h_blank_end: timing_value(total_pixels - 1, "horizontal blank end")?,
        h_sync_start: timing_value(h_sync_start, "horizontal sync start")?,
        h_sync_end: timing_value(h_sync_end, "horizontal sync end")?,
        h_refresh: timing_value(h_refresh, "horizontal frequency")?,
        v_total: timing_value(v_total, "vertical total")?,
        v_active,
        v_blank_start: v_active,
        v_blank_end: timing_value(v_total - 1, "vertical blank end")?,
        v_sync_start: timing_value(v_sync_start, "vertical sync start")?,
        v_sync_end: timing_value(v_sync_end, "vertical sync end")?,
        v_rounded_rr: timing_value(round_to_nearest(v_frame_rate), "refresh rate")?,
        interlaced,
        h_sync_polarity: SyncPolarity::Negative,
        v_sync_polarity: SyncPolarity::Positive,
        mode_source: ModeSource::Gtf,
        ..TimingInfo::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanking_constants() {
        assert_eq!(C_PRIME, 30.0);
        assert_eq!(M_PRIME, 300.0);
    }

    #[test]
    fn gtf_1920x1080_60() {
        let t = create_gtf_timing(&GtfRequest::new(1920, 1080, 60)).unwrap();
        assert_eq!(t.h_active, 1920);
        assert_eq!(t.h_total, 2576);
        assert_eq!(t.h_sync_start, 2040);
        assert_eq!(t.h_sync_end, 2247);
        assert_eq!(t.v_active, 1080);
        assert_eq!(t.v_total, 1118);
        assert_eq!(t.v_sync_start, 1081);
        assert_eq!(t.v_sync_end, 1083);
        assert_eq!(t.dot_clock_hz, 172_798_000);
        assert_eq!(t.v_rounded_rr, 60);
        assert_eq!(t.h_sync_polarity, SyncPolarity::Negative);
        assert_eq!(t.v_sync_polarity, SyncPolarity::Positive);
        assert!(t.is_well_formed());
    }

    #[test]
    fn gtf_rejects_zero_inputs() {
        for req in [
            GtfRequest::new(0, 1080, 60),
            GtfRequest::new(1920, 0, 60),
            GtfRequest::new(1920, 1080, 0),
        ] {
            assert!(matches!(
                create_gtf_timing(&req).unwrap_err(),
                TimingError::InvalidRequest { .. }
            ));
        }
    }

    #[test]
    fn gtf_rejects_field_period_shorter_than_vertical_blank() {
        // 1/1900 s is below the 550 µs minimum vertical sync plus back porch.
        assert_eq!(
            create_gtf_timing(&GtfRequest::new(1920, 1080, 1900)),
            Err(TimingError::InvalidRequest {
                x_res: 1920,
                y_res: 1080,
                refresh_rate: 1900,
            })
        );
        assert!(create_gtf_timing(&GtfRequest::new(1920, 1080, 1900).interlaced(true)).is_err());
    }
}
