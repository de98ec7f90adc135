//! Video timing records, EDID descriptor conversion and VESA mode generation.
//!
//! - [`TimingInfo`]: expanded timing with inclusive blank/sync positions
//! - [`DetailedTimingDescriptor`] / [`GenericTimingData`]: packed EDID and DisplayID forms
//! - [`create_gtf_timing`], [`create_cvt_timing`], [`create_cvt2_timing`]: mode generators
//! - [`build_edid_base_block`]: a 128-byte EDID block advertising a set of timings
#![forbid(unsafe_code)]

mod cvt;
mod dtd;
mod edid;
mod error;
mod gtf;
mod timing;

pub use cvt::{
    create_cvt2_timing, create_cvt_timing, cvt_vsync_lines, Cvt2Request, CvtBlanking, CvtRequest,
    RbVersion,
};
pub use dtd::{
    can_timing_fit_in_edid, limits, DetailedTimingDescriptor, DtdFlags, GenericTimingData,
    DTD_SIZE,
};
pub use edid::{
    build_edid_base_block, EdidSinkKind, RangeLimits, EDID_BLOCK_SIZE, MAX_BASE_BLOCK_DTDS,
};
pub use error::{Result, TimingError};
pub use gtf::{create_gtf_timing, GtfRequest};
pub use timing::{
    is_same_pixel_clock, ModeSource, SyncPolarity, TimingInfo, PIXEL_CLOCK_TOLERANCE_PER_100K,
};

/// Rejects mode requests with a zero dimension or refresh rate.
pub(crate) fn validate_request(x_res: u32, y_res: u32, refresh_rate: u32) -> Result<()> {
    if x_res == 0 || y_res == 0 || refresh_rate == 0 {
        tracing::warn!(x_res, y_res, refresh_rate, "rejecting mode request");
        return Err(TimingError::InvalidRequest {
            x_res,
            y_res,
            refresh_rate,
        });
    }
    Ok(())
}

/// Rejects a horizontal period estimate that leaves no time for active lines, which happens
/// when the field period is shorter than the minimum vertical blank.
pub(crate) fn validate_h_period(
    h_period_us: f64,
    x_res: u32,
    y_res: u32,
    refresh_rate: u32,
) -> Result<()> {
    if h_period_us.is_finite() && h_period_us > 0.0 {
        return Ok(());
    }
    tracing::warn!(
        h_period_us,
        x_res,
        y_res,
        refresh_rate,
        "field period too short for blanking"
    );
    Err(TimingError::InvalidRequest {
        x_res,
        y_res,
        refresh_rate,
    })
}

/// Converts a generated timing value, rejecting negative or oversized results.
pub(crate) fn timing_value(value: i64, name: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| TimingError::InconsistentTiming(name))
}

/// Scales a whole-kHz pixel clock to Hz, rejecting a clock that rounded to zero.
pub(crate) fn dot_clock_from_khz(pixel_clock_khz: u64) -> Result<u64> {
    match pixel_clock_khz.checked_mul(1000) {
        Some(hz) if hz > 0 => Ok(hz),
        _ => Err(TimingError::InconsistentTiming("pixel clock is out of range")),
    }
}
