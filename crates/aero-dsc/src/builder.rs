use aero_display_math::Bppx16;

use crate::config::{
    mux_word_size, rc_buf_thresh_registers, DscConfig, DscOptions, DscRequest, RxDscCaps,
};
use crate::rc::{apply_cfg_rc_parameters, apply_generated_rc_parameters, compute_rc_parameters};
use crate::{ChromaFormat, DscError, Result};

pub const RC_MODEL_SIZE: u32 = 8192;
pub const RC_EDGE_FACTOR: u8 = 6;
pub const RC_TGT_OFFSET_HI: u8 = 3;
pub const RC_TGT_OFFSET_LO: u8 = 3;

/// Below this many pixels per slice the generated RC parameters are not valid and the canned
/// table is used instead.
pub const MIN_PIXELS_PER_SLICE_FOR_GENERATED_RC: u32 = 15_000;
/// Minimum slice pixel count accepted by the slice height search for native 4:2:x.
pub const MIN_PIXELS_PER_SLICE_NATIVE: u32 = 30_000;
/// First candidate of the slice height search.
pub const MIN_OPTIMIZED_SLICE_HEIGHT: u32 = 96;

/// Compressed rates with canned RC parameters that sinks accept below the generated-path
/// threshold: 8, 10, 12 and 15 bpp.
const CFG_PATH_BPPS: [Bppx16; 4] = [
    Bppx16::from_int(8),
    Bppx16::from_int(10),
    Bppx16::from_int(12),
    Bppx16::from_int(15),
];

/// Snaps `bpp` down to the nearest rate in [`CFG_PATH_BPPS`]. A sink limit below 8 bpp has
/// no canned rate and is rejected.
pub fn snap_bpp_to_cfg(bpp: Bppx16) -> Result<Bppx16> {
    CFG_PATH_BPPS
        .iter()
        .rev()
        .copied()
        .find(|&b| b <= bpp)
        .ok_or_else(|| {
            tracing::warn!(bits_per_pixel = %bpp, "sink limit is below every canned RC rate");
            DscError::BppBelowCannedRates { bpp }
        })
}

fn uses_canned_rc(mipi_dsi: bool, slice_width: u32, slice_height: u32) -> bool {
    mipi_dsi
        || u64::from(slice_width) * u64::from(slice_height)
            < u64::from(MIN_PIXELS_PER_SLICE_FOR_GENERATED_RC)
}

/// Fills the RC model constants and derives every rate control field of `cfg`.
///
/// The caller provides geometry, version, format, bpc and the compressed bpp. Native 4:2:2
/// and 4:2:0 have their bpp doubled here. When the RC derivation fails for the current slice
/// height, the height is halved and the derivation retried. The RC parameter source is chosen
/// once from the starting slice geometry and kept across retries.
pub fn compute_dsc_parameters(cfg: &mut DscConfig, mipi_dsi: bool) -> Result<()> {
    if !(8..=16).contains(&cfg.bits_per_component) {
        return Err(DscError::UnsupportedBpc {
            bpc: cfg.bits_per_component,
        });
    }
    if cfg.slice_width == 0 || cfg.slice_height == 0 || cfg.bits_per_pixel.is_zero() {
        return Err(DscError::InvalidInput("zero slice dimension or bpp"));
    }
    if cfg.format.is_native() {
        if cfg.version_minor == 1 {
            tracing::warn!(format = ?cfg.format, "native 4:2:x needs DSC 1.2");
            return Err(DscError::InvalidInput("native 4:2:2/4:2:0 requires DSC 1.2"));
        }
        cfg.bits_per_pixel = cfg.bits_per_pixel.doubled();
    }

    cfg.rc_model_size = RC_MODEL_SIZE;
    cfg.rc_edge_factor = RC_EDGE_FACTOR;
    cfg.rc_tgt_offset_hi = RC_TGT_OFFSET_HI;
    cfg.rc_tgt_offset_lo = RC_TGT_OFFSET_LO;
    cfg.rc_buf_thresh = rc_buf_thresh_registers(cfg.bits_per_pixel);
    cfg.mux_word_size = mux_word_size(cfg.bits_per_component);
    cfg.flatness_det_thresh = 2 << (cfg.bits_per_component - 8);

    let canned = uses_canned_rc(mipi_dsi, cfg.slice_width, cfg.slice_height);
    tracing::debug!(
        canned,
        mipi_dsi,
        slice_width = cfg.slice_width,
        slice_height = cfg.slice_height,
        "selecting RC parameter source"
    );

    loop {
        if canned {
            apply_cfg_rc_parameters(cfg)?;
        } else {
            apply_generated_rc_parameters(cfg)?;
        }
        if cfg.initial_offset >= cfg.rc_model_size {
            return Err(DscError::InitialOffsetTooLarge {
                initial_offset: cfg.initial_offset,
                rc_model_size: cfg.rc_model_size,
            });
        }

        match compute_rc_parameters(cfg) {
            Ok(()) => return Ok(()),
            Err(error) => {
                let failed_height = cfg.slice_height;
                cfg.slice_height /= 2;
                tracing::warn!(
                    %error,
                    failed_height,
                    retry_height = cfg.slice_height,
                    "RC parameters invalid, halving slice height"
                );
                if cfg.slice_height == 0 {
                    return Err(DscError::NoValidSliceHeight {
                        pic_height: cfg.pic_height,
                    });
                }
            }
        }
    }
}

fn select_slice_height(
    caps: &RxDscCaps,
    pic_height: u32,
    slice_width: u32,
    format: ChromaFormat,
    options: &DscOptions,
) -> Result<u32> {
    if caps.slice_height != 0 && pic_height % caps.slice_height == 0 {
        return Ok(caps.slice_height);
    }
    if !options.optimize_slice_height {
        return Ok(pic_height);
    }

    let min_pixels = if format.is_native() {
        MIN_PIXELS_PER_SLICE_NATIVE
    } else {
        MIN_PIXELS_PER_SLICE_FOR_GENERATED_RC
    };
    let found = (MIN_OPTIMIZED_SLICE_HEIGHT..=pic_height)
        .step_by(2)
        .find(|&s| {
            pic_height % s == 0 && u64::from(slice_width) * u64::from(s) >= u64::from(min_pixels)
        });
    match found {
        Some(s) => {
            tracing::debug!(slice_height = s, pic_height, "slice height search");
            Ok(s)
        }
        None => {
            tracing::warn!(pic_height, slice_width, "no slice height satisfies the search");
            Err(DscError::NoValidSliceHeight { pic_height })
        }
    }
}

/// Builds a complete DSC configuration for a picture on a sink.
pub fn create_dsc_cfg(
    caps: &RxDscCaps,
    request: &DscRequest,
    options: &DscOptions,
) -> Result<DscConfig> {
    if request.pic_width == 0 || request.pic_height == 0 {
        return Err(DscError::InvalidInput("zero picture dimension"));
    }
    if caps.slices_per_line == 0 {
        return Err(DscError::InvalidInput("sink reports zero slices per line"));
    }
    if caps.max_bits_per_pixel.is_zero() {
        return Err(DscError::InvalidInput("sink reports zero compressed bpp"));
    }
    let bpc = request.bits_per_component;
    if !matches!(bpc, 8 | 10 | 12) {
        tracing::warn!(bpc, "unsupported bits per component");
        return Err(DscError::UnsupportedBpc { bpc });
    }

    let format = ChromaFormat::from_caps(caps)?;
    let slice_width = request.pic_width.div_ceil(caps.slices_per_line);
    let slice_height = select_slice_height(caps, request.pic_height, slice_width, format, options)?;

    let mut bits_per_pixel = caps.max_bits_per_pixel;
    if uses_canned_rc(caps.mipi_dsi, slice_width, slice_height) {
        bits_per_pixel = snap_bpp_to_cfg(bits_per_pixel)?;
    }

    let mut cfg = DscConfig {
        version_major: caps.version_major,
        version_minor: caps.version_minor,
        line_buf_depth: caps.line_buffer_depth,
        block_pred_enable: caps.block_prediction,
        format,
        bits_per_component: bpc,
        bits_per_pixel,
        pic_width: request.pic_width,
        pic_height: request.pic_height,
        slice_width,
        slice_height,
        slice_count: caps.slices_per_line,
        ..DscConfig::default()
    };
    compute_dsc_parameters(&mut cfg, caps.mipi_dsi)?;

    tracing::debug!(
        slice_width = cfg.slice_width,
        slice_height = cfg.slice_height,
        bits_per_pixel = %cfg.bits_per_pixel,
        ?format,
        "DSC configuration built"
    );
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snap_picks_largest_rate_not_above_request() {
        assert_eq!(snap_bpp_to_cfg(Bppx16::from_bits(0x90)), Ok(Bppx16::from_bits(0x80)));
        assert_eq!(snap_bpp_to_cfg(Bppx16::from_bits(0xA8)), Ok(Bppx16::from_bits(0xA0)));
        assert_eq!(snap_bpp_to_cfg(Bppx16::from_bits(0xC0)), Ok(Bppx16::from_bits(0xC0)));
        assert_eq!(snap_bpp_to_cfg(Bppx16::from_bits(0x100)), Ok(Bppx16::from_bits(0xF0)));
        assert_eq!(snap_bpp_to_cfg(Bppx16::from_bits(0x80)), Ok(Bppx16::from_bits(0x80)));
    }

    #[test]
    fn snap_never_raises_a_limit_below_8_bpp() {
        assert_eq!(
            snap_bpp_to_cfg(Bppx16::from_bits(0x70)),
            Err(DscError::BppBelowCannedRates {
                bpp: Bppx16::from_bits(0x70)
            })
        );
        assert_eq!(
            snap_bpp_to_cfg(Bppx16::from_bits(0x60)),
            Err(DscError::BppBelowCannedRates {
                bpp: Bppx16::from_bits(0x60)
            })
        );
    }

    #[test]
    fn slice_height_prefers_sink_value_that_divides() {
        let caps = RxDscCaps {
            slice_height: 120,
            ..RxDscCaps::default()
        };
        let opts = DscOptions::default();
        assert_eq!(
            select_slice_height(&caps, 1080, 960, ChromaFormat::Rgb, &opts),
            Ok(120)
        );
        let caps = RxDscCaps {
            slice_height: 100,
            ..RxDscCaps::default()
        };
        assert_eq!(
            select_slice_height(&caps, 1080, 960, ChromaFormat::Rgb, &opts),
            Ok(108)
        );
        let opts = DscOptions {
            optimize_slice_height: false,
        };
        assert_eq!(
            select_slice_height(&caps, 1080, 960, ChromaFormat::Rgb, &opts),
            Ok(1080)
        );
    }

    #[test]
    fn slice_height_search_honours_native_pixel_floor() {
        let caps = RxDscCaps::default();
        let opts = DscOptions::default();
        // 200 * 100 = 20000 is enough for 4:4:4; native 4:2:0 needs 30000.
        assert_eq!(
            select_slice_height(&caps, 1200, 200, ChromaFormat::Rgb, &opts),
            Ok(100)
        );
        assert_eq!(
            select_slice_height(&caps, 1200, 200, ChromaFormat::Native420, &opts),
            Ok(150)
        );
        assert_eq!(
            select_slice_height(&caps, 90, 960, ChromaFormat::Rgb, &opts),
            Err(DscError::NoValidSliceHeight { pic_height: 90 })
        );
    }
}
