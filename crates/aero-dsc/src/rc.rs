//! Rate control parameter derivation, after the VESA DSC 1.2a C model.

use aero_display_math::{div_round_up, Bppx16, Offset11, ScaleU3_3, OFFSET_FRACTIONAL_BITS};

use crate::config::{DscConfig, RcRange};
use crate::tables::{
    qp_chart_bounds, RcCfgEntry, CFG_BPC_COLUMNS, CFG_BPP_ROWS, NUM_BUF_RANGES, RC_CFG_TABLE,
};
use crate::{ChromaFormat, DscError, Result};

const PIXELS_PER_GROUP: u32 = 3;

const fn bpp(whole: u16) -> u32 {
    (whole as u32) << Bppx16::FRACTIONAL_BITS
}

/// `(2p + q) / 2q`: integer division rounding halves up.
fn round_div(p: i32, q: i32) -> i32 {
    (2 * p + q).div_euclid(2 * q)
}

/// Initial RC buffer fullness offset.
///
/// `bits_per_pixel` is the programmed value, so native 4:2:2 thresholds are doubled.
pub fn compute_initial_offset(bits_per_pixel: Bppx16, format: ChromaFormat) -> Result<u32> {
    let b = u32::from(bits_per_pixel.bits());
    let offset = if format == ChromaFormat::Native422 {
        match b {
            _ if b >= bpp(16) => 2048,
            _ if b >= bpp(14) => 5632 - (b - bpp(14)) * 112,
            _ if b >= bpp(12) => 5632,
            _ => 0,
        }
    } else {
        match b {
            _ if b >= bpp(12) => 2048,
            _ if b >= bpp(10) => 5632 - (b - bpp(10)) * 112,
            _ if b >= bpp(8) => 6144 - (b - bpp(8)) * 16,
            _ if b >= bpp(6) => 6144,
            _ => 0,
        }
    };
    if offset == 0 {
        tracing::warn!(%bits_per_pixel, ?format, "compressed bpp below format minimum");
        return Err(DscError::BppBelowMinimum {
            bpp: bits_per_pixel,
            format,
        });
    }
    Ok(offset)
}

/// Uncompressed bits per group, the ceiling for the first/second line offsets.
fn uncompressed_bpg_rate(bpc: u8, format: ChromaFormat) -> u32 {
    let bpc = u32::from(bpc);
    match format {
        ChromaFormat::Native422 => 3 * bpc * 4,
        ChromaFormat::Rgb => (3 * bpc + 2) * 3,
        _ => 3 * bpc * 3,
    }
}

/// First line offset from the C model's slice height rule, before clamping.
fn first_line_offset_for_height(slice_height: u32) -> u32 {
    if slice_height >= 8 {
        12 + 9 * (slice_height - 8).min(34) / 100
    } else {
        2 * slice_height.saturating_sub(1)
    }
}

/// Extra bits granted to the first line of a slice, and to the second line for native 4:2:0.
///
/// Both are clamped so the line never needs more than its uncompressed size.
pub fn line_bpg_offsets(
    slice_height: u32,
    bpc: u8,
    bits_per_pixel: Bppx16,
    format: ChromaFormat,
) -> (u32, u32) {
    let ceiling = (uncompressed_bpg_rate(bpc, format) * 16)
        .saturating_sub(3 * u32::from(bits_per_pixel.bits()))
        / 16;

    let first = first_line_offset_for_height(slice_height).min(ceiling);
    let second = if format == ChromaFormat::Native420 {
        12.min(ceiling)
    } else {
        0
    };
    (first, second)
}

/// Interpolated bpg offset tables for a format, as `(knots, tables)`. Offsets between knots
/// are linearly interpolated; a knot pair with equal tables is a flat segment.
struct OffsetCurve {
    /// Programmed bpp at each knot.
    knots: [u32; 4],
    tables: [[i32; NUM_BUF_RANGES]; 4],
}

impl OffsetCurve {
    fn offset(&self, bits_per_pixel: u32, index: usize) -> i32 {
        let k = &self.knots;
        if bits_per_pixel <= k[0] {
            return self.tables[0][index];
        }
        for seg in 0..3 {
            if bits_per_pixel <= k[seg + 1] {
                let lo = self.tables[seg][index];
                let hi = self.tables[seg + 1][index];
                let span = (k[seg + 1] - k[seg]) as i32;
                return lo + round_div((bits_per_pixel - k[seg]) as i32 * (hi - lo), span);
            }
        }
        self.tables[3][index]
    }
}

const OFS_A: [i32; NUM_BUF_RANGES] =
    [2, 0, 0, -2, -4, -6, -8, -8, -8, -10, -10, -12, -12, -12, -12];
const OFS_B: [i32; NUM_BUF_RANGES] =
    [2, 0, 0, -2, -4, -6, -8, -8, -8, -10, -10, -10, -12, -12, -12];
const OFS_HIGH: [i32; NUM_BUF_RANGES] =
    [10, 8, 6, 4, 2, 0, -2, -4, -6, -8, -10, -10, -12, -12, -12];
const OFS_444_LOW: [i32; NUM_BUF_RANGES] =
    [0, -2, -2, -4, -6, -6, -8, -8, -8, -10, -10, -12, -12, -12, -12];

fn offset_curve(format: ChromaFormat) -> OffsetCurve {
    match format {
        // 4, 5, 6 and 8 bpp, doubled.
        ChromaFormat::Native420 => OffsetCurve {
            knots: [bpp(8), bpp(10), bpp(12), bpp(16)],
            tables: [OFS_A, OFS_B, OFS_B, OFS_HIGH],
        },
        // 6, 7, 8 and 10 bpp, doubled. 7..8 bpp is flat.
        ChromaFormat::Native422 => OffsetCurve {
            knots: [bpp(12), bpp(14), bpp(16), bpp(20)],
            tables: [OFS_A, OFS_B, OFS_B, OFS_HIGH],
        },
        // 6, 8, 12 and 15 bpp. 8..12 bpp is flat.
        _ => OffsetCurve {
            knots: [bpp(6), bpp(8), bpp(12), bpp(15)],
            tables: [OFS_444_LOW, OFS_B, OFS_B, OFS_HIGH],
        },
    }
}

/// Derives all 15 RC ranges from the QP charts and the interpolated bpg offset curve.
///
/// Under DSC 1.1 with YCbCr input every chart value is reduced by one (floored at 0) and the
/// last range's max QP may not exceed `12 + 2 * (bpc - 8)`.
pub fn generate_rc_range_params(
    bits_per_pixel: Bppx16,
    bpc: u8,
    format: ChromaFormat,
    version_minor: u8,
) -> Result<[RcRange; NUM_BUF_RANGES]> {
    if !matches!(bpc, 8 | 10 | 12) {
        return Err(DscError::UnsupportedBpc { bpc });
    }
    let b = u32::from(bits_per_pixel.bits());
    let yuv_input = !format.convert_rgb();
    let dsc11_yuv = version_minor == 1 && yuv_input;

    let chart_base = match format {
        ChromaFormat::Native420 => bpp(8),
        ChromaFormat::Native422 => bpp(12),
        _ => bpp(6),
    };
    let Some(delta) = b.checked_sub(chart_base) else {
        return Err(DscError::BppBelowMinimum {
            bpp: bits_per_pixel,
            format,
        });
    };
    let column = if format.is_native() {
        delta / 16
    } else {
        2 * delta / 16
    } as usize;
    let chart_reduction = u8::from(dsc11_yuv && !format.is_native());
    let max_qp_limit = 12 + 2 * (bpc - 8);
    let curve = offset_curve(format);

    let mut ranges = [RcRange::default(); NUM_BUF_RANGES];
    for (index, range) in ranges.iter_mut().enumerate() {
        let (min_qp, max_qp) = qp_chart_bounds(format, bpc, index, column).ok_or(
            DscError::BppAboveChart {
                bpp: bits_per_pixel,
                format,
                bpc,
            },
        )?;
        let bpg_offset = curve.offset(b, index);
        *range = RcRange {
            min_qp: min_qp.saturating_sub(chart_reduction),
            max_qp: max_qp.saturating_sub(chart_reduction),
            // Offsets are within -12..=10.
            bpg_offset: bpg_offset as i8,
        };

        if dsc11_yuv && range.max_qp > max_qp_limit {
            tracing::warn!(
                index,
                max_qp = range.max_qp,
                limit = max_qp_limit,
                "max QP exceeds the DSC 1.1 YCbCr limit"
            );
            return Err(DscError::MaxQpOutOfRange {
                index,
                max_qp: range.max_qp,
                limit: max_qp_limit,
            });
        }
    }
    Ok(ranges)
}

/// Canned rate control parameters from the DSC model `.cfg` files. Only 6, 8, 10, 12 and
/// 15 bpp at 8 to 16 bpc (even) exist.
pub fn rc_parameters_from_cfg(bits_per_pixel: Bppx16, bpc: u8) -> Result<&'static RcCfgEntry> {
    let row = CFG_BPP_ROWS.iter().position(|&b| b == bits_per_pixel.whole());
    let column = CFG_BPC_COLUMNS.iter().position(|&c| c == bpc);
    match (row, column) {
        (Some(row), Some(column)) => Ok(&RC_CFG_TABLE[row][column]),
        _ => {
            tracing::warn!(%bits_per_pixel, bpc, "no canned RC parameters");
            Err(DscError::UnsupportedCfgCombination {
                bpp: bits_per_pixel,
                bpc,
            })
        }
    }
}

/// Fills the generated-path RC fields of `cfg`: quantization limits, initial offset and
/// transmit delay, line offsets, flatness QPs and the range table.
pub(crate) fn apply_generated_rc_parameters(cfg: &mut DscConfig) -> Result<()> {
    let bpc = cfg.bits_per_component;
    let b = u32::from(cfg.bits_per_pixel.bits());
    let dsc11_yuv = cfg.version_minor == 1 && !cfg.format.convert_rgb();
    let qp_bpc_modifier = (i32::from(bpc) - 8) * 2 - i32::from(dsc11_yuv);
    let with_modifier = |base: i32| (base + qp_bpc_modifier) as u8;

    cfg.rc_quant_incr_limit0 = with_modifier(11);
    cfg.rc_quant_incr_limit1 = with_modifier(11);
    cfg.initial_offset = compute_initial_offset(cfg.bits_per_pixel, cfg.format)?;

    // rc_model_size / 2 / bpp
    cfg.initial_xmit_delay = round_div(4096 * 16, b as i32) as u32;

    let (first, second) = line_bpg_offsets(cfg.slice_height, bpc, cfg.bits_per_pixel, cfg.format);
    cfg.first_line_bpg_offset = first;
    cfg.second_line_bpg_offset = second;

    let slice_width = coded_slice_width(cfg);
    let padding_pixels = match slice_width % 3 {
        0 => 0,
        r => (3 - r) * (cfg.initial_xmit_delay / slice_width),
    };
    let container = if cfg.format == ChromaFormat::Native422 {
        4
    } else {
        3
    };
    if 3 * b >= 16 * cfg.initial_xmit_delay.div_ceil(3) * container
        && (cfg.initial_xmit_delay + padding_pixels) % 3 == 1
    {
        cfg.initial_xmit_delay += 1;
    }

    cfg.flatness_min_qp = with_modifier(3);
    cfg.flatness_max_qp = with_modifier(12);
    cfg.second_line_offset_adj = if cfg.format == ChromaFormat::Native420 {
        512
    } else {
        0
    };
    cfg.rc_range_params =
        generate_rc_range_params(cfg.bits_per_pixel, bpc, cfg.format, cfg.version_minor)?;
    Ok(())
}

/// Fills the RC fields of `cfg` from the canned table. DSC 1.2 sinks still derive the first
/// line offset from the slice height.
pub(crate) fn apply_cfg_rc_parameters(cfg: &mut DscConfig) -> Result<()> {
    let entry = rc_parameters_from_cfg(cfg.bits_per_pixel, cfg.bits_per_component)?;

    cfg.first_line_bpg_offset = if cfg.version_minor == 2 {
        first_line_offset_for_height(cfg.slice_height)
    } else {
        entry.first_line_bpg_offset
    };
    cfg.initial_xmit_delay = entry.initial_xmit_delay;
    cfg.initial_offset = entry.initial_offset;
    cfg.flatness_min_qp = entry.flatness_min_qp;
    cfg.flatness_max_qp = entry.flatness_max_qp;
    cfg.rc_quant_incr_limit0 = entry.rc_quant_incr_limit0;
    cfg.rc_quant_incr_limit1 = entry.rc_quant_incr_limit1;
    cfg.rc_range_params = entry.ranges;
    Ok(())
}

/// Native 4:2:2/4:2:0 code half as many containers per line.
fn coded_slice_width(cfg: &DscConfig) -> u32 {
    if cfg.format.is_native() {
        cfg.slice_width / 2
    } else {
        cfg.slice_width
    }
}

/// RC buffer offset after `group_count` groups, used for the tighter native 4:2:x rate
/// buffer bound.
fn offset_at_group(cfg: &DscConfig, groups_per_line: u32, group_count: u32) -> i64 {
    let ppg = i64::from(PIXELS_PER_GROUP);
    let b = i64::from(cfg.bits_per_pixel.bits());
    let slice_bpg = i64::from(cfg.slice_bpg_offset.bits());
    let nfl = i64::from(cfg.nfl_bpg_offset.bits());
    let nsl = i64::from(cfg.nsl_bpg_offset.bits());
    let first_line = i64::from(cfg.first_line_bpg_offset);
    let second_line = i64::from(cfg.second_line_bpg_offset);
    let gc = i64::from(group_count);
    let gpl = i64::from(groups_per_line);
    let gc_id = i64::from(cfg.initial_xmit_delay.div_ceil(PIXELS_PER_GROUP));

    let mut offset = if gc <= gc_id {
        (gc * ppg * b + 15).div_euclid(16)
    } else {
        (gc_id * ppg * b + 15).div_euclid(16)
            - (((gc - gc_id) * slice_bpg) >> OFFSET_FRACTIONAL_BITS)
    };

    if gc <= gpl {
        offset += gc * first_line;
    } else {
        offset += gpl * first_line - (((gc - gpl) * nfl) >> OFFSET_FRACTIONAL_BITS);
    }

    if cfg.format == ChromaFormat::Native420 {
        if gc <= gpl {
            offset -= (gc * nsl) >> OFFSET_FRACTIONAL_BITS;
        } else if gc <= 2 * gpl {
            offset += (gc - gpl) * second_line - ((gpl * nsl) >> OFFSET_FRACTIONAL_BITS);
        } else {
            offset += (gc - gpl) * second_line - (((gc - gpl) * nsl) >> OFFSET_FRACTIONAL_BITS);
        }
    }
    offset
}

/// Derives chunk size, scale values and intervals, the NFL/NSL/slice bpg offsets, the rate
/// buffer size and the decoder delay for the current slice geometry.
pub fn compute_rc_parameters(cfg: &mut DscConfig) -> Result<()> {
    let b = u32::from(cfg.bits_per_pixel.bits());
    if b == 0 || cfg.slice_height == 0 || cfg.slice_width == 0 || cfg.mux_word_size == 0 {
        return Err(DscError::InvalidInput("zero bpp, slice dimension or mux word size"));
    }
    let bpc = u32::from(cfg.bits_per_component);
    let mux = cfg.mux_word_size;
    let model = cfg.rc_model_size;
    let num_ssps = if cfg.format == ChromaFormat::Native422 {
        4
    } else {
        3
    };

    let slice_width = coded_slice_width(cfg);
    let groups_per_line = slice_width.div_ceil(PIXELS_PER_GROUP);
    cfg.chunk_size = div_round_up(u64::from(slice_width) * u64::from(b), 8 * 16) as u32;

    let mut extra_mux_bits = match cfg.format {
        ChromaFormat::Rgb => num_ssps * (mux + (4 * bpc + 4) - 2),
        ChromaFormat::Native422 => num_ssps * mux + (4 * bpc + 4) + 3 * (4 * bpc) - 2,
        _ => num_ssps * mux + (4 * bpc + 4) + 2 * (4 * bpc) - 2,
    };
    let slice_bits = 8 * u64::from(cfg.chunk_size) * u64::from(cfg.slice_height);
    while extra_mux_bits > 0
        && (slice_bits as i64 - i64::from(extra_mux_bits)).rem_euclid(i64::from(mux)) != 0
    {
        extra_mux_bits -= 1;
    }

    if cfg.initial_offset >= model {
        return Err(DscError::InitialOffsetTooLarge {
            initial_offset: cfg.initial_offset,
            rc_model_size: model,
        });
    }
    let mut initial_scale = 8 * model / (model - cfg.initial_offset);
    if groups_per_line < initial_scale - 8 {
        initial_scale = groups_per_line + 8;
    }
    cfg.scale_decrement_interval = if initial_scale > 8 {
        groups_per_line / (initial_scale - 8)
    } else {
        4095
    };
    cfg.initial_scale_value = ScaleU3_3::from_bits(initial_scale)
        .ok_or(DscError::InvalidInput("initial scale does not fit U3.3"))?;

    let final_offset = i64::from(model)
        - (i64::from(cfg.initial_xmit_delay) * i64::from(b) + 8) / 16
        + i64::from(extra_mux_bits);
    if final_offset < 0 || final_offset >= i64::from(model) {
        tracing::warn!(
            final_offset,
            rc_model_size = model,
            "final offset out of range, initial transmit delay too small"
        );
        return Err(DscError::FinalOffsetTooLarge {
            final_offset,
            rc_model_size: model,
        });
    }
    let final_offset = final_offset as u32;
    cfg.final_offset = final_offset;

    let final_scale = 8 * model / (model - final_offset);
    cfg.final_scale_value = ScaleU3_3::from_bits(final_scale).ok_or_else(|| {
        tracing::warn!(final_scale, "final scale above 63/8");
        DscError::FinalScaleTooLarge { final_scale }
    })?;

    let lines_after_first = u64::from(cfg.slice_height - 1);
    cfg.nfl_bpg_offset = if cfg.slice_height > 1 {
        Offset11::ratio_round_up(u64::from(cfg.first_line_bpg_offset), lines_after_first).ok_or(
            DscError::LineBpgOffsetOverflow {
                which: "first line",
            },
        )?
    } else {
        Offset11::default()
    };
    cfg.nsl_bpg_offset = if cfg.slice_height > 2 {
        Offset11::ratio_round_up(u64::from(cfg.second_line_bpg_offset), lines_after_first).ok_or(
            DscError::LineBpgOffsetOverflow {
                which: "second line",
            },
        )?
    } else {
        Offset11::default()
    };

    let groups_total = u64::from(groups_per_line) * u64::from(cfg.slice_height);
    cfg.slice_bpg_offset = Offset11::ratio_round_up(
        u64::from(model - cfg.initial_offset + extra_mux_bits),
        groups_total,
    )
    .ok_or(DscError::LineBpgOffsetOverflow { which: "slice" })?;

    let nfl = u64::from(cfg.nfl_bpg_offset.bits());
    let nsl = u64::from(cfg.nsl_bpg_offset.bits());
    let slice_bpg = u64::from(cfg.slice_bpg_offset.bits());

    if cfg.version_minor == 2 {
        if cfg.slice_height == 1 && cfg.first_line_bpg_offset > 0 {
            return Err(DscError::FirstLineOffsetWithSingleLineSlice);
        }
        // Bits per group left for non-first lines must stay at or above 1 + 5 * 3.
        let ppg = u64::from(PIXELS_PER_GROUP);
        let line_overhead = ((slice_bpg + nfl) * 16) >> OFFSET_FRACTIONAL_BITS;
        if ppg * u64::from(b) < line_overhead + (1 + 5 * ppg) * 16 {
            tracing::warn!(
                bits_per_pixel = %cfg.bits_per_pixel,
                "non-first line allocation below 5.33 bpp"
            );
            return Err(DscError::NonFirstLineBppTooLow);
        }
    }

    let scale_increment_interval = if final_scale > 9 {
        (u64::from(final_offset) << OFFSET_FRACTIONAL_BITS)
            / ((nfl + slice_bpg + nsl) * u64::from(final_scale - 9))
    } else {
        0
    };
    cfg.scale_increment_interval = u16::try_from(scale_increment_interval)
        .map(u32::from)
        .map_err(|_| DscError::ScaleIncrementOverflow {
            interval: scale_increment_interval,
        })?;

    let rbs_min = if cfg.version_minor == 2 && cfg.format.is_native() {
        let after_initial_delay = offset_at_group(
            cfg,
            groups_per_line,
            cfg.initial_xmit_delay.div_ceil(PIXELS_PER_GROUP),
        );
        let after_first_line = offset_at_group(cfg, groups_per_line, groups_per_line);
        let after_second_line = offset_at_group(cfg, groups_per_line, 2 * groups_per_line);
        let max_offset = after_initial_delay.max(after_first_line).max(after_second_line);
        i64::from(model - cfg.initial_offset) + max_offset
    } else {
        i64::from(model - cfg.initial_offset)
            + div_round_up(u64::from(cfg.initial_xmit_delay) * u64::from(b), 16) as i64
            + i64::from(groups_per_line * cfg.first_line_bpg_offset)
    };
    let rbs_min = u64::try_from(rbs_min)
        .map_err(|_| DscError::InvalidInput("negative rate buffer size"))?;

    let hrd_delay = div_round_up(rbs_min * 16, u64::from(b));
    cfg.rcb_bits = div_round_up(hrd_delay * u64::from(b), 16) as u32;
    cfg.initial_dec_delay = (hrd_delay as u32).saturating_sub(cfg.initial_xmit_delay);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn initial_offset_piecewise_444() {
        let f = ChromaFormat::Rgb;
        assert_eq!(compute_initial_offset(Bppx16::from_int(6), f), Ok(6144));
        assert_eq!(compute_initial_offset(Bppx16::from_int(8), f), Ok(6144));
        assert_eq!(compute_initial_offset(Bppx16::from_int(9), f), Ok(5888));
        assert_eq!(compute_initial_offset(Bppx16::from_int(10), f), Ok(5632));
        assert_eq!(compute_initial_offset(Bppx16::from_int(11), f), Ok(3840));
        assert_eq!(compute_initial_offset(Bppx16::from_int(12), f), Ok(2048));
        assert_eq!(
            compute_initial_offset(Bppx16::from_bits(0x5F), f),
            Err(DscError::BppBelowMinimum {
                bpp: Bppx16::from_bits(0x5F),
                format: f
            })
        );
    }

    #[test]
    fn initial_offset_native_422_uses_doubled_thresholds() {
        let f = ChromaFormat::Native422;
        assert_eq!(compute_initial_offset(Bppx16::from_int(12), f), Ok(5632));
        assert_eq!(compute_initial_offset(Bppx16::from_int(15), f), Ok(3840));
        assert_eq!(compute_initial_offset(Bppx16::from_int(16), f), Ok(2048));
        assert!(compute_initial_offset(Bppx16::from_int(11), f).is_err());
    }

    #[test]
    fn line_offsets_follow_slice_height() {
        let b = Bppx16::from_int(8);
        assert_eq!(line_bpg_offsets(108, 8, b, ChromaFormat::Rgb), (15, 0));
        assert_eq!(line_bpg_offsets(8, 8, b, ChromaFormat::Rgb), (12, 0));
        assert_eq!(line_bpg_offsets(4, 8, b, ChromaFormat::Rgb), (6, 0));
        assert_eq!(line_bpg_offsets(108, 8, b.doubled(), ChromaFormat::Native420), (15, 12));
    }

    #[test]
    fn line_offsets_clamp_to_uncompressed_rate() {
        // (3 * 8) * 3 = 72 bits per group; 72 - 3 * 20 = 12.
        assert_eq!(
            line_bpg_offsets(108, 8, Bppx16::from_int(20), ChromaFormat::Ycbcr444),
            (12, 0)
        );
    }

    #[test]
    fn generated_ranges_for_8bpp_8bpc_rgb() {
        let ranges =
            generate_rc_range_params(Bppx16::from_int(8), 8, ChromaFormat::Rgb, 2).unwrap();
        let min: Vec<u8> = ranges.iter().map(|r| r.min_qp).collect();
        let max: Vec<u8> = ranges.iter().map(|r| r.max_qp).collect();
        let ofs: Vec<i8> = ranges.iter().map(|r| r.bpg_offset).collect();
        assert_eq!(min, [0, 0, 1, 1, 3, 3, 3, 3, 3, 4, 5, 5, 5, 8, 12]);
        assert_eq!(max, [4, 4, 5, 6, 7, 7, 7, 8, 9, 10, 10, 11, 11, 12, 13]);
        assert_eq!(ofs, [2, 0, 0, -2, -4, -6, -8, -8, -8, -10, -10, -10, -12, -12, -12]);
    }

    #[test]
    fn generated_offsets_interpolate_between_knots() {
        // 7 bpp sits halfway between the 6 and 8 bpp tables.
        let ranges =
            generate_rc_range_params(Bppx16::from_int(7), 8, ChromaFormat::Rgb, 2).unwrap();
        assert_eq!(ranges[0].bpg_offset, 1);
        assert_eq!(ranges[1].bpg_offset, -1);
        assert_eq!(ranges[5].bpg_offset, -6);
    }

    #[test]
    fn dsc11_ycbcr_reduces_chart_values() {
        let rgb = generate_rc_range_params(Bppx16::from_int(8), 8, ChromaFormat::Rgb, 1).unwrap();
        let yuv =
            generate_rc_range_params(Bppx16::from_int(8), 8, ChromaFormat::Ycbcr444, 1).unwrap();
        assert_eq!(yuv[0].min_qp, 0);
        assert_eq!(yuv[14].max_qp, rgb[14].max_qp - 1);
        assert_eq!(yuv[14].min_qp, rgb[14].min_qp - 1);
    }

    #[test]
    fn dsc11_ycbcr_rejects_high_max_qp() {
        // 6 bpp, 8 bpc: chart max QP for range 14 is 15, minus one is 14 > 12.
        assert_eq!(
            generate_rc_range_params(Bppx16::from_int(6), 8, ChromaFormat::Ycbcr444, 1),
            Err(DscError::MaxQpOutOfRange {
                index: 14,
                max_qp: 14,
                limit: 12
            })
        );
    }

    #[test]
    fn generated_ranges_reject_bad_inputs() {
        assert_eq!(
            generate_rc_range_params(Bppx16::from_int(8), 14, ChromaFormat::Rgb, 2),
            Err(DscError::UnsupportedBpc { bpc: 14 })
        );
        assert!(matches!(
            generate_rc_range_params(Bppx16::from_int(30), 8, ChromaFormat::Rgb, 2),
            Err(DscError::BppAboveChart { .. })
        ));
        assert!(matches!(
            generate_rc_range_params(Bppx16::from_int(5), 8, ChromaFormat::Rgb, 2),
            Err(DscError::BppBelowMinimum { .. })
        ));
    }

    #[test]
    fn cfg_lookup_supports_listed_combinations_only() {
        assert_eq!(
            rc_parameters_from_cfg(Bppx16::from_int(15), 16).unwrap().initial_offset,
            2048
        );
        assert_eq!(
            rc_parameters_from_cfg(Bppx16::from_int(9), 8),
            Err(DscError::UnsupportedCfgCombination {
                bpp: Bppx16::from_int(9),
                bpc: 8
            })
        );
        assert!(rc_parameters_from_cfg(Bppx16::from_int(8), 9).is_err());
    }
}
