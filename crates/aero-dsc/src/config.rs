use aero_display_math::{Bppx16, Offset11, ScaleU3_3};
use bitflags::bitflags;

use crate::tables::{NUM_BUF_RANGES, RC_BUF_THRESH};
use crate::{DscError, Result};

/// Picture sampling format carried in the PPS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChromaFormat {
    /// RGB input converted to YCoCg by the encoder (`convert_rgb = 1`).
    #[default]
    Rgb,
    Ycbcr444,
    /// 4:2:2 coded as 4:4:4 with the chroma samples duplicated.
    Simple422,
    Native422,
    Native420,
}

impl ChromaFormat {
    /// Native 4:2:2 and 4:2:0 code two pixels per container and double the programmed bpp.
    pub const fn is_native(self) -> bool {
        matches!(self, Self::Native422 | Self::Native420)
    }

    pub const fn convert_rgb(self) -> bool {
        matches!(self, Self::Rgb)
    }

    /// Picks the format for a sink. Native modes take precedence over simple 4:2:2, and
    /// the remaining sinks are RGB when they ask for colour conversion.
    pub fn from_caps(caps: &RxDscCaps) -> Result<Self> {
        let formats = caps.formats;
        if formats.contains(DscFormatSupport::NATIVE_422 | DscFormatSupport::NATIVE_420) {
            return Err(DscError::InvalidInput(
                "native 4:2:2 and native 4:2:0 are mutually exclusive",
            ));
        }
        Ok(if formats.contains(DscFormatSupport::NATIVE_422) {
            Self::Native422
        } else if formats.contains(DscFormatSupport::NATIVE_420) {
            Self::Native420
        } else if formats.contains(DscFormatSupport::SIMPLE_422) {
            Self::Simple422
        } else if caps.convert_rgb {
            Self::Rgb
        } else {
            Self::Ycbcr444
        })
    }
}

bitflags! {
    /// DSC decoder colour format capabilities (DPCD 0x69 layout).
    #[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
    pub struct DscFormatSupport: u8 {
        const RGB = 1 << 0;
        const YCBCR_444 = 1 << 1;
        const SIMPLE_422 = 1 << 2;
        const NATIVE_422 = 1 << 3;
        const NATIVE_420 = 1 << 4;
    }
}

/// Sink DSC decoder capabilities, as read from DPCD or the VBT.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RxDscCaps {
    pub version_major: u8,
    pub version_minor: u8,
    pub line_buffer_depth: u8,
    pub block_prediction: bool,
    pub slices_per_line: u32,
    /// Preferred slice height; 0 when the sink has no preference.
    pub slice_height: u32,
    pub max_bits_per_pixel: Bppx16,
    pub formats: DscFormatSupport,
    pub convert_rgb: bool,
    pub mipi_dsi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DscOptions {
    /// Search for the smallest slice height of at least 96 lines that divides the picture,
    /// instead of coding the whole picture as one slice row.
    pub optimize_slice_height: bool,
}

impl Default for DscOptions {
    fn default() -> Self {
        Self {
            optimize_slice_height: true,
        }
    }
}

/// Picture to compress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DscRequest {
    pub pic_width: u32,
    pub pic_height: u32,
    pub bits_per_component: u8,
}

/// One of the 15 RC range parameter sets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RcRange {
    pub min_qp: u8,
    pub max_qp: u8,
    pub bpg_offset: i8,
}

impl RcRange {
    /// The 6-bit two's complement PPS encoding of `bpg_offset`.
    pub const fn bpg_offset_bits(self) -> u8 {
        (self.bpg_offset as u8) & 0x3F
    }
}

/// RC buffer threshold register values: the thresholds shifted right by six, with the last
/// two overridden at exactly 6 bpp.
pub fn rc_buf_thresh_registers(bits_per_pixel: Bppx16) -> [u8; NUM_BUF_RANGES - 1] {
    let mut regs = RC_BUF_THRESH.map(|t| (t / 64) as u8);
    if bits_per_pixel == Bppx16::from_int(6) {
        regs[12] = 0x7C;
        regs[13] = 0x7D;
    }
    regs
}

/// Mux word size in bits.
pub const fn mux_word_size(bits_per_component: u8) -> u32 {
    if bits_per_component <= 10 {
        48
    } else {
        64
    }
}

/// Picture parameter set fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DscConfig {
    pub version_major: u8,
    pub version_minor: u8,
    pub line_buf_depth: u8,
    pub block_pred_enable: bool,
    pub format: ChromaFormat,

    pub bits_per_component: u8,
    /// Programmed bpp; doubled for native 4:2:2 and 4:2:0.
    pub bits_per_pixel: Bppx16,

    pub pic_width: u32,
    pub pic_height: u32,
    pub slice_width: u32,
    pub slice_height: u32,
    pub slice_count: u32,
    pub chunk_size: u32,

    pub rc_model_size: u32,
    /// U3.1.
    pub rc_edge_factor: u8,
    pub rc_tgt_offset_hi: u8,
    pub rc_tgt_offset_lo: u8,
    pub rc_quant_incr_limit0: u8,
    pub rc_quant_incr_limit1: u8,
    pub rc_buf_thresh: [u8; NUM_BUF_RANGES - 1],
    pub rc_range_params: [RcRange; NUM_BUF_RANGES],

    pub initial_xmit_delay: u32,
    pub initial_dec_delay: u32,
    pub initial_offset: u32,
    pub final_offset: u32,
    pub initial_scale_value: ScaleU3_3,
    pub final_scale_value: ScaleU3_3,
    pub scale_decrement_interval: u32,
    pub scale_increment_interval: u32,

    pub first_line_bpg_offset: u32,
    pub second_line_bpg_offset: u32,
    pub second_line_offset_adj: u32,
    pub nfl_bpg_offset: Offset11,
    pub nsl_bpg_offset: Offset11,
    pub slice_bpg_offset: Offset11,

    pub flatness_min_qp: u8,
    pub flatness_max_qp: u8,
    pub flatness_det_thresh: u32,

    pub mux_word_size: u32,
    /// Rate buffer size in bits.
    pub rcb_bits: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bpg_offset_encodes_as_six_bit_twos_complement() {
        let r = |bpg_offset| RcRange {
            bpg_offset,
            ..RcRange::default()
        };
        assert_eq!(r(2).bpg_offset_bits(), 0x02);
        assert_eq!(r(0).bpg_offset_bits(), 0x00);
        assert_eq!(r(-2).bpg_offset_bits(), 0x3E);
        assert_eq!(r(-12).bpg_offset_bits(), 0x34);
    }

    #[test]
    fn rc_buf_thresh_registers_override_at_6bpp() {
        let regs = rc_buf_thresh_registers(Bppx16::from_int(8));
        assert_eq!(
            regs,
            [14, 28, 42, 56, 70, 84, 98, 105, 112, 119, 121, 123, 125, 126]
        );
        let regs = rc_buf_thresh_registers(Bppx16::from_int(6));
        assert_eq!(regs[12], 0x7C);
        assert_eq!(regs[13], 0x7D);
    }

    #[test]
    fn format_selection_from_caps() {
        let mut caps = RxDscCaps {
            convert_rgb: true,
            ..RxDscCaps::default()
        };
        assert_eq!(ChromaFormat::from_caps(&caps), Ok(ChromaFormat::Rgb));
        caps.convert_rgb = false;
        assert_eq!(ChromaFormat::from_caps(&caps), Ok(ChromaFormat::Ycbcr444));
        caps.formats = DscFormatSupport::SIMPLE_422 | DscFormatSupport::NATIVE_420;
        assert_eq!(ChromaFormat::from_caps(&caps), Ok(ChromaFormat::Native420));
        caps.formats |= DscFormatSupport::NATIVE_422;
        assert!(matches!(
            ChromaFormat::from_caps(&caps).unwrap_err(),
            DscError::InvalidInput(_)
        ));
    }

    #[test]
    fn mux_word_size_by_bpc() {
        assert_eq!(mux_word_size(8), 48);
        assert_eq!(mux_word_size(10), 48);
        assert_eq!(mux_word_size(12), 64);
    }
}
