//! Constant tables from the VESA DSC model.
//!
//! QP charts follow the DSCParameterValuesVESA V1-2 spreadsheet. Rows are the 15 RC ranges;
//! columns step by half a bit per pixel starting at the format's minimum bpp (6 for 4:4:4,
//! 6 doubled to 12 for native 4:2:2, 4 doubled to 8 for native 4:2:0).

use crate::config::RcRange;
use crate::ChromaFormat;

pub const NUM_BUF_RANGES: usize = 15;

/// RC buffer thresholds in bits. Hardware appends six zero bits, so registers hold `value / 64`.
pub const RC_BUF_THRESH: [u32; NUM_BUF_RANGES - 1] = [
    896, 1792, 2688, 3584, 4480, 5376, 6272, 6720, 7168, 7616, 7744, 7872, 8000, 8064,
];

/// One entry of the canned rate control parameter table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RcCfgEntry {
    pub initial_xmit_delay: u32,
    pub first_line_bpg_offset: u32,
    pub initial_offset: u32,
    pub flatness_min_qp: u8,
    pub flatness_max_qp: u8,
    pub rc_quant_incr_limit0: u8,
    pub rc_quant_incr_limit1: u8,
    pub ranges: [RcRange; NUM_BUF_RANGES],
}

const fn range(min_qp: u8, max_qp: u8, bpg_offset: i8) -> RcRange {
    RcRange {
        min_qp,
        max_qp,
        bpg_offset,
    }
}

// Rows of the canned table.
pub(crate) const CFG_BPP_ROWS: [u16; 5] = [6, 8, 10, 12, 15];
// Columns of the canned table.
pub(crate) const CFG_BPC_COLUMNS: [u8; 5] = [8, 10, 12, 14, 16];

/// Rate control parameters from the `.cfg` files shipped with the VESA DSC C model, indexed
/// `[bpp row][bpc column]` with rows 6/8/10/12/15 bpp and columns 8/10/12/14/16 bpc.
pub(crate) static RC_CFG_TABLE: [[RcCfgEntry; 5]; 5] = [
    [
        // 6 bpp, 8 bpc
        RcCfgEntry {
            initial_xmit_delay: 768,
            first_line_bpg_offset: 15,
            initial_offset: 6144,
            flatness_min_qp: 3,
            flatness_max_qp: 13,
            rc_quant_incr_limit0: 11,
            rc_quant_incr_limit1: 11,
            ranges: [
                range(0, 4, 0),
                range(1, 6, -2),
                range(3, 8, -2),
                range(4, 8, -4),
                range(5, 9, -6),
                range(5, 9, -6),
                range(6, 9, -6),
                range(6, 10, -8),
                range(7, 11, -8),
                range(8, 12, -10),
                range(9, 12, -10),
                range(10, 12, -12),
                range(10, 12, -12),
                range(11, 12, -12),
                range(13, 14, -12),
            ],
        },
        // 6 bpp, 10 bpc
        RcCfgEntry {
            initial_xmit_delay: 768,
            first_line_bpg_offset: 15,
            initial_offset: 6144,
            flatness_min_qp: 7,
            flatness_max_qp: 17,
            rc_quant_incr_limit0: 15,
            rc_quant_incr_limit1: 15,
            ranges: [
                range(0, 8, 0),
                range(3, 10, -2),
                range(7, 12, -2),
                range(8, 12, -4),
                range(9, 13, -6),
                range(9, 13, -6),
                range(10, 13, -6),
                range(10, 14, -8),
                range(11, 15, -8),
                range(12, 16, -10),
                range(13, 16, -10),
                range(14, 16, -12),
                range(14, 16, -12),
                range(15, 16, -12),
                range(17, 18, -12),
            ],
        },
        // 6 bpp, 12 bpc
        RcCfgEntry {
            initial_xmit_delay: 768,
            first_line_bpg_offset: 15,
            initial_offset: 6144,
            flatness_min_qp: 11,
            flatness_max_qp: 21,
            rc_quant_incr_limit0: 19,
            rc_quant_incr_limit1: 19,
            ranges: [
                range(0, 12, 0),
                range(5, 14, -2),
                range(11, 16, -2),
                range(12, 16, -4),
                range(13, 17, -6),
                range(13, 17, -6),
                range(14, 17, -6),
                range(14, 18, -8),
                range(15, 19, -8),
                range(16, 20, -10),
                range(17, 20, -10),
                range(18, 20, -12),
                range(18, 20, -12),
                range(19, 20, -12),
                range(21, 22, -12),
            ],
        },
        // 6 bpp, 14 bpc
        RcCfgEntry {
            initial_xmit_delay: 768,
            first_line_bpg_offset: 15,
            initial_offset: 6144,
            flatness_min_qp: 15,
            flatness_max_qp: 25,
            rc_quant_incr_limit0: 23,
            rc_quant_incr_limit1: 27,
            ranges: [
                range(0, 16, 0),
                range(7, 18, -2),
                range(15, 20, -2),
                range(16, 20, -4),
                range(17, 21, -6),
                range(17, 21, -6),
                range(18, 21, -6),
                range(18, 22, -8),
                range(19, 23, -8),
                range(20, 24, -10),
                range(21, 24, -10),
                range(22, 24, -12),
                range(22, 24, -12),
                range(23, 24, -12),
                range(25, 26, -12),
            ],
        },
        // 6 bpp, 16 bpc
        RcCfgEntry {
            initial_xmit_delay: 768,
            first_line_bpg_offset: 15,
            initial_offset: 6144,
            flatness_min_qp: 19,
            flatness_max_qp: 29,
            rc_quant_incr_limit0: 27,
            rc_quant_incr_limit1: 27,
            ranges: [
                range(0, 20, 0),
                range(9, 22, -2),
                range(19, 24, -2),
                range(20, 24, -4),
                range(21, 25, -6),
                range(21, 25, -6),
                range(22, 25, -6),
                range(22, 26, -8),
                range(23, 27, -8),
                range(24, 28, -10),
                range(25, 28, -10),
                range(26, 28, -12),
                range(26, 28, -12),
                range(27, 28, -12),
                range(29, 30, -12),
            ],
        },
    ],
    [
        // 8 bpp, 8 bpc
        RcCfgEntry {
            initial_xmit_delay: 512,
            first_line_bpg_offset: 12,
            initial_offset: 6144,
            flatness_min_qp: 3,
            flatness_max_qp: 12,
            rc_quant_incr_limit0: 11,
            rc_quant_incr_limit1: 11,
            ranges: [
                range(0, 4, 2),
                range(0, 4, 0),
                range(1, 5, 0),
                range(1, 6, -2),
                range(3, 7, -4),
                range(3, 7, -6),
                range(3, 7, -8),
                range(3, 8, -8),
                range(3, 9, -8),
                range(3, 10, -10),
                range(5, 11, -10),
                range(5, 12, -12),
                range(5, 13, -12),
                range(7, 13, -12),
                range(13, 15, -12),
            ],
        },
        // 8 bpp, 10 bpc
        RcCfgEntry {
            initial_xmit_delay: 512,
            first_line_bpg_offset: 12,
            initial_offset: 6144,
            flatness_min_qp: 7,
            flatness_max_qp: 16,
            rc_quant_incr_limit0: 15,
            rc_quant_incr_limit1: 15,
            ranges: [
                range(0, 4, 2),
                range(4, 8, 0),
                range(5, 9, 0),
                range(5, 10, -2),
                range(7, 11, -4),
                range(7, 11, -6),
                range(7, 11, -8),
                range(7, 12, -8),
                range(7, 13, -8),
                range(7, 14, -10),
                range(9, 15, -10),
                range(9, 16, -12),
                range(9, 17, -12),
                range(11, 17, -12),
                range(17, 19, -12),
            ],
        },
        // 8 bpp, 12 bpc
        RcCfgEntry {
            initial_xmit_delay: 512,
            first_line_bpg_offset: 12,
            initial_offset: 6144,
            flatness_min_qp: 11,
            flatness_max_qp: 20,
            rc_quant_incr_limit0: 19,
            rc_quant_incr_limit1: 19,
            ranges: [
                range(0, 12, 2),
                range(4, 12, 0),
                range(9, 13, 0),
                range(9, 14, -2),
                range(11, 15, -4),
                range(11, 15, -6),
                range(11, 15, -8),
                range(11, 16, -8),
                range(11, 17, -8),
                range(11, 18, -10),
                range(13, 19, -10),
                range(13, 20, -12),
                range(13, 21, -12),
                range(15, 21, -12),
                range(21, 23, -12),
            ],
        },
        // 8 bpp, 14 bpc
        RcCfgEntry {
            initial_xmit_delay: 512,
            first_line_bpg_offset: 12,
            initial_offset: 6144,
            flatness_min_qp: 15,
            flatness_max_qp: 24,
            rc_quant_incr_limit0: 23,
            rc_quant_incr_limit1: 23,
            ranges: [
                range(0, 12, 0),
                range(5, 13, 0),
                range(11, 15, 0),
                range(12, 17, -2),
                range(15, 19, -4),
                range(15, 19, -6),
                range(15, 19, -8),
                range(15, 20, -8),
                range(15, 21, -8),
                range(15, 22, -10),
                range(17, 22, -10),
                range(17, 23, -12),
                range(17, 23, -12),
                range(21, 24, -12),
                range(24, 25, -12),
            ],
        },
        // 8 bpp, 16 bpc
        RcCfgEntry {
            initial_xmit_delay: 512,
            first_line_bpg_offset: 12,
            initial_offset: 6144,
            flatness_min_qp: 19,
            flatness_max_qp: 28,
            rc_quant_incr_limit0: 27,
            rc_quant_incr_limit1: 27,
            ranges: [
                range(0, 12, 2),
                range(6, 14, 0),
                range(13, 17, 0),
                range(15, 20, -2),
                range(19, 23, -4),
                range(19, 23, -6),
                range(19, 23, -8),
                range(19, 24, -8),
                range(19, 25, -8),
                range(19, 26, -10),
                range(21, 26, -10),
                range(21, 27, -12),
                range(21, 27, -12),
                range(25, 28, -12),
                range(28, 29, -12),
            ],
        },
    ],
    [
        // 10 bpp, 8 bpc
        RcCfgEntry {
            initial_xmit_delay: 410,
            first_line_bpg_offset: 15,
            initial_offset: 5632,
            flatness_min_qp: 3,
            flatness_max_qp: 12,
            rc_quant_incr_limit0: 11,
            rc_quant_incr_limit1: 11,
            ranges: [
                range(0, 3, 2),
                range(0, 4, 0),
                range(1, 5, 0),
                range(2, 6, -2),
                range(3, 7, -4),
                range(3, 7, -6),
                range(3, 7, -8),
                range(3, 8, -8),
                range(3, 9, -8),
                range(3, 9, -10),
                range(5, 10, -10),
                range(5, 10, -10),
                range(5, 11, -12),
                range(7, 11, -12),
                range(11, 12, -12),
            ],
        },
        // 10 bpp, 10 bpc
        RcCfgEntry {
            initial_xmit_delay: 410,
            first_line_bpg_offset: 15,
            initial_offset: 5632,
            flatness_min_qp: 7,
            flatness_max_qp: 16,
            rc_quant_incr_limit0: 15,
            rc_quant_incr_limit1: 15,
            ranges: [
                range(0, 7, 2),
                range(4, 8, 0),
                range(5, 9, 0),
                range(6, 10, -2),
                range(7, 11, -4),
                range(7, 11, -6),
                range(7, 11, -8),
                range(7, 12, -8),
                range(7, 13, -8),
                range(7, 13, -10),
                range(9, 14, -10),
                range(9, 14, -10),
                range(9, 15, -12),
                range(11, 15, -12),
                range(15, 16, -12),
            ],
        },
        // 10 bpp, 12 bpc
        RcCfgEntry {
            initial_xmit_delay: 410,
            first_line_bpg_offset: 15,
            initial_offset: 5632,
            flatness_min_qp: 11,
            flatness_max_qp: 20,
            rc_quant_incr_limit0: 19,
            rc_quant_incr_limit1: 19,
            ranges: [
                range(0, 11, 2),
                range(4, 12, 0),
                range(9, 13, 0),
                range(10, 14, -2),
                range(11, 15, -4),
                range(11, 15, -6),
                range(11, 15, -8),
                range(11, 16, -8),
                range(11, 17, -8),
                range(11, 17, -10),
                range(13, 18, -10),
                range(13, 18, -10),
                range(13, 19, -12),
                range(15, 19, -12),
                range(19, 20, -12),
            ],
        },
        // 10 bpp, 14 bpc
        RcCfgEntry {
            initial_xmit_delay: 410,
            first_line_bpg_offset: 15,
            initial_offset: 5632,
            flatness_min_qp: 15,
            flatness_max_qp: 24,
            rc_quant_incr_limit0: 23,
            rc_quant_incr_limit1: 23,
            ranges: [
                range(0, 11, 2),
                range(5, 13, 0),
                range(11, 15, 0),
                range(13, 18, -2),
                range(15, 19, -4),
                range(15, 19, -6),
                range(15, 19, -8),
                range(15, 20, -8),
                range(15, 21, -8),
                range(15, 21, -10),
                range(17, 22, -10),
                range(17, 22, -10),
                range(17, 23, -12),
                range(19, 23, -12),
                range(23, 24, -12),
            ],
        },
        // 10 bpp, 16 bpc
        RcCfgEntry {
            initial_xmit_delay: 410,
            first_line_bpg_offset: 15,
            initial_offset: 5632,
            flatness_min_qp: 19,
            flatness_max_qp: 28,
            rc_quant_incr_limit0: 27,
            rc_quant_incr_limit1: 27,
            ranges: [
                range(0, 11, 2),
                range(6, 14, 0),
                range(13, 17, 0),
                range(16, 20, -2),
                range(19, 23, -4),
                range(19, 23, -6),
                range(19, 23, -8),
                range(19, 24, -8),
                range(19, 25, -8),
                range(19, 25, -10),
                range(21, 26, -10),
                range(21, 26, -10),
                range(21, 27, -12),
                range(23, 27, -12),
                range(27, 28, -12),
            ],
        },
    ],
    [
        // 12 bpp, 8 bpc
        RcCfgEntry {
            initial_xmit_delay: 341,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 3,
            flatness_max_qp: 12,
            rc_quant_incr_limit0: 11,
            rc_quant_incr_limit1: 11,
            ranges: [
                range(0, 2, 2),
                range(0, 4, 0),
                range(1, 5, 0),
                range(1, 6, -2),
                range(3, 7, -4),
                range(3, 7, -6),
                range(3, 7, -8),
                range(3, 8, -8),
                range(3, 9, -8),
                range(3, 10, -10),
                range(5, 11, -10),
                range(5, 12, -12),
                range(5, 13, -12),
                range(7, 13, -12),
                range(13, 15, -12),
            ],
        },
        // 12 bpp, 10 bpc
        RcCfgEntry {
            initial_xmit_delay: 341,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 7,
            flatness_max_qp: 16,
            rc_quant_incr_limit0: 15,
            rc_quant_incr_limit1: 15,
            ranges: [
                range(0, 2, 2),
                range(2, 5, 0),
                range(3, 7, 0),
                range(4, 8, -2),
                range(6, 9, -4),
                range(7, 10, -6),
                range(7, 11, -8),
                range(7, 12, -8),
                range(7, 13, -8),
                range(7, 14, -10),
                range(9, 15, -10),
                range(9, 16, -12),
                range(9, 17, -12),
                range(11, 17, -12),
                range(17, 19, -12),
            ],
        },
        // 12 bpp, 12 bpc
        RcCfgEntry {
            initial_xmit_delay: 341,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 11,
            flatness_max_qp: 20,
            rc_quant_incr_limit0: 19,
            rc_quant_incr_limit1: 19,
            ranges: [
                range(0, 6, 2),
                range(4, 9, 0),
                range(7, 11, 0),
                range(8, 12, -2),
                range(10, 13, -4),
                range(11, 14, -6),
                range(11, 15, -8),
                range(11, 16, -8),
                range(11, 17, -8),
                range(11, 18, -10),
                range(13, 19, -10),
                range(13, 20, -12),
                range(13, 21, -12),
                range(15, 21, -12),
                range(21, 23, -12),
            ],
        },
        // 12 bpp, 14 bpc
        RcCfgEntry {
            initial_xmit_delay: 341,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 15,
            flatness_max_qp: 24,
            rc_quant_incr_limit0: 23,
            rc_quant_incr_limit1: 23,
            ranges: [
                range(0, 6, 2),
                range(7, 10, 0),
                range(9, 13, 0),
                range(11, 16, -2),
                range(14, 17, -4),
                range(15, 18, -6),
                range(15, 19, -8),
                range(15, 20, -8),
                range(15, 20, -8),
                range(15, 21, -10),
                range(17, 21, -10),
                range(17, 21, -12),
                range(17, 21, -12),
                range(19, 22, -12),
                range(22, 23, -12),
            ],
        },
        // 12 bpp, 16 bpc
        RcCfgEntry {
            initial_xmit_delay: 341,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 19,
            flatness_max_qp: 28,
            rc_quant_incr_limit0: 27,
            rc_quant_incr_limit1: 27,
            ranges: [
                range(0, 6, 2),
                range(6, 11, 0),
                range(11, 15, 0),
                range(14, 18, -2),
                range(18, 21, -4),
                range(19, 22, -6),
                range(19, 23, -8),
                range(19, 24, -8),
                range(19, 24, -8),
                range(19, 25, -10),
                range(21, 25, -10),
                range(21, 25, -12),
                range(21, 25, -12),
                range(23, 26, -12),
                range(26, 27, -12),
            ],
        },
    ],
    [
        // 15 bpp, 8 bpc
        RcCfgEntry {
            initial_xmit_delay: 273,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 3,
            flatness_max_qp: 12,
            rc_quant_incr_limit0: 11,
            rc_quant_incr_limit1: 11,
            ranges: [
                range(0, 0, 10),
                range(0, 1, 8),
                range(0, 1, 6),
                range(0, 2, 4),
                range(1, 2, 2),
                range(1, 3, 0),
                range(1, 3, -2),
                range(2, 4, -4),
                range(2, 5, -6),
                range(3, 5, -8),
                range(4, 6, -10),
                range(4, 7, -10),
                range(5, 7, -12),
                range(7, 8, -12),
                range(8, 9, -12),
            ],
        },
        // 15 bpp, 10 bpc
        RcCfgEntry {
            initial_xmit_delay: 273,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 7,
            flatness_max_qp: 16,
            rc_quant_incr_limit0: 15,
            rc_quant_incr_limit1: 15,
            ranges: [
                range(0, 2, 10),
                range(2, 5, 8),
                range(3, 5, 6),
                range(4, 6, 4),
                range(5, 6, 2),
                range(5, 7, 0),
                range(5, 7, -2),
                range(6, 8, -4),
                range(6, 9, -6),
                range(7, 9, -8),
                range(8, 10, -10),
                range(8, 11, -10),
                range(9, 11, -12),
                range(11, 12, -12),
                range(12, 13, -12),
            ],
        },
        // 15 bpp, 12 bpc
        RcCfgEntry {
            initial_xmit_delay: 273,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 11,
            flatness_max_qp: 20,
            rc_quant_incr_limit0: 19,
            rc_quant_incr_limit1: 19,
            ranges: [
                range(0, 4, 10),
                range(2, 7, 8),
                range(4, 9, 6),
                range(6, 11, 4),
                range(9, 11, 2),
                range(9, 11, 0),
                range(9, 12, -2),
                range(10, 12, -4),
                range(11, 13, -6),
                range(11, 13, -8),
                range(12, 14, -10),
                range(13, 15, -10),
                range(13, 15, -12),
                range(15, 16, -12),
                range(16, 17, -12),
            ],
        },
        // 15 bpp, 14 bpc
        RcCfgEntry {
            initial_xmit_delay: 273,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 15,
            flatness_max_qp: 24,
            rc_quant_incr_limit0: 23,
            rc_quant_incr_limit1: 23,
            ranges: [
                range(0, 4, 10),
                range(3, 8, 8),
                range(6, 11, 6),
                range(9, 14, 4),
                range(13, 15, 2),
                range(13, 15, 0),
                range(13, 16, -2),
                range(14, 16, -4),
                range(15, 17, -6),
                range(15, 17, -8),
                range(16, 18, -10),
                range(17, 19, -10),
                range(17, 19, -12),
                range(19, 20, -12),
                range(20, 21, -12),
            ],
        },
        // 15 bpp, 16 bpc
        RcCfgEntry {
            initial_xmit_delay: 273,
            first_line_bpg_offset: 15,
            initial_offset: 2048,
            flatness_min_qp: 19,
            flatness_max_qp: 28,
            rc_quant_incr_limit0: 27,
            rc_quant_incr_limit1: 27,
            ranges: [
                range(0, 4, 10),
                range(4, 9, 8),
                range(8, 13, 6),
                range(12, 17, 4),
                range(17, 19, 2),
                range(17, 20, 0),
                range(17, 20, -2),
                range(18, 20, -4),
                range(19, 21, -6),
                range(19, 21, -8),
                range(20, 22, -10),
                range(21, 23, -10),
                range(21, 23, -12),
                range(23, 24, -12),
                range(24, 25, -12),
            ],
        },
    ],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_444_8BPC: [[u8; 37]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    [6, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    [6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 0],
    [6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 0],
    [9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 1, 1, 1],
    [14, 14, 13, 13, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 9, 9, 9, 8, 8, 8, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_444_8BPC: [[u8; 37]; 15] = [
    [4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [8, 7, 7, 6, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [8, 8, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5, 5, 4, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 5, 4, 4, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [9, 8, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1],
    [9, 9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1],
    [10, 10, 9, 9, 8, 8, 8, 8, 8, 8, 8, 8, 8, 7, 7, 6, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1],
    [11, 11, 10, 10, 9, 9, 9, 9, 9, 9, 8, 8, 8, 7, 7, 6, 6, 5, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1],
    [12, 11, 11, 10, 10, 10, 9, 9, 9, 9, 9, 9, 9, 8, 8, 7, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1],
    [12, 12, 11, 11, 10, 10, 10, 10, 10, 10, 9, 9, 9, 8, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1],
    [12, 12, 12, 11, 11, 11, 10, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1],
    [12, 12, 12, 12, 11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 8, 8, 8, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1],
    [13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 10, 10, 10, 10, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2],
    [15, 15, 14, 14, 13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 10, 10, 10, 9, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 5, 5, 5, 4, 4, 4, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_444_10BPC: [[u8; 49]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [7, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [7, 7, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [9, 8, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [9, 9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [9, 9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0],
    [9, 9, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 0, 0],
    [10, 9, 9, 8, 8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 0],
    [10, 10, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1],
    [10, 10, 10, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 8, 8, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 1, 1, 1],
    [10, 10, 10, 10, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1],
    [12, 12, 12, 12, 12, 12, 12, 12, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1],
    [18, 18, 17, 17, 16, 16, 16, 16, 15, 15, 14, 14, 14, 14, 13, 13, 13, 12, 12, 12, 11, 11, 11, 11, 10, 10, 9, 9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_444_10BPC: [[u8; 49]; 15] = [
    [8, 8, 8, 8, 8, 8, 7, 7, 7, 6, 5, 5, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [10, 10, 9, 9, 8, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [12, 11, 11, 10, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 7, 6, 6, 5, 5, 5, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [12, 12, 11, 11, 10, 10, 10, 10, 10, 10, 10, 10, 9, 9, 9, 8, 7, 7, 6, 6, 6, 5, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [13, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 8, 8, 7, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [13, 12, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 10, 9, 8, 8, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 5, 5, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 0, 0],
    [13, 13, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 8, 8, 7, 7, 7, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1],
    [14, 14, 13, 13, 12, 12, 12, 12, 12, 12, 12, 12, 12, 11, 11, 10, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 6, 6, 6, 5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1],
    [15, 15, 14, 14, 13, 13, 13, 13, 13, 13, 12, 12, 12, 11, 11, 10, 10, 9, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 6, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 1, 1],
    [16, 15, 15, 14, 14, 14, 13, 13, 13, 13, 13, 13, 13, 12, 12, 11, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 1],
    [16, 16, 15, 15, 14, 14, 14, 14, 14, 14, 13, 13, 13, 12, 12, 11, 11, 10, 10, 10, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2],
    [16, 16, 16, 15, 15, 15, 14, 14, 14, 14, 13, 13, 13, 13, 12, 12, 12, 11, 11, 11, 10, 10, 9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2],
    [16, 16, 16, 16, 15, 15, 15, 15, 15, 14, 14, 13, 13, 13, 12, 12, 12, 11, 11, 11, 10, 10, 9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 2],
    [17, 17, 17, 17, 16, 16, 15, 15, 15, 15, 14, 14, 14, 14, 13, 13, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 2],
    [19, 19, 18, 18, 17, 17, 17, 17, 16, 16, 15, 15, 15, 15, 14, 14, 14, 13, 13, 13, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 10, 9, 9, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_444_12BPC: [[u8; 61]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [11, 10, 10, 9, 8, 8, 8, 8, 8, 8, 8, 8, 7, 7, 7, 6, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [11, 11, 10, 10, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 7, 6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [13, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 8, 7, 7, 7, 7, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [13, 12, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 9, 9, 8, 8, 8, 8, 6, 6, 6, 6, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [13, 13, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 7, 7, 7, 6, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [13, 13, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 10, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0],
    [13, 13, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 10, 10, 9, 9, 8, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0],
    [14, 13, 13, 12, 12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 10, 10, 9, 9, 8, 8, 8, 8, 8, 8, 7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 1, 1, 0],
    [14, 14, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 12, 12, 12, 11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 7, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1],
    [14, 14, 14, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 11, 11, 10, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 2, 2, 1, 1, 1],
    [14, 14, 14, 14, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 6, 6, 6, 6, 5, 4, 4, 4, 3, 3, 3, 3, 2, 2, 1, 1, 1],
    [17, 17, 17, 17, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 10, 10, 9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 1],
    [22, 22, 21, 21, 20, 20, 20, 20, 19, 19, 18, 18, 18, 18, 17, 17, 17, 16, 16, 16, 15, 15, 15, 15, 14, 14, 13, 13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 9, 9, 8, 8, 7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_444_12BPC: [[u8; 61]; 15] = [
    [12, 12, 12, 12, 12, 12, 11, 11, 11, 10, 9, 9, 6, 6, 5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [14, 14, 13, 13, 12, 12, 12, 12, 12, 12, 11, 11, 9, 9, 9, 8, 8, 7, 7, 7, 7, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [16, 15, 15, 14, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 12, 11, 10, 10, 9, 9, 9, 7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [16, 16, 15, 15, 14, 14, 14, 14, 14, 14, 14, 14, 13, 13, 13, 12, 11, 11, 10, 10, 10, 8, 8, 8, 8, 8, 7, 7, 6, 5, 5, 5, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [17, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 13, 12, 12, 11, 10, 10, 10, 10, 8, 8, 8, 8, 8, 8, 7, 7, 7, 6, 6, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [17, 16, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 14, 13, 12, 12, 11, 11, 11, 11, 9, 9, 9, 9, 8, 8, 8, 8, 7, 6, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0],
    [17, 17, 16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 13, 12, 12, 11, 11, 11, 11, 11, 10, 10, 10, 9, 9, 9, 8, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0],
    [18, 18, 17, 17, 16, 16, 16, 16, 16, 16, 16, 16, 16, 15, 15, 14, 13, 13, 12, 12, 12, 12, 11, 11, 11, 11, 10, 10, 10, 8, 8, 8, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1],
    [19, 19, 18, 18, 17, 17, 17, 17, 17, 17, 16, 16, 16, 15, 15, 14, 14, 13, 13, 13, 13, 13, 12, 12, 12, 12, 11, 11, 10, 9, 8, 8, 8, 8, 7, 7, 7, 7, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1],
    [20, 19, 19, 18, 18, 18, 17, 17, 17, 17, 17, 17, 17, 16, 16, 15, 14, 14, 13, 13, 13, 13, 12, 12, 12, 12, 11, 11, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 1],
    [20, 20, 19, 19, 18, 18, 18, 18, 18, 18, 17, 17, 17, 16, 16, 15, 15, 14, 14, 14, 13, 13, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 10, 10, 10, 10, 9, 9, 9, 8, 8, 8, 7, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2],
    [20, 20, 20, 19, 19, 19, 18, 18, 18, 18, 17, 17, 17, 17, 16, 16, 16, 15, 15, 15, 14, 14, 13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 10, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 6, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2],
    [20, 20, 20, 20, 19, 19, 19, 19, 19, 18, 18, 17, 17, 17, 16, 16, 16, 15, 15, 15, 14, 14, 13, 13, 13, 13, 12, 12, 11, 11, 11, 11, 10, 10, 10, 10, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 7, 7, 6, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 2],
    [21, 21, 21, 21, 20, 20, 19, 19, 19, 19, 18, 18, 18, 18, 17, 17, 16, 16, 16, 16, 15, 15, 14, 14, 14, 14, 13, 13, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 9, 9, 8, 8, 8, 8, 8, 7, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 2],
    [23, 23, 22, 22, 21, 21, 21, 21, 20, 20, 19, 19, 19, 19, 18, 18, 18, 17, 17, 17, 16, 16, 16, 16, 15, 15, 14, 14, 14, 14, 14, 13, 13, 12, 12, 12, 12, 12, 11, 11, 10, 10, 10, 10, 10, 9, 9, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 5, 5, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_422_8BPC: [[u8; 21]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [2, 2, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    [3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0],
    [3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1],
    [5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 1, 1],
    [5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 1],
    [5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 3, 3, 2, 2, 1, 1],
    [8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 2],
    [12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 4, 3, 3],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_422_8BPC: [[u8; 21]; 15] = [
    [4, 4, 3, 3, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 4, 3, 2, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 5, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    [6, 6, 6, 6, 6, 5, 4, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0],
    [7, 7, 7, 7, 7, 6, 5, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1],
    [7, 7, 7, 7, 7, 6, 5, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1],
    [7, 7, 7, 7, 7, 6, 5, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 1, 1, 1],
    [8, 8, 8, 8, 8, 7, 6, 5, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1],
    [9, 9, 9, 8, 8, 7, 6, 6, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 2],
    [10, 10, 9, 9, 9, 8, 7, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2],
    [10, 10, 10, 9, 9, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2],
    [11, 11, 10, 10, 9, 9, 8, 7, 7, 7, 6, 6, 5, 5, 4, 4, 4, 3, 3, 2, 2],
    [11, 11, 11, 10, 9, 9, 8, 8, 7, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2],
    [12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 3],
    [13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 5, 4, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_422_10BPC: [[u8; 29]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 4, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 5, 4, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 2, 1, 1, 0, 0, 0, 0, 0],
    [6, 6, 6, 6, 6, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 1, 1, 0, 0, 0],
    [7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 5, 5, 5, 5, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1],
    [7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 6, 6, 6, 5, 5, 5, 4, 4, 4, 4, 4, 3, 2, 2, 1, 1, 1, 1, 1],
    [8, 8, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 4, 3, 3, 2, 2, 1, 1, 1, 1],
    [9, 9, 9, 8, 8, 8, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 5, 5, 5, 5, 5, 3, 3, 2, 2, 2, 1, 1, 1],
    [9, 9, 9, 9, 8, 8, 8, 8, 8, 8, 8, 8, 7, 7, 6, 6, 6, 6, 6, 5, 5, 4, 3, 3, 2, 2, 1, 1, 1],
    [9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 8, 8, 7, 7, 6, 6, 5, 5, 4, 3, 3, 3, 2, 2, 1, 1],
    [12, 12, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 1],
    [16, 16, 15, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 8, 7, 7, 6, 6, 5, 5, 5, 4, 4, 3],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_422_10BPC: [[u8; 29]; 15] = [
    [8, 8, 7, 5, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [8, 8, 8, 6, 6, 5, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [9, 9, 9, 8, 7, 6, 5, 4, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0],
    [10, 10, 10, 10, 9, 8, 7, 6, 5, 5, 5, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1],
    [11, 11, 11, 11, 10, 9, 8, 6, 5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1],
    [11, 11, 11, 11, 11, 10, 9, 8, 7, 6, 6, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 3, 2, 2, 1, 1, 1, 1, 1],
    [11, 11, 11, 11, 11, 10, 9, 8, 7, 7, 7, 7, 7, 6, 6, 6, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2, 1, 1, 1],
    [12, 12, 12, 12, 12, 11, 10, 9, 8, 8, 8, 7, 7, 7, 7, 6, 5, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2],
    [13, 13, 13, 12, 12, 11, 10, 10, 9, 9, 9, 8, 8, 7, 7, 7, 6, 5, 5, 5, 5, 4, 3, 3, 2, 2, 2, 2, 2],
    [14, 14, 13, 13, 13, 12, 11, 10, 9, 9, 9, 9, 8, 8, 8, 7, 6, 6, 5, 5, 5, 4, 4, 3, 3, 2, 2, 2, 2],
    [14, 14, 14, 13, 13, 12, 11, 11, 10, 10, 10, 9, 9, 8, 8, 8, 7, 7, 6, 6, 6, 4, 4, 3, 3, 3, 2, 2, 2],
    [15, 15, 14, 14, 13, 13, 12, 11, 11, 11, 10, 10, 9, 9, 8, 8, 8, 7, 7, 6, 6, 5, 4, 4, 3, 3, 2, 2, 2],
    [15, 15, 15, 14, 13, 13, 12, 12, 11, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 4, 4, 4, 3, 3, 2, 2],
    [16, 16, 15, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2],
    [17, 17, 16, 16, 15, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 9, 8, 8, 7, 7, 6, 6, 6, 5, 5, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_422_12BPC: [[u8; 37]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [9, 9, 9, 8, 7, 6, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [10, 10, 10, 10, 8, 8, 8, 7, 6, 6, 6, 6, 6, 5, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [11, 11, 11, 11, 10, 9, 9, 8, 7, 7, 7, 7, 6, 6, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [11, 11, 11, 11, 11, 10, 10, 9, 9, 8, 8, 7, 6, 6, 5, 5, 5, 4, 4, 4, 4, 3, 2, 2, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [11, 11, 11, 11, 11, 10, 10, 10, 9, 9, 9, 9, 8, 7, 7, 7, 6, 6, 5, 5, 5, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0],
    [11, 11, 11, 11, 11, 11, 10, 10, 10, 10, 10, 9, 8, 8, 8, 7, 6, 6, 6, 5, 5, 5, 4, 4, 3, 3, 3, 3, 3, 2, 2, 2, 1, 1, 0, 0, 0],
    [11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 9, 8, 8, 8, 7, 6, 6, 6, 6, 5, 4, 4, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 0, 0, 0],
    [11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 9, 9, 9, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 1, 1, 0, 0],
    [13, 13, 13, 13, 13, 12, 12, 12, 12, 12, 12, 11, 11, 10, 10, 10, 9, 9, 8, 8, 8, 6, 6, 5, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 1, 1, 1],
    [13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 11, 11, 10, 10, 10, 9, 9, 8, 8, 7, 6, 6, 5, 5, 4, 4, 4, 4, 4, 3, 3, 2, 2, 1, 1],
    [13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 6, 6, 6, 5, 5, 4, 4, 4, 4, 3, 3, 2, 2, 1, 1],
    [16, 16, 15, 15, 15, 15, 15, 15, 15, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 4, 3, 3, 2, 2],
    [20, 20, 19, 19, 18, 18, 17, 17, 16, 16, 15, 15, 14, 14, 13, 13, 12, 12, 12, 11, 11, 10, 10, 9, 9, 9, 8, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_422_12BPC: [[u8; 37]; 15] = [
    [12, 12, 11, 9, 6, 6, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [12, 12, 12, 10, 9, 8, 7, 7, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [13, 13, 13, 12, 10, 9, 8, 7, 6, 6, 6, 6, 6, 6, 5, 5, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [14, 14, 14, 14, 12, 11, 10, 9, 8, 8, 8, 8, 8, 7, 6, 5, 5, 5, 5, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0],
    [15, 15, 15, 15, 14, 13, 12, 10, 9, 9, 9, 9, 8, 8, 7, 6, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 1, 0, 0, 0],
    [15, 15, 15, 15, 15, 14, 13, 12, 11, 10, 10, 9, 8, 8, 7, 7, 7, 6, 6, 6, 6, 5, 4, 4, 3, 3, 3, 2, 2, 2, 2, 1, 1, 1, 1, 1, 1],
    [15, 15, 15, 15, 15, 14, 13, 12, 11, 11, 11, 11, 10, 9, 9, 9, 8, 8, 7, 7, 7, 6, 6, 5, 5, 5, 4, 4, 4, 3, 3, 2, 2, 1, 1, 1, 1],
    [16, 16, 16, 16, 16, 15, 14, 13, 12, 12, 12, 11, 10, 10, 10, 9, 8, 8, 8, 7, 7, 7, 6, 6, 5, 5, 5, 5, 5, 3, 3, 3, 2, 2, 1, 1, 1],
    [17, 17, 17, 16, 16, 15, 14, 14, 13, 13, 13, 12, 11, 10, 10, 10, 9, 8, 8, 8, 8, 7, 6, 6, 5, 5, 5, 5, 5, 4, 4, 3, 3, 2, 1, 1, 1],
    [18, 18, 17, 17, 17, 16, 15, 14, 13, 13, 13, 13, 11, 11, 11, 10, 9, 9, 8, 8, 8, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 3, 3, 2, 2, 1, 1],
    [18, 18, 18, 17, 17, 16, 15, 15, 14, 14, 14, 13, 13, 12, 12, 12, 11, 11, 10, 10, 10, 8, 8, 7, 7, 7, 6, 6, 6, 5, 4, 4, 3, 3, 2, 2, 2],
    [19, 19, 18, 18, 17, 17, 16, 15, 15, 15, 14, 14, 13, 13, 12, 12, 12, 11, 11, 10, 10, 9, 8, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2],
    [19, 19, 19, 18, 17, 17, 16, 16, 15, 15, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 8, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2],
    [20, 20, 19, 19, 18, 18, 17, 17, 16, 16, 15, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 6, 5, 5, 5, 4, 4, 3, 3],
    [21, 21, 20, 20, 19, 19, 18, 18, 17, 17, 16, 16, 15, 15, 14, 14, 13, 13, 13, 12, 12, 11, 11, 10, 10, 10, 9, 9, 8, 8, 7, 7, 7, 6, 6, 5, 5],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_420_8BPC: [[u8; 17]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0],
    [3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    [3, 3, 3, 3, 3, 3, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0],
    [3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 1, 1, 0],
    [3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1, 1, 0],
    [3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 2, 1, 1],
    [5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 3, 3, 3, 3, 2, 1, 1],
    [5, 5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 2, 2, 1],
    [5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 4, 4, 3, 3, 2, 1],
    [9, 8, 8, 7, 7, 7, 7, 7, 7, 6, 5, 5, 4, 3, 3, 3, 2],
    [13, 12, 12, 11, 10, 10, 9, 8, 8, 7, 6, 6, 5, 5, 4, 4, 3],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_420_8BPC: [[u8; 17]; 15] = [
    [4, 4, 3, 3, 2, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 4, 3, 2, 2, 1, 1, 1, 1, 0, 0, 0, 0, 0],
    [5, 5, 5, 5, 5, 4, 3, 2, 1, 1, 1, 1, 1, 1, 0, 0, 0],
    [6, 6, 6, 6, 6, 5, 4, 3, 2, 2, 2, 1, 1, 1, 1, 0, 0],
    [7, 7, 7, 7, 7, 5, 4, 3, 2, 2, 2, 2, 2, 1, 1, 1, 0],
    [7, 7, 7, 7, 7, 6, 5, 4, 3, 3, 3, 2, 2, 2, 1, 1, 0],
    [7, 7, 7, 7, 7, 6, 5, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1],
    [8, 8, 8, 8, 8, 7, 6, 5, 4, 4, 4, 3, 3, 2, 2, 2, 1],
    [9, 9, 9, 8, 8, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 1],
    [10, 10, 9, 9, 9, 8, 7, 6, 5, 5, 5, 4, 4, 3, 3, 2, 2],
    [10, 10, 10, 9, 9, 8, 8, 7, 6, 6, 5, 5, 4, 4, 3, 2, 2],
    [11, 11, 10, 10, 9, 9, 8, 7, 7, 6, 6, 5, 5, 4, 3, 3, 2],
    [11, 11, 11, 10, 9, 9, 9, 8, 7, 7, 6, 5, 5, 4, 4, 3, 2],
    [13, 12, 12, 11, 10, 10, 9, 8, 8, 7, 6, 6, 5, 4, 4, 4, 3],
    [14, 13, 13, 12, 11, 11, 10, 9, 9, 8, 7, 7, 6, 6, 5, 5, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_420_10BPC: [[u8; 23]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 3, 2, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [5, 5, 5, 4, 4, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0],
    [7, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0],
    [7, 7, 7, 7, 7, 6, 5, 5, 5, 5, 5, 4, 3, 3, 2, 2, 1, 1, 1, 1, 1, 0, 0],
    [7, 7, 7, 7, 7, 6, 6, 5, 5, 5, 5, 4, 4, 4, 3, 2, 2, 2, 2, 1, 1, 1, 0],
    [7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 6, 5, 4, 4, 4, 3, 2, 2, 2, 1, 1, 1, 0],
    [7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 2, 1, 1],
    [7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 1, 1],
    [9, 9, 9, 9, 9, 8, 8, 8, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 3, 3, 2, 2, 1],
    [9, 9, 9, 9, 9, 9, 8, 8, 8, 8, 8, 8, 8, 7, 6, 6, 5, 4, 4, 3, 3, 2, 1],
    [9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 9, 8, 8, 7, 7, 6, 5, 4, 4, 3, 3, 2, 1],
    [13, 12, 12, 11, 11, 11, 11, 11, 11, 10, 9, 9, 8, 7, 7, 6, 5, 5, 4, 3, 3, 2, 2],
    [17, 16, 16, 15, 14, 14, 13, 12, 12, 11, 10, 10, 10, 9, 8, 8, 7, 6, 6, 5, 5, 4, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_420_10BPC: [[u8; 23]; 15] = [
    [8, 8, 7, 6, 4, 4, 3, 3, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [8, 8, 8, 7, 6, 5, 4, 4, 3, 3, 3, 3, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [9, 9, 9, 8, 8, 7, 6, 5, 4, 3, 3, 3, 3, 3, 2, 1, 1, 1, 0, 0, 0, 0, 0],
    [10, 10, 10, 9, 9, 8, 7, 6, 5, 4, 4, 3, 3, 3, 3, 2, 1, 1, 1, 1, 1, 0, 0],
    [11, 11, 11, 10, 10, 8, 7, 6, 5, 4, 4, 4, 4, 3, 3, 3, 2, 2, 2, 1, 1, 1, 0],
    [11, 11, 11, 10, 10, 9, 8, 7, 6, 6, 6, 5, 4, 4, 3, 3, 2, 2, 2, 2, 2, 1, 1],
    [11, 11, 11, 11, 11, 10, 9, 8, 7, 7, 7, 6, 5, 5, 4, 3, 3, 3, 3, 2, 2, 2, 1],
    [12, 12, 12, 12, 12, 11, 10, 9, 8, 8, 8, 7, 6, 5, 5, 4, 3, 3, 3, 2, 2, 2, 1],
    [13, 13, 13, 12, 12, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 5, 4, 4, 3, 3, 3, 2, 2],
    [14, 14, 13, 13, 13, 12, 11, 10, 9, 9, 9, 8, 8, 7, 7, 6, 5, 4, 4, 3, 3, 2, 2],
    [14, 14, 14, 13, 13, 12, 12, 11, 10, 10, 9, 9, 8, 8, 7, 6, 5, 5, 4, 4, 3, 3, 2],
    [15, 15, 14, 14, 13, 13, 12, 11, 11, 10, 10, 9, 9, 8, 7, 7, 6, 5, 5, 4, 4, 3, 2],
    [15, 15, 15, 14, 13, 13, 13, 12, 11, 11, 10, 9, 9, 8, 8, 7, 6, 5, 5, 4, 4, 3, 2],
    [17, 16, 16, 15, 14, 14, 13, 12, 12, 11, 10, 10, 9, 8, 8, 7, 6, 6, 5, 4, 4, 3, 3],
    [18, 17, 17, 16, 15, 15, 14, 13, 13, 12, 11, 11, 11, 10, 9, 9, 8, 7, 7, 6, 6, 5, 5],
];

#[rustfmt::skip]
pub(crate) static RANGE_MIN_QP_420_12BPC: [[u8; 29]; 15] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [4, 4, 4, 4, 4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [9, 8, 8, 7, 7, 6, 5, 5, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [10, 9, 9, 8, 8, 8, 7, 7, 6, 6, 6, 5, 5, 4, 4, 3, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [11, 10, 10, 10, 10, 9, 9, 8, 7, 6, 6, 6, 6, 5, 5, 4, 3, 3, 3, 2, 2, 1, 0, 0, 0, 0, 0, 0, 0],
    [11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 9, 8, 7, 6, 5, 5, 4, 4, 3, 3, 3, 2, 1, 1, 0, 0, 0, 0, 0],
    [11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 9, 8, 8, 7, 6, 5, 5, 5, 5, 4, 3, 3, 2, 1, 1, 1, 1, 1, 0],
    [11, 11, 11, 11, 11, 11, 11, 10, 10, 10, 10, 9, 8, 8, 8, 7, 6, 6, 5, 4, 4, 3, 2, 2, 1, 1, 1, 1, 1],
    [11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 5, 5, 4, 4, 2, 2, 1, 1, 1, 1],
    [11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 5, 4, 4, 3, 2, 2, 1, 1, 1],
    [13, 13, 13, 13, 13, 13, 13, 12, 12, 12, 11, 11, 10, 10, 9, 9, 8, 8, 7, 7, 6, 5, 4, 3, 3, 2, 2, 1, 1],
    [13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 12, 12, 11, 10, 10, 9, 8, 8, 7, 7, 6, 5, 4, 3, 3, 2, 2, 1],
    [13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 13, 12, 12, 11, 11, 10, 9, 8, 8, 7, 7, 6, 5, 4, 4, 3, 2, 2, 1],
    [15, 15, 15, 15, 15, 15, 15, 15, 15, 14, 13, 13, 12, 11, 11, 10, 9, 9, 8, 8, 7, 6, 6, 5, 4, 4, 3, 3, 2],
    [21, 20, 20, 19, 18, 18, 17, 16, 16, 15, 14, 14, 14, 13, 12, 12, 11, 10, 10, 10, 9, 8, 8, 7, 6, 6, 5, 5, 4],
];

#[rustfmt::skip]
pub(crate) static RANGE_MAX_QP_420_12BPC: [[u8; 29]; 15] = [
    [11, 10, 9, 8, 6, 6, 5, 5, 4, 3, 3, 2, 2, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [12, 11, 11, 10, 9, 8, 7, 7, 6, 6, 5, 5, 4, 3, 3, 2, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [13, 12, 12, 11, 11, 10, 9, 8, 7, 6, 6, 6, 5, 5, 4, 3, 3, 2, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [14, 13, 13, 12, 12, 11, 10, 9, 8, 7, 7, 6, 6, 5, 5, 4, 3, 3, 2, 2, 2, 1, 1, 1, 0, 0, 0, 0, 0],
    [15, 14, 14, 13, 13, 11, 10, 9, 8, 7, 7, 7, 7, 6, 6, 5, 4, 4, 4, 3, 3, 2, 1, 1, 1, 0, 0, 0, 0],
    [15, 15, 15, 14, 14, 13, 12, 11, 10, 10, 10, 9, 8, 7, 6, 6, 5, 5, 4, 4, 4, 3, 2, 2, 1, 1, 0, 0, 0],
    [15, 15, 15, 15, 15, 14, 13, 12, 11, 11, 11, 10, 9, 8, 7, 6, 6, 6, 6, 5, 4, 4, 3, 2, 2, 2, 1, 1, 0],
    [16, 16, 16, 16, 16, 15, 14, 13, 12, 12, 12, 11, 10, 9, 9, 8, 7, 7, 6, 5, 5, 4, 3, 3, 2, 2, 2, 1, 1],
    [17, 17, 17, 16, 16, 15, 14, 14, 13, 13, 12, 12, 11, 11, 10, 9, 8, 8, 7, 6, 6, 5, 5, 3, 3, 2, 2, 1, 1],
    [18, 18, 17, 17, 17, 16, 15, 14, 13, 13, 13, 12, 12, 11, 11, 10, 9, 8, 8, 7, 6, 5, 5, 4, 3, 3, 2, 2, 1],
    [18, 18, 18, 17, 17, 16, 16, 15, 14, 14, 13, 13, 12, 12, 11, 10, 9, 9, 8, 8, 7, 6, 5, 4, 4, 3, 3, 2, 2],
    [19, 19, 18, 18, 17, 17, 16, 15, 15, 14, 14, 13, 13, 12, 11, 11, 10, 9, 9, 8, 8, 7, 6, 5, 4, 4, 3, 3, 2],
    [19, 19, 19, 18, 17, 17, 17, 16, 15, 15, 14, 13, 13, 12, 12, 11, 10, 9, 9, 8, 8, 7, 6, 5, 5, 4, 3, 3, 2],
    [21, 20, 20, 19, 18, 18, 17, 16, 16, 15, 14, 14, 13, 12, 12, 11, 10, 10, 9, 9, 8, 7, 7, 6, 5, 5, 4, 4, 3],
    [22, 21, 21, 20, 19, 19, 18, 17, 17, 16, 15, 15, 15, 14, 13, 13, 12, 11, 11, 11, 10, 9, 9, 8, 7, 7, 6, 6, 5],
];

fn chart_entry<const N: usize>(chart: &[[u8; N]; NUM_BUF_RANGES], row: usize, column: usize) -> Option<u8> {
    chart.get(row)?.get(column).copied()
}

/// `(min_qp, max_qp)` for RC range `row` at QP chart `column`. `None` when the chart has no
/// such column or there is no chart for `bpc`.
pub(crate) fn qp_chart_bounds(
    format: ChromaFormat,
    bpc: u8,
    row: usize,
    column: usize,
) -> Option<(u8, u8)> {
    let pair = |lo: Option<u8>, hi: Option<u8>| Some((lo?, hi?));
    match (format, bpc) {
        (ChromaFormat::Native420, 8) => pair(
            chart_entry(&RANGE_MIN_QP_420_8BPC, row, column),
            chart_entry(&RANGE_MAX_QP_420_8BPC, row, column),
        ),
        (ChromaFormat::Native420, 10) => pair(
            chart_entry(&RANGE_MIN_QP_420_10BPC, row, column),
            chart_entry(&RANGE_MAX_QP_420_10BPC, row, column),
        ),
        (ChromaFormat::Native420, 12) => pair(
            chart_entry(&RANGE_MIN_QP_420_12BPC, row, column),
            chart_entry(&RANGE_MAX_QP_420_12BPC, row, column),
        ),
        (ChromaFormat::Native422, 8) => pair(
            chart_entry(&RANGE_MIN_QP_422_8BPC, row, column),
            chart_entry(&RANGE_MAX_QP_422_8BPC, row, column),
        ),
        (ChromaFormat::Native422, 10) => pair(
            chart_entry(&RANGE_MIN_QP_422_10BPC, row, column),
            chart_entry(&RANGE_MAX_QP_422_10BPC, row, column),
        ),
        (ChromaFormat::Native422, 12) => pair(
            chart_entry(&RANGE_MIN_QP_422_12BPC, row, column),
            chart_entry(&RANGE_MAX_QP_422_12BPC, row, column),
        ),
        (_, 8) => pair(
            chart_entry(&RANGE_MIN_QP_444_8BPC, row, column),
            chart_entry(&RANGE_MAX_QP_444_8BPC, row, column),
        ),
        (_, 10) => pair(
            chart_entry(&RANGE_MIN_QP_444_10BPC, row, column),
            chart_entry(&RANGE_MAX_QP_444_10BPC, row, column),
        ),
        (_, 12) => pair(
            chart_entry(&RANGE_MIN_QP_444_12BPC, row, column),
            chart_entry(&RANGE_MAX_QP_444_12BPC, row, column),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_widths_follow_bpc() {
        // 4:4:4 has ((3 * bpc - 6) * 2 + 1) columns.
        assert_eq!(RANGE_MIN_QP_444_8BPC[0].len(), 37);
        assert_eq!(RANGE_MAX_QP_444_12BPC[0].len(), 61);
        // 4:2:2 has ((2 * bpc - 6) * 2 + 1).
        assert_eq!(RANGE_MIN_QP_422_10BPC[0].len(), 29);
        // 4:2:0 has (3 * bpc - 8 + 1).
        assert_eq!(RANGE_MAX_QP_420_12BPC[0].len(), 29);
    }

    #[test]
    fn chart_lookup_bounds() {
        assert_eq!(qp_chart_bounds(ChromaFormat::Rgb, 8, 14, 4), Some((12, 13)));
        assert_eq!(qp_chart_bounds(ChromaFormat::Rgb, 8, 0, 37), None);
        assert_eq!(qp_chart_bounds(ChromaFormat::Rgb, 14, 0, 0), None);
    }

    #[test]
    fn canned_table_matches_dsc_model_cfg() {
        let e = &RC_CFG_TABLE[1][0];
        assert_eq!(e.initial_xmit_delay, 512);
        assert_eq!(e.first_line_bpg_offset, 12);
        assert_eq!(e.initial_offset, 6144);
        assert_eq!((e.flatness_min_qp, e.flatness_max_qp), (3, 12));
        assert_eq!(e.ranges[0], range(0, 4, 2));
        assert_eq!(e.ranges[14].bpg_offset, -12);
    }
}
