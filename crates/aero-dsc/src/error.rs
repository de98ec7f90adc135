use aero_display_math::Bppx16;
use thiserror::Error;

use crate::ChromaFormat;

pub type Result<T> = std::result::Result<T, DscError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DscError {
    #[error("invalid DSC input: {0}")]
    InvalidInput(&'static str),

    #[error("unsupported bits per component: {bpc}")]
    UnsupportedBpc { bpc: u8 },

    #[error("compressed bpp {bpp} is below the minimum for {format:?}")]
    BppBelowMinimum { bpp: Bppx16, format: ChromaFormat },

    #[error("compressed bpp {bpp} is outside the QP chart for {format:?} at {bpc} bpc")]
    BppAboveChart {
        bpp: Bppx16,
        format: ChromaFormat,
        bpc: u8,
    },

    #[error("compressed bpp {bpp} is below every canned RC rate")]
    BppBelowCannedRates { bpp: Bppx16 },

    #[error("no canned RC parameters for {bpp} bpp at {bpc} bpc")]
    UnsupportedCfgCombination { bpp: Bppx16, bpc: u8 },

    #[error("range {index} max QP {max_qp} exceeds {limit} for DSC 1.1 YCbCr")]
    MaxQpOutOfRange { index: usize, max_qp: u8, limit: u8 },

    #[error("initial offset {initial_offset} must be less than the RC model size {rc_model_size}")]
    InitialOffsetTooLarge {
        initial_offset: u32,
        rc_model_size: u32,
    },

    #[error("final offset {final_offset} must be less than the RC model size {rc_model_size}")]
    FinalOffsetTooLarge {
        final_offset: i64,
        rc_model_size: u32,
    },

    #[error("final scale {final_scale}/8 exceeds 63/8")]
    FinalScaleTooLarge { final_scale: u32 },

    #[error("{which} bpg offset does not fit 16 bits")]
    LineBpgOffsetOverflow { which: &'static str },

    #[error("first line bpg offset must be 0 for single-line slices")]
    FirstLineOffsetWithSingleLineSlice,

    #[error("bit allocation for non-first lines is below 5.33 bpp")]
    NonFirstLineBppTooLow,

    #[error("scale increment interval {interval} does not fit 16 bits")]
    ScaleIncrementOverflow { interval: u64 },

    #[error("no valid slice height for a {pic_height} line picture")]
    NoValidSliceHeight { pic_height: u32 },
}
