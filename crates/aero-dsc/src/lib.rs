//! VESA Display Stream Compression encoder configuration.
//!
//! - [`create_dsc_cfg`]: slice geometry, bpp selection and rate control for a sink
//! - [`compute_dsc_parameters`]: rate control for caller-provided geometry
//! - [`DscConfig`]: the picture parameter set fields
//! - [`RxDscCaps`]: sink decoder capabilities
#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;
mod rc;
mod tables;

pub use builder::{
    compute_dsc_parameters, create_dsc_cfg, snap_bpp_to_cfg, MIN_OPTIMIZED_SLICE_HEIGHT,
    MIN_PIXELS_PER_SLICE_FOR_GENERATED_RC, MIN_PIXELS_PER_SLICE_NATIVE, RC_EDGE_FACTOR,
    RC_MODEL_SIZE, RC_TGT_OFFSET_HI, RC_TGT_OFFSET_LO,
};
pub use config::{
    mux_word_size, rc_buf_thresh_registers, ChromaFormat, DscConfig, DscFormatSupport,
    DscOptions, DscRequest, RcRange, RxDscCaps,
};
pub use error::{DscError, Result};
pub use rc::{
    compute_initial_offset, compute_rc_parameters, generate_rc_range_params, line_bpg_offsets,
    rc_parameters_from_cfg,
};
pub use tables::{RcCfgEntry, NUM_BUF_RANGES, RC_BUF_THRESH};
