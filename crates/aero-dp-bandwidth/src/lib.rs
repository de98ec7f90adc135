//! DisplayPort link bandwidth: M/N ratios, transfer units and MST payload bandwidth.
//!
//! - [`sst_compute_mn_tu`]: fixed-N SST register values
//! - [`mst_compute_mn_tu_pbn`]: GCD-reduced M/N, VC payload timeslots and PBN
//! - [`compute_mn_tu_pbn_considering_eoc`] and [`compute_mn_tu_pbn_link_layer_symbol_count`]:
//!   variants that account for DSC chunk overhead
//! - [`available_link_pbn`], [`compute_pixel_data_bw_mbps`], [`hdmi_link_bw_mbps`]: raw
//!   bandwidth helpers
#![forbid(unsafe_code)]

mod coding;
mod error;
mod link;
mod pbn;

pub use coding::{
    efficiency, ChannelCoding, SscOverhead, FEC_OVERHEAD_PER_MHZ, MTP_TIMESLOTS_128B_132B,
    MTP_TIMESLOTS_8B_10B, TU_SIZE, UHBR_MIN_LINK_RATE_MBPS,
};
pub use error::{LinkError, Result};
pub use link::{
    compute_mn_tu_pbn_considering_eoc, compute_mn_tu_pbn_link_layer_symbol_count,
    mst_compute_mn_tu_pbn, sst_compute_mn_tu, vc_time_slots, DpLinkData, LinkBandwidth,
    MnTu, MstBwData, MIN_M_VALUE, RESCALED_DATA_N, RESCALED_LINK_N, SST_DATA_N, SST_LINK_N,
};
pub use pbn::{
    available_link_pbn, compute_pixel_data_bw_mbps, hdmi_link_bw_mbps, pbn_per_slot_x100,
    FrlRate,
};
