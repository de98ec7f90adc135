//! Payload bandwidth numbers and raw bandwidth helpers.
//!
//! One PBN is 54/64 MBps.

use aero_display_math::{div_round_up, Bppx16};

use crate::coding::{efficiency, ChannelCoding};

/// Link bandwidth in PBN: `rate * lanes * efficiency * 8 / 54`, folded into one division.
pub fn available_link_pbn(lane_count: u32, link_rate_mbps: u32) -> u32 {
    let efficiency = match ChannelCoding::for_link_rate(link_rate_mbps) {
        ChannelCoding::Ansi8b10b => efficiency::MST,
        ChannelCoding::Coding128b132b => efficiency::CODING_128B_132B,
    };
    let pbn = u64::from(link_rate_mbps) * u64::from(lane_count) * u64::from(efficiency) / 67_500;
    u32::try_from(pbn).unwrap_or(u32::MAX)
}

/// PBN carried by one MTP timeslot, times 100.
pub fn pbn_per_slot_x100(lane_count: u32, link_rate_mbps: u32) -> u32 {
    let slots = ChannelCoding::for_link_rate(link_rate_mbps).mtp_timeslots();
    available_link_pbn(lane_count, link_rate_mbps).saturating_mul(100) / slots
}

/// Pixel stream bandwidth in Mbps, rounded up.
pub fn compute_pixel_data_bw_mbps(dot_clock_hz: u64, bits_per_pixel: Bppx16) -> u64 {
    let pixel_clock_100hz = dot_clock_hz / 100;
    div_round_up(
        pixel_clock_100hz * u64::from(bits_per_pixel.bits()) / u64::from(Bppx16::DIVISOR),
        10_000,
    )
}

const FRL_LANE_RATE_MBPS: [u32; 7] = [0, 3000, 6000, 6000, 8000, 10_000, 12_000];

/// HDMI 2.1 fixed rate link configuration, as encoded in `Max_FRL_Rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FrlRate {
    /// TMDS only.
    None,
    Gbps3Lanes3,
    Gbps6Lanes3,
    Gbps6Lanes4,
    Gbps8Lanes4,
    Gbps10Lanes4,
    Gbps12Lanes4,
}

impl FrlRate {
    pub const fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            0 => Self::None,
            1 => Self::Gbps3Lanes3,
            2 => Self::Gbps6Lanes3,
            3 => Self::Gbps6Lanes4,
            4 => Self::Gbps8Lanes4,
            5 => Self::Gbps10Lanes4,
            6 => Self::Gbps12Lanes4,
            _ => return None,
        })
    }

    /// Per-lane rate.
    pub const fn lane_rate_mbps(self) -> u32 {
        FRL_LANE_RATE_MBPS[self as usize]
    }

    pub const fn lane_count(self) -> u32 {
        match self {
            Self::None => 0,
            Self::Gbps3Lanes3 | Self::Gbps6Lanes3 => 3,
            _ => 4,
        }
    }
}

/// Per-lane FRL rate for a `Max_FRL_Rate` index; 0 for unknown indices.
pub fn hdmi_link_bw_mbps(max_frl_rate_index: u8) -> u32 {
    FrlRate::from_index(max_frl_rate_index).map_or(0, FrlRate::lane_rate_mbps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hbr2_x4_pbn() {
        assert_eq!(available_link_pbn(4, 5400), 2560);
        // 2560 / 63 slots.
        assert_eq!(pbn_per_slot_x100(4, 5400), 4063);
    }

    #[test]
    fn uhbr_pbn_uses_all_64_slots() {
        // 10000 * 4 * 9671 / 67500 = 5730.96.
        assert_eq!(available_link_pbn(4, 10_000), 5730);
        assert_eq!(pbn_per_slot_x100(4, 10_000), 8953);
    }

    #[test]
    fn pixel_bandwidth_rounds_up() {
        // 148.5 MHz * 24 bpp = 3564 Mbps.
        assert_eq!(compute_pixel_data_bw_mbps(148_500_000, Bppx16::from_int(24)), 3564);
        // 25.175 MHz * 24 = 604.2 Mbps.
        assert_eq!(compute_pixel_data_bw_mbps(25_175_000, Bppx16::from_int(24)), 605);
    }

    #[test]
    fn frl_table() {
        assert_eq!(hdmi_link_bw_mbps(0), 0);
        assert_eq!(hdmi_link_bw_mbps(2), 6000);
        assert_eq!(hdmi_link_bw_mbps(3), 6000);
        assert_eq!(hdmi_link_bw_mbps(6), 12_000);
        assert_eq!(hdmi_link_bw_mbps(7), 0);
        assert_eq!(FrlRate::Gbps6Lanes3.lane_count(), 3);
        assert_eq!(FrlRate::from_index(5), Some(FrlRate::Gbps10Lanes4));
    }
}
