//! Channel coding and the fixed overhead constants of a DisplayPort main link.

/// Link rates at or above this use 128b/132b (UHBR).
pub const UHBR_MIN_LINK_RATE_MBPS: u32 = 10_000;

/// Data bandwidth efficiencies, per 10000.
pub mod efficiency {
    /// 8b/10b SST.
    pub const SST: u32 = 8000;
    /// 8b/10b SST with FEC: `8000 * 0.972661`.
    pub const SST_FEC: u32 = 7781;
    /// 8b/10b with FEC and DSC; an additional 0.2% end-of-chunk margin.
    pub const SST_FEC_DSC: u32 = 7766;
    /// 8b/10b MST. The rate governor multiplies Data M/N by 64 slots, not 63, so the nominal
    /// 80% is used instead of 78.75%.
    pub const MST: u32 = 8000;
    /// 128b/132b; FEC is part of the coding.
    pub const CODING_128B_132B: u32 = 9671;
}

/// FEC-adjusted link symbol clock per MHz (2.7339% overhead).
pub const FEC_OVERHEAD_PER_MHZ: u64 = 972_661;

/// Transfer unit size in link symbols; also the number of MTP timeslots.
pub const TU_SIZE: u32 = 64;
/// 8b/10b reserves MTP timeslot 0 for the MTP header.
pub const MTP_TIMESLOTS_8B_10B: u32 = 63;
/// 128b/132b has no MTP header.
pub const MTP_TIMESLOTS_128B_132B: u32 = 64;

/// Main link channel coding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelCoding {
    /// RBR, HBR, HBR2 and HBR3.
    Ansi8b10b,
    /// UHBR10, UHBR13.5 and UHBR20.
    Coding128b132b,
}

impl ChannelCoding {
    pub const fn for_link_rate(link_rate_mbps: u32) -> Self {
        if link_rate_mbps >= UHBR_MIN_LINK_RATE_MBPS {
            Self::Coding128b132b
        } else {
            Self::Ansi8b10b
        }
    }

    /// Bits carried per link symbol.
    pub const fn symbol_bits(self) -> u64 {
        match self {
            Self::Ansi8b10b => 8,
            Self::Coding128b132b => 32,
        }
    }

    /// Link symbol clock in 100 Hz units: `rate / 10` MHz for 8b/10b, `rate / 32` for 128b/132b.
    pub const fn link_symbol_clock_100hz(self, link_rate_mbps: u32) -> u64 {
        let rate = link_rate_mbps as u64;
        match self {
            Self::Ansi8b10b => rate * 1000,
            Self::Coding128b132b => rate * 625 / 2,
        }
    }

    pub const fn mtp_timeslots(self) -> u32 {
        match self {
            Self::Ansi8b10b => MTP_TIMESLOTS_8B_10B,
            Self::Coding128b132b => MTP_TIMESLOTS_128B_132B,
        }
    }

    /// Efficiency for the M/N/TU paths. FEC and DSC only matter on 8b/10b.
    pub const fn data_efficiency(self, fec: bool, dsc: bool) -> u32 {
        match (self, fec, dsc) {
            (Self::Coding128b132b, _, _) => efficiency::CODING_128B_132B,
            (Self::Ansi8b10b, true, true) => efficiency::SST_FEC_DSC,
            (Self::Ansi8b10b, true, false) => efficiency::SST_FEC,
            (Self::Ansi8b10b, false, _) => efficiency::SST,
        }
    }
}

/// Spread spectrum clocking overhead, as a pixel clock multiplier scaled by 10^6.
///
/// Down-spreading lowers the average link rate by half the spread amplitude; the pixel clock
/// is raised by the reciprocal instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SscOverhead(u32);

impl SscOverhead {
    /// 0.5% spread: `1 / 0.9975`.
    pub const DP_LEGACY: Self = Self(1_002_506);
    /// 0.45% spread on C20 PHYs: `1 / 0.99775`.
    pub const C20_PHY: Self = Self(1_002_255);

    pub const fn from_x1e6(multiplier: u32) -> Self {
        Self(multiplier)
    }

    pub const fn x1e6(self) -> u32 {
        self.0
    }

    pub(crate) fn apply(self, pixel_clock_hz: u64) -> u64 {
        pixel_clock_hz * u64::from(self.0) / 1_000_000
    }
}

impl Default for SscOverhead {
    fn default() -> Self {
        Self::DP_LEGACY
    }
}
