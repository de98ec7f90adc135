//! Link M/N, Data M/N, transfer unit and PBN computation.
//!
//! Link M/N is the pixel clock to link symbol clock ratio the sink uses to regenerate the
//! stream clock. Data M/N is the payload to capacity ratio: SST hardware uses it to stuff
//! dummy symbols into each 64-symbol transfer unit, MST hardware uses it for rate governing.

use aero_display_math::{div_round_up, gcd, Bppx16, MAX_24BIT_REGISTER};

use crate::coding::{ChannelCoding, SscOverhead, FEC_OVERHEAD_PER_MHZ, TU_SIZE};
use crate::pbn::{compute_pixel_data_bw_mbps, pbn_per_slot_x100};
use crate::{LinkError, Result};

/// Fixed Link N of the SST path.
pub const SST_LINK_N: u32 = 0x80000;
/// Fixed Data N of the SST path.
pub const SST_DATA_N: u32 = 0x800000;
/// Link N used once a reduced Link M/N pair overflows 24 bits.
pub const RESCALED_LINK_N: u64 = 0x8000;
/// Data N used once a reduced Data M/N pair overflows 24 bits. Divisible by both 8 and 10000.
pub const RESCALED_DATA_N: u64 = 80_000;
/// M values below this are scaled up; some sinks blank with very small M/N pairs.
pub const MIN_M_VALUE: u64 = 1000;

/// Stream bandwidth margin carried in the PBN of an ALLOCATE_PAYLOAD message: 0.5%
/// down-spread plus 0.06% branch reference clock deviation, times 10^6.
const PBN_MARGIN_X1E6: u64 = 1_006_000;

/// Link configuration and stream parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DpLinkData {
    pub link_rate_mbps: u32,
    /// 1, 2 or 4.
    pub lane_count: u32,
    pub dot_clock_hz: u64,
    /// Compressed bpp when DSC is on.
    pub bits_per_pixel: Bppx16,
    pub fec: bool,
    /// Down-spread; `None` when spread spectrum clocking is off.
    pub spread: Option<SscOverhead>,
    /// eDP multi-SST operation: the number of SST links the panel is split across. The
    /// dot clock is for the whole panel.
    pub mso_links: Option<u32>,
    pub mst: bool,
    /// Single-stream sink that accepts sideband messages and so needs a PBN.
    pub single_stream_sideband: bool,
    pub dsc: bool,
    pub dsc_slices_per_scanline: u32,
    pub h_active: u32,
    pub h_total: u32,
    /// Link symbol clocks spent on horizontal blanking.
    pub h_blank_link_symbol_clocks: u32,
}

impl DpLinkData {
    pub fn new(
        link_rate_mbps: u32,
        lane_count: u32,
        dot_clock_hz: u64,
        bits_per_pixel: Bppx16,
    ) -> Self {
        Self {
            link_rate_mbps,
            lane_count,
            dot_clock_hz,
            bits_per_pixel,
            ..Self::default()
        }
    }

    pub fn coding(&self) -> ChannelCoding {
        ChannelCoding::for_link_rate(self.link_rate_mbps)
    }

    fn validate(&self) -> Result<()> {
        let reason = if self.link_rate_mbps == 0 {
            "zero link rate"
        } else if !matches!(self.lane_count, 1 | 2 | 4) {
            "lane count must be 1, 2 or 4"
        } else if self.dot_clock_hz < 100 {
            "pixel clock below 100 Hz"
        } else if self.bits_per_pixel.is_zero() {
            "zero bits per pixel"
        } else if self.mso_links == Some(0) {
            "MSO with zero links"
        } else {
            return Ok(());
        };
        tracing::warn!(link = ?self, reason, "rejecting link configuration");
        Err(LinkError::InvalidLinkConfig(reason))
    }

    /// Per-link pixel clock with the spread overhead folded in.
    fn stream_pixel_clock_hz(&self) -> u64 {
        let per_link = self.dot_clock_hz / u64::from(self.mso_links.unwrap_or(1));
        match self.spread {
            Some(ssc) => ssc.apply(per_link),
            None => per_link,
        }
    }

    fn insufficient(&self, pixel_clock_hz: u64, efficiency: u32) -> LinkError {
        let required_mbps = compute_pixel_data_bw_mbps(pixel_clock_hz, self.bits_per_pixel);
        let available_mbps = u64::from(self.link_rate_mbps)
            * u64::from(self.lane_count)
            * u64::from(efficiency)
            / 10_000;
        tracing::warn!(
            required_mbps,
            available_mbps,
            link_rate_mbps = self.link_rate_mbps,
            lane_count = self.lane_count,
            "insufficient link bandwidth"
        );
        LinkError::InsufficientLinkBandwidth {
            required_mbps,
            available_mbps,
        }
    }
}

/// Register values for one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MnTu {
    pub link_m: u32,
    pub link_n: u32,
    pub data_m: u32,
    pub data_n: u32,
    pub data_tu: u32,
    /// Stream clock sent as VFREQ on 128b/132b links, which have no Mvid/Nvid; 0 on 8b/10b.
    pub v_freq_hz: u64,
}

/// MST payload allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MstBwData {
    /// PBN requested in ALLOCATE_PAYLOAD.
    pub actual_pbn: u32,
    /// PBN of the timeslots allocated at the source.
    pub allocated_pbn: u32,
    pub vc_payload_table_num_slots: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkBandwidth {
    pub mn_tu: MnTu,
    /// Present for MST and single-stream sideband sinks.
    pub mst: Option<MstBwData>,
}

fn register(value: u64) -> Result<u32> {
    u32::try_from(value)
        .ok()
        .filter(|&v| u64::from(v) <= MAX_24BIT_REGISTER)
        .ok_or(LinkError::InvalidLinkConfig("M/N value exceeds 24 bits"))
}

/// Scales `m / n` up by the smallest integer bringing `m` to at least [`MIN_M_VALUE`], if
/// `n` still fits the register afterwards.
fn raise_small_m(m: u64, n: u64) -> (u64, u64) {
    if m > 0 && m < MIN_M_VALUE {
        let multiplier = MIN_M_VALUE / m + 1;
        if n * multiplier < MAX_24BIT_REGISTER {
            return (m * multiplier, n * multiplier);
        }
    }
    (m, n)
}

/// Link M/N as the GCD-reduced pixel clock to link symbol clock ratio.
fn reduced_link_mn(pixel_clock_100hz: u64, link_symbol_clock_100hz: u64) -> (u64, u64) {
    let divisor = gcd(link_symbol_clock_100hz, pixel_clock_100hz);
    let (mut m, mut n) = (pixel_clock_100hz / divisor, link_symbol_clock_100hz / divisor);
    if m > MAX_24BIT_REGISTER || n > MAX_24BIT_REGISTER {
        m = m * RESCALED_LINK_N / n;
        n = RESCALED_LINK_N;
        tracing::debug!(link_m = m, link_n = n, "rescaled link M/N to 24 bits");
    }
    raise_small_m(m, n)
}

/// Data M/N as the GCD-reduced `required / available` ratio.
fn reduced_data_mn(required: u64, available: u64) -> (u64, u64) {
    let divisor = gcd(required, available);
    let (mut m, mut n) = (required / divisor, available / divisor);
    if m > MAX_24BIT_REGISTER || n > MAX_24BIT_REGISTER {
        m = div_round_up(m * RESCALED_DATA_N, n);
        n = RESCALED_DATA_N;
        tracing::debug!(data_m = m, data_n = n, "rescaled data M/N to 24 bits");
    }
    raise_small_m(m, n)
}

/// Timeslots for a stream with payload ratio `data_m / data_n`: `ceil(ratio * 64)`, plus one
/// when the division is exact so the stream has at least one VC payload fill symbol to
/// delimit its allocation.
pub fn vc_time_slots(data_m: u64, data_n: u64) -> u64 {
    let scaled = data_m * u64::from(TU_SIZE);
    let slots = div_round_up(scaled, data_n);
    if scaled % data_n == 0 {
        slots + 1
    } else {
        slots
    }
}

/// 8b/10b MST always maps four symbols across the lanes, so x1 links need a multiple of 4
/// slots and x2 links a multiple of 2.
fn align_to_lane_boundary(slots: u64, lane_count: u32, coding: ChannelCoding) -> u64 {
    if coding != ChannelCoding::Ansi8b10b {
        return slots;
    }
    let lanes = u64::from(lane_count);
    match (slots * lanes) % 4 {
        0 => slots,
        remainder => slots + (4 - remainder) / lanes,
    }
}

fn payload_bandwidth(
    link: &DpLinkData,
    coding: ChannelCoding,
    data_m: u64,
    data_n: u64,
    data_tu: u64,
) -> Result<MstBwData> {
    let pbn_per_slot = u64::from(pbn_per_slot_x100(link.lane_count, link.link_rate_mbps));
    if pbn_per_slot == 0 {
        return Err(LinkError::InvalidLinkConfig("link carries no PBN per timeslot"));
    }

    // ceil(ratio * 64 * pbn_per_slot * margin). With SSC on, Data M/N already carries the
    // spread, so only the remainder of the margin is added.
    let (numerator, denominator) = match link.spread {
        Some(ssc) => {
            let margin = 1_000_000 + PBN_MARGIN_X1E6.saturating_sub(u64::from(ssc.x1e6()));
            (
                u128::from(data_m) * u128::from(pbn_per_slot) * u128::from(margin),
                u128::from(data_n) * 1_562_500,
            )
        }
        None => (
            u128::from(data_m) * u128::from(TU_SIZE) * u128::from(pbn_per_slot) * 1006,
            u128::from(data_n) * 100_000,
        ),
    };
    let actual_pbn = u32::try_from(numerator.div_ceil(denominator)).unwrap_or(u32::MAX);
    let allocated_pbn =
        u32::try_from(div_round_up(data_tu * pbn_per_slot, 100)).unwrap_or(u32::MAX);

    let max_slots = coding.mtp_timeslots();
    if u64::from(actual_pbn) * 100 > u64::from(max_slots) * pbn_per_slot {
        tracing::warn!(
            actual_pbn,
            max_slots,
            pbn_per_slot_x100 = pbn_per_slot,
            "stream PBN exceeds the MTP"
        );
        return Err(LinkError::PbnExceedsTimeslots {
            actual_pbn,
            max_slots,
        });
    }
    let vc_payload_table_num_slots = u8::try_from(data_tu).map_err(|_| {
        LinkError::PbnExceedsTimeslots {
            actual_pbn,
            max_slots,
        }
    })?;

    Ok(MstBwData {
        actual_pbn,
        allocated_pbn,
        vc_payload_table_num_slots,
    })
}

/// Parameters shared by the GCD-based variants once the pixel clock and coding are known.
struct Stream<'a> {
    link: &'a DpLinkData,
    coding: ChannelCoding,
    pixel_clock_hz: u64,
    efficiency: u32,
}

impl<'a> Stream<'a> {
    /// `dsc_margin` selects the FEC+DSC efficiency; the link-layer variants account for
    /// end-of-chunk overhead themselves.
    fn new(link: &'a DpLinkData, dsc_margin: bool) -> Result<Self> {
        link.validate()?;
        let coding = link.coding();
        let dsc_margin = link.dsc && dsc_margin;
        Ok(Self {
            link,
            coding,
            pixel_clock_hz: link.stream_pixel_clock_hz(),
            efficiency: coding.data_efficiency(link.fec, dsc_margin),
        })
    }

    fn pixel_clock_100hz(&self) -> u64 {
        self.pixel_clock_hz / 100
    }

    fn link_symbol_clock_100hz(&self) -> u64 {
        self.coding.link_symbol_clock_100hz(self.link.link_rate_mbps)
    }

    /// Available bandwidth as `rate * lanes * efficiency`, the byte-bandwidth denominator.
    fn available(&self) -> u64 {
        u64::from(self.link.link_rate_mbps)
            * u64::from(self.link.lane_count)
            * u64::from(self.efficiency)
    }

    /// Required bandwidth in the same units as [`Self::available`].
    fn required(&self) -> u64 {
        self.pixel_clock_100hz() * u64::from(self.link.bits_per_pixel.bits())
            / u64::from(Bppx16::DIVISOR)
    }

    fn link_mn(&self) -> (u64, u64) {
        reduced_link_mn(self.pixel_clock_100hz(), self.link_symbol_clock_100hz())
    }

    /// Data M/N, transfer unit and, when the sink takes a PBN, the MST allocation.
    fn finish(&self, required: u64, available: u64, needs_pbn: bool) -> Result<LinkBandwidth> {
        if required > available {
            return Err(self.link.insufficient(self.pixel_clock_hz, self.efficiency));
        }
        let (link_m, link_n) = self.link_mn();
        let (mut data_m, data_n) = reduced_data_mn(required, available);
        let mut data_tu = align_to_lane_boundary(
            vc_time_slots(data_m, data_n),
            self.link.lane_count,
            self.coding,
        );

        let mst = if needs_pbn {
            Some(payload_bandwidth(self.link, self.coding, data_m, data_n, data_tu)?)
        } else {
            // 128b/132b SST programs the occupied slots; 8b/10b uses the full transfer unit.
            if self.coding == ChannelCoding::Ansi8b10b {
                data_tu = u64::from(TU_SIZE);
            }
            if let Some(links) = self.link.mso_links {
                data_m *= u64::from(links);
            }
            None
        };

        let v_freq_hz = match self.coding {
            ChannelCoding::Coding128b132b => self.link.dot_clock_hz,
            ChannelCoding::Ansi8b10b => 0,
        };
        let mn_tu = MnTu {
            link_m: register(link_m)?,
            link_n: register(link_n)?,
            data_m: register(data_m)?,
            data_n: register(data_n)?,
            data_tu: u32::try_from(data_tu).unwrap_or(u32::MAX),
            v_freq_hz,
        };
        tracing::debug!(?mn_tu, ?mst, "link bandwidth computed");
        Ok(LinkBandwidth { mn_tu, mst })
    }
}

/// SST Link and Data M/N with fixed N values and a 64-symbol transfer unit. 8b/10b only.
///
/// With MSO the link clock is per link and Data M is scaled back up by the link count.
pub fn sst_compute_mn_tu(link: &DpLinkData) -> Result<LinkBandwidth> {
    link.validate()?;
    let coding = link.coding();
    if coding != ChannelCoding::Ansi8b10b {
        return Err(LinkError::InvalidLinkConfig(
            "fixed-N SST M/N is defined for 8b/10b links only",
        ));
    }
    let pixel_clock_hz = link.stream_pixel_clock_hz();
    let efficiency = coding.data_efficiency(link.fec, link.dsc);
    let bpp = u128::from(link.bits_per_pixel.bits());
    let lanes = u128::from(link.lane_count);

    let available = u128::from(link.link_rate_mbps)
        * lanes
        * u128::from(efficiency)
        * 100
        * u128::from(Bppx16::DIVISOR);
    if available < u128::from(pixel_clock_hz) * bpp {
        return Err(link.insufficient(pixel_clock_hz, efficiency));
    }

    let pixel_clock_100hz = u128::from(pixel_clock_hz / 100);
    let link_symbol_clock_mhz =
        u128::from(coding.link_symbol_clock_100hz(link.link_rate_mbps) / 10_000);
    let data_clock_mhz = if link.fec {
        link_symbol_clock_mhz * u128::from(FEC_OVERHEAD_PER_MHZ) / 1_000_000
    } else {
        link_symbol_clock_mhz
    };
    if data_clock_mhz == 0 {
        return Err(LinkError::InvalidLinkConfig("link symbol clock below 1 MHz"));
    }

    // 10^8 intermediate precision.
    let link_m =
        pixel_clock_100hz * u128::from(SST_LINK_N) * 10_000 / link_symbol_clock_mhz / 100_000_000;

    let mut data_m = pixel_clock_100hz * bpp / u128::from(Bppx16::DIVISOR)
        * (u128::from(SST_DATA_N) / (8 * lanes))
        * 10_000
        / data_clock_mhz;
    if let Some(links) = link.mso_links {
        data_m *= u128::from(links);
    }
    data_m /= 100_000_000;

    let to_register = |v: u128| {
        u64::try_from(v)
            .map_err(|_| LinkError::InvalidLinkConfig("M/N value exceeds 24 bits"))
            .and_then(register)
    };
    let mn_tu = MnTu {
        link_m: to_register(link_m)?,
        link_n: SST_LINK_N,
        data_m: to_register(data_m)?,
        data_n: SST_DATA_N,
        data_tu: TU_SIZE,
        v_freq_hz: 0,
    };
    tracing::debug!(?mn_tu, "SST M/N computed");
    Ok(LinkBandwidth { mn_tu, mst: None })
}

/// MST Link/Data M/N by GCD reduction, VC payload timeslots and PBN.
pub fn mst_compute_mn_tu_pbn(link: &DpLinkData) -> Result<LinkBandwidth> {
    if link.mso_links.is_some() {
        return Err(LinkError::InvalidLinkConfig("MSO is an SST feature"));
    }
    let stream = Stream::new(link, true)?;
    stream.finish(stream.required(), stream.available(), true)
}

/// Like [`mst_compute_mn_tu_pbn`], with DSC end-of-chunk and bit-stuffing overhead folded
/// into an effective bpp, and the active width reduced by the link symbols the blanking
/// overhead borrows. Also serves SST.
pub fn compute_mn_tu_pbn_considering_eoc(link: &DpLinkData) -> Result<LinkBandwidth> {
    let stream = Stream::new(link, false)?;
    let coding = stream.coding;
    let slices = u64::from(link.dsc_slices_per_scanline);
    let needs_pbn = link.mst || link.single_stream_sideband;

    let (required, available) = if link.dsc && slices != 0 && link.h_active != 0 {
        let bpp = u64::from(link.bits_per_pixel.bits());
        let slice_width = div_round_up(u64::from(link.h_active), slices);
        let chunk_bytes = div_round_up(slice_width * bpp, 8 * u64::from(Bppx16::DIVISOR));
        let bytes_per_clock = match coding {
            ChannelCoding::Coding128b132b => 16,
            ChannelCoding::Ansi8b10b if link.mst => 4,
            ChannelCoding::Ansi8b10b => u64::from(link.lane_count),
        };
        let padding_bytes =
            div_round_up(chunk_bytes, bytes_per_clock) * bytes_per_clock - chunk_bytes;
        // One four-symbol EOC per slice plus one per line, and the chunk padding.
        let eoc_bits = (slices + 1) * coding.symbol_bits() * 4 + slices * padding_bytes * 8;

        let pixel_clock_khz = stream.pixel_clock_hz / 1000;
        let link_symbol_clock_khz = stream.link_symbol_clock_100hz() / 10;
        let required = pixel_clock_khz * (chunk_bytes * 8 * slices + eoc_bits);

        let reduced_active = (u64::from(link.h_active) * link_symbol_clock_khz)
            .checked_sub(pixel_clock_khz * u64::from(link.h_blank_link_symbol_clocks))
            .ok_or_else(|| link.insufficient(stream.pixel_clock_hz, stream.efficiency))?;
        let efficiency = u64::from(stream.efficiency);
        let available = match coding {
            ChannelCoding::Coding128b132b => {
                reduced_active * u64::from(link.lane_count) * efficiency * 4 / 1250
            }
            // rate / symbol clock in kHz is 1/100; 1000 / lanes folds in the lane count.
            ChannelCoding::Ansi8b10b => {
                reduced_active * efficiency / (1000 / u64::from(link.lane_count))
            }
        };
        (required, available)
    } else {
        (stream.required(), stream.available())
    };

    stream.finish(required, available, needs_pbn)
}

/// Data M/N from link-layer symbol cycle counts per line, the tightest variant. DSC lines
/// count one chunk per slice plus an EOC symbol cycle.
pub fn compute_mn_tu_pbn_link_layer_symbol_count(link: &DpLinkData) -> Result<LinkBandwidth> {
    let stream = Stream::new(link, false)?;
    if link.h_total == 0 || link.h_total < link.h_active {
        return Err(LinkError::InvalidLinkConfig("horizontal total below active"));
    }
    let symbol_bits = stream.coding.symbol_bits();
    let bpp = u64::from(link.bits_per_pixel.bits());
    let symbol_cycles = |pixels: u64| {
        div_round_up(div_round_up(pixels, 4) * bpp, u64::from(Bppx16::DIVISOR) * symbol_bits)
    };

    let h_blank_cycles = symbol_cycles(u64::from(link.h_total - link.h_active));
    let slices = u64::from(link.dsc_slices_per_scanline);
    let h_active_cycles = if link.dsc && slices != 0 {
        let slice_width = div_round_up(u64::from(link.h_active), slices);
        let chunk_bytes = div_round_up(slice_width * bpp, 8 * u64::from(Bppx16::DIVISOR));
        slices * (div_round_up(chunk_bytes * 8, 4 * symbol_bits) + 1)
    } else {
        symbol_cycles(u64::from(link.h_active))
    };
    let h_total_cycles = h_active_cycles + h_blank_cycles;

    // Effective bpp = cycles * symbol bits * 4 / h_total, moved to the denominator.
    let required = stream.pixel_clock_hz * h_total_cycles * symbol_bits * 4;
    let available = u64::from(link.link_rate_mbps)
        * 100
        * u64::from(stream.efficiency)
        * u64::from(link.lane_count)
        * u64::from(link.h_total);

    stream.finish(required, available, link.mst || link.single_stream_sideband)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_m_is_scaled_above_1000() {
        assert_eq!(raise_small_m(13, 32), (1001, 2464));
        assert_eq!(raise_small_m(1000, 3), (1000, 3));
        assert_eq!(raise_small_m(0, 3), (0, 3));
        // Would overflow N.
        assert_eq!(raise_small_m(1, MAX_24BIT_REGISTER), (1, MAX_24BIT_REGISTER));
    }

    #[test]
    fn oversized_link_mn_is_rescaled() {
        // Coprime values above 24 bits.
        let (m, n) = reduced_link_mn(20_000_003, 40_000_001);
        assert_eq!(n, RESCALED_LINK_N);
        assert_eq!(m, 20_000_003 * RESCALED_LINK_N / 40_000_001);
    }

    #[test]
    fn oversized_data_mn_is_rescaled_rounding_up() {
        // Coprime values above 24 bits; the exact ratio is 40000.005 over 80000.
        let (m, n) = reduced_data_mn(20_000_003, 40_000_001);
        assert_eq!(n, RESCALED_DATA_N);
        assert_eq!(m, 40_001);
        assert_eq!(m, div_round_up(20_000_003 * RESCALED_DATA_N, 40_000_001));
        assert!(m <= MAX_24BIT_REGISTER && n <= MAX_24BIT_REGISTER);
    }

    #[test]
    fn vcpf_slot_added_on_exact_division() {
        assert_eq!(vc_time_slots(1001, 2464), 27);
        assert_eq!(vc_time_slots(1000, 2464), 26);
    }

    #[test]
    fn lane_boundary_alignment() {
        let c = ChannelCoding::Ansi8b10b;
        assert_eq!(align_to_lane_boundary(27, 1, c), 28);
        assert_eq!(align_to_lane_boundary(27, 2, c), 28);
        assert_eq!(align_to_lane_boundary(27, 4, c), 27);
        assert_eq!(align_to_lane_boundary(25, 1, c), 28);
        assert_eq!(align_to_lane_boundary(27, 1, ChannelCoding::Coding128b132b), 27);
    }

    #[test]
    fn invalid_configs_are_rejected_first() {
        let link = DpLinkData::new(5400, 3, 148_500_000, Bppx16::from_int(24));
        assert!(matches!(
            mst_compute_mn_tu_pbn(&link).unwrap_err(),
            LinkError::InvalidLinkConfig(_)
        ));
        let link = DpLinkData::new(5400, 4, 0, Bppx16::from_int(24));
        assert!(matches!(
            sst_compute_mn_tu(&link).unwrap_err(),
            LinkError::InvalidLinkConfig(_)
        ));
    }
}
