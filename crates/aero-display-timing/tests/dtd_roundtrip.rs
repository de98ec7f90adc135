use aero_display_timing::{
    can_timing_fit_in_edid, DetailedTimingDescriptor, SyncPolarity, TimingInfo,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
struct Axis {
    active: u32,
    blank: u32,
    front_porch: u32,
    sync: u32,
}

fn axis_strategy(
    max_active: u32,
    max_blank: u32,
    max_porch: u32,
    max_sync: u32,
) -> impl Strategy<Value = Axis> {
    (1u32..=max_active, 2u32..=max_blank).prop_flat_map(move |(active, blank)| {
        let porch_hi = max_porch.min(blank - 1);
        (Just(active), Just(blank), 0u32..=porch_hi).prop_flat_map(move |(active, blank, fp)| {
            let sync_hi = max_sync.min(blank - fp);
            (1u32..=sync_hi).prop_map(move |sync| Axis {
                active,
                blank,
                front_porch: fp,
                sync,
            })
        })
    })
}

fn timing_strategy() -> impl Strategy<Value = TimingInfo> {
    (
        axis_strategy(4095, 4095, 1023, 1023),
        axis_strategy(4095, 4095, 63, 63),
        10_000u64..=655_350_000,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(h, v, dot_clock_hz, h_pos, v_pos)| {
            let h_total = h.active + h.blank;
            let v_total = v.active + v.blank;
            TimingInfo {
                dot_clock_hz,
                h_total,
                h_active: h.active,
                h_blank_start: h.active,
                h_blank_end: h_total - 1,
                h_sync_start: h.active + h.front_porch,
                h_sync_end: h.active + h.front_porch + h.sync - 1,
                v_total,
                v_active: v.active,
                v_blank_start: v.active,
                v_blank_end: v_total - 1,
                v_sync_start: v.active + v.front_porch,
                v_sync_end: v.active + v.front_porch + v.sync - 1,
                h_sync_polarity: SyncPolarity::from_positive_bit(h_pos),
                v_sync_polarity: SyncPolarity::from_positive_bit(v_pos),
                ..TimingInfo::default()
            }
        })
}

proptest! {
    #[test]
    fn dtd_round_trip_preserves_geometry(timing in timing_strategy()) {
        prop_assert!(timing.is_well_formed());
        prop_assert!(can_timing_fit_in_edid(&timing));

        let dtd = DetailedTimingDescriptor::from_timing(&timing).unwrap();
        let bytes = dtd.to_bytes();
        let back = DetailedTimingDescriptor::from_bytes(&bytes).unwrap().to_timing().unwrap();

        prop_assert_eq!(back.h_active, timing.h_active);
        prop_assert_eq!(back.v_active, timing.v_active);
        prop_assert_eq!(back.h_total, timing.h_total);
        prop_assert_eq!(back.v_total, timing.v_total);
        prop_assert_eq!(back.h_sync_start, timing.h_sync_start);
        prop_assert_eq!(back.h_sync_end, timing.h_sync_end);
        prop_assert_eq!(back.v_sync_start, timing.v_sync_start);
        prop_assert_eq!(back.v_sync_end, timing.v_sync_end);
        prop_assert_eq!(back.h_sync_polarity, timing.h_sync_polarity);
        prop_assert_eq!(back.v_sync_polarity, timing.v_sync_polarity);
        prop_assert!(back.dot_clock_hz <= timing.dot_clock_hz);
        prop_assert!(timing.dot_clock_hz - back.dot_clock_hz < 10_000);
        prop_assert!(back.is_well_formed());
    }

    #[test]
    fn descriptor_bytes_round_trip(bytes in proptest::array::uniform18(any::<u8>())) {
        let dtd = DetailedTimingDescriptor::from_bytes(&bytes).unwrap();
        prop_assert_eq!(dtd.to_bytes(), bytes);
    }
}

#[test]
fn interlaced_1080i_round_trips() {
    // CEA-861 1920x1080i@60.
    let bytes = [
        0x01, 0x1D, 0x80, 0x18, 0x71, 0x1C, 0x16, 0x20, 0x58, 0x2C, 0x25, 0x00, 0xC4, 0x8E,
        0x21, 0x00, 0x00, 0x9E,
    ];
    let dtd = DetailedTimingDescriptor::from_bytes(&bytes).unwrap();
    let timing = dtd.to_timing().unwrap();
    assert!(timing.interlaced);
    assert_eq!(timing.v_active, 1080);
    assert_eq!(timing.v_total, 1125);
    assert_eq!(timing.h_total, 2200);
    assert_eq!(timing.v_rounded_rr, 60);

    let back = DetailedTimingDescriptor::from_timing(&timing).unwrap();
    assert_eq!(back.v_active, dtd.v_active);
    assert_eq!(back.v_blank, dtd.v_blank);
    assert_eq!(back.h_blank, dtd.h_blank);
    assert_eq!(back.pixel_clock_10khz, dtd.pixel_clock_10khz);
}
