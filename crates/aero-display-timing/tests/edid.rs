use aero_display_timing::{
    build_edid_base_block, create_cvt_timing, CvtRequest, DetailedTimingDescriptor,
    EdidSinkKind, TimingError, TimingInfo, EDID_BLOCK_SIZE,
};

const DTD_1024X768: [u8; 18] = [
    0x64, 0x19, 0x00, 0x40, 0x41, 0x00, 0x26, 0x30, 0x18, 0x88, 0x36, 0x00, 0x54, 0x0E, 0x11,
    0x00, 0x00, 0x18,
];

fn checksum_ok(edid: &[u8; EDID_BLOCK_SIZE]) -> bool {
    edid.iter().fold(0u8, |acc, &b| acc.wrapping_add(b)) == 0
}

fn timing_1024x768() -> TimingInfo {
    DetailedTimingDescriptor::from_bytes(&DTD_1024X768)
        .unwrap()
        .to_timing()
        .unwrap()
}

#[test]
fn edid_has_valid_header_and_checksum() {
    let edid = build_edid_base_block(EdidSinkKind::DisplayPort, &[timing_1024x768()]).unwrap();
    assert_eq!(
        &edid[0..8],
        &[0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]
    );
    assert!(checksum_ok(&edid));
    assert_eq!(edid[126], 0, "no extension blocks");
}

#[test]
fn sink_kind_selects_revision_and_input() {
    let dp = build_edid_base_block(EdidSinkKind::DisplayPort, &[timing_1024x768()]).unwrap();
    let hdmi = build_edid_base_block(EdidSinkKind::Hdmi, &[timing_1024x768()]).unwrap();
    assert_eq!((dp[18], dp[19], dp[20]), (1, 4, 0xA5));
    assert_eq!((hdmi[18], hdmi[19], hdmi[20]), (1, 3, 0x80));
    assert!(checksum_ok(&hdmi));
}

#[test]
fn edid_includes_preferred_dtd() {
    let edid = build_edid_base_block(EdidSinkKind::DisplayPort, &[timing_1024x768()]).unwrap();
    let dtd = DetailedTimingDescriptor::from_bytes(&edid[54..72]).unwrap();
    let expected = DetailedTimingDescriptor::from_bytes(&DTD_1024X768).unwrap();
    assert_eq!(dtd.pixel_clock_10khz, expected.pixel_clock_10khz);
    assert_eq!(dtd.h_active, 1024);
    assert_eq!(dtd.v_active, 768);
    assert_eq!(dtd.h_blank, expected.h_blank);
    assert_eq!(dtd.v_blank, expected.v_blank);
}

#[test]
fn range_limits_cover_every_dtd() {
    let cvt = create_cvt_timing(&CvtRequest::new(1920, 1080, 60).reduced_blanking()).unwrap();
    let edid =
        build_edid_base_block(EdidSinkKind::DisplayPort, &[cvt, timing_1024x768()]).unwrap();

    let range = &edid[90..108];
    assert_eq!(&range[0..5], &[0, 0, 0, 0xFD, 0]);
    // 1024x768@60 and 1920x1080@60 RB, 48.4 kHz and 66.6 kHz, 138.5 MHz.
    assert_eq!(range[5], 60);
    assert_eq!(range[6], 60);
    assert_eq!(range[7], 48);
    assert_eq!(range[8], 67);
    assert_eq!(range[9], 14);

    // Remaining slot is a dummy descriptor.
    assert_eq!(&edid[108..113], &[0, 0, 0, 0x10, 0]);
    assert!(checksum_ok(&edid));
}

#[test]
fn rejects_empty_and_oversized_timing_lists() {
    assert!(matches!(
        build_edid_base_block(EdidSinkKind::Hdmi, &[]).unwrap_err(),
        TimingError::InvalidTiming(_)
    ));
    let t = timing_1024x768();
    assert_eq!(
        build_edid_base_block(EdidSinkKind::Hdmi, &[t, t, t, t]).unwrap_err(),
        TimingError::TooManyTimings { count: 4, max: 3 }
    );
}

#[test]
fn rejects_timing_that_does_not_fit_a_descriptor() {
    let mut t = timing_1024x768();
    t.dot_clock_hz = 700_000_000;
    assert!(matches!(
        build_edid_base_block(EdidSinkKind::DisplayPort, &[t]).unwrap_err(),
        TimingError::InvalidTiming(_)
    ));
}
