use aero_display_timing::{
    create_cvt2_timing, create_cvt_timing, create_gtf_timing, Cvt2Request, CvtRequest,
    GtfRequest, ModeSource, RbVersion, TimingError,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn zero_inputs_never_produce_a_timing() {
    for (x, y, rr) in [(0, 1080, 60), (1920, 0, 60), (1920, 1080, 0)] {
        let expected = TimingError::InvalidRequest {
            x_res: x,
            y_res: y,
            refresh_rate: rr,
        };
        assert_eq!(create_gtf_timing(&GtfRequest::new(x, y, rr)), Err(expected.clone()));
        assert_eq!(create_cvt_timing(&CvtRequest::new(x, y, rr)), Err(expected.clone()));
        assert_eq!(
            create_cvt_timing(&CvtRequest::new(x, y, rr).reduced_blanking()),
            Err(expected.clone())
        );
        for version in [RbVersion::V2, RbVersion::V3] {
            assert_eq!(
                create_cvt2_timing(&Cvt2Request::new(x, y, rr, version)),
                Err(expected.clone())
            );
        }
    }
}

#[test]
fn generators_tag_their_mode_source() {
    let gtf = create_gtf_timing(&GtfRequest::new(1280, 1024, 60)).unwrap();
    let cvt = create_cvt_timing(&CvtRequest::new(1280, 1024, 60)).unwrap();
    let rb = create_cvt_timing(&CvtRequest::new(1280, 1024, 60).reduced_blanking()).unwrap();
    let rb2 = create_cvt2_timing(&Cvt2Request::new(1280, 1024, 60, RbVersion::V2)).unwrap();
    assert_eq!(gtf.mode_source, ModeSource::Gtf);
    assert_eq!(cvt.mode_source, ModeSource::Cvt);
    assert_eq!(rb.mode_source, ModeSource::CvtReducedBlanking);
    assert_eq!(rb2.mode_source, ModeSource::Cvt2);
}

#[test]
fn cvt_1024x768_60_matches_published_mode() {
    // CVT 0.79M3: 1328x798 total, 63.5 MHz.
    let t = create_cvt_timing(&CvtRequest::new(1024, 768, 60)).unwrap();
    assert_eq!(t.h_total, 1328);
    assert_eq!(t.v_total, 798);
    assert_eq!(t.dot_clock_hz, 63_500_000);
    assert_eq!(t.v_sync_width(), 4);
}

#[test]
fn cvt_interlaced_doubles_field_rate() {
    let t = create_cvt_timing(&CvtRequest::new(1920, 1080, 30).interlaced(true)).unwrap();
    assert!(t.interlaced);
    assert_eq!(t.v_active, 1080);
    assert_eq!(t.h_active, 1920);
    assert_eq!(t.v_rounded_rr, 30);
}

fn request_strategy() -> impl Strategy<Value = (u32, u32, u32)> {
    (320u32..=3840, 200u32..=2160, 24u32..=120)
}

proptest! {
    #[test]
    fn generators_are_deterministic((x, y, rr) in request_strategy()) {
        prop_assert_eq!(
            create_gtf_timing(&GtfRequest::new(x, y, rr)),
            create_gtf_timing(&GtfRequest::new(x, y, rr))
        );
        prop_assert_eq!(
            create_cvt_timing(&CvtRequest::new(x, y, rr)),
            create_cvt_timing(&CvtRequest::new(x, y, rr))
        );
        prop_assert_eq!(
            create_cvt2_timing(&Cvt2Request::new(x, y, rr, RbVersion::V3)),
            create_cvt2_timing(&Cvt2Request::new(x, y, rr, RbVersion::V3))
        );
    }

    #[test]
    fn reduced_blanking_timings_are_well_formed((x, y, rr) in request_strategy()) {
        let rb = create_cvt_timing(&CvtRequest::new(x, y, rr).reduced_blanking()).unwrap();
        prop_assert!(rb.is_well_formed());
        prop_assert_eq!(rb.h_total - rb.h_active, 160);

        for version in [RbVersion::V2, RbVersion::V3] {
            let t = create_cvt2_timing(&Cvt2Request::new(x, y, rr, version)).unwrap();
            prop_assert!(t.is_well_formed());
            prop_assert!(t.h_total - t.h_active >= 80);
            prop_assert!(t.v_total - t.v_active >= 15);
            prop_assert!(t.dot_clock_hz > 0);
            prop_assert_eq!(t.dot_clock_hz % 1000, 0);
        }
    }
}
