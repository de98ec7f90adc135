use aero_display_math::Bppx16;
use aero_dsc::{
    create_dsc_cfg, generate_rc_range_params, rc_parameters_from_cfg, ChromaFormat, DscError,
    DscFormatSupport, DscOptions, DscRequest, RxDscCaps,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn dp_sink(slices_per_line: u32, max_bpp: u16) -> RxDscCaps {
    RxDscCaps {
        version_major: 1,
        version_minor: 2,
        line_buffer_depth: 9,
        block_prediction: true,
        slices_per_line,
        slice_height: 0,
        max_bits_per_pixel: Bppx16::from_bits(max_bpp),
        formats: DscFormatSupport::RGB | DscFormatSupport::YCBCR_444,
        convert_rgb: true,
        mipi_dsi: false,
    }
}

fn picture(pic_width: u32, pic_height: u32) -> DscRequest {
    DscRequest {
        pic_width,
        pic_height,
        bits_per_component: 8,
    }
}

#[test]
fn full_hd_two_slices_uses_generated_rc() {
    let cfg = create_dsc_cfg(&dp_sink(2, 0x80), &picture(1920, 1080), &DscOptions::default())
        .unwrap();

    assert_eq!(cfg.format, ChromaFormat::Rgb);
    assert_eq!(cfg.slice_width, 960);
    // 96 does not divide 1080; 108 is the first even height that does.
    assert_eq!(cfg.slice_height, 108);
    assert_eq!(cfg.bits_per_pixel, Bppx16::from_int(8));

    assert_eq!((cfg.flatness_min_qp, cfg.flatness_max_qp), (3, 12));
    assert_eq!((cfg.rc_quant_incr_limit0, cfg.rc_quant_incr_limit1), (11, 11));
    assert_eq!(cfg.flatness_det_thresh, 2);
    assert_eq!(cfg.initial_offset, 6144);
    assert_eq!(cfg.initial_xmit_delay, 512);
    assert_eq!(cfg.first_line_bpg_offset, 15);
    assert_eq!(cfg.second_line_bpg_offset, 0);
    assert_eq!(cfg.chunk_size, 960);
    assert_eq!(cfg.mux_word_size, 48);

    assert_eq!(cfg.initial_scale_value.bits(), 32);
    assert_eq!(cfg.scale_decrement_interval, 13);
    assert_eq!(cfg.final_offset, 4336);
    assert_eq!(cfg.final_scale_value.bits(), 16);
    assert_eq!(cfg.nfl_bpg_offset.bits(), 288);
    assert_eq!(cfg.nsl_bpg_offset.bits(), 0);
    assert_eq!(cfg.slice_bpg_offset.bits(), 136);
    assert_eq!(cfg.scale_increment_interval, 2991);
    assert_eq!(cfg.rcb_bits, 10944);
    assert_eq!(cfg.initial_dec_delay, 856);

    let max_qp: Vec<u8> = cfg.rc_range_params.iter().map(|r| r.max_qp).collect();
    assert_eq!(max_qp, [4, 4, 5, 6, 7, 7, 7, 8, 9, 10, 10, 11, 11, 12, 13]);
    assert_eq!(
        cfg.rc_buf_thresh,
        [14, 28, 42, 56, 70, 84, 98, 105, 112, 119, 121, 123, 125, 126]
    );
}

#[test]
fn small_slices_use_canned_rc_and_snap_bpp() {
    let caps = RxDscCaps {
        slice_height: 8,
        ..dp_sink(4, 0x90)
    };
    let cfg = create_dsc_cfg(&caps, &picture(640, 480), &DscOptions::default()).unwrap();

    assert_eq!(cfg.slice_width, 160);
    assert_eq!(cfg.slice_height, 8);
    assert_eq!(cfg.bits_per_pixel, Bppx16::from_bits(0x80));

    let entry = rc_parameters_from_cfg(Bppx16::from_int(8), 8).unwrap();
    assert_eq!(cfg.rc_range_params, entry.ranges);
    assert_eq!(cfg.initial_xmit_delay, entry.initial_xmit_delay);
    assert_eq!(cfg.initial_offset, entry.initial_offset);
    // DSC 1.2 derives the first line offset from the slice height.
    assert_eq!(cfg.first_line_bpg_offset, 12);
}

#[test]
fn mipi_dsi_sinks_always_use_canned_rc() {
    let caps = RxDscCaps {
        mipi_dsi: true,
        ..dp_sink(2, 0xA8)
    };
    let cfg = create_dsc_cfg(&caps, &picture(1920, 1080), &DscOptions::default()).unwrap();
    assert_eq!(cfg.bits_per_pixel, Bppx16::from_int(10));
    let entry = rc_parameters_from_cfg(Bppx16::from_int(10), 8).unwrap();
    assert_eq!(cfg.rc_range_params, entry.ranges);
}

#[test]
fn failing_rc_derivation_halves_slice_height() {
    let caps = RxDscCaps {
        slice_height: 4096,
        ..dp_sink(1, 0x80)
    };
    let cfg = create_dsc_cfg(&caps, &picture(4096, 4096), &DscOptions::default()).unwrap();
    // The scale increment interval overflows 16 bits at 4096 and 2048 lines.
    assert_eq!(cfg.slice_height, 1024);
    assert!(cfg.scale_increment_interval <= u32::from(u16::MAX));
}

#[test]
fn slice_height_retries_keep_the_generated_rc_source() {
    let caps = RxDscCaps {
        slice_height: 4096,
        ..dp_sink(1, 0x80)
    };
    let cfg = create_dsc_cfg(&caps, &picture(4096, 4096), &DscOptions::default()).unwrap();
    assert_eq!(cfg.slice_height, 1024);
    let generated = generate_rc_range_params(Bppx16::from_int(8), 8, ChromaFormat::Rgb, 2).unwrap();
    assert_eq!(cfg.rc_range_params, generated);
    let canned = rc_parameters_from_cfg(Bppx16::from_int(8), 8).unwrap();
    assert_ne!(cfg.rc_range_params, canned.ranges);
}

#[test]
fn mipi_sink_below_8_bpp_has_no_canned_rate() {
    let caps = RxDscCaps {
        mipi_dsi: true,
        ..dp_sink(2, 0x60)
    };
    assert_eq!(
        create_dsc_cfg(&caps, &picture(1920, 1080), &DscOptions::default()),
        Err(DscError::BppBelowCannedRates {
            bpp: Bppx16::from_int(6)
        })
    );
}

#[test]
fn native_formats_require_dsc_1_2() {
    let caps = RxDscCaps {
        version_minor: 1,
        formats: DscFormatSupport::NATIVE_420,
        convert_rgb: false,
        ..dp_sink(2, 0x80)
    };
    assert!(matches!(
        create_dsc_cfg(&caps, &picture(1920, 1080), &DscOptions::default()).unwrap_err(),
        DscError::InvalidInput(_)
    ));
}

#[test]
fn native_420_doubles_bpp_and_sets_second_line_offset() {
    let caps = RxDscCaps {
        formats: DscFormatSupport::NATIVE_420,
        convert_rgb: false,
        ..dp_sink(2, 0x80)
    };
    let cfg = create_dsc_cfg(&caps, &picture(1920, 1080), &DscOptions::default()).unwrap();
    assert_eq!(cfg.format, ChromaFormat::Native420);
    assert_eq!(cfg.bits_per_pixel, Bppx16::from_int(16));
    assert_eq!(cfg.second_line_bpg_offset, 12);
    assert_eq!(cfg.second_line_offset_adj, 512);
    assert_eq!(cfg.initial_offset, 2048);
}

#[test]
fn unsupported_inputs_are_rejected() {
    let caps = dp_sink(2, 0x80);
    let request = DscRequest {
        bits_per_component: 14,
        ..picture(1920, 1080)
    };
    assert_eq!(
        create_dsc_cfg(&caps, &request, &DscOptions::default()),
        Err(DscError::UnsupportedBpc { bpc: 14 })
    );
    assert_eq!(
        create_dsc_cfg(&caps, &picture(1920, 90), &DscOptions::default()),
        Err(DscError::NoValidSliceHeight { pic_height: 90 })
    );
    assert!(matches!(
        create_dsc_cfg(&caps, &picture(0, 1080), &DscOptions::default()).unwrap_err(),
        DscError::InvalidInput(_)
    ));
}

proptest! {
    #[test]
    fn generated_configs_respect_model_limits(
        slices in prop::sample::select(vec![1u32, 2, 4]),
        bpp in prop::sample::select(vec![0x80u16, 0x90, 0xA0, 0xC0]),
    ) {
        let caps = dp_sink(slices, bpp);
        let cfg = create_dsc_cfg(&caps, &picture(3840, 2160), &DscOptions::default()).unwrap();
        prop_assert!(cfg.initial_offset < cfg.rc_model_size);
        prop_assert!(cfg.final_offset < cfg.rc_model_size);
        prop_assert!(cfg.final_scale_value.bits() <= 63);
        prop_assert_eq!(2160 % cfg.slice_height, 0);
    }
}
