mod common;

mod tests {
    use crate::common::{FakeSource, RecordingOutput, dark_strip, rgb};
    use myrtio_cabinet_bridge::{
        BridgeConfig, CabinetDevice, DEFAULT_PAD_COLOR, LightsBridge, OutputDevice, Rgb,
    };

    fn bridge(source: FakeSource) -> LightsBridge<FakeSource, RecordingOutput> {
        LightsBridge::new(source, RecordingOutput::default(), &BridgeConfig::default())
    }

    /// Source with every device the bridge reads
    fn full_source() -> FakeSource {
        let arrow: Vec<Rgb> = (0..25).map(|i| rgb(i, 100, 200)).collect();
        let monitor: Vec<Rgb> = (0..25).map(|i| rgb(0, i * 10, 0)).collect();
        let mut top_panel = dark_strip(40);
        top_panel[17] = rgb(1, 2, 3);

        let mut source = FakeSource::default()
            .with_light("GOLD P1 Woofer Corner", 0.5)
            .with_light("GOLD P2 Woofer Corner", 1.0)
            .with_strip("top_panel", top_panel)
            .with_strip("monitor_left", monitor.clone())
            .with_strip("monitor_right", monitor);
        for pad in 1..=2 {
            for arrow_name in ["up", "left", "down", "right"] {
                source = source.with_strip(&format!("p{pad}_foot_{arrow_name}"), arrow.clone());
            }
            for corner in ["Up-Left", "Up-Right", "Down-Left", "Down-Right"] {
                source = source.with_light(&format!("GOLD P{pad} Stage Corner {corner}"), 0.25);
            }
        }
        source
    }

    #[test]
    fn test_empty_source_sends_nothing() {
        let mut bridge = bridge(FakeSource::default());
        let report = bridge.run_cycle();

        assert!(report.sent().is_empty());
        assert_eq!(bridge.output().total_sends(), 0);
    }

    #[test]
    fn test_full_cycle_dispatch_order() {
        let mut bridge = bridge(full_source());
        let report = bridge.run_cycle();

        assert_eq!(report.sent(), OutputDevice::ALL);
        let output = bridge.output();
        assert_eq!(output.stage.len(), 1);
        assert_eq!(output.stage[0].len(), 1350);

        let devices: Vec<CabinetDevice> = output.cabinet.iter().map(|(device, _)| *device).collect();
        assert_eq!(
            devices,
            [
                CabinetDevice::Marquee,
                CabinetDevice::LeftStrip,
                CabinetDevice::RightStrip,
                CabinetDevice::LeftSpotlights,
                CabinetDevice::RightSpotlights,
            ]
        );
        for (device, data) in &output.cabinet {
            assert_eq!(data.len(), device.led_count() * 3);
        }
    }

    #[test]
    fn test_cycles_are_idempotent() {
        let mut bridge = bridge(full_source());
        let first = bridge.run_cycle();
        let second = bridge.run_cycle();

        assert_eq!(first, second);
        let output = bridge.output();
        assert_eq!(output.stage.len(), 2);
        assert_eq!(output.stage[0], output.stage[1]);
        assert_eq!(output.cabinet.len(), 10);
        assert_eq!(output.cabinet[..5], output.cabinet[5..]);
    }

    #[test]
    fn test_woofer_only() {
        let source = FakeSource::default().with_light("GOLD P1 Woofer Corner", 1.0);
        let mut bridge = bridge(source);
        let report = bridge.run_cycle();

        assert_eq!(report.sent(), [OutputDevice::LeftSpotlights]);
        let output = bridge.output();
        assert!(output.stage.is_empty());
        assert_eq!(
            output.cabinet_sends(CabinetDevice::LeftSpotlights),
            [&[255; 24][..]]
        );
        assert!(output.cabinet_sends(CabinetDevice::RightSpotlights).is_empty());
    }

    #[test]
    fn test_unrelated_lights_do_not_crowd_out() {
        let mut source = FakeSource::default();
        for i in 0..100 {
            source = source
                .with_light(&format!("HD P1 Light {i}"), 1.0)
                .with_strip(&format!("cabinet_strip_{i}"), vec![rgb(9, 9, 9); 25]);
        }
        let source = source
            .with_light("GOLD P1 Woofer Corner", 1.0)
            .with_strip("monitor_right", vec![rgb(4, 5, 6); 25]);
        let mut bridge = bridge(source);
        let report = bridge.run_cycle();

        assert_eq!(
            report.sent(),
            [OutputDevice::RightStrip, OutputDevice::LeftSpotlights]
        );
        assert_eq!(bridge.lights().lights().len(), 1);
        assert_eq!(bridge.lights().pixel_strips().len(), 1);
        assert_eq!(
            bridge.output().cabinet_sends(CabinetDevice::LeftSpotlights),
            [&[255; 24][..]]
        );
    }

    #[test]
    fn test_top_panel_only() {
        let mut top_panel = dark_strip(40);
        top_panel[5] = rgb(10, 20, 30);
        let mut bridge = bridge(FakeSource::default().with_strip("top_panel", top_panel));
        let report = bridge.run_cycle();

        assert_eq!(report.sent(), [OutputDevice::Marquee]);
        let sends = bridge.output().cabinet_sends(CabinetDevice::Marquee);
        assert_eq!(sends.len(), 1);

        let mut expected = [0u8; 36];
        expected[3..6].copy_from_slice(&[10, 20, 30]);
        assert_eq!(sends[0], expected);
    }

    #[test]
    fn test_single_corner_lights_whole_stage() {
        let source = FakeSource::default().with_light("GOLD P2 Stage Corner Up-Left", 1.0);
        let mut bridge = bridge(source);
        bridge.run_cycle();

        let output = bridge.output();
        assert_eq!(output.stage.len(), 1);
        let stage = &output.stage[0];
        assert_eq!(stage.len(), 1350);

        let pad_color = [DEFAULT_PAD_COLOR.r, DEFAULT_PAD_COLOR.g, DEFAULT_PAD_COLOR.b];
        // Second pad, up-left panel, first LED
        let start = 9 * 25 * 3;
        assert_eq!(stage[start..start + 3], [255, 255, 255]);
        // First pad, center panel
        let center = 4 * 25 * 3;
        assert!(stage[center..center + 75].chunks_exact(3).all(|led| led == pad_color));
        // First pad, up arrow not reported
        let up = 25 * 3;
        assert!(stage[up..up + 75].iter().all(|&byte| byte == 0));
    }

    #[test]
    fn test_stale_lights_do_not_leak() {
        let source = FakeSource::default()
            .with_light("GOLD P1 Woofer Corner", 1.0)
            .with_strip("monitor_left", vec![rgb(1, 1, 1); 25]);
        let mut bridge = bridge(source);
        bridge.run_cycle();

        bridge.source_mut().lights.clear();
        let report = bridge.run_cycle();

        assert_eq!(report.sent(), [OutputDevice::LeftStrip]);
        assert_eq!(bridge.lights().light("GOLD P1 Woofer Corner"), None);
        assert_eq!(
            bridge.output().cabinet_sends(CabinetDevice::LeftSpotlights).len(),
            1
        );
    }

    #[test]
    fn test_empty_strip_is_skipped() {
        let source = FakeSource::default()
            .with_strip("top_panel", Vec::new())
            .with_strip("monitor_right", Vec::new());
        let mut bridge = bridge(source);

        assert!(bridge.run_cycle().sent().is_empty());
    }

    #[test]
    fn test_output_access() {
        let mut bridge = bridge(full_source());
        assert_eq!(bridge.config().pad_color, DEFAULT_PAD_COLOR);

        bridge.run_cycle();
        assert_eq!(bridge.output().total_sends(), 6);

        bridge.output_mut().stage.clear();
        bridge.output_mut().cabinet.clear();
        bridge.run_cycle();
        assert_eq!(bridge.output().total_sends(), 6);
    }

    #[test]
    fn test_output_disabled() {
        let config = BridgeConfig {
            output_lights: false,
            ..BridgeConfig::default()
        };
        let mut bridge = LightsBridge::new(full_source(), RecordingOutput::default(), &config);
        let report = bridge.run_cycle();

        assert!(report.sent().is_empty());
        assert_eq!(bridge.output().total_sends(), 0);
        // Lights are still read
        assert_eq!(bridge.source().reads, 1);
        assert_eq!(bridge.lights().light("GOLD P2 Woofer Corner"), Some(1.0));
    }

    #[test]
    fn test_read_lights_disabled() {
        let config = BridgeConfig {
            read_lights: false,
            ..BridgeConfig::default()
        };
        let mut bridge = LightsBridge::new(full_source(), RecordingOutput::default(), &config);
        let report = bridge.run_cycle();

        assert_eq!(bridge.source().reads, 0);
        assert!(!report.contains(OutputDevice::LeftSpotlights));
        assert!(!report.contains(OutputDevice::RightSpotlights));
        // Arrow strips alone still drive the stage
        assert!(report.contains(OutputDevice::Stage));
        assert!(report.contains(OutputDevice::Marquee));
    }

    #[test]
    fn test_read_pixel_strips_disabled() {
        let config = BridgeConfig {
            read_pixel_strips: false,
            ..BridgeConfig::default()
        };
        let mut bridge = LightsBridge::new(full_source(), RecordingOutput::default(), &config);
        let report = bridge.run_cycle();

        assert_eq!(
            report.sent(),
            [
                OutputDevice::Stage,
                OutputDevice::LeftSpotlights,
                OutputDevice::RightSpotlights,
            ]
        );
    }

    #[test]
    fn test_custom_pad_color() {
        let config = BridgeConfig {
            pad_color: rgb(1, 2, 3),
            ..BridgeConfig::default()
        };
        let source = FakeSource::default().with_light("GOLD P1 Stage Corner Up-Left", 0.0);
        let mut bridge = LightsBridge::new(source, RecordingOutput::default(), &config);
        bridge.run_cycle();

        let center = 4 * 25 * 3;
        assert_eq!(bridge.output().stage[0][center..center + 3], [1, 2, 3]);
    }
}
