use frame_input::core::InputContext;
use frame_input::term::{encode_lines_into, MonitorStatus, MonitorView};
use frame_input::types::{DeviceInfo, DeviceKind, KeyCode, Motion};
use frame_input::{ConfigError, MonitorConfig};

#[test]
fn view_reflects_status_and_engine_flags() {
    let mut input = InputContext::new();
    input.set_text_input_enabled(true);
    input.record_key(KeyCode::F6, true);
    input.commit();

    let mut status = MonitorStatus::new();
    status.tick = 42;
    status.last_motion = Motion::new(-3, 4);
    status.wheel_total = -2;
    status.pointer = Some((7, 1));
    status.devices = vec![DeviceInfo::new("xterm keyboard", DeviceKind::Keyboard)];
    status.push_text(&['h' as u32, 'i' as u32]);
    status.log("key down f6 (1 held)");

    let lines = MonitorView::default().render(&input, &status);
    let has = |expected: &str| lines.iter().any(|l| l == expected);

    assert!(has("frame-input monitor  tick 42"));
    assert!(has("keys held   f6"));
    assert!(has("motion      last (-3, 4)  pointer (7, 1)"));
    assert!(has("wheel       -2 notch(es)"));
    assert!(has("text [on]  hi"));
    assert!(has("cursor      visible  clip off"));
    assert!(has("device      keyboard xterm keyboard (0000:0000)"));
    assert!(has("key down f6 (1 held)"));
}

#[test]
fn redraw_of_unchanged_view_is_empty() {
    let input = InputContext::new();
    let status = MonitorStatus::new();
    let view = MonitorView::default();

    let first = view.render(&input, &status);
    let second = view.render(&input, &status);
    let mut out = Vec::new();
    encode_lines_into(&first, &second, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("frame-input-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"tick_ms": 8, "mouse_capture": false, "engine": {"text_input": true}}"#,
    )
    .unwrap();

    let config = MonitorConfig::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.tick_ms, 8);
    assert!(!config.mouse_capture);
    assert!(config.engine.text_input);

    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(MonitorConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn unknown_config_shape_is_an_error() {
    let err = MonitorConfig::from_json_str(r#"{"tick_ms": "fast"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid config"));
}
