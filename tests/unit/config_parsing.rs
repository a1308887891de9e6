//! Unit tests for TOML configuration parsing.

use focuser_motion::config::{load_config, FocuserConfig, Microstepping};
use focuser_motion::error::{ConfigError, Error};
use focuser_motion::motion::ProfileKind;

/// Test parsing a complete motor configuration from TOML.
#[test]
fn test_parse_motor_config() {
    let toml_str = r#"
[motors.main]
name = "Main focuser"
min_speed = 25
max_speed = 500
invert_direction = true
sleep_when_idle = false
sleep_timeout_secs = 30
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("main").expect("Motor not found");

    assert_eq!(motor.name.as_str(), "Main focuser");
    assert_eq!(motor.min_speed, 25);
    assert_eq!(motor.max_speed, 500);
    assert!(motor.invert_direction);
    assert!(!motor.sleep_when_idle);
    assert_eq!(motor.sleep_timeout_secs, 30);
    assert_eq!(motor.sleep_timeout_ticks(config.timer_freq_hz), None);
}

/// Test that optional fields fall back to their defaults.
#[test]
fn test_parse_defaults() {
    let toml_str = r#"
[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("main").expect("Motor not found");

    assert!(!motor.invert_direction);
    assert!(motor.sleep_when_idle);
    assert_eq!(motor.sleep_timeout_ticks(config.timer_freq_hz), Some(150_000));
    assert_eq!(config.timer_freq_hz, 10_000);
    assert_eq!(config.accel.profile, None);
    assert_eq!(motor.microstepping, 1);
}

/// Test parsing the driver step-size mode.
#[test]
fn test_parse_microstepping() {
    let toml_str = r#"
[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
microstepping = 4
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let motor = config.motor("main").expect("Motor not found");
    assert_eq!(motor.microstepping, 4);
    assert_eq!(motor.microstepping_mode(), Ok(Microstepping::Quarter));
}

/// Test parsing two motors keeps declaration order.
#[test]
fn test_parse_two_motors() {
    let toml_str = r#"
[motors.main]
name = "Main"
min_speed = 25
max_speed = 500

[motors.aux]
name = "Aux"
min_speed = 10
max_speed = 100
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let names: Vec<&str> = config.motor_names().collect();
    assert_eq!(names, ["main", "aux"]);
    assert!(config.motor("missing").is_none());
}

/// Test that a third motor does not fit.
#[test]
fn test_too_many_motors_rejected() {
    let toml_str = r#"
[motors.a]
name = "A"
min_speed = 25
max_speed = 500

[motors.b]
name = "B"
min_speed = 25
max_speed = 500

[motors.c]
name = "C"
min_speed = 25
max_speed = 500
"#;

    let result: Result<FocuserConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err(), "Should reject more than two motors");
}

/// Test every acceleration profile name.
#[test]
fn test_parse_profile_names() {
    for (name, kind) in [
        ("none", ProfileKind::None),
        ("linear", ProfileKind::Linear),
        ("trapezoid", ProfileKind::Trapezoid),
        ("smoothstep", ProfileKind::SmoothStep),
    ] {
        let toml_str = format!(
            "[acceleration]\nprofile = \"{}\"\n\n[motors.main]\nname = \"Main\"\nmin_speed = 25\nmax_speed = 500\n",
            name
        );
        let config: FocuserConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");
        assert_eq!(config.accel.profile, Some(kind));
    }
}

/// Test that unknown profile names are rejected during parsing.
#[test]
fn test_unknown_profile_rejected() {
    let toml_str = r#"
[acceleration]
profile = "exponential"

[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
"#;

    let result: Result<FocuserConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test that names longer than 32 characters are rejected.
#[test]
fn test_long_name_rejected() {
    let toml_str = r#"
[motors.main]
name = "A focuser name that is far too long to fit"
min_speed = 25
max_speed = 500
"#;

    let result: Result<FocuserConfig, _> = toml::from_str(toml_str);
    assert!(result.is_err());
}

/// Test loading from a file on disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("focuser-motion-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "timer_freq_hz = 8000\n\n[motors.main]\nname = \"Main\"\nmin_speed = 25\nmax_speed = 500\n",
    )
    .expect("Failed to write config");

    let config = load_config(&path);
    let _ = std::fs::remove_file(&path);

    let config = config.expect("Failed to load config");
    assert_eq!(config.timer_freq_hz, 8000);
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_missing_file() {
    let result = load_config("/nonexistent/focuser.toml");
    assert!(matches!(result, Err(Error::Config(ConfigError::IoError(_)))));
}
