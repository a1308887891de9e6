//! Unit tests for configuration validation.

use focuser_motion::config::{parse_config, validate_config, FocuserConfig};
use focuser_motion::error::{ConfigError, Error};

/// Test validation of a valid configuration.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
timer_freq_hz = 10000

[acceleration]
duration_steps = 250
min_steps = 10

[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    assert!(validate_config(&config).is_ok());
}

/// Test validation fails for a zero minimum speed.
#[test]
fn test_zero_min_speed() {
    let toml_str = r#"
[motors.main]
name = "Main"
min_speed = 0
max_speed = 500
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidSpeedRange { min: 0, max: 500 }))
    ));
}

/// Test validation fails for inverted speed limits (min > max).
#[test]
fn test_inverted_speed_limits() {
    let toml_str = r#"
[motors.main]
name = "Main"
min_speed = 25
max_speed = 500

[motors.aux]
name = "Aux"
min_speed = 300
max_speed = 200
"#;

    let config: FocuserConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
    let result = validate_config(&config);
    assert!(result.is_err());
}

/// Test validation fails when the timer cannot reach max speed.
#[test]
fn test_timer_too_slow() {
    let toml_str = r#"
timer_freq_hz = 800

[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::TimerTooSlow {
            timer_freq: 800,
            max_speed: 500
        }))
    ));
}

/// Test validation fails for a zero ramp duration.
#[test]
fn test_zero_accel_duration() {
    let toml_str = r#"
[acceleration]
duration_steps = 0

[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidAccelDuration(0)))
    ));
}

/// Test that small ramp thresholds are accepted.
#[test]
fn test_accel_small_min_steps_accepted() {
    for min_steps in [0, 1] {
        let toml_str = format!(
            "[acceleration]\nmin_steps = {}\n\n[motors.main]\nname = \"Main\"\nmin_speed = 25\nmax_speed = 500\n",
            min_steps
        );
        let config = parse_config(&toml_str).expect("Small ramp threshold should be valid");
        assert_eq!(config.accel.min_steps, min_steps);
    }
}

/// Test validation fails for an unsupported microstepping mode.
#[test]
fn test_invalid_microstepping() {
    let toml_str = r#"
[motors.main]
name = "Main"
min_speed = 25
max_speed = 500
microstepping = 3
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMicrostepping(3)))
    ));
}

/// Test that a configuration without motors is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = FocuserConfig::default();
    assert!(validate_config(&config).is_ok());
}
