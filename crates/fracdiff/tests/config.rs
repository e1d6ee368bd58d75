use fracdiff::{FracDiffConfig, FracDiffError};

#[test]
fn test_default_config() {
    let cfg = FracDiffConfig::default();
    assert_eq!(cfg.d, 0.5);
    assert_eq!(cfg.window_size, 100);
    assert_eq!(cfg.threshold, 1e-5);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_from_json() {
    let cfg = FracDiffConfig::from_json_str(r#"{"d": 0.75, "window_size": 5, "threshold": 0.05}"#)
        .unwrap();
    assert_eq!(cfg, FracDiffConfig::new(0.75, 5, 0.05));
    assert_eq!(cfg.weights().unwrap(), vec![-0.09375, -0.75, 1.0]);
}

#[test]
fn test_config_validate() {
    assert_eq!(FracDiffConfig::new(1.5, 10, 0.0).validate(), Err(FracDiffError::InvalidOrder));
    assert_eq!(
        FracDiffConfig::new(0.5, 0, 0.0).validate(),
        Err(FracDiffError::InvalidWindowSize)
    );
}

#[test]
fn test_config_apply() {
    let series: Vec<f64> = (100..200).map(|v| v as f64).collect();
    let out = FracDiffConfig::new(0.75, 5, 0.0).apply(&series).unwrap();
    assert_eq!(out.len(), series.len());
    assert_eq!(out[4], 11.044921875);

    let err = FracDiffConfig::new(-0.2, 5, 0.0).apply(&series).unwrap_err();
    assert_eq!(err.to_string(), "d must be between 0 and 1 inclusive");
}

#[test]
fn test_config_json_round_trip() {
    let cfg = FracDiffConfig::new(0.3, 12, 1e-4);
    let raw = serde_json::to_string(&cfg).unwrap();
    assert_eq!(FracDiffConfig::from_json_str(&raw).unwrap(), cfg);
}
