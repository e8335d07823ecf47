// ==========================================
// 配置加载集成测试
// ==========================================
// 测试目标: 验证 JSON 配置读取、缺省回落、校验与查找顺序
// ==========================================

mod test_helpers;

use garment_supply_chain::config::{
    load_from_file, resolve_with, ConfigError, ProfileOrigin, YieldProfile,
};
use garment_supply_chain::engine::SupplyChainCalculator;
use std::path::PathBuf;
use test_helpers::write_temp_file;

#[test]
fn test_full_profile_round_trip_through_file() {
    let profile = YieldProfile {
        cotton_bale_weight_lbs: 500.0,
        max_lots: 4,
        ..YieldProfile::default()
    };
    let json = serde_json::to_string_pretty(&profile).unwrap();
    let file = write_temp_file(&json);

    let loaded = load_from_file(file.path()).expect("profile should load");
    assert_eq!(loaded.cotton_bale_weight_lbs, 500.0);
    assert_eq!(loaded.max_lots, 4);
    assert_eq!(loaded.carton_capacity, 20);
}

#[test]
fn test_loaded_profile_drives_calculation() {
    let file = write_temp_file(r#"{ "max_lots": 2, "container_capacity": 100 }"#);
    let profile = load_from_file(file.path()).unwrap();
    let calc = SupplyChainCalculator::new(profile).unwrap();

    let report = calc.calculate_raw(10_000).unwrap();
    assert_eq!(report.cotton_bales.lot_units(), vec![10, 9]);
    assert_eq!(report.containers.needed, 5);
}

#[test]
fn test_invalid_capacity_in_file() {
    let file = write_temp_file(r#"{ "carton_capacity": 0 }"#);
    match load_from_file(file.path()) {
        Err(ConfigError::InvalidCapacity { key }) => assert_eq!(key, "carton_capacity"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_wrong_type_in_file() {
    let file = write_temp_file(r#"{ "max_lots": "five" }"#);
    assert!(matches!(
        load_from_file(file.path()),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_overage_above_limit() {
    let file = write_temp_file(r#"{ "cut_part_overage_pct": 150 }"#);
    assert!(matches!(
        load_from_file(file.path()),
        Err(ConfigError::InvalidOverage(150))
    ));
}

#[test]
fn test_user_config_file_is_used_when_present() {
    let file = write_temp_file(r#"{ "buttons_per_shirt": 8 }"#);
    let (profile, origin) =
        resolve_with(None, None, Some(file.path().to_path_buf())).unwrap();

    assert_eq!(profile.buttons_per_shirt, 8);
    assert_eq!(origin, ProfileOrigin::UserConfig(file.path().to_path_buf()));
}

#[test]
fn test_missing_env_file_is_an_error() {
    let result = resolve_with(None, Some(PathBuf::from("/nonexistent/env.json")), None);
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn test_built_in_origin_display() {
    let (_, origin) = resolve_with(None, None, None).unwrap();
    assert_eq!(origin.to_string(), "built-in");
}
