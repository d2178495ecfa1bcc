use aura_lib::model::config::AppConfig;
use aura_lib::model::error::ConfigError;
use aura_lib::model::world::World;

const SMALL_WORLD: &str = r#"
[world]
width = 20
height = 15
seed = 5
day_length = 10
season_length = 40

[nutrients]
regen_rate = 0.02

[stats]
history_len = 8
"#;

#[test]
fn test_world_from_toml() {
    let config = AppConfig::from_toml(SMALL_WORLD).expect("valid config");
    assert_eq!(config.world.width, 20);
    assert_eq!(config.stats.history_len, 8);

    let mut world = World::new(config).expect("world builds");
    for _ in 0..12 {
        world.tick();
    }
    let stats = world.last_stats();
    assert_eq!(stats.history.herbivores.len(), 8);
    assert_eq!(stats.tick, 12);
}

#[test]
fn test_invalid_documents_are_rejected() {
    assert!(matches!(
        AppConfig::from_toml("[world]\nwidth = \"wide\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        AppConfig::from_toml("[world]\nheight = 0"),
        Err(ConfigError::InvalidDimension { .. })
    ));
    assert!(AppConfig::from_toml("[fauna]\nmax_energy = -1.0").is_err());
}

#[test]
fn test_invalid_config_never_builds_a_world() {
    let mut config = AppConfig::default();
    config.world.season_length = 0;
    assert!(World::new(config).is_err());
}

#[test]
fn test_config_round_trips_through_toml() {
    let mut config = AppConfig::default();
    config.world.seed = Some(3);
    config.flora.bush.spread_probability = 0.5;
    let text = toml::to_string_pretty(&config).expect("config serializes");
    let back = AppConfig::from_toml(&text).expect("config parses");
    assert_eq!(back, config);
    assert_eq!(back.fingerprint(), config.fingerprint());
}
