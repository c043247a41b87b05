use super::*;

#[test]
fn test_empty_toml_uses_defaults() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.collection_name, "EmulationStation");
    assert_eq!(config.artwork_field, "s_3dbox");
    assert!(config.arcade.enabled);
    assert_eq!(config.arcade.platform_id, "mame");
    assert_eq!(config.arcade.artwork_field, "snap");
}

#[test]
fn test_partial_toml_overrides() {
    let config = Config::from_toml_str(
        r#"
collection_name = "Living Room"
output_roms_root = "/srv/es/roms"
core_library_path = "/usr/lib/libretro"

[arcade]
enabled = false
"#,
    )
    .unwrap();
    assert_eq!(config.collection_name, "Living Room");
    assert_eq!(config.output_roms_root, PathBuf::from("/srv/es/roms"));
    assert!(!config.arcade.enabled);
    // Untouched arcade keys keep defaults
    assert_eq!(config.arcade.extra_dir_name, "mame-extra");
}

#[test]
fn test_platform_overrides() {
    let config = Config::from_toml_str(
        r#"
[platforms."Atari 7800"]
id = "atari7800"
name = "Atari 7800"
core = "prosystem_libretro.so"

[platforms."Nintendo SNES"]
id = "snes"
name = "Super Nintendo"
core = "bsnes_libretro.so"
"#,
    )
    .unwrap();
    let table = config.platform_table();
    assert_eq!(table.lookup("Atari 7800").unwrap().id, "atari7800");
    assert_eq!(table.lookup("Nintendo SNES").unwrap().core, "bsnes_libretro.so");
    assert_eq!(table.lookup("Nintendo NES").unwrap().core, "mesen_libretro.so");
}

#[test]
fn test_invalid_toml_is_config_error() {
    let err = Config::from_toml_str("collection_name = [").unwrap_err();
    assert!(matches!(err, BridgeError::Config(_)));
}

#[test]
fn test_validation() {
    assert!(matches!(
        Config::from_toml_str(r#"collection_name = """#),
        Err(BridgeError::Config(_))
    ));
    assert!(matches!(
        Config::from_toml_str("[arcade]\nplatform_id = \"mame\"\nextra_dir_name = \"mame\""),
        Err(BridgeError::Config(_))
    ));
}

#[test]
fn test_resolve_profile_path() {
    let config = Config {
        kodi_userdata_dir: PathBuf::from("/home/kodi/.kodi/userdata"),
        ..Config::default()
    };
    assert_eq!(
        config.resolve_profile_path("special://profile/addon_data/ael/3dbox/Sonic.png"),
        PathBuf::from("/home/kodi/.kodi/userdata/addon_data/ael/3dbox/Sonic.png")
    );
    assert_eq!(
        config.resolve_profile_path("/media/art/Sonic.png"),
        PathBuf::from("/media/art/Sonic.png")
    );
}

#[test]
fn test_launch_commands() {
    let config = Config {
        emulator_binary_path: PathBuf::from("/home/kodi/bin/retroarch"),
        core_library_path: PathBuf::from("/home/kodi/bin/libretro"),
        arcade: ArcadeConfig {
            mame_binary_path: PathBuf::from("/home/kodi/bin/mame64"),
            ..ArcadeConfig::default()
        },
        ..Config::default()
    };
    assert_eq!(
        config.launch_command("snes9x_libretro.so"),
        "/home/kodi/bin/retroarch -L /home/kodi/bin/libretro/snes9x_libretro.so %ROM%"
    );
    assert_eq!(config.arcade_launch_command(), "/home/kodi/bin/mame64 %BASENAME%");
}

#[test]
fn test_toml_round_trip() {
    let config = Config::default();
    let text = config.to_toml_string().unwrap();
    assert_eq!(Config::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_missing_explicit_config_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, BridgeError::Io { .. }));
}

#[test]
fn test_collection_paths() {
    let config = Config {
        ael_data_dir: PathBuf::from("/data/ael"),
        ..Config::default()
    };
    assert_eq!(config.collections_path(), PathBuf::from("/data/ael/collections.xml"));
    assert_eq!(
        config.collection_db_path("ES_1234"),
        PathBuf::from("/data/ael/db_Collections/ES_1234.json")
    );
}

fn config_error(toml: &str) -> String {
    match Config::from_toml_str(toml) {
        Err(BridgeError::Config(msg)) => msg,
        other => panic!("expected config error for {toml:?}, got {other:?}"),
    }
}

#[test]
fn test_platform_id_must_be_plain_directory_name() {
    for id in ["", ".", "..", "../escaped", "/abs", "a/b", "a\\b"] {
        let toml = format!(
            "[platforms.\"Nintendo SNES\"]\nid = {id:?}\nname = \"SNES\"\ncore = \"snes9x_libretro.so\""
        );
        assert!(config_error(&toml).contains("Nintendo SNES"), "id {id:?}");
    }
}

#[test]
fn test_arcade_platform_id_must_be_plain_directory_name() {
    for id in ["", ".", "..", "../mame", "/mame", "arcade\\mame"] {
        let msg = config_error(&format!("[arcade]\nplatform_id = {id:?}"));
        assert!(msg.contains("arcade.platform_id"), "id {id:?}: {msg}");
    }
}

#[test]
fn test_arcade_extra_dir_must_be_plain_directory_name() {
    for dir in ["", ".", "..", "../extra", "/extra", "mame\\extra"] {
        let msg = config_error(&format!("[arcade]\nextra_dir_name = {dir:?}"));
        assert!(msg.contains("arcade.extra_dir_name"), "dir {dir:?}: {msg}");
    }
}

#[test]
fn test_plain_names_are_accepted() {
    let config = Config::from_toml_str(
        r#"
[arcade]
platform_id = "arcade"
extra_dir_name = "arcade-bios"

[platforms."Atari 7800"]
id = "atari7800"
name = "Atari 7800"
core = "prosystem_libretro.so"
"#,
    )
    .unwrap();
    assert_eq!(config.arcade.platform_id, "arcade");
}
