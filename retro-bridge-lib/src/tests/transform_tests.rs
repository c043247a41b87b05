use super::*;
use crate::config::ArcadeConfig;
use retro_bridge_core::CoreError;
use std::fs;
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
    config: Config,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let config = Config {
            kodi_userdata_dir: root.join("kodi"),
            output_roms_root: root.join("es-roms"),
            output_config_root: root.join("es-config"),
            emulator_binary_path: PathBuf::from("/bin/retroarch"),
            core_library_path: PathBuf::from("/lib/libretro"),
            arcade: ArcadeConfig {
                mame_roms_dir: root.join("mame-roms"),
                mame_binary_path: PathBuf::from("/bin/mame"),
                ..ArcadeConfig::default()
            },
            ..Config::default()
        };
        Self { dir, config }
    }

    fn file(&self, rel: &str, contents: &[u8]) -> String {
        let path = self.dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn out(&self, rel: &str) -> PathBuf {
        self.config.output_roms_root.join(rel)
    }
}

fn rom(name: &str, platform: &str, filename: &str) -> SourceRecord {
    SourceRecord {
        name: name.to_string(),
        platform: platform.to_string(),
        filename: filename.to_string(),
        ..SourceRecord::default()
    }
}

#[test]
fn test_records_grouped_by_platform_in_source_order() {
    let fx = Fixture::new();
    let roms = vec![
        rom("Super Metroid", "Nintendo SNES", &fx.file("src/Super Metroid.sfc", b"a")),
        rom("Sonic", "Sega Mega Drive", &fx.file("src/Sonic.md", b"b")),
        rom("F-Zero", "Nintendo SNES", &fx.file("src/F-Zero.sfc", b"c")),
    ];

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&roms).unwrap();
    let (catalog, _) = transformer.finish();

    let ids: Vec<_> = catalog.systems().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["snes", "megadrive"]);
    let snes = catalog.get("snes").unwrap();
    let names: Vec<_> = snes.games.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["Super Metroid", "F-Zero"]);
    assert_eq!(snes.path, fx.out("snes"));
    assert_eq!(snes.fullname, "Super Nintendo");
    assert_eq!(
        snes.command,
        "/bin/retroarch -L /lib/libretro/snes9x_libretro.so %ROM%"
    );
    assert_eq!(catalog.game_count(), 3);
}

#[test]
fn test_destination_record_fields() {
    let fx = Fixture::new();
    let source = SourceRecord {
        name: "Gunstar Heroes".into(),
        description: "Run & gun".into(),
        year: "1993".into(),
        developer: "Treasure".into(),
        genre: "Action".into(),
        players: "1-2".into(),
        platform: "Sega Mega Drive".into(),
        filename: fx.file("src/Gunstar Heroes (USA).zip", b"zip"),
        artwork: None,
    };

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&[source]).unwrap();
    let game = &transformer.catalog().get("megadrive").unwrap().games[0];

    assert_eq!(game.name, "Gunstar Heroes");
    assert_eq!(game.description, "Run & gun");
    assert_eq!(game.release_date, "19930101T000000");
    assert_eq!(game.developer, "Treasure");
    assert_eq!(game.publisher, "");
    assert_eq!(game.players, "1-2");
    assert_eq!(game.path, fx.out("megadrive/Gunstar Heroes (USA).zip"));
    assert_eq!(game.image, None);
    assert!(game.path.is_file());
}

#[test]
fn test_extensions_first_seen_without_duplicates() {
    let fx = Fixture::new();
    let roms = vec![
        rom("A", "Nintendo NES", &fx.file("src/a.nes", b"1")),
        rom("B", "Nintendo NES", &fx.file("src/b.zip", b"2")),
        rom("C", "Nintendo NES", &fx.file("src/c.nes", b"3")),
    ];

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&roms).unwrap();

    let nes = transformer.catalog().get("nes").unwrap();
    assert_eq!(nes.extension_list(), ".nes .zip");
}

#[test]
fn test_unknown_platform_fails_validation_and_transform() {
    let fx = Fixture::new();
    let roms = vec![
        rom("Tetris", "Nintendo GameBoy", &fx.file("src/Tetris.gb", b"t")),
        rom("Mystery", "Unknown", &fx.file("src/mystery.bin", b"m")),
    ];

    let transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    let err = transformer.validate_platforms(&roms).unwrap_err();
    assert!(matches!(err, BridgeError::Core(CoreError::UnknownPlatform(ref p)) if p == "Unknown"));

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    assert!(transformer.add_roms(&roms).is_err());
    assert!(!transformer.catalog().systems().any(|s| s
        .games
        .iter()
        .any(|g| g.name == "Mystery")));
}

#[test]
fn test_artwork_shares_rom_basename_and_resolves_profile_prefix() {
    let fx = Fixture::new();
    fx.file("kodi/addon_data/ael/3dbox/metroid-box.png", b"png");
    let mut source = rom(
        "Super Metroid",
        "Nintendo SNES",
        &fx.file("src/Super Metroid (USA).sfc", b"rom"),
    );
    source.artwork = Some("special://profile/addon_data/ael/3dbox/metroid-box.png".into());

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&[source]).unwrap();
    let (catalog, sync) = transformer.finish();

    let expected = fx.out("snes/Super Metroid (USA).png");
    let game = &catalog.get("snes").unwrap().games[0];
    assert_eq!(game.image.as_deref(), Some(expected.as_path()));
    assert_eq!(fs::read(&expected).unwrap(), b"png");
    assert!(sync.kept().contains(&expected));
}

#[test]
fn test_missing_artwork_keeps_reference_but_is_not_kept() {
    let fx = Fixture::new();
    let mut source = rom("Tetris", "Nintendo GameBoy", &fx.file("src/Tetris.gb", b"t"));
    source.artwork = Some("/nowhere/Tetris.jpg".into());

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&[source]).unwrap();
    let (catalog, sync) = transformer.finish();

    let art = fx.out("gb/Tetris.jpg");
    assert_eq!(catalog.get("gb").unwrap().games[0].image.as_deref(), Some(art.as_path()));
    assert!(!sync.kept().contains(&art));
    assert!(sync.kept().contains(&fx.out("gb/Tetris.gb")));
}

#[test]
fn test_missing_rom_file_still_listed() {
    let fx = Fixture::new();
    let source = rom("Ghost", "Nintendo GameBoy", "/nowhere/Ghost.gb");

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&[source]).unwrap();
    let (catalog, sync) = transformer.finish();

    assert_eq!(catalog.get("gb").unwrap().games.len(), 1);
    assert!(sync.kept().is_empty());
    assert_eq!(sync.stats().missing, 1);
}

#[test]
fn test_rom_without_file_name_is_invalid() {
    let fx = Fixture::new();
    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    let err = transformer
        .add_roms(&[rom("Empty", "Nintendo NES", "")])
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidRecord(_)));
}

fn machine(name: &str, rom_sets: &[&str]) -> MachineRecord {
    MachineRecord {
        name: name.to_string(),
        description: format!("{name} (World)"),
        year: "1991".to_string(),
        manufacturer: "Capcom".to_string(),
        genre: "Fighter".to_string(),
        players: "2P sim".to_string(),
        artwork: None,
        rom_sets: rom_sets.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn test_machines_split_main_and_dependency_sets() {
    let fx = Fixture::new();
    fx.file("mame-roms/sf2.zip", b"sf2");
    fx.file("mame-roms/qsound.zip", b"qs");
    fx.file("kodi/addon_data/aml/snaps/sf2.png", b"snap");
    let mut sf2 = machine("sf2", &["sf2", "qsound"]);
    sf2.artwork = Some("special://profile/addon_data/aml/snaps/sf2.png".into());

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_machines(&[sf2]).unwrap();
    let (catalog, sync) = transformer.finish();

    assert!(fx.out("mame/sf2.zip").is_file());
    assert!(fx.out("mame-extra/qsound.zip").is_file());
    assert!(!fx.out("mame/qsound.zip").exists());
    assert!(fx.out("mame/sf2.png").is_file());
    assert_eq!(sync.kept().len(), 3);

    let mame = catalog.get("mame").unwrap();
    assert_eq!(mame.fullname, "MAME");
    assert_eq!(mame.command, "/bin/mame %BASENAME%");
    assert_eq!(mame.extension_list(), ".zip");
    let game = &mame.games[0];
    assert_eq!(game.name, "sf2 (World)");
    assert_eq!(game.description, "");
    assert_eq!(game.developer, "Capcom");
    assert_eq!(game.release_date, "19910101T000000");
    assert_eq!(game.path, fx.out("mame/sf2.zip"));
    assert_eq!(game.image, Some(fx.out("mame/sf2.png")));
}

#[test]
fn test_machine_without_artwork_is_still_listed() {
    let fx = Fixture::new();
    fx.file("mame-roms/dkong.zip", b"dk");

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_machines(&[machine("dkong", &["dkong"])]).unwrap();

    let mame = transformer.catalog().get("mame").unwrap();
    assert_eq!(mame.games.len(), 1);
    assert_eq!(mame.games[0].image, None);
}

#[test]
fn test_arcade_platform_collision() {
    let mut fx = Fixture::new();
    fx.config.arcade.platform_id = "snes".to_string();
    let roms = vec![rom("F-Zero", "Nintendo SNES", &fx.file("src/F-Zero.sfc", b"c"))];

    let mut transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.add_roms(&roms).unwrap();
    let err = transformer.add_machines(&[]).unwrap_err();
    assert!(matches!(err, BridgeError::PlatformCollision(ref id) if id == "snes"));
}

#[test]
fn test_arcade_collision_detected_before_any_copy() {
    let mut fx = Fixture::new();
    fx.config.arcade.platform_id = "snes".to_string();
    let roms = vec![rom("F-Zero", "Nintendo SNES", &fx.file("src/F-Zero.sfc", b"c"))];

    let transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    let err = transformer.validate_platforms(&roms).unwrap_err();
    assert!(matches!(err, BridgeError::PlatformCollision(ref id) if id == "snes"));
    assert!(!fx.out("snes").exists());

    fx.config.arcade.enabled = false;
    let transformer = Transformer::new(&fx.config, PlatformTable::builtin());
    transformer.validate_platforms(&roms).unwrap();
}
