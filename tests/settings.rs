use stringkeeper::config::Settings;
use stringkeeper::persist::PersistenceMode;

#[test]
fn missing_file_falls_back_to_defaults() {
    let settings = Settings::load("no_such_stringkeeper_settings").expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.address, "127.0.0.1:8000");
    assert_eq!(settings.persistence_mode(), PersistenceMode::InMemory);
}

#[test]
fn file_overrides_defaults() {
    let dir = std::env::temp_dir().join(format!("stringkeeper_settings_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let file = dir.join("stringkeeper.toml");
    std::fs::write(&file, "address = \"0.0.0.0:9000\"\ndatabase = \"strings.db\"\n").unwrap();

    let name = dir.join("stringkeeper");
    let settings = Settings::load(name.to_str().unwrap()).expect("settings");
    assert_eq!(settings.address, "0.0.0.0:9000");
    assert_eq!(settings.log_filter, "info");
    assert_eq!(
        settings.persistence_mode(),
        PersistenceMode::File("strings.db".to_string())
    );
    // Clean up
    let _ = std::fs::remove_dir_all(&dir);
}
