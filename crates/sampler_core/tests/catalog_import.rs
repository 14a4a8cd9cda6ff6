use sampler_core::db::open_db_in_memory;
use sampler_core::{
    CatalogDocument, ErrorKind, ImportService, PresetService, SqlitePresetRepository,
    SqliteSoundRepository,
};

const LEGACY_CATALOG: &str = r#"[
    {
        "name": "808",
        "type": "Drumkit",
        "isFactoryPresets": true,
        "samples": [
            { "name": "Kick", "url": "808/kick.wav" },
            { "name": "Snare", "url": "808/snare.wav" }
        ]
    },
    {
        "name": "Basic Kit",
        "type": "Drumkit",
        "isFactoryPreset": false,
        "samples": [{ "name": "Kick", "url": "basic/kick.wav" }]
    },
    { "name": "Empty", "type": "Synth" }
]"#;

#[test]
fn import_loads_presets_and_sounds_with_either_flag_spelling() {
    let mut conn = open_db_in_memory().unwrap();
    let document = CatalogDocument::from_json_str(LEGACY_CATALOG).unwrap();

    let summary = ImportService::new(&mut conn)
        .import_catalog(&document)
        .unwrap();
    assert_eq!(summary.presets, 3);
    assert_eq!(summary.sounds, 3);

    let service = PresetService::new(
        SqlitePresetRepository::new(&conn),
        SqliteSoundRepository::new(&conn),
    );
    let listing = service.list_all().unwrap();
    assert_eq!(
        listing.iter().map(|v| v.name.as_str()).collect::<Vec<_>>(),
        vec!["808", "Basic Kit", "Empty"]
    );
    assert!(listing[0].is_factory_presets);
    assert!(!listing[1].is_factory_presets);
    assert!(!listing[2].is_factory_presets);
    assert_eq!(listing[0].samples[1].url, "808/snare.wav");
    assert!(listing[2].samples.is_empty());
}

#[test]
fn import_is_all_or_nothing() {
    let mut conn = open_db_in_memory().unwrap();
    let document = CatalogDocument::from_json_str(
        r#"[
            { "name": "A", "type": "kit", "samples": [{ "name": "Tom", "url": "a.wav" }] },
            { "name": "B", "type": "kit", "samples": [
                { "name": "Tom", "url": "b.wav" },
                { "name": "Tom", "url": "b2.wav" }
            ] }
        ]"#,
    )
    .unwrap();

    let err = ImportService::new(&mut conn)
        .import_catalog(&document)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM presets;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn import_conflicts_with_existing_preset_names() {
    let mut conn = open_db_in_memory().unwrap();
    let document =
        CatalogDocument::from_json_str(r#"[{ "name": "Drums", "type": "kit" }]"#).unwrap();

    ImportService::new(&mut conn)
        .import_catalog(&document)
        .unwrap();
    let err = ImportService::new(&mut conn)
        .import_catalog(&document)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn malformed_documents_are_rejected_by_the_parser() {
    assert!(CatalogDocument::from_json_str(r#"{ "name": "Drums" }"#).is_err());
    assert!(CatalogDocument::from_json_str(r#"[{ "name": "Drums" }]"#).is_err());
}
