use sampler_core::db::open_db_in_memory;
use sampler_core::{
    ErrorKind, Preset, PresetRepository, PresetValidationError, RepoError, SqlitePresetRepository,
};

#[test]
fn insert_and_find_by_name_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);

    let preset = Preset::new("Drums", "kit", true);
    let id = repo.insert_preset(&preset).unwrap();
    assert_eq!(id, preset.id);

    let loaded = repo.find_by_name("Drums").unwrap().unwrap();
    assert_eq!(loaded, preset);
    assert!(loaded.is_factory());
}

#[test]
fn find_by_name_is_exact_and_case_sensitive() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);
    repo.insert_preset(&Preset::new("Drums", "kit", false))
        .unwrap();

    assert!(repo.find_by_name("drums").unwrap().is_none());
    assert!(repo.find_by_name("Drums ").unwrap().is_none());
    assert!(repo.find_by_name("Drums").unwrap().is_some());
}

#[test]
fn insert_with_taken_name_is_a_conflict() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);
    repo.insert_preset(&Preset::new("Drums", "kit", false))
        .unwrap();

    let err = repo
        .insert_preset(&Preset::new("Drums", "other", true))
        .unwrap_err();
    assert!(matches!(&err, RepoError::PresetNameTaken(name) if name == "Drums"));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(repo.list_presets().unwrap().len(), 1);
}

#[test]
fn insert_rejects_empty_fields_before_touching_storage() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);

    let err = repo
        .insert_preset(&Preset::new("", "kit", false))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::PresetValidation(PresetValidationError::EmptyName)
    ));
    let err = repo
        .insert_preset(&Preset::new("Drums", "", false))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(repo.list_presets().unwrap().is_empty());
}

#[test]
fn list_presets_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);
    for name in ["Zeta", "Alpha", "Mid"] {
        repo.insert_preset(&Preset::new(name, "kit", false))
            .unwrap();
    }

    let names: Vec<String> = repo
        .list_presets()
        .unwrap()
        .into_iter()
        .map(|preset| preset.name)
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn rename_keeps_id_and_changes_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);
    let preset = Preset::new("Drums", "kit", false);
    repo.insert_preset(&preset).unwrap();

    let renamed = repo.rename_preset("Drums", "Beats").unwrap();
    assert_eq!(renamed.id, preset.id);
    assert_eq!(renamed.name, "Beats");
    assert!(repo.find_by_name("Drums").unwrap().is_none());
    assert_eq!(repo.find_by_name("Beats").unwrap().unwrap().id, preset.id);
}

#[test]
fn rename_to_own_name_is_a_successful_no_op() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);
    let preset = Preset::new("Drums", "kit", false);
    repo.insert_preset(&preset).unwrap();

    let renamed = repo.rename_preset("Drums", "Drums").unwrap();
    assert_eq!(renamed, preset);
}

#[test]
fn rename_errors_are_classified() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePresetRepository::new(&conn);
    repo.insert_preset(&Preset::new("Drums", "kit", false))
        .unwrap();
    repo.insert_preset(&Preset::new("Keys", "synth", false))
        .unwrap();

    let missing = repo.rename_preset("Ghost", "Spirit").unwrap_err();
    assert!(matches!(&missing, RepoError::PresetNotFound(name) if name == "Ghost"));

    let taken = repo.rename_preset("Keys", "Drums").unwrap_err();
    assert!(matches!(&taken, RepoError::PresetNameTaken(name) if name == "Drums"));
    assert!(repo.find_by_name("Keys").unwrap().is_some());

    let empty = repo.rename_preset("Keys", "").unwrap_err();
    assert_eq!(empty.kind(), ErrorKind::Validation);
}

#[test]
fn legacy_flag_columns_are_read_back_verbatim() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO presets (id, name, type, is_factory_preset, is_factory_presets)
         VALUES ('6c1f8d5e-3f5e-4c1a-9a43-2f1f6d7f6b10', 'Legacy', 'kit', NULL, 1);",
    )
    .unwrap();
    let repo = SqlitePresetRepository::new(&conn);

    let loaded = repo.find_by_name("Legacy").unwrap().unwrap();
    assert_eq!(loaded.is_factory_preset, None);
    assert_eq!(loaded.is_factory_presets, Some(true));
    assert!(loaded.is_factory());
}

#[test]
fn invalid_persisted_id_is_reported_as_store_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("INSERT INTO presets (id, name, type) VALUES ('not-a-uuid', 'Bad', 'kit');")
        .unwrap();
    let repo = SqlitePresetRepository::new(&conn);

    let err = repo.list_presets().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
    assert_eq!(err.kind(), ErrorKind::Store);
}
