use sampler_core::db::open_db;
use sampler_core::{
    ErrorKind, Preset, PresetRepository, RepoResult, SoundRepository, SqlitePresetRepository,
    SqliteSoundRepository, Sound,
};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Barrier};
use std::thread;

/// Runs `op` on `count` separate connections released together by a barrier.
fn race<T, F>(path: &Path, count: usize, op: F) -> Vec<RepoResult<T>>
where
    T: Send + 'static,
    F: Fn(usize, &Connection) -> RepoResult<T> + Send + Sync + 'static,
{
    let connections: Vec<Connection> = (0..count).map(|_| open_db(path).unwrap()).collect();
    let barrier = Arc::new(Barrier::new(count));
    let op = Arc::new(op);

    let handles: Vec<_> = connections
        .into_iter()
        .enumerate()
        .map(|(index, conn)| {
            let barrier = Arc::clone(&barrier);
            let op = Arc::clone(&op);
            thread::spawn(move || {
                barrier.wait();
                op(index, &conn)
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect()
}

#[test]
fn concurrent_adds_of_one_name_yield_exactly_one_preset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    drop(open_db(&path).unwrap());

    let results = race(&path, 4, |_, conn| {
        SqlitePresetRepository::new(conn).insert_preset(&Preset::new("Drums", "kit", false))
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|err| err.kind() == ErrorKind::Conflict));

    let conn = open_db(&path).unwrap();
    assert_eq!(SqlitePresetRepository::new(&conn).list_presets().unwrap().len(), 1);
}

#[test]
fn concurrent_renames_onto_one_target_leave_a_single_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    {
        let conn = open_db(&path).unwrap();
        let repo = SqlitePresetRepository::new(&conn);
        repo.insert_preset(&Preset::new("A", "kit", false)).unwrap();
        repo.insert_preset(&Preset::new("B", "kit", false)).unwrap();
    }

    let results = race(&path, 2, |index, conn| {
        let current = if index == 0 { "A" } else { "B" };
        SqlitePresetRepository::new(conn).rename_preset(current, "C")
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let conn = open_db(&path).unwrap();
    let mut names: Vec<String> = SqlitePresetRepository::new(&conn)
        .list_presets()
        .unwrap()
        .into_iter()
        .map(|preset| preset.name)
        .collect();
    names.sort();
    assert!(names == vec!["A", "C"] || names == vec!["B", "C"]);
}

#[test]
fn concurrent_sound_renames_within_a_preset_keep_names_unique() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let preset_id = {
        let conn = open_db(&path).unwrap();
        let preset = Preset::new("Drums", "kit", false);
        SqlitePresetRepository::new(&conn)
            .insert_preset(&preset)
            .unwrap();
        let sounds = SqliteSoundRepository::new(&conn);
        for name in ["Kick", "Snare", "Hat"] {
            sounds
                .insert_sound(&Sound::new(preset.id, name, format!("{name}.wav")))
                .unwrap();
        }
        preset.id
    };

    let results = race(&path, 3, |index, conn| {
        let current = ["Kick", "Snare", "Hat"][index];
        SqliteSoundRepository::new(conn).rename_sound("Drums", current, "Clap")
    });

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    let conn = open_db(&path).unwrap();
    let names: Vec<String> = SqliteSoundRepository::new(&conn)
        .list_by_preset(preset_id)
        .unwrap()
        .into_iter()
        .map(|sound| sound.name)
        .collect();
    assert_eq!(names.len(), 3);
    assert_eq!(names.iter().filter(|name| *name == "Clap").count(), 1);
}
