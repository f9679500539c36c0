use cat_calorie_calc::calculator::{compute_auto, compute_submit};
use cat_calorie_calc::models::CatInputs;
use cat_calorie_calc::state::{InputStateManager, JsonFileStore, KeyValueStore, WEIGHT_KEY};
use tempfile::tempdir;

#[test]
fn test_saved_inputs_reproduce_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cat_state.json");

    let inputs = CatInputs::new(Some("4.5".to_string()), Some("1,1.2".to_string()));
    let before = compute_submit(&inputs).unwrap();

    let mut manager = InputStateManager::new(JsonFileStore::new(&path));
    manager.save(&inputs);

    // Fresh manager, as on the next start
    let reloaded = InputStateManager::new(JsonFileStore::new(&path)).load();
    assert_eq!(reloaded, inputs);
    assert_eq!(compute_submit(&reloaded).unwrap(), before);
    assert_eq!(compute_auto(&reloaded).report(), Some(&before));
}

#[test]
fn test_missing_file_loads_nothing() {
    let dir = tempdir().unwrap();
    let manager = InputStateManager::new(JsonFileStore::new(dir.path().join("absent.json")));

    let loaded = manager.load();
    assert_eq!(loaded, CatInputs::default());
    assert!(compute_auto(&loaded).is_hidden());
}

#[test]
fn test_partial_update_keeps_other_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cat_state.json");

    let mut manager = InputStateManager::new(JsonFileStore::new(&path));
    manager.save(&CatInputs::new(Some("4".into()), Some("senior".into())));
    manager.save(&CatInputs::new(Some("5".into()), None));

    let loaded = manager.load();
    assert_eq!(loaded.weight_str(), Some("5"));
    assert_eq!(loaded.life_stage_str(), Some("senior"));
}

#[test]
fn test_corrupt_state_is_not_fatal() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cat_state.json");
    std::fs::write(&path, "not json at all").unwrap();

    let mut manager = InputStateManager::new(JsonFileStore::new(&path));
    assert_eq!(manager.load(), CatInputs::default());

    // Writing replaces the unreadable file
    manager.save(&CatInputs::new(Some("3".into()), None));
    assert_eq!(
        JsonFileStore::new(&path).get(WEIGHT_KEY),
        Some("3".to_string())
    );
}

#[test]
fn test_state_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cat_state.json");

    let mut manager = InputStateManager::new(JsonFileStore::new(&path));
    manager.save(&CatInputs::new(Some("4.5".into()), Some("1,1.2".into())));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["cat_weight"], "4.5");
    assert_eq!(json["cat_lifestage"], "1,1.2");
}
