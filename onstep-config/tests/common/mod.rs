use onstep_config::OptionStore;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Seeded store with a few edits that touch every section
pub fn edited_store() -> OptionStore {
    let mut store = OptionStore::seeded();
    store.set("PINMAP", "MaxPCB2");
    store.set("AXIS1_STEPS_PER_DEGREE", "12800");
    store.set("AXIS3_DRIVER_MODEL", "TMC2209");
    store.set("AXIS4_LIMIT_MAX", "65");
    store.set("FEATURE3_PURPOSE", "DEW_HEATER");
    store.set("FEATURE3_NAME", "Dew, \"main\" scope");
    store
}
