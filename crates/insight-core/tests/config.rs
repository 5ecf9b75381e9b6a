// File: crates/insight-core/tests/config.rs
// Purpose: Dashboard TOML loading, INSIGHT_* overrides, defaults, breakpoint overrides, and duplicate-id rejection.

use std::io::Write;
use std::sync::{Mutex, MutexGuard};

use insight_core::{Breakpoint, DashboardConfig, LayoutError};

const DASHBOARD: &str = r#"
theme = "dark"
row_height = 120

[[views]]
id = "revenue"
type = "bar"

[[views]]
id = "share"
type = "pie"
"#;

// File loads read the process environment; tests that touch it hold this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Sets an environment variable for the lifetime of the guard.
struct EnvVar<'a> {
    key: &'static str,
    _lock: MutexGuard<'a, ()>,
}

impl<'a> EnvVar<'a> {
    fn set(lock: MutexGuard<'a, ()>, key: &'static str, value: &str) -> Self {
        std::env::set_var(key, value);
        Self { key, _lock: lock }
    }
}

impl Drop for EnvVar<'_> {
    fn drop(&mut self) {
        std::env::remove_var(self.key);
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn dashboard_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
    file.write_all(DASHBOARD.as_bytes()).expect("write config");
    file
}

#[test]
fn loads_views_and_settings_from_file() {
    let _env = env_lock();
    let file = dashboard_file();

    let cfg = DashboardConfig::load(file.path()).expect("load");
    assert_eq!(cfg.theme().name, "dark");
    assert_eq!(cfg.metrics().row_height, 120.0);
    assert_eq!(cfg.metrics().margin, 10.0);
    let ids: Vec<&str> = cfg.views.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["revenue", "share"]);
    assert_eq!(cfg.views[1].chart_type, "pie");
}

#[test]
fn environment_overrides_scalar_settings() {
    let file = dashboard_file();
    {
        let _row = EnvVar::set(env_lock(), "INSIGHT_ROW_HEIGHT", "90");
        let cfg = DashboardConfig::load(file.path()).expect("load with override");
        assert_eq!(cfg.metrics().row_height, 90.0);
        assert_eq!(cfg.theme, "dark");
        assert_eq!(cfg.views.len(), 2);
    }

    let _env = env_lock();
    let cfg = DashboardConfig::load(file.path()).expect("load from file only");
    assert_eq!(cfg.metrics().row_height, 120.0);
}

#[test]
fn empty_config_falls_back_to_defaults() {
    let cfg = DashboardConfig::from_toml_str("").expect("parse");
    assert_eq!(cfg.theme, "light");
    assert_eq!(cfg.views(), insight_core::default_views());
    assert_eq!(cfg.grid_config().expect("grid config"), insight_core::GridConfig::default());
}

#[test]
fn duplicate_ids_are_a_config_error() {
    let src = r#"
[[views]]
id = "a"
type = "bar"

[[views]]
id = "a"
type = "pie"
"#;
    assert!(matches!(DashboardConfig::from_toml_str(src), Err(LayoutError::DuplicateKey(id)) if id == "a"));
}

#[test]
fn breakpoint_overrides_are_validated() {
    let ok = r#"
default_height = 4

[breakpoints.lg]
min_width = 1200
columns = 12
items_per_row = 4
min_item_width = 2
"#;
    let cfg = DashboardConfig::from_toml_str(ok).expect("parse");
    let grid = cfg.grid_config().expect("valid");
    assert_eq!(grid.spec(Breakpoint::Lg).item_width(), 3);
    assert_eq!(grid.default_height(), 4);
    assert_eq!(grid.active_breakpoint(1000), Breakpoint::Md);

    let uneven = r#"
[breakpoints.md]
min_width = 768
columns = 8
items_per_row = 3
min_item_width = 2
"#;
    let cfg = DashboardConfig::from_toml_str(uneven).expect("parse");
    assert!(matches!(cfg.grid_config(), Err(LayoutError::UnevenColumns { bp: Breakpoint::Md, .. })));
}

#[test]
fn malformed_toml_is_a_config_error() {
    assert!(matches!(DashboardConfig::from_toml_str("views = 3"), Err(LayoutError::Config(_))));
}
