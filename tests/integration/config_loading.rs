use std::io::Write;

use tempfile::{NamedTempFile, tempdir};
use shopflow::config::{load_and_validate, load_or_default};
use shopflow::pipeline::PipelineTemplate;
use shopflow::types::Priority;

#[test]
fn custom_pipeline_from_toml() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[store]
path = "var/orders.json"

[[pipeline.department]]
name = "cut"
priority = "high"

[[pipeline.department]]
name = "weld"

[[pipeline.department]]
name = "ship"
priority = "low"
"#
    )
    .unwrap();

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.store.path.to_string_lossy(), "var/orders.json");
    let names: Vec<&str> = cfg.pipeline.names().collect();
    assert_eq!(names, vec!["cut", "weld", "ship"]);
    assert_eq!(cfg.pipeline.stages()[0].priority, Some(Priority::High));
    assert_eq!(cfg.pipeline.stages()[1].priority, None);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let cfg = load_or_default(dir.path().join("Shopflow.toml")).unwrap();
    assert_eq!(cfg.pipeline, PipelineTemplate::default());
    assert_eq!(cfg.store.path.to_string_lossy(), "data/orders.json");
}

#[test]
fn store_only_config_keeps_default_pipeline() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[store]\npath = \"x.json\"\n").unwrap();

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.pipeline.len(), 8);
}
