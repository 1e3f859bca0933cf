use std::io::Write;

use tempfile::NamedTempFile;
use shopflow::config::load_and_validate;
use shopflow::errors::ShopflowError;

#[test]
fn duplicate_department_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[pipeline.department]]
name = "cut"

[[pipeline.department]]
name = "cut"
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(ShopflowError::ConfigError(msg)) => {
            assert!(msg.contains("cut"));
            assert!(msg.contains("more than once"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_priority_is_a_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[[pipeline.department]]
name = "cut"
priority = "urgent"
"#
    )
    .unwrap();

    match load_and_validate(file.path()) {
        Err(ShopflowError::TomlError(_)) => {}
        Err(e) => panic!("Expected TomlError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn empty_pipeline_section_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[pipeline]\n").unwrap();

    assert!(matches!(
        load_and_validate(file.path()),
        Err(ShopflowError::ConfigError(_))
    ));
}
