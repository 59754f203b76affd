use fweb_kernel::config::{ConfigSources, load_from};
use std::fs;
use tempfile::tempdir;

fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[test]
fn no_sources_yield_defaults() {
    let cfg = load_from(ConfigSources::default()).expect("defaults load");
    assert!(cfg.staging);
    assert!(!cfg.production);
    assert!(cfg.check_a_record);
}

#[test]
fn numeric_switches_are_understood() {
    let sources = ConfigSources {
        process: vars(&[("DO_STAGING", "0"), ("DO_PROD", "1"), ("CHECK_AAAA_RECORD", "1")]),
        ..ConfigSources::default()
    };

    let cfg = load_from(sources).expect("config loads");
    assert!(!cfg.staging);
    assert!(cfg.production);
    assert!(cfg.check_aaaa_record);
}

#[test]
fn process_environment_beats_env_file() {
    let sources = ConfigSources {
        env_file: vars(&[("CERTBOT_EMAIL", "file@example.com"), ("FORCE_PROD", "1")]),
        process: vars(&[("CERTBOT_EMAIL", "proc@example.com")]),
        ..ConfigSources::default()
    };

    let cfg = load_from(sources).expect("config loads");
    assert_eq!(cfg.email.as_deref(), Some("proc@example.com"));
    assert!(cfg.force_production, ".env values still apply when not overridden");
}

#[test]
fn empty_variables_count_as_unset() {
    let sources =
        ConfigSources { process: vars(&[("CHECK_A_RECORD", "")]), ..ConfigSources::default() };

    let cfg = load_from(sources).expect("config loads");
    assert!(cfg.check_a_record);
}

#[test]
fn settings_file_is_the_lowest_layer() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let file = dir.path().join("front-web.toml");
    fs::write(&file, "do_prod = true\ncheck_a_record = false\ncertbot_email = \"toml@example.com\"\n")?;

    let sources = ConfigSources {
        file: Some(file),
        env_file: vars(&[("CHECK_A_RECORD", "1")]),
        ..ConfigSources::default()
    };

    let cfg = load_from(sources)?;
    assert!(cfg.production);
    assert!(cfg.check_a_record, ".env overrides the settings file");
    assert_eq!(cfg.email.as_deref(), Some("toml@example.com"));
    Ok(())
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let sources = ConfigSources {
        file: Some("/definitely/not/here/front-web.toml".into()),
        ..ConfigSources::default()
    };
    assert!(load_from(sources).is_ok());
}

#[test]
fn garbage_boolean_is_reported() {
    let sources =
        ConfigSources { process: vars(&[("DO_PROD", "maybe")]), ..ConfigSources::default() };
    let err = load_from(sources).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize"), "got: {err}");
}
