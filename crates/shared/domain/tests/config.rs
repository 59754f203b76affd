use fweb_domain::config::{ProjectLayout, RunConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn run_config_defaults_favour_safety() {
    let cfg = RunConfig::default();
    assert!(cfg.staging);
    assert!(!cfg.production);
    assert!(!cfg.force_production);
    assert!(cfg.check_a_record);
    assert!(!cfg.check_aaaa_record);
    assert!(cfg.email.is_none());
}

#[test]
fn run_config_reads_deployment_variable_names() {
    let raw = json!({
        "certbot_email": "ops@example.com",
        "do_staging": false,
        "do_prod": true,
        "force_prod": true,
        "check_aaaa_record": true
    });

    let cfg: RunConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.email.as_deref(), Some("ops@example.com"));
    assert!(!cfg.staging);
    assert!(cfg.production);
    assert!(cfg.force_production);
    assert!(cfg.check_a_record, "missing keys keep their defaults");
    assert!(cfg.check_aaaa_record);
}

#[test]
fn blank_email_means_no_email() {
    let cfg: RunConfig = serde_json::from_value(json!({ "certbot_email": "  " })).unwrap();
    assert!(cfg.email.is_none());
}

#[test]
fn layout_paths_hang_off_the_root() {
    let layout = ProjectLayout::new("/srv/front");
    assert_eq!(layout.domain_list(), PathBuf::from("/srv/front/app/domain.list"));
    assert_eq!(layout.proxy_pass(), PathBuf::from("/srv/front/app/proxy_pass"));
    assert_eq!(layout.live_dir(), PathBuf::from("/srv/front/data/certbot/conf/live"));
    assert_eq!(layout.bootstrap_dirs().len(), 4);
    assert!(layout.bootstrap_dirs().contains(&PathBuf::from("/srv/front/data/certbot/www")));
}
