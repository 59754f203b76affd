use anyhow::Result;
use fweb_domain::config::ProjectLayout;
use fweb_issuance::grouping::group_by_apex;
use fweb_issuance::loader::load_domain_list;

/// Prints one `apex=>name,name` line per group.
pub fn check(layout: &ProjectLayout) -> Result<()> {
    let list = load_domain_list(&layout.domain_list())?;
    let groups = group_by_apex(list.domains())?;

    for group in &groups {
        println!("{group}");
    }
    if !list.rejected().is_empty() {
        eprintln!("{} invalid line(s) ignored: {}", list.rejected().len(), list.rejected().join(", "));
    }
    Ok(())
}
