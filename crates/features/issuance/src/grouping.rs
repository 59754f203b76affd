use crate::error::IssuanceError;
use fweb_domain::{Domain, DomainGroup};
use fxhash::FxHashMap;
use tracing::debug;

/// Groups domains by apex.
///
/// Members keep first-seen order; groups come back sorted by apex. A
/// `www.` name without its bare form yields a group holding only the `www.`
/// name.
///
/// # Errors
/// [`IssuanceError::NoGroups`] for an empty input.
pub fn group_by_apex(domains: &[Domain]) -> Result<Vec<DomainGroup>, IssuanceError> {
    let mut by_apex: FxHashMap<&str, DomainGroup> = FxHashMap::default();

    for domain in domains {
        by_apex
            .entry(domain.apex())
            .and_modify(|group| {
                group.absorb(domain.clone());
            })
            .or_insert_with(|| DomainGroup::new(domain.clone()));
    }

    let mut groups: Vec<DomainGroup> = by_apex.into_values().collect();
    groups.sort_by(|a, b| a.apex().cmp(b.apex()));

    if groups.is_empty() {
        return Err(IssuanceError::NoGroups {
            message: "the domain list produced no apex groups".into(),
            context: None,
        });
    }

    for group in &groups {
        debug!(group = %group, names = group.names().len(), "Grouped");
    }
    Ok(groups)
}
