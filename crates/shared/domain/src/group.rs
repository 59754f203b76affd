use crate::domain::Domain;
use serde::Serialize;
use std::fmt;

/// All loaded names that share one apex, destined for a single certificate.
///
/// `names` keeps first-seen order and never contains a name that was not in the
/// input: a list with only `www.solo.net` yields the group `solo.net` with the
/// single name `www.solo.net`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainGroup {
    apex: String,
    names: Vec<Domain>,
}

impl DomainGroup {
    /// Starts a group from its first-seen member.
    #[must_use]
    pub fn new(first: Domain) -> Self {
        Self { apex: first.apex().to_owned(), names: vec![first] }
    }

    /// Appends `domain` unless it is already present or belongs to another apex.
    ///
    /// Returns `true` when the name was added.
    pub fn absorb(&mut self, domain: Domain) -> bool {
        if domain.apex() != self.apex || self.names.contains(&domain) {
            return false;
        }
        self.names.push(domain);
        true
    }

    #[must_use]
    pub fn apex(&self) -> &str {
        &self.apex
    }

    /// Members in first-seen order; never empty.
    #[must_use]
    pub fn names(&self) -> &[Domain] {
        &self.names
    }
}

impl fmt::Display for DomainGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=>", self.apex)?;
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Domain {
        Domain::parse(s).unwrap()
    }

    #[test]
    fn www_first_group_keeps_first_seen_order() {
        let mut group = DomainGroup::new(d("www.example.com"));
        assert!(group.absorb(d("example.com")));

        assert_eq!(group.apex(), "example.com");
        assert_eq!(group.names(), &[d("www.example.com"), d("example.com")]);
        assert_eq!(group.to_string(), "example.com=>www.example.com,example.com");
    }

    #[test]
    fn duplicates_and_foreign_names_are_ignored() {
        let mut group = DomainGroup::new(d("example.com"));
        assert!(!group.absorb(d("example.com")));
        assert!(!group.absorb(d("other.org")));
        assert_eq!(group.names().len(), 1);
    }
}
