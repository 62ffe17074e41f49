//! Domain and zone-ID filters applied to the zones seen on the appliance.

use regex::Regex;

fn normalize_domain(domain: &str) -> String {
    domain.trim().trim_end_matches('.').to_ascii_lowercase()
}

fn prepare_filters(filters: &[String]) -> Vec<String> {
    filters
        .iter()
        .map(|f| normalize_domain(f))
        .filter(|f| !f.is_empty())
        .collect()
}

// A leading dot only matches strict subdomains. Otherwise a filter with the
// same label count must match exactly, and a shorter one matches as suffix.
fn match_filter(filters: &[String], domain: &str, empty_value: bool) -> bool {
    if filters.is_empty() {
        return empty_value;
    }

    let stripped = normalize_domain(domain);
    filters.iter().any(|filter| {
        if filter.starts_with('.') {
            stripped.ends_with(filter.as_str())
        } else if stripped.matches('.').count() == filter.matches('.').count() {
            stripped == *filter
        } else {
            stripped.ends_with(&format!(".{filter}"))
        }
    })
}

#[derive(Debug, Clone, Default)]
pub struct DomainFilter {
    filters: Vec<String>,
    exclude: Vec<String>,
    regex: Option<Regex>,
    regex_exclusion: Option<Regex>,
}

impl DomainFilter {
    pub fn new(filters: &[String]) -> Self {
        Self::with_exclusions(filters, &[])
    }

    pub fn with_exclusions(filters: &[String], exclude: &[String]) -> Self {
        Self {
            filters: prepare_filters(filters),
            exclude: prepare_filters(exclude),
            regex: None,
            regex_exclusion: None,
        }
    }

    /// When either regex is set the plain filter lists are ignored.
    pub fn with_regex(regex: Option<Regex>, regex_exclusion: Option<Regex>) -> Self {
        Self {
            filters: Vec::new(),
            exclude: Vec::new(),
            regex: regex.filter(|r| !r.as_str().is_empty()),
            regex_exclusion: regex_exclusion.filter(|r| !r.as_str().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.regex.is_some()
            || self.regex_exclusion.is_some()
            || !self.filters.is_empty()
            || !self.exclude.is_empty()
    }

    pub fn matches(&self, domain: &str) -> bool {
        if self.regex.is_some() || self.regex_exclusion.is_some() {
            return self.match_regex(domain);
        }
        match_filter(&self.filters, domain, true) && !match_filter(&self.exclude, domain, false)
    }

    fn match_regex(&self, domain: &str) -> bool {
        let stripped = normalize_domain(domain);
        if let Some(exclusion) = &self.regex_exclusion {
            return !exclusion.is_match(&stripped);
        }
        self.regex.as_ref().is_none_or(|regex| regex.is_match(&stripped))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ZoneIdFilter {
    zone_ids: Vec<String>,
}

impl ZoneIdFilter {
    pub fn new(zone_ids: &[String]) -> Self {
        Self {
            zone_ids: zone_ids
                .iter()
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty())
                .collect(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.zone_ids.is_empty()
    }

    pub fn matches(&self, zone_id: &str) -> bool {
        if self.zone_ids.is_empty() {
            return true;
        }
        self.zone_ids.iter().any(|id| zone_id.ends_with(id.as_str()))
    }
}
