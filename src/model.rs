// Shared data model used across state, input handling, and rendering.
// - Defines the closed set of portal sections and their navigation order.
// - Defines the cookie disclosure record produced by the disclosure fetch.
// - Defines the view state owned by the shell (active section, modals, fetch status).
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Cookies,
    Rights,
    Policies,
    Security,
    Transparency,
}

impl SectionId {
    pub const ALL: [Self; 5] = [
        Self::Cookies,
        Self::Rights,
        Self::Policies,
        Self::Security,
        Self::Transparency,
    ];

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = self.index();
        if index == 0 {
            Self::ALL[Self::ALL.len() - 1]
        } else {
            Self::ALL[index - 1]
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Cookies => 0,
            Self::Rights => 1,
            Self::Policies => 2,
            Self::Security => 3,
            Self::Transparency => 4,
        }
    }

    pub fn number(self) -> usize {
        self.index() + 1
    }

    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Cookies => "cookies",
            Self::Rights => "rights",
            Self::Policies => "policies",
            Self::Security => "security",
            Self::Transparency => "transparency",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Cookies => "Cookie Management",
            Self::Rights => "Your Data Rights",
            Self::Policies => "Privacy Documents",
            Self::Security => "Security Measures",
            Self::Transparency => "Transparency Reports",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Cookies => "Control your cookie preferences and understand how we use them.",
            Self::Rights => "Understand and exercise your data protection rights.",
            Self::Policies => "Access our privacy policy and related documentation.",
            Self::Security => "Learn about how we protect your data.",
            Self::Transparency => "View our latest privacy and security metrics.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Cookies => "◉",
            Self::Rights => "☺",
            Self::Policies => "≡",
            Self::Security => "▣",
            Self::Transparency => "↗",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown section id '{0}' (expected one of: cookies, rights, policies, security, transparency)")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.id() == value.trim())
            .ok_or_else(|| UnknownSection(value.to_string()))
    }
}

/// One tracking technology as listed by the disclosure endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieDisclosure {
    pub name: String,
    pub classification: String,
    pub purpose: String,
    pub expiry: String,
    pub provider: String,
}

/// Everything the render pass reads. Mutated only by the shell's event
/// handlers and by fetch completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: SectionId,
    pub uuid_modal_open: bool,
    pub disclosure_modal_open: bool,
    pub uuid_value: String,
    pub disclosures: Vec<CookieDisclosure>,
    pub fetch_in_flight: bool,
    pub fetch_error: Option<String>,
}

impl ViewState {
    pub fn new(active_section: SectionId) -> Self {
        Self {
            active_section,
            uuid_modal_open: false,
            disclosure_modal_open: false,
            uuid_value: String::new(),
            disclosures: Vec::new(),
            fetch_in_flight: false,
            fetch_error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_navigation_wraps_in_both_directions() {
        assert_eq!(SectionId::Transparency.next(), SectionId::Cookies);
        assert_eq!(SectionId::Cookies.previous(), SectionId::Transparency);
        assert_eq!(SectionId::Rights.next(), SectionId::Policies);
        assert_eq!(SectionId::Policies.previous(), SectionId::Rights);
    }

    #[test]
    fn section_numbers_are_one_based() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_number(section.number()), Some(section));
        }
        assert_eq!(SectionId::from_number(0), None);
        assert_eq!(SectionId::from_number(6), None);
    }

    #[test]
    fn section_ids_parse_back_to_themselves() {
        for section in SectionId::ALL {
            assert_eq!(section.id().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn unknown_section_id_is_rejected() {
        let err = "subprocessors".parse::<SectionId>().unwrap_err();
        assert_eq!(err, UnknownSection("subprocessors".to_string()));
        assert!(err.to_string().contains("subprocessors"));
    }

    #[test]
    fn new_view_state_has_everything_closed() {
        let view = ViewState::new(SectionId::Security);
        assert_eq!(view.active_section, SectionId::Security);
        assert!(!view.uuid_modal_open);
        assert!(!view.disclosure_modal_open);
        assert!(view.disclosures.is_empty());
        assert!(!view.fetch_in_flight);
        assert_eq!(view.fetch_error, None);
    }
}
