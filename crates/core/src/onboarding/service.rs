//! The closed catalogue of services a client can ask for.

use serde::{Deserialize, Serialize};

/// A service offered during onboarding.
///
/// The serialized form is the human-facing label (`"UI/UX"`, `"Web Dev"`, ...),
/// which is also what the form and the external endpoint exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "UI/UX")]
    UiUx,
    #[serde(rename = "Branding")]
    Branding,
    #[serde(rename = "Web Dev")]
    WebDev,
    #[serde(rename = "Mobile App")]
    MobileApp,
}

impl Service {
    /// Every service, in catalogue order.
    pub const ALL: [Service; 4] = [
        Service::UiUx,
        Service::Branding,
        Service::WebDev,
        Service::MobileApp,
    ];

    /// Wire label for this service.
    pub fn as_str(self) -> &'static str {
        match self {
            Service::UiUx => "UI/UX",
            Service::Branding => "Branding",
            Service::WebDev => "Web Dev",
            Service::MobileApp => "Mobile App",
        }
    }

    /// Look up a service by its exact wire label (case-sensitive).
    pub fn from_wire(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// `'UI/UX' | 'Branding' | 'Web Dev' | 'Mobile App'`, as used in
    /// rejection messages.
    pub fn expected_list() -> String {
        Self::ALL
            .iter()
            .map(|s| format!("'{}'", s.as_str()))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
