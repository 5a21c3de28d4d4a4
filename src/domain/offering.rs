use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Half-hour call slots offered by the scheduling form
pub const CALL_TIME_SLOTS: [&str; 18] = [
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM",
    "12:30 PM", "01:00 PM", "01:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM",
    "04:00 PM", "04:30 PM", "05:00 PM", "05:30 PM",
];

/// Services a caller can ask about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceOffering {
    Website,
    Chatbot,
    CallAgent,
    LeadGeneration,
    IosApp,
    AndroidApp,
    MobileApps,
    Custom,
    Consultation,
}

impl ServiceOffering {
    pub const ALL: [ServiceOffering; 9] = [
        Self::Website,
        Self::Chatbot,
        Self::CallAgent,
        Self::LeadGeneration,
        Self::IosApp,
        Self::AndroidApp,
        Self::MobileApps,
        Self::Custom,
        Self::Consultation,
    ];

    /// Human readable name shown in the service picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Website => "AI-Powered Website",
            Self::Chatbot => "Smart Chatbot",
            Self::CallAgent => "AI Call Agent",
            Self::LeadGeneration => "Lead Generation System",
            Self::IosApp => "Build iOS App",
            Self::AndroidApp => "Build Android App",
            Self::MobileApps => "Build iOS & Android Apps",
            Self::Custom => "Custom AI Solution",
            Self::Consultation => "Consultation Only",
        }
    }
}

impl FromStr for ServiceOffering {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|offering| offering.as_ref() == value)
            .ok_or_else(|| format!("\"{}\" is not a known service", value))
    }
}

impl AsRef<str> for ServiceOffering {
    fn as_ref(&self) -> &str {
        match self {
            Self::Website => "website",
            Self::Chatbot => "chatbot",
            Self::CallAgent => "call-agent",
            Self::LeadGeneration => "lead-generation",
            Self::IosApp => "ios-app",
            Self::AndroidApp => "android-app",
            Self::MobileApps => "mobile-apps",
            Self::Custom => "custom",
            Self::Consultation => "consultation",
        }
    }
}
