use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Mail clients with import instructions, in tab order.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
pub enum MailClient {
    #[default]
    #[strum(to_string = "Gmail", serialize = "gmail")]
    Gmail,
    #[serde(rename = "macos")]
    #[strum(to_string = "macOS Mail", serialize = "macos")]
    MacOsMail,
    #[serde(rename = "ios")]
    #[strum(to_string = "iOS Mail", serialize = "ios")]
    IosMail,
}

impl MailClient {
    /// Short key used for element ids and query strings.
    pub fn key(&self) -> &'static str {
        match self {
            MailClient::Gmail => "gmail",
            MailClient::MacOsMail => "macos",
            MailClient::IosMail => "ios",
        }
    }

    pub fn steps(&self) -> &'static [&'static str] {
        match self {
            MailClient::Gmail => &[
                "Click the gear icon in Gmail and select \"See all settings\"",
                "Scroll down to the \"Signature\" section",
                "Click \"Create new\" to add a new signature",
                "In the signature editor, click the formatting toolbar",
                "Paste your copied signature (Cmd+V or Ctrl+V)",
                "The signature should appear with formatting intact",
                "Scroll down and click \"Save Changes\"",
            ],
            MailClient::MacOsMail => &[
                "Open Mail and go to Mail → Settings (or Preferences)",
                "Click the \"Signatures\" tab",
                "Select an email account on the left",
                "Click the + button to create a new signature",
                "Give your signature a name",
                "In the preview pane on the right, paste your signature",
                "Drag the new signature to your account to assign it",
                "Close Settings - your signature is saved automatically",
            ],
            MailClient::IosMail => &[
                "Open the Settings app on your iPhone or iPad",
                "Scroll down and tap \"Mail\"",
                "Tap \"Signature\" near the bottom",
                "If you have multiple accounts, choose \"Per Account\" or \"All Accounts\"",
                "Tap in the text field and clear any existing signature",
                "Paste your signature (tap and hold, then Paste)",
                "Note: iOS Mail has limited HTML support - formatting may vary",
                "Tap back to save",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn tabs_are_in_order() {
        let labels: Vec<String> = MailClient::iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["Gmail", "macOS Mail", "iOS Mail"]);
    }

    #[test]
    fn keys_parse_back() {
        for client in MailClient::iter() {
            assert_eq!(MailClient::from_str(client.key()).unwrap(), client);
            assert!(!client.steps().is_empty());
        }
    }
}
