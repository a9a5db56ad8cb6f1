/// The fixed legal block at the bottom of the document. Its presence on the
/// document is the inclusion switch; no field here toggles the whole block.
#[derive(Debug, Clone)]
pub struct SubscriptionConfig {
    pub disclaimer_text: Option<String>,
    /// Supports a `{company}` placeholder, substituted with the footer's
    /// company name at render time.
    pub copyright_text: Option<String>,
    pub address: Option<String>,
    pub unsubscribe_url: String,
    pub view_online_url: String,
    pub text_color: String,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            disclaimer_text: None,
            copyright_text: None,
            address: None,
            unsubscribe_url: "#UNSUBSCRIBE_LINK".to_string(),
            view_online_url: "#VIEW_ONLINE_LINK".to_string(),
            text_color: "#999999".to_string(),
        }
    }
}
