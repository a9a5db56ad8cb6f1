use super::text::escape_html;
use crate::domain::SubscriptionConfig;

/// Render the legal block: disclaimer, copyright (with `{company}`
/// substitution), address, then the unsubscribe/view-online anchor pair. The
/// caller only invokes this when a subscription config is present.
pub fn render_subscription(
    subscription: &SubscriptionConfig,
    company_name: Option<&str>,
) -> String {
    let mut parts = vec![
        "<tr>".to_string(),
        format!(
            "<td align=\"center\" style=\"padding: 10px 20px 30px 20px; font-size: 12px; line-height: 18px; color: {};\">",
            subscription.text_color
        ),
    ];

    if let Some(disclaimer) = non_blank(&subscription.disclaimer_text) {
        parts.push(format!("{}<br>", escape_html(disclaimer)));
    }

    if let Some(copyright) = non_blank(&subscription.copyright_text) {
        let substituted = copyright.replace("{company}", company_name.unwrap_or(""));
        parts.push(format!("{}<br>", escape_html(substituted.trim())));
    }

    if let Some(address) = non_blank(&subscription.address) {
        parts.push(format!("{}<br><br>", escape_html(address)));
    }

    parts.push(format!(
        "<a href=\"{}\" target=\"_blank\" style=\"color: {}; text-decoration: underline;\">Unsubscribe</a>",
        escape_html(subscription.unsubscribe_url.trim()),
        subscription.text_color
    ));
    parts.push(format!(
        " &bull; <a href=\"{}\" target=\"_blank\" style=\"color: {}; text-decoration: underline;\">View Online</a>",
        escape_html(subscription.view_online_url.trim()),
        subscription.text_color
    ));

    parts.push("</td>".to_string());
    parts.push("</tr>".to_string());
    parts.join("\n")
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
