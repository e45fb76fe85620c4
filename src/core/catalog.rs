// email-icons - core/catalog.rs
//
// The fixed table of hero icons used by the transactional email templates,
// and the lookups the templates perform against it.

use crate::core::model::IconDescriptor;
use crate::util::constants;

/// Every hero icon referenced by the email templates, in generation order.
pub const HERO_ICONS: &[IconDescriptor] = &[
    icon("hero_lock", "auth"),
    icon("hero_welcome", "lifecycle"),
    icon("hero_receipt", "billing"),
    icon("hero_invite", "team"),
    icon("hero_shipping", "orders"),
    icon("hero_alert", "system"),
    icon("hero_billing_invoice", "billing"),
    icon("hero_billing_failed", "billing"),
    icon("hero_subscription", "billing"),
    icon("hero_order_confirm", "orders"),
    icon("hero_maintenance", "system"),
];

const fn icon(name: &'static str, category: &'static str) -> IconDescriptor {
    IconDescriptor { name, category }
}

/// Look up a hero icon by name.
pub fn find(name: &str) -> Option<&'static IconDescriptor> {
    HERO_ICONS.iter().find(|d| d.name == name)
}

/// Category directory for `name`; names outside the catalog are filed under
/// the `system` category, matching what the templates link to.
pub fn category_for(name: &str) -> &'static str {
    find(name).map_or(constants::DEFAULT_CATEGORY, |d| d.category)
}

/// Public URL the email templates use for the light SVG of `name`:
/// `<base_url>/email-icons/hero/<category>/<name>.svg`.
pub fn hero_icon_url(base_url: &str, name: &str) -> String {
    format!(
        "{}/{}/{}/{}{}",
        base_url.trim_end_matches('/'),
        constants::HERO_URL_PREFIX,
        category_for(name),
        name,
        constants::SVG_SUFFIX
    )
}
