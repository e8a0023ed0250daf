//! Static knowledge about report metric columns: display names and units.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Column every report is sorted by when nothing else is specified.
pub const DEFAULT_SORT_COLUMN: &str = "nb_visits";

pub const DEFAULT_CURRENCY: &str = "USD";

const DEFAULT_TRANSLATIONS: &[(&str, &str)] = &[
    ("label", "Label"),
    ("nb_visits", "Visits"),
    ("nb_uniq_visitors", "Unique visitors"),
    ("nb_actions", "Actions"),
    ("max_actions", "Maximum actions in one visit"),
    ("sum_visit_length", "Total time spent by visitors"),
    ("bounce_count", "Bounces"),
    ("nb_visits_converted", "Visits converted"),
    ("nb_actions_per_visit", "Actions per Visit"),
    ("avg_time_on_site", "Avg. Visit Duration"),
    ("bounce_rate", "Bounce Rate"),
    ("conversion_rate", "Conversion Rate"),
    ("nb_conversions", "Conversions"),
    ("revenue", "Revenue"),
];

const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("USD", "$"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("JPY", "¥"),
    ("CNY", "¥"),
    ("INR", "₹"),
    ("KRW", "₩"),
    ("RUB", "₽"),
    ("BRL", "R$"),
    ("CAD", "$"),
    ("AUD", "$"),
    ("NZD", "$"),
    ("CHF", "CHF"),
    ("SEK", "kr"),
    ("NOK", "kr"),
    ("DKK", "kr"),
    ("PLN", "zł"),
];

/// Built-in display name of a well-known metric column.
#[must_use]
pub fn default_translation(column: &str) -> Option<&'static str> {
    DEFAULT_TRANSLATIONS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, translation)| *translation)
}

/// Symbol for an ISO currency code; unknown codes are returned verbatim.
#[must_use]
pub fn currency_symbol(code: &str) -> &str {
    CURRENCY_SYMBOLS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(code))
        .map_or(code, |(_, symbol)| *symbol)
}

/// Currency configured per website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteCurrencies {
    #[serde(default = "default_currency")]
    default_currency: String,
    #[serde(default)]
    sites: IndexMap<u32, String>,
}

impl Default for SiteCurrencies {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            sites: IndexMap::new(),
        }
    }
}

impl SiteCurrencies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = code.into();
        self
    }

    #[must_use]
    pub fn with_site(mut self, site_id: u32, code: impl Into<String>) -> Self {
        self.sites.insert(site_id, code.into());
        self
    }

    #[must_use]
    pub fn currency(&self, site_id: Option<u32>) -> &str {
        site_id
            .and_then(|id| self.sites.get(&id))
            .map_or(self.default_currency.as_str(), String::as_str)
    }

    #[must_use]
    pub fn symbol(&self, site_id: Option<u32>) -> &str {
        currency_symbol(self.currency(site_id))
    }
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_owned()
}

/// Unit of a metric column for a given site, derived from the column name.
///
/// Returns `None` for plain counts.
#[must_use]
pub fn metric_unit(column: &str, site_id: Option<u32>, currencies: &SiteCurrencies) -> Option<String> {
    if column.contains("_rate") {
        return Some("%".to_owned());
    }
    if column.contains("revenue") {
        return Some(currencies.symbol(site_id).to_owned());
    }
    if column.contains("_time_") {
        return Some("s".to_owned());
    }
    None
}
