//! Stock alerts and inventory analytics.
//!
//! Everything here takes `today` explicitly so results are reproducible.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::decimal::two_decimals;
use crate::model::InventoryItem;

/// Items expiring within this many days count as "expiring" in analytics.
pub const EXPIRING_WINDOW_DAYS: i64 = 30;
/// Items expiring within this many days raise an alert.
pub const EXPIRING_SOON_DAYS: i64 = 7;
const URGENT_DAYS: i64 = 3;
const TOP_VALUE_ITEMS: usize = 5;

/// Alerts sort in declaration order: critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum AlertKind {
    #[serde(rename_all = "camelCase")]
    LowStock {
        current_quantity: f64,
        min_stock: f64,
        recommended_order: f64,
    },
    #[serde(rename_all = "camelCase")]
    Expired {
        expired_days_ago: i64,
    },
    #[serde(rename_all = "camelCase")]
    ExpiringSoon {
        expiry_date: NaiveDate,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Alert {
    #[serde(flatten)]
    pub kind: AlertKind,
    pub severity: Severity,
    pub item: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    pub total_alerts: usize,
    pub critical: usize,
    pub warnings: usize,
    pub alerts: Vec<Alert>,
}

/// Whole days from `today` to `expiry`; negative once expired.
pub fn days_until(expiry: NaiveDate, today: NaiveDate) -> i64 {
    (expiry - today).num_days()
}

/// Expires today or within [`EXPIRING_WINDOW_DAYS`].
pub fn is_expiring(item: &InventoryItem, today: NaiveDate) -> bool {
    item.expiry_date()
        .map(|d| days_until(d, today))
        .is_some_and(|days| (0..=EXPIRING_WINDOW_DAYS).contains(&days))
}

fn low_stock_alert(item: &InventoryItem) -> Alert {
    let out = item.quantity() == 0.0;
    Alert {
        kind: AlertKind::LowStock {
            current_quantity: item.quantity(),
            min_stock: item.min_stock(),
            recommended_order: item.max_stock() - item.quantity(),
        },
        severity: if out { Severity::Critical } else { Severity::Warning },
        item: item.ingredient_name().to_string(),
        message: format!(
            "{} is {}",
            item.ingredient_name(),
            if out { "out of stock" } else { "running low" }
        ),
    }
}

fn expiry_alert(item: &InventoryItem, expiry: NaiveDate, today: NaiveDate) -> Option<Alert> {
    let days = days_until(expiry, today);
    let name = item.ingredient_name().to_string();
    if days < 0 {
        Some(Alert {
            kind: AlertKind::Expired {
                expired_days_ago: -days,
            },
            severity: Severity::Critical,
            message: format!("{name} has EXPIRED"),
            item: name,
        })
    } else if days <= EXPIRING_SOON_DAYS {
        Some(Alert {
            kind: AlertKind::ExpiringSoon { expiry_date: expiry },
            severity: if days <= URGENT_DAYS {
                Severity::Warning
            } else {
                Severity::Info
            },
            message: format!("{name} expires in {days} days"),
            item: name,
        })
    } else {
        None
    }
}

/// Low-stock alerts for every item, then expiry alerts, ordered by severity.
/// Items keep their relative order within a severity.
pub fn alerts(items: &[InventoryItem], today: NaiveDate) -> AlertReport {
    let mut alerts: Vec<Alert> = items
        .iter()
        .filter(|item| item.is_low_stock())
        .map(low_stock_alert)
        .collect();
    alerts.extend(items.iter().filter_map(|item| {
        item.expiry_date()
            .and_then(|expiry| expiry_alert(item, expiry, today))
    }));
    alerts.sort_by_key(|a| a.severity);

    AlertReport {
        total_alerts: alerts.len(),
        critical: alerts.iter().filter(|a| a.severity == Severity::Critical).count(),
        warnings: alerts.iter().filter(|a| a.severity == Severity::Warning).count(),
        alerts,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_items: usize,
    #[serde(serialize_with = "two_decimals")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "64.95"))]
    pub total_value: f64,
    #[serde(serialize_with = "two_decimals")]
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "12.99"))]
    pub average_item_value: f64,
    pub low_stock_items: usize,
    pub expiring_items: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryStats {
    pub count: usize,
    pub value: f64,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LocationStats {
    pub count: usize,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ItemValue {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub overview: Overview,
    pub category_breakdown: BTreeMap<String, CategoryStats>,
    pub location_breakdown: BTreeMap<String, LocationStats>,
    pub top_value_items: Vec<ItemValue>,
}

pub fn analytics(items: &[InventoryItem], today: NaiveDate) -> Analytics {
    let total_value: f64 = items.iter().map(InventoryItem::value).sum();

    let mut category_breakdown: BTreeMap<String, CategoryStats> = BTreeMap::new();
    let mut location_breakdown: BTreeMap<String, LocationStats> = BTreeMap::new();
    for item in items {
        let category = category_breakdown
            .entry(item.category().to_string())
            .or_default();
        category.count += 1;
        category.value += item.value();
        category.items.push(item.ingredient_name().to_string());

        let location = location_breakdown
            .entry(item.location().to_string())
            .or_default();
        location.count += 1;
        location.value += item.value();
    }

    let mut top_value_items: Vec<ItemValue> = items
        .iter()
        .map(|item| ItemValue {
            name: item.ingredient_name().to_string(),
            value: item.value(),
        })
        .collect();
    top_value_items.sort_by(|a, b| b.value.total_cmp(&a.value));
    top_value_items.truncate(TOP_VALUE_ITEMS);

    Analytics {
        overview: Overview {
            total_items: items.len(),
            total_value,
            average_item_value: if items.is_empty() {
                0.0
            } else {
                total_value / items.len() as f64
            },
            low_stock_items: items.iter().filter(|i| i.is_low_stock()).count(),
            expiring_items: items.iter().filter(|i| is_expiring(i, today)).count(),
        },
        category_breakdown,
        location_breakdown,
        top_value_items,
    }
}
