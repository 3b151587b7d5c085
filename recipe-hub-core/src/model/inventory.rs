use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{non_negative, today, Checker};
use crate::error::ValidationError;
use crate::input::Loose;

const DEFAULT_MIN_STOCK: f64 = 1.0;
const DEFAULT_MAX_STOCK: f64 = 10.0;

/// Inventory payload as submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InventoryInput {
    /// Honored by [`InventoryItem::new`]; repositories assign their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_id: Option<String>,
    pub user_id: Option<Loose>,
    pub ingredient_name: Option<Loose>,
    pub quantity: Option<Loose>,
    pub unit: Option<Loose>,
    pub min_stock: Option<Loose>,
    pub max_stock: Option<Loose>,
    pub cost: Option<Loose>,
    pub category: Option<Loose>,
    pub location: Option<Loose>,
    pub supplier: Option<Loose>,
    pub notes: Option<Loose>,
    pub purchase_date: Option<Loose>,
    #[serde(alias = "expirationDate")]
    pub expiry_date: Option<Loose>,
    #[serde(alias = "createdAt")]
    pub created_date: Option<Loose>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    pub inventory_id: String,
    pub user_id: Option<String>,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub min_stock: f64,
    pub max_stock: f64,
    pub cost: f64,
    pub category: String,
    pub location: String,
    pub supplier: String,
    pub notes: String,
    pub purchase_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub created_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    inventory_id: String,
    user_id: Option<String>,
    ingredient_name: String,
    quantity: f64,
    unit: String,
    min_stock: f64,
    max_stock: f64,
    cost: f64,
    category: String,
    location: String,
    supplier: String,
    notes: String,
    purchase_date: Option<NaiveDate>,
    expiry_date: Option<NaiveDate>,
    created_date: NaiveDate,
}

#[derive(Default)]
struct InventoryPatch {
    user_id: Option<String>,
    ingredient_name: Option<String>,
    quantity: Option<f64>,
    unit: Option<String>,
    min_stock: Option<f64>,
    max_stock: Option<f64>,
    cost: Option<f64>,
    category: Option<String>,
    location: Option<String>,
    supplier: Option<String>,
    notes: Option<String>,
    purchase_date: Option<Option<NaiveDate>>,
    expiry_date: Option<Option<NaiveDate>>,
    created_date: Option<NaiveDate>,
}

impl InventoryPatch {
    fn check(input: &InventoryInput, partial: bool) -> (Self, Checker) {
        let mut c = Checker::new(partial);
        let patch = InventoryPatch {
            user_id: c.optional_non_empty_text("userId", &input.user_id),
            ingredient_name: c.non_empty_text("ingredientName", &input.ingredient_name),
            quantity: c.number(
                "quantity",
                &input.quantity,
                true,
                non_negative,
                "quantity must be a non-negative number",
            ),
            unit: c.non_empty_text("unit", &input.unit),
            min_stock: c.number(
                "minStock",
                &input.min_stock,
                false,
                non_negative,
                "minStock must be a non-negative number",
            ),
            max_stock: c.number(
                "maxStock",
                &input.max_stock,
                false,
                non_negative,
                "maxStock must be a non-negative number",
            ),
            cost: c.number(
                "cost",
                &input.cost,
                false,
                non_negative,
                "cost must be a non-negative number",
            ),
            category: c.optional_text("category", &input.category),
            location: c.optional_text("location", &input.location),
            supplier: c.optional_text("supplier", &input.supplier),
            notes: c.optional_text("notes", &input.notes),
            purchase_date: c.clearable_date("purchaseDate", &input.purchase_date),
            expiry_date: c.clearable_date("expiryDate", &input.expiry_date),
            created_date: c.iso_date("createdDate", &input.created_date),
        };
        (patch, c)
    }
}

fn check_dates(c: &mut Checker, purchase: Option<NaiveDate>, expiry: Option<NaiveDate>) {
    if let (Some(purchase), Some(expiry)) = (purchase, expiry) {
        if expiry < purchase {
            c.fail("expiryDate", "expiryDate cannot be before purchaseDate");
        }
    }
}

impl InventoryItem {
    /// Validate a full payload. The id comes from `input.inventory_id`, or
    /// `I-00001` when absent.
    pub fn new(input: &InventoryInput) -> Result<Self, ValidationError> {
        let id = input
            .inventory_id
            .clone()
            .unwrap_or_else(|| "I-00001".to_string());
        Self::with_id(id, input)
    }

    pub(crate) fn with_id(inventory_id: String, input: &InventoryInput) -> Result<Self, ValidationError> {
        let (patch, mut c) = InventoryPatch::check(input, false);
        check_dates(
            &mut c,
            patch.purchase_date.flatten(),
            patch.expiry_date.flatten(),
        );
        c.finish()?;

        match patch {
            InventoryPatch {
                ingredient_name: Some(ingredient_name),
                quantity: Some(quantity),
                unit: Some(unit),
                ..
            } => Ok(InventoryItem {
                inventory_id,
                user_id: patch.user_id,
                ingredient_name,
                quantity,
                unit,
                min_stock: patch.min_stock.unwrap_or(DEFAULT_MIN_STOCK),
                max_stock: patch.max_stock.unwrap_or(DEFAULT_MAX_STOCK),
                cost: patch.cost.unwrap_or(0.0),
                category: patch.category.unwrap_or_default(),
                location: patch.location.unwrap_or_default(),
                supplier: patch.supplier.unwrap_or_default(),
                notes: patch.notes.unwrap_or_default(),
                purchase_date: patch.purchase_date.flatten(),
                expiry_date: patch.expiry_date.flatten(),
                created_date: patch.created_date.unwrap_or_else(today),
            }),
            _ => Err(ValidationError::single(
                "inventory",
                "Inventory payload is incomplete",
            )),
        }
    }

    /// Apply the supplied fields. The purchase/expiry ordering is checked
    /// against the merged result before anything changes.
    pub fn update(&mut self, patch: &InventoryInput) -> Result<(), ValidationError> {
        let (p, mut c) = InventoryPatch::check(patch, true);
        let purchase = p.purchase_date.unwrap_or(self.purchase_date);
        let expiry = p.expiry_date.unwrap_or(self.expiry_date);
        check_dates(&mut c, purchase, expiry);
        c.finish()?;

        if let Some(v) = p.user_id {
            self.user_id = Some(v);
        }
        if let Some(v) = p.ingredient_name {
            self.ingredient_name = v;
        }
        if let Some(v) = p.quantity {
            self.quantity = v;
        }
        if let Some(v) = p.unit {
            self.unit = v;
        }
        if let Some(v) = p.min_stock {
            self.min_stock = v;
        }
        if let Some(v) = p.max_stock {
            self.max_stock = v;
        }
        if let Some(v) = p.cost {
            self.cost = v;
        }
        if let Some(v) = p.category {
            self.category = v;
        }
        if let Some(v) = p.location {
            self.location = v;
        }
        if let Some(v) = p.supplier {
            self.supplier = v;
        }
        if let Some(v) = p.notes {
            self.notes = v;
        }
        self.purchase_date = purchase;
        self.expiry_date = expiry;
        if let Some(v) = p.created_date {
            self.created_date = v;
        }
        Ok(())
    }

    /// Remove `amount` from stock. Refuses (returns false) rather than going
    /// below zero.
    pub(crate) fn try_deduct(&mut self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 || amount > self.quantity {
            return false;
        }
        self.quantity -= amount;
        true
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    /// Stock value: quantity × unit cost.
    pub fn value(&self) -> f64 {
        self.quantity * self.cost
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            inventory_id: self.inventory_id.clone(),
            user_id: self.user_id.clone(),
            ingredient_name: self.ingredient_name.clone(),
            quantity: self.quantity,
            unit: self.unit.clone(),
            min_stock: self.min_stock,
            max_stock: self.max_stock,
            cost: self.cost,
            category: self.category.clone(),
            location: self.location.clone(),
            supplier: self.supplier.clone(),
            notes: self.notes.clone(),
            purchase_date: self.purchase_date,
            expiry_date: self.expiry_date,
            created_date: self.created_date,
        }
    }

    pub fn inventory_id(&self) -> &str {
        &self.inventory_id
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn ingredient_name(&self) -> &str {
        &self.ingredient_name
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn min_stock(&self) -> f64 {
        self.min_stock
    }

    pub fn max_stock(&self) -> f64 {
        self.max_stock
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn purchase_date(&self) -> Option<NaiveDate> {
        self.purchase_date
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spaghetti() -> InventoryInput {
        InventoryInput {
            ingredient_name: Some("Spaghetti".into()),
            quantity: Some(2.0.into()),
            unit: Some("kg".into()),
            min_stock: Some(1.0.into()),
            category: Some("Grains".into()),
            purchase_date: Some("2025-07-15".into()),
            expiry_date: Some("2025-12-15".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let item = InventoryItem::new(&spaghetti()).unwrap();
        assert_eq!(item.inventory_id(), "I-00001");
        assert_eq!(item.max_stock(), 10.0);
        assert_eq!(item.cost(), 0.0);
        assert_eq!(item.location(), "");
        assert_eq!(item.user_id(), None);
    }

    #[test]
    fn test_negative_quantity_names_quantity() {
        let input = InventoryInput {
            quantity: Some((-1.0).into()),
            ..spaghetti()
        };
        let err = InventoryItem::new(&input).unwrap_err();
        assert!(err.names_field("quantity"));
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let input = InventoryInput {
            quantity: Some("2.5".into()),
            cost: Some("12.99".into()),
            ..spaghetti()
        };
        let item = InventoryItem::new(&input).unwrap();
        assert_eq!(item.quantity(), 2.5);
        assert_eq!(item.cost(), 12.99);
    }

    #[test]
    fn test_expiry_before_purchase_rejected() {
        let input = InventoryInput {
            purchase_date: Some("2025-07-15".into()),
            expiry_date: Some("2025-07-01".into()),
            ..spaghetti()
        };
        assert!(InventoryItem::new(&input).unwrap_err().names_field("expiryDate"));
    }

    #[test]
    fn test_every_violation_reported() {
        let input = InventoryInput {
            ingredient_name: Some("".into()),
            quantity: Some("lots".into()),
            unit: None,
            cost: Some((-3.0).into()),
            ..Default::default()
        };
        let err = InventoryItem::new(&input).unwrap_err();
        assert!(err.names_field("ingredientName"));
        assert!(err.names_field("quantity"));
        assert!(err.names_field("unit"));
        assert!(err.names_field("cost"));
    }

    #[test]
    fn test_update_checks_merged_dates() {
        let mut item = InventoryItem::new(&spaghetti()).unwrap();
        let patch = InventoryInput {
            expiry_date: Some("2025-01-01".into()),
            ..Default::default()
        };
        assert!(item.update(&patch).unwrap_err().names_field("expiryDate"));
        assert_eq!(item.expiry_date(), NaiveDate::from_ymd_opt(2025, 12, 15));

        let clear = InventoryInput {
            expiry_date: Some("".into()),
            ..Default::default()
        };
        item.update(&clear).unwrap();
        assert_eq!(item.expiry_date(), None);
    }

    #[test]
    fn test_deduct_never_goes_negative() {
        let mut item = InventoryItem::new(&spaghetti()).unwrap();
        assert!(!item.try_deduct(2.5));
        assert_eq!(item.quantity(), 2.0);
        assert!(item.try_deduct(2.0));
        assert_eq!(item.quantity(), 0.0);
        assert!(!item.try_deduct(f64::NAN));
    }

    #[test]
    fn test_expiration_date_alias() {
        let input: InventoryInput = serde_json::from_str(
            r#"{"ingredientName": "Milk", "quantity": "1", "unit": "L", "expirationDate": "2025-08-01"}"#,
        )
        .unwrap();
        let item = InventoryItem::new(&input).unwrap();
        assert_eq!(item.expiry_date(), NaiveDate::from_ymd_opt(2025, 8, 1));
    }
}
