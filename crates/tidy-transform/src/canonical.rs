//! Business-role lookup over cleaned column names.
//!
//! Downstream consumers (dashboards, KPI reports) need to find "the order
//! date column" without a schema. Each role has an ordered list of
//! candidate names and the first one present in the table wins.

use std::collections::BTreeMap;
use std::fmt;

use tidy_model::{Column, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalRole {
    OrderId,
    OrderDate,
    Product,
    Quantity,
    UnitPrice,
    Discount,
    Tax,
    ShippingCost,
    TotalPrice,
}

impl CanonicalRole {
    pub const ALL: [CanonicalRole; 9] = [
        CanonicalRole::OrderId,
        CanonicalRole::OrderDate,
        CanonicalRole::Product,
        CanonicalRole::Quantity,
        CanonicalRole::UnitPrice,
        CanonicalRole::Discount,
        CanonicalRole::Tax,
        CanonicalRole::ShippingCost,
        CanonicalRole::TotalPrice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalRole::OrderId => "order_id",
            CanonicalRole::OrderDate => "order_date",
            CanonicalRole::Product => "product",
            CanonicalRole::Quantity => "quantity",
            CanonicalRole::UnitPrice => "unit_price",
            CanonicalRole::Discount => "discount",
            CanonicalRole::Tax => "tax",
            CanonicalRole::ShippingCost => "shipping_cost",
            CanonicalRole::TotalPrice => "total_price",
        }
    }

    /// Candidate column names, most specific first.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            CanonicalRole::OrderId => &["order_id", "orderid", "id"],
            CanonicalRole::OrderDate => {
                &["order_date", "orderdate", "date", "created_at", "createdat"]
            }
            CanonicalRole::Product => &["product", "product_name", "item", "title"],
            CanonicalRole::Quantity => &["quantity", "qty"],
            CanonicalRole::UnitPrice => &["unit_price", "price", "unitprice"],
            CanonicalRole::Discount => &["discount"],
            CanonicalRole::Tax => &["tax"],
            CanonicalRole::ShippingCost => &["shipping_cost", "shipping", "shippingcost"],
            CanonicalRole::TotalPrice => &["total_price", "total", "totalprice", "amount"],
        }
    }
}

impl fmt::Display for CanonicalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved role -> column name assignments for one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalColumns {
    resolved: BTreeMap<CanonicalRole, String>,
}

impl CanonicalColumns {
    pub fn resolve(table: &Table) -> Self {
        let resolved = CanonicalRole::ALL
            .iter()
            .filter_map(|role| {
                role.candidates()
                    .iter()
                    .find(|candidate| table.column(candidate).is_some())
                    .map(|candidate| (*role, (*candidate).to_string()))
            })
            .collect();
        Self { resolved }
    }

    pub fn get(&self, role: CanonicalRole) -> Option<&str> {
        self.resolved.get(&role).map(String::as_str)
    }

    pub fn column<'t>(&self, table: &'t Table, role: CanonicalRole) -> Option<&'t Column> {
        self.get(role).and_then(|name| table.column(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalRole, &str)> {
        self.resolved.iter().map(|(role, name)| (*role, name.as_str()))
    }

    /// Roles with no matching column, in role order.
    pub fn missing_roles(&self) -> Vec<CanonicalRole> {
        CanonicalRole::ALL
            .into_iter()
            .filter(|role| !self.resolved.contains_key(role))
            .collect()
    }
}
