//! Cost estimate data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sitecost_shared::types::LineItemId;

/// Cost category a line item is grouped under.
///
/// Declaration order is the canonical display order of a breakdown.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum CostCategory {
    /// Excavation, footings, slab.
    #[default]
    #[serde(rename = "Foundation & Sitework")]
    FoundationSitework,
    /// Framing, masonry, structural members.
    #[serde(rename = "Walls & Structure")]
    WallsStructure,
    /// Roofing.
    #[serde(rename = "Roofing")]
    Roofing,
    /// Electrical.
    #[serde(rename = "Electrical")]
    Electrical,
    /// Plumbing.
    #[serde(rename = "Plumbing")]
    Plumbing,
    /// Interior and exterior finishes.
    #[serde(rename = "Finishes")]
    Finishes,
    /// Anything else.
    #[serde(rename = "Other")]
    Other,
}

impl CostCategory {
    /// All categories in canonical order.
    pub const ALL: [Self; 7] = [
        Self::FoundationSitework,
        Self::WallsStructure,
        Self::Roofing,
        Self::Electrical,
        Self::Plumbing,
        Self::Finishes,
        Self::Other,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FoundationSitework => "Foundation & Sitework",
            Self::WallsStructure => "Walls & Structure",
            Self::Roofing => "Roofing",
            Self::Electrical => "Electrical",
            Self::Plumbing => "Plumbing",
            Self::Finishes => "Finishes",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for CostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for CostCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("Unknown cost category: {s}"))
    }
}

/// Unit a quantity is measured in. Display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Pieces.
    #[default]
    #[serde(rename = "pcs")]
    Pieces,
    /// Square metres.
    #[serde(rename = "m²")]
    SquareMetres,
    /// Cubic metres.
    #[serde(rename = "m³")]
    CubicMetres,
    /// Linear metres.
    #[serde(rename = "m")]
    Metres,
    /// Kilograms.
    #[serde(rename = "kg")]
    Kilograms,
    /// Bags.
    #[serde(rename = "bags")]
    Bags,
    /// Boxes.
    #[serde(rename = "boxes")]
    Boxes,
    /// Tons.
    #[serde(rename = "tons")]
    Tons,
}

impl Unit {
    /// All units in picker order.
    pub const ALL: [Self; 8] = [
        Self::Pieces,
        Self::SquareMetres,
        Self::CubicMetres,
        Self::Metres,
        Self::Kilograms,
        Self::Bags,
        Self::Boxes,
        Self::Tons,
    ];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pieces => "pcs",
            Self::SquareMetres => "m²",
            Self::CubicMetres => "m³",
            Self::Metres => "m",
            Self::Kilograms => "kg",
            Self::Bags => "bags",
            Self::Boxes => "boxes",
            Self::Tons => "tons",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.label() == s)
            .ok_or_else(|| format!("Unknown unit: {s}"))
    }
}

/// A costed row of an estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line item ID.
    pub id: LineItemId,
    /// Display label.
    pub name: String,
    /// Category the item is grouped under.
    pub category: CostCategory,
    /// Quantity, always positive.
    pub quantity: Decimal,
    /// Display unit of the quantity.
    pub unit: Unit,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Candidate line item, as entered in the add-item form.
///
/// Every field may be missing; validation decides whether it becomes a
/// [`LineItem`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemDraft {
    /// Display label.
    #[serde(default)]
    pub name: Option<String>,
    /// Category; Foundation & Sitework when missing.
    #[serde(default)]
    pub category: Option<CostCategory>,
    /// Quantity.
    #[serde(default)]
    pub quantity: Option<Decimal>,
    /// Unit; pcs when missing.
    #[serde(default)]
    pub unit: Option<Unit>,
    /// Price per unit.
    #[serde(default, alias = "unitPrice")]
    pub unit_price: Option<Decimal>,
}

impl LineItemDraft {
    /// Creates a fully populated draft.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: CostCategory,
        quantity: Decimal,
        unit: Unit,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: Some(name.into()),
            category: Some(category),
            quantity: Some(quantity),
            unit: Some(unit),
            unit_price: Some(unit_price),
        }
    }

    /// Returns the blank draft shown after a successful add.
    ///
    /// Category and unit carry over; quantity resets to one.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self {
            name: None,
            category: self.category,
            quantity: Some(Decimal::ONE),
            unit: self.unit,
            unit_price: None,
        }
    }
}

/// How negative unit prices are treated when a draft is validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountPolicy {
    /// Negative unit prices are rejected.
    #[default]
    RejectNegative,
    /// Negative unit prices are accepted as credits or discounts.
    AllowCredits,
}

impl AmountPolicy {
    /// Maps the `allow_credits` configuration flag to a policy.
    #[must_use]
    pub const fn from_allow_credits(allow_credits: bool) -> Self {
        if allow_credits {
            Self::AllowCredits
        } else {
            Self::RejectNegative
        }
    }
}
