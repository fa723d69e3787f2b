//! Listings shown in the marketplace and the seeded demo catalog.

use crate::interest::InterestSnapshot;
use crate::interest::ItemId;
use serde::Deserialize;
use serde::Serialize;

/// A business listing, together with the caller's interest in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Asking price in US cents.
    pub price_cents: u64,
    pub seller: String,
    pub interest: InterestSnapshot,
}

impl Listing {
    /// Formats the asking price with a dollar sign and thousands separators.
    ///
    /// # Example
    /// ```
    /// use api::interest::InterestSnapshot;
    /// use api::listing::Listing;
    ///
    /// let listing = Listing {
    ///     id: "corner-bakery".into(),
    ///     title: "Corner bakery".to_string(),
    ///     category: "Food".to_string(),
    ///     price_cents: 125_000,
    ///     seller: "dana".to_string(),
    ///     interest: InterestSnapshot::new(false, 0),
    /// };
    /// assert_eq!(listing.display_price(), "$1,250.00");
    /// ```
    pub fn display_price(&self) -> String {
        let dollars = self.price_cents / 100;
        let cents = self.price_cents % 100;

        let digits = dollars.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        format!("${grouped}.{cents:02}")
    }
}

/// A catalog row before any identity's interest is attached.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub price_cents: u64,
    pub seller: &'static str,
}

impl CatalogEntry {
    pub fn with_interest(&self, interest: InterestSnapshot) -> Listing {
        Listing {
            id: ItemId::from(self.id),
            title: self.title.to_owned(),
            category: self.category.to_owned(),
            price_cents: self.price_cents,
            seller: self.seller.to_owned(),
            interest,
        }
    }
}

/// Businesses on offer in the demo marketplace.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: "corner-bakery",
        title: "Corner Bakery with Walk-in Trade",
        category: "Food & Beverage",
        price_cents: 18_500_000,
        seller: "m.okafor",
    },
    CatalogEntry {
        id: "bike-repair",
        title: "Bicycle Repair Shop",
        category: "Retail",
        price_cents: 6_200_000,
        seller: "l.ferreira",
    },
    CatalogEntry {
        id: "saas-invoicing",
        title: "Invoicing SaaS, 400 Subscribers",
        category: "Software",
        price_cents: 42_000_000,
        seller: "k.nakamura",
    },
    CatalogEntry {
        id: "laundromat",
        title: "Laundromat, 24 Machines",
        category: "Services",
        price_cents: 27_500_000,
        seller: "m.okafor",
    },
    CatalogEntry {
        id: "plant-nursery",
        title: "Plant Nursery and Garden Centre",
        category: "Retail",
        price_cents: 31_000_000,
        seller: "a.lindqvist",
    },
    CatalogEntry {
        id: "food-truck",
        title: "Taco Food Truck with Permits",
        category: "Food & Beverage",
        price_cents: 9_450_050,
        seller: "r.alvarez",
    },
];

/// Looks up a catalog row by its item id.
pub fn catalog_entry(id: &ItemId) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.id == id.as_str())
}
