//! # Offering Renderer
//!
//! Projects a [`Catalog`] into the two shapes the page shows: a card grid and a
//! summary table. Both follow catalog order exactly. The view layer turns these
//! into markup; nothing here knows about HTML.

use crate::catalog::{Catalog, OfferingRecord};
use crate::color::Color;
use crate::navigation::Section;

/// One card in the offering grid. The whole card is a single activation target.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingCard<'a> {
    pub name: &'a str,
    /// e.g. `"GBP Denominated"`.
    pub denomination: String,
    pub yield_label: &'a str,
    pub credit_rating: &'a str,
    pub coupon_frequency: &'static str,
    pub maturity_date: &'a str,
    pub minimum_investment: Option<&'a str>,
    pub description: &'a str,
    pub logo_asset_ref: &'a str,
    pub logo_alt: String,
    pub accent: Color,
    /// Where activating the card takes the visitor.
    pub target: Section,
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferingRow<'a> {
    pub name: &'a str,
    pub identifier: &'a str,
    pub credit_rating: &'a str,
    pub coupon_frequency: &'static str,
    pub maturity_date: &'a str,
    pub yield_label: &'a str,
    pub currency: &'a str,
}

pub const TABLE_HEADERS: [&str; 7] = [
    "Issuer",
    "ISIN",
    "Rating",
    "Coupon",
    "Maturity",
    "Yield",
    "Currency",
];

impl<'a> OfferingRow<'a> {
    /// Cells in [`TABLE_HEADERS`] order.
    pub fn cells(&self) -> [&'a str; 7] {
        [
            self.name,
            self.identifier,
            self.credit_rating,
            self.coupon_frequency,
            self.maturity_date,
            self.yield_label,
            self.currency,
        ]
    }
}

fn card<'a>(catalog: &'a Catalog, offering: &'a OfferingRecord, fallback_accent: &Color) -> OfferingCard<'a> {
    OfferingCard {
        name: &offering.name,
        denomination: format!("{} Denominated", offering.currency),
        yield_label: &offering.yield_label,
        credit_rating: &offering.credit_rating,
        coupon_frequency: offering.coupon_frequency.label(),
        maturity_date: &offering.maturity_date,
        minimum_investment: offering.minimum_investment.as_deref(),
        description: &offering.description,
        logo_asset_ref: &offering.logo_asset_ref,
        logo_alt: format!("{} logo", offering.name),
        accent: *catalog.brand_color_or(&offering.name, fallback_accent),
        target: Section::Contact,
    }
}

/// Card grid projection, in catalog order.
pub fn card_view<'a>(catalog: &'a Catalog, fallback_accent: &Color) -> Vec<OfferingCard<'a>> {
    catalog
        .list_offerings()
        .iter()
        .map(|offering| card(catalog, offering, fallback_accent))
        .collect()
}

/// Summary table projection, in catalog order.
pub fn table_view(catalog: &Catalog) -> Vec<OfferingRow<'_>> {
    catalog
        .list_offerings()
        .iter()
        .map(|offering| OfferingRow {
            name: &offering.name,
            identifier: &offering.identifier,
            credit_rating: &offering.credit_rating,
            coupon_frequency: offering.coupon_frequency.label(),
            maturity_date: &offering.maturity_date,
            yield_label: &offering.yield_label,
            currency: &offering.currency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{five_bank_catalog, offering};
    use crate::navigation::tests::page;
    use crate::navigation::NavigationController;

    const NAVY: Color = Color::rgb(0x01, 0x21, 0x69);

    #[test]
    fn test_rendering_is_deterministic() {
        let catalog = five_bank_catalog();
        assert_eq!(card_view(&catalog, &NAVY), card_view(&catalog, &NAVY));
        assert_eq!(table_view(&catalog), table_view(&catalog));
    }

    #[test]
    fn test_card_fields() {
        let catalog = five_bank_catalog();
        let cards = card_view(&catalog, &NAVY);
        let barclays = &cards[1];

        assert_eq!(barclays.name, "Barclays");
        assert_eq!(barclays.denomination, "GBP Denominated");
        assert_eq!(barclays.coupon_frequency, "Quarterly");
        assert_eq!(barclays.minimum_investment, Some("£100,000"));
        assert_eq!(barclays.logo_alt, "Barclays logo");
        assert_eq!(barclays.accent, Color::rgb(0x00, 0xAE, 0xEF));
        // No brand colour registered for UBS
        assert_eq!(cards[3].accent, NAVY);
    }

    #[test]
    fn test_card_without_minimum() {
        let mut record = offering("Lloyds");
        record.minimum_investment = None;
        let catalog = Catalog::new(vec![record], []).unwrap();
        assert_eq!(card_view(&catalog, &NAVY)[0].minimum_investment, None);
    }

    #[test]
    fn test_end_to_end_ubs_card_and_table() {
        let catalog = five_bank_catalog();
        let cards = card_view(&catalog, &NAVY);
        let rows = table_view(&catalog);

        assert_eq!(rows.len(), 5);
        let card_names: Vec<_> = cards.iter().map(|c| c.name).collect();
        let row_names: Vec<_> = rows.iter().map(|r| r.name).collect();
        assert_eq!(card_names, row_names);

        let view = page();
        let mut nav = NavigationController::new();
        nav.toggle_menu();
        let ubs = cards.iter().find(|c| c.name == "UBS").unwrap();
        assert_eq!(ubs.target, Section::Contact);
        nav.on_offering_activated(&view);

        assert_eq!(*view.scrolled.borrow(), ["contact"]);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn test_row_cells_follow_headers() {
        let catalog = five_bank_catalog();
        let rows = table_view(&catalog);
        let cells = rows[0].cells();
        assert_eq!(cells.len(), TABLE_HEADERS.len());
        assert_eq!(cells[0], "Deutsche Bank");
        assert_eq!(cells[6], "GBP");
    }
}
