//! UI Components

pub mod about;
pub mod brand_mark;
pub mod footer;
pub mod hero;
pub mod lead_form;
pub mod navbar;
pub mod offering_grid;
pub mod offering_table;
pub mod splash_screen;

pub use about::AboutSection;
pub use brand_mark::BrandMark;
pub use footer::Footer;
pub use hero::{HeroSection, TrustIndicators};
pub use lead_form::LeadForm;
pub use navbar::Navbar;
pub use offering_grid::OfferingGrid;
pub use offering_table::OfferingTable;
pub use splash_screen::SplashScreen;
