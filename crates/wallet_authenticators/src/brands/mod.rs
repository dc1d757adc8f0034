//! Supported wallet brands.

mod starteos;
mod wombat;

pub use starteos::{starteos, STARTEOS};
pub use wombat::{wombat, WOMBAT};

use crate::brand::BrandDescriptor;

/// Every supported brand, in the order hosts usually list them.
pub static ALL_BRANDS: [&BrandDescriptor; 2] = [&WOMBAT, &STARTEOS];

/// Looks up a brand by its stable adapter name.
pub fn brand_by_name(name: &str) -> Option<&'static BrandDescriptor> {
    ALL_BRANDS.iter().copied().find(|brand| brand.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_names_are_unique_and_resolvable() {
        for brand in ALL_BRANDS {
            assert_eq!(brand_by_name(brand.name).map(|b| b.name), Some(brand.name));
        }
        assert!(brand_by_name("scatter").is_none());
    }
}
