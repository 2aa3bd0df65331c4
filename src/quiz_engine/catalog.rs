//! The read-only country list questions are drawn from.

use std::collections::HashSet;
use std::ops::Deref;

use serde::Serialize;

use crate::quiz_engine::{error::CatalogError, models::Country};

/// One correct answer plus three distractors.
pub const MIN_CATALOG_SIZE: usize = 4;

/// Validated, ordered list of countries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Result<Self, CatalogError> {
        if countries.len() < MIN_CATALOG_SIZE {
            return Err(CatalogError::TooSmall {
                count: countries.len(),
                min: MIN_CATALOG_SIZE,
            });
        }

        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for (i, c) in countries.iter().enumerate() {
            if c.name.trim().is_empty() || c.iso_code.trim().is_empty() {
                return Err(CatalogError::EmptyField(i));
            }
            if !codes.insert(c.iso_code.as_str()) {
                return Err(CatalogError::DuplicateCode(c.iso_code.clone()));
            }
            if !names.insert(c.name.as_str()) {
                return Err(CatalogError::DuplicateName(c.name.clone()));
            }
        }

        Ok(Catalog { countries })
    }

    /// Parse a JSON array of `{name, iso_code, fact}` objects.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Catalog::new(countries)
    }

    /// The 30 countries the game ships with.
    pub fn builtin() -> Self {
        let countries = BUILTIN
            .iter()
            .map(|&(name, code, fact)| Country::new(name, code, fact))
            .collect();
        Catalog { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

impl Deref for Catalog {
    type Target = [Country];

    fn deref(&self) -> &[Country] {
        &self.countries
    }
}

const BUILTIN: [(&str, &str, &str); 30] = [
    ("Japan", "jp", "Japan has more than 6,800 islands."),
    ("Brazil", "br", "Brazil is home to the world's largest carnival, the Rio Carnival."),
    ("Canada", "ca", "Canada has the longest coastline of any country in the world."),
    ("Australia", "au", "Australia is the only continent that is also a country."),
    ("India", "in", "The game of Chess was invented in India."),
    ("South Africa", "za", "South Africa has three capital cities: Pretoria, Cape Town, and Bloemfontein."),
    ("Egypt", "eg", "The Great Pyramid of Giza is the oldest of the Seven Wonders of the Ancient World."),
    ("Italy", "it", "Italy has more UNESCO World Heritage sites than any other country."),
    ("Mexico", "mx", "Chocolate, chilies, and corn were first introduced to the world by Mexico."),
    ("United States", "us", "The United States has no official language at the federal level."),
    ("China", "cn", "China is the most populous country in the world."),
    ("Russia", "ru", "Russia is the largest country in the world by land area."),
    ("Germany", "de", "Germany has over 2,100 castles."),
    ("France", "fr", "The Louvre in Paris is the world's largest art museum."),
    ("United Kingdom", "gb", "The UK is made up of England, Scotland, Wales, and Northern Ireland."),
    ("Argentina", "ar", "The tango dance and music originated in Argentina."),
    ("Spain", "es", "Spain is the only country in Europe that shares a physical border with an African country."),
    ("Nigeria", "ng", "Nigeria has the largest economy in Africa."),
    ("South Korea", "kr", "South Korea has the world's fastest average internet speed."),
    ("Kenya", "ke", "Kenya is famous for its wildlife safaris in national parks like the Maasai Mara."),
    ("New Zealand", "nz", "New Zealand was the first country to give women the right to vote in 1893."),
    ("Greece", "gr", "The Olympic Games originated in ancient Greece."),
    ("Norway", "no", "Norway has the world's longest road tunnel, the Lærdal Tunnel."),
    ("Sweden", "se", "Sweden is the country with the most islands."),
    ("Switzerland", "ch", "Switzerland has more high peaks than any other country in Europe."),
    ("Chile", "cl", "The Atacama Desert in Chile is the driest place on Earth."),
    ("Vietnam", "vn", "Vietnam is the world's largest exporter of cashews."),
    ("Thailand", "th", "Thailand is the only Southeast Asian country that was never colonized by a European power."),
    ("Turkey", "tr", "Istanbul is the only city in the world that straddles two continents: Europe and Asia."),
    ("Finland", "fi", "Finland is known as \"the land of a thousand lakes\" and has over 188,000 of them."),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_passes_validation() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 30);
        assert!(Catalog::new(builtin.countries().to_vec()).is_ok());
    }

    #[test]
    fn rejects_catalog_too_small_for_distractors() {
        let three = Catalog::builtin().countries()[..3].to_vec();
        assert!(matches!(
            Catalog::new(three),
            Err(CatalogError::TooSmall { count: 3, min: 4 })
        ));
    }

    #[test]
    fn rejects_duplicate_codes_and_names() {
        let mut list = Catalog::builtin().countries()[..4].to_vec();
        list.push(Country::new("Nippon", "jp", ""));
        assert!(matches!(Catalog::new(list), Err(CatalogError::DuplicateCode(c)) if c == "jp"));

        let mut list = Catalog::builtin().countries()[..4].to_vec();
        list.push(Country::new("Japan", "xx", ""));
        assert!(matches!(Catalog::new(list), Err(CatalogError::DuplicateName(n)) if n == "Japan"));
    }

    #[test]
    fn loads_from_json() {
        let json = r#"[
            {"name": "Japan",  "iso_code": "jp", "fact": "a"},
            {"name": "Brazil", "iso_code": "br", "fact": "b"},
            {"name": "Canada", "iso_code": "ca", "fact": "c"},
            {"name": "Kenya",  "iso_code": "ke", "fact": "d"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[1].flag_url(), "https://flagcdn.com/w320/br.png");

        assert!(matches!(Catalog::from_json("{"), Err(CatalogError::Json(_))));
    }
}
