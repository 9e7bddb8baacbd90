//! Test data factories using builder pattern
//!
//! Every factory fills required fields with random but valid values

use chrono::NaiveDate;
use gastro_lib::modules::catalog::{
    Category, Country, GastronomicCulture, MichelinStar, Product, Recipe, Restaurant,
};
use rand::Rng;

fn random_word(prefix: &str) -> String {
    format!("{} {}", prefix, rand::random::<u32>() % 1_000_000)
}

pub struct CountryFactory {
    name: String,
}

impl Default for CountryFactory {
    fn default() -> Self {
        Self {
            name: random_word("Country"),
        }
    }
}

impl CountryFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn build(self) -> Country {
        Country::new(self.name)
    }
}

pub struct GastronomicCultureFactory {
    name: String,
    description: String,
}

impl Default for GastronomicCultureFactory {
    fn default() -> Self {
        Self {
            name: random_word("Cuisine"),
            description: random_word("Traditional cooking of region"),
        }
    }
}

impl GastronomicCultureFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn build(self) -> GastronomicCulture {
        GastronomicCulture::new(self.name, self.description)
    }
}

pub struct RecipeFactory {
    name: String,
}

impl Default for RecipeFactory {
    fn default() -> Self {
        Self {
            name: random_word("Recipe"),
        }
    }
}

impl RecipeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> Recipe {
        let slug = self.name.to_lowercase().replace(' ', "-");
        Recipe::new(
            self.name,
            random_word("A dish called"),
            format!("https://images.example.com/{}.jpg", slug),
            random_word("Cook for minutes:"),
            format!("https://videos.example.com/{}", slug),
        )
    }
}

pub struct RestaurantFactory {
    name: String,
    city: String,
}

impl Default for RestaurantFactory {
    fn default() -> Self {
        Self {
            name: random_word("Restaurant"),
            city: random_word("City"),
        }
    }
}

impl RestaurantFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }

    pub fn build(self) -> Restaurant {
        Restaurant::new(self.name, self.city)
    }
}

pub struct MichelinStarFactory {
    date: NaiveDate,
}

impl Default for MichelinStarFactory {
    fn default() -> Self {
        let mut rng = rand::thread_rng();
        let date = NaiveDate::from_ymd_opt(
            rng.gen_range(1990..=2024),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28),
        )
        .expect("day 1..=28 exists in every month");
        Self { date }
    }
}

impl MichelinStarFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(self) -> MichelinStar {
        MichelinStar::new(self.date)
    }
}

pub fn category() -> Category {
    Category::new(random_word("Category"), random_word("Goods made from"))
}

pub fn product() -> Product {
    Product::new(
        random_word("Product"),
        random_word("First sold in"),
        random_word("Made with"),
    )
}
