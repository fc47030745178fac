//! Drinks offered for swiping and the ordered catalogue that holds them.
//!
//! Catalogue order is significant: the swipe session walks drinks in order
//! and a winning category is represented by its first drink.

use std::collections::HashSet;

use thiserror::Error;

/// Stable identifier of a drink within a catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DrinkId(pub u64);

impl std::fmt::Display for DrinkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form category tag shared by one or more drinks.
///
/// # Examples
/// ```
/// use brewmatch_core::Category;
///
/// let category = Category::from("coffee");
/// assert_eq!(category.as_str(), "coffee");
/// assert_eq!(category.to_string(), "coffee");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Category(String);

impl Category {
    /// Construct a category from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the category name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Emoji shown next to drinks of this category, when one is known.
    #[must_use]
    pub fn emoji(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "coffee" => Some("☕"),
            "espresso" => Some("⚡"),
            "frappuccino" => Some("🍫"),
            "refreshers" => Some("🍓"),
            "tea" => Some("🍵"),
            "seasonal" => Some("🎃"),
            "protein" => Some("💪"),
            _ => None,
        }
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A swipeable drink.
///
/// Only `id` and `category` matter to scoring; the remaining fields are
/// carried through for display.
///
/// # Examples
/// ```
/// use brewmatch_core::{Category, Drink, DrinkId};
///
/// let drink = Drink::new(1, "coffee", "Pike Place Roast");
/// assert_eq!(drink.id, DrinkId(1));
/// assert_eq!(drink.category, Category::from("coffee"));
/// assert!(drink.description.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Drink {
    /// Unique identifier within the catalogue.
    pub id: DrinkId,
    /// Category the drink scores towards.
    pub category: Category,
    /// Display name.
    pub name: String,
    /// Short description shown on the card.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Image URL shown on the card.
    #[cfg_attr(feature = "serde", serde(default))]
    pub image: String,
}

impl Drink {
    /// Construct a drink without description or image.
    pub fn new(id: u64, category: impl Into<Category>, name: impl Into<String>) -> Self {
        Self {
            id: DrinkId(id),
            category: category.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
        }
    }

    /// Attach a description while returning `self` for chaining.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach an image URL while returning `self` for chaining.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two drinks shared an identifier.
    #[error("drink id {id} appears more than once in the catalogue")]
    DuplicateId {
        /// The repeated identifier.
        id: DrinkId,
    },
}

/// Fixed, ordered sequence of drinks presented to the user.
///
/// # Examples
/// ```
/// use brewmatch_core::{Catalog, Category, Drink};
///
/// # fn main() -> Result<(), brewmatch_core::CatalogError> {
/// let catalog = Catalog::new(vec![
///     Drink::new(1, "coffee", "Pike Place Roast"),
///     Drink::new(2, "tea", "Matcha Green Tea Latte"),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// let tea = catalog.first_in(&Category::from("tea")).map(|d| d.name.as_str());
/// assert_eq!(tea, Some("Matcha Green Tea Latte"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Drink>", into = "Vec<Drink>")
)]
pub struct Catalog {
    drinks: Vec<Drink>,
}

impl Catalog {
    /// Validate and construct a catalogue.
    ///
    /// # Errors
    /// Returns [`CatalogError::DuplicateId`] when two drinks share an id.
    pub fn new(drinks: Vec<Drink>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(drinks.len());
        if let Some(dup) = drinks.iter().find(|drink| !seen.insert(drink.id)) {
            return Err(CatalogError::DuplicateId { id: dup.id });
        }
        Ok(Self { drinks })
    }

    /// Construct a catalogue with no drinks.
    #[must_use]
    pub const fn empty() -> Self {
        Self { drinks: Vec::new() }
    }

    /// The seven-drink demo catalogue, one drink per category.
    #[must_use]
    pub fn demo() -> Self {
        let drinks = vec![
            Drink::new(1, "coffee", "Pike Place Roast")
                .with_description("Smooth, well-rounded brewed coffee.")
                .with_image("https://cloudassets.starbucks.com/is/image/sbuxcorp/BrewedCoffee"),
            Drink::new(2, "espresso", "Caffè Latte")
                .with_description("Rich espresso with steamed milk.")
                .with_image(
                    "https://bunny-wp-pullzone-8lgzf5kyx3.b-cdn.net/assets/uploads/2023/08/sbx20190617-35529-caffelatte-onwhite-corelib-srgb.png",
                ),
            Drink::new(3, "frappuccino", "Caramel Frappuccino")
                .with_description("Blended coffee with caramel sweetness.")
                .with_image(
                    "https://cloudassets.starbucks.com/is/image/sbuxcorp/SBX20220323_CaramelFrapp?impolicy=1by1_wide_topcrop_630&crop=180,360,1440,1440&wid=630&hei=630&qlt=85",
                ),
            Drink::new(4, "refreshers", "Dragon Drink")
                .with_description("Tropical mango & dragonfruit refresher.")
                .with_image(
                    "https://cloudassets.starbucks.com/is/image/sbuxcorp/DragonDrink?impolicy=1by1_wide_topcrop_630&crop=180,360,1440,1440&wid=630&hei=630&qlt=85",
                ),
            Drink::new(5, "tea", "Matcha Green Tea Latte")
                .with_description("Creamy green tea with subtle sweetness.")
                .with_image(
                    "https://cloudassets.starbucks.com/is/image/sbuxcorp/IcedMatchaTeaLatte?impolicy=1by1_wide_topcrop_630&crop=180,360,1440,1440&wid=630&hei=630&qlt=85",
                ),
            Drink::new(6, "seasonal", "Pumpkin Spice Latte")
                .with_description("Classic fall flavors with warm spices.")
                .with_image(
                    "https://cloudassets.starbucks.com/is/image/sbuxcorp/PumpkinSpiceLatte-2?impolicy=1by1_wide_topcrop_630&crop=180,360,1440,1440&wid=630&hei=630&qlt=85",
                ),
            Drink::new(7, "protein", "Iced Caffè Latte with Protein")
                .with_description("Chilled latte with added protein for energy.")
                .with_image(
                    "https://cloudassets.starbucks.com/is/image/sbuxcorp/IcedCaffeLattewProtein?impolicy=1by1_wide_topcrop_630&crop=180,360,1440,1440&wid=630&hei=630&qlt=85",
                ),
        ];
        Self { drinks }
    }

    /// Return the drink at `position`, if any.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Drink> {
        self.drinks.get(position)
    }

    /// Return the first drink, in catalogue order, tagged with `category`.
    #[must_use]
    pub fn first_in(&self, category: &Category) -> Option<&Drink> {
        self.drinks.iter().find(|drink| &drink.category == category)
    }

    /// Number of drinks in the catalogue.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.drinks.len()
    }

    /// Report whether the catalogue holds no drinks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// Iterate over drinks in catalogue order.
    pub fn iter(&self) -> std::slice::Iter<'_, Drink> {
        self.drinks.iter()
    }
}

impl TryFrom<Vec<Drink>> for Catalog {
    type Error = CatalogError;

    fn try_from(drinks: Vec<Drink>) -> Result<Self, Self::Error> {
        Self::new(drinks)
    }
}

impl From<Catalog> for Vec<Drink> {
    fn from(catalog: Catalog) -> Self {
        catalog.drinks
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Drink;
    type IntoIter = std::slice::Iter<'a, Drink>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
