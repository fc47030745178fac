//! Layered drink customizer.
//!
//! A drink is built from five stacked layers. Each layer offers a fixed
//! list of options with English and Arabic labels and a swatch colour. A
//! [`Customization`] holds the selected option per layer and cycles through
//! options with wraparound, the way the customizer's arrows and drag
//! gestures do.
//!
//! # Examples
//! ```
//! use brewmatch_core::{Customization, Direction, Language, Layer};
//!
//! let mut drink = Customization::new();
//! drink.step(Layer::Ice, Direction::Left);
//! assert_eq!(drink.option(Layer::Ice).label(Language::English), "Extra Ice");
//! assert_eq!(drink.option(Layer::Ice).label(Language::Arabic), "ثلج إضافي");
//! ```

use thiserror::Error;

/// Display language for option labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    /// English labels.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
    /// Arabic labels.
    #[cfg_attr(feature = "serde", serde(rename = "ar"))]
    Arabic,
}

impl Language {
    /// Heading shown above the customizer.
    #[must_use]
    pub const fn customizer_title(self) -> &'static str {
        match self {
            Self::English => "Customize Your Drink",
            Self::Arabic => "خصص مشروبك",
        }
    }
}

/// Error returned when a string names no supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{input}' (expected 'en' or 'ar')")]
pub struct ParseLanguageError {
    /// Rejected input.
    pub input: String,
}

impl std::str::FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "ar" | "arabic" => Ok(Self::Arabic),
            _ => Err(ParseLanguageError {
                input: s.to_owned(),
            }),
        }
    }
}

/// One selectable option within a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerOption {
    en: &'static str,
    ar: &'static str,
    color: &'static str,
}

impl LayerOption {
    const fn new(en: &'static str, ar: &'static str, color: &'static str) -> Self {
        Self { en, ar, color }
    }

    /// Label in the requested language.
    #[must_use]
    pub const fn label(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.en,
            Language::Arabic => self.ar,
        }
    }

    /// CSS colour of the layer swatch.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        self.color
    }
}

const BLANK: LayerOption = LayerOption::new("", "", "");

const FOAM: [LayerOption; 5] = [
    LayerOption::new("No Foam", "بدون رغوة", "#f7f3ec"),
    LayerOption::new("Cold Foam", "رغوة باردة", "#ffffff"),
    LayerOption::new(
        "Vanilla Sweet Cream Foam",
        "رغوة كريمة الفانيليا الحلوة",
        "#f3e5ab",
    ),
    LayerOption::new("Chocolate Cream Foam", "رغوة كريمة الشوكولاتة", "#5a3a2e"),
    LayerOption::new("Whipped Cream", "كريمة مخفوقة", "#fffdf7"),
];

const ICE: [LayerOption; 4] = [
    LayerOption::new("No Ice", "بدون ثلج", "#f7f3ec"),
    LayerOption::new("Light Ice", "ثلج قليل", "rgba(200,230,255,0.6)"),
    LayerOption::new("Regular Ice", "ثلج عادي", "rgba(180,220,255,0.8)"),
    LayerOption::new("Extra Ice", "ثلج إضافي", "rgba(160,210,255,0.9)"),
];

const MILK: [LayerOption; 7] = [
    LayerOption::new("Whole Milk", "حليب كامل الدسم", "#ffffff"),
    LayerOption::new("Low-Fat Milk", "حليب قليل الدسم", "#f7f7f7"),
    LayerOption::new("Skim Milk", "حليب خالي الدسم", "#fcfcfc"),
    LayerOption::new("Oat Milk", "حليب الشوفان", "#e6d3a3"),
    LayerOption::new("Almond Milk", "حليب اللوز", "#f0ead6"),
    LayerOption::new("Soy Milk", "حليب الصويا", "#efe6d8"),
    LayerOption::new("Coconut Milk", "حليب جوز الهند", "#fafafa"),
];

const BASE: [LayerOption; 5] = [
    LayerOption::new("Espresso", "اسبريسو", "#3b1f1f"),
    LayerOption::new("Blonde Espresso", "اسبريسو أشقر", "#a47148"),
    LayerOption::new("Matcha", "ماتشا", "#6aa84f"),
    LayerOption::new("Coffee", "قهوة", "#4b2e2b"),
    LayerOption::new("Crème Base", "قاعدة كريمية", "#f5f5f5"),
];

const SYRUP: [LayerOption; 9] = [
    LayerOption::new("No Syrup", "بدون شراب", "#f2e9dc"),
    LayerOption::new("Vanilla", "فانيليا", "#f3e5ab"),
    LayerOption::new("Caramel", "كراميل", "#c68642"),
    LayerOption::new("White Mocha", "موكا بيضاء", "#e6d8ad"),
    LayerOption::new("Hazelnut", "بندق", "#b08968"),
    LayerOption::new("Toffee Nut", "جوز التوفي", "#a86b3c"),
    LayerOption::new("Cinnamon Dolce", "قرفة دولتشي", "#cfa670"),
    LayerOption::new("Strawberry Purée", "هريس الفراولة", "#d94a4a"),
    LayerOption::new("Pistachio (Seasonal)", "فستق (موسمي)", "#93c47d"),
];

/// A customizable layer of the drink, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Layer {
    /// Foam or cream topping.
    Foam,
    /// Ice level.
    Ice,
    /// Milk choice.
    Milk,
    /// Coffee, tea or crème base.
    Base,
    /// Flavour syrup.
    Syrup,
}

impl Layer {
    /// All layers in display order.
    pub const ALL: [Self; 5] = [Self::Foam, Self::Ice, Self::Milk, Self::Base, Self::Syrup];

    /// Options offered by this layer. Never empty.
    #[must_use]
    pub const fn options(self) -> &'static [LayerOption] {
        match self {
            Self::Foam => &FOAM,
            Self::Ice => &ICE,
            Self::Milk => &MILK,
            Self::Base => &BASE,
            Self::Syrup => &SYRUP,
        }
    }

    /// Layer name in the requested language.
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Foam, Language::English) => "Foam",
            (Self::Foam, Language::Arabic) => "رغوة",
            (Self::Ice, Language::English) => "Ice",
            (Self::Ice, Language::Arabic) => "ثلج",
            (Self::Milk, Language::English) => "Milk",
            (Self::Milk, Language::Arabic) => "حليب",
            (Self::Base, Language::English) => "Base",
            (Self::Base, Language::Arabic) => "الأساس",
            (Self::Syrup, Language::English) => "Syrup",
            (Self::Syrup, Language::Arabic) => "شراب",
        }
    }
}

/// Direction of a single customizer step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Previous option.
    Left,
    /// Next option.
    Right,
}

/// Errors returned by [`Customization::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CustomizeError {
    /// The index was past the end of the layer's options.
    #[error("{layer:?} has {available} options; index {index} is out of range")]
    OptionOutOfRange {
        /// Layer being changed.
        layer: Layer,
        /// Rejected index.
        index: usize,
        /// Number of options the layer offers.
        available: usize,
    },
}

/// Selected option per layer. Every layer starts at its first option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Customization {
    foam: usize,
    ice: usize,
    milk: usize,
    base: usize,
    syrup: usize,
}

impl Customization {
    /// A customization with every layer on its first option.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            foam: 0,
            ice: 0,
            milk: 0,
            base: 0,
            syrup: 0,
        }
    }

    /// Index of the selected option for `layer`.
    #[must_use]
    pub const fn index(&self, layer: Layer) -> usize {
        match layer {
            Layer::Foam => self.foam,
            Layer::Ice => self.ice,
            Layer::Milk => self.milk,
            Layer::Base => self.base,
            Layer::Syrup => self.syrup,
        }
    }

    const fn slot_mut(&mut self, layer: Layer) -> &mut usize {
        match layer {
            Layer::Foam => &mut self.foam,
            Layer::Ice => &mut self.ice,
            Layer::Milk => &mut self.milk,
            Layer::Base => &mut self.base,
            Layer::Syrup => &mut self.syrup,
        }
    }

    /// The selected option for `layer`.
    #[must_use]
    pub fn option(&self, layer: Layer) -> LayerOption {
        // Indices are kept in range by `select` and `step`.
        layer
            .options()
            .get(self.index(layer))
            .copied()
            .unwrap_or(BLANK)
    }

    /// Select an option by index.
    ///
    /// # Errors
    /// Returns [`CustomizeError::OptionOutOfRange`] when `index` is not a
    /// valid option for `layer`.
    pub fn select(&mut self, layer: Layer, index: usize) -> Result<(), CustomizeError> {
        let available = layer.options().len();
        if index >= available {
            return Err(CustomizeError::OptionOutOfRange {
                layer,
                index,
                available,
            });
        }
        *self.slot_mut(layer) = index;
        Ok(())
    }

    /// Move one option left or right, wrapping at either end.
    pub fn step(&mut self, layer: Layer, direction: Direction) {
        let last = layer.options().len().saturating_sub(1);
        let slot = self.slot_mut(layer);
        *slot = match direction {
            Direction::Left if *slot == 0 => last,
            Direction::Left => *slot - 1,
            Direction::Right if *slot >= last => 0,
            Direction::Right => *slot + 1,
        };
    }

    /// Move `steps` options; negative values move left.
    ///
    /// Runs in constant time however large `steps` is.
    pub fn step_by(&mut self, layer: Layer, steps: i32) {
        let Ok(len) = i64::try_from(layer.options().len()) else {
            return;
        };
        if len == 0 {
            return;
        }
        let slot = self.slot_mut(layer);
        let current = i64::try_from(*slot).unwrap_or(0);
        let target = current.saturating_add(i64::from(steps)).rem_euclid(len);
        *slot = usize::try_from(target).unwrap_or(0);
    }

    /// `(layer label, option label)` pairs in display order.
    #[must_use]
    pub fn summary(&self, language: Language) -> Vec<(&'static str, &'static str)> {
        Layer::ALL
            .iter()
            .map(|&layer| (layer.label(language), self.option(layer).label(language)))
            .collect()
    }
}
