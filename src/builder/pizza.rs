use std::fmt;

use tracing::debug;

pub const DEFAULT_CHEESE: &str = "Mozzarella";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    dough: String,
    sauce: String,
    cheese: String,
    toppings: Vec<String>,
    extra_cheese: bool,
    spicy: bool,
}

impl Pizza {
    pub fn builder(dough: impl Into<String>, sauce: impl Into<String>) -> PizzaBuilder {
        PizzaBuilder::new(dough, sauce)
    }

    pub fn dough(&self) -> &str {
        &self.dough
    }

    pub fn sauce(&self) -> &str {
        &self.sauce
    }

    pub fn cheese(&self) -> &str {
        &self.cheese
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn extra_cheese(&self) -> bool {
        self.extra_cheese
    }

    pub fn spicy(&self) -> bool {
        self.spicy
    }
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pizza{{dough='{}', sauce='{}', cheese='{}', toppings={:?}, extraCheese={}, spicy={}}}",
            self.dough, self.sauce, self.cheese, self.toppings, self.extra_cheese, self.spicy
        )
    }
}

#[derive(Debug, Clone)]
#[must_use = "a builder does nothing until .build() is called"]
pub struct PizzaBuilder {
    dough: String,
    sauce: String,
    cheese: String,
    toppings: Vec<String>,
    extra_cheese: bool,
    spicy: bool,
}

impl PizzaBuilder {
    pub fn new(dough: impl Into<String>, sauce: impl Into<String>) -> Self {
        Self {
            dough: dough.into(),
            sauce: sauce.into(),
            cheese: DEFAULT_CHEESE.to_string(),
            toppings: Vec::new(),
            extra_cheese: false,
            spicy: false,
        }
    }

    pub fn cheese(mut self, cheese: impl Into<String>) -> Self {
        self.cheese = cheese.into();
        self
    }

    /// Toppings accumulate in call order.
    pub fn topping(mut self, topping: impl Into<String>) -> Self {
        self.toppings.push(topping.into());
        self
    }

    pub fn extra_cheese(mut self, extra_cheese: bool) -> Self {
        self.extra_cheese = extra_cheese;
        self
    }

    pub fn spicy(mut self, spicy: bool) -> Self {
        self.spicy = spicy;
        self
    }

    pub fn build(&self) -> Pizza {
        Pizza {
            dough: self.dough.clone(),
            sauce: self.sauce.clone(),
            cheese: self.cheese.clone(),
            toppings: self.toppings.clone(),
            extra_cheese: self.extra_cheese,
            spicy: self.spicy,
        }
    }
}

/// Knows the menu: each recipe is a fixed sequence of builder steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct PizzaDirector;

impl PizzaDirector {
    pub fn margherita(&self) -> Pizza {
        debug!(recipe = "margherita", "directing pizza build");
        PizzaBuilder::new("Thin Crust", "Tomato")
            .cheese("Mozzarella")
            .topping("Basil")
            .build()
    }

    pub fn pepperoni(&self) -> Pizza {
        debug!(recipe = "pepperoni", "directing pizza build");
        PizzaBuilder::new("Pan", "Tomato")
            .cheese("Mozzarella")
            .topping("Pepperoni")
            .extra_cheese(true)
            .spicy(false)
            .build()
    }

    pub fn hawaiian(&self) -> Pizza {
        debug!(recipe = "hawaiian", "directing pizza build");
        PizzaBuilder::new("Regular", "Tomato")
            .cheese("Mozzarella")
            .topping("Ham")
            .topping("Pineapple")
            .build()
    }

    pub fn menu(&self) -> Vec<(&'static str, Pizza)> {
        vec![
            ("Margherita", self.margherita()),
            ("Pepperoni", self.pepperoni()),
            ("Hawaiian", self.hawaiian()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required_only_uses_defaults() {
        let pizza = Pizza::builder("Regular", "Marinara").build();

        assert_eq!(pizza.dough(), "Regular");
        assert_eq!(pizza.sauce(), "Marinara");
        assert_eq!(pizza.cheese(), DEFAULT_CHEESE);
        assert!(pizza.toppings().is_empty());
        assert!(!pizza.extra_cheese());
        assert!(!pizza.spicy());
    }

    #[test]
    fn test_extra_cheese_sets_flag() {
        let pizza = Pizza::builder("Pan", "BBQ")
            .cheese("Cheddar")
            .extra_cheese(true)
            .build();

        assert!(pizza.extra_cheese());
        assert_eq!(pizza.cheese(), "Cheddar");
    }

    #[test]
    fn test_reverse_order_matches_declaration_order() {
        let forward = Pizza::builder("Pan", "BBQ")
            .cheese("Cheddar")
            .topping("Chicken")
            .extra_cheese(true)
            .spicy(true)
            .build();
        let reverse = Pizza::builder("Pan", "BBQ")
            .spicy(true)
            .extra_cheese(true)
            .topping("Chicken")
            .cheese("Cheddar")
            .build();

        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_director_recipes() {
        let director = PizzaDirector;

        let margherita = director.margherita();
        assert_eq!(margherita.dough(), "Thin Crust");
        assert_eq!(margherita.toppings(), ["Basil"]);

        let pepperoni = director.pepperoni();
        assert!(pepperoni.extra_cheese());
        assert!(!pepperoni.spicy());

        let hawaiian = director.hawaiian();
        assert_eq!(hawaiian.toppings(), ["Ham", "Pineapple"]);
        assert_eq!(director.menu().len(), 3);
    }

    #[test]
    fn test_display() {
        let rendered = PizzaDirector.margherita().to_string();
        assert_eq!(
            rendered,
            "Pizza{dough='Thin Crust', sauce='Tomato', cheese='Mozzarella', toppings=[\"Basil\"], extraCheese=false, spicy=false}"
        );
    }

    #[derive(Debug, Clone)]
    enum Step {
        Cheese(String),
        Topping(String),
        ExtraCheese(bool),
        Spicy(bool),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            "[A-Z][a-z]{2,8}".prop_map(Step::Cheese),
            "[A-Z][a-z]{2,8}".prop_map(Step::Topping),
            any::<bool>().prop_map(Step::ExtraCheese),
            any::<bool>().prop_map(Step::Spicy),
        ]
    }

    proptest! {
        #[test]
        fn prop_last_write_wins(steps in prop::collection::vec(step(), 0..24)) {
            let mut builder = PizzaBuilder::new("Pan", "Tomato");
            let mut cheese = DEFAULT_CHEESE.to_string();
            let mut toppings = Vec::new();
            let mut extra_cheese = false;
            let mut spicy = false;

            for step in steps {
                builder = match step {
                    Step::Cheese(c) => { cheese = c.clone(); builder.cheese(c) }
                    Step::Topping(t) => { toppings.push(t.clone()); builder.topping(t) }
                    Step::ExtraCheese(b) => { extra_cheese = b; builder.extra_cheese(b) }
                    Step::Spicy(b) => { spicy = b; builder.spicy(b) }
                };
            }

            let pizza = builder.build();
            prop_assert_eq!(pizza.dough(), "Pan");
            prop_assert_eq!(pizza.sauce(), "Tomato");
            prop_assert_eq!(pizza.cheese(), cheese.as_str());
            prop_assert_eq!(pizza.toppings(), toppings.as_slice());
            prop_assert_eq!(pizza.extra_cheese(), extra_cheese);
            prop_assert_eq!(pizza.spicy(), spicy);
        }
    }
}
