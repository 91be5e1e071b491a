//! Read-only category catalog
//!
//! The catalog is the lookup collaborator the progress report resolves budget
//! category ids against. It is built once from a category list and never
//! mutated during a computation.

use std::collections::HashMap;

use crate::models::{Category, CategoryId};

/// An id-keyed, insertion-ordered collection of categories
#[derive(Debug, Clone, Default)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
    index: HashMap<CategoryId, usize>,
}

impl CategoryCatalog {
    /// Build a catalog from a category list. A later entry with a duplicate
    /// id replaces the earlier one in place.
    pub fn new(categories: Vec<Category>) -> Self {
        let mut catalog = Self::default();
        for category in categories {
            match catalog.index.get(&category.id) {
                Some(&position) => catalog.categories[position] = category,
                None => {
                    catalog.index.insert(category.id, catalog.categories.len());
                    catalog.categories.push(category);
                }
            }
        }
        catalog
    }

    /// The built-in expense categories
    pub fn default_expense() -> Self {
        Self::new(
            DefaultExpenseCategory::all()
                .iter()
                .map(|default| default.to_category())
                .collect(),
        )
    }

    /// Look up a category by id
    pub fn lookup(&self, id: CategoryId) -> Option<&Category> {
        self.index.get(&id).map(|&position| &self.categories[position])
    }

    /// Look up a category by display name
    pub fn find_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    /// Check whether an id is known
    pub fn contains(&self, id: CategoryId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Iterate categories in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }
}

/// The built-in expense category set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultExpenseCategory {
    Groceries,
    Dining,
    Transport,
    Housing,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    Travel,
    Other,
}

impl DefaultExpenseCategory {
    /// All defaults in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Groceries,
            Self::Dining,
            Self::Transport,
            Self::Housing,
            Self::Utilities,
            Self::Entertainment,
            Self::Health,
            Self::Shopping,
            Self::Travel,
            Self::Other,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Dining => "Dining Out",
            Self::Transport => "Transport",
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Travel => "Travel",
            Self::Other => "Other",
        }
    }

    /// Icon reference
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Groceries => "shopping-cart",
            Self::Dining => "utensils",
            Self::Transport => "bus",
            Self::Housing => "home",
            Self::Utilities => "plug",
            Self::Entertainment => "film",
            Self::Health => "heart-pulse",
            Self::Shopping => "shopping-bag",
            Self::Travel => "plane",
            Self::Other => "tag",
        }
    }

    /// Color reference
    pub fn color(&self) -> &'static str {
        match self {
            Self::Groceries => "emerald",
            Self::Dining => "amber",
            Self::Transport => "sky",
            Self::Housing => "indigo",
            Self::Utilities => "yellow",
            Self::Entertainment => "purple",
            Self::Health => "rose",
            Self::Shopping => "pink",
            Self::Travel => "cyan",
            Self::Other => "gray",
        }
    }

    /// Materialize a Category (with a fresh id) from this default
    pub fn to_category(&self) -> Category {
        Category::new(self.name(), self.icon(), self.color())
    }
}
