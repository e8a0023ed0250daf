use serde::{Deserialize, Serialize};

/// Controller target of a menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuUrl {
    pub module: String,
    pub action: String,
}

impl MenuUrl {
    #[must_use]
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
        }
    }
}

/// One registration in the admin menu.
///
/// An entry without `name` declares the category itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub category: String,
    pub name: Option<String>,
    pub url: Option<MenuUrl>,
    pub display: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCategory<'a> {
    pub name: &'a str,
    pub order: i32,
    pub url: Option<&'a MenuUrl>,
    pub children: Vec<&'a MenuEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminMenu {
    entries: Vec<MenuEntry>,
}

impl AdminMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sub_menu(
        &mut self,
        category: &str,
        name: Option<&str>,
        url: Option<MenuUrl>,
        display: bool,
        order: i32,
    ) {
        self.entries.push(MenuEntry {
            category: category.to_owned(),
            name: name.map(str::to_owned),
            url,
            display,
            order,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Displayed categories with their displayed children, both sorted by order.
    ///
    /// A category takes the order of its own declaration, or the lowest order
    /// of its children when it was never declared. Categories declared hidden
    /// are left out with their children.
    #[must_use]
    pub fn tree(&self) -> Vec<MenuCategory<'_>> {
        let mut categories: Vec<MenuCategory<'_>> = Vec::new();
        let mut hidden: Vec<&str> = Vec::new();

        for entry in &self.entries {
            if entry.name.is_none() && !entry.display {
                hidden.push(&entry.category);
                continue;
            }
            if !entry.display {
                continue;
            }
            let position = match categories.iter().position(|c| c.name == entry.category) {
                Some(position) => position,
                None => {
                    categories.push(MenuCategory {
                        name: &entry.category,
                        order: entry.order,
                        url: None,
                        children: Vec::new(),
                    });
                    categories.len() - 1
                }
            };
            let category = &mut categories[position];
            match entry.name {
                None => {
                    category.order = entry.order;
                    category.url = entry.url.as_ref();
                }
                Some(_) => {
                    if !self.is_declared(&entry.category) {
                        category.order = category.order.min(entry.order);
                    }
                    category.children.push(entry);
                }
            }
        }

        categories.retain(|category| !hidden.contains(&category.name));
        for category in &mut categories {
            category.children.sort_by_key(|entry| entry.order);
        }
        categories.sort_by_key(|category| category.order);
        categories
    }

    fn is_declared(&self, category: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.name.is_none() && entry.category == category)
    }
}
