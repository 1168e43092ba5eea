/// A tool whose prompts live in one folder under the prompts root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Stable identifier used on the command line and in config.
    pub slug: String,
    /// Tab label.
    pub name: String,
    pub description: String,
    /// Folder name relative to the prompts root.
    pub folder: String,
}

impl Category {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
            folder: folder.into(),
        }
    }
}

/// The ordered set of categories shown as tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The categories bundled with the prompt collection, in tab order.
    pub fn builtin() -> Self {
        let entries = [
            ("v0", "v0", "v0 system prompts and tools", "v0 Prompts and Tools"),
            ("cursor", "Cursor", "Cursor system prompts", "Cursor Prompts"),
            (
                "manus",
                "Manus",
                "Manus agent tools and prompts",
                "Manus Agent Tools & Prompt",
            ),
            ("same-dev", "Same.dev", "Same.dev system prompts", "Same.dev"),
            ("lovable", "Lovable", "Lovable system prompts", "Lovable"),
            ("devin", "Devin", "Devin AI system prompts", "Devin AI"),
            ("replit", "Replit", "Replit agent system prompts", "Replit"),
            (
                "windsurf",
                "Windsurf",
                "Windsurf agent system prompts",
                "Windsurf",
            ),
            (
                "vscode",
                "VSCode",
                "VSCode (Copilot) agent system prompts",
                "VSCode Agent",
            ),
        ];
        Self::new(
            entries
                .into_iter()
                .map(|(slug, name, description, folder)| {
                    Category::new(slug, name, description, folder)
                })
                .collect(),
        )
    }

    /// Finds a category by exact slug
    pub fn find(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Tab index of a category
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.slug == slug)
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.categories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_in_tab_order() {
        let catalog = Catalog::builtin();
        let slugs: Vec<&str> = catalog.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "v0", "cursor", "manus", "same-dev", "lovable", "devin", "replit", "windsurf",
                "vscode"
            ]
        );
    }

    #[test]
    fn find_maps_slug_to_folder() {
        let catalog = Catalog::builtin();
        let manus = catalog.find("manus").unwrap();
        assert_eq!(manus.folder, "Manus Agent Tools & Prompt");
        assert_eq!(catalog.position("manus"), Some(2));
    }

    #[test]
    fn unknown_slug_is_not_found() {
        let catalog = Catalog::builtin();
        assert!(catalog.find("open-source").is_none());
        assert!(catalog.find("Cursor").is_none());
        assert_eq!(catalog.position("nope"), None);
    }

    #[test]
    fn custom_catalog_keeps_given_order() {
        let catalog = Catalog::new(vec![
            Category::new("b", "B", "", "b"),
            Category::new("a", "A", "", "a"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().slug, "b");
        assert!(!catalog.is_empty());
    }
}
