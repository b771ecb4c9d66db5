//! Tools page directory.
//!
//! # Responsibility
//! - Browse the tool registry by name and a single category tab.
//! - Open one tool at a time.
//!
//! # Invariants
//! - At most one category is selected; `None` means every category.
//! - Default order is name ascending.

use crate::catalog::seed::tool_registry;
use crate::catalog::Catalog;
use crate::filter::SortOrder;
use crate::model::tool::{ToolCategory, ToolDefinition};
use crate::selection::DetailView;
use crate::service::directory::DirectorySession;

#[derive(Debug, Clone)]
pub struct ToolDirectory {
    session: DirectorySession<ToolDefinition>,
    category: Option<ToolCategory>,
}

impl ToolDirectory {
    /// Mounts the directory over the built-in registry.
    pub fn open() -> Self {
        Self::mount(tool_registry())
    }

    pub fn mount(catalog: Catalog<ToolDefinition>) -> Self {
        let mut session = DirectorySession::mount(catalog);
        session.set_order(SortOrder::NameAscending);
        Self {
            session,
            category: None,
        }
    }

    pub fn category(&self) -> Option<ToolCategory> {
        self.category
    }

    /// Switches the category tab; `None` shows every category.
    pub fn set_category(&mut self, category: Option<ToolCategory>) {
        self.session.clear_facets();
        if let Some(category) = category {
            self.session.toggle_facet(category.as_str());
        }
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.session.set_query(query);
    }

    pub fn order(&self) -> SortOrder {
        self.session.order()
    }

    /// Flips between name ascending and name descending.
    pub fn toggle_order(&mut self) -> SortOrder {
        let order = self.session.order().toggled();
        self.session.set_order(order);
        order
    }

    pub fn visible(&self) -> Vec<&ToolDefinition> {
        self.session.visible()
    }

    /// Opens a tool; unknown ids leave the active tool unchanged.
    pub fn open_tool(&mut self, id: &str) -> bool {
        self.session.select(id)
    }

    /// Returns to the tool grid.
    pub fn close_tool(&mut self) {
        self.session.clear_selection();
    }

    pub fn active_tool(&self) -> DetailView<'_, ToolDefinition> {
        self.session.detail()
    }

    pub fn unmount(self) -> Catalog<ToolDefinition> {
        self.session.unmount()
    }
}
