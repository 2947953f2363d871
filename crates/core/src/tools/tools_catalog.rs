use std::collections::HashMap;

use log::debug;

use super::tools_constants::{tool_brands, tool_codes};
use super::tools_errors::CatalogError;
use super::tools_model::{Tool, ToolType};

/// The set of tools available for rental.
///
/// Code uniqueness is enforced per catalog instance, so independent catalogs
/// (for example one per test) never see each other's codes.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    /// Tools in registration order.
    tools: Vec<Tool>,
    /// Code -> index into `tools`.
    index: HashMap<String, usize>,
}

impl ToolCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog of tools the store currently rents out.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        let stock = [
            (tool_codes::CHNS, ToolType::Chainsaw, tool_brands::STIHL),
            (tool_codes::LADW, ToolType::Ladder, tool_brands::WERNER),
            (tool_codes::JAKD, ToolType::Jackhammer, tool_brands::DEWALT),
            (tool_codes::JAKR, ToolType::Jackhammer, tool_brands::RIGID),
        ];
        for (code, tool_type, brand) in stock {
            catalog.insert(Tool::new(code.to_string(), tool_type, brand.to_string()));
        }
        catalog
    }

    /// Registers a new tool and returns a copy of it.
    ///
    /// Fails if `code` is empty or already registered in this catalog.
    pub fn register(
        &mut self,
        code: impl Into<String>,
        tool_type: ToolType,
        brand: impl Into<String>,
    ) -> Result<Tool, CatalogError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(CatalogError::EmptyToolCode);
        }
        if self.index.contains_key(&code) {
            return Err(CatalogError::DuplicateToolCode(code));
        }

        let tool = Tool::new(code, tool_type, brand.into());
        self.insert(tool.clone());
        Ok(tool)
    }

    fn insert(&mut self, tool: Tool) {
        debug!(
            "Registered tool {} ({} by {})",
            tool.code(),
            tool.tool_type().description(),
            tool.brand()
        );
        self.index.insert(tool.code().to_string(), self.tools.len());
        self.tools.push(tool);
    }

    /// Looks up a tool by its code.
    pub fn get(&self, code: &str) -> Option<&Tool> {
        self.index.get(code).map(|&i| &self.tools[i])
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// All tools, in registration order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
