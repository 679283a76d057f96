#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub static_routes: usize,
    pub named_routes: usize,
    pub optional_placeholders: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self, is_static: bool, is_named: bool, optional_placeholders: usize) {
        self.total_routes_registered += 1;
        if is_static {
            self.static_routes += 1;
        }
        if is_named {
            self.named_routes += 1;
        }
        self.optional_placeholders += optional_placeholders;
    }

    pub fn dynamic_routes(&self) -> usize {
        self.total_routes_registered - self.static_routes
    }
}
