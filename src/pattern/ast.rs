#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternAst {
    pub nodes: Vec<PatternNode>,
}

impl PatternAst {
    pub fn new(nodes: Vec<PatternNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &PlaceholderNode> {
        self.nodes.iter().filter_map(|node| match node {
            PatternNode::Placeholder(placeholder) => Some(placeholder),
            PatternNode::Literal(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternNode {
    Literal(String),
    Placeholder(PlaceholderNode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderNode {
    pub name: String,
    /// `None` when the placeholder body carries no constraint text.
    pub constraint: Option<String>,
    pub optional: bool,
}

impl PlaceholderNode {
    pub fn new(name: String, constraint: Option<String>, optional: bool) -> Self {
        Self {
            name,
            constraint,
            optional,
        }
    }
}
