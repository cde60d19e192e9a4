use serde::Deserialize;

/// Typed representation of the `nodeType` values the documentation engine
/// cares about.
///
/// Each variant corresponds to a Solidity AST `"nodeType"` value. The
/// `Other` fallback keeps the raw tag of every unrecognized kind so that
/// deserialization never fails on compiler versions we have not seen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum NodeKind {
    // --- Source unit level ---
    SourceUnit,
    PragmaDirective,
    ImportDirective,
    ContractDefinition,

    // --- Contract members ---
    FunctionDefinition,
    ModifierDefinition,
    EventDefinition,
    StructDefinition,
    EnumDefinition,
    EnumValue,
    VariableDeclaration,
    UsingForDirective,

    // --- Helpers ---
    ParameterList,
    Block,
    InheritanceSpecifier,
    UserDefinedTypeName,

    // --- Catch-all ---
    Other(String),
}

impl From<String> for NodeKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "SourceUnit" => Self::SourceUnit,
            "PragmaDirective" => Self::PragmaDirective,
            "ImportDirective" => Self::ImportDirective,
            "ContractDefinition" => Self::ContractDefinition,
            "FunctionDefinition" => Self::FunctionDefinition,
            "ModifierDefinition" => Self::ModifierDefinition,
            "EventDefinition" => Self::EventDefinition,
            "StructDefinition" => Self::StructDefinition,
            "EnumDefinition" => Self::EnumDefinition,
            "EnumValue" => Self::EnumValue,
            "VariableDeclaration" => Self::VariableDeclaration,
            "UsingForDirective" => Self::UsingForDirective,
            "ParameterList" => Self::ParameterList,
            "Block" => Self::Block,
            "InheritanceSpecifier" => Self::InheritanceSpecifier,
            "UserDefinedTypeName" => Self::UserDefinedTypeName,
            _ => Self::Other(tag),
        }
    }
}

impl NodeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::SourceUnit => "SourceUnit",
            Self::PragmaDirective => "PragmaDirective",
            Self::ImportDirective => "ImportDirective",
            Self::ContractDefinition => "ContractDefinition",
            Self::FunctionDefinition => "FunctionDefinition",
            Self::ModifierDefinition => "ModifierDefinition",
            Self::EventDefinition => "EventDefinition",
            Self::StructDefinition => "StructDefinition",
            Self::EnumDefinition => "EnumDefinition",
            Self::EnumValue => "EnumValue",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::UsingForDirective => "UsingForDirective",
            Self::ParameterList => "ParameterList",
            Self::Block => "Block",
            Self::InheritanceSpecifier => "InheritanceSpecifier",
            Self::UserDefinedTypeName => "UserDefinedTypeName",
            Self::Other(tag) => tag,
        }
    }
}

/// A single element of a compiled contract's AST.
///
/// Every attribute is optional: the same record is used for every node kind,
/// and traversal code only looks at the fields it needs. Absent containers
/// read as empty through the accessors below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: Option<i64>,
    pub node_type: Option<NodeKind>,
    pub name: Option<String>,
    pub nodes: Option<Vec<Node>>,
    /// Wrapper whose own `nodes` count as children of this node.
    pub body: Option<Box<Node>>,
    pub super_function: Option<i64>,
    /// Newer compilers list every overridden function here instead of
    /// `superFunction`.
    pub base_functions: Option<Vec<i64>>,
    pub is_constructor: Option<bool>,
    /// Function kind on newer compilers (`"function"`, `"constructor"`, ...).
    pub kind: Option<String>,
    pub contract_kind: Option<String>,
    pub base_contracts: Option<Vec<BaseContract>>,
    pub parameters: Option<ParameterList>,
    pub return_parameters: Option<ParameterList>,
    pub documentation: Option<Documentation>,
    pub visibility: Option<String>,
    pub type_descriptions: Option<TypeDescriptions>,
}

/// One entry of a contract's inheritance list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseContract {
    pub id: Option<i64>,
    pub base_name: Option<BaseName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseName {
    pub name: Option<String>,
    pub referenced_declaration: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterList {
    pub parameters: Option<Vec<Node>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptions {
    pub type_string: Option<String>,
}

/// Natspec attached to a declaration.
///
/// The legacy AST stores a raw string; newer compilers wrap it in a
/// `StructuredDocumentation` node.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Documentation {
    Raw(String),
    Structured { text: Option<String> },
}

impl Documentation {
    pub fn text(&self) -> &str {
        match self {
            Self::Raw(text) => text,
            Self::Structured {
                text,
            } => text.as_deref().unwrap_or_default(),
        }
    }
}

impl BaseContract {
    pub fn name(&self) -> Option<&str> {
        self.base_name.as_ref().and_then(|b| b.name.as_deref())
    }
}

impl ParameterList {
    pub fn parameters(&self) -> &[Node] {
        self.parameters.as_deref().unwrap_or_default()
    }
}

impl Node {
    /// Children in document order: plain `nodes` first, then `body.nodes`.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = &Node> {
        let direct = self.nodes.as_deref().unwrap_or_default();
        let wrapped = self.body.as_ref().and_then(|b| b.nodes.as_deref()).unwrap_or_default();
        direct.iter().chain(wrapped)
    }

    pub fn has_children(&self) -> bool {
        self.children().next().is_some()
    }

    /// The node's id, treating `0` the same as an absent id.
    pub fn node_id(&self) -> Option<i64> {
        self.id.filter(|&id| id != 0)
    }

    pub fn has_id(
        &self,
        id: i64,
    ) -> bool {
        self.id == Some(id)
    }

    pub fn is(
        &self,
        kind: &NodeKind,
    ) -> bool {
        self.node_type.as_ref() == Some(kind)
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Ids of the functions this node directly overrides, one level only.
    pub fn overridden_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.super_function.into_iter().chain(self.base_functions.iter().flatten().copied())
    }

    pub fn overrides_any(
        &self,
        accept: impl FnMut(i64) -> bool,
    ) -> bool {
        self.overridden_ids().any(accept)
    }

    pub fn is_constructor(&self) -> bool {
        self.is_constructor.unwrap_or(false) || self.kind.as_deref() == Some("constructor")
    }

    pub fn base_contracts(&self) -> &[BaseContract] {
        self.base_contracts.as_deref().unwrap_or_default()
    }

    pub fn declares_bases(&self) -> bool {
        !self.base_contracts().is_empty()
    }

    pub fn documentation(&self) -> &str {
        self.documentation.as_ref().map(Documentation::text).unwrap_or_default()
    }

    pub fn type_string(&self) -> Option<&str> {
        self.type_descriptions.as_ref().and_then(|t| t.type_string.as_deref())
    }
}

#[cfg(test)]
#[path = "../../tests/src/ast/nodes_tests.rs"]
mod tests;
