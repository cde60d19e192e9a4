use std::{path::Path, sync::LazyLock};

use regex::Regex;

use crate::{
    ast::{Contract, Node},
    config::Settings,
    docs::natspec::{Natspec, single_line},
    error::{Error, Result},
    reference::{ContractReferenceBuilder, FunctionReferenceBuilder, contract_anchors},
    resolve::{
        constructor_node, contract_node, enumerators, events, functions, members, modifiers, parameters,
        return_parameters, structs,
    },
};

static BLANK_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank line regex"));

/// Built-in page template. Every `{{Placeholder}}` is substituted by
/// [`PageRenderer::render`].
pub const DEFAULT_TEMPLATE: &str = "# {{ContractTitle}}

{{ContractInheritancePath}}

{{ContractImplementations}}

{{ContractDescription}}

{{ContractMembers}}

{{Constructor}}

{{Functions}}

{{ABI}}

## Contracts

{{AllContractsAnchor}}
";

/// Name of the page listing every contract.
pub const INDEX_PAGE: &str = "README.md";

/// Read a custom page template, or return the built-in one.
pub async fn load_template(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        return Ok(DEFAULT_TEMPLATE.to_owned());
    };
    let template = tokio::fs::read_to_string(path).await.map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !template.contains("{{") {
        return Err(Error::InvalidTemplate {
            message: "template has no {{Placeholder}}".to_owned(),
            path: path.to_path_buf(),
        });
    }
    Ok(template)
}

/// Renders one markdown page per contract.
pub struct PageRenderer<'a> {
    contracts: &'a [Contract],
    settings: &'a Settings,
    template: &'a str,
}

impl<'a> PageRenderer<'a> {
    pub fn new(
        contracts: &'a [Contract],
        settings: &'a Settings,
        template: &'a str,
    ) -> Self {
        Self {
            contracts,
            settings,
            template,
        }
    }

    pub fn render(
        &self,
        contract: &Contract,
    ) -> Result<String> {
        let messages = &self.settings.messages;
        let links = ContractReferenceBuilder::new(contract, self.contracts, messages)
            .with_lookup(self.settings.resolve.lookup_mode);
        let natspec = contract_node(contract).map(|node| Natspec::parse(node.documentation())).unwrap_or_default();

        let title = match natspec.title() {
            Some(title) => format!("{} ({}.sol)", single_line(title), contract.contract_name),
            None => format!("{}.sol", contract.contract_name),
        };

        let page = self
            .template
            .replace("{{ContractName}}", &contract.contract_name)
            .replace("{{ContractTitle}}", &title)
            .replace("{{ContractDescription}}", natspec.notice())
            .replace("{{ContractInheritancePath}}", &links.inheritance_path())
            .replace("{{ContractImplementations}}", &links.implementations())
            .replace("{{ContractMembers}}", &render_members(contract))
            .replace("{{Constructor}}", &self.render_constructor(contract))
            .replace("{{Functions}}", &self.render_functions(contract))
            .replace("{{AllContractsAnchor}}", &contract_anchors(self.contracts))
            .replace("{{ABI}}", &self.render_abi(contract)?);

        Ok(tidy(&page))
    }

    /// The index page linking every contract.
    pub fn render_index(&self) -> String {
        tidy(&format!("# Contracts\n\n{}\n", contract_anchors(self.contracts)))
    }

    fn render_constructor(
        &self,
        contract: &Contract,
    ) -> String {
        match constructor_node(contract) {
            Some(node) => format!("## Constructor\n\n{}", self.render_function(node)),
            None => String::new(),
        }
    }

    fn render_functions(
        &self,
        contract: &Contract,
    ) -> String {
        let blocks: Vec<String> = functions(contract)
            .into_iter()
            .filter(|node| !node.is_constructor())
            .map(|node| self.render_function(node))
            .collect();
        if blocks.is_empty() {
            return String::new();
        }
        format!("## Functions\n\n{}", blocks.join("\n\n"))
    }

    fn render_function(
        &self,
        node: &Node,
    ) -> String {
        let natspec = Natspec::parse(node.documentation());
        let overridden = FunctionReferenceBuilder::new(node, self.contracts, &self.settings.messages).build();

        let mut blocks = vec![format!("### {}", function_heading(node))];
        if !overridden.is_empty() {
            blocks.push(overridden);
        }
        if !natspec.notice().is_empty() {
            blocks.push(natspec.notice().to_owned());
        }
        blocks.push(format!("```solidity\n{}\n```", signature(node)));
        blocks.join("\n\n")
    }

    fn render_abi(
        &self,
        contract: &Contract,
    ) -> Result<String> {
        if !self.settings.output.include_abi || contract.abi.is_null() {
            return Ok(String::new());
        }
        let abi = serde_json::to_string_pretty(&contract.abi)?;
        Ok(format!("## ABI\n\n```json\n{abi}\n```"))
    }
}

fn render_members(contract: &Contract) -> String {
    let sections = [
        ("Constants & Variables", members(contract)),
        ("Events", events(contract)),
        ("Modifiers", modifiers(contract)),
        ("Structs", structs(contract)),
        ("Enums", enumerators(contract)),
    ];

    sections
        .into_iter()
        .filter(|(_, nodes)| !nodes.is_empty())
        .map(|(title, nodes)| {
            let items: Vec<String> = nodes.iter().map(|node| format!("- `{}`", declaration_summary(node))).collect();
            format!("**{title}**\n\n{}", items.join("\n"))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn function_heading(node: &Node) -> &str {
    if !node.name().is_empty() {
        return node.name();
    }
    if node.is_constructor() {
        return "constructor";
    }
    node.kind.as_deref().unwrap_or("fallback")
}

/// `type name` for variables, `name(params)` for everything that takes
/// parameters.
fn declaration_summary(node: &Node) -> String {
    if node.parameters.is_some() {
        return format!("{}({})", node.name(), parameter_list(parameters(node)));
    }
    match node.type_string() {
        Some(ty) => format!("{ty} {}", node.name()),
        None => node.name().to_owned(),
    }
}

fn signature(node: &Node) -> String {
    let keyword = if node.is_constructor() { "constructor" } else { "function" };
    let mut signature = keyword.to_owned();
    if !node.is_constructor() && !node.name().is_empty() {
        signature.push(' ');
        signature.push_str(node.name());
    }
    signature.push('(');
    signature.push_str(&parameter_list(parameters(node)));
    signature.push(')');
    if let Some(visibility) = node.visibility.as_deref() {
        signature.push(' ');
        signature.push_str(visibility);
    }
    let returns = return_parameters(node);
    if !returns.is_empty() {
        signature.push_str(&format!(" returns ({})", parameter_list(returns)));
    }
    signature
}

fn parameter_list(parameters: &[Node]) -> String {
    parameters
        .iter()
        .map(|parameter| match (parameter.type_string(), parameter.name()) {
            (Some(ty), "") => ty.to_owned(),
            (Some(ty), name) => format!("{ty} {name}"),
            (None, name) => name.to_owned(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapse the blank lines left by empty placeholders and end with exactly
/// one newline.
fn tidy(page: &str) -> String {
    let collapsed = BLANK_RUNS.replace_all(page, "\n\n");
    format!("{}\n", collapsed.trim())
}
