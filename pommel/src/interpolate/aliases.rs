//! The fixed alias table for reflected tokens.
//!
//! Every reflected binding `${project.X}` is also reachable as `${pom.X}`
//! and `${X}` when `X` is one of the known leaf fields or sits under one of
//! the known subtrees. The `${version}` aliasing is conditional: it only
//! applies when the caller did not bind `project.version` itself.

use regex::Regex;

use crate::property::InterpolatorProperty;

const LEAF_FIELDS: &[&str] = &[
    "modelVersion",
    "groupId",
    "artifactId",
    "version",
    "packaging",
    "name",
    "description",
    "inceptionYear",
    "url",
];

const SUBTREE_FIELDS: &[&str] = &[
    "parent",
    "prerequisites",
    "organization",
    "build",
    "reporting",
    "scm",
    "distributionManagement",
    "issueManagement",
    "ciManagement",
];

/// Expands reflected bindings along the fixed alias table.
#[derive(Debug)]
pub(crate) struct AliasTable {
    project_key: Regex,
    alias_version: bool,
}

impl AliasTable {
    /// Build the table; `alias_version` enables the conditional
    /// `${project.version}` ⇄ `${version}` pair.
    pub(crate) fn new(alias_version: bool) -> Result<Self, regex::Error> {
        Ok(Self {
            project_key: Regex::new(r"^\$\{project\.([^}]+)\}$")?,
            alias_version,
        })
    }

    /// Alias variants of one binding, not including the binding itself.
    pub(crate) fn expand(&self, source: &InterpolatorProperty) -> Vec<InterpolatorProperty> {
        let mut variants = Vec::new();
        if let Some(captures) = self.project_key.captures(source.key()) {
            let rest = &captures[1];
            if self.is_aliased(rest) {
                for key in [format!("${{pom.{rest}}}"), format!("${{{rest}}}")] {
                    let mut variant = source.clone();
                    variant.set_key(key);
                    variants.push(variant);
                }
            }
        } else if self.alias_version && source.key() == "${version}" {
            for key in ["${project.version}", "${pom.version}"] {
                let mut variant = source.clone();
                variant.set_key(key.to_owned());
                variants.push(variant);
            }
        }
        variants
    }

    fn is_aliased(&self, rest: &str) -> bool {
        if rest == "version" && !self.alias_version {
            return false;
        }
        if LEAF_FIELDS.contains(&rest) {
            return true;
        }
        let head = rest.split('.').next().unwrap_or(rest);
        SUBTREE_FIELDS.contains(&head)
    }
}
