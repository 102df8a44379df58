//! Rendering of the aggregated errors into a Solidity contract.
use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{errors::CollectorErr, error_set::ErrorSet, utils::project::contract_name};

const LICENSE_LINE: &str = "// SPDX-License-Identifier: UNLICENSED";
const PRAGMA_LINE: &str = "pragma solidity ^0.8.28;";
const DESCRIPTION_LINE: &str = "// Contract containing all collected custom errors";
const GENERATED_LINE: &str = "/* This file is generated automatically */";
const INDENT: &str = "    ";

/// The generated artifact: a contract named after the output file holding every collected error.
#[derive(Debug, Clone)]
pub struct OutputContract<'a> {
    pub name: String,
    pub errors: &'a ErrorSet,
}

impl<'a> OutputContract<'a> {
    /// # Errors
    /// - `CollectorErr::InvalidOutputPath` if `output` has no file name.
    pub fn for_output(output: &Path, errors: &'a ErrorSet) -> Result<Self, CollectorErr> {
        let name = contract_name(output)
            .ok_or_else(|| CollectorErr::InvalidOutputPath(output.to_path_buf()))?;
        Ok(OutputContract { name, errors })
    }

    /// Renders the contract source. The same set always renders to the same bytes.
    #[must_use]
    pub fn render(&self) -> String {
        let mut source = format!(
            "{LICENSE_LINE}\n{PRAGMA_LINE}\n\n{DESCRIPTION_LINE}\n{GENERATED_LINE}\n\ncontract {} {{\n",
            self.name
        );
        for error in self.errors {
            source.push_str(&format!("{INDENT}{error}\n"));
        }
        source.push_str("}\n");
        source
    }
}

/// Writes the contract for `errors` to `output`, replacing any previous content.
///
/// # Errors
/// - `CollectorErr::InvalidOutputPath` if `output` has no file name.
/// - `CollectorErr::Write` if the file cannot be created or written.
pub fn generate_contract(errors: &ErrorSet, output: &Path) -> Result<PathBuf, CollectorErr> {
    let contract = OutputContract::for_output(output, errors)?;
    fs::write(output, contract.render()).map_err(|source| CollectorErr::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        contract = %contract.name,
        errors = errors.len(),
        path = %output.display(),
        "wrote errors contract"
    );
    Ok(output.to_path_buf())
}
