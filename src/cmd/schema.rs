//! Schema command - print the shape of the reference catalog

use crate::core::Catalog;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = schema_for!(Catalog);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}
