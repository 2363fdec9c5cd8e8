//! `cli cluster` commands

use crate::console::Console;
use crate::tree::{Group, Invocation, Leaf};
use anyhow::Result;

/// Build the `cluster` group
#[must_use]
pub fn group() -> Group {
    Group::new("cluster", "Cluster commands")
        .command(Leaf::new("load", "Load a cluster", load).argument("name"))
        .command(Leaf::new("test", "Test a cluster", test).argument("name"))
        .command(Leaf::new("clean", "Clean a cluster", clean).argument("name"))
}

fn load(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Loading cluster: {name}"))?;
    Ok(())
}

fn test(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Testing cluster: {name}"))?;
    Ok(())
}

fn clean(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Cleaning cluster: {name}"))?;
    Ok(())
}
