//! `cli app` commands

use crate::console::Console;
use crate::tree::{Group, Invocation, Leaf};
use anyhow::Result;

/// Build the `app` group, including the nested `inspect` group
#[must_use]
pub fn group() -> Group {
    Group::new("app", "App commands")
        .command(Leaf::new("build", "Build an app", build).argument("name"))
        .command(Leaf::new("test", "Test an app", test).argument("name"))
        .group(
            Group::new("inspect", "Inspect commands")
                .command(Leaf::new("name", "Get app name", inspect_name))
                .command(Leaf::new("version", "Get app version", inspect_version)),
        )
}

fn build(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Building app: {name}"))?;
    Ok(())
}

fn test(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Testing app: {name}"))?;
    Ok(())
}

fn inspect_name(_invocation: &Invocation, console: &dyn Console) -> Result<()> {
    console.echo("name is app-something")?;
    Ok(())
}

fn inspect_version(_invocation: &Invocation, console: &dyn Console) -> Result<()> {
    console.echo("version is x.y.z")?;
    Ok(())
}
