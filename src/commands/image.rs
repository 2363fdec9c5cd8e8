//! `cli image` commands

use crate::console::Console;
use crate::tree::{Group, Invocation, Leaf};
use anyhow::Result;

/// Build the `image` group
#[must_use]
pub fn group() -> Group {
    Group::new("image", "Image commands")
        .command(Leaf::new("build", "Build an image", build).argument("name"))
        .command(Leaf::new("push", "Push an image", push).argument("name"))
}

fn build(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Building image: {name}"))?;
    Ok(())
}

fn push(invocation: &Invocation, console: &dyn Console) -> Result<()> {
    let name = invocation.require("name")?;
    console.echo(&format!("Pushing image: {name}"))?;
    Ok(())
}
