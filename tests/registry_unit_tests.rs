//! Unit tests for command registration

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use nestcli::console::Console;
    use nestcli::error::CliError;
    use nestcli::registry::{Registry, register};
    use nestcli::tree::{CommandNode, Group, Invocation, Leaf};

    fn noop(_: &Invocation, _: &dyn Console) -> anyhow::Result<()> {
        Ok(())
    }

    fn registration_message(root: Group) -> String {
        match Registry::from_root(root).unwrap_err() {
            CliError::Registration { message } => message,
            other => panic!("expected registration error, got {other}"),
        }
    }

    #[test]
    fn shipped_tree_shape() {
        let root = register().unwrap();
        assert_eq!(root.name(), "cli");
        assert_eq!(root.child_names(), vec!["app", "image", "cluster"]);

        let Some(CommandNode::Group(app)) = root.child("app") else {
            panic!("app is a group");
        };
        assert_eq!(app.child_names(), vec!["build", "test", "inspect"]);

        let Some(CommandNode::Group(inspect)) = app.child("inspect") else {
            panic!("inspect is a group");
        };
        let Some(CommandNode::Leaf(version)) = inspect.child("version") else {
            panic!("version is a leaf");
        };
        assert!(version.arguments().is_empty());

        let Some(CommandNode::Group(cluster)) = root.child("cluster") else {
            panic!("cluster is a group");
        };
        assert_eq!(cluster.child_names(), vec!["load", "test", "clean"]);
    }

    #[test]
    fn registry_owns_the_tree() {
        let registry = Registry::build().unwrap();
        assert_eq!(registry.root().children().len(), 3);
    }

    #[test]
    fn rejects_duplicate_siblings() {
        let root = Group::new("cli", "").group(
            Group::new("app", "App commands")
                .command(Leaf::new("build", "Build", noop))
                .command(Leaf::new("build", "Build again", noop)),
        );
        assert_eq!(
            registration_message(root),
            "Duplicate command 'build' in group 'cli app'"
        );
    }

    #[test]
    fn same_name_in_different_groups_is_fine() {
        let root = Group::new("cli", "")
            .group(Group::new("app", "").command(Leaf::new("test", "", noop)))
            .group(Group::new("cluster", "").command(Leaf::new("test", "", noop)));
        Registry::from_root(root).unwrap();
    }

    #[test]
    fn rejects_empty_groups() {
        let root = Group::new("cli", "").group(Group::new("hollow", ""));
        assert_eq!(registration_message(root), "Group 'cli hollow' has no commands");
    }

    #[test]
    fn rejects_malformed_names() {
        let root = Group::new("cli", "").command(Leaf::new("two words", "", noop));
        assert!(registration_message(root).contains("Invalid command name"));

        let root = Group::new("cli", "").command(Leaf::new("--help", "", noop));
        assert!(registration_message(root).contains("Invalid command name"));

        let root = Group::new("cli", "").command(Leaf::new("", "", noop));
        assert!(registration_message(root).contains("empty name"));
    }

    #[test]
    fn rejects_repeated_arguments() {
        let root = Group::new("cli", "")
            .command(Leaf::new("copy", "", noop).argument("path").argument("path"));
        assert_eq!(
            registration_message(root),
            "Command 'cli copy' declares argument 'path' twice"
        );
    }
}
