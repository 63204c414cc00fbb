use clap::ValueEnum;
use derive_more::Display;
use filetree::selection::Selection;

/// A key-press worth of navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display)]
pub enum NavigationCommand {
    #[display("next")]
    Next,
    #[display("previous")]
    Previous,
    #[display("child")]
    Child,
    #[display("parent")]
    Parent,
}

impl NavigationCommand {
    pub fn apply<H>(&self, selection: &Selection<H>) -> Selection<H> {
        match self {
            NavigationCommand::Next => selection.select_next(),
            NavigationCommand::Previous => selection.select_previous(),
            NavigationCommand::Child => selection.visit_child(),
            NavigationCommand::Parent => selection.visit_parent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetree::tree::FileTree;

    #[test]
    fn commands_drive_the_selection() {
        let tree = FileTree::new()
            .insert("/root/fileA.ext", 0)
            .insert("/root/DIR/fileB.ext", 1);
        let commands = [
            (NavigationCommand::Next, "/DIR"),
            (NavigationCommand::Child, "/DIR/fileB.ext"),
            (NavigationCommand::Parent, "/fileA.ext"),
            (NavigationCommand::Next, "/DIR"),
            (NavigationCommand::Previous, "/fileA.ext"),
        ];

        commands
            .iter()
            .fold(Selection::new(tree), |selection, (command, expected)| {
                let next = command.apply(&selection);
                assert_eq!(next.selected().path(), *expected, "after {command}");
                next
            });
    }
}
