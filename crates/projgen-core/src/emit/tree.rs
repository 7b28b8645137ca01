//! Declarative file tree
//!
//! The planned project is one [`Node`] tree; the preview renders it and the
//! materializer walks it, so the two can never drift apart.

use std::fmt::Write;

/// What a tree node stands for on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A directory the materializer creates.
    Dir,
    /// A directory some later step creates (`.git/` via `git init`). Shown
    /// in the preview, skipped by the materializer.
    ExternalDir,
    /// A file with its full contents.
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub entry: Entry,
    pub children: Vec<Node>,
}

impl Node {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: Entry::Dir,
            children: Vec::new(),
        }
    }

    pub fn external_dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: Entry::ExternalDir,
            children: Vec::new(),
        }
    }

    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: Entry::File(content.into()),
            children: Vec::new(),
        }
    }

    pub fn with(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn is_dir(&self) -> bool {
        !matches!(self.entry, Entry::File(_))
    }

    /// Look up a descendant by a `/`-separated path.
    pub fn find(&self, path: &str) -> Option<&Node> {
        let mut node = self;
        for part in path.split('/').filter(|p| !p.is_empty()) {
            node = node.children.iter().find(|c| c.name == part)?;
        }
        Some(node)
    }
}

const BRANCH: &str = "├── ";
const LEAF: &str = "└── ";
const LINE: &str = "│   ";
const SPACE: &str = "    ";

/// Render the tree the way `tree(1)` draws it; directories get a trailing
/// slash.
pub fn render_tree(root: &Node) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}/", root.name);
    render_children(&root.children, "", &mut out);
    out
}

fn render_children(children: &[Node], prefix: &str, out: &mut String) {
    for (idx, child) in children.iter().enumerate() {
        let last = idx + 1 == children.len();
        let slash = if child.is_dir() { "/" } else { "" };
        let _ = writeln!(
            out,
            "{prefix}{}{}{slash}",
            if last { LEAF } else { BRANCH },
            child.name
        );
        let child_prefix = format!("{prefix}{}", if last { SPACE } else { LINE });
        render_children(&child.children, &child_prefix, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::dir("demo")
            .with(
                Node::dir("src")
                    .with(Node::dir("include"))
                    .with(Node::file("main.cpp", "int main() {}")),
            )
            .with(Node::external_dir(".git"))
            .with(Node::file("CMakeLists.txt", ""))
    }

    #[test]
    fn test_render_glyphs_and_slashes() {
        let rendered = render_tree(&sample());
        assert_eq!(
            rendered,
            "demo/\n\
             ├── src/\n\
             │   ├── include/\n\
             │   └── main.cpp\n\
             ├── .git/\n\
             └── CMakeLists.txt\n"
        );
    }

    #[test]
    fn test_deep_nesting_prefixes() {
        let root = Node::dir("a").with(
            Node::dir("b")
                .with(Node::dir("c").with(Node::file("d", "")))
                .with(Node::file("e", "")),
        );
        assert_eq!(
            render_tree(&root),
            "a/\n\
             └── b/\n\
             \u{20}   ├── c/\n\
             \u{20}   │   └── d\n\
             \u{20}   └── e\n"
        );
    }

    #[test]
    fn test_find_by_path() {
        let root = sample();
        assert!(root.find("src/main.cpp").is_some());
        assert!(root.find("src/include").is_some());
        assert!(root.find("src/nothing").is_none());
        assert_eq!(root.find(""), Some(&root));
    }
}
