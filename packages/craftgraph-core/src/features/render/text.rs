//! Indented text rendering of resolved trees.

use crate::features::crafting::domain::CraftNode;

/// Render the tree as indented lines, one entity per line.
///
/// The root sits at column zero. Every other line is indented two spaces
/// per level with the final two characters replaced by `└─`. Basic entities
/// carry the ` (BASIC)` suffix.
pub fn render_text(tree: &CraftNode) -> String {
    let mut out = String::new();
    render_into(tree, 0, &mut out);
    out
}

fn render_into(node: &CraftNode, indent: usize, out: &mut String) {
    if indent > 0 {
        for _ in 0..indent - 1 {
            out.push_str("  ");
        }
        out.push_str("└─");
    }
    out.push_str(&node.name);
    if node.is_basic() {
        out.push_str(" (BASIC)");
    }
    out.push('\n');

    if let Some([first, second]) = &node.ingredients {
        render_into(first, indent + 1, out);
        render_into(second, indent + 1, out);
    }
}
