//! Plain-text outline of a display tree, two spaces per level.

use std::fmt::{self, Write};

use super::DisplayNode;

const INDENT: &str = "  ";

/// Renders `node` to an owned string; see [`write_outline`].
pub fn outline(node: &DisplayNode) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_outline(&mut out, node, 0);
    out
}

/// Writes one line per leaf. Record entries are `label: value`, list entries
/// `- value`; containers open a nested block one level deeper.
pub fn write_outline<W: Write + ?Sized>(w: &mut W, node: &DisplayNode, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    match node {
        DisplayNode::List(items) if !items.is_empty() => {
            for item in items {
                match inline(item) {
                    Some(text) => writeln!(w, "{indent}- {text}")?,
                    None => {
                        writeln!(w, "{indent}-")?;
                        write_outline(w, item, depth + 1)?;
                    }
                }
            }
            Ok(())
        }
        DisplayNode::Record(entries) if !entries.is_empty() => {
            for entry in entries {
                match inline(&entry.value) {
                    Some(text) => writeln!(w, "{indent}{}: {text}", entry.label)?,
                    None => {
                        writeln!(w, "{indent}{}:", entry.label)?;
                        write_outline(w, &entry.value, depth + 1)?;
                    }
                }
            }
            Ok(())
        }
        leaf => writeln!(w, "{indent}{}", inline(leaf).unwrap_or_default()),
    }
}

/// Single-line form of leaves and empty containers.
fn inline(node: &DisplayNode) -> Option<String> {
    match node {
        DisplayNode::Text(s) => Some(s.clone()),
        DisplayNode::Link { url } => Some(url.clone()),
        DisplayNode::Audio { url } => Some(format!("[audio] {url}")),
        DisplayNode::Image { url } => Some(format!("[image] {url}")),
        DisplayNode::List(items) if items.is_empty() => Some("[]".to_string()),
        DisplayNode::Record(entries) if entries.is_empty() => Some("{}".to_string()),
        DisplayNode::List(_) | DisplayNode::Record(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use serde_json::json;

    #[test]
    fn scalar_root_is_one_line() {
        assert_eq!(outline(&render(&json!(42))), "42\n");
        assert_eq!(outline(&render(&json!([]))), "[]\n");
    }

    #[test]
    fn nested_record_outline() {
        let value = json!({
            "name": "pikachu",
            "base_experience": 112,
            "cries": { "latest": "https://x/cries/25.ogg" },
            "sprites": { "front_default": "https://x/sprites/25.png", "back_female": null },
            "species": { "url": "https://x/api/v2/pokemon-species/25/" },
            "types": [ { "slot": 1, "type": { "name": "electric" } } ],
            "forms": [],
            "moves": ["thunder_shock", "growl"]
        });
        let expected = "\
name: pikachu
base experience: 112
cries:
  latest: [audio] https://x/cries/25.ogg
sprites:
  front default: [image] https://x/sprites/25.png
  back female: null
species:
  url: https://x/api/v2/pokemon-species/25/
types:
  -
    slot: 1
    type:
      name: electric
forms: []
moves:
  - thunder_shock
  - growl
";
        assert_eq!(outline(&render(&value)), expected);
    }
}
