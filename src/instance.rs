//! Forge / Alloy instance reader — converts instance XML into signatures
//! and field tuples keyed by label.
//!
//! ```xml
//! <alloy>
//!   <instance bitwidth="4" ...>
//!     <sig label="this/String" ID="4" parentID="2">
//!       <atom label="String0"/>
//!     </sig>
//!     <field label="stringPos" ID="7" parentID="4">
//!       <tuple><atom label="String0"/><atom label="1"/></tuple>
//!     </field>
//!   </instance>
//! </alloy>
//! ```

use std::collections::HashMap;

use roxmltree::{Document, Node};

use crate::error::{FretError, FretResult};

/// The atoms and relations of one instance.
#[derive(Debug, Clone, Default)]
pub struct Instance {
    sigs: HashMap<String, Vec<String>>,
    fields: HashMap<String, Vec<Vec<String>>>,
}

impl Instance {
    /// Parse instance XML. When a document holds several `<instance>`
    /// elements (a temporal trace), the first one is read.
    pub fn parse(xml: &str) -> FretResult<Self> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = Document::parse_with_options(xml, options)?;

        let node = doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "instance")
            .ok_or_else(|| FretError::Instance("no <instance> element".into()))?;

        let mut instance = Instance::default();
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "sig" => parse_sig(&child, &mut instance),
                "field" => parse_field(&child, &mut instance),
                _ => {}
            }
        }
        Ok(instance)
    }

    /// Atoms of a signature; `"String"` also matches `"this/String"`.
    pub fn atoms(&self, sig: &str) -> &[String] {
        self.sigs
            .get(sig)
            .or_else(|| self.sigs.get(&format!("this/{sig}")))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn tuples(&self, field: &str) -> &[Vec<String>] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// `atom.field`: the tails of every tuple whose head is `atom`.
    pub fn join<'a>(&'a self, atom: &'a str, field: &str) -> impl Iterator<Item = &'a [String]> + 'a {
        self.tuples(field)
            .iter()
            .filter(move |t| t.first().map(String::as_str) == Some(atom))
            .map(|t| &t[1..])
    }

    /// `atom.field` for a binary field: the single related atom, if any.
    pub fn join_one(&self, atom: &str, field: &str) -> Option<&str> {
        self.tuples(field)
            .iter()
            .filter(|t| t.first().map(String::as_str) == Some(atom))
            .find_map(|t| t.get(1))
            .map(String::as_str)
    }
}

fn parse_sig(node: &Node, instance: &mut Instance) {
    let Some(label) = node.attribute("label") else {
        return;
    };
    let atoms = atom_labels(node);
    instance
        .sigs
        .entry(label.to_string())
        .or_default()
        .extend(atoms);
}

fn parse_field(node: &Node, instance: &mut Instance) {
    let Some(label) = node.attribute("label") else {
        return;
    };
    let tuples: Vec<Vec<String>> = node
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "tuple")
        .map(|t| atom_labels(&t))
        .collect();
    // Fields with the same label on different sigs are merged.
    instance
        .fields
        .entry(label.to_string())
        .or_default()
        .extend(tuples);
}

fn atom_labels(node: &Node) -> Vec<String> {
    node.children()
        .filter(|n| n.is_element() && n.tag_name().name() == "atom")
        .filter_map(|n| n.attribute("label"))
        .map(String::from)
        .collect()
}

/// Integer id of an atom: the label itself for Int atoms ("3", "-1"),
/// otherwise its trailing digits ("String3" → 3, "Interval$2" → 2).
pub fn atom_index(label: &str) -> Option<i64> {
    if let Ok(n) = label.parse::<i64>() {
        return Some(n);
    }
    let digits_at = label
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    label[digits_at..].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<alloy builddate="2024">
<instance bitwidth="4" maxseq="-1">
  <sig label="Int" ID="0" parentID="1" builtin="yes">
    <atom label="0"/><atom label="1"/>
  </sig>
  <sig label="this/String" ID="4" parentID="2">
    <atom label="String0"/><atom label="String1"/>
  </sig>
  <field label="stringPos" ID="5" parentID="4">
    <tuple><atom label="String0"/><atom label="1"/></tuple>
    <tuple><atom label="String1"/><atom label="0"/></tuple>
    <types><type ID="4"/><type ID="0"/></types>
  </field>
</instance>
</alloy>"#;

    #[test]
    fn reads_sigs_and_fields() {
        let inst = Instance::parse(XML).unwrap();
        assert_eq!(inst.atoms("String"), ["String0", "String1"]);
        assert_eq!(inst.atoms("Int").len(), 2);
        assert!(inst.atoms("PlayedNote").is_empty());
        assert_eq!(inst.join_one("String1", "stringPos"), Some("0"));
        assert_eq!(inst.join_one("String2", "stringPos"), None);
        let tails: Vec<&[String]> = inst.join("String0", "stringPos").collect();
        assert_eq!(tails, [["1".to_string()].as_slice()]);
        assert!(!inst.has_field("frets"));
    }

    #[test]
    fn joined_atom_outlives_the_lookup_key() {
        let inst = Instance::parse(XML).unwrap();
        let pos = {
            let key = format!("String{}", 0);
            inst.join_one(&key, "stringPos")
        };
        assert_eq!(pos, Some("1"));
    }

    #[test]
    fn rejects_documents_without_instance() {
        assert!(matches!(
            Instance::parse("<alloy/>"),
            Err(FretError::Instance(_))
        ));
        assert!(matches!(Instance::parse("not xml"), Err(FretError::Xml(_))));
    }

    #[test]
    fn atom_index_reads_ints_and_suffixes() {
        assert_eq!(atom_index("3"), Some(3));
        assert_eq!(atom_index("-1"), Some(-1));
        assert_eq!(atom_index("String12"), Some(12));
        assert_eq!(atom_index("Interval$2"), Some(2));
        assert_eq!(atom_index("String"), None);
    }
}
