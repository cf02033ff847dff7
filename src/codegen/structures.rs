//! Pointer-structure and class-method lowering
//!
//! LeetCode encodes binary trees and linked lists as flat integer arrays and
//! "design a class" problems as three parallel arrays. The functions here turn
//! those encodings into C++ statements.

use super::errors::CodegenError;
use super::literals::NestedArray;

/// Statements that free heap-allocated nodes.
///
/// Collected while declarations are written and appended after all of them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupSection {
    text: String,
}

impl CleanupSection {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn push_delete_loop(&mut self, node_type: &str, array: &str) {
        self.text.push('\n');
        self.text.push_str(&format!(
            "for ({node_type} *node : {array}) {{ // keep this block at the end\n"
        ));
        self.text.push_str("    if (node != nullptr) delete node;\n");
        self.text.push_str("}\n");
    }
}

/// Build a binary tree from a level-order array with `null` holes.
///
/// Element `i` is the left child of element `(i - 1) / 2` when `i` is odd and
/// the right child of element `(i - 2) / 2` when `i` is even. Nodes are
/// created from the last index down so every child exists before its parent.
pub fn binary_tree(values: &[String], name: &str, cleanup: &mut CleanupSection) -> String {
    let len = values.len();
    let mut left = vec![None; len];
    let mut right = vec![None; len];
    for (i, value) in values.iter().enumerate() {
        if value == "null" {
            continue;
        }
        if i % 2 == 1 {
            left[(i - 1) / 2] = Some(i);
        } else if i >= 2 {
            right[(i - 2) / 2] = Some(i);
        }
    }

    let array = format!("nodes_{name}");
    let pointer = |slot: Option<usize>| match slot {
        Some(index) => format!("{array}[{index}]"),
        None => "nullptr".to_string(),
    };

    let mut out = format!("vector<TreeNode *> {array}({len}, nullptr);\n");
    for (i, value) in values.iter().enumerate().rev() {
        if value == "null" {
            continue;
        }
        out.push_str(&format!(
            "{array}[{i}] = new TreeNode({value}, {}, {});\n",
            pointer(left[i]),
            pointer(right[i])
        ));
    }
    out.push_str(&format!("TreeNode *{name} = {array}[0];\n"));

    cleanup.push_delete_loop("TreeNode", &array);
    out
}

/// Build a singly linked list, tail first, so each node can point at the
/// next one.
pub fn linked_list(values: &[String], name: &str, cleanup: &mut CleanupSection) -> String {
    let array = format!("nodes_{name}");
    let mut out = format!("vector<ListNode *> {array}({}, nullptr);\n", values.len());
    for (i, value) in values.iter().enumerate().rev() {
        if i + 1 == values.len() {
            out.push_str(&format!("{array}[{i}] = new ListNode({value});\n"));
        } else {
            out.push_str(&format!(
                "{array}[{i}] = new ListNode({value}, {array}[{}]);\n",
                i + 1
            ));
        }
    }
    out.push_str(&format!("ListNode *{name} = {array}[0];\n"));

    cleanup.push_delete_loop("ListNode", &array);
    out
}

/// Lower a class-method test: construct the object from the first entry,
/// then call each later method, asserting its return value unless it is
/// `null`.
pub fn class_method_calls(
    methods: &[NestedArray],
    arguments: &[NestedArray],
    returns: &[NestedArray],
) -> Result<String, CodegenError> {
    if methods.len() != arguments.len() || methods.len() != returns.len() {
        return Err(CodegenError::invariant(format!(
            "class-method arrays differ in length: {} methods, {} argument lists, {} return values",
            methods.len(),
            arguments.len(),
            returns.len()
        )));
    }

    let mut out = String::new();
    for (i, ((method, args), expected)) in methods.iter().zip(arguments).zip(returns).enumerate() {
        let method = method.render(true);
        let args = args.render(false);
        if i == 0 {
            out.push_str(&format!("{method} obj({args});\n"));
        } else if expected.is_atom("null") {
            out.push_str(&format!("obj.{method}({args});\n"));
        } else {
            out.push_str(&format!(
                "assert(obj.{method}({args}) == {});\n",
                expected.render(false)
            ));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn item(atom: &str) -> NestedArray {
        NestedArray::Item(atom.to_string())
    }

    #[test]
    fn test_binary_tree_with_holes() {
        let mut cleanup = CleanupSection::default();
        let out = binary_tree(&strings(&["1", "null", "2", "3"]), "root", &mut cleanup);
        assert_eq!(
            out,
            "vector<TreeNode *> nodes_root(4, nullptr);\n\
             nodes_root[3] = new TreeNode(3, nullptr, nullptr);\n\
             nodes_root[2] = new TreeNode(2, nullptr, nullptr);\n\
             nodes_root[0] = new TreeNode(1, nullptr, nodes_root[2]);\n\
             TreeNode *root = nodes_root[0];\n"
        );
        assert!(cleanup.as_str().contains("for (TreeNode *node : nodes_root)"));
    }

    #[test]
    fn test_linked_list_single_node() {
        let mut cleanup = CleanupSection::default();
        let out = linked_list(&strings(&["7"]), "head", &mut cleanup);
        assert_eq!(
            out,
            "vector<ListNode *> nodes_head(1, nullptr);\n\
             nodes_head[0] = new ListNode(7);\n\
             ListNode *head = nodes_head[0];\n"
        );
        assert_eq!(
            cleanup.as_str(),
            "\nfor (ListNode *node : nodes_head) { // keep this block at the end\n    if (node != nullptr) delete node;\n}\n"
        );
    }

    #[test]
    fn test_class_method_calls() {
        let methods = vec![item("\"Counter\""), item("\"add\""), item("\"get\"")];
        let arguments = vec![
            NestedArray::List(vec![]),
            NestedArray::List(vec![item("1"), item("2")]),
            NestedArray::List(vec![]),
        ];
        let returns = vec![item("null"), item("null"), item("3")];
        let out = class_method_calls(&methods, &arguments, &returns).unwrap();
        assert_eq!(out, "Counter obj();\nobj.add(1, 2);\nassert(obj.get() == 3);\n");
    }

    #[test]
    fn test_class_method_length_mismatch() {
        let err = class_method_calls(&[item("\"A\"")], &[], &[item("null")]).unwrap_err();
        assert!(matches!(err, CodegenError::SerializationInvariantViolation { .. }));
        assert!(err.to_string().contains("1 methods, 0 argument lists"));
    }
}
