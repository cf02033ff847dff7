// Integration tests for LeetCode test case lowering

use cppgen::codegen::{CodegenError, DeclarationOptions, IntVectorFormat};
use cppgen::{convert, Error, Target};
use pretty_assertions::assert_eq;

fn leetcode(text: &str, format: IntVectorFormat) -> String {
    let target = Target::LeetCode(DeclarationOptions {
        int_vector_format: format,
        ..DeclarationOptions::default()
    });
    convert(text, &target).expect("conversion failed")
}

#[test]
fn test_string_declaration() {
    assert_eq!(
        leetcode("s = \"abcabcbb\"", IntVectorFormat::Normal),
        "string s = \"abcabcbb\";\n"
    );
}

#[test]
fn test_vector_and_int_declarations() {
    assert_eq!(
        leetcode("nums = [2,7,11,15], target = 9", IntVectorFormat::Normal),
        "vector<int> nums = {2, 7, 11, 15};\nint target = 9;\n"
    );
}

#[test]
fn test_negative_int_declaration() {
    assert_eq!(leetcode("num = -7605", IntVectorFormat::Normal), "int num = -7605;\n");
}

#[test]
fn test_2d_vector_declaration() {
    assert_eq!(
        leetcode("edges = [[1,2],[1,3],[1,4],[3,4],[4,5]]", IntVectorFormat::Normal),
        "vector<vector<int>> edges = {{1, 2}, {1, 3}, {1, 4}, {3, 4}, {4, 5}};\n"
    );
}

#[test]
fn test_empty_vectors() {
    assert_eq!(leetcode("lists = []", IntVectorFormat::Normal), "vector<unknown> lists = {};\n");
    assert_eq!(
        leetcode("lists = [[]]", IntVectorFormat::Normal),
        "vector<vector<unknown>> lists = {{}};\n"
    );
}

#[test]
fn test_binary_tree() {
    let expected = "vector<TreeNode *> nodes_root(7, nullptr);\n\
                    nodes_root[6] = new TreeNode(9, nullptr, nullptr);\n\
                    nodes_root[5] = new TreeNode(6, nullptr, nullptr);\n\
                    nodes_root[4] = new TreeNode(3, nullptr, nullptr);\n\
                    nodes_root[3] = new TreeNode(1, nullptr, nullptr);\n\
                    nodes_root[2] = new TreeNode(7, nodes_root[5], nodes_root[6]);\n\
                    nodes_root[1] = new TreeNode(2, nodes_root[3], nodes_root[4]);\n\
                    nodes_root[0] = new TreeNode(4, nodes_root[1], nodes_root[2]);\n\
                    TreeNode *root = nodes_root[0];\n\
                    \n\
                    \n\
                    for (TreeNode *node : nodes_root) { // keep this block at the end\n    \
                    if (node != nullptr) delete node;\n\
                    }\n";
    assert_eq!(leetcode("root = [4,2,7,1,3,6,9]", IntVectorFormat::BinaryTree), expected);
}

#[test]
fn test_linked_list() {
    let expected = "vector<ListNode *> nodes_head(5, nullptr);\n\
                    nodes_head[4] = new ListNode(5);\n\
                    nodes_head[3] = new ListNode(4, nodes_head[4]);\n\
                    nodes_head[2] = new ListNode(3, nodes_head[3]);\n\
                    nodes_head[1] = new ListNode(2, nodes_head[2]);\n\
                    nodes_head[0] = new ListNode(1, nodes_head[1]);\n\
                    ListNode *head = nodes_head[0];\n\
                    \n\
                    \n\
                    for (ListNode *node : nodes_head) { // keep this block at the end\n    \
                    if (node != nullptr) delete node;\n\
                    }\n";
    assert_eq!(leetcode("head = [1,2,3,4,5]", IntVectorFormat::LinkedList), expected);
}

#[test]
fn test_two_trees_share_one_cleanup_section() {
    let out = leetcode("p = [1,2], q = [1,null,2]", IntVectorFormat::BinaryTree);
    let declarations_end = out.find("\n\n").expect("cleanup section missing");
    assert!(out[..declarations_end].contains("TreeNode *q = nodes_q[0];"));
    assert!(out[declarations_end..].contains("for (TreeNode *node : nodes_p)"));
    assert!(out[declarations_end..].contains("for (TreeNode *node : nodes_q)"));
    assert!(out.contains("nodes_q[0] = new TreeNode(1, nullptr, nodes_q[2]);\n"));
}

#[test]
fn test_class_method_calls() {
    let input = "[\"Bitset\", \"fix\", \"fix\", \"flip\", \"all\", \"unfix\", \"flip\", \"one\", \"unfix\", \"count\", \"toString\"]\n\
                 [[5], [3], [1], [], [], [0], [], [], [0], [], []]\n\
                 [null, null, null, null, false, null, null, true, null, 2, \"01010\"]";
    let expected = "Bitset obj(5);\n\
                    obj.fix(3);\n\
                    obj.fix(1);\n\
                    obj.flip();\n\
                    assert(obj.all() == false);\n\
                    obj.unfix(0);\n\
                    obj.flip();\n\
                    assert(obj.one() == true);\n\
                    obj.unfix(0);\n\
                    assert(obj.count() == 2);\n\
                    assert(obj.toString() == \"01010\");\n";
    assert_eq!(leetcode(input, IntVectorFormat::Normal), expected);
}

#[test]
fn test_class_method_length_mismatch_fails() {
    let input = "[\"Counter\", \"get\"] [[], []] [null]";
    let err = convert(input, &Target::default()).unwrap_err();
    assert!(
        matches!(err, Error::Codegen(CodegenError::SerializationInvariantViolation { .. })),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_append_call_uses_declared_names_in_order() {
    let target = Target::LeetCode(DeclarationOptions {
        append_call: true,
        method_name: "maxProfit".to_string(),
        ..DeclarationOptions::default()
    });
    let out = convert("prices = [7,1,5,3,6,4], fee = 2", &target).expect("conversion failed");
    assert_eq!(
        out,
        "vector<int> prices = {7, 1, 5, 3, 6, 4};\n\
         int fee = 2;\n\
         \n\
         Solution sol;\n\
         auto ans = sol.maxProfit(prices, fee);\n\
         dump(ans);"
    );
}

#[test]
fn test_append_call_comes_before_cleanup() {
    let target = Target::LeetCode(DeclarationOptions {
        append_call: true,
        int_vector_format: IntVectorFormat::LinkedList,
        method_name: "reverseList".to_string(),
    });
    let out = convert("head = [1,2]", &target).expect("conversion failed");
    let call = out.find("dump(ans);").expect("call missing");
    let cleanup = out.find("for (ListNode").expect("cleanup missing");
    assert!(call < cleanup);
    assert!(out.ends_with("dump(ans);\n\nfor (ListNode *node : nodes_head) { // keep this block at the end\n    if (node != nullptr) delete node;\n}\n"));
}

#[test]
fn test_parse_errors_surface() {
    let err = convert("nums = [1, 2", &Target::default()).unwrap_err();
    assert_eq!(err.to_string(), "missing ']' to close 'paren_sq'");
}
