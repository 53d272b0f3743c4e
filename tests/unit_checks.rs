// tests/unit_checks.rs
//! Detection checks over small Python snippets.

use std::path::Path;

use stylewarden_core::analysis::check_source;
use stylewarden_core::config::Config;
use stylewarden_core::types::Violation;

fn check(source: &str) -> Vec<Violation> {
    check_source(Path::new("test.py"), source, &Config::default()).unwrap()
}

fn codes(source: &str) -> Vec<String> {
    check(source).into_iter().map(|v| v.code).collect()
}

#[test]
fn test_blacklisted_variable_name() {
    let violations = check("data = 1\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "SW110");
    assert_eq!(violations[0].message, "Found wrong variable name 'data'");
    assert_eq!(violations[0].line, 1);
    assert_eq!(violations[0].column, 1);
    assert_eq!(violations[0].physical_line, "data = 1");
}

#[test]
fn test_too_short_variable_name() {
    assert_eq!(codes("x = 1\n"), vec!["SW111"]);
    // Underscore is the conventional throwaway and is exempt.
    assert!(codes("_ = call()\n").is_empty());
}

#[test]
fn test_private_name() {
    assert_eq!(codes("__secret = 1\n"), vec!["SW112"]);
    // Dunders are not private names.
    assert!(codes("__dunder__ = 1\n").iter().all(|c| c != "SW112"));
}

#[test]
fn test_module_metadata() {
    assert_eq!(codes("__all__ = ['api']\n"), vec!["SW120"]);
    // Only module-level assignments count as metadata.
    let nested = "class Config:\n    __all__ = ['api']\n";
    assert!(codes(nested).iter().all(|c| c != "SW120"));
}

#[test]
fn test_function_names_and_parameters() {
    let violations = check("def process(data, value):\n    pass\n");
    let codes: Vec<&str> = violations.iter().map(|v| v.code.as_str()).collect();
    assert_eq!(codes, vec!["SW110", "SW110"]);
    assert_eq!(violations[0].message, "Found wrong variable name 'data'");
    assert_eq!(violations[1].message, "Found wrong variable name 'value'");
}

#[test]
fn test_except_alias_and_import_alias() {
    let source = "try:\n    pass\nexcept ValueError as e:\n    pass\n";
    assert_eq!(codes(source), vec!["SW111"]);

    assert_eq!(codes("import os.path as data\n"), vec!["SW110"]);
}

#[test]
fn test_tuple_unpacking_targets() {
    let source = "alpha, data = call()\n";
    assert_eq!(codes(source), vec!["SW110"]);
}

#[test]
fn test_nested_function() {
    let source = "def outer():\n    def inner():\n        pass\n";
    assert_eq!(codes(source), vec!["SW200"]);

    // Whitelisted nested names are allowed.
    let whitelisted = "def outer():\n    def factory():\n        pass\n";
    assert!(codes(whitelisted).is_empty());
}

#[test]
fn test_nested_class() {
    let source = "class Outer:\n    class Inner:\n        pass\n";
    assert_eq!(codes(source), vec!["SW201"]);

    let whitelisted = "class Outer:\n    class Meta:\n        pass\n";
    assert!(codes(whitelisted).is_empty());
}

#[test]
fn test_too_many_arguments() {
    let source = "def run(p1, p2, p3, p4, p5, p6):\n    pass\n";
    let violations = check(source);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "SW203");
    assert_eq!(violations[0].message, "Found too many arguments in 'run' (6)");
}

#[test]
fn test_self_is_not_an_argument() {
    let source = "class Thing:\n    def run(self, p1, p2, p3, p4, p5):\n        pass\n";
    assert!(codes(source).is_empty());
}

#[test]
fn test_too_many_returns() {
    let source = "\
def pick(flag):
    return 1
    return 2
    return 3
    return 4
    return 5
    return 6
";
    assert_eq!(codes(source), vec!["SW205"]);
}

#[test]
fn test_returns_in_nested_function_count_separately() {
    let source = "\
def outer():
    return 1
    return 2
    return 3
    def helper():
        return 4
        return 5
        return 6
";
    // Neither function exceeds the limit on its own; only the nesting is
    // reported.
    assert_eq!(codes(source), vec!["SW200"]);
}

#[test]
fn test_too_deep_nesting() {
    let source = "\
def deep(flag):
    if flag:
        if flag:
            if flag:
                if flag:
                    if flag:
                        if flag:
                            pass
";
    assert_eq!(codes(source), vec!["SW207"]);
}

#[test]
fn test_duplicate_condition_elements() {
    for source in [
        "name or name\n",
        "call() or call()\n",
        "name and proxy or name\n",
        "(name and proxy) or name\n",
        "name and (proxy or name)\n",
        "name and name and name\n",
    ] {
        let violations = check(source);
        assert_eq!(violations.len(), 1, "{source:?} should be flagged once");
        assert_eq!(violations[0].code, "SW301");
    }
}

#[test]
fn test_regular_conditions_are_fine() {
    for source in [
        "some or other\n",
        "other and some\n",
        "first or second and third\n",
        "(first or second) and third\n",
        "very and complex and long and condition\n",
    ] {
        assert!(codes(source).is_empty(), "{source:?} should pass");
    }
}

#[test]
fn test_bad_number_suffixes() {
    let violations = check("print(0XFF)\n");
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].code, "SW310");
    assert_eq!(violations[0].message, "Found bad number suffix '0XFF'");

    assert!(codes("print(0xFF)\n").is_empty());
    assert!(codes("print(1.5e10)\n").is_empty());
    assert_eq!(codes("print(1.5E10)\n"), vec!["SW310"]);
}

#[test]
fn test_violations_are_ordered_by_location() {
    let source = "data = 0XFF\nvalue = 1\n";
    let violations = check(source);
    let lines: Vec<(usize, usize)> = violations.iter().map(|v| (v.line, v.column)).collect();
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
    assert_eq!(violations.len(), 3);
}
