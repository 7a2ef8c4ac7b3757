//! Integration tests for the string helpers

use stencil::functions::strings::{fixlen, fixlenr, limit, mapto, sanitise, title, url_path};
use stencil::{FunctionRegistry, Value, values};

fn call(name: &str, args: &[Value]) -> Value {
    FunctionRegistry::with_builtins().call(name, args).unwrap()
}

fn text(name: &str, args: &[Value]) -> String {
    call(name, args).render()
}

#[test]
fn test_concat() {
    assert_eq!(text("concat", &values!["a", "b"]), "ab");
    assert_eq!(text("concat", &values!["x", 1, "y"]), "x1y");
    assert_eq!(text("concat", &values![]), "");
}

#[test]
fn test_replace() {
    assert_eq!(text("replace", &values!["aBcd", "B", "b"]), "abcd");
    assert_eq!(text("replace", &values!["a.a.a", ".", "-"]), "a-a-a");
}

#[test]
fn test_re_replace_all() {
    assert_eq!(
        text("reReplaceAll", &values!["\"", "\\\"", r#"ab"cd"ef"#]),
        r#"ab\"cd\"ef"#
    );
    assert_eq!(
        text("reReplaceAll", &values!["\"", "&quot;", r#"ab"cd"ef"#]),
        "ab&quot;cd&quot;ef"
    );
    assert_eq!(
        text("reReplaceAll", &values![r"(\d+)-(\d+)", "$2-$1", "12-34"]),
        "34-12"
    );
}

#[test]
fn test_re_replace_all_invalid_pattern() {
    let err = FunctionRegistry::with_builtins()
        .call("reReplaceAll", &values!["(", "", "x"])
        .unwrap_err();
    assert!(err.to_string().starts_with("invalid regular expression"));
}

#[test]
fn test_match() {
    assert_eq!(call("match", &values!["^a.c$", "abc"]), Value::from(true));
    assert_eq!(call("match", &values!["^a.c$", "abcd"]), Value::from(false));
}

#[test]
fn test_case_conversion() {
    assert_eq!(text("lower", &values!["HeLLo"]), "hello");
    assert_eq!(text("toLower", &values!["ÀB"]), "àb");
    assert_eq!(text("upper", &values!["hello"]), "HELLO");
    assert_eq!(text("toUpper", &values!["straße"]), "STRASSE");
}

#[test]
fn test_title() {
    assert_eq!(title("hello wide world"), "Hello Wide World");
    assert_eq!(title("o'neil is here"), "O'neil Is Here");
    assert_eq!(title("already UPPER"), "Already UPPER");
}

#[test]
fn test_escape() {
    assert_eq!(text("escape", &values![r#"say "hi""#]), r#"say \"hi\""#);
}

#[test]
fn test_explode() {
    assert_eq!(
        call("explode", &values!["1|2|3", "|"]),
        Value::sequence(["1", "2", "3"])
    );
    assert_eq!(call("explode", &values!["ab", ""]), Value::sequence(["a", "b"]));
}

#[test]
fn test_item() {
    assert_eq!(text("item", &values!["1234-22", "-", 0]), "1234");
    assert_eq!(text("item", &values!["1234-22", "-", 1]), "22");
    assert_eq!(text("item", &values!["1234-22", "-", 2]), "");
    assert_eq!(text("item", &values!["1234-22", "-", -1]), "");
}

#[test]
fn test_mapto() {
    let table = "1:OK|2:Not OK|3:Maybe";
    let mapped: Vec<String> = ["1", "2", "3"]
        .into_iter()
        .map(|item| text("mapto", &values![item, table, "|:"]))
        .collect();
    assert_eq!(mapped, vec!["OK", "Not OK", "Maybe"]);
    assert_eq!(text("mapto", &values!["a", "a:True|b:False", "|:"]), "True");
}

#[test]
fn test_mapto_fallbacks() {
    assert_eq!(mapto("asdf", "a:A|b:B|*:C", "|", ":"), "C");
    assert_eq!(mapto("asdf", "a:A|b:B", "|", ":"), "asdf");
    assert_eq!(mapto("a", "a:A|broken", "|", ":"), "");
}

#[test]
fn test_mapto_needs_two_separators() {
    let err = FunctionRegistry::with_builtins()
        .call("mapto", &values!["a", "a:A", "|"])
        .unwrap_err();
    assert!(err.to_string().contains("separators"));
}

#[test]
fn test_ifthen_and_elseifthen() {
    assert_eq!(text("ifthen", &values!["a", "b"]), "a");
    assert_eq!(text("ifthen", &values!["", "b"]), "b");
    assert_eq!(text("elseifthen", &values!["a", "b"]), "b");
    assert_eq!(text("elseifthen", &values!["", "b"]), "");
}

#[test]
fn test_url_path() {
    assert_eq!(url_path("Some Nice - URL"), "some-nice-url");
    assert_eq!(url_path("--Hello, World!--"), "hello-world");
    assert_eq!(text("url_path", &values!["Über Café"]), "ber-caf");
}

#[test]
fn test_sanitise() {
    assert_eq!(sanitise("My File.txt"), "my-file.txt");
    assert_eq!(sanitise("path/to/Résumé 2024.pdf"), "path-to-resume-2024.pdf");
    assert_eq!(sanitise("a & b = c"), "a-b-c");
    assert_eq!(text("sanitize", &values!["Hello!?"]), "hello");
}

#[test]
fn test_limit() {
    assert_eq!(text("limit", &values!["1234567890", 3]), "123");
    assert_eq!(text("limit", &values![1234, 3]), "1234");
    assert_eq!(text("limit", &values!["12", 3]), "12");
    assert_eq!(limit(&Value::from(12), 4), Value::from("12  "));
    assert_eq!(limit(&Value::from(1.5), 8), Value::from("1.5000  "));
}

#[test]
fn test_limit_counts_graphemes() {
    assert_eq!(limit(&Value::from("e\u{301}tude"), 2), Value::from("e\u{301}t"));
}

#[test]
fn test_fixlen() {
    assert_eq!(text("fixlen", &values![5, "A"]), "A    ");
    assert_eq!(text("fixlen", &values![5, "ABCDEFG"]), "ABCDE");
    assert_eq!(fixlen(5, &Value::from(42)), "00042");
    assert_eq!(fixlen(3, &Value::from(-7)), "-007");
    assert_eq!(fixlen(8, &Value::from(3.14159)), "3.1416  ");
    assert_eq!(fixlen(3, &Value::null()), "   ");
}

#[test]
fn test_fixlenr() {
    assert_eq!(fixlenr(5, &Value::from("A")), "    A");
    assert_eq!(fixlenr(2, &Value::from("ABC")), "AB");
    assert_eq!(fixlenr(8, &Value::from(2.5)), "  2.5000");
    assert_eq!(text("fixlenr", &values![4, 7]), "0007");
}

#[test]
fn test_fixlen_negative_length() {
    assert!(
        FunctionRegistry::with_builtins()
            .call("fixlen", &values![-1, "A"])
            .is_err()
    );
}

#[test]
fn test_empty() {
    assert_eq!(text("empty", &values!["1234567890"]), "1234567890");
    assert_eq!(text("empty", &values![""]), "");
    assert_eq!(call("empty", &values![3]), Value::from(3));
    assert_eq!(
        call("empty", &values![Value::sequence(["1", "2", "3"])]),
        Value::sequence(["1", "2", "3"])
    );
    assert_eq!(call("empty", &values![Value::null()]), Value::from(""));
}

#[test]
fn test_empty_collections() {
    let empty_map = Value::mapping(Vec::<(String, Value)>::new());
    let nested = Value::sequence([Value::empty_sequence()]);
    let c = call("empty", &values![empty_map]);
    assert_eq!(text("concat", &values!["x", c, "y"]), "xy");
    let d = call("empty", &values![nested]);
    assert_eq!(text("concat", &values!["x", d, "y"]), "xy");
}
