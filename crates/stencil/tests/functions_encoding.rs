//! Integration tests for JSON, XML and hashing helpers

use stencil::functions::encode::{json_escape, md5, xml_array, xml_encode};
use stencil::{FunctionError, FunctionRegistry, Value, values};

fn call(name: &str, args: &[Value]) -> Result<Value, FunctionError> {
    FunctionRegistry::with_builtins().call(name, args)
}

fn text(name: &str, args: &[Value]) -> String {
    call(name, args).unwrap().render()
}

fn products() -> Value {
    Value::sequence([
        Value::mapping([("z", Value::from(1)), ("p", Value::from("a & b"))]),
        Value::mapping([("z", Value::from(2)), ("p", Value::from("b"))]),
    ])
}

// =========================================================================
// JSON
// =========================================================================

#[test]
fn test_json_encode() {
    let v = Value::mapping([("analysis_code_15", r#"Carneval "Cool" Point"#)]);
    assert_eq!(
        text("json_encode", &values![v]),
        r#"{"analysis_code_15":"Carneval \"Cool\" Point"}"#
    );
}

#[test]
fn test_json_encode_whole_floats_as_integers() {
    assert_eq!(text("json_encode", &values![Value::sequence([1.0, 2.5])]), "[1,2.5]");
}

#[test]
fn test_json_decode() {
    let decoded = call(
        "json_decode",
        &values![r#"{"analysis_code_15":"Carneval \"Cool\" Point"}"#],
    )
    .unwrap();
    assert_eq!(decoded.get("analysis_code_15").render(), r#"Carneval "Cool" Point"#);
}

#[test]
fn test_tojson_is_json_decode() {
    let decoded = call("tojson", &values!["[1, 2]"]).unwrap();
    assert_eq!(decoded, Value::sequence([1, 2]));
}

#[test]
fn test_json_decode_error() {
    let err = call("json_decode", &values!["{broken"]).unwrap_err();
    assert!(matches!(err, FunctionError::Decode(_)));
}

#[test]
fn test_json_escape() {
    let escaped = json_escape(&Value::from("dog \"fish\"\n cat")).unwrap();
    assert_eq!(escaped, r#"dog \"fish\"\n cat"#);
    assert_eq!(json_escape(&Value::from(12)).unwrap(), "12");
}

#[test]
fn test_json_pretty() {
    let v = Value::mapping([
        ("name", Value::from("Tom")),
        ("tags", Value::sequence(["a", "b"])),
    ]);
    insta::assert_snapshot!(text("json", &values![v]), @r#"
    {
      "name": "Tom",
      "tags": [
        "a",
        "b"
      ]
    }
    "#);
}

// =========================================================================
// XML
// =========================================================================

#[test]
fn test_xml_encode_single_key_is_root() {
    let v = Value::mapping([("analysis_code_15", r#"Carneval "Cool" Point"#)]);
    assert_eq!(
        text("xml_encode", &values![v]),
        "<analysis_code_15>Carneval &quot;Cool&quot; Point</analysis_code_15>"
    );
}

#[test]
fn test_xml_encode_wraps_several_keys_in_doc() {
    let v = Value::mapping([("a", Value::from(1)), ("b", Value::null())]);
    assert_eq!(text("xml_encode", &values![v]), "<doc><a>1</a><b/></doc>");
}

#[test]
fn test_xml_encode_attributes_and_repeats() {
    let v = Value::mapping([(
        "list",
        Value::mapping([
            ("-id", Value::from("7")),
            ("item", Value::sequence(["x", "y"])),
        ]),
    )]);
    let fields = v.as_mapping().unwrap();
    assert_eq!(
        xml_encode(fields),
        r#"<list id="7"><item>x</item><item>y</item></list>"#
    );
}

#[test]
fn test_xml_encode_needs_a_mapping() {
    assert!(call("xml_encode", &values!["text"]).is_err());
}

#[test]
fn test_xml_array() {
    let items = products();
    let xml = text("xml_array", &values![items, "products", "product"]);
    assert_eq!(
        xml,
        "<?xml version=\"1.0\"?>\n<products>\n  <product>\n    <p>a &amp; b</p>\n    <z>1</z>\n  </product>\n  <product>\n    <p>b</p>\n    <z>2</z>\n  </product>\n</products>"
    );
}

#[test]
fn test_xml_array_nested() {
    let items = [Value::mapping([
        ("-sku", Value::from("A1")),
        ("name", Value::from("Lamp")),
        ("colors", Value::mapping([("color", Value::sequence(["red", "blue"]))])),
    ])];
    insta::assert_snapshot!(xml_array(&items, "catalog", "entry"), @r#"
    <?xml version="1.0"?>
    <catalog>
      <entry sku="A1">
        <colors>
          <color>red</color>
          <color>blue</color>
        </colors>
        <name>Lamp</name>
      </entry>
    </catalog>
    "#);
}

#[test]
fn test_xml_array_empty() {
    assert_eq!(xml_array(&[], "products", "product"), "<?xml version=\"1.0\"?>\n<products/>");
}

#[test]
fn test_xml_round_trip() {
    let v = Value::mapping([(
        "order",
        Value::mapping([
            ("-id", Value::from("9")),
            ("line", Value::sequence(["a", "b"])),
            ("note", Value::from("fragile & heavy")),
        ]),
    )]);
    let xml = xml_encode(v.as_mapping().unwrap());
    let decoded = call("xml_decode", &values![xml]).unwrap();
    assert_eq!(decoded, v);
}

#[test]
fn test_xml_decode() {
    let decoded = call(
        "xml_decode",
        &values![r#"<?xml version="1.0"?><analysis_code_15>Carneval &quot;Cool&quot; Point</analysis_code_15>"#],
    )
    .unwrap();
    assert_eq!(decoded.get("analysis_code_15").render(), r#"Carneval "Cool" Point"#);
}

// =========================================================================
// md5
// =========================================================================

#[test]
fn test_md5_hashes_json_encoding() {
    assert_eq!(md5(&Value::empty_sequence()).unwrap(), "d751713988987e9331980363e24189ce");
    assert_eq!(
        text("md5", &values![Value::mapping([("a", Value::from(1)), ("b", Value::from("x"))])]),
        "75a6ce4be04f5075316047b75a98d8eb"
    );
    assert_eq!(text("md5", &values!["hello"]), "5deaee1c1332199e5b5bc7c5e4f7f0c2");
}
