use js_compiler::args;
use js_compiler::output::coercion::to_value;
use js_compiler::output::json_serializer::JsonSerializer;
use js_compiler::output::output_ast as o;
use js_compiler::{CompilerError, Value};
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Bean {
        attr: String,
        nullattr: Option<String>,
        count: u32,
    }

    fn serialize(value: impl Into<Value>) -> String {
        JsonSerializer::new().serialize(&value.into()).unwrap()
    }

    #[test]
    fn should_serialize_nested_maps_in_insertion_order() {
        let value = Value::object([
            ("1", Value::from(2)),
            ("a", Value::from("b")),
            (
                "m",
                Value::object([("3", Value::from(4)), ("c", Value::from("d"))]),
            ),
        ]);
        assert_eq!(serialize(value), r#"{"1":2,"a":"b","m":{"3":4,"c":"d"}}"#);
    }

    #[test]
    fn should_splice_embedded_nodes_unquoted() {
        let value = Value::object([
            ("answer", Value::from(42)),
            (
                "fun",
                Value::from(
                    o::call("getAnswer", args!["to life the universe and everything"]).unwrap(),
                ),
            ),
            (
                "nested",
                Value::object([("literal", Value::from(o::Literal::string("foo")))]),
            ),
        ]);
        assert_eq!(
            serialize(value),
            r#"{"answer":42,"fun":getAnswer('to life the universe and everything'),"nested":{"literal":"foo"}}"#
        );
    }

    #[test]
    fn should_serialize_heterogeneous_arrays() {
        assert_eq!(
            serialize(vec![Value::from("answer"), Value::from(42), Value::Null]),
            r#"["answer",42,null]"#
        );
    }

    #[test]
    fn should_splice_embedded_statements() {
        let value = Value::Array(vec![Value::from(o::return_stmt(1))]);
        assert_eq!(serialize(value), "[return 1;]");
    }

    #[test]
    fn should_encode_embedded_literals_by_value() {
        let value = Value::Array(vec![
            Value::from(o::Literal::number(1.5)),
            Value::from(o::Literal::of_bool(true).clone()),
            Value::from(o::Literal::Null),
            Value::from(o::Literal::array(vec![1, 2])),
        ]);
        assert_eq!(serialize(value), "[1.5,true,null,[1,2]]");
    }

    #[test]
    fn should_escape_strings_and_keys_as_json() {
        let value = Value::object([("say \"hi\"", Value::from("it's\n"))]);
        assert_eq!(serialize(value), r#"{"say \"hi\"":"it's\n"}"#);
    }

    #[test]
    fn should_serialize_plain_structs_with_null_fields() {
        let bean = Bean {
            attr: "value".to_string(),
            nullattr: None,
            count: 3,
        };
        assert_eq!(
            serialize(to_value(&bean).unwrap()),
            r#"{"attr":"value","nullattr":null,"count":3}"#
        );
    }

    #[test]
    fn should_report_unrepresentable_values() {
        let mut map = BTreeMap::new();
        map.insert((1, 2), "pair");
        let err = to_value(&map).unwrap_err();
        assert!(matches!(err, CompilerError::Encoding { .. }));
    }

    #[test]
    fn should_propagate_render_failures_of_embedded_nodes() {
        let value = Value::object([(
            "broken",
            Value::from(o::TemplateExpr::new("${missing}")),
        )]);
        let err = JsonSerializer::new().serialize(&value).unwrap_err();
        assert!(matches!(err, CompilerError::UnresolvedVariable { .. }));
    }

    #[test]
    fn should_emit_placeholder_for_absent_value() {
        let serializer = JsonSerializer::new();
        assert_eq!(serializer.serialize_or_placeholder(None).unwrap(), "null");
        assert_eq!(
            serializer
                .serialize_or_placeholder(Some(&Value::from(vec![1])))
                .unwrap(),
            "[1]"
        );
    }
}
