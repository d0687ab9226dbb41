use js_compiler::output::output_ast as o;
use js_compiler::{CompilerError, Identifier, Literal, Number, Statement, Value};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_empty_identifier() {
        assert!(matches!(
            Identifier::new(""),
            Err(CompilerError::EmptyIdentifier)
        ));
        assert!(o::ident("").is_err());
        assert!(o::CallExpr::named("").is_err());
        assert!(o::DeclareVarStmt::new("").is_err());
        assert!(o::fn_expr(&["a", ""], o::raw_stmt("x")).is_err());
        assert!(o::chain().chain_name("").is_err());
    }

    #[test]
    fn should_compare_identifier_with_names() {
        let x = Identifier::new("x").unwrap();
        assert_eq!(x, "x");
        assert_eq!(x, "x".to_string());
        assert_eq!(x, Identifier::new("x").unwrap());
        assert_ne!(x, Identifier::new("y").unwrap());
        assert_eq!(x.to_string(), "x");
        assert_eq!(Identifier::try_from("x").unwrap(), x);
    }

    #[test]
    fn should_compare_literals_by_value() {
        assert_eq!(Literal::number(1), Literal::number(1));
        assert_eq!(Literal::number(1), Literal::number(1.0));
        assert_ne!(Literal::number(1), Literal::number(1.1));
        assert_eq!(Literal::string("a"), Literal::string("a"));
        assert_ne!(Literal::string("a"), Literal::number(1));
    }

    #[test]
    fn should_intern_boolean_literals() {
        assert!(std::ptr::eq(Literal::of_bool(true), &o::TRUE));
        assert!(std::ptr::eq(Literal::of_bool(false), &o::FALSE));
        assert_eq!(Literal::of_bool(true), &Literal::Boolean(true));
    }

    #[test]
    fn should_expose_literal_value() {
        assert_eq!(Literal::number(42).value(), Value::Number(Number::Int(42)));
        assert_eq!(Literal::Null.value(), Value::Null);
        assert_eq!(
            Literal::array(vec!["a"]).value(),
            Value::Array(vec![Value::from("a")])
        );
    }

    #[test]
    fn should_build_same_call_from_nodes_or_values() {
        let from_values = o::CallExpr::with_values("f", js_compiler::args!["a", 1]).unwrap();
        let from_nodes = o::CallExpr::new(
            Identifier::new("f").unwrap(),
            vec![o::literal("a"), o::literal(1)],
        );
        assert_eq!(from_values, from_nodes);
    }

    #[test]
    fn should_terminate_expressions_into_statements() {
        let stmt = Statement::of(o::raw("a()"));
        assert!(matches!(stmt, Statement::Expression(_)));

        let ret = o::return_stmt(1);
        assert_eq!(Statement::of(ret.clone()), ret);
    }

    #[test]
    fn should_wrap_function_body_as_statement() {
        let function = o::FunctionExpr::new(o::raw("go()"));
        assert!(matches!(*function.body, Statement::Expression(_)));
    }

    #[test]
    fn should_ensure_parameter_once() {
        let mut function = o::FunctionExpr::new(o::raw_stmt("x"));
        function
            .ensure_parameter(Identifier::new("a").unwrap())
            .ensure_parameter(Identifier::new("a").unwrap())
            .add_parameter(Identifier::new("b").unwrap());
        assert_eq!(function.params.len(), 2);
        assert!(function.has_parameter("a"));
        assert!(!function.has_parameter("c"));
    }

    #[test]
    fn should_mark_negated_if() {
        let stmt = o::IfStmt::new(o::raw("c"), o::raw("a()"));
        assert!(!stmt.negated);
        assert!(stmt.negate().negated);
        assert!(o::IfStmt::if_not(o::raw("c"), o::raw("a()")).negated);
        let with_else = o::IfStmt::if_not_else(o::raw("c"), o::raw("a()"), o::raw("b()"));
        assert!(with_else.negated);
        assert!(with_else.false_case.is_some());
    }

    #[test]
    fn should_chain_statements() {
        let seq = o::raw_stmt("a").then(o::raw("b")).then(o::raw_stmt("c"));
        assert_eq!(seq.len(), 3);
        assert_eq!(Statement::from(seq).to_js().unwrap(), "a;b;c;");
    }

    #[test]
    fn should_keep_void_return() {
        assert!(o::ReturnStatement::void().is_void());
        assert!(!o::ReturnStatement::new(Value::Null).is_void());
    }

    #[test]
    fn should_provide_keyword_constants() {
        assert_eq!(o::THIS.code, "this");
        assert_eq!(o::NULL.code, "null");
        assert_eq!(o::this_expr(), o::Expression::Raw(o::THIS.clone()));
    }
}
