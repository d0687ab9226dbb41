use js_compiler::args;
use js_compiler::output::js_joiner::{join, JsJoiner};
use js_compiler::output::output_ast as o;
use js_compiler::{Expression, Identifier, JavaScript, Statement};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_jquery_style_chain() {
        let links = vec![
            o::call("$", args![o::this_expr()]).unwrap(),
            o::call("parent", args![]).unwrap(),
            o::call("find", args!["#id"]).unwrap(),
            o::call("toggleClass", args!["foo", "bar"]).unwrap(),
        ];
        assert_eq!(
            join(&links, ".").unwrap(),
            "$(this).parent().find('#id').toggleClass('foo','bar')"
        );
    }

    #[test]
    fn should_join_absent_or_empty_list_to_empty_text() {
        let joiner: JsJoiner<'_, Expression> = JsJoiner::new(None, ",");
        assert_eq!(joiner.generate().unwrap(), "");
        let empty: Vec<Expression> = Vec::new();
        assert_eq!(join(&empty, ",").unwrap(), "");
    }

    #[test]
    fn should_not_add_delimiter_for_single_item() {
        let links = vec![o::raw("a")];
        assert_eq!(join(&links, ", ").unwrap(), "a");
    }

    #[test]
    fn should_join_identifiers() {
        let params = vec![
            Identifier::new("i").unwrap(),
            Identifier::new("item").unwrap(),
        ];
        assert_eq!(join(&params, ",").unwrap(), "i,item");
    }

    #[test]
    fn should_join_statements_and_mixed_roots() {
        let statements: Vec<Statement> = vec![o::raw_stmt("a()"), o::return_stmt(1)];
        assert_eq!(join(&statements, "").unwrap(), "a();return 1;");

        let scripts = vec![
            JavaScript::from(o::raw("x")),
            JavaScript::from(o::raw_stmt("y")),
        ];
        assert_eq!(join(&scripts, "\n").unwrap(), "x\ny;");
    }

    #[test]
    fn should_memoize_joined_text() {
        let links = vec![o::raw("a"), o::raw("b")];
        let joiner = JsJoiner::of(&links, ".");
        let first = joiner.generate().unwrap();
        assert_eq!(first, "a.b");
        assert!(std::ptr::eq(first, joiner.generate().unwrap()));
    }
}
