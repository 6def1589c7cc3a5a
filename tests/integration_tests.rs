//! Integration tests for the front end.
//!
//! These tests drive the public API end to end: source text through the
//! lexer and parser into a program, plus diagnostics for broken input.

use monkey_front::{
    ast::ast::{Expr, Stmt},
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
    render_error,
};

#[test]
fn test_parse_complete_program() {
    let source = r#"
        let five = 5;
        let ten = 10;

        let add = fn(x, y) {
            x + y;
        };

        let result = add(five, ten);
        let greeting = "hello";
        !-5 * 5 < 10 > 5;

        if (5 < 10) {
            return true;
        } else {
            return false;
        }

        10 == 10;
        10 != 9;
    "#;

    let (program, errors) = parse(source.to_string(), Some("program.mk".to_string()));

    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(program.len(), 9);
    assert!(matches!(program.statements[2], Stmt::Let(ref stmt) if matches!(stmt.value, Expr::Function(_))));
    assert_eq!(program.statements[3].to_string(), "let result = add(five, ten);");
    assert_eq!(program.statements[5].to_string(), "((((!(-5)) * 5) < 10) > 5)");
    assert_eq!(
        program.statements[6].to_string(),
        "if (5 < 10) { return true; } else { return false; }"
    );
}

#[test]
fn test_parser_built_from_lexer() {
    let lexer = Lexer::new("let x = 5;".to_string(), None);
    let (program, errors) = Parser::new(lexer).parse_program();

    assert!(errors.is_empty());
    assert_eq!(program.len(), 1);

    let Stmt::Let(stmt) = &program.statements[0] else {
        panic!("expected let statement");
    };
    assert_eq!(stmt.name.name, "x");
    assert_eq!(*stmt.span.start.1, "shell");
}

#[test]
fn test_tokens_and_parse_agree_on_illegal_input() {
    let source = "let x = 5 $ 3;";

    let tokens = tokenize(source.to_string(), None);
    assert_eq!(tokens[4].kind, TokenKind::Illegal);
    assert_eq!(tokens[4].literal, "$");

    let (program, errors) = parse(source.to_string(), None);
    assert_eq!(program.to_string(), "let x = 5;");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "no prefix parse function for ILLEGAL found");
}

#[test]
fn test_render_parse_errors() {
    let source = "let a = 1;\nlet b 2;\nlet = 3;\n";
    let (program, errors) = parse(source.to_string(), Some("broken.mk".to_string()));

    assert_eq!(program.to_string(), "let a = 1;");
    assert_eq!(errors.len(), 2);

    let rendered = errors
        .iter()
        .map(|error| render_error(error, source))
        .collect::<Vec<String>>();

    assert_eq!(
        rendered[0],
        "Error: expected next token to be ASSIGN, got INTEGER instead\n-> broken.mk\n  |\n2 | let b 2;\n  | ------^\n"
    );
    assert_eq!(
        rendered[1],
        "Error: expected next token to be IDENT, got ASSIGN instead\n-> broken.mk\n  |\n3 | let = 3;\n  | ----^\n"
    );
}

#[test]
fn test_render_unterminated_block() {
    let source = "let f = fn(x) {\n  x";
    let (_, errors) = parse(source.to_string(), None);

    assert_eq!(errors.len(), 1);
    assert!(render_error(&errors[0], source)
        .starts_with("Error: expected RBRACE, reached end of input (did you forget a closing `}`?)\n-> shell\n"));
}
