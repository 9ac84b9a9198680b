//! End-to-end tests: source text through the lexer and parser.

use tez::{ast::ast::Node, ast::ast::NodeKind, parse_source, render_error};

const PROGRAM: &str = r#"
using std as s;

namespace geometry {
    struct Point {
        x : float;
        y : float;
    }

    func Point::length(self : ^Point) -> float {
        return s::sqrt(self->x * self->x + self->y * self->y);
    }
}

enum Direction { North, East = 90, South = 180, West = 270, }

func main() -> int {
    var p : ^geometry::Point = new geometry::Point;
    p->x = 3.0;
    p->y = 4.0;

    var total : int = 0;
    for var i : int = 0; i < 10; i += 1 {
        if i % 2 == 0 {
            continue;
        } else if i > 7 {
            break;
        }
        total += i;
    }

    let values : [int, 3] = [1, 2, 3];
    do {
        total -= values[0];
    } while total > 0;

    asm { "nop" }
    free p;
    return total as int;
}
"#;

#[test]
fn test_parse_complete_program() {
    let result = parse_source(PROGRAM.to_string(), Some("main.tez".to_string()));

    let errors: Vec<String> = result.errors().map(|e| e.to_string()).collect();
    assert!(!result.errors_reported(), "{:#?}", errors);

    let kinds: Vec<NodeKind> = result.file.iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Using,
            NodeKind::Namespace,
            NodeKind::Enum,
            NodeKind::FunctionDeclaration,
        ]
    );

    let Node::FunctionDeclaration(main) = &result.file.statements[3] else {
        panic!("expected main");
    };
    assert_eq!(main.body.statements.len(), 10);
}

#[test]
fn test_errors_from_both_phases_are_collected() {
    let source = "let a : int = 1 # 2;\nlet b : int = ;\nlet c : int = 3;\n";
    let result = parse_source(source.to_string(), Some("broken.tez".to_string()));

    assert_eq!(result.lexer_errors.len(), 1);
    assert_eq!(result.parser_errors.len(), 2);
    assert_eq!(result.file.statements.len(), 1);

    let Node::VariableDeclaration(decl) = &result.file.statements[0] else {
        panic!("expected a declaration");
    };
    assert_eq!(decl.name, "c");
}

#[test]
fn test_rendered_diagnostic_points_into_source() {
    let source = "func main() {\n    let a : int = ;\n}\n";
    let result = parse_source(source.to_string(), Some("main.tez".to_string()));

    assert_eq!(result.parser_errors.len(), 1);
    let rendered = render_error(&result.parser_errors[0], source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("Error: expected primary expression, got SEMICOLON"));
    assert_eq!(lines[1], "-> main.tez:2:19");
    assert_eq!(lines[3], "2 | let a : int = ;");
    assert_eq!(lines[4], "  | --------------^");
}

#[test]
fn test_unterminated_comment_stops_lexing() {
    let result = parse_source("let a : int = 1;\n/* open".to_string(), None);

    assert_eq!(result.lexer_errors.len(), 1);
    assert!(result.lexer_errors[0].is_fatal());
    assert!(!result.parser_errors_reported());
    assert_eq!(result.file.statements.len(), 1);
}

#[test]
fn test_extra_decimal_point_is_reported_once() {
    let result = parse_source("x = 1..2;\ny = 1.5.6;".to_string(), None);

    assert_eq!(result.lexer_errors.len(), 2);
    assert!(!result.parser_errors_reported());
    assert_eq!(result.file.statements.len(), 2);

    let Node::BinaryOperation(assign) = &result.file.statements[1] else {
        panic!("expected an assignment");
    };
    assert_eq!(*assign.right, Node::RealNumber(1.5));
}
