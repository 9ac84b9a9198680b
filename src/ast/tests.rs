use super::{
    ast::{Block, File, Node, NodeKind},
    expressions::{BinaryOperation, Cast},
    statements::{
        Enum, EnumMember, FunctionDeclaration, If, InlineAsm, Param, Return, Using,
        VariableDeclaration,
    },
    types::PointerType,
};

fn ident(name: &str) -> Box<Node> {
    Box::new(Node::Identifier(name.to_string()))
}

#[test]
fn test_kind_and_identifier_accessors() {
    assert_eq!(Node::Integer(1).kind(), NodeKind::Integer);
    assert_eq!(Node::Break.kind(), NodeKind::Break);
    assert_eq!(ident("x").as_identifier(), Some("x"));
    assert_eq!(Node::Null.as_identifier(), None);
}

#[test]
fn test_print_function_declaration() {
    let func = Node::FunctionDeclaration(FunctionDeclaration {
        owner: Some("Vec".to_string()),
        name: "push".to_string(),
        params: vec![
            Param {
                name: "self".to_string(),
                constant: true,
                ty: Node::Pointer(PointerType { pointee: ident("Vec") }),
            },
            Param {
                name: "n".to_string(),
                constant: false,
                ty: Node::Identifier("int".to_string()),
            },
        ],
        return_type: ident("void"),
        body: Block {
            statements: vec![Node::Return(Return { value: None })],
        },
    });

    assert_eq!(
        func.to_string(),
        "FunctionDeclaration Vec::push\n\
         \x20 Param self:\n\
         \x20   Pointer\n\
         \x20     Identifier Vec\n\
         \x20 Param var n:\n\
         \x20   Identifier int\n\
         \x20 returns:\n\
         \x20   Identifier void\n\
         \x20 body:\n\
         \x20   Return\n"
    );
}

#[test]
fn test_print_if_with_else_block() {
    let node = Node::If(If {
        condition: Box::new(Node::BinaryOperation(BinaryOperation {
            operator: "==".to_string(),
            left: ident("a"),
            right: Box::new(Node::Integer(1)),
        })),
        then_block: Block::default(),
        else_branch: Some(Box::new(Node::Block(Block {
            statements: vec![Node::Continue],
        }))),
    });

    assert_eq!(
        node.to_string(),
        "If\n\
         \x20 condition:\n\
         \x20   BinaryOperation ==\n\
         \x20     Identifier a\n\
         \x20     Integer 1\n\
         \x20 then:\n\
         \x20 else:\n\
         \x20   Block\n\
         \x20     Continue\n"
    );
}

#[test]
fn test_print_file_of_mixed_statements() {
    let file = File {
        statements: vec![
            Node::Using(Using {
                namespace: "std".to_string(),
                alias: None,
            }),
            Node::Enum(Enum {
                name: "E".to_string(),
                members: vec![
                    EnumMember {
                        name: "A".to_string(),
                        value: 0,
                    },
                    EnumMember {
                        name: "B".to_string(),
                        value: 7,
                    },
                ],
            }),
            Node::VariableDeclaration(VariableDeclaration {
                name: "f".to_string(),
                constant: false,
                ty: ident("float"),
                initializer: Some(Box::new(Node::Cast(Cast {
                    expr: Box::new(Node::RealNumber(2.0)),
                    to: ident("float"),
                }))),
            }),
            Node::InlineAsm(InlineAsm {
                operations: vec!["nop".to_string()],
            }),
        ],
    };

    assert_eq!(
        file.to_string(),
        "Using std\n\
         Enum E\n\
         \x20 A = 0\n\
         \x20 B = 7\n\
         VariableDeclaration var f\n\
         \x20 type:\n\
         \x20   Identifier float\n\
         \x20 initializer:\n\
         \x20   Cast\n\
         \x20     RealNumber 2.0\n\
         \x20     to:\n\
         \x20       Identifier float\n\
         InlineAsm\n\
         \x20 \"nop\"\n"
    );
}
