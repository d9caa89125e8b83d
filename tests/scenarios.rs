use fortsema::analysis::{analyze, analyze_with_options, declare_unit, Error, Options};
use fortsema::ast::typed::{BinOp, CompilationUnit, Expression as TypedExpression, Intent, Statement as TypedStatement};
use fortsema::ast::untyped::{Attribute, BinOpKind, Declaration, Expression, Item, Routine, Statement, TranslationUnit};
use fortsema::source_location::Location;
use fortsema::types::Type;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn at(line: usize, first: usize, last: usize) -> Location {
    Location::on_line(line, first, last)
}

fn decl(name: &str, type_name: &str, line: usize) -> Declaration {
    Declaration::new(name, type_name, at(line, 3, 20))
}

fn intent_in(line: usize) -> Attribute {
    Attribute::new("intent", ["in"], at(line, 12, 21))
}

fn var_name(unit: &CompilationUnit, expr: &TypedExpression) -> String {
    let id = expr.as_var().expect("expected a variable reference");
    unit.symbol(id).name().to_string()
}

/// subroutine foo(x)
///   integer, intent(in) :: x
///   integer :: y
///   y = x
/// end subroutine
fn scenario_a() -> TranslationUnit {
    TranslationUnit::new(vec![Item::Subroutine(
        Routine::new("foo", at(1, 1, 17))
            .with_parameter("x", at(1, 16, 16))
            .with_declaration(decl("x", "integer", 2).with_attribute(intent_in(2)))
            .with_declaration(decl("y", "integer", 3))
            .with_statement(Statement::assignment(
                Expression::name("y", at(4, 3, 3)),
                Expression::name("x", at(4, 7, 7)),
            )),
    )])
}

#[test]
fn scenario_a_declarations() {
    init_logging();
    let unit = declare_unit(&scenario_a()).unwrap();

    let x = unit.variable("foo", "x").unwrap();
    assert_eq!((x.type_, x.intent), (Type::integer(4), Intent::In));
    let y = unit.variable("foo", "y").unwrap();
    assert_eq!((y.type_, y.intent), (Type::integer(4), Intent::Local));

    let foo = unit.routine("foo").unwrap();
    assert_eq!(unit.scope(foo.scope).len(), 2);
    assert!(foo.body.is_empty());
    assert!(foo.parameters.is_empty());
}

#[test]
fn scenario_a_resolution() {
    init_logging();
    let unit = analyze(&scenario_a()).unwrap();
    let foo = unit.routine("foo").unwrap();

    assert_eq!(foo.body.len(), 1);
    let TypedStatement::Assignment { target, value, location } = &foo.body[0];
    assert_eq!(var_name(&unit, target), "y");
    assert_eq!(var_name(&unit, value), "x");
    assert_eq!(*location, at(4, 3, 7));

    match target {
        TypedExpression::Var { scope, type_, .. } => {
            assert_eq!(*scope, foo.scope);
            assert_eq!(*type_, Type::integer(4));
        }
        other => panic!("expected a variable, found {:?}", other),
    }

    let params: Vec<String> = foo.parameters.iter().map(|p| var_name(&unit, p)).collect();
    assert_eq!(params, vec!["x".to_string()]);
}

#[test]
fn scenario_b_undeclared_dummy_argument() {
    let tu = TranslationUnit::new(vec![Item::Subroutine(
        Routine::new("bar", at(1, 1, 17)).with_parameter("z", at(1, 16, 16)),
    )]);
    assert_eq!(
        analyze(&tu).unwrap_err(),
        Error::UndeclaredDummyArgument {
            name: "z".to_string(),
            location: at(1, 16, 16),
        }
    );
}

#[test]
fn scenario_c_unsupported_type() {
    let tu = TranslationUnit::new(vec![Item::Subroutine(
        Routine::new("baz", at(1, 1, 14)).with_declaration(decl("w", "complex", 2)),
    )]);
    assert_eq!(
        analyze(&tu).unwrap_err(),
        Error::UnsupportedType {
            type_name: "complex".to_string(),
            location: at(2, 3, 20),
        }
    );
}

#[test]
fn scenario_d_real_addition() {
    let tu = TranslationUnit::new(vec![Item::Subroutine(
        Routine::new("add", at(1, 1, 14))
            .with_declaration(decl("a", "real", 2))
            .with_declaration(decl("b", "real", 3))
            .with_statement(Statement::assignment(
                Expression::name("a", at(4, 3, 3)),
                Expression::binop(
                    Expression::name("b", at(4, 7, 7)),
                    BinOpKind::Add,
                    Expression::name("b", at(4, 11, 11)),
                ),
            )),
    )]);
    let unit = analyze(&tu).unwrap();
    let add = unit.routine("add").unwrap();

    let TypedStatement::Assignment { value, .. } = &add.body[0];
    match value {
        TypedExpression::BinaryOp { left, op, right, type_, .. } => {
            assert_eq!(var_name(&unit, left), "b");
            assert_eq!(*op, BinOp::Add);
            assert_eq!(var_name(&unit, right), "b");
            assert_eq!(*type_, Type::real(4));
        }
        other => panic!("expected a binary operation, found {:?}", other),
    }

    let b = unit.routine("add").and_then(|r| unit.arena().lookup(r.scope, "b"));
    assert_eq!(
        add.referenced_variables(),
        vec![unit.arena().lookup(add.scope, "a").unwrap(), b.unwrap(), b.unwrap()]
    );
}

#[test]
fn scenario_e_operand_type_mismatch() {
    let tu = TranslationUnit::new(vec![Item::Subroutine(
        Routine::new("mix", at(1, 1, 14))
            .with_declaration(decl("a", "integer", 2))
            .with_declaration(decl("b", "real", 3))
            .with_declaration(decl("c", "real", 4))
            .with_statement(Statement::assignment(
                Expression::name("c", at(5, 3, 3)),
                Expression::binop(
                    Expression::name("a", at(5, 7, 7)),
                    BinOpKind::Add,
                    Expression::name("b", at(5, 11, 11)),
                ),
            )),
    )]);
    assert_eq!(
        analyze(&tu).unwrap_err(),
        Error::OperandTypeMismatch {
            left: Type::integer(4),
            right: Type::real(4),
            location: at(5, 7, 11),
        }
    );
}

#[test]
fn scenario_f_duplicate_definition() {
    let tu = TranslationUnit::new(vec![
        Item::Subroutine(Routine::new("foo", at(1, 1, 14))),
        Item::Subroutine(Routine::new("foo", at(3, 1, 14))),
    ]);
    assert_eq!(
        analyze(&tu).unwrap_err(),
        Error::DuplicateDefinition {
            name: "foo".to_string(),
            location: at(3, 1, 14),
        }
    );
}

#[test]
fn duplicate_functions_are_rejected() {
    let tu = TranslationUnit::new(vec![
        Item::Function(Routine::new("f", at(1, 1, 10))),
        Item::Function(Routine::new("f", at(3, 1, 10))),
    ]);
    assert!(matches!(analyze(&tu), Err(Error::DuplicateDefinition { .. })));
}

#[test]
fn any_other_type_name_is_unsupported() {
    for type_name in ["complex", "logical", "character", "double precision", ""] {
        let tu = TranslationUnit::new(vec![Item::Subroutine(
            Routine::new("s", at(1, 1, 10)).with_declaration(decl("v", type_name, 2)),
        )]);
        assert_eq!(
            analyze(&tu).unwrap_err(),
            Error::UnsupportedType {
                type_name: type_name.to_string(),
                location: at(2, 3, 20),
            }
        );
    }
}

#[test]
fn any_other_intent_is_invalid() {
    for spec in ["foo", "inn", "in out", ""] {
        let attr = Attribute::new("intent", [spec], at(2, 12, 21));
        let tu = TranslationUnit::new(vec![Item::Subroutine(
            Routine::new("s", at(1, 1, 10)).with_declaration(decl("v", "real", 2).with_attribute(attr)),
        )]);
        assert_eq!(
            analyze(&tu).unwrap_err(),
            Error::InvalidIntentSpecifier {
                value: spec.to_string(),
                location: at(2, 12, 21),
            }
        );
    }
}

#[test]
fn function_bodies_use_the_return_variable() {
    init_logging();
    // integer function twice(n)
    //   integer, intent(in) :: n
    //   twice = n * 2
    // end function
    let tu = TranslationUnit::new(vec![
        Item::Function(
            Routine::new("twice", at(1, 1, 26))
                .with_parameter("n", at(1, 24, 24))
                .with_declaration(decl("n", "integer", 2).with_attribute(intent_in(2)))
                .with_statement(Statement::assignment(
                    Expression::name("twice", at(3, 3, 7)),
                    Expression::binop(
                        Expression::name("n", at(3, 11, 11)),
                        BinOpKind::Mul,
                        Expression::num(2, at(3, 15, 15)),
                    ),
                )),
        ),
        Item::Subroutine(Routine::new("other", at(5, 1, 16))),
    ]);
    let unit = analyze(&tu).unwrap();
    let twice = unit.routine("twice").unwrap();

    assert_eq!(twice.body.len(), 1);
    let TypedStatement::Assignment { target, .. } = &twice.body[0];
    assert_eq!(target.as_var(), twice.return_var().and_then(|e| e.as_var()));
    assert_eq!(target.type_(), Type::integer(8));

    let names: Vec<&str> = unit.routines().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["twice", "other"]);
}

#[test]
fn scopes_are_not_shared_between_routines() {
    let tu = TranslationUnit::new(vec![
        Item::Subroutine(Routine::new("one", at(1, 1, 10)).with_declaration(decl("a", "real", 2))),
        Item::Subroutine(
            Routine::new("two", at(4, 1, 10)).with_statement(Statement::assignment(
                Expression::name("a", at(5, 3, 3)),
                Expression::num(1, at(5, 7, 7)),
            )),
        ),
    ]);
    assert_eq!(
        analyze(&tu).unwrap_err(),
        Error::UndefinedSymbol {
            name: "a".to_string(),
            location: at(5, 3, 3),
        }
    );
}

#[test]
fn strict_assignment_checking() {
    let tu = TranslationUnit::new(vec![Item::Subroutine(
        Routine::new("s", at(1, 1, 10))
            .with_declaration(decl("r", "real", 2))
            .with_statement(Statement::assignment(
                Expression::name("r", at(3, 3, 3)),
                Expression::num(1, at(3, 7, 7)),
            )),
    )]);
    assert!(analyze(&tu).is_ok());
    assert_eq!(
        analyze_with_options(&tu, &Options::new().check_assignment_types(true)).unwrap_err(),
        Error::AssignmentTypeMismatch {
            target: Type::real(4),
            value: Type::integer(8),
            location: at(3, 3, 7),
        }
    );
}

#[test]
fn function_name_as_undeclared_dummy_argument() {
    // integer function f(f)
    // end function
    let tu = TranslationUnit::new(vec![Item::Function(
        Routine::new("f", at(1, 1, 21)).with_parameter("f", at(1, 20, 20)),
    )]);
    assert_eq!(
        analyze(&tu).unwrap_err(),
        Error::UndeclaredDummyArgument {
            name: "f".to_string(),
            location: at(1, 20, 20),
        }
    );
}
