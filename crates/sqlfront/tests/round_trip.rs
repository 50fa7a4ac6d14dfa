//! Lex, build, render, re-lex.
//!
//! Each case builds a statement by hand for a SQL source, renders it, and
//! checks that lexing the rendered text yields the same token stream as
//! lexing the source (keywords are lowercased by the lexer, whitespace lives
//! in `skipped`, so neither affects the comparison).

use proptest::prelude::*;
use sqlfront::{
    Column, Conditional, Delete, Dialect, Direction, Field, Function, Insert, JoinKind, Lexer,
    Literal, Select, SetIdentifier, Statement, StatementNode, TokenKind, TokenValue, Update,
    ValueKind,
};

// ===========================================================================
// Helpers
// ===========================================================================

fn stream(sql: &str) -> Vec<(TokenKind, TokenValue)> {
    let tokens = Lexer::tokenize(sql);
    assert!(
        tokens.iter().all(|t| !t.kind.is_invalid()),
        "invalid token in {sql:?}"
    );
    tokens
        .into_iter()
        .filter(|t| !t.is_end())
        .map(|t| (t.kind, t.value))
        .collect()
}

fn assert_round_trip(source: &str, statement: &impl ToString) {
    let rendered = statement.to_string();
    assert_eq!(
        stream(&rendered),
        stream(source),
        "rendered {rendered:?} does not re-lex like {source:?}"
    );
}

fn field(table: &str, name: &str) -> Field {
    let mut field = Field::new(name);
    field.set_table(table);
    field
}

fn function(name: &str, argument: &str) -> Function {
    let mut function = Function::new(name);
    function.add_argument(argument);
    function
}

// ===========================================================================
// 1. SELECT
// ===========================================================================

#[test]
fn select_simple() {
    let mut select = Select::new();
    select.add_field("a");
    select.add_field("b");
    select.add_table("t");
    select.set_conditional(Conditional::new("x", "=", Literal::Int(1)));

    assert_eq!(select.to_string(), "SELECT a, b FROM t WHERE x = 1");
    assert_round_trip("SELECT a, b FROM t WHERE x = 1", &select);
}

#[test]
fn select_lowercase_source_with_all_clauses() {
    let mut select = Select::new();
    select.set_set_identifier(SetIdentifier::Distinct);
    select.add_field("name").set_table("u").set_alias("n");
    let mut count = function("count", "id");
    count.set_distinct(true).set_alias("c");
    select.add_field(count);
    select.add_table("users").set_alias("u");
    select.set_conditional(Conditional::new(field("u", "age"), ">=", Literal::Int(18)));
    select.add_order_by("n", Direction::Desc);
    select.add_limit(10, Some(5));

    assert_round_trip(
        "select distinct u.name as n, count(distinct id) as c from users u \
         where u.age >= 18 order by n desc limit 10 offset 5",
        &select,
    );
}

#[test]
fn select_with_joins() {
    let mut select = Select::new();
    select.add_field("*");
    select.add_table("a");
    let b = select.add_table("b");
    b.set_alias("bb").set_join("LEFT JOIN");
    *b.set_join_condition(JoinKind::On).condition_mut() = Conditional::new("a.id", "=", "bb.id");
    select
        .add_table("c")
        .set_join("inner join")
        .set_join_condition(JoinKind::Using)
        .add_column("id")
        .add_column("k");
    select.add_table("d");

    let source = "SELECT * FROM a LEFT JOIN b bb ON a.id = bb.id INNER JOIN c USING (id, k), d";
    assert_eq!(select.to_string(), source);
    assert_round_trip(source, &select);
}

#[test]
fn select_grouped_conditionals_and_list() {
    let left = Conditional::new(
        Conditional::new("a", "=", Literal::Int(1)),
        "and",
        Conditional::new("b", "=", Literal::Text("x".to_owned())),
    );
    let right = Conditional::new(
        "c",
        "in",
        vec![
            Field::literal(Literal::Int(1)),
            Field::literal(Literal::Real(2.5)),
            Field::literal(Literal::Null),
        ],
    );

    let mut select = Select::new();
    select.add_field("a");
    select.add_table("t");
    select.set_conditional(Conditional::new(left, "or", right));

    assert_round_trip(
        "SELECT a FROM t WHERE (a = 1 AND b = 'x') OR c IN (1, 2.5, NULL)",
        &select,
    );
}

#[test]
fn select_not_with_subselect() {
    let mut banned = Select::new();
    banned.add_field("user_id");
    banned.add_table("bans");
    banned.set_conditional(Conditional::new(
        "reason",
        "like",
        Literal::Text("%spam%".to_owned()),
    ));

    let mut condition = Conditional::new("id", "in", banned);
    condition.set_not(true);

    let mut select = Select::new();
    select.add_field("name");
    select.add_table("users");
    select.set_conditional(condition);

    assert_round_trip(
        "SELECT name FROM users WHERE id IN NOT (SELECT user_id FROM bans WHERE reason LIKE '%spam%')",
        &select,
    );
}

#[test]
fn select_group_by_having() {
    let mut select = Select::new();
    select.add_field("dept");
    select.add_field(function("sum", "salary"));
    select.add_table("staff");
    select.add_group_by().add_column("dept");
    select
        .add_having()
        .set_arg1(function("sum", "salary"))
        .set_operator(">")
        .set_arg2(Literal::Int(1000));
    select
        .add_having()
        .set_arg1(function("count", "*"))
        .set_operator(">=")
        .set_arg2(Literal::Int(2));

    assert_round_trip(
        "SELECT dept, sum(salary) FROM staff GROUP BY dept HAVING sum(salary) > 1000 AND count(*) >= 2",
        &select,
    );
}

#[test]
fn select_without_tables_and_quoted_identifiers() {
    let mut literals = Select::new();
    literals.add_field(Field::literal(Literal::Int(1)));
    literals.add_field(Field::literal(Literal::Text("a".to_owned())));
    assert_eq!(literals.to_string(), "SELECT 1, 'a'");
    assert_round_trip("SELECT 1, 'a'", &literals);

    let mut quoted = Select::new();
    quoted.add_field("`order`");
    quoted.add_field("{col}");
    quoted.add_table("`t1`");
    assert_round_trip("SELECT `order`, {col} FROM `t1`", &quoted);
}

// ===========================================================================
// 2. INSERT / UPDATE / DELETE
// ===========================================================================

#[test]
fn insert_values_with_escapes_and_placeholder() {
    let mut insert = Insert::new();
    insert.add_table("t");
    insert.add_column(Column::with_value("a", Literal::Int(1)));
    insert.add_column(Column::with_value("b", Literal::Text("it's".to_owned())));
    insert.add_column(Column::new("c")).set_kind(ValueKind::Null);
    insert.add_column(Column::with_value("d", Literal::Placeholder("%s".to_owned())));
    insert.add_placeholder("%s");

    assert_eq!(
        insert.to_string(),
        r"INSERT INTO t (a, b, c, d) VALUES (1, 'it\'s', NULL, %s)"
    );
    assert_round_trip(r"insert into t (a, b, c, d) values (1, 'it\'s', null, %s)", &insert);
    assert_eq!(insert.num_placeholders(), 1);
}

#[test]
fn update_with_negative_real_and_null() {
    let mut update = Update::new();
    update.add_table("accounts");
    update.add_column("balance", Some(Literal::Real(-12.5)), None);
    update.add_column("note", Some(Literal::Text("ok".to_owned())), Some(ValueKind::Text));
    update.add_column("flag", None, Some(ValueKind::Null));
    update.set_conditional(Conditional::new(
        "id",
        "=",
        Literal::Placeholder("%d".to_owned()),
    ));
    update.add_order_by("id", Direction::Asc);
    update.add_limit(1, None);

    assert_round_trip(
        "UPDATE accounts SET balance = -12.5, note = 'ok', flag = NULL \
         WHERE id = %d ORDER BY id ASC LIMIT 1",
        &update,
    );
}

#[test]
fn update_text_ending_in_percent_s_stays_text() {
    let mut update = Update::new();
    update.add_table("t");
    update.add_column("a", Some(Literal::Text("rate%s".to_owned())), None);

    let rendered = update.to_string();
    assert_eq!(rendered, r"UPDATE t SET a = 'rate%\s'");
    let value = Lexer::tokenize(&rendered).swap_remove(5);
    assert_eq!(value.kind, TokenKind::TextLiteral);
    assert_eq!(value.value, TokenValue::Text("rate%s".to_owned()));
}

#[test]
fn real_overflow_never_reaches_the_tree() {
    let tokens = Lexer::tokenize("UPDATE t SET a = 1.5e+999");
    assert!(tokens[5].kind.is_invalid());
    assert_eq!(
        sqlfront::check_lexical("UPDATE t SET a = 1.5e+999")
            .expect_err("overflowing real")
            .offset(),
        Some(17)
    );
}

#[test]
fn delete_with_or() {
    let mut delete = Delete::new();
    delete.add_table("sessions");
    delete.set_conditional(Conditional::new(
        Conditional::new("expires", "<", Literal::Int(1_700_000_000)),
        "or",
        Conditional::new("expires", "is", Literal::Null),
    ));

    assert_round_trip(
        "DELETE FROM sessions WHERE expires < 1700000000 OR expires IS NULL",
        &delete,
    );
}

#[test]
fn statement_enum_renders_like_variant() {
    let mut delete = Delete::new();
    delete.add_table("t");
    let rendered = delete.to_string();
    let statement = Statement::from(delete);
    assert_eq!(statement.to_string(), rendered);
    assert_eq!(statement.tables().len(), 1);
}

// ===========================================================================
// 3. DRIVING THE LEXER WITH PUSH-BACK
// ===========================================================================

/// Minimal driver for `SELECT cols FROM table [WHERE col op value]`.
fn drive_select(sql: &str) -> Select {
    let dialect = Dialect::new();
    let mut lexer = Lexer::with_lookahead(sql, 2);
    let mut select = Select::new();

    let first = lexer.lex().expect("command");
    assert!(first.kind.is_keyword("select"));

    loop {
        let column = lexer.lex().expect("column");
        select.add_field(column.value.to_string());
        let next = lexer.lex().expect("separator");
        if next.kind != TokenKind::Punctuation(',') {
            lexer.push_back();
            break;
        }
    }

    assert!(lexer.lex().expect("from").kind.is_keyword("from"));
    let table = lexer.lex().expect("table");
    select.add_table(table.value.to_string());

    let next = lexer.lex().expect("where or end");
    if next.kind.is_keyword("where") {
        let column = lexer.lex().expect("column");
        let operator = lexer.lex().expect("operator");
        let value = lexer.lex().expect("value");
        assert!(dialect.is_value_kind(&value.kind));
        let literal = match (&value.kind, &value.value) {
            (TokenKind::IntLiteral, TokenValue::Int(n)) => Literal::Int(*n),
            (TokenKind::RealLiteral, TokenValue::Real(v)) => Literal::Real(*v),
            (TokenKind::TextLiteral, TokenValue::Text(s)) => Literal::Text(s.clone()),
            (TokenKind::Placeholder, TokenValue::Text(s)) => {
                select.add_placeholder(s.clone());
                Literal::Placeholder(s.clone())
            }
            _ => Literal::Null,
        };
        select.set_conditional(Conditional::new(
            column.value.to_string().as_str(),
            operator.value.to_string(),
            literal,
        ));
    } else {
        lexer.push_back();
    }
    assert!(lexer.lex().is_some_and(|t| t.is_end()));
    select
}

#[test]
fn driver_builds_statement_from_tokens() {
    let source = "select a, b from t where a = %s";
    let select = drive_select(source);
    assert_eq!(select.to_string(), "SELECT a, b FROM t WHERE a = %s");
    assert_eq!(select.num_placeholders(), 1);
    assert_round_trip(source, &select);

    let select = drive_select("SELECT x FROM y");
    assert_eq!(select.to_string(), "SELECT x FROM y");
}

#[test]
fn driver_handles_null_and_strings() {
    let select = drive_select("SELECT a FROM t WHERE b IS null");
    assert_eq!(select.to_string(), "SELECT a FROM t WHERE b IS NULL");

    let select = drive_select("SELECT a FROM t WHERE b = 'q\\'t'");
    assert_eq!(select.to_string(), r"SELECT a FROM t WHERE b = 'q\'t'");
}

// ===========================================================================
// 4. PROPERTIES
// ===========================================================================

fn column_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}".prop_filter("must not be a dialect symbol", |name| {
        !Dialect::new().is_symbol(name)
    })
}

fn literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        any::<i64>().prop_map(Literal::Int),
        (-1.0e6_f64..1.0e6).prop_map(Literal::Real),
        prop_oneof![
            "\\PC{0,16}",
            "\\PC{0,8}%s",
        ]
        .prop_map(Literal::Text),
        Just(Literal::Placeholder("%s".to_owned())),
        Just(Literal::Null),
    ]
}

proptest! {
    #[test]
    fn prop_update_render_relexes_to_same_values(
        table in column_name(),
        assignments in proptest::collection::vec((column_name(), literal()), 1..6),
    ) {
        let mut update = Update::new();
        update.add_table(table.as_str());
        for (name, value) in &assignments {
            update.add_column(name.as_str(), Some(value.clone()), None);
        }
        let rendered = update.to_string();
        let tokens = Lexer::tokenize(&rendered);
        prop_assert!(tokens.iter().all(|t| !t.kind.is_invalid()), "{}", rendered);

        // `update t set` then `name = value` with commas between.
        let values: Vec<_> = tokens[3..]
            .chunks(4)
            .filter(|chunk| chunk.len() >= 3)
            .map(|chunk| chunk[2].clone())
            .collect();
        prop_assert_eq!(values.len(), assignments.len());
        for (token, (_, literal)) in values.iter().zip(&assignments) {
            match literal {
                Literal::Int(n) => prop_assert_eq!(&token.value, &TokenValue::Int(*n)),
                Literal::Real(v) => prop_assert_eq!(&token.value, &TokenValue::Real(*v)),
                Literal::Text(s) => {
                    prop_assert_eq!(&token.kind, &TokenKind::TextLiteral);
                    prop_assert_eq!(&token.value, &TokenValue::Text(s.clone()));
                }
                Literal::Placeholder(p) => {
                    prop_assert_eq!(&token.kind, &TokenKind::Placeholder);
                    prop_assert_eq!(&token.value, &TokenValue::Text(p.clone()));
                }
                Literal::Null => prop_assert!(token.kind.is_keyword("null")),
            }
        }
    }
}
