//! Rewritable statement model for sqlfront.
//!
//! A parse driver walks the lexer's token stream and assembles one of the
//! four DML statement kinds through the builder methods defined here. Every
//! `add_*`/`set_*` builder that creates a child node returns a `&mut` borrow
//! of that child, so the caller can keep configuring it in place. Rendering
//! back to SQL text lives in the `display` module via `fmt::Display`.

mod display;

use std::fmt;

use tracing::debug;

// ---------------------------------------------------------------------------
// Source spans
// ---------------------------------------------------------------------------

/// A byte-offset range into the original SQL source text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character (inclusive).
    pub start: u32,
    /// Byte offset one past the last character (exclusive).
    pub end: u32,
}

impl Span {
    /// Create a new span from start (inclusive) to end (exclusive) byte offsets.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Whether the span is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Append `item` and hand back a mutable borrow of the stored element.
fn push_mut<T>(items: &mut Vec<T>, item: T) -> &mut T {
    items.push(item);
    let last = items.len() - 1;
    &mut items[last]
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// The value category of a column or field, mirroring the lexer's value
/// token kinds (`int_val`, `real_val`, `text_val`, `placeholder`, `NULL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Real,
    Text,
    Placeholder,
    Null,
}

impl ValueKind {
    /// The token vocabulary name for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int_val",
            Self::Real => "real_val",
            Self::Text => "text_val",
            Self::Placeholder => "placeholder",
            Self::Null => "null",
        }
    }
}

/// A literal value carried by a column, field, or conditional operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Real(f64),
    /// Dequoted string content.
    Text(String),
    /// Placeholder text exactly as written (`%s`, `'%s'`, `%d`).
    Placeholder(String),
    Null,
}

impl Literal {
    /// The value category of this literal.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Real(_) => ValueKind::Real,
            Self::Text(_) => ValueKind::Text,
            Self::Placeholder(_) => ValueKind::Placeholder,
            Self::Null => ValueKind::Null,
        }
    }
}

// ---------------------------------------------------------------------------
// Columns, fields, functions
// ---------------------------------------------------------------------------

/// A column reference, optionally carrying a value (INSERT/UPDATE).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub value: Option<Literal>,
    pub kind: Option<ValueKind>,
}

impl Column {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            kind: None,
        }
    }

    /// A column assigned `value`, with the kind taken from the literal.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: Literal) -> Self {
        let kind = value.kind();
        Self {
            name: name.into(),
            value: Some(value),
            kind: Some(kind),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn set_value(&mut self, value: Literal) -> &mut Self {
        self.value = Some(value);
        self
    }

    pub fn set_kind(&mut self, kind: ValueKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }
}

/// A column reference in a select list or conditional, optionally qualified
/// by a table and renamed by an alias.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub column: Column,
    pub table: Option<String>,
    pub alias: Option<String>,
}

impl Field {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            column: Column::new(name),
            table: None,
            alias: None,
        }
    }

    /// A field standing for a literal value (`1`, `'abc'`, `%s`, `NULL`).
    #[must_use]
    pub fn literal(value: Literal) -> Self {
        Self {
            column: Column::with_value(String::new(), value),
            table: None,
            alias: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.column.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.column.set_name(name);
        self
    }

    pub fn set_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn set_value(&mut self, value: Literal) -> &mut Self {
        self.column.set_value(value);
        self
    }

    pub fn set_kind(&mut self, kind: ValueKind) -> &mut Self {
        self.column.set_kind(kind);
        self
    }
}

/// A function call such as `count(DISTINCT id)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub field: Field,
    pub arguments: Vec<Expr>,
    pub distinct: bool,
}

impl Function {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            field: Field::new(name),
            arguments: Vec::new(),
            distinct: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.field.name()
    }

    /// Append an argument and return a handle to it.
    pub fn add_argument(&mut self, argument: impl Into<Expr>) -> &mut Expr {
        push_mut(&mut self.arguments, argument.into())
    }

    pub fn set_distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.field.set_alias(alias);
        self
    }
}

/// One entry of a select list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldItem {
    Field(Field),
    Function(Function),
}

impl FieldItem {
    /// The plain field part, for both variants.
    #[must_use]
    pub const fn field(&self) -> &Field {
        match self {
            Self::Field(field) => field,
            Self::Function(function) => &function.field,
        }
    }

    pub const fn field_mut(&mut self) -> &mut Field {
        match self {
            Self::Field(field) => field,
            Self::Function(function) => &mut function.field,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.field().name()
    }

    pub fn set_table(&mut self, table: impl Into<String>) -> &mut Self {
        self.field_mut().set_table(table);
        self
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.field_mut().set_alias(alias);
        self
    }

    pub fn set_kind(&mut self, kind: ValueKind) -> &mut Self {
        self.field_mut().set_kind(kind);
        self
    }

    pub const fn as_function_mut(&mut self) -> Option<&mut Function> {
        match self {
            Self::Function(function) => Some(function),
            Self::Field(_) => None,
        }
    }
}

impl From<&str> for FieldItem {
    fn from(name: &str) -> Self {
        Self::Field(Field::new(name))
    }
}

impl From<String> for FieldItem {
    fn from(name: String) -> Self {
        Self::Field(Field::new(name))
    }
}

impl From<Field> for FieldItem {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Function> for FieldItem {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

// ---------------------------------------------------------------------------
// Conditionals
// ---------------------------------------------------------------------------

/// An operand of a [`Conditional`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Field(Field),
    Function(Function),
    Conditional(Box<Conditional>),
    /// A nested `SELECT`, rendered in parentheses.
    Subselect(Box<Select>),
    /// The right-hand side of `IN (...)`.
    List(Vec<Field>),
}

impl Expr {
    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        matches!(self, Self::Conditional(_))
    }

    #[must_use]
    pub fn as_conditional(&self) -> Option<&Conditional> {
        match self {
            Self::Conditional(cond) => Some(cond.as_ref()),
            _ => None,
        }
    }

    pub fn as_conditional_mut(&mut self) -> Option<&mut Conditional> {
        match self {
            Self::Conditional(cond) => Some(cond.as_mut()),
            _ => None,
        }
    }
}

impl From<Field> for Expr {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}

impl From<Function> for Expr {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl From<Conditional> for Expr {
    fn from(cond: Conditional) -> Self {
        Self::Conditional(Box::new(cond))
    }
}

impl From<Select> for Expr {
    fn from(select: Select) -> Self {
        Self::Subselect(Box::new(select))
    }
}

impl From<Vec<Field>> for Expr {
    fn from(fields: Vec<Field>) -> Self {
        Self::List(fields)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::Field(Field::new(name))
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Self::Field(Field::literal(value))
    }
}

/// A binary condition node: `arg1 OPERATOR [NOT] arg2`.
///
/// Compound conditions nest: `a = 1 AND b = 2` is a node with operator `and`
/// whose two arguments are themselves conditionals.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Conditional {
    pub arg1: Option<Expr>,
    pub arg2: Option<Expr>,
    pub operator: String,
    pub not: bool,
}

impl Conditional {
    #[must_use]
    pub fn new(arg1: impl Into<Expr>, operator: impl Into<String>, arg2: impl Into<Expr>) -> Self {
        Self {
            arg1: Some(arg1.into()),
            arg2: Some(arg2.into()),
            operator: operator.into(),
            not: false,
        }
    }

    pub fn set_arg1(&mut self, arg1: impl Into<Expr>) -> &mut Self {
        self.arg1 = Some(arg1.into());
        self
    }

    pub fn set_arg2(&mut self, arg2: impl Into<Expr>) -> &mut Self {
        self.arg2 = Some(arg2.into());
        self
    }

    pub fn set_operator(&mut self, operator: impl Into<String>) -> &mut Self {
        self.operator = operator.into();
        self
    }

    pub const fn set_not(&mut self, not: bool) -> &mut Self {
        self.not = not;
        self
    }

    /// Whether either argument is itself a conditional, i.e. this node groups
    /// other conditions.
    #[must_use]
    pub fn is_grouping(&self) -> bool {
        self.arg1.as_ref().is_some_and(Expr::is_conditional)
            || self.arg2.as_ref().is_some_and(Expr::is_conditional)
    }
}

/// Whether a join condition is `ON <cond>` or `USING (cols)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    On,
    Using,
}

/// The join condition attached to a joined [`Table`].
#[derive(Debug, Clone, PartialEq)]
pub struct JoinConditional {
    pub kind: JoinKind,
    pub condition: Conditional,
    /// Join columns; only populated for [`JoinKind::Using`].
    pub columns: Vec<String>,
}

impl JoinConditional {
    #[must_use]
    pub fn new(kind: JoinKind) -> Self {
        Self {
            kind,
            condition: Conditional::default(),
            columns: Vec::new(),
        }
    }

    /// Add a `USING` column. Ignored for `ON` conditions.
    pub fn add_column(&mut self, name: impl Into<String>) -> &mut Self {
        let name = name.into();
        if self.kind == JoinKind::Using {
            self.columns.push(name);
        } else {
            debug!(column = %name, "join column ignored for ON condition");
        }
        self
    }

    pub const fn condition_mut(&mut self) -> &mut Conditional {
        &mut self.condition
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// A table reference, possibly joined to the tables before it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub alias: Option<String>,
    /// Lowercased join keyword(s), e.g. `left outer join`.
    pub join: Option<String>,
    pub join_conditional: Option<JoinConditional>,
}

impl Table {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            join: None,
            join_conditional: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Set the alias, replacing any previous one.
    pub fn set_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    /// Set the join keyword(s); stored lowercased.
    pub fn set_join(&mut self, join: &str) -> &mut Self {
        self.join = Some(join.to_lowercase());
        self
    }

    /// Create the join condition, replacing any previous one.
    pub fn set_join_condition(&mut self, kind: JoinKind) -> &mut JoinConditional {
        self.join_conditional.insert(JoinConditional::new(kind))
    }
}

// ---------------------------------------------------------------------------
// Clauses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupByClause {
    pub columns: Vec<String>,
}

impl GroupByClause {
    pub fn add_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.columns.push(name.into());
        self
    }
}

/// Sort direction of an `ORDER BY` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Parse a canonical direction word (`asc`/`desc`, any case).
    #[must_use]
    pub fn from_canonical(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if word.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub row_count: u64,
    /// Zero means no offset.
    pub offset: u64,
}

/// A bound-parameter marker recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub text: String,
}

/// `SELECT DISTINCT` or `SELECT ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetIdentifier {
    Distinct,
    All,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

/// The command keyword of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Select,
    Insert,
    Update,
    Delete,
}

impl Command {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// Builders shared by every statement kind.
pub trait StatementNode {
    fn command(&self) -> Command;
    fn tables(&self) -> &[Table];
    fn tables_mut(&mut self) -> &mut Vec<Table>;
    fn placeholders(&self) -> &[Placeholder];
    fn placeholders_mut(&mut self) -> &mut Vec<Placeholder>;

    /// Append a table and return a handle for alias/join configuration.
    fn add_table(&mut self, name: impl Into<String>) -> &mut Table {
        push_mut(self.tables_mut(), Table::new(name))
    }

    /// Record a placeholder seen in the statement.
    fn add_placeholder(&mut self, text: impl Into<String>) -> &mut Placeholder {
        push_mut(
            self.placeholders_mut(),
            Placeholder { text: text.into() },
        )
    }

    fn num_placeholders(&self) -> usize {
        self.placeholders().len()
    }
}

macro_rules! impl_statement_node {
    ($ty:ty, $command:expr) => {
        impl StatementNode for $ty {
            fn command(&self) -> Command {
                $command
            }

            fn tables(&self) -> &[Table] {
                &self.tables
            }

            fn tables_mut(&mut self) -> &mut Vec<Table> {
                &mut self.tables
            }

            fn placeholders(&self) -> &[Placeholder] {
                &self.placeholders
            }

            fn placeholders_mut(&mut self) -> &mut Vec<Placeholder> {
                &mut self.placeholders
            }
        }
    };
}

/// A `SELECT` statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Select {
    pub tables: Vec<Table>,
    pub placeholders: Vec<Placeholder>,
    pub set_identifier: Option<SetIdentifier>,
    pub fields: Vec<FieldItem>,
    pub conditional: Option<Conditional>,
    pub group_by: Option<GroupByClause>,
    pub having: Vec<Conditional>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<Limit>,
}

impl_statement_node!(Select, Command::Select);

impl Select {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn set_set_identifier(&mut self, set_identifier: SetIdentifier) -> &mut Self {
        self.set_identifier = Some(set_identifier);
        self
    }

    /// Append a select-list entry: a plain name, a [`Field`], or a
    /// [`Function`].
    pub fn add_field(&mut self, field: impl Into<FieldItem>) -> &mut FieldItem {
        push_mut(&mut self.fields, field.into())
    }

    /// Set the `WHERE` condition, replacing any previous one.
    pub fn set_conditional(&mut self, conditional: Conditional) -> &mut Conditional {
        self.conditional.insert(conditional)
    }

    /// Create the `GROUP BY` clause, replacing any previous one.
    pub fn add_group_by(&mut self) -> &mut GroupByClause {
        self.group_by.insert(GroupByClause::default())
    }

    /// Append an empty `HAVING` condition to be configured by the caller.
    pub fn add_having(&mut self) -> &mut Conditional {
        push_mut(&mut self.having, Conditional::default())
    }

    pub fn add_order_by(&mut self, column: impl Into<String>, direction: Direction) -> &mut OrderBy {
        push_mut(
            &mut self.order_by,
            OrderBy {
                column: column.into(),
                direction,
            },
        )
    }

    pub fn add_limit(&mut self, row_count: u64, offset: Option<u64>) -> &mut Limit {
        self.limit.insert(Limit {
            row_count,
            offset: offset.unwrap_or(0),
        })
    }
}

/// An `INSERT` statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Insert {
    pub tables: Vec<Table>,
    pub placeholders: Vec<Placeholder>,
    pub columns: Vec<Column>,
}

impl_statement_node!(Insert, Command::Insert);

impl Insert {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, column: Column) -> &mut Column {
        push_mut(&mut self.columns, column)
    }
}

/// An `UPDATE` statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Update {
    pub tables: Vec<Table>,
    pub placeholders: Vec<Placeholder>,
    pub columns: Vec<Column>,
    pub conditional: Option<Conditional>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<Limit>,
}

impl_statement_node!(Update, Command::Update);

impl Update {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `SET name = value` assignment.
    pub fn add_column(
        &mut self,
        name: impl Into<String>,
        value: Option<Literal>,
        kind: Option<ValueKind>,
    ) -> &mut Column {
        let column = push_mut(&mut self.columns, Column::new(name));
        if let Some(value) = value {
            column.set_value(value);
        }
        if let Some(kind) = kind {
            column.set_kind(kind);
        }
        column
    }

    pub fn set_conditional(&mut self, conditional: Conditional) -> &mut Conditional {
        self.conditional.insert(conditional)
    }

    pub fn add_order_by(&mut self, column: impl Into<String>, direction: Direction) -> &mut OrderBy {
        push_mut(
            &mut self.order_by,
            OrderBy {
                column: column.into(),
                direction,
            },
        )
    }

    pub fn add_limit(&mut self, row_count: u64, offset: Option<u64>) -> &mut Limit {
        self.limit.insert(Limit {
            row_count,
            offset: offset.unwrap_or(0),
        })
    }
}

/// A `DELETE` statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Delete {
    pub tables: Vec<Table>,
    pub placeholders: Vec<Placeholder>,
    pub conditional: Option<Conditional>,
}

impl_statement_node!(Delete, Command::Delete);

impl Delete {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_conditional(&mut self, conditional: Conditional) -> &mut Conditional {
        self.conditional.insert(conditional)
    }
}

/// A single parsed DML statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
}

impl Statement {
    /// An empty statement of the given kind.
    #[must_use]
    pub fn empty(command: Command) -> Self {
        match command {
            Command::Select => Self::Select(Select::new()),
            Command::Insert => Self::Insert(Insert::new()),
            Command::Update => Self::Update(Update::new()),
            Command::Delete => Self::Delete(Delete::new()),
        }
    }

    pub const fn as_select_mut(&mut self) -> Option<&mut Select> {
        match self {
            Self::Select(select) => Some(select),
            _ => None,
        }
    }

    pub const fn as_insert_mut(&mut self) -> Option<&mut Insert> {
        match self {
            Self::Insert(insert) => Some(insert),
            _ => None,
        }
    }

    pub const fn as_update_mut(&mut self) -> Option<&mut Update> {
        match self {
            Self::Update(update) => Some(update),
            _ => None,
        }
    }

    pub const fn as_delete_mut(&mut self) -> Option<&mut Delete> {
        match self {
            Self::Delete(delete) => Some(delete),
            _ => None,
        }
    }
}

impl StatementNode for Statement {
    fn command(&self) -> Command {
        match self {
            Self::Select(_) => Command::Select,
            Self::Insert(_) => Command::Insert,
            Self::Update(_) => Command::Update,
            Self::Delete(_) => Command::Delete,
        }
    }

    fn tables(&self) -> &[Table] {
        match self {
            Self::Select(s) => &s.tables,
            Self::Insert(s) => &s.tables,
            Self::Update(s) => &s.tables,
            Self::Delete(s) => &s.tables,
        }
    }

    fn tables_mut(&mut self) -> &mut Vec<Table> {
        match self {
            Self::Select(s) => &mut s.tables,
            Self::Insert(s) => &mut s.tables,
            Self::Update(s) => &mut s.tables,
            Self::Delete(s) => &mut s.tables,
        }
    }

    fn placeholders(&self) -> &[Placeholder] {
        match self {
            Self::Select(s) => &s.placeholders,
            Self::Insert(s) => &s.placeholders,
            Self::Update(s) => &s.placeholders,
            Self::Delete(s) => &s.placeholders,
        }
    }

    fn placeholders_mut(&mut self) -> &mut Vec<Placeholder> {
        match self {
            Self::Select(s) => &mut s.placeholders,
            Self::Insert(s) => &mut s.placeholders,
            Self::Update(s) => &mut s.placeholders,
            Self::Delete(s) => &mut s.placeholders,
        }
    }
}

impl From<Select> for Statement {
    fn from(select: Select) -> Self {
        Self::Select(select)
    }
}

impl From<Insert> for Statement {
    fn from(insert: Insert) -> Self {
        Self::Insert(insert)
    }
}

impl From<Update> for Statement {
    fn from(update: Update) -> Self {
        Self::Update(update)
    }
}

impl From<Delete> for Statement {
    fn from(delete: Delete) -> Self {
        Self::Delete(delete)
    }
}
