//! SQL rendering via `fmt::Display` for statement nodes.
//!
//! Output is a single line with uppercase keywords. Rendering a statement and
//! lexing the result again yields the same token stream as the source the
//! statement was built from, up to keyword case and whitespace.

#[allow(clippy::wildcard_imports)]
use crate::*;
use std::fmt;

// ---------------------------------------------------------------------------
// Helper: write a comma-separated list
// ---------------------------------------------------------------------------

fn comma_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn comma_list_fn<T>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    fmt_item: impl Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt_item(item, f)?;
    }
    Ok(())
}

/// Tables are comma-separated unless the next one is joined, in which case
/// its join keyword follows after a single space.
fn write_tables(f: &mut fmt::Formatter<'_>, tables: &[Table]) -> fmt::Result {
    for (i, table) in tables.iter().enumerate() {
        if i > 0 {
            f.write_str(if table.join.is_some() { " " } else { ", " })?;
        }
        write!(f, "{table}")?;
    }
    Ok(())
}

/// The value slot of an INSERT/UPDATE column: its literal, else `NULL`.
fn write_column_value(f: &mut fmt::Formatter<'_>, column: &Column) -> fmt::Result {
    match (&column.value, column.kind) {
        (_, Some(ValueKind::Null)) | (None, _) => f.write_str("NULL"),
        (Some(value), _) => write!(f, "{value}"),
    }
}

fn write_where(f: &mut fmt::Formatter<'_>, conditional: Option<&Conditional>) -> fmt::Result {
    match conditional {
        Some(cond) => write!(f, " WHERE {cond}"),
        None => Ok(()),
    }
}

fn write_order_by(f: &mut fmt::Formatter<'_>, order_by: &[OrderBy]) -> fmt::Result {
    if order_by.is_empty() {
        return Ok(());
    }
    f.write_str(" ORDER BY ")?;
    comma_list(f, order_by)
}

fn write_limit(f: &mut fmt::Formatter<'_>, limit: Option<&Limit>) -> fmt::Result {
    match limit {
        Some(limit) => write!(f, " {limit}"),
        None => Ok(()),
    }
}

/// Write a conditional operand, parenthesizing conditionals that group
/// other conditionals.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
    match expr {
        Expr::Conditional(cond) if cond.is_grouping() => write!(f, "({cond})"),
        _ => write!(f, "{expr}"),
    }
}

/// Write one of several `AND`-joined conditions. An `OR` or a grouping
/// conditional is parenthesized so `AND` cannot bind into it.
fn write_conjunct(f: &mut fmt::Formatter<'_>, cond: &Conditional) -> fmt::Result {
    if cond.is_grouping() || cond.operator.eq_ignore_ascii_case("or") {
        write!(f, "({cond})")
    } else {
        write!(f, "{cond}")
    }
}

// ---------------------------------------------------------------------------
// Literal
// ---------------------------------------------------------------------------

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(v) => {
                // Keep a decimal point so the value re-lexes as a real.
                if v.fract() == 0.0 && v.is_finite() {
                    write!(f, "{v:.1}")
                } else {
                    write!(f, "{v}")
                }
            }
            Self::Text(s) => {
                // `%s` right before the closing quote would read back as a
                // placeholder, so that `s` is escaped.
                let last = s.ends_with("%s").then(|| s.len() - 1);
                f.write_str("'")?;
                for (i, ch) in s.char_indices() {
                    if ch == '\'' || ch == '\\' || Some(i) == last {
                        f.write_str("\\")?;
                    }
                    write!(f, "{ch}")?;
                }
                f.write_str("'")
            }
            Self::Placeholder(text) => f.write_str(text),
            Self::Null => f.write_str("NULL"),
        }
    }
}

// ---------------------------------------------------------------------------
// Fields and functions
// ---------------------------------------------------------------------------

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref table) = self.table {
            write!(f, "{table}.")?;
        }
        match (&self.column.value, self.column.kind) {
            (_, Some(ValueKind::Null)) => f.write_str("NULL")?,
            (Some(value), _) => write!(f, "{value}")?,
            (None, _) => f.write_str(&self.column.name)?,
        }
        if let Some(ref alias) = self.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref table) = self.field.table {
            write!(f, "{table}.")?;
        }
        write!(f, "{}(", self.name())?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        comma_list(f, &self.arguments)?;
        f.write_str(")")?;
        if let Some(ref alias) = self.field.alias {
            write!(f, " AS {alias}")?;
        }
        Ok(())
    }
}

impl fmt::Display for FieldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Conditionals
// ---------------------------------------------------------------------------

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(field) => write!(f, "{field}"),
            Self::Function(function) => write!(f, "{function}"),
            Self::Conditional(cond) => write!(f, "{cond}"),
            Self::Subselect(select) => write!(f, "({select})"),
            Self::List(fields) => {
                f.write_str("(")?;
                comma_list(f, fields)?;
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Empty slots are skipped so a partially built node never renders
        // doubled or trailing spaces.
        let mut wrote = false;
        if let Some(ref arg1) = self.arg1 {
            write_operand(f, arg1)?;
            wrote = true;
        }
        if !self.operator.is_empty() {
            if wrote {
                f.write_str(" ")?;
            }
            f.write_str(&self.operator.to_uppercase())?;
            wrote = true;
        }
        if self.not {
            if wrote {
                f.write_str(" ")?;
            }
            f.write_str("NOT")?;
            wrote = true;
        }
        if let Some(ref arg2) = self.arg2 {
            if wrote {
                f.write_str(" ")?;
            }
            write_operand(f, arg2)?;
        }
        Ok(())
    }
}

impl fmt::Display for JoinConditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            JoinKind::On => write!(f, " ON {}", self.condition),
            JoinKind::Using => {
                f.write_str(" USING (")?;
                comma_list(f, &self.columns)?;
                f.write_str(")")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tables and clauses
// ---------------------------------------------------------------------------

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref join) = self.join {
            write!(f, "{} ", join.to_uppercase())?;
        }
        f.write_str(&self.name)?;
        if let Some(ref alias) = self.alias {
            write!(f, " {alias}")?;
        }
        if let Some(ref join_conditional) = self.join_conditional {
            write!(f, "{join_conditional}")?;
        }
        Ok(())
    }
}

impl fmt::Display for GroupByClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        comma_list(f, &self.columns)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

impl fmt::Display for OrderBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.direction)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LIMIT {}", self.row_count)?;
        if self.offset != 0 {
            write!(f, " OFFSET {}", self.offset)?;
        }
        Ok(())
    }
}

impl fmt::Display for SetIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distinct => f.write_str("DISTINCT"),
            Self::All => f.write_str("ALL"),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        if let Some(set_identifier) = self.set_identifier {
            write!(f, " {set_identifier}")?;
        }
        if !self.fields.is_empty() {
            f.write_str(" ")?;
            comma_list(f, &self.fields)?;
        }
        if !self.tables.is_empty() {
            f.write_str(" FROM ")?;
            write_tables(f, &self.tables)?;
        }
        write_where(f, self.conditional.as_ref())?;
        if let Some(ref group_by) = self.group_by {
            if !group_by.columns.is_empty() {
                write!(f, " GROUP BY {group_by}")?;
            }
        }
        if !self.having.is_empty() {
            f.write_str(" HAVING ")?;
            if let [cond] = self.having.as_slice() {
                write!(f, "{cond}")?;
            } else {
                for (i, cond) in self.having.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    write_conjunct(f, cond)?;
                }
            }
        }
        write_order_by(f, &self.order_by)?;
        write_limit(f, self.limit.as_ref())
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("INSERT INTO ")?;
        write_tables(f, &self.tables)?;
        if self.columns.is_empty() {
            return Ok(());
        }
        f.write_str(" (")?;
        comma_list_fn(f, &self.columns, |column, f| f.write_str(&column.name))?;
        f.write_str(") VALUES (")?;
        comma_list_fn(f, &self.columns, |column, f| write_column_value(f, column))?;
        f.write_str(")")
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("UPDATE ")?;
        write_tables(f, &self.tables)?;
        if !self.columns.is_empty() {
            f.write_str(" SET ")?;
            comma_list_fn(f, &self.columns, |column, f| {
                write!(f, "{} = ", column.name)?;
                write_column_value(f, column)
            })?;
        }
        write_where(f, self.conditional.as_ref())?;
        write_order_by(f, &self.order_by)?;
        write_limit(f, self.limit.as_ref())
    }
}

impl fmt::Display for Delete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DELETE FROM ")?;
        write_tables(f, &self.tables)?;
        write_where(f, self.conditional.as_ref())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => write!(f, "{s}"),
            Self::Insert(s) => write!(f, "{s}"),
            Self::Update(s) => write!(f, "{s}"),
            Self::Delete(s) => write!(f, "{s}"),
        }
    }
}
